use super::{QueryExpression, Statement};

/// `CREATE VIEW name AS <select>`
#[derive(Debug, Clone, PartialEq)]
pub struct CreateView {
    pub name: String,
    pub query: QueryExpression,
}

impl Statement {
    pub fn create_view(name: impl Into<String>, query: QueryExpression) -> Self {
        CreateView {
            name: name.into(),
            query,
        }
        .into()
    }
}

impl From<CreateView> for Statement {
    fn from(value: CreateView) -> Self {
        Self::CreateView(value)
    }
}
