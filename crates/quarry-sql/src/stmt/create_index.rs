use super::Statement;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateIndex {
    /// Name of the index
    pub name: String,

    /// Which table to index
    pub on: String,

    /// The columns to index, in key order
    pub columns: Vec<String>,
}

impl Statement {
    pub fn create_index<I, S>(name: impl Into<String>, on: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CreateIndex {
            name: name.into(),
            on: on.into(),
            columns: columns.into_iter().map(Into::into).collect(),
        }
        .into()
    }
}

impl From<CreateIndex> for Statement {
    fn from(value: CreateIndex) -> Self {
        Self::CreateIndex(value)
    }
}
