use super::Expr;

/// `DELETE FROM target WHERE ...`
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub from: String,
    pub filter: Option<Expr>,
}

impl Delete {
    pub fn new(from: impl Into<String>) -> Delete {
        Delete {
            from: from.into(),
            filter: None,
        }
    }

    pub fn filter(mut self, expr: impl Into<Expr>) -> Self {
        self.filter = Some(expr.into());
        self
    }
}
