use super::{Expr, Value};

use indexmap::IndexMap;

/// `UPDATE target SET ... WHERE ...`
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub target: String,
    pub assignments: IndexMap<String, Value>,
    pub filter: Option<Expr>,
}

impl Update {
    pub fn new(target: impl Into<String>) -> Update {
        Update {
            target: target.into(),
            assignments: IndexMap::new(),
            filter: None,
        }
    }

    pub fn set(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.assignments.insert(column.into(), value.into());
        self
    }

    pub fn filter(mut self, expr: impl Into<Expr>) -> Self {
        self.filter = Some(expr.into());
        self
    }
}
