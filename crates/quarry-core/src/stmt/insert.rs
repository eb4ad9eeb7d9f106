use super::Value;

use indexmap::IndexMap;

/// `INSERT INTO target (...) VALUES (...)` for a single object.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub into: String,
    pub values: IndexMap<String, Value>,
}

impl Insert {
    pub fn new(into: impl Into<String>) -> Insert {
        Insert {
            into: into.into(),
            values: IndexMap::new(),
        }
    }

    pub fn value(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(column.into(), value.into());
        self
    }
}
