use crate::stmt::Value;

use std::sync::Arc;

/// A row returned by [`Connection::query`](super::Connection::query).
///
/// Column names are shared between all rows of one result set.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    columns: Arc<[String]>,
    values: Vec<Value>,
}

impl Row {
    pub fn new(columns: Arc<[String]>, values: Vec<Value>) -> Row {
        assert_eq!(
            columns.len(),
            values.len(),
            "row width must match the number of columns"
        );
        Row { columns, values }
    }

    /// Builds a row from `(column, value)` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Row
    where
        I: IntoIterator<Item = (S, Value)>,
        S: Into<String>,
    {
        let (columns, values): (Vec<String>, Vec<Value>) =
            pairs.into_iter().map(|(k, v)| (k.into(), v)).unzip();
        Row {
            columns: columns.into(),
            values,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the value of the named column.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .position(|name| name == column)
            .map(|index| &self.values[index])
    }

    /// Returns the value at the given position.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }
}
