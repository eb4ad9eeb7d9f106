/// An index as reported by the catalog: its name and indexed columns in
/// key order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexDescriptor {
    pub name: String,
    pub columns: Vec<String>,
}

impl IndexDescriptor {
    /// Returns `true` when the index covers exactly `columns`, in order.
    pub fn has_columns<S: AsRef<str>>(&self, columns: &[S]) -> bool {
        self.columns.len() == columns.len()
            && self
                .columns
                .iter()
                .zip(columns)
                .all(|(a, b)| a == b.as_ref())
    }
}
