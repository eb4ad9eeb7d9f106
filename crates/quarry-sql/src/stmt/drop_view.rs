use super::Statement;

/// A statement to drop a view.
#[derive(Debug, Clone, PartialEq)]
pub struct DropView {
    pub name: String,

    /// Whether or not to add an `IF EXISTS` clause.
    pub if_exists: bool,
}

impl Statement {
    /// Drops a view if it exists.
    pub fn drop_view_if_exists(name: impl Into<String>) -> Self {
        DropView {
            name: name.into(),
            if_exists: true,
        }
        .into()
    }
}

impl From<DropView> for Statement {
    fn from(value: DropView) -> Self {
        Self::DropView(value)
    }
}
