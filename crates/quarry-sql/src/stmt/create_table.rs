use super::Statement;

use quarry_core::schema::FieldDescriptor;

/// A statement to create a SQL table.
///
/// Fields flagged `primary` form the table's primary key.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTable {
    /// Name of the table, optionally schema qualified.
    pub name: String,

    pub fields: Vec<FieldDescriptor>,

    /// Whether or not to add an `IF NOT EXISTS` clause.
    pub if_not_exists: bool,
}

impl Statement {
    pub fn create_table(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        CreateTable {
            name: name.into(),
            fields,
            if_not_exists: false,
        }
        .into()
    }

    pub fn create_table_if_not_exists(
        name: impl Into<String>,
        fields: Vec<FieldDescriptor>,
    ) -> Self {
        CreateTable {
            name: name.into(),
            fields,
            if_not_exists: true,
        }
        .into()
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
