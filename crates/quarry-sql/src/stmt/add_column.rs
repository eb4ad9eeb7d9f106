use super::Statement;

use quarry_core::schema::FieldDescriptor;

/// `ALTER TABLE ... ADD COLUMN ...`
#[derive(Debug, Clone, PartialEq)]
pub struct AddColumn {
    pub table: String,
    pub field: FieldDescriptor,
}

impl Statement {
    pub fn add_column(table: impl Into<String>, field: FieldDescriptor) -> Self {
        AddColumn {
            table: table.into(),
            field,
        }
        .into()
    }
}

impl From<AddColumn> for Statement {
    fn from(value: AddColumn) -> Self {
        Self::AddColumn(value)
    }
}
