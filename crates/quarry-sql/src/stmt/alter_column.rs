use super::Statement;

use quarry_core::schema::{FieldDescriptor, LogicalType};

/// A statement to alter an existing column.
///
/// Type and nullability changes are emitted as one `ALTER TABLE` with
/// comma-separated actions.
#[derive(Debug, Clone, PartialEq)]
pub struct AlterColumn {
    pub table: String,

    /// Name of the column being altered.
    pub column: String,

    pub changes: AlterColumnChanges,
}

/// The changes applied to a column. `None` leaves that aspect untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlterColumnChanges {
    /// New column type, taken from the descriptor's type, size and scale.
    pub ty: Option<FieldDescriptor>,

    pub nullable: Option<bool>,
}

impl AlterColumnChanges {
    pub fn is_empty(&self) -> bool {
        self.ty.is_none() && self.nullable.is_none()
    }
}

impl Statement {
    /// Changes a column to match `field` in both type and nullability.
    ///
    /// `SERIAL` is only valid at creation, so counter columns keep their
    /// type and only have nullability aligned.
    pub fn alter_column(table: impl Into<String>, field: FieldDescriptor) -> Self {
        let nullable = field.is_nullable();
        let column = field.name.clone();
        let ty = (field.ty != LogicalType::Counter).then_some(field);
        AlterColumn {
            table: table.into(),
            column,
            changes: AlterColumnChanges {
                ty,
                nullable: Some(nullable),
            },
        }
        .into()
    }
}

impl From<AlterColumn> for Statement {
    fn from(value: AlterColumn) -> Self {
        Self::AlterColumn(value)
    }
}
