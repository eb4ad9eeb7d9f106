use super::Statement;

use quarry_core::schema::DEFAULT_SCHEMA;

/// A statement to drop an index. Postgres index names are scoped to a schema,
/// not a table.
#[derive(Debug, Clone, PartialEq)]
pub struct DropIndex {
    pub schema: String,
    pub name: String,
}

impl Statement {
    pub fn drop_index(schema: Option<&str>, name: impl Into<String>) -> Self {
        DropIndex {
            schema: schema.unwrap_or(DEFAULT_SCHEMA).to_string(),
            name: name.into(),
        }
        .into()
    }
}

impl From<DropIndex> for Statement {
    fn from(value: DropIndex) -> Self {
        Self::DropIndex(value)
    }
}
