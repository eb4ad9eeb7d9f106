use crate::stmt::Value;

/// A column as reported by `information_schema.columns`.
///
/// Rebuilt on every introspection call; never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnMetadata {
    pub name: String,
    pub ordinal: i64,

    /// The engine's type name, e.g. `character varying`.
    pub ty: String,

    /// Maximum character length, when the type has one.
    pub size: Option<i64>,
    pub nullable: bool,
    pub default_value: Option<Value>,
}
