use quarry_core::schema::{FieldDescriptor, LogicalType};

/// How [`Formatter::format_type`](super::Formatter::format_type) renders
/// nullability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeMode {
    /// `NULL` / `NOT NULL`, for column definitions.
    #[default]
    Create,

    /// `DROP NOT NULL` / `SET NOT NULL`, for `ALTER COLUMN`.
    Alter,

    /// The bare type.
    Bare,
}

pub(super) fn format_type(field: &FieldDescriptor, mode: TypeMode) -> String {
    let ty = match &field.ty {
        LogicalType::Boolean => "boolean".to_string(),
        LogicalType::Byte | LogicalType::Short => "smallint".to_string(),
        LogicalType::Number | LogicalType::Float => "real".to_string(),
        // SERIAL columns are implicitly NOT NULL
        LogicalType::Counter => return "SERIAL".to_string(),
        LogicalType::Currency | LogicalType::Decimal => format!(
            "decimal({},{})",
            field.size.unwrap_or(19),
            field.scale.unwrap_or(4)
        ),
        LogicalType::Date => "date".to_string(),
        LogicalType::DateTime => "timestamp".to_string(),
        LogicalType::Time => "time".to_string(),
        LogicalType::Integer => "int".to_string(),
        LogicalType::Duration => format!("varchar({})", field.size.unwrap_or(48)),
        LogicalType::Url | LogicalType::Text => match field.size {
            Some(size) => format!("varchar({size})"),
            None => "varchar".to_string(),
        },
        LogicalType::Note => match field.size {
            Some(size) => format!("varchar({size})"),
            None => "text".to_string(),
        },
        // bytea has no length modifier
        LogicalType::Image | LogicalType::Binary => "bytea".to_string(),
        LogicalType::Guid => "uuid".to_string(),
        LogicalType::Json => "json".to_string(),
        LogicalType::Other(_) => "integer".to_string(),
    };

    match (mode, field.is_nullable()) {
        (TypeMode::Create, true) => format!("{ty} NULL"),
        (TypeMode::Create, false) => format!("{ty} NOT NULL"),
        (TypeMode::Alter, true) => format!("{ty} DROP NOT NULL"),
        (TypeMode::Alter, false) => format!("{ty} SET NOT NULL"),
        (TypeMode::Bare, _) => ty,
    }
}
