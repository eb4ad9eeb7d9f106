/// Schema used when a name does not carry one.
pub const DEFAULT_SCHEMA: &str = "public";

/// A `schema.table` name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedName {
    pub schema: String,
    pub name: String,
}

impl QualifiedName {
    /// Splits `name` on the `schema.table` dot convention. Names without a
    /// dot land in [`DEFAULT_SCHEMA`].
    pub fn parse(name: &str) -> QualifiedName {
        match name.split_once('.') {
            Some((schema, table))
                if !schema.is_empty() && !table.is_empty() && !table.contains('.') =>
            {
                QualifiedName {
                    schema: schema.to_string(),
                    name: table.to_string(),
                }
            }
            _ => QualifiedName {
                schema: DEFAULT_SCHEMA.to_string(),
                name: name.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_with_and_without_schema() {
        let name = QualifiedName::parse("sales.orders");
        assert_eq!(name.schema, "sales");
        assert_eq!(name.name, "orders");

        let name = QualifiedName::parse("orders");
        assert_eq!(name.schema, "public");
        assert_eq!(name.name, "orders");
    }
}
