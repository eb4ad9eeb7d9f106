use super::LogicalType;

use serde::{Deserialize, Serialize};

/// Describes one column for DDL generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: LogicalType,

    /// Character length or numeric precision, depending on the type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,

    /// Numeric scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<u32>,

    /// `None` means the field did not say; primary keys are then `NOT NULL`,
    /// everything else nullable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nullable: Option<bool>,

    #[serde(default)]
    pub primary: bool,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, ty: impl Into<LogicalType>) -> FieldDescriptor {
        FieldDescriptor {
            name: name.into(),
            ty: ty.into(),
            size: None,
            scale: None,
            nullable: None,
            primary: false,
        }
    }

    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn scale(mut self, scale: u32) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = Some(nullable);
        self
    }

    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }

    /// Whether the column accepts NULL.
    pub fn is_nullable(&self) -> bool {
        self.nullable.unwrap_or(!self.primary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_from_model_json() {
        let field: FieldDescriptor = serde_json::from_str(
            r#"{ "name": "alternateName", "type": "Text", "size": 120, "nullable": false }"#,
        )
        .unwrap();

        assert_eq!(field.name, "alternateName");
        assert_eq!(field.ty, LogicalType::Text);
        assert_eq!(field.size, Some(120));
        assert!(!field.is_nullable());
        assert!(!field.primary);
    }
}
