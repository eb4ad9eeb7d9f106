use serde::{Deserialize, Serialize};
use std::fmt;

/// The database-agnostic type of a field.
///
/// Names follow the data model's type vocabulary (`"Text"`, `"DateTime"`,
/// `"Counter"`, ...). Names the adapter does not know are kept in
/// [`LogicalType::Other`] and mapped to the fallback column type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LogicalType {
    Boolean,
    Byte,
    Short,
    Number,
    Float,
    Counter,
    Currency,
    Decimal,
    Date,
    DateTime,
    Time,
    Integer,
    Duration,
    Url,
    Text,
    Note,
    Image,
    Binary,
    Guid,
    Json,
    Other(String),
}

impl LogicalType {
    pub fn as_str(&self) -> &str {
        match self {
            LogicalType::Boolean => "Boolean",
            LogicalType::Byte => "Byte",
            LogicalType::Short => "Short",
            LogicalType::Number => "Number",
            LogicalType::Float => "Float",
            LogicalType::Counter => "Counter",
            LogicalType::Currency => "Currency",
            LogicalType::Decimal => "Decimal",
            LogicalType::Date => "Date",
            LogicalType::DateTime => "DateTime",
            LogicalType::Time => "Time",
            LogicalType::Integer => "Integer",
            LogicalType::Duration => "Duration",
            LogicalType::Url => "URL",
            LogicalType::Text => "Text",
            LogicalType::Note => "Note",
            LogicalType::Image => "Image",
            LogicalType::Binary => "Binary",
            LogicalType::Guid => "Guid",
            LogicalType::Json => "Json",
            LogicalType::Other(name) => name,
        }
    }
}

impl From<&str> for LogicalType {
    fn from(value: &str) -> Self {
        match value {
            "Boolean" => LogicalType::Boolean,
            "Byte" => LogicalType::Byte,
            "Short" => LogicalType::Short,
            "Number" => LogicalType::Number,
            "Float" => LogicalType::Float,
            "Counter" => LogicalType::Counter,
            "Currency" => LogicalType::Currency,
            "Decimal" => LogicalType::Decimal,
            "Date" => LogicalType::Date,
            "DateTime" => LogicalType::DateTime,
            "Time" => LogicalType::Time,
            "Integer" => LogicalType::Integer,
            "Duration" => LogicalType::Duration,
            "URL" => LogicalType::Url,
            "Text" => LogicalType::Text,
            "Note" => LogicalType::Note,
            "Image" => LogicalType::Image,
            "Binary" => LogicalType::Binary,
            "Guid" => LogicalType::Guid,
            "Json" => LogicalType::Json,
            other => LogicalType::Other(other.to_string()),
        }
    }
}

impl From<String> for LogicalType {
    fn from(value: String) -> Self {
        LogicalType::from(&value[..])
    }
}

impl From<LogicalType> for String {
    fn from(value: LogicalType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
