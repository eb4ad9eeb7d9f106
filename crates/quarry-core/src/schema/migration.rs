use super::FieldDescriptor;

use serde::{Deserialize, Serialize};

/// A declarative description of a table's desired schema and its version.
///
/// A migration is applied at most once per `(applies_to, version)` pair.
/// Only additive changes are supported: `remove` and `change` must be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Migration {
    /// The target table.
    pub applies_to: String,

    /// The logical model name.
    #[serde(default)]
    pub model: Option<String>,

    /// Compared as a string against the highest recorded version.
    pub version: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub add: Vec<FieldDescriptor>,

    #[serde(default)]
    pub remove: Vec<FieldDescriptor>,

    #[serde(default)]
    pub change: Vec<FieldDescriptor>,

    /// Set by the adapter when the migration turned out to be applied already.
    #[serde(default)]
    pub updated: bool,
}

impl Migration {
    pub fn new(applies_to: impl Into<String>, version: impl Into<String>) -> Migration {
        Migration {
            applies_to: applies_to.into(),
            version: version.into(),
            ..Migration::default()
        }
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn add(mut self, field: FieldDescriptor) -> Self {
        self.add.push(field);
        self
    }
}
