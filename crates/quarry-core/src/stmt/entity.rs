/// The collection a query reads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryEntity {
    pub name: String,
    pub alias: Option<String>,
}

impl QueryEntity {
    pub fn new(name: impl Into<String>) -> QueryEntity {
        QueryEntity {
            name: name.into(),
            alias: None,
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// The name fields use to refer to this entity.
    pub fn reference(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

impl From<&str> for QueryEntity {
    fn from(value: &str) -> Self {
        QueryEntity::new(value)
    }
}

impl From<String> for QueryEntity {
    fn from(value: String) -> Self {
        QueryEntity::new(value)
    }
}
