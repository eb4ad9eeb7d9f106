use super::Expr;

/// A field reference.
///
/// `name` may be a dotted member path (`customer.address.streetAddress`).
/// The formatter offers such paths to member-resolution subscribers before
/// falling back to treating the first segment as a collection alias.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprField {
    /// The collection (table or alias) the field belongs to.
    pub collection: Option<String>,

    /// The field name or dotted member path.
    pub name: String,
}

impl ExprField {
    /// Returns `true` if the name walks into a nested member.
    pub fn is_member_path(&self) -> bool {
        self.name.contains('.')
    }

    /// The last segment of the field name.
    pub fn member_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }
}

impl Expr {
    /// A field of the query's own collection.
    pub fn field(name: impl Into<String>) -> Expr {
        ExprField {
            collection: None,
            name: name.into(),
        }
        .into()
    }

    /// A field of an explicit collection.
    pub fn column(collection: impl Into<String>, name: impl Into<String>) -> Expr {
        ExprField {
            collection: Some(collection.into()),
            name: name.into(),
        }
        .into()
    }
}

impl From<ExprField> for Expr {
    fn from(value: ExprField) -> Self {
        Expr::Field(value)
    }
}
