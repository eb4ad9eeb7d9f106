use crate::stmt::Expr;

use std::sync::Arc;

/// A member resolution subscriber.
pub type Resolver = Arc<dyn Fn(&mut ResolvingMember) + Send + Sync>;

/// Raised while formatting a field whose name is a dotted member path, e.g.
/// `address.streetAddress`.
///
/// A subscriber may set `resolved` to replace the member with another
/// expression, typically a `jsonGet` over a JSON column. When nobody does,
/// the path is quoted segment by segment.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvingMember {
    /// The collection the member was referenced from, if known.
    pub target: Option<String>,

    /// The dotted member path.
    pub member: String,

    /// The replacement expression.
    pub resolved: Option<Expr>,
}
