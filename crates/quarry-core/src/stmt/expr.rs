use super::*;

/// An expression node in a query tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value.
    Value(Value),

    /// A reference to a field, possibly through a dotted member path.
    Field(ExprField),

    /// A comparison between two expressions.
    Compare(ExprCompare),

    /// `AND`, `OR`, `NOT` and `NOR` over filter expressions.
    Logical(ExprLogical),

    /// A named function call resolved by the formatter's method table.
    Method(ExprMethod),

    /// JSON extraction and construction.
    Json(ExprJson),

    /// A nested query expression.
    Query(Box<QueryExpression>),
}

impl Expr {
    pub fn value(value: impl Into<Value>) -> Expr {
        Expr::Value(value.into())
    }

    pub fn null() -> Expr {
        Expr::Value(Value::Null)
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Expr::Value(_))
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Expr::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_field(&self) -> bool {
        matches!(self, Expr::Field(_))
    }

    /// Returns true for comparison and logical nodes, the shapes accepted
    /// wherever a filter is expected.
    pub fn is_filter(&self) -> bool {
        matches!(self, Expr::Compare(_) | Expr::Logical(_))
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Expr::Value(value)
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Expr::Value(value.into())
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Expr::Value(value.into())
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Expr::Value(value.into())
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Expr::Value(value.into())
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Expr::Value(value.into())
    }
}

impl From<String> for Expr {
    fn from(value: String) -> Self {
        Expr::Value(value.into())
    }
}

impl From<QueryExpression> for Expr {
    fn from(value: QueryExpression) -> Self {
        Expr::Query(Box::new(value))
    }
}
