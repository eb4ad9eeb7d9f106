use super::{Expr, ExprField, QueryExpression, SelectField};

/// JSON extraction and construction.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprJson {
    /// Extracts text from a JSON column. The first two segments of the path
    /// name the container column (`collection.column`), the rest is the key
    /// path inside the document.
    Get(String),

    /// Builds a JSON object from named expressions.
    Object(Vec<SelectField>),

    /// Aggregates rows into a JSON array. The argument must be an
    /// [`ExprJson::Object`].
    GroupArray(Box<Expr>),

    /// Builds a JSON array.
    Array(JsonArray),
}

/// The argument of a `jsonArray` projection.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonArray {
    /// A column that already holds an array.
    Field(ExprField),

    /// A select expression compiled to a correlated scalar subquery.
    Query(Box<QueryExpression>),

    /// A literal list of values or expressions.
    Values(Vec<Expr>),
}

impl Expr {
    pub fn json_get(path: impl Into<String>) -> Expr {
        ExprJson::Get(path.into()).into()
    }

    pub fn json_object(fields: impl IntoIterator<Item = SelectField>) -> Expr {
        ExprJson::Object(fields.into_iter().collect()).into()
    }

    pub fn json_group_array(object: impl Into<Expr>) -> Expr {
        ExprJson::GroupArray(Box::new(object.into())).into()
    }

    pub fn json_array(array: JsonArray) -> Expr {
        ExprJson::Array(array).into()
    }

    /// Returns true if this is a `jsonObject` expression.
    pub fn is_json_object(&self) -> bool {
        matches!(self, Expr::Json(ExprJson::Object(_)))
    }
}

impl From<ExprJson> for Expr {
    fn from(value: ExprJson) -> Self {
        Expr::Json(value)
    }
}

impl From<QueryExpression> for JsonArray {
    fn from(value: QueryExpression) -> Self {
        JsonArray::Query(Box::new(value))
    }
}

impl From<ExprField> for JsonArray {
    fn from(value: ExprField) -> Self {
        JsonArray::Field(value)
    }
}
