mod delete;
pub use delete::Delete;

mod entity;
pub use entity::QueryEntity;

mod expr;
pub use expr::Expr;

mod expr_compare;
pub use expr_compare::{CompareOp, ExprCompare};

mod expr_field;
pub use expr_field::ExprField;

mod expr_json;
pub use expr_json::{ExprJson, JsonArray};

mod expr_logical;
pub use expr_logical::{ExprLogical, LogicalOp};

mod expr_method;
pub use expr_method::ExprMethod;

mod insert;
pub use insert::Insert;

mod join;
pub use join::{Join, JoinKind};

mod order_by;
pub use order_by::{Direction, OrderBy};

mod query;
pub use query::QueryExpression;

mod select_field;
pub use select_field::SelectField;

mod update;
pub use update::Update;

mod value;
pub use value::Value;

/// A data statement built by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Query(QueryExpression),
    Insert(Insert),
    Update(Update),
    Delete(Delete),
}

impl From<QueryExpression> for Statement {
    fn from(value: QueryExpression) -> Self {
        Statement::Query(value)
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Statement::Insert(value)
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Statement::Update(value)
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Statement::Delete(value)
    }
}
