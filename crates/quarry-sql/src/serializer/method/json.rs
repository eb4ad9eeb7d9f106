use super::{arg, Context};
use crate::stmt::{Expr, ExprJson, JsonArray, SelectField, Value};

use quarry_core::{Error, Result};

pub(super) fn get(cx: &Context<'_>, args: &[Expr]) -> Result<String> {
    match arg("jsonGet", args, 0)? {
        Expr::Value(Value::String(path)) => cx.escape(&Expr::json_get(path.as_str())),
        Expr::Field(field) => {
            let path = match &field.collection {
                Some(collection) => format!("{collection}.{}", field.name),
                None => field.name.clone(),
            };
            cx.escape(&Expr::json_get(path))
        }
        _ => Err(Error::invalid_statement(
            "`jsonGet` expects a member path",
        )),
    }
}

/// Every argument becomes one entry of the object.
pub(super) fn object(cx: &Context<'_>, args: &[Expr]) -> Result<String> {
    let fields = args.iter().cloned().map(SelectField::new);
    cx.escape(&Expr::json_object(fields))
}

pub(super) fn group_array(cx: &Context<'_>, args: &[Expr]) -> Result<String> {
    match arg("jsonGroupArray", args, 0)? {
        expr @ Expr::Json(ExprJson::Object(_)) => {
            cx.escape(&Expr::json_group_array(expr.clone()))
        }
        _ => Err(Error::invalid_statement(
            "`jsonGroupArray` expects a `jsonObject` argument",
        )),
    }
}

pub(super) fn array(cx: &Context<'_>, args: &[Expr]) -> Result<String> {
    let array = match arg("jsonArray", args, 0)? {
        Expr::Field(field) => JsonArray::Field(field.clone()),
        Expr::Query(query) => JsonArray::Query(query.clone()),
        Expr::Value(Value::List(values)) => {
            JsonArray::Values(values.iter().cloned().map(Expr::Value).collect())
        }
        Expr::Json(ExprJson::Array(array)) => array.clone(),
        _ => {
            return Err(Error::invalid_statement(
                "`jsonArray` expects a field, a query or a list of values",
            ))
        }
    };
    cx.escape(&Expr::json_array(array))
}
