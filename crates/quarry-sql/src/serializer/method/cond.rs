use super::{arg, Context};
use crate::stmt::Expr;

use quarry_core::{Error, Result};

/// `cond(if, then, else)`. The condition is either a query, whose filter is
/// used, or a comparison or logical expression.
pub(super) fn cond(cx: &Context<'_>, args: &[Expr]) -> Result<String> {
    let condition = match arg("cond", args, 0)? {
        Expr::Query(query) => match &query.filter {
            Some(filter) => cx.with_collection(query.collection()).escape(filter)?,
            None => String::new(),
        },
        expr if expr.is_filter() => cx.escape(expr)?,
        _ => {
            return Err(Error::invalid_statement(
                "`cond` expects a query or a comparison expression as its condition",
            ))
        }
    };

    if condition.is_empty() {
        return Err(Error::invalid_statement("`cond` condition is empty"));
    }

    let then = cx.escape(arg("cond", args, 1)?)?;
    let otherwise = cx.escape(arg("cond", args, 2)?)?;
    Ok(format!(
        "(CASE {condition} WHEN TRUE THEN {then} ELSE {otherwise} END)"
    ))
}
