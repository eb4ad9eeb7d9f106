use super::{arg, Context};
use crate::{
    serializer::value::{escape, escape_pattern},
    stmt::{Expr, Value},
};

use quarry_core::Result;

/// 0-based position of `p1` in `p0`, `-1` when absent.
pub(super) fn index_of(cx: &Context<'_>, args: &[Expr]) -> Result<String> {
    let source = cx.escape(arg("indexOf", args, 0)?)?;
    let search = cx.escape(arg("indexOf", args, 1)?)?;
    Ok(format!("(POSITION({search} IN {source}::text)-1)"))
}

/// The pattern is a regular expression and is used as is.
pub(super) fn regex(cx: &Context<'_>, args: &[Expr]) -> Result<String> {
    let expr = cx.escape(arg("regex", args, 0)?)?;
    let pattern = match arg("regex", args, 1)? {
        Expr::Value(value) => format!("'{}'", escape(value, true)),
        pattern => cx.escape(pattern)?,
    };
    Ok(format!("({expr} ~ {pattern})"))
}

pub(super) fn starts_with(cx: &Context<'_>, args: &[Expr]) -> Result<String> {
    pattern_match(cx, "startsWith", args, "^", "", false)
}

pub(super) fn ends_with(cx: &Context<'_>, args: &[Expr]) -> Result<String> {
    pattern_match(cx, "endsWith", args, "", "$", true)
}

pub(super) fn contains(cx: &Context<'_>, args: &[Expr]) -> Result<String> {
    pattern_match(cx, "contains", args, "", "", true)
}

/// Matches `args[0]` against `args[1]` taken literally. An empty search
/// string yields an empty fragment when `skip_empty` is set.
fn pattern_match(
    cx: &Context<'_>,
    method: &str,
    args: &[Expr],
    prefix: &str,
    suffix: &str,
    skip_empty: bool,
) -> Result<String> {
    let expr = cx.escape(arg(method, args, 0)?)?;

    let pattern = match arg(method, args, 1)? {
        Expr::Value(value) => {
            let search = match value {
                Value::String(search) => search.clone(),
                value => escape(value, true),
            };
            if search.is_empty() && skip_empty {
                return Ok(String::new());
            }
            let pattern = format!("{prefix}{}{suffix}", escape_pattern(&search));
            escape(&Value::String(pattern), false)
        }
        search => {
            let mut parts = vec![];
            if !prefix.is_empty() {
                parts.push(escape(&Value::from(prefix), false));
            }
            parts.push(cx.escape(search)?);
            if !suffix.is_empty() {
                parts.push(escape(&Value::from(suffix), false));
            }
            format!("({})", parts.join(" || "))
        }
    };

    Ok(format!("({expr} ~ {pattern})"))
}

/// `pos` is 0-based; SQL counts from 1.
pub(super) fn substring(cx: &Context<'_>, args: &[Expr]) -> Result<String> {
    let expr = cx.escape(arg("substring", args, 0)?)?;
    let pos = arg("substring", args, 1)?;
    let pos = match pos.as_value().and_then(Value::to_i64) {
        Some(pos) => (pos + 1).to_string(),
        None => format!("({} + 1)", cx.escape(pos)?),
    };

    match args.get(2) {
        Some(length) => Ok(format!(
            "SUBSTRING({expr} FROM {pos} FOR {})",
            cx.escape(length)?
        )),
        None => Ok(format!("SUBSTRING({expr} FROM {pos})")),
    }
}

pub(super) fn length(cx: &Context<'_>, args: &[Expr]) -> Result<String> {
    Ok(format!("LENGTH({})", cx.escape(arg("length", args, 0)?)?))
}
