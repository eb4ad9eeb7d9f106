use super::{arg, Context};
use crate::stmt::Expr;

use quarry_core::Result;

pub(super) fn count(cx: &Context<'_>, args: &[Expr]) -> Result<String> {
    match args.first() {
        Some(expr) => Ok(format!("COUNT({})", cx.escape(expr)?)),
        None => Ok("COUNT(*)".to_string()),
    }
}

/// A single-argument SQL function.
pub(super) fn function(
    name: &'static str,
) -> impl Fn(&Context<'_>, &[Expr]) -> Result<String> + Send + Sync + 'static {
    move |cx, args| Ok(format!("{name}({})", cx.escape(arg(name, args, 0)?)?))
}

/// A binary arithmetic operator.
pub(super) fn operator(
    op: &'static str,
) -> impl Fn(&Context<'_>, &[Expr]) -> Result<String> + Send + Sync + 'static {
    move |cx, args| {
        let lhs = cx.escape(arg(op, args, 0)?)?;
        let rhs = cx.escape(arg(op, args, 1)?)?;
        Ok(format!("({lhs} {op} {rhs})"))
    }
}

pub(super) fn concat(cx: &Context<'_>, args: &[Expr]) -> Result<String> {
    arg("concat", args, 0)?;
    let args = args
        .iter()
        .map(|expr| cx.escape(expr))
        .collect::<Result<Vec<_>>>()?;
    Ok(format!("CONCAT({})", args.join(", ")))
}

pub(super) fn if_null(cx: &Context<'_>, args: &[Expr]) -> Result<String> {
    let expr = cx.escape(arg("ifNull", args, 0)?)?;
    let default = cx.escape(arg("ifNull", args, 1)?)?;
    Ok(format!("COALESCE({expr}, {default})"))
}
