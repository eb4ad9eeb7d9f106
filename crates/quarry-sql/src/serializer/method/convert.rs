use super::{arg, Context};
use crate::stmt::{Expr, Value};

use quarry_core::Result;

const DEFAULT_PRECISION: i64 = 19;
const DEFAULT_SCALE: i64 = 8;

/// Rounds after a `numeric` cast; `ROUND(real, n)` does not exist.
pub(super) fn round(cx: &Context<'_>, args: &[Expr]) -> Result<String> {
    let expr = cx.escape(arg("round", args, 0)?)?;
    match args.get(1) {
        Some(digits) => Ok(format!("ROUND({expr}::numeric, {})", cx.escape(digits)?)),
        None => Ok(format!("ROUND({expr}::numeric)")),
    }
}

pub(super) fn to_string(cx: &Context<'_>, args: &[Expr]) -> Result<String> {
    Ok(format!(
        "CAST({} AS VARCHAR)",
        cx.escape(arg("toString", args, 0)?)?
    ))
}

pub(super) fn to_int(cx: &Context<'_>, args: &[Expr]) -> Result<String> {
    Ok(format!(
        "FLOOR(CAST({} AS DECIMAL({DEFAULT_PRECISION},{DEFAULT_SCALE})))",
        cx.escape(arg("toInt", args, 0)?)?
    ))
}

/// `toDecimal(x [, precision [, scale]])`
pub(super) fn to_decimal(cx: &Context<'_>, args: &[Expr]) -> Result<String> {
    let expr = cx.escape(arg("toDecimal", args, 0)?)?;
    let precision = int_arg(args, 1).unwrap_or(DEFAULT_PRECISION);
    let scale = int_arg(args, 2).unwrap_or(DEFAULT_SCALE);
    Ok(format!("CAST({expr} AS DECIMAL({precision},{scale}))"))
}

pub(super) fn to_long(cx: &Context<'_>, args: &[Expr]) -> Result<String> {
    Ok(format!(
        "CAST({} AS BIGINT)",
        cx.escape(arg("toLong", args, 0)?)?
    ))
}

/// A random UUID. Not suitable where unpredictability matters.
pub(super) fn uuid(_cx: &Context<'_>, _args: &[Expr]) -> Result<String> {
    Ok("md5(random()::text || clock_timestamp()::text)::uuid".to_string())
}

/// A UUID derived from the md5 of the argument; equal inputs give equal
/// UUIDs.
pub(super) fn to_guid(cx: &Context<'_>, args: &[Expr]) -> Result<String> {
    Ok(format!(
        "md5({}::text)::uuid",
        cx.escape(arg("toGuid", args, 0)?)?
    ))
}

fn int_arg(args: &[Expr], index: usize) -> Option<i64> {
    args.get(index)
        .and_then(Expr::as_value)
        .and_then(Value::to_i64)
}
