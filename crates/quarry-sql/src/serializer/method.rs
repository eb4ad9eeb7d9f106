mod base;
mod cond;
mod convert;
mod date;
mod json;
mod string;

use super::{Context, Formatter};
use crate::stmt::Expr;

use quarry_core::{Error, Result};
use std::sync::Arc;

/// A method handler: formats a call from its arguments.
pub type Method = Arc<dyn Fn(&Context<'_>, &[Expr]) -> Result<String> + Send + Sync>;

pub(super) fn register_builtins(formatter: &mut Formatter) {
    formatter
        .register("count", base::count)
        .register("min", base::function("MIN"))
        .register("max", base::function("MAX"))
        .register("sum", base::function("SUM"))
        .register("avg", base::function("AVG"))
        .register("concat", base::concat)
        .register("toLower", base::function("LOWER"))
        .register("toUpper", base::function("UPPER"))
        .register("trim", base::function("TRIM"))
        .register("floor", base::function("FLOOR"))
        .register("ceil", base::function("CEILING"))
        .register("add", base::operator("+"))
        .register("subtract", base::operator("-"))
        .register("multiply", base::operator("*"))
        .register("divide", base::operator("/"))
        .register("mod", base::operator("%"))
        .register("ifNull", base::if_null);

    formatter
        .register("indexOf", string::index_of)
        .register("regex", string::regex)
        .register("text", string::regex)
        .register("startsWith", string::starts_with)
        .register("endsWith", string::ends_with)
        .register("contains", string::contains)
        .register("substring", string::substring)
        .register("length", string::length);

    formatter
        .register("day", date::part("day"))
        .register("dayOfMonth", date::part("day"))
        .register("month", date::part("month"))
        .register("year", date::part("year"))
        .register("hour", date::part("hour"))
        .register("minute", date::part("minute"))
        .register("minutes", date::part("minute"))
        .register("second", date::part("second"))
        .register("seconds", date::part("second"))
        .register("date", date::date)
        .register("getDate", date::get_date);

    formatter
        .register("round", convert::round)
        .register("toString", convert::to_string)
        .register("toInt", convert::to_int)
        .register("toDouble", convert::to_decimal)
        .register("toDecimal", convert::to_decimal)
        .register("toLong", convert::to_long)
        .register("uuid", convert::uuid)
        .register("toGuid", convert::to_guid);

    formatter
        .register("cond", cond::cond)
        .register("jsonGet", json::get)
        .register("jsonObject", json::object)
        .register("jsonGroupArray", json::group_array)
        .register("jsonArray", json::array);
}

/// Returns the argument at `index`.
fn arg<'a>(method: &str, args: &'a [Expr], index: usize) -> Result<&'a Expr> {
    args.get(index).ok_or_else(|| {
        Error::invalid_statement(format!(
            "`{method}` expects at least {} argument(s); got {}",
            index + 1,
            args.len()
        ))
    })
}
