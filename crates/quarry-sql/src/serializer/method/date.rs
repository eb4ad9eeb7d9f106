use super::{arg, Context};
use crate::stmt::{Expr, Value};

use quarry_core::{Error, Result};

/// `DATE_PART` over the argument cast to `timestamp`. Text columns holding
/// dates cannot be passed to `DATE_PART` directly.
pub(super) fn part(
    part: &'static str,
) -> impl Fn(&Context<'_>, &[Expr]) -> Result<String> + Send + Sync + 'static {
    move |cx, args| {
        let expr = cx.escape(arg(part, args, 0)?)?;
        Ok(format!("DATE_PART('{part}', {expr}::timestamp)"))
    }
}

pub(super) fn date(cx: &Context<'_>, args: &[Expr]) -> Result<String> {
    Ok(format!("CAST({} AS DATE)", cx.escape(arg("date", args, 0)?)?))
}

/// The current moment. The optional argument picks `date`, `datetime`
/// (the default) or `timestamp`.
pub(super) fn get_date(_cx: &Context<'_>, args: &[Expr]) -> Result<String> {
    let kind = match args.first() {
        None => "datetime",
        Some(Expr::Value(Value::String(kind))) => kind.as_str(),
        Some(_) => {
            return Err(Error::invalid_statement(
                "`getDate` expects `date`, `datetime` or `timestamp`",
            ))
        }
    };

    match kind.to_ascii_lowercase().as_str() {
        "date" => Ok("CURRENT_DATE".to_string()),
        "datetime" => Ok("CURRENT_TIMESTAMP::timestamp".to_string()),
        "timestamp" => Ok("CURRENT_TIMESTAMP".to_string()),
        kind => Err(Error::invalid_statement(format!(
            "`getDate` does not support `{kind}`"
        ))),
    }
}
