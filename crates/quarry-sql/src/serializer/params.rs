use super::value;
use crate::stmt::Value;

use quarry_core::{Error, Result};

pub(super) fn prepare(sql: &str, values: &[Value]) -> Result<String> {
    let mut ret = String::with_capacity(sql.len());
    let mut values = values.iter();
    let mut quote = None;

    for ch in sql.chars() {
        match (quote, ch) {
            (Some(q), ch) if ch == q => {
                quote = None;
                ret.push(ch);
            }
            (Some(_), ch) => ret.push(ch),
            (None, '\'' | '"') => {
                quote = Some(ch);
                ret.push(ch);
            }
            (None, '?') => {
                let Some(value) = values.next() else {
                    return Err(Error::invalid_argument(
                        "not enough values for the statement's placeholders",
                    ));
                };
                ret.push_str(&value::escape(value, false));
            }
            (None, ch) => ret.push(ch),
        }
    }

    if values.next().is_some() {
        return Err(Error::invalid_argument(
            "more values than the statement has placeholders",
        ));
    }

    Ok(ret)
}
