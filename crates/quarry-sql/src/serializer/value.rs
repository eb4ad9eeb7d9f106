use super::{Context, ToSql};
use crate::stmt::Value;

use quarry_core::Result;

impl ToSql for &Value {
    fn to_sql(self, _cx: &Context<'_>, dst: &mut String) -> Result<()> {
        dst.push_str(&escape(self, false));
        Ok(())
    }
}

pub(super) fn escape(value: &Value, unquoted: bool) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Bool(true) => "true".to_string(),
        Value::Bool(false) => "false".to_string(),
        Value::I64(v) => v.to_string(),
        Value::F64(v) => float(*v),
        Value::String(v) => quote(v, unquoted),
        Value::Date(v) => quote(&v.format("%Y-%m-%d").to_string(), unquoted),
        Value::DateTime(v) => quote(&v.format("%Y-%m-%d %H:%M:%S%.3f").to_string(), unquoted),
        Value::Uuid(v) => quote(&v.to_string(), unquoted),
        Value::Bytes(v) => quote(&Value::hex(v), unquoted),
        Value::Json(v) => quote(&v.to_string(), unquoted),
        Value::Object(_) => quote(&value.to_json().to_string(), unquoted),
        // Only a list of objects is expanded element by element. Anything
        // else is stored as JSON text.
        Value::List(items) if !items.is_empty() && items.iter().all(Value::is_object) => items
            .iter()
            .map(|item| escape(item, unquoted))
            .collect::<Vec<_>>()
            .join(", "),
        Value::List(_) => quote(&value.to_json().to_string(), unquoted),
    }
}

pub(super) fn escape_constant(value: &Value) -> String {
    let cast = match value {
        Value::Null => "text",
        Value::Date(_) | Value::DateTime(_) => "timestamp",
        Value::I64(_) | Value::F64(_) => "float",
        Value::Bool(_) => "bool",
        Value::Bytes(_) => "bytea",
        _ => "text",
    };
    format!("{}::{cast}", escape(value, false))
}

/// Escapes a string for use inside a POSIX regular expression literal.
pub(super) fn escape_pattern(pattern: &str) -> String {
    let mut ret = String::with_capacity(pattern.len());
    for ch in pattern.chars() {
        if matches!(
            ch,
            '\\' | '^' | '$' | '.' | '|' | '?' | '*' | '+' | '(' | ')' | '[' | ']' | '{' | '}'
        ) {
            ret.push('\\');
        }
        ret.push(ch);
    }
    ret
}

/// NaN and the infinities have no numeric literal; PostgreSQL reads them from
/// text.
fn float(v: f64) -> String {
    if v.is_nan() {
        "'NaN'::float8".to_string()
    } else if v.is_infinite() {
        let sign = if v < 0.0 { "-" } else { "" };
        format!("'{sign}Infinity'::float8")
    } else {
        v.to_string()
    }
}

fn quote(s: &str, unquoted: bool) -> String {
    let escaped = s.replace('\'', "''");
    if unquoted {
        escaped
    } else {
        format!("'{escaped}'")
    }
}
