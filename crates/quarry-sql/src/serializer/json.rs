use super::{statement, value, Comma, Context, ToSql};
use crate::stmt::{Expr, ExprJson, JsonArray, SelectField, Value};

use quarry_core::{Error, Result};

impl ToSql for &ExprJson {
    fn to_sql(self, cx: &Context<'_>, dst: &mut String) -> Result<()> {
        match self {
            ExprJson::Get(path) => get(cx, path, dst),
            ExprJson::Object(fields) => object(cx, fields, dst),
            ExprJson::GroupArray(object) => group_array(cx, object, dst),
            ExprJson::Array(array) => array.to_sql(cx, dst),
        }
    }
}

/// `collection.column.key...` extracts text at `key...` inside `column`.
fn get(cx: &Context<'_>, path: &str, dst: &mut String) -> Result<()> {
    let segments: Vec<_> = path.split('.').collect();

    match &segments[..] {
        [collection, column, keys @ ..]
            if !keys.is_empty() && segments.iter().all(|segment| !segment.is_empty()) =>
        {
            let column = &Expr::column(*collection, *column);
            let keys = keys
                .iter()
                .map(|key| value::escape(&Value::from(*key), false))
                .collect::<Vec<_>>();

            fmt!(cx, dst, "json_extract_path_text(" column "::json, " Comma(&keys) ")");
            Ok(())
        }
        _ => Err(Error::invalid_statement(format!(
            "`jsonGet` expects a `collection.column.key` path; got `{path}`"
        ))),
    }
}

fn object(cx: &Context<'_>, fields: &[SelectField], dst: &mut String) -> Result<()> {
    let mut entries = Vec::with_capacity(fields.len());
    for field in fields {
        let Some(name) = field.name() else {
            return Err(Error::invalid_statement(
                "every `jsonObject` entry needs a name; add an alias",
            ));
        };
        entries.push(format!(
            "{}, {}",
            value::escape(&Value::from(name), false),
            cx.escape(&field.expr)?
        ));
    }

    fmt!(cx, dst, "json_build_object(" Comma(&entries) ")");
    Ok(())
}

fn group_array(cx: &Context<'_>, object: &Expr, dst: &mut String) -> Result<()> {
    let Expr::Json(ExprJson::Object(fields)) = object else {
        return Err(Error::invalid_statement(
            "`jsonGroupArray` expects a `jsonObject` argument",
        ));
    };

    dst.push_str("json_agg(");
    self::object(cx, fields, dst)?;
    dst.push(')');
    Ok(())
}

impl ToSql for &JsonArray {
    fn to_sql(self, cx: &Context<'_>, dst: &mut String) -> Result<()> {
        match self {
            // The column is expected to hold an array already
            JsonArray::Field(field) => field.to_sql(cx, dst),
            JsonArray::Values(values) => {
                fmt!(cx, dst, "json_build_array(" Comma(values) ")");
                Ok(())
            }
            JsonArray::Query(query) => {
                // Ordering and paging do not survive aggregation, so those
                // queries are aggregated from the outside.
                if query.select.is_empty() || query.is_paged() || !query.order_by.is_empty() {
                    dst.push_str("(SELECT json_agg(\"t0\") FROM (");
                    statement::limit_select(cx, query, dst)?;
                    dst.push_str(") AS \"t0\")");
                    return Ok(());
                }

                let mut query = (**query).clone();
                let fields = std::mem::take(&mut query.select);
                query.select = vec![SelectField::new(Expr::json_group_array(
                    Expr::json_object(fields),
                ))];

                dst.push('(');
                statement::limit_select(cx, &query, dst)?;
                dst.push(')');
                Ok(())
            }
        }
    }
}
