use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use quarry_core::{stmt::Value, Error, Result, Row};
use rust_decimal::{prelude::ToPrimitive, Decimal};
use std::sync::Arc;
use tokio_postgres::{types::Type, Column};
use uuid::Uuid;

/// Converts a result set into rows sharing one column list.
pub(crate) fn rows_from_postgres(rows: &[tokio_postgres::Row]) -> Result<Vec<Row>> {
    let Some(first) = rows.first() else {
        return Ok(vec![]);
    };

    let columns: Arc<[String]> = first
        .columns()
        .iter()
        .map(|column| column.name().to_string())
        .collect();

    rows.iter()
        .map(|row| {
            let values = row
                .columns()
                .iter()
                .enumerate()
                .map(|(index, column)| postgres_to_quarry(index, row, column))
                .collect::<Result<Vec<_>>>()?;

            Ok(Row::new(columns.clone(), values))
        })
        .collect()
}

/// Converts a PostgreSQL value within a row to a [`quarry_core::stmt::Value`].
fn postgres_to_quarry(index: usize, row: &tokio_postgres::Row, column: &Column) -> Result<Value> {
    let ty = column.type_();

    // NOTE: the inner representation of the PostgreSQL type enum is not
    // accessible, so each type has to be matched by hand.
    let value = if ty == &Type::TEXT
        || ty == &Type::VARCHAR
        || ty == &Type::BPCHAR
        || ty == &Type::NAME
    {
        Value::from(get::<String>(row, index)?)
    } else if ty == &Type::BOOL {
        Value::from(get::<bool>(row, index)?)
    } else if ty == &Type::INT2 {
        Value::from(get::<i16>(row, index)?.map(i64::from))
    } else if ty == &Type::INT4 {
        Value::from(get::<i32>(row, index)?.map(i64::from))
    } else if ty == &Type::INT8 {
        Value::from(get::<i64>(row, index)?)
    } else if ty == &Type::FLOAT4 {
        Value::from(get::<f32>(row, index)?.map(f64::from))
    } else if ty == &Type::FLOAT8 {
        Value::from(get::<f64>(row, index)?)
    } else if ty == &Type::NUMERIC {
        match get::<Decimal>(row, index)? {
            // Decimals that do not fit a double keep their exact text
            Some(decimal) => decimal
                .to_f64()
                .map(Value::F64)
                .unwrap_or_else(|| Value::String(decimal.to_string())),
            None => Value::Null,
        }
    } else if ty == &Type::DATE {
        Value::from(get::<NaiveDate>(row, index)?)
    } else if ty == &Type::TIMESTAMP {
        Value::from(get::<NaiveDateTime>(row, index)?)
    } else if ty == &Type::TIMESTAMPTZ {
        Value::from(get::<DateTime<Utc>>(row, index)?.map(|v| v.naive_utc()))
    } else if ty == &Type::TIME {
        Value::from(get::<NaiveTime>(row, index)?.map(|v| v.to_string()))
    } else if ty == &Type::UUID {
        Value::from(get::<Uuid>(row, index)?)
    } else if ty == &Type::JSON || ty == &Type::JSONB {
        Value::from(get::<serde_json::Value>(row, index)?)
    } else if ty == &Type::BYTEA {
        get::<Vec<u8>>(row, index)?.map_or(Value::Null, Value::Bytes)
    } else if ty == &Type::INT2_ARRAY {
        list(get::<Vec<Option<i16>>>(row, index)?, |v| Value::I64(v.into()))
    } else if ty == &Type::INT4_ARRAY {
        list(get::<Vec<Option<i32>>>(row, index)?, |v| Value::I64(v.into()))
    } else if ty == &Type::INT8_ARRAY {
        list(get::<Vec<Option<i64>>>(row, index)?, Value::I64)
    } else if ty == &Type::FLOAT8_ARRAY {
        list(get::<Vec<Option<f64>>>(row, index)?, Value::F64)
    } else if ty == &Type::BOOL_ARRAY {
        list(get::<Vec<Option<bool>>>(row, index)?, Value::Bool)
    } else if ty == &Type::TEXT_ARRAY || ty == &Type::VARCHAR_ARRAY {
        list(get::<Vec<Option<String>>>(row, index)?, Value::String)
    } else {
        return Err(Error::unsupported_feature(format!(
            "reading PostgreSQL type `{}` (column `{}`)",
            ty,
            column.name()
        )));
    };

    Ok(value)
}

/// One-dimensional arrays become lists; SQL NULL elements stay `Null`.
fn list<T>(items: Option<Vec<Option<T>>>, f: impl Fn(T) -> Value) -> Value {
    match items {
        Some(items) => Value::List(
            items
                .into_iter()
                .map(|item| item.map_or(Value::Null, &f))
                .collect(),
        ),
        None => Value::Null,
    }
}

fn get<'a, T>(row: &'a tokio_postgres::Row, index: usize) -> Result<Option<T>>
where
    T: tokio_postgres::types::FromSql<'a>,
{
    row.try_get::<usize, Option<T>>(index).map_err(Error::driver)
}
