use crate::PostgreSQL;

use quarry_core::{
    schema::{FieldDescriptor, LogicalType, Migration},
    stmt::{Expr, Insert, QueryExpression, SelectField, Update, Value},
    Driver, Result,
};
use quarry_sql::Statement;

/// Side table holding one counter per `(entity, attribute)`.
const INCREMENTS_TABLE: &str = "increment_id";

impl<D: Driver> PostgreSQL<D> {
    /// Returns the next value of an emulated auto-increment attribute.
    ///
    /// The first call for a pair seeds the counter from the largest value of
    /// `attribute` already stored in `entity`; every later call adds one.
    /// Values are not reused under sequential use. Concurrent callers are not
    /// serialized.
    pub async fn select_identity(&mut self, entity: &str, attribute: &str) -> Result<i64> {
        self.migrate(&mut increments_migration()).await?;

        let values = [Value::from(entity), Value::from(attribute)];
        let rows = self
            .execute(
                Statement::raw(
                    "SELECT * FROM \"increment_id\" WHERE \"entity\"=? AND \"attribute\"=?",
                ),
                &values,
            )
            .await?;

        if let Some(row) = rows.first() {
            let id = row.get("id").and_then(Value::to_i64).unwrap_or_default();
            let value = row.get("value").and_then(Value::to_i64).unwrap_or_default() + 1;

            self.execute(
                Update::new(INCREMENTS_TABLE)
                    .set("value", value)
                    .filter(Expr::eq(Expr::field("id"), id)),
                &[],
            )
            .await?;

            return Ok(value);
        }

        let max = QueryExpression::new().from(entity).select([SelectField::new(
            Expr::method("max", [Expr::field(attribute)]),
        )
        .alias("value")]);

        let rows = self.execute(max, &[]).await?;
        let value = rows
            .first()
            .and_then(|row| row.get("value"))
            .and_then(Value::to_i64)
            .unwrap_or_default()
            + 1;

        self.execute(
            Insert::new(INCREMENTS_TABLE)
                .value("entity", entity)
                .value("attribute", attribute)
                .value("value", value),
            &[],
        )
        .await?;

        Ok(value)
    }

    /// Returns the value most recently produced by a sequence in this
    /// session, or `None` when no sequence was used yet.
    pub async fn last_identity(&mut self) -> Result<Option<i64>> {
        self.open().await?;

        // lastval() raises until a sequence was used in the session
        match self
            .execute(Statement::raw("SELECT lastval() AS \"lastval\""), &[])
            .await
        {
            Ok(rows) => Ok(rows
                .first()
                .and_then(|row| row.get("lastval"))
                .and_then(Value::to_i64)),
            Err(_) => Ok(None),
        }
    }
}

fn increments_migration() -> Migration {
    Migration::new(INCREMENTS_TABLE, "1.0")
        .model("increments")
        .description("Increments migration (version 1.0)")
        .add(FieldDescriptor::new("id", LogicalType::Counter).primary())
        .add(FieldDescriptor::new("entity", LogicalType::Text).size(120))
        .add(FieldDescriptor::new("attribute", LogicalType::Text).size(120))
        .add(FieldDescriptor::new("value", LogicalType::Integer))
}
