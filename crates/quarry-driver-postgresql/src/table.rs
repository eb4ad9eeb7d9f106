use crate::PostgreSQL;

use quarry_core::{
    schema::{ColumnMetadata, FieldDescriptor, QualifiedName},
    stmt::Value,
    Driver, Error, Result, Row,
};
use quarry_sql::Statement;

/// Introspection and additive DDL for one table.
///
/// `name` may carry a schema (`sales.orders`); it defaults to `public`.
#[derive(Debug)]
pub struct Table<'a, D: Driver> {
    db: &'a mut PostgreSQL<D>,
    name: QualifiedName,

    /// The name as given, used in DDL and as the `appliesTo` key
    full: String,
}

impl<D: Driver> PostgreSQL<D> {
    pub fn table(&mut self, name: &str) -> Table<'_, D> {
        Table {
            db: self,
            name: QualifiedName::parse(name),
            full: name.to_string(),
        }
    }
}

impl<D: Driver> Table<'_, D> {
    pub fn name(&self) -> &QualifiedName {
        &self.name
    }

    /// Returns `true` when a base table with this name exists.
    pub async fn exists(&mut self) -> Result<bool> {
        let values = [self.schema(), self.table()];
        let count = self
            .db
            .count(
                "SELECT COUNT(*) AS \"count\" FROM information_schema.tables \
                 WHERE table_schema=? AND table_name=? AND table_type='BASE TABLE'",
                &values,
            )
            .await?;

        Ok(count > 0)
    }

    /// Returns the highest migration version recorded for this table, or
    /// `"0.0"` when none was applied yet.
    pub async fn version(&mut self) -> Result<String> {
        self.db.ensure_migrations().await?;

        let values = [Value::from(self.full.as_str())];
        let rows = self
            .db
            .execute(
                Statement::raw(
                    "SELECT MAX(\"version\") AS \"version\" FROM \"migrations\" WHERE \"appliesTo\"=?",
                ),
                &values,
            )
            .await?;

        Ok(rows
            .first()
            .and_then(|row| row.get("version"))
            .and_then(Value::as_str)
            .unwrap_or("0.0")
            .to_string())
    }

    /// Returns `true` when one of the columns defaults to `nextval(...)`.
    pub async fn has_sequence(&mut self) -> Result<bool> {
        let values = [self.schema(), self.table()];
        let count = self
            .db
            .count(
                "SELECT COUNT(*) AS \"count\" FROM information_schema.columns \
                 WHERE table_schema=? AND table_name=? AND column_default ~ '^nextval\\((.*?)\\)$'",
                &values,
            )
            .await?;

        Ok(count > 0)
    }

    /// Reads the live column list, in ordinal order.
    pub async fn columns(&mut self) -> Result<Vec<ColumnMetadata>> {
        let values = [self.schema(), self.table()];
        let rows = self
            .db
            .execute(
                Statement::raw(
                    "SELECT column_name::text AS \"name\", ordinal_position::int AS \"ordinal\", \
                     data_type::text AS \"type\", character_maximum_length::int AS \"size\", \
                     is_nullable::text AS \"nullable\", column_default::text AS \"defaultValue\" \
                     FROM information_schema.columns \
                     WHERE table_schema=? AND table_name=? ORDER BY ordinal_position",
                ),
                &values,
            )
            .await?;

        Ok(rows.iter().map(column_from_row).collect())
    }

    /// Creates the table. The primary key is made of the fields marked
    /// `primary`.
    pub async fn create(&mut self, fields: &[FieldDescriptor]) -> Result<()> {
        if fields.is_empty() {
            return Err(Error::invalid_argument("fields collection cannot be empty")
                .context(format_args!("create table \"{}\"", self.full)));
        }

        self.db
            .execute(
                Statement::create_table(self.full.as_str(), fields.to_vec()),
                &[],
            )
            .await?;

        Ok(())
    }

    /// Appends columns. An empty list does nothing.
    pub async fn add(&mut self, fields: &[FieldDescriptor]) -> Result<()> {
        for field in fields {
            self.db
                .execute(
                    Statement::add_column(self.full.as_str(), field.clone()),
                    &[],
                )
                .await?;
        }

        Ok(())
    }

    /// Alters the type and nullability of existing columns. An empty list does
    /// nothing.
    pub async fn change(&mut self, fields: &[FieldDescriptor]) -> Result<()> {
        for field in fields {
            self.db
                .execute(
                    Statement::alter_column(self.full.as_str(), field.clone()),
                    &[],
                )
                .await?;
        }

        Ok(())
    }

    fn schema(&self) -> Value {
        Value::from(self.name.schema.as_str())
    }

    fn table(&self) -> Value {
        Value::from(self.name.name.as_str())
    }
}

fn column_from_row(row: &Row) -> ColumnMetadata {
    let text = |column: &str| row.get(column).and_then(Value::as_str).unwrap_or_default();

    ColumnMetadata {
        name: text("name").to_string(),
        ordinal: row
            .get("ordinal")
            .and_then(Value::to_i64)
            .unwrap_or_default(),
        ty: text("type").to_string(),
        size: row.get("size").and_then(Value::to_i64),
        nullable: text("nullable") == "YES",
        default_value: row.get("defaultValue").filter(|v| !v.is_null()).cloned(),
    }
}
