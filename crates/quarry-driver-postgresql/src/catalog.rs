use crate::PostgreSQL;

use quarry_core::{schema::QualifiedName, stmt::Value, Driver, Error, Result};
use quarry_sql::Statement;

/// Enumerates base tables or views outside the system schemas.
#[derive(Debug)]
pub struct Relations<'a, D: Driver> {
    db: &'a mut PostgreSQL<D>,
    table_type: &'static str,
}

/// A database on the server the adapter is connected to.
#[derive(Debug)]
pub struct Database<'a, D: Driver> {
    db: &'a mut PostgreSQL<D>,
    name: String,
}

impl<D: Driver> PostgreSQL<D> {
    pub fn tables(&mut self) -> Relations<'_, D> {
        Relations {
            db: self,
            table_type: "BASE TABLE",
        }
    }

    pub fn views(&mut self) -> Relations<'_, D> {
        Relations {
            db: self,
            table_type: "VIEW",
        }
    }

    pub fn database(&mut self, name: &str) -> Database<'_, D> {
        Database {
            db: self,
            name: name.to_string(),
        }
    }
}

impl<D: Driver> Relations<'_, D> {
    pub async fn list(&mut self) -> Result<Vec<QualifiedName>> {
        let values = [Value::from(self.table_type)];
        let rows = self
            .db
            .execute(
                Statement::raw(
                    "SELECT table_schema::text AS \"schema\", table_name::text AS \"name\" \
                     FROM information_schema.tables \
                     WHERE table_type=? AND table_schema NOT IN ('pg_catalog', 'information_schema') \
                     ORDER BY table_schema, table_name",
                ),
                &values,
            )
            .await?;

        Ok(rows
            .iter()
            .filter_map(|row| {
                Some(QualifiedName {
                    schema: row.get("schema")?.as_str()?.to_string(),
                    name: row.get("name")?.as_str()?.to_string(),
                })
            })
            .collect())
    }
}

impl<D: Driver> Database<'_, D> {
    pub async fn exists(&mut self) -> Result<bool> {
        let values = [Value::from(self.name.as_str())];
        let count = self
            .db
            .count(
                "SELECT COUNT(*) AS \"count\" FROM pg_catalog.pg_database WHERE datname=?",
                &values,
            )
            .await?;

        Ok(count > 0)
    }

    /// Creates the database. Fails inside a transaction, where the server
    /// rejects `CREATE DATABASE`.
    pub async fn create(&mut self) -> Result<()> {
        if self.db.in_transaction() {
            return Err(Error::invalid_statement(
                "CREATE DATABASE cannot run inside a transaction",
            ));
        }

        let sql = format!(
            "CREATE DATABASE {}",
            self.db.formatter().escape_name(&self.name)
        );
        self.db.execute(Statement::raw(sql), &[]).await?;
        Ok(())
    }
}
