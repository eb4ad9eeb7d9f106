use crate::PostgreSQL;

use quarry_core::{schema::QualifiedName, stmt::Value, Driver, Result};
use quarry_sql::{stmt::QueryExpression, Statement};

#[derive(Debug)]
pub struct View<'a, D: Driver> {
    db: &'a mut PostgreSQL<D>,
    name: QualifiedName,
    full: String,
}

impl<D: Driver> PostgreSQL<D> {
    pub fn view(&mut self, name: &str) -> View<'_, D> {
        View {
            db: self,
            name: QualifiedName::parse(name),
            full: name.to_string(),
        }
    }
}

impl<D: Driver> View<'_, D> {
    pub fn name(&self) -> &QualifiedName {
        &self.name
    }

    pub async fn exists(&mut self) -> Result<bool> {
        let values = [
            Value::from(self.name.schema.as_str()),
            Value::from(self.name.name.as_str()),
        ];
        let count = self
            .db
            .count(
                "SELECT COUNT(*) AS \"count\" FROM information_schema.tables \
                 WHERE table_schema=? AND table_name=? AND table_type='VIEW'",
                &values,
            )
            .await?;

        Ok(count > 0)
    }

    /// Drops the view if it exists.
    pub async fn drop(&mut self) -> Result<()> {
        self.db
            .execute(Statement::drop_view_if_exists(self.full.as_str()), &[])
            .await?;
        Ok(())
    }

    /// Drops and recreates the view in one transaction, so a failing
    /// definition leaves the previous view in place.
    pub async fn create(&mut self, query: QueryExpression) -> Result<()> {
        let name = self.full.clone();

        self.db
            .execute_in_transaction(move |db| Box::pin(replace(db, name, query)))
            .await
    }
}

async fn replace<D: Driver>(
    db: &mut PostgreSQL<D>,
    name: String,
    query: QueryExpression,
) -> Result<()> {
    db.view(&name).drop().await?;
    db.execute(Statement::create_view(name, query), &[]).await?;
    Ok(())
}
