use crate::PostgreSQL;

use quarry_core::{
    schema::{IndexDescriptor, QualifiedName},
    stmt::Value,
    Driver, Result, Row,
};
use quarry_sql::Statement;

/// Lists, creates and drops the indexes of one table.
///
/// The index list is read once per helper and reused until an index is
/// created or dropped through it.
#[derive(Debug)]
pub struct Indexes<'a, D: Driver> {
    db: &'a mut PostgreSQL<D>,
    table: QualifiedName,
    full: String,
    cache: Option<Vec<IndexDescriptor>>,
}

impl<D: Driver> PostgreSQL<D> {
    pub fn indexes(&mut self, table: &str) -> Indexes<'_, D> {
        Indexes {
            db: self,
            table: QualifiedName::parse(table),
            full: table.to_string(),
            cache: None,
        }
    }
}

impl<D: Driver> Indexes<'_, D> {
    /// Returns the table's indexes with their columns in key order.
    pub async fn list(&mut self) -> Result<&[IndexDescriptor]> {
        if self.cache.is_none() {
            let values = [
                Value::from(self.table.schema.as_str()),
                Value::from(self.table.name.as_str()),
            ];
            let rows = self
                .db
                .execute(
                    Statement::raw(
                        "SELECT i.relname::text AS \"name\", a.attname::text AS \"column\" \
                         FROM pg_catalog.pg_index ix \
                         JOIN pg_catalog.pg_class t ON t.oid = ix.indrelid \
                         JOIN pg_catalog.pg_class i ON i.oid = ix.indexrelid \
                         JOIN pg_catalog.pg_namespace n ON n.oid = t.relnamespace \
                         JOIN pg_catalog.pg_attribute a ON a.attrelid = t.oid AND a.attnum = ANY(ix.indkey) \
                         WHERE n.nspname=? AND t.relname=? \
                         ORDER BY i.relname, array_position(ix.indkey::int2[], a.attnum)",
                    ),
                    &values,
                )
                .await?;

            self.cache = Some(group_by_index(&rows));
        }

        Ok(self.cache.as_deref().unwrap_or_default())
    }

    /// Creates the index unless one with the same name and columns already
    /// exists. An index with the same name but other columns is dropped and
    /// recreated.
    pub async fn create<S: AsRef<str>>(&mut self, name: &str, columns: &[S]) -> Result<()> {
        let existing = self
            .list()
            .await?
            .iter()
            .find(|index| index.name == name)
            .cloned();

        if let Some(index) = existing {
            if index.has_columns(columns) {
                tracing::debug!(index = name, table = %self.full, "index is up to date");
                return Ok(());
            }

            tracing::debug!(index = name, table = %self.full, "index columns changed; recreating");
            self.db
                .execute(
                    Statement::drop_index(Some(self.table.schema.as_str()), name),
                    &[],
                )
                .await?;
        }

        self.cache = None;
        self.db
            .execute(
                Statement::create_index(
                    name,
                    self.full.as_str(),
                    columns.iter().map(|column| column.as_ref()),
                ),
                &[],
            )
            .await?;

        Ok(())
    }

    /// Drops the index when it exists.
    pub async fn drop(&mut self, name: &str) -> Result<()> {
        let exists = self.list().await?.iter().any(|index| index.name == name);

        if exists {
            self.cache = None;
            self.db
                .execute(
                    Statement::drop_index(Some(self.table.schema.as_str()), name),
                    &[],
                )
                .await?;
        }

        Ok(())
    }
}

/// Folds `(name, column)` rows, sorted by index name, into descriptors.
fn group_by_index(rows: &[Row]) -> Vec<IndexDescriptor> {
    let mut ret: Vec<IndexDescriptor> = vec![];

    for row in rows {
        let (Some(name), Some(column)) = (
            row.get("name").and_then(Value::as_str),
            row.get("column").and_then(Value::as_str),
        ) else {
            continue;
        };

        match ret.last_mut() {
            Some(index) if index.name == name => index.columns.push(column.to_string()),
            _ => ret.push(IndexDescriptor {
                name: name.to_string(),
                columns: vec![column.to_string()],
            }),
        }
    }

    ret
}
