use crate::PostgreSQL;

use quarry_core::{
    schema::{FieldDescriptor, LogicalType, Migration},
    stmt::Insert,
    Driver, Error, Result,
};
use quarry_sql::{
    stmt::{AlterColumn, AlterColumnChanges},
    Statement,
};

/// Audit table recording every applied migration.
const MIGRATIONS_TABLE: &str = "migrations";

/// Outcome of [`PostgreSQL::migrate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Migrated {
    /// The schema changes ran and the audit row was written.
    Applied,

    /// A version at least as new was already recorded for the table.
    AlreadyApplied,
}

impl Migrated {
    pub fn is_applied(self) -> bool {
        matches!(self, Migrated::Applied)
    }
}

impl<D: Driver> PostgreSQL<D> {
    /// Brings a table up to the schema described by `migration`.
    ///
    /// Versions are compared as strings against the highest version recorded
    /// for `applies_to`; a version that is not newer sets
    /// `migration.updated` and changes nothing. Otherwise the table is
    /// created, or its missing columns are added and the size and
    /// nullability of existing ones are aligned, and an audit row is
    /// written. The schema changes and the audit row commit together.
    pub async fn migrate(&mut self, migration: &mut Migration) -> Result<Migrated> {
        if migration.applies_to.is_empty() {
            return Err(Error::invalid_argument(
                "migration target table cannot be empty",
            ));
        }

        if !migration.remove.is_empty() {
            return Err(Error::unsupported_feature("migration `remove` collection"));
        }

        if !migration.change.is_empty() {
            return Err(Error::unsupported_feature("migration `change` collection"));
        }

        self.ensure_migrations().await?;

        let version = self.table(&migration.applies_to).version().await?;

        if version.as_str() >= migration.version.as_str() {
            tracing::debug!(
                table = %migration.applies_to,
                applied = %version,
                requested = %migration.version,
                "migration already applied"
            );
            migration.updated = true;
            return Ok(Migrated::AlreadyApplied);
        }

        let pending = migration.clone();
        self.execute_in_transaction(move |db| Box::pin(apply(db, pending)))
            .await?;

        tracing::info!(
            table = %migration.applies_to,
            version = %migration.version,
            "migration applied"
        );
        migration.updated = false;
        Ok(Migrated::Applied)
    }

    /// Creates the audit table once per adapter.
    pub(crate) async fn ensure_migrations(&mut self) -> Result<()> {
        if self.state.migrations_ready {
            return Ok(());
        }

        let fields = vec![
            FieldDescriptor::new("id", LogicalType::Counter).primary(),
            FieldDescriptor::new("appliesTo", LogicalType::Text)
                .size(80)
                .nullable(false),
            FieldDescriptor::new("model", LogicalType::Text).size(120),
            FieldDescriptor::new("description", LogicalType::Text).size(512),
            FieldDescriptor::new("version", LogicalType::Text)
                .size(40)
                .nullable(false),
        ];

        self.execute(
            Statement::create_table_if_not_exists(MIGRATIONS_TABLE, fields),
            &[],
        )
        .await?;

        self.state.migrations_ready = true;
        Ok(())
    }
}

/// Types mapped to `varchar(n)`, whose size the catalog reports as
/// `character_maximum_length`. Other sizes (numeric precision, serials) are
/// not compared.
fn has_length(ty: &LogicalType) -> bool {
    matches!(
        ty,
        LogicalType::Text | LogicalType::Url | LogicalType::Note | LogicalType::Duration
    )
}

async fn apply<D: Driver>(db: &mut PostgreSQL<D>, migration: Migration) -> Result<()> {
    let table = &migration.applies_to;

    if !db.table(table).exists().await? {
        tracing::debug!(table = %table, "creating table");
        db.table(table).create(&migration.add).await?;
    } else {
        let columns = db.table(table).columns().await?;
        let mut statements: Vec<Statement> = vec![];

        for field in &migration.add {
            let Some(column) = columns.iter().find(|column| column.name == field.name) else {
                statements.push(Statement::add_column(table.as_str(), field.clone()));
                continue;
            };

            let resized = has_length(&field.ty)
                && field
                    .size
                    .is_some_and(|size| column.size != Some(i64::from(size)));
            let nullable = field.is_nullable();

            let changes = AlterColumnChanges {
                ty: resized.then(|| field.clone()),
                nullable: (column.nullable != nullable).then_some(nullable),
            };

            if !changes.is_empty() {
                statements.push(
                    AlterColumn {
                        table: table.clone(),
                        column: field.name.clone(),
                        changes,
                    }
                    .into(),
                );
            }
        }

        tracing::debug!(table = %table, statements = statements.len(), "altering table");

        for stmt in statements {
            db.execute(stmt, &[]).await?;
        }
    }

    let audit = Insert::new(MIGRATIONS_TABLE)
        .value("appliesTo", migration.applies_to.as_str())
        .value("model", migration.model)
        .value("version", migration.version)
        .value("description", migration.description);

    db.execute(audit, &[]).await?;
    Ok(())
}
