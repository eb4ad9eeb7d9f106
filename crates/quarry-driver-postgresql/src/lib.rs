mod catalog;
pub use catalog::{Database, Relations};

mod connect;
pub use connect::Connect;

mod identity;

mod indexes;
pub use indexes::Indexes;

mod migrate;
pub use migrate::Migrated;

mod options;
pub use options::ConnectOptions;

mod table;
pub use table::Table;

mod transaction_manager;
use transaction_manager::TransactionManager;

mod value;

mod view;
pub use view::View;

use quarry_core::{err, stmt::Value, Connection, Driver, Result, Row};
use quarry_sql::{stmt::QueryExpression, Formatter, Statement};
use std::{future::Future, pin::Pin, time::Instant};

/// A boxed future borrowing the adapter, as returned by the closures passed to
/// [`PostgreSQL::execute_in_transaction`].
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// PostgreSQL adapter: one lazily opened connection, the dialect formatter
/// and the schema helpers built on top of them.
///
/// Every operation takes `&mut self`; callers that need to run statements
/// concurrently should create one adapter per task.
#[derive(Debug)]
pub struct PostgreSQL<D: Driver = Connect> {
    driver: D,
    formatter: Formatter,
    state: State,
}

/// Per-instance connection state.
#[derive(Debug, Default)]
struct State {
    connection: Option<Box<dyn Connection>>,
    transaction: TransactionManager,

    /// The `migrations` audit table is known to exist
    migrations_ready: bool,
}

impl PostgreSQL<Connect> {
    pub fn new(options: &ConnectOptions) -> Self {
        Self::with_driver(Connect::new(options))
    }

    /// Creates an adapter for the database named by a `postgresql://` URL.
    /// No connection is made until the first statement runs.
    pub fn from_url(url: &str) -> Result<Self> {
        Ok(Self::with_driver(Connect::from_url(url)?))
    }
}

impl<D: Driver> PostgreSQL<D> {
    pub fn with_driver(driver: D) -> Self {
        Self {
            driver,
            formatter: Formatter::new(),
            state: State::default(),
        }
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    /// Gives access to the formatter, e.g. to register methods or member
    /// resolvers.
    pub fn formatter_mut(&mut self) -> &mut Formatter {
        &mut self.formatter
    }

    pub fn is_open(&self) -> bool {
        self.state.connection.is_some()
    }

    pub fn in_transaction(&self) -> bool {
        self.state.transaction.is_active()
    }

    /// Opens the connection. Does nothing when it is already open.
    pub async fn open(&mut self) -> Result<()> {
        if self.state.connection.is_some() {
            return Ok(());
        }

        match self.driver.connect().await {
            Ok(connection) => {
                tracing::debug!("connection opened");
                self.state.connection = Some(connection);
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to open connection");
                Err(err)
            }
        }
    }

    /// Closes the connection. Does nothing when it is already closed.
    ///
    /// Teardown failures are logged and dropped.
    pub async fn close(&mut self) {
        let Some(connection) = self.state.connection.take() else {
            return;
        };

        self.state.transaction.reset();

        match connection.close().await {
            Ok(()) => tracing::debug!("connection closed"),
            Err(err) => tracing::error!(error = %err, "failed to close connection"),
        }
    }

    /// Formats a statement without executing it.
    pub fn format(&self, stmt: impl Into<Statement>) -> Result<String> {
        match stmt.into() {
            Statement::Raw(sql) => Ok(sql),
            stmt => self.formatter.format(&stmt),
        }
    }

    /// Executes a statement and returns the rows it produced.
    ///
    /// Raw SQL is sent as is; anything else goes through the formatter first.
    /// When `values` is not empty, `?` placeholders are substituted with the
    /// escaped values.
    pub async fn execute(
        &mut self,
        stmt: impl Into<Statement>,
        values: &[Value],
    ) -> Result<Vec<Row>> {
        let mut sql = self.format(stmt)?;

        if !values.is_empty() {
            sql = self.formatter.prepare(&sql, values)?;
        }

        self.query(&sql).await
    }

    /// Runs `f` inside a transaction: `BEGIN`, then `COMMIT` when `f`
    /// succeeds or `ROLLBACK` when it fails.
    ///
    /// When a transaction is already in flight, `f` runs inline as part of
    /// it.
    ///
    /// ```ignore
    /// db.execute_in_transaction(|db| Box::pin(async move {
    ///     db.execute(Statement::raw("DELETE FROM \"Thing\""), &[]).await?;
    ///     Ok(())
    /// }))
    /// .await?;
    /// ```
    pub async fn execute_in_transaction<F, T>(&mut self, f: F) -> Result<T>
    where
        F: for<'a> FnOnce(&'a mut Self) -> BoxFuture<'a, Result<T>> + Send,
        T: Send,
    {
        let Some(begin) = self.state.transaction.start() else {
            return f(self).await;
        };

        if let Err(err) = self.query(begin).await {
            self.state.transaction.reset();
            return Err(err);
        }

        // The audit table may be created inside this transaction
        let migrations_ready = self.state.migrations_ready;

        let ret = f(self).await;

        let end = if ret.is_ok() {
            self.state.transaction.commit()
        } else {
            self.state.transaction.rollback()
        };

        let outcome = self.query(end).await;
        self.state.transaction.reset();

        if ret.is_err() || outcome.is_err() {
            self.state.migrations_ready = migrations_ready;
        }

        match (ret, outcome) {
            (Ok(value), Ok(_)) => Ok(value),
            (Ok(_), Err(err)) => Err(err),
            (Err(err), Ok(_)) => Err(err),
            (Err(err), Err(rollback)) => {
                tracing::error!(error = %rollback, "rollback failed");
                Err(err)
            }
        }
    }

    /// Refreshes a materialized view.
    pub async fn refresh_view(&mut self, name: &str) -> Result<()> {
        let sql = format!(
            "REFRESH MATERIALIZED VIEW {}",
            self.formatter.escape_name(name)
        );
        self.execute(Statement::raw(sql), &[]).await?;
        Ok(())
    }

    /// Replaces the view `name` with one defined by `query`.
    pub async fn create_view(&mut self, name: &str, query: QueryExpression) -> Result<()> {
        self.view(name).create(query).await
    }

    /// Sends SQL text over the connection, opening it first if needed.
    async fn query(&mut self, sql: &str) -> Result<Vec<Row>> {
        if self.state.connection.is_none() {
            self.open().await?;
        }

        let connection = self
            .state
            .connection
            .as_mut()
            .ok_or_else(|| err!("connection is not open"))?;

        let started = Instant::now();

        match connection.query(sql).await {
            Ok(rows) => {
                tracing::debug!(
                    sql,
                    rows = rows.len(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "statement executed"
                );
                Ok(rows)
            }
            Err(err) => {
                tracing::error!(sql, error = %err, "statement failed");
                Err(err)
            }
        }
    }

    /// Runs a `SELECT COUNT(*) AS "count" ...` and returns the count.
    async fn count(&mut self, sql: &str, values: &[Value]) -> Result<i64> {
        let rows = self.execute(Statement::raw(sql), values).await?;

        Ok(rows
            .first()
            .and_then(|row| row.get("count"))
            .and_then(Value::to_i64)
            .unwrap_or(0))
    }
}
