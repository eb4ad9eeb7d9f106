mod row;
pub use row::Row;

use crate::async_trait;

use std::fmt::Debug;

/// Opens raw connections to a database server.
///
/// The adapter holds one driver and asks it for a connection the first time a
/// statement needs to run.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Creates a new connection to the database.
    async fn connect(&self) -> crate::Result<Box<dyn Connection>>;
}

/// A single open connection: run a statement, get rows back.
#[async_trait]
pub trait Connection: Debug + Send + 'static {
    /// Executes one SQL statement and returns the rows it produced. Statements
    /// that produce no rows return an empty vector.
    async fn query(&mut self, sql: &str) -> crate::Result<Vec<Row>>;

    /// Tears down the connection.
    async fn close(self: Box<Self>) -> crate::Result<()>;
}
