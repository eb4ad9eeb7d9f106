use crate::{value, ConnectOptions};

use quarry_core::{async_trait, Connection, Driver, Error, Result, Row};
use tokio_postgres::{Client, Config, NoTls};

/// Opens connections with `tokio-postgres`.
#[derive(Debug, Clone)]
pub struct Connect {
    config: Config,
}

impl Connect {
    pub fn new(options: &ConnectOptions) -> Connect {
        Connect {
            config: options.to_config(),
        }
    }

    /// Connects to the database named by a `postgresql://` URL.
    pub fn from_url(url: &str) -> Result<Connect> {
        Ok(Connect::new(&ConnectOptions::from_url(url)?))
    }
}

impl From<Config> for Connect {
    fn from(config: Config) -> Self {
        Connect { config }
    }
}

#[async_trait]
impl Driver for Connect {
    async fn connect(&self) -> Result<Box<dyn Connection>> {
        let (client, connection) = self.config.connect(NoTls).await.map_err(Error::driver)?;

        tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::error!(error = %e, "connection error");
            }
        });

        Ok(Box::new(PostgresConnection { client }))
    }
}

#[derive(Debug)]
struct PostgresConnection {
    client: Client,
}

#[async_trait]
impl Connection for PostgresConnection {
    async fn query(&mut self, sql: &str) -> Result<Vec<Row>> {
        let rows = self.client.query(sql, &[]).await.map_err(Error::driver)?;
        value::rows_from_postgres(&rows)
    }

    async fn close(self: Box<Self>) -> Result<()> {
        // Dropping the client ends the spawned connection task.
        drop(self.client);
        Ok(())
    }
}
