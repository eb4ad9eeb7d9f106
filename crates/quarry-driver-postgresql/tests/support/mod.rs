//! A driver that records every statement instead of talking to a server.
#![allow(dead_code)]

mod catalog;
pub use catalog::FakeCatalog;

use quarry_core::{async_trait, Connection, Driver, Error, Result, Row};
use quarry_driver_postgresql::PostgreSQL;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

type Responder = Arc<dyn Fn(&str) -> Result<Vec<Row>> + Send + Sync>;

/// SQL statements sent through a [`LoggingDriver`], in order.
#[derive(Debug, Clone, Default)]
pub struct ExecLog {
    statements: Arc<Mutex<Vec<String>>>,
}

impl ExecLog {
    pub fn statements(&self) -> Vec<String> {
        self.statements.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.statements.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.statements.lock().unwrap().clear();
    }

    /// Number of statements starting with `prefix`.
    pub fn count(&self, prefix: &str) -> usize {
        self.statements
            .lock()
            .unwrap()
            .iter()
            .filter(|sql| sql.starts_with(prefix))
            .count()
    }

    pub fn any(&self, prefix: &str) -> bool {
        self.count(prefix) > 0
    }

    /// Statements that change something: everything except `SELECT`s.
    pub fn writes(&self) -> Vec<String> {
        self.statements()
            .into_iter()
            .filter(|sql| !sql.starts_with("SELECT"))
            .collect()
    }

    fn push(&self, sql: &str) {
        self.statements.lock().unwrap().push(sql.to_string());
    }
}

#[derive(Clone)]
pub struct LoggingDriver {
    log: ExecLog,
    responder: Responder,
    connects: Arc<AtomicUsize>,
    closes: Arc<AtomicUsize>,
    refuse: bool,
}

impl LoggingDriver {
    /// A driver answering every statement with no rows.
    pub fn new() -> LoggingDriver {
        LoggingDriver::respond(|_| Ok(vec![]))
    }

    pub fn respond<F>(responder: F) -> LoggingDriver
    where
        F: Fn(&str) -> Result<Vec<Row>> + Send + Sync + 'static,
    {
        LoggingDriver {
            log: ExecLog::default(),
            responder: Arc::new(responder),
            connects: Arc::default(),
            closes: Arc::default(),
            refuse: false,
        }
    }

    /// A driver answering from a shared in-memory catalog.
    pub fn catalog(catalog: Arc<Mutex<FakeCatalog>>) -> LoggingDriver {
        LoggingDriver::respond(move |sql| catalog.lock().unwrap().respond(sql))
    }

    /// A driver whose connection attempts fail.
    pub fn refusing() -> LoggingDriver {
        LoggingDriver {
            refuse: true,
            ..LoggingDriver::new()
        }
    }

    pub fn log(&self) -> ExecLog {
        self.log.clone()
    }

    pub fn connects(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }

    pub fn closes(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

impl std::fmt::Debug for LoggingDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggingDriver")
            .field("log", &self.log)
            .finish()
    }
}

#[async_trait]
impl Driver for LoggingDriver {
    async fn connect(&self) -> Result<Box<dyn Connection>> {
        if self.refuse {
            return Err(Error::driver(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            )));
        }

        self.connects.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(LoggingConnection {
            log: self.log.clone(),
            responder: self.responder.clone(),
            closes: self.closes.clone(),
        }))
    }
}

struct LoggingConnection {
    log: ExecLog,
    responder: Responder,
    closes: Arc<AtomicUsize>,
}

impl std::fmt::Debug for LoggingConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggingConnection").finish()
    }
}

#[async_trait]
impl Connection for LoggingConnection {
    async fn query(&mut self, sql: &str) -> Result<Vec<Row>> {
        self.log.push(sql);
        (self.responder)(sql)
    }

    async fn close(self: Box<Self>) -> Result<()> {
        self.closes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// An adapter over a fresh in-memory catalog.
pub fn adapter() -> (PostgreSQL<LoggingDriver>, ExecLog, Arc<Mutex<FakeCatalog>>) {
    let catalog = Arc::new(Mutex::new(FakeCatalog::default()));
    let driver = LoggingDriver::catalog(catalog.clone());
    let log = driver.log();
    (PostgreSQL::with_driver(driver), log, catalog)
}

/// A single `count` row.
pub fn count(n: i64) -> Vec<Row> {
    vec![Row::from_pairs([("count", n.into())])]
}
