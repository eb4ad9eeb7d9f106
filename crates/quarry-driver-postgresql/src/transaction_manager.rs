/// SQL generator for the adapter's single transaction.
///
/// There are no savepoints: a transaction requested while another one is in
/// flight runs inline inside the outer one.
#[derive(Debug, Default)]
pub(crate) struct TransactionManager {
    active: bool,
}

impl TransactionManager {
    /// Returns `BEGIN TRANSACTION`, or `None` when a transaction is already
    /// in flight.
    pub fn start(&mut self) -> Option<&'static str> {
        if self.active {
            None
        } else {
            self.active = true;
            Some("BEGIN TRANSACTION")
        }
    }

    pub fn commit(&mut self) -> &'static str {
        self.active = false;
        "COMMIT"
    }

    pub fn rollback(&mut self) -> &'static str {
        self.active = false;
        "ROLLBACK"
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Clears the marker without generating SQL, e.g. after the connection
    /// went away.
    pub fn reset(&mut self) {
        self.active = false;
    }
}
