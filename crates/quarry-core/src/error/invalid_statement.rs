use super::Error;

/// Error when a statement cannot be expressed in SQL.
///
/// This occurs when:
/// - A conditional expression receives an operand that is neither a query nor a filter
/// - A JSON projection receives an argument of the wrong shape
/// - A method call names a function that has no registered handler
///
/// These errors are raised while formatting, before any statement is executed.
#[derive(Debug)]
pub(super) struct InvalidStatement {
    pub(super) message: Box<str>,
}

impl std::error::Error for InvalidStatement {}

impl core::fmt::Display for InvalidStatement {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid statement: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid statement error.
    pub fn invalid_statement(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidStatement(InvalidStatement {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid statement error.
    pub fn is_invalid_statement(&self) -> bool {
        self.is_kind(|kind| matches!(kind, super::ErrorKind::InvalidStatement(_)))
    }
}
