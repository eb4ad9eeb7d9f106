mod adhoc;
mod driver;
mod invalid_argument;
mod invalid_statement;
mod unsupported_feature;

use adhoc::AdhocError;
use driver::DriverError;
use invalid_argument::InvalidArgument;
use invalid_statement::InvalidStatement;
use std::{fmt, sync::Arc};
use unsupported_feature::UnsupportedFeature;

/// Returns early with an ad-hoc error built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Creates an ad-hoc error from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// The error type shared by the formatter and the adapter.
///
/// Cheap to clone: one pointer to a shared, immutable node. Each node carries
/// either the root failure or a line of context wrapped around an earlier
/// error.
#[derive(Clone)]
pub struct Error {
    inner: Arc<Node>,
}

#[derive(Debug)]
enum Node {
    Root(ErrorKind),
    Context { message: Box<str>, cause: Error },
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    Driver(DriverError),
    InvalidArgument(InvalidArgument),
    InvalidStatement(InvalidStatement),
    UnsupportedFeature(UnsupportedFeature),
}

impl Error {
    /// Wraps this error with a line describing what was being attempted.
    ///
    /// The outermost context is displayed first:
    /// `create table "Person": invalid argument: ...`.
    pub fn context(self, message: impl fmt::Display) -> Error {
        Error {
            inner: Arc::new(Node::Context {
                message: message.to_string().into(),
                cause: self,
            }),
        }
    }

    /// The failure at the bottom of the context chain.
    fn root(&self) -> &ErrorKind {
        let mut err = self;
        loop {
            match &*err.inner {
                Node::Root(kind) => return kind,
                Node::Context { cause, .. } => err = cause,
            }
        }
    }

    fn is_kind(&self, f: impl Fn(&ErrorKind) -> bool) -> bool {
        f(self.root())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &*self.inner {
            Node::Context { cause, .. } => Some(cause),
            Node::Root(ErrorKind::Driver(err)) => Some(err),
            Node::Root(ErrorKind::Anyhow(err)) => Some(err.as_ref()),
            Node::Root(_) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.inner {
            Node::Root(kind) => fmt::Display::fmt(kind, f),
            Node::Context { message, cause } => write!(f, "{message}: {cause}"),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            fmt::Debug::fmt(&self.inner, f)
        } else {
            fmt::Display::fmt(self, f)
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Anyhow(err) => fmt::Display::fmt(err, f),
            ErrorKind::Adhoc(err) => fmt::Display::fmt(err, f),
            ErrorKind::Driver(err) => fmt::Display::fmt(err, f),
            ErrorKind::InvalidArgument(err) => fmt::Display::fmt(err, f),
            ErrorKind::InvalidStatement(err) => fmt::Display::fmt(err, f),
            ErrorKind::UnsupportedFeature(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Arc::new(Node::Root(kind)),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_word() {
        assert_eq!(std::mem::size_of::<Error>(), std::mem::size_of::<usize>());
    }

    #[test]
    fn context_is_displayed_outermost_first() {
        let err = Error::invalid_argument("fields collection cannot be empty")
            .context("create table \"Person\"")
            .context("migrate \"Person\"");

        assert_eq!(
            err.to_string(),
            "migrate \"Person\": create table \"Person\": invalid argument: fields collection cannot be empty"
        );
        assert!(err.is_invalid_argument());
        assert!(!err.is_driver());
    }

    #[test]
    fn err_macro_formats() {
        let err = err!("no handler for method `{}`", "soundex");
        assert_eq!(err.to_string(), "no handler for method `soundex`");
    }

    #[test]
    fn anyhow_bridge() {
        let err: Error = anyhow::anyhow!("something failed").into();
        assert_eq!(err.to_string(), "something failed");
    }

    #[test]
    fn unsupported_feature() {
        let err = Error::unsupported_feature("migration `remove` collection");
        assert_eq!(
            err.to_string(),
            "unsupported feature: migration `remove` collection"
        );
        assert!(err.is_unsupported_feature());
        assert!(!err.is_invalid_statement());
    }

    #[test]
    fn driver_error_keeps_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = Error::driver(io_err).context("open connection");

        assert!(err.is_driver());
        assert_eq!(err.to_string(), "open connection: refused");

        let cause = std::error::Error::source(&err).unwrap();
        assert!(std::error::Error::source(cause).is_some());
    }
}
