use super::Error;

/// Error when a caller passes a malformed argument.
///
/// This occurs when:
/// - A fields collection is empty where at least one field is required
/// - A migration descriptor is missing its target table
/// - The number of `?` placeholders does not match the supplied values
///
/// These errors are raised before any statement reaches the database.
#[derive(Debug)]
pub(super) struct InvalidArgument {
    message: Box<str>,
}

impl std::error::Error for InvalidArgument {}

impl core::fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid argument: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidArgument(InvalidArgument {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid argument error.
    pub fn is_invalid_argument(&self) -> bool {
        self.is_kind(|kind| matches!(kind, super::ErrorKind::InvalidArgument(_)))
    }
}
