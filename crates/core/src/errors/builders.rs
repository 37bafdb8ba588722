//! Builder methods for creating errors with context

use super::types::Error;

impl Error {
    /// Create an I/O error tagged with the operation that failed
    #[must_use]
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            operation: operation.into(),
            source,
        }
    }

    #[must_use]
    pub fn already_initialized(what: impl Into<String>) -> Self {
        Error::AlreadyInitialized { what: what.into() }
    }

    #[must_use]
    pub fn logging(message: impl Into<String>) -> Self {
        Error::Logging {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn invalid_severity(value: impl Into<String>) -> Self {
        Error::InvalidSeverity {
            value: value.into(),
        }
    }
}
