//! Conversion implementations for error types

use super::types::Error;

// Bare `?` on an io::Error loses the operation name, so callers should prefer `Error::io`
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::Io {
            operation: "I/O".to_string(),
            source: error,
        }
    }
}
