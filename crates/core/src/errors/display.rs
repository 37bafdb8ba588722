//! Display implementations for error types

use super::types::Error;
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io { operation, source } => {
                write!(f, "{operation} failed: {source}")
            }
            Error::AlreadyInitialized { what } => {
                write!(f, "{what} is already initialized")
            }
            Error::Logging { message } => {
                write!(f, "logging setup failed: {message}")
            }
            Error::InvalidSeverity { value } => {
                write!(
                    f,
                    "invalid severity '{value}' (expected verbose, debug, info, warn or error)"
                )
            }
        }
    }
}
