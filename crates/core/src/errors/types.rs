//! Core error type definitions

/// Result type alias for clg operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for clg operations using thiserror
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O on the interactive streams or a log sink
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// A process-wide value was set more than once
    AlreadyInitialized { what: String },

    /// The tracing subscriber could not be installed
    Logging { message: String },

    /// A severity name that is not one of verbose/debug/info/warn/error
    InvalidSeverity { value: String },
}
