//! Severity levels a message can be emitted at

use crate::errors::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Named log level of an emitted message.
///
/// The order of the variants carries no meaning for the helpers; filtering by
/// verbosity is left to the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Verbose,
    Debug,
    Info,
    Warn,
    Error,
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::Verbose,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
    ];

    /// Exit code used when a quitting emission does not name one
    pub fn default_exit_code(self) -> i32 {
        match self {
            Severity::Error => 1,
            _ => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Verbose => "verbose",
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }

    /// The `tracing` level a logger-backed handler records this severity at
    pub fn level(self) -> tracing::Level {
        match self {
            Severity::Verbose => tracing::Level::TRACE,
            Severity::Debug => tracing::Level::DEBUG,
            Severity::Info => tracing::Level::INFO,
            Severity::Warn => tracing::Level::WARN,
            Severity::Error => tracing::Level::ERROR,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "verbose" => Ok(Severity::Verbose),
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warn" | "warning" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            _ => Err(Error::invalid_severity(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_error_defaults_to_failure_code() {
        for severity in Severity::ALL {
            let expected = if severity == Severity::Error { 1 } else { 0 };
            assert_eq!(severity.default_exit_code(), expected, "{severity}");
        }
    }

    #[test]
    fn test_parse_round_trips_display() {
        for severity in Severity::ALL {
            assert_eq!(severity.to_string().parse::<Severity>().unwrap(), severity);
        }
    }

    #[test]
    fn test_parse_accepts_warning_alias_and_case() {
        assert_eq!("WARNING".parse::<Severity>().unwrap(), Severity::Warn);
        assert_eq!("Info".parse::<Severity>().unwrap(), Severity::Info);
        assert!(matches!(
            "fatal".parse::<Severity>(),
            Err(Error::InvalidSeverity { .. })
        ));
    }

    #[test]
    fn test_verbose_maps_to_trace() {
        assert_eq!(Severity::Verbose.level(), tracing::Level::TRACE);
        assert_eq!(Severity::Error.level(), tracing::Level::ERROR);
    }
}
