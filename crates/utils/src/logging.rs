//! Tracing subscriber setup behind the logger handler
//!
//! Reads `CLG_LOG` and `CLG_LOG_FILE`, then installs a compact stderr layer
//! and, when a file is configured, a plain-text file layer that never
//! receives confidential messages.

use clg_core::{
    Error, Result, CLG_LOG_FILE_VAR, CLG_LOG_VAR, CONFIDENTIAL_TARGET, DEFAULT_LOG_FILTER,
};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{
    filter::filter_fn, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

/// Settings for the tracing subscriber behind [`LoggerHandler`](clg_core::LoggerHandler)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig {
    /// `EnvFilter` directives; overrides `verbose`
    pub filter: Option<String>,
    /// Append plain-text logs to this file
    pub file: Option<PathBuf>,
    /// Show every severity, verbose included
    pub verbose: bool,
}

impl LogConfig {
    /// Read `CLG_LOG` and `CLG_LOG_FILE`
    pub fn from_env() -> Self {
        Self {
            filter: std::env::var(CLG_LOG_VAR).ok().filter(|f| !f.is_empty()),
            file: std::env::var_os(CLG_LOG_FILE_VAR)
                .filter(|f| !f.is_empty())
                .map(PathBuf::from),
            verbose: false,
        }
    }

    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    #[must_use]
    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    fn env_filter(&self) -> Result<EnvFilter> {
        let directives = match (&self.filter, self.verbose) {
            (Some(filter), _) => filter.as_str(),
            (None, true) => "trace",
            (None, false) => DEFAULT_LOG_FILTER,
        };
        EnvFilter::try_new(directives)
            .map_err(|e| Error::logging(format!("invalid filter '{directives}': {e}")))
    }
}

/// Initialize the tracing system
///
/// Console output goes to stderr in a compact format. When a log file is
/// configured, a second plain-text layer appends to it and drops events on
/// the confidential target, so those only ever reach the terminal.
pub fn init(config: &LogConfig) -> Result<()> {
    let filter = config.env_filter()?;

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(is_tty())
        .compact()
        .with_target(false)
        .without_time()
        .with_level(true);

    let file_layer = match &config.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| Error::io(format!("open log file {}", path.display()), e))?;
            Some(
                fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_filter(filter_fn(|metadata| {
                        metadata.target() != CONFIDENTIAL_TARGET
                    })),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| Error::logging(e.to_string()))?;

    Ok(())
}

/// Check if we're running in a TTY environment
fn is_tty() -> bool {
    std::io::IsTerminal::is_terminal(&std::io::stderr())
}
