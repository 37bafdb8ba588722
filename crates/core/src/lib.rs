//! Core types for the `clg` command-line helpers.
//!
//! This crate holds the pieces every helper depends on: the severity levels a
//! message can be emitted at, the options that travel with an emission, and
//! the `EventHandler` capability that presents messages and, when asked to,
//! terminates the process.
//!
//! ## Key Components
//!
//! - **`severity`**: The `Severity` enum and its mapping onto `tracing` levels.
//! - **`options`**: `EmitOptions`, carrying `quit`, `exit_code` and
//!   `confidential` alongside a message.
//! - **`handler`**: The `EventHandler` trait, the console and logger handlers,
//!   and the process-wide default handler.
//! - **`errors`**: The crate `Error` enum and `Result` alias.
//! - **`process`**: The flushed process-exit primitive used on `quit`.

pub mod constants;
pub mod errors;
pub mod handler;
pub mod options;
pub mod process;
pub mod severity;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use self::{
    constants::*,
    errors::{Error, Result},
    handler::{
        default_handler, init_default_handler, ConsoleHandler, ConsoleWriter, EventHandler,
        LoggerHandler,
    },
    options::EmitOptions,
    severity::Severity,
};
