//! Confirmation and execution helpers for command-line tools
//!
//! Every helper reports through an [`EventHandler`](clg_core::EventHandler):
//!
//! - [`confirm`]: interactive or timed confirmation before a risky action.
//! - [`guard`]: run a fallible operation, logging declared failures uniformly.
//! - [`execute`]: run an operation that reports `(success, stdout, stderr)`.
//!
//! [`interrupt`] provides the Ctrl+C capture the timed confirmation relies on,
//! and [`logging`] installs the tracing subscriber behind the logger handler.

pub mod confirm;
pub mod execute;
pub mod guard;
pub mod interrupt;
pub mod logging;

pub use confirm::{ask, ask_with, ConfirmationRequest, Response};
pub use execute::{execute, Execution, StatusOutput};
pub use guard::{catch, AnyFailure, ErrorKinds, FailureKinds, Guard};
pub use interrupt::{Interrupt, InterruptScope, WaitOutcome};
pub use logging::LogConfig;
