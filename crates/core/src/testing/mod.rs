//! Test support: a handler that records emissions instead of printing them
//!
//! `RecordingHandler` never exits the process. Its `terminate` unwinds with a
//! [`Terminated`] payload, which [`expect_termination`] turns back into the
//! exit code the real handler would have used.

use crate::handler::EventHandler;
use crate::severity::Severity;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Mutex, MutexGuard};

/// Unwind payload standing in for a process exit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Terminated(pub i32);

/// One recorded call to [`EventHandler::write`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emission {
    pub severity: Severity,
    pub message: String,
    pub confidential: bool,
}

/// Handler keeping every emission in memory
#[derive(Debug, Default)]
pub struct RecordingHandler {
    emissions: Mutex<Vec<Emission>>,
}

impl RecordingHandler {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Emission>> {
        self.emissions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn emissions(&self) -> Vec<Emission> {
        self.lock().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.lock().iter().map(|e| e.message.clone()).collect()
    }

    pub fn severities(&self) -> Vec<Severity> {
        self.lock().iter().map(|e| e.severity).collect()
    }

    /// Messages recorded at `severity`, in emission order
    pub fn messages_at(&self, severity: Severity) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|e| e.severity == severity)
            .map(|e| e.message.clone())
            .collect()
    }
}

impl EventHandler for RecordingHandler {
    fn write(&self, severity: Severity, message: &str, confidential: bool) {
        self.lock().push(Emission {
            severity,
            message: message.to_string(),
            confidential,
        });
    }

    fn terminate(&self, code: i32) -> ! {
        // resume_unwind skips the panic hook, so tests stay quiet
        panic::resume_unwind(Box::new(Terminated(code)))
    }
}

/// Run `f`, which must end in a handler termination, and return the exit code.
///
/// Panics if `f` returns normally or panics for any other reason.
pub fn expect_termination<F: FnOnce()>(f: F) -> i32 {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(()) => panic!("expected the handler to terminate, but control returned"),
        Err(payload) => match payload.downcast::<Terminated>() {
            Ok(terminated) => terminated.0,
            Err(other) => panic::resume_unwind(other),
        },
    }
}
