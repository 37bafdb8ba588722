//! Guarded execution: run an operation, logging declared failures uniformly
//!
//! The guard is selective. Failures the caller declared are logged once at
//! `error` and swallowed (or terminate the process, if the failure options say
//! so); every other failure comes back to the caller untouched.

use clg_core::{default_handler, EmitOptions, EventHandler, Severity};
use std::any::type_name;
use std::fmt;
use std::sync::Arc;

/// The set of failures a [`Guard`] intercepts
pub trait FailureKinds<E: ?Sized> {
    fn intercepts(&self, error: &E) -> bool;
}

impl<E, F> FailureKinds<E> for F
where
    F: Fn(&E) -> bool,
{
    fn intercepts(&self, error: &E) -> bool {
        self(error)
    }
}

/// Intercept every failure
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyFailure;

impl<E: ?Sized> FailureKinds<E> for AnyFailure {
    fn intercepts(&self, _error: &E) -> bool {
        true
    }
}

/// A list of concrete error types, matched against an `anyhow::Error`.
///
/// ```
/// use clg_utils::guard::ErrorKinds;
///
/// let kinds = ErrorKinds::new()
///     .with::<std::io::Error>()
///     .with::<std::num::ParseIntError>();
/// assert_eq!(kinds.len(), 2);
/// ```
#[derive(Clone, Default)]
pub struct ErrorKinds {
    matchers: Vec<(&'static str, fn(&anyhow::Error) -> bool)>,
}

impl ErrorKinds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `K` to the intercepted kinds
    #[must_use]
    pub fn with<K>(mut self) -> Self
    where
        K: std::error::Error + Send + Sync + 'static,
    {
        self.matchers
            .push((type_name::<K>(), |error: &anyhow::Error| {
                error.downcast_ref::<K>().is_some()
            }));
        self
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

impl fmt::Debug for ErrorKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.matchers.iter().map(|(name, _)| name))
            .finish()
    }
}

impl FailureKinds<anyhow::Error> for ErrorKinds {
    fn intercepts(&self, error: &anyhow::Error) -> bool {
        self.matchers.iter().any(|(_, matches)| matches(error))
    }
}

/// Announces an operation, runs it, and reports declared failures
pub struct Guard {
    message: String,
    handler: Arc<dyn EventHandler>,
    severity: Severity,
    feedback: bool,
    failure: EmitOptions,
}

impl Guard {
    /// A guard reporting through the process default handler at `info`
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            handler: default_handler(),
            severity: Severity::Info,
            feedback: false,
            failure: EmitOptions::default(),
        }
    }

    #[must_use]
    pub fn handler(mut self, handler: Arc<dyn EventHandler>) -> Self {
        self.handler = handler;
        self
    }

    /// Severity of the start and done messages
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Emit `"<message> done"` after a successful run
    #[must_use]
    pub fn feedback(mut self, feedback: bool) -> Self {
        self.feedback = feedback;
        self
    }

    /// Options forwarded to the failure emission, e.g. [`EmitOptions::quit`]
    #[must_use]
    pub fn on_failure(mut self, options: EmitOptions) -> Self {
        self.failure = options;
        self
    }

    /// Run `operation`.
    ///
    /// - success: `Ok(Some(value))`
    /// - declared failure: logged at `error`, then `Ok(None)` (unless the
    ///   failure options terminate the process)
    /// - undeclared failure: `Err(error)` exactly as the operation returned it
    pub fn run<T, E, K, F>(&self, kinds: &K, operation: F) -> Result<Option<T>, E>
    where
        F: FnOnce() -> Result<T, E>,
        K: FailureKinds<E> + ?Sized,
        E: fmt::Display,
    {
        let handler = self.handler.as_ref();
        handler.emit(self.severity, &self.message, EmitOptions::default());

        match operation() {
            Ok(value) => {
                if self.feedback {
                    handler.emit(
                        self.severity,
                        &format!("{} done", self.message),
                        EmitOptions::default(),
                    );
                }
                Ok(Some(value))
            }
            Err(error) if kinds.intercepts(&error) => {
                handler.error(&format!("{} failed: {}", self.message, error), self.failure);
                Ok(None)
            }
            Err(error) => Err(error),
        }
    }
}

/// Run `operation` under a [`Guard`] with default settings
pub fn catch<T, E, K, F>(message: &str, operation: F, kinds: &K) -> Result<Option<T>, E>
where
    F: FnOnce() -> Result<T, E>,
    K: FailureKinds<E> + ?Sized,
    E: fmt::Display,
{
    Guard::new(message).run(kinds, operation)
}
