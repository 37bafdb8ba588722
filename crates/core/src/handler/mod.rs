//! The `EventHandler` capability and its built-in variants
//!
//! A handler presents messages at one of five severities. Every emission
//! carries [`EmitOptions`]; when `quit` is set the handler terminates the
//! process after the message has been written, and control never returns to
//! the caller.
//!
//! Two handlers ship with the crate:
//!
//! - [`ConsoleHandler`] prints every message on the terminal.
//! - [`LoggerHandler`] forwards messages to `tracing`, leaving formatting,
//!   filtering and sinks to whichever subscriber the binary installed.

pub mod console;
pub mod global;
pub mod logger;

pub use console::{ConsoleHandler, ConsoleWriter};
pub use global::{default_handler, init_default_handler};
pub use logger::LoggerHandler;

use crate::options::EmitOptions;
use crate::severity::Severity;

/// A sink for leveled messages with optional process termination.
///
/// Implementors only provide [`write`](EventHandler::write). The provided
/// methods layer the quit/exit-code protocol on top of it so every handler
/// terminates the same way: message first, then exit.
pub trait EventHandler: Send + Sync {
    /// Present `message` through the handler's output channel.
    ///
    /// `confidential` messages must stay off persistent sinks.
    fn write(&self, severity: Severity, message: &str, confidential: bool);

    /// Terminate the process. Called only after `write` returned.
    fn terminate(&self, code: i32) -> ! {
        crate::process::exit(code)
    }

    /// Emit `message` at `severity`, terminating when `options.quit` is set.
    fn emit(&self, severity: Severity, message: &str, options: EmitOptions) {
        self.write(severity, message, options.confidential);
        if options.quit {
            self.terminate(options.exit_code_for(severity));
        }
    }

    /// Emit `message` at `severity` and terminate, whatever `options.quit` says.
    fn quit(&self, severity: Severity, message: &str, options: EmitOptions) -> ! {
        self.write(severity, message, options.confidential);
        self.terminate(options.exit_code_for(severity))
    }

    fn verbose(&self, message: &str, options: EmitOptions) {
        self.emit(Severity::Verbose, message, options);
    }

    fn debug(&self, message: &str, options: EmitOptions) {
        self.emit(Severity::Debug, message, options);
    }

    fn info(&self, message: &str, options: EmitOptions) {
        self.emit(Severity::Info, message, options);
    }

    fn warn(&self, message: &str, options: EmitOptions) {
        self.emit(Severity::Warn, message, options);
    }

    /// Error emissions exit with 1 unless `options` name another code.
    fn error(&self, message: &str, options: EmitOptions) {
        self.emit(Severity::Error, message, options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{expect_termination, RecordingHandler};

    #[test]
    fn test_emit_without_quit_returns_for_every_severity() {
        let handler = RecordingHandler::new();
        for severity in Severity::ALL {
            handler.emit(severity, "hello", EmitOptions::default());
        }
        assert_eq!(handler.severities(), Severity::ALL.to_vec());
    }

    #[test]
    fn test_error_quit_defaults_to_code_one() {
        let handler = RecordingHandler::new();
        let code = expect_termination(|| handler.error("boom", EmitOptions::quit()));
        assert_eq!(code, 1);
        assert_eq!(handler.messages(), vec!["boom"]);
    }

    #[test]
    fn test_info_quit_defaults_to_code_zero() {
        let handler = RecordingHandler::new();
        let code = expect_termination(|| handler.info("bye", EmitOptions::quit()));
        assert_eq!(code, 0);
    }

    #[test]
    fn test_explicit_exit_code_is_forwarded() {
        let handler = RecordingHandler::new();
        let code = expect_termination(|| {
            handler.warn("careful", EmitOptions::quit().with_exit_code(4))
        });
        assert_eq!(code, 4);
    }

    #[test]
    fn test_message_is_written_before_termination() {
        let handler = RecordingHandler::new();
        expect_termination(|| handler.quit(Severity::Debug, "last words", EmitOptions::default()));
        assert_eq!(handler.messages(), vec!["last words"]);
    }

    #[test]
    fn test_confidential_flag_reaches_write() {
        let handler = RecordingHandler::new();
        handler.info(
            "password=hunter2",
            EmitOptions::default().with_confidential(true),
        );
        assert!(handler.emissions()[0].confidential);
    }
}
