//! Handler backed by the `tracing` ecosystem

use super::EventHandler;
use crate::constants::{CONFIDENTIAL_TARGET, LOG_TARGET};
use crate::severity::Severity;

/// Handler forwarding every message to `tracing`.
///
/// Regular messages are recorded under the `clg` target. Confidential ones
/// use `clg::confidential`, which file sinks drop so that only the console
/// layer shows them.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggerHandler;

impl LoggerHandler {
    pub fn new() -> Self {
        Self
    }
}

// `tracing` needs the level and target as constants at each call site
macro_rules! record {
    ($target:expr, $severity:expr, $message:expr) => {
        match $severity {
            Severity::Verbose => tracing::trace!(target: $target, "{}", $message),
            Severity::Debug => tracing::debug!(target: $target, "{}", $message),
            Severity::Info => tracing::info!(target: $target, "{}", $message),
            Severity::Warn => tracing::warn!(target: $target, "{}", $message),
            Severity::Error => tracing::error!(target: $target, "{}", $message),
        }
    };
}

impl EventHandler for LoggerHandler {
    fn write(&self, severity: Severity, message: &str, confidential: bool) {
        if confidential {
            record!(CONFIDENTIAL_TARGET, severity, message);
        } else {
            record!(LOG_TARGET, severity, message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::EmitOptions;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for SharedBuffer {
        type Writer = SharedBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn capture(f: impl FnOnce()) -> String {
        let buffer = SharedBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(buffer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_severities_map_to_tracing_levels() {
        let output = capture(|| {
            let handler = LoggerHandler::new();
            handler.verbose("v-msg", EmitOptions::default());
            handler.warn("w-msg", EmitOptions::default());
            handler.error("e-msg", EmitOptions::default());
        });

        assert!(output.contains("TRACE clg: v-msg"), "{output}");
        assert!(output.contains("WARN clg: w-msg"), "{output}");
        assert!(output.contains("ERROR clg: e-msg"), "{output}");
    }

    #[test]
    fn test_confidential_uses_dedicated_target() {
        let output = capture(|| {
            LoggerHandler::new().info(
                "token=abc",
                EmitOptions::default().with_confidential(true),
            );
        });

        assert!(output.contains("clg::confidential: token=abc"), "{output}");
    }
}
