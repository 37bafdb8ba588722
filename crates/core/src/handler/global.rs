//! Process-wide default handler

use super::{EventHandler, LoggerHandler};
use crate::errors::{Error, Result};
use std::sync::{Arc, OnceLock};
use tracing::debug;

/// Handler installed once at start-up, never replaced afterwards
static DEFAULT_HANDLER: OnceLock<Arc<dyn EventHandler>> = OnceLock::new();

/// Install the handler used by helpers that were not given one explicitly.
///
/// May be called once per process; later calls fail with
/// [`Error::AlreadyInitialized`] and leave the first handler in place.
pub fn init_default_handler(handler: Arc<dyn EventHandler>) -> Result<()> {
    DEFAULT_HANDLER
        .set(handler)
        .map_err(|_| Error::already_initialized("default event handler"))?;

    debug!("Default event handler initialized");
    Ok(())
}

/// The installed default handler, or a [`LoggerHandler`] when none was installed
pub fn default_handler() -> Arc<dyn EventHandler> {
    match DEFAULT_HANDLER.get() {
        Some(handler) => Arc::clone(handler),
        None => Arc::new(LoggerHandler::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::EmitOptions;
    use crate::testing::RecordingHandler;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_default_handler_is_set_once() {
        let recording = Arc::new(RecordingHandler::new());
        init_default_handler(recording.clone()).unwrap();

        default_handler().info("through the default", EmitOptions::default());
        assert_eq!(recording.messages(), vec!["through the default"]);

        let second = init_default_handler(Arc::new(LoggerHandler::new()));
        assert!(matches!(second, Err(Error::AlreadyInitialized { .. })));

        // The first handler is still the one in use
        default_handler().warn("still recorded", EmitOptions::default());
        assert_eq!(recording.messages().len(), 2);
    }
}
