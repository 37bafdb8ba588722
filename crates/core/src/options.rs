//! Options travelling with a single emission

use crate::severity::Severity;

/// Per-call options for [`EventHandler::emit`](crate::EventHandler::emit).
///
/// `quit` is never turned on implicitly: every terminating emission asks for
/// it explicitly. An unset `exit_code` resolves through
/// [`Severity::default_exit_code`], so a quitting `error` exits with 1 and
/// every other severity exits with 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitOptions {
    /// Terminate the process once the message has been emitted
    pub quit: bool,
    /// Code passed to the termination primitive
    pub exit_code: Option<i32>,
    /// Keep the message off persistent sinks (console only)
    pub confidential: bool,
}

impl EmitOptions {
    /// Options for an emission that terminates with the severity's default code
    pub fn quit() -> Self {
        Self {
            quit: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_quit(mut self, quit: bool) -> Self {
        self.quit = quit;
        self
    }

    #[must_use]
    pub fn with_exit_code(mut self, exit_code: i32) -> Self {
        self.exit_code = Some(exit_code);
        self
    }

    #[must_use]
    pub fn with_confidential(mut self, confidential: bool) -> Self {
        self.confidential = confidential;
        self
    }

    /// The exit code a quitting emission at `severity` terminates with
    pub fn exit_code_for(&self, severity: Severity) -> i32 {
        self.exit_code.unwrap_or_else(|| severity.default_exit_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn any_severity() -> impl Strategy<Value = Severity> {
        prop::sample::select(Severity::ALL.to_vec())
    }

    #[test]
    fn test_defaults() {
        let options = EmitOptions::default();
        assert!(!options.quit);
        assert!(!options.confidential);
        assert_eq!(options.exit_code_for(Severity::Error), 1);
        assert_eq!(options.exit_code_for(Severity::Info), 0);
    }

    #[test]
    fn test_quit_shortcut_leaves_code_unset() {
        let options = EmitOptions::quit();
        assert!(options.quit);
        assert_eq!(options.exit_code, None);
        assert_eq!(options.exit_code_for(Severity::Info), 0);
    }

    proptest! {
        #[test]
        fn explicit_exit_code_wins_for_every_severity(
            code in any::<i32>(),
            severity in any_severity(),
        ) {
            let options = EmitOptions::default().with_exit_code(code);
            prop_assert_eq!(options.exit_code_for(severity), code);
        }

        #[test]
        fn builders_never_flip_quit(code in any::<i32>(), confidential in any::<bool>()) {
            let options = EmitOptions::default()
                .with_exit_code(code)
                .with_confidential(confidential);
            prop_assert!(!options.quit);
        }
    }
}
