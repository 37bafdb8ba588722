//! Interrupt capture for cancellable blocking waits
//!
//! While an [`InterruptScope`] is alive, SIGINT no longer kills the process:
//! it sets a flag that blocking helpers poll, so a user abort can be mapped
//! onto an orderly code path. Once the last scope is dropped, SIGINT gets its
//! default terminating action back.

use clg_core::Result;
use once_cell::sync::OnceCell;
use std::ops::Deref;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::debug;

/// How often blocking helpers look at the interrupt flag
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Process-wide SIGINT routing, installed on first capture
static SIGNAL_STATE: OnceCell<SignalState> = OnceCell::new();

struct SignalState {
    interrupt: Interrupt,
    /// When set, SIGINT performs its default action
    passthrough: Arc<AtomicBool>,
    /// Number of live scopes
    scopes: AtomicUsize,
}

/// A shareable "user asked to abort" flag
#[derive(Debug, Clone, Default)]
pub struct Interrupt {
    flag: Arc<AtomicBool>,
}

impl Interrupt {
    /// Create a flag that only [`trigger`](Interrupt::trigger) can set
    pub fn new() -> Self {
        Self::default()
    }

    /// Route SIGINT to a process-wide flag until the returned scope is dropped.
    ///
    /// The flag is cleared on entry, so a stale interrupt from an earlier
    /// scope is never observed.
    pub fn capture() -> Result<InterruptScope> {
        let state = SIGNAL_STATE.get_or_try_init(install)?;

        if state.scopes.fetch_add(1, Ordering::SeqCst) == 0 {
            state.interrupt.reset();
        }
        state.passthrough.store(false, Ordering::SeqCst);

        Ok(InterruptScope {
            interrupt: state.interrupt.clone(),
        })
    }

    pub fn trigger(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_triggered(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    pub fn reset(&self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

/// Guard keeping SIGINT captured; derefs to the captured [`Interrupt`]
#[derive(Debug)]
pub struct InterruptScope {
    interrupt: Interrupt,
}

impl Deref for InterruptScope {
    type Target = Interrupt;

    fn deref(&self) -> &Interrupt {
        &self.interrupt
    }
}

impl Drop for InterruptScope {
    fn drop(&mut self) {
        if let Some(state) = SIGNAL_STATE.get() {
            if state.scopes.fetch_sub(1, Ordering::SeqCst) == 1 {
                state.passthrough.store(true, Ordering::SeqCst);
            }
        }
    }
}

#[cfg(unix)]
fn install() -> Result<SignalState> {
    use clg_core::Error;
    use signal_hook::consts::SIGINT;
    use signal_hook::flag;

    let interrupt = Interrupt::new();
    let passthrough = Arc::new(AtomicBool::new(true));

    flag::register_conditional_default(SIGINT, Arc::clone(&passthrough))
        .map_err(|e| Error::io("register SIGINT default action", e))?;
    flag::register(SIGINT, Arc::clone(&interrupt.flag))
        .map_err(|e| Error::io("register SIGINT handler", e))?;

    debug!("SIGINT capture installed");
    Ok(SignalState {
        interrupt,
        passthrough,
        scopes: AtomicUsize::new(0),
    })
}

#[cfg(not(unix))]
fn install() -> Result<SignalState> {
    debug!("SIGINT capture is not available on this platform");
    Ok(SignalState {
        interrupt: Interrupt::new(),
        passthrough: Arc::new(AtomicBool::new(true)),
        scopes: AtomicUsize::new(0),
    })
}

/// How a [`wait`] ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitOutcome {
    /// The full duration passed without an interrupt
    Elapsed,
    /// The interrupt fired before the duration passed
    Interrupted,
}

/// Block for `duration` unless `interrupt` fires first.
///
/// The flag is checked before every sleep slice, so even a zero duration
/// reports an interrupt that is already pending. A duration too large to
/// express as a deadline waits until interrupted.
pub fn wait(duration: Duration, interrupt: &Interrupt) -> WaitOutcome {
    let deadline = Instant::now().checked_add(duration);
    loop {
        if interrupt.is_triggered() {
            return WaitOutcome::Interrupted;
        }
        let slice = match deadline {
            Some(deadline) => {
                let remaining = deadline.saturating_duration_since(Instant::now());
                if remaining.is_zero() {
                    return WaitOutcome::Elapsed;
                }
                remaining.min(POLL_INTERVAL)
            }
            None => POLL_INTERVAL,
        };
        thread::sleep(slice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_zero_wait_still_sees_pending_interrupt() {
        let interrupt = Interrupt::new();
        assert_eq!(wait(Duration::ZERO, &interrupt), WaitOutcome::Elapsed);

        interrupt.trigger();
        assert_eq!(wait(Duration::ZERO, &interrupt), WaitOutcome::Interrupted);
    }

    #[test]
    fn test_wait_runs_full_duration() {
        let interrupt = Interrupt::new();
        let start = Instant::now();
        assert_eq!(
            wait(Duration::from_millis(200), &interrupt),
            WaitOutcome::Elapsed
        );
        assert!(start.elapsed() >= Duration::from_millis(200));
    }

    #[test]
    fn test_wait_stops_early_on_interrupt() {
        let interrupt = Interrupt::new();
        let trigger = interrupt.clone();
        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(100));
            trigger.trigger();
        });

        let start = Instant::now();
        assert_eq!(
            wait(Duration::from_secs(30), &interrupt),
            WaitOutcome::Interrupted
        );
        assert!(start.elapsed() < Duration::from_secs(5));
        handle.join().unwrap();
    }

    #[test]
    fn test_unbounded_wait_honours_interrupt() {
        let interrupt = Interrupt::new();
        interrupt.trigger();
        assert_eq!(wait(Duration::MAX, &interrupt), WaitOutcome::Interrupted);

        let interrupt = Interrupt::new();
        let trigger = interrupt.clone();
        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(100));
            trigger.trigger();
        });
        let start = Instant::now();
        assert_eq!(
            wait(Duration::from_secs(u64::MAX), &interrupt),
            WaitOutcome::Interrupted
        );
        assert!(start.elapsed() < Duration::from_secs(5));
        handle.join().unwrap();
    }

    #[test]
    fn test_reset_clears_flag() {
        let interrupt = Interrupt::new();
        interrupt.trigger();
        interrupt.reset();
        assert!(!interrupt.is_triggered());
    }

    #[cfg(unix)]
    #[test]
    #[serial]
    fn test_captured_sigint_sets_flag_instead_of_exiting() {
        let scope = Interrupt::capture().unwrap();
        assert!(!scope.is_triggered());

        signal_hook::low_level::raise(signal_hook::consts::SIGINT).unwrap();

        assert_eq!(wait(Duration::from_secs(5), &scope), WaitOutcome::Interrupted);
    }

    #[cfg(unix)]
    #[test]
    #[serial]
    fn test_new_scope_starts_untriggered() {
        {
            let scope = Interrupt::capture().unwrap();
            scope.trigger();
        }
        let scope = Interrupt::capture().unwrap();
        assert!(!scope.is_triggered());
    }
}
