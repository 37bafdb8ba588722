//! The free-function helpers report through the process default handler

use clg_core::testing::{expect_termination, Emission, RecordingHandler};
use clg_core::{init_default_handler, Severity};
use clg_utils::{catch, execute, AnyFailure, ErrorKinds};
use serial_test::serial;
use std::sync::{Arc, OnceLock};

static RECORDER: OnceLock<Arc<RecordingHandler>> = OnceLock::new();

fn recorder() -> &'static Arc<RecordingHandler> {
    RECORDER.get_or_init(|| {
        let handler = Arc::new(RecordingHandler::new());
        init_default_handler(handler.clone()).unwrap();
        handler
    })
}

/// Emissions recorded while `f` runs
fn recorded(f: impl FnOnce()) -> Vec<Emission> {
    let handler = recorder();
    let before = handler.emissions().len();
    f();
    handler.emissions()[before..].to_vec()
}

#[test]
#[serial]
fn test_catch_returns_value_through_default_handler() {
    let mut value = None;
    let emissions = recorded(|| {
        value = catch("Counting", || Ok::<_, std::io::Error>(3), &AnyFailure).unwrap();
    });

    assert_eq!(value, Some(3));
    assert_eq!(emissions.len(), 1);
    assert_eq!(emissions[0].severity, Severity::Info);
    assert_eq!(emissions[0].message, "Counting");
}

#[test]
#[serial]
fn test_catch_declared_anyhow_failure() {
    let kinds = ErrorKinds::new().with::<std::num::ParseIntError>();
    let emissions = recorded(|| {
        let result = catch(
            "Parsing limit",
            || Ok::<u32, anyhow::Error>("ten".parse::<u32>()?),
            &kinds,
        );
        assert!(result.unwrap().is_none());
    });

    assert_eq!(emissions.len(), 2);
    assert_eq!(emissions[1].severity, Severity::Error);
    assert!(emissions[1].message.starts_with("Parsing limit failed: "));
}

#[test]
#[serial]
fn test_execute_defaults_quit_on_failure() {
    recorder();
    let code = expect_termination(|| {
        execute("Deploying", || (false, "", "permission denied"));
    });
    assert_eq!(code, 1);

    let last = recorder().emissions().pop().unwrap();
    assert_eq!(last.severity, Severity::Error);
    assert_eq!(last.message, "Deploying failed: permission denied");
}

#[test]
#[serial]
fn test_execute_defaults_show_warnings() {
    let mut stdout = String::new();
    let emissions = recorded(|| {
        stdout = execute("Building", || (true, "built", "deprecated flag"));
    });

    assert_eq!(stdout, "built");
    let warnings: Vec<_> = emissions
        .iter()
        .filter(|e| e.severity == Severity::Warn)
        .map(|e| e.message.as_str())
        .collect();
    assert_eq!(warnings, vec!["deprecated flag"]);
}
