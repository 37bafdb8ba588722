use clg_core::{ConsoleHandler, EmitOptions, EventHandler, LoggerHandler, Result, Severity};

pub fn execute(
    severity: Severity,
    message: &str,
    quit: bool,
    exit_code: Option<i32>,
    confidential: bool,
    logger: bool,
) -> Result<()> {
    let mut options = EmitOptions::default()
        .with_quit(quit)
        .with_confidential(confidential);
    if let Some(code) = exit_code {
        options = options.with_exit_code(code);
    }

    if logger {
        LoggerHandler::new().emit(severity, message, options);
    } else {
        ConsoleHandler::new().emit(severity, message, options);
    }
    Ok(())
}
