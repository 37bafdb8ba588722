use clg_core::{Error, Result};
use clg_utils::Execution;
use std::io::{self, Write};
use std::process::Command;

pub fn execute(
    message: String,
    quit: bool,
    show_warnings: bool,
    command: Vec<String>,
) -> Result<()> {
    // clap enforces at least one value
    let Some((program, args)) = command.split_first() else {
        return Ok(());
    };

    let mut child = Command::new(program);
    child.args(args);

    let stdout = Execution::new(message)
        .quit(quit)
        .show_warnings(show_warnings)
        .run_command(&mut child);

    let mut out = io::stdout().lock();
    out.write_all(stdout.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|e| Error::io("write command output", e))
}
