//! Confirmation gate run before a risky action proceeds
//!
//! The gate either asks on the terminal (`[y/N]`, empty means no) or, when
//! forced, announces a countdown the user can abort with Ctrl+C. A refusal is
//! an expected user choice, not a fault: the negative message is emitted at
//! `info` and the process exits with code 0.

use crate::interrupt::{self, Interrupt, WaitOutcome, POLL_INTERVAL};
use clg_core::{ConsoleHandler, EmitOptions, Error, EventHandler, Result, Severity};
use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_PROMPT: &str = "Continue?";
pub const DEFAULT_NEGATIVE_MESSAGE: &str = "command aborted";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Everything one confirmation needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationRequest {
    pub prompt: String,
    /// Emitted at `info` before exiting when the answer is no
    pub negative_message: String,
    /// Emitted at `warn` before anything else
    pub warning: Option<String>,
    /// Skip the question and run the abortable countdown instead
    pub force: bool,
    pub timeout: Duration,
}

impl Default for ConfirmationRequest {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            negative_message: DEFAULT_NEGATIVE_MESSAGE.to_string(),
            warning: None,
            force: false,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ConfirmationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn negative_message(mut self, message: impl Into<String>) -> Self {
        self.negative_message = message.into();
        self
    }

    #[must_use]
    pub fn warning(mut self, warning: impl Into<String>) -> Self {
        self.warning = Some(warning.into());
        self
    }

    #[must_use]
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Run the gate on the terminal, reporting through a [`ConsoleHandler`]
    pub fn ask(&self) -> Result<()> {
        ask(self, &ConsoleHandler::new())
    }
}

/// A recognised answer to the `[y/N]` question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    Yes,
    No,
}

impl Response {
    /// Parse one raw input line. `None` means the answer must be asked again.
    pub fn parse(line: &str) -> Option<Response> {
        let answer = line.trim_end_matches(|c| c == '\n' || c == '\r');
        match answer.to_lowercase().as_str() {
            "" | "n" => Some(Response::No),
            "y" => Some(Response::Yes),
            _ => None,
        }
    }
}

/// Where interactive answers come from
pub trait LineSource {
    /// Read one line, terminator included.
    ///
    /// Returns `Ok(None)` when the input is exhausted or `interrupt` fired
    /// before a line arrived.
    fn read_line(&mut self, interrupt: &Interrupt) -> io::Result<Option<String>>;
}

/// Lines from any buffered reader
#[derive(Debug)]
pub struct ReaderLines<R> {
    reader: R,
}

impl<R: BufRead> ReaderLines<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderLines<R> {
    fn read_line(&mut self, interrupt: &Interrupt) -> io::Result<Option<String>> {
        if interrupt.is_triggered() {
            return Ok(None);
        }
        let mut line = String::new();
        match self.reader.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }
}

/// Lines from stdin, read on a helper thread so an interrupt can cut the wait short.
///
/// Exactly one line is requested from the terminal per call, so nothing is
/// consumed beyond the answer itself.
#[derive(Debug, Default)]
pub struct StdinLines {
    pending: Option<Receiver<io::Result<String>>>,
}

impl StdinLines {
    pub fn new() -> Self {
        Self::default()
    }

    fn spawn_reader() -> io::Result<Receiver<io::Result<String>>> {
        let (tx, rx) = mpsc::channel();
        thread::Builder::new()
            .name("clg-stdin".to_string())
            .spawn(move || {
                let mut line = String::new();
                let result = io::stdin().lock().read_line(&mut line).map(|_| line);
                let _ = tx.send(result);
            })?;
        Ok(rx)
    }
}

impl LineSource for StdinLines {
    fn read_line(&mut self, interrupt: &Interrupt) -> io::Result<Option<String>> {
        // A read left over from an interrupted call is still the one to wait on
        let rx = match self.pending.take() {
            Some(rx) => rx,
            None => Self::spawn_reader()?,
        };

        loop {
            if interrupt.is_triggered() {
                self.pending = Some(rx);
                return Ok(None);
            }
            match rx.recv_timeout(POLL_INTERVAL) {
                Ok(Ok(line)) if line.is_empty() => return Ok(None),
                Ok(Ok(line)) => return Ok(Some(line)),
                Ok(Err(e)) => return Err(e),
                Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => return Ok(None),
            }
        }
    }
}

/// Run the gate on stdin/stdout with SIGINT captured for its duration.
///
/// Returns normally when the action may proceed. A refusal never returns:
/// `handler` emits the negative message and terminates the process.
pub fn ask(request: &ConfirmationRequest, handler: &dyn EventHandler) -> Result<()> {
    let interrupt = Interrupt::capture()?;
    let mut input = StdinLines::new();
    let mut output = io::stdout();
    ask_with(request, handler, &mut input, &mut output, &interrupt)
}

/// [`ask`] with injected input, prompt output and interrupt flag.
pub fn ask_with(
    request: &ConfirmationRequest,
    handler: &dyn EventHandler,
    input: &mut dyn LineSource,
    output: &mut dyn Write,
    interrupt: &Interrupt,
) -> Result<()> {
    if let Some(warning) = &request.warning {
        handler.warn(warning, EmitOptions::default());
    }

    if request.force {
        return countdown(request, handler, interrupt);
    }

    loop {
        write!(output, "{} [y/N]", request.prompt)
            .and_then(|()| output.flush())
            .map_err(|e| Error::io("write confirmation prompt", e))?;

        let line = input
            .read_line(interrupt)
            .map_err(|e| Error::io("read confirmation answer", e))?;

        let response = match line {
            Some(line) => {
                let response = Response::parse(&line);
                if response.is_none() {
                    debug!(answer = %line.trim_end(), "unrecognised confirmation answer");
                }
                response
            }
            None => {
                // Keep the negative message off the prompt line
                let _ = writeln!(output);
                Some(Response::No)
            }
        };

        match response {
            Some(Response::Yes) => return Ok(()),
            Some(Response::No) => refuse(request, handler),
            None => continue,
        }
    }
}

fn countdown(
    request: &ConfirmationRequest,
    handler: &dyn EventHandler,
    interrupt: &Interrupt,
) -> Result<()> {
    handler.info(
        &format!(
            "You have {} seconds to abort ('Ctrl+c')",
            request.timeout.as_secs()
        ),
        EmitOptions::default(),
    );

    match interrupt::wait(request.timeout, interrupt) {
        WaitOutcome::Elapsed => Ok(()),
        WaitOutcome::Interrupted => refuse(request, handler),
    }
}

fn refuse(request: &ConfirmationRequest, handler: &dyn EventHandler) -> ! {
    handler.quit(
        Severity::Info,
        &request.negative_message,
        EmitOptions::default(),
    )
}
