use clap::Subcommand;
use clg_core::{Result, Severity};
use clg_utils::confirm::{DEFAULT_NEGATIVE_MESSAGE, DEFAULT_PROMPT};

pub mod confirm;
pub mod log;
pub mod run;

#[derive(Subcommand)]
pub enum Commands {
    /// Ask for confirmation; exits 0 without output on "y", prints the
    /// negative message and exits 0 otherwise
    Confirm {
        /// Question shown before the [y/N] suffix
        #[arg(short, long, default_value = DEFAULT_PROMPT)]
        prompt: String,

        /// Message printed when the answer is no or the countdown is aborted
        #[arg(short, long, default_value = DEFAULT_NEGATIVE_MESSAGE)]
        negative: String,

        /// Warning printed before asking
        #[arg(short, long)]
        warning: Option<String>,

        /// Do not ask; give the user a countdown to abort with Ctrl+C instead
        #[arg(short, long)]
        force: bool,

        /// Countdown length in seconds when --force is set
        #[arg(short, long, default_value_t = 3)]
        timeout: u64,
    },

    /// Print a message at a severity, optionally exiting afterwards
    Log {
        /// One of verbose, debug, info, warn, error
        severity: Severity,

        /// Message to print
        message: String,

        /// Exit after printing
        #[arg(short, long)]
        quit: bool,

        /// Exit code used with --quit (default: 1 for error, 0 otherwise)
        #[arg(short, long, requires = "quit")]
        exit_code: Option<i32>,

        /// Keep the message out of the log file
        #[arg(long)]
        confidential: bool,

        /// Route the message through the logger instead of printing it
        #[arg(long)]
        logger: bool,
    },

    /// Run a command, report its outcome and print its stdout
    Run {
        /// Description announced before the command runs
        message: String,

        /// Keep going (exit 0) when the command fails
        #[arg(long)]
        no_quit: bool,

        /// Do not surface stderr of a successful command as a warning
        #[arg(long)]
        no_warnings: bool,

        /// Program and arguments
        #[arg(last = true, required = true, value_name = "COMMAND")]
        command: Vec<String>,
    },
}

impl Commands {
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Confirm {
                prompt,
                negative,
                warning,
                force,
                timeout,
            } => confirm::execute(prompt, negative, warning, force, timeout),
            Commands::Log {
                severity,
                message,
                quit,
                exit_code,
                confidential,
                logger,
            } => log::execute(severity, &message, quit, exit_code, confidential, logger),
            Commands::Run {
                message,
                no_quit,
                no_warnings,
                command,
            } => run::execute(message, !no_quit, !no_warnings, command),
        }
    }
}
