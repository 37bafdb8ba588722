use clap::Parser;
use clg_utils::logging::{self, LogConfig};
use std::path::PathBuf;

mod commands;

use commands::Commands;

#[derive(Parser)]
#[command(name = "clg")]
#[command(about = "Confirmation prompts, leveled messages and checked commands for scripts")]
#[command(long_about = None)]
#[command(version)]
struct Cli {
    /// Show verbose and debug messages
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Append log output to this file (overrides CLG_LOG_FILE)
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    // Parse command-line arguments
    let cli = Cli::parse();

    let mut config = LogConfig::from_env().with_verbose(cli.verbose);
    if let Some(path) = cli.log_file {
        config = config.with_file(path);
    }
    logging::init(&config)?;

    cli.command.execute()?;
    Ok(())
}
