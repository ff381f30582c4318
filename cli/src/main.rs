mod inspect;
mod logging;
mod tui;
mod upload;
mod watch;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use paytick_core::config::LOG_FILE_NAME;
use paytick_core::{placeholder_intake, Settings};

use crate::logging::LogTarget;

#[derive(Parser)]
#[command(name = "paytick")]
#[command(about = "Watch your salary come in, second by second", long_about = None)]
struct Cli {
    /// Settings file (default: ~/.paytick/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the Terminal User Interface
    Tui {
        /// Payslip to load right away
        file: Option<PathBuf>,
    },
    /// Show the figures taken from a payslip and its per-second rate
    Inspect {
        file: PathBuf,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Run the earnings counter in the terminal without the TUI
    Watch {
        file: PathBuf,
        /// Stop after this many ticks
        #[arg(long)]
        seconds: Option<u32>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    // Only the TUI needs the data directory for its log file
    let log_target = match cli.command {
        Some(Commands::Inspect { .. }) | Some(Commands::Watch { .. }) => LogTarget::Stderr,
        Some(Commands::Tui { .. }) | None => {
            LogTarget::File(Settings::data_dir(None)?.join(LOG_FILE_NAME))
        }
    };
    logging::init(log_target)?;

    let config_path = Settings::resolve_path(cli.config)?;
    let settings = Settings::load_from(&config_path)?;
    tracing::debug!("Settings: {:?}", settings);

    match cli.command {
        Some(Commands::Tui { file }) => {
            tui::run(&settings, file.as_deref())?;
        }
        Some(Commands::Inspect { file, json }) => {
            let intake = placeholder_intake(&settings);
            let record = upload::read_payslip(&intake, &file)?;
            inspect::show_inspect(&record, &settings.currency, json)?;
        }
        Some(Commands::Watch { file, seconds }) => {
            let intake = placeholder_intake(&settings);
            let record = upload::read_payslip(&intake, &file)?;
            watch::run_watch(&settings.currency, record, seconds)?;
        }
        None => {
            tui::run(&settings, None)?;
        }
    }
    Ok(())
}
