mod commands;
mod observability;
mod render;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use roster_core::clock::SystemClock;
use roster_core::config::RosterConfig;
use roster_core::date_math::from_iso_date;
use roster_core::session::Session;
use roster_core::store::FileStore;

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "View and edit a rotating weekly shift roster")]
struct Cli {
    /// Directory holding the stored roster (overrides the config file)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the roster for a week
    Show {
        /// Show the week containing this date (YYYY-MM-DD), default today
        #[arg(short, long)]
        date: Option<String>,

        /// Move this many weeks from that week (negative goes back)
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i64,

        /// Print the week view as JSON
        #[arg(long)]
        json: bool,
    },
    /// Browse weeks and edit the roster interactively
    Browse,
    /// Replace the seven names, or edit them interactively when none are given
    Names {
        names: Vec<String>,
    },
    /// Edit the anchor date, shift codes and pattern interactively
    Roster,
    /// Show where the config and roster are stored
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = RosterConfig::load()?;
    observability::init_logging(&config.log_level)?;

    let data_path = cli.data_dir.unwrap_or_else(|| config.data_path());

    match cli.command {
        Commands::Path => commands::path::run(&config, &data_path),
        command => run_with_session(command, &config, &data_path),
    }
}

fn run_with_session(command: Commands, config: &RosterConfig, data_path: &Path) -> Result<()> {
    tracing::debug!(data_dir = %data_path.display(), key = %config.storage_key, "opening roster");
    let mut session = Session::open(
        Box::new(FileStore::new(data_path)),
        &config.storage_key,
        Box::new(SystemClock),
    )?;
    commands::report_origin(session.origin());

    match command {
        Commands::Show { date, offset, json } => {
            let date = date.as_deref().map(from_iso_date).transpose()?;
            commands::show::run(&mut session, date, offset, json)
        }
        Commands::Browse => commands::browse::run(&mut session),
        Commands::Names { names } => commands::names::run(&mut session, names),
        Commands::Roster => commands::roster::run(&mut session),
        Commands::Path => commands::path::run(config, data_path),
    }
}
