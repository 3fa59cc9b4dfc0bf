mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use bomberos_core::DisplayConfig;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "bomberos-cal")]
#[command(about = "Show guard shifts and shift-change requests on a month calendar")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where the event lists come from
#[derive(Args)]
pub struct EventFiles {
    /// JSON file with guard events ("-" for stdin)
    #[arg(short, long)]
    guards: Option<PathBuf>,

    /// JSON file with shift-change request events ("-" for stdin)
    #[arg(short, long)]
    requests: Option<PathBuf>,

    /// Reject malformed events instead of silently not showing them
    #[arg(long)]
    strict: bool,
}

#[derive(Subcommand)]
enum Commands {
    Month {
        /// Any date in the month to show (YYYY-MM-DD). Defaults to today
        #[arg(short, long, conflicts_with_all = ["year", "month"])]
        date: Option<String>,

        /// Year to show (with --month)
        #[arg(long, requires = "month")]
        year: Option<i32>,

        /// Month to show, 1-12 (with --year)
        #[arg(long, requires = "year", allow_negative_numbers = true)]
        month: Option<i32>,

        #[command(flatten)]
        files: EventFiles,

        /// Locale for weekday headers (overrides config)
        #[arg(long)]
        locale: Option<String>,

        /// Print the month view as JSON
        #[arg(long)]
        json: bool,
    },
    Day {
        /// Date to inspect (YYYY-MM-DD)
        date: String,

        #[command(flatten)]
        files: EventFiles,

        /// Print the selection as JSON
        #[arg(long)]
        json: bool,
    },
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

/// Initialize logging on stderr, so stdout only carries the calendar
fn init_logging() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set up logging: {}", e))?;

    Ok(())
}

fn main() -> Result<()> {
    init_logging()?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Month {
            date,
            year,
            month,
            files,
            locale,
            json,
        } => {
            let mut config = DisplayConfig::load()?;
            if let Some(locale) = locale {
                config.locale = locale;
            }
            let target = commands::month::resolve_month(date.as_deref(), year, month)?;
            commands::month::run(target, &files, &config, json)
        }
        Commands::Day { date, files, json } => {
            let config = DisplayConfig::load()?;
            commands::day::run(&date, &files, &config, json)
        }
        Commands::Config { init } => commands::config::run(init),
    }
}
