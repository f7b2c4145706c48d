//! bgh-query CLI - look up BGH decisions from the command line.
//!
//! Each subcommand is one lookup mode. Results are printed newest first,
//! followed by a count.

use std::path::PathBuf;
use std::process::ExitCode;

use bgh_query::config::{Config, OutputFormat};
use bgh_query::{FilterRequest, SenateCategory};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

mod cli;

/// bgh-query: Filtered lookup over BGH court decisions.
#[derive(Parser)]
#[command(name = "bgh-query")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Decisions database (overrides the config file)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    /// Config file (defaults to ./bgh-query.yaml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format: text or json (overrides the config file)
    #[arg(short, long, global = true, value_parser = parse_format)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every decision
    All,

    /// Filter by senate type (zivilsenat or strafsenat)
    Category {
        /// Senate type: zivilsenat (civil) or strafsenat (criminal)
        #[arg(value_parser = parse_category)]
        category: SenateCategory,
    },

    /// Decisions of a specific senate (e.g. "IV. Zivilsenat" or "6. Strafsenat")
    Senate {
        /// Senate name; matches any senate containing this text
        name: String,
    },

    /// Decisions from a specific date
    Date {
        /// Date as YYYY-MM-DD
        date: String,
    },

    /// Decisions from a specific month
    Month {
        /// Month as YYYY-MM
        month: String,
    },

    /// Show how many decisions the database holds and which dates they cover
    Summary,
}

fn parse_category(s: &str) -> Result<SenateCategory, String> {
    SenateCategory::parse(s).ok_or_else(|| {
        format!("unknown senate type '{s}'. Valid types: zivilsenat, strafsenat")
    })
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse()
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let current_dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!(
                "{}: failed to get current directory: {e}",
                "error".red().bold()
            );
            return ExitCode::FAILURE;
        }
    };

    let mut config = match Config::resolve(cli.config.as_deref(), &current_dir) {
        Ok(config) => config,
        Err(e) => return report(&e),
    };
    if let Some(database) = cli.database {
        config.database = database;
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    let request = match cli.command {
        Commands::Summary => {
            return match cli::summary::run(&config.database, config.output.format) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => report(&e),
            };
        }
        Commands::All => FilterRequest::All,
        Commands::Category { category } => FilterRequest::Category(category),
        Commands::Senate { name } => FilterRequest::Senate(name),
        Commands::Date { date } => FilterRequest::Date(date),
        Commands::Month { month } => FilterRequest::Month(month),
    };

    match cli::search::run(&config.database, request, config.output.format) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e),
    }
}

/// Print an error with its cause chain and pick the exit code.
fn report(e: &bgh_query::Error) -> ExitCode {
    if e.is_user_error() {
        // Bad input: say what was wrong, nothing was queried
        eprintln!("{} {e}", "✗".red().bold());
        return ExitCode::from(2);
    }

    eprintln!("{}: {e}", "error".red().bold());
    // Show cause chain for nested errors
    let mut source = std::error::Error::source(e);
    while let Some(cause) = source {
        eprintln!("  {}: {cause}", "caused by".dimmed());
        source = std::error::Error::source(cause);
    }
    ExitCode::FAILURE
}
