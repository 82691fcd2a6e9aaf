// ABOUTME: WHOOP CLI entry point - daily sleep, recovery, strain, and workout reports
// ABOUTME: Parses the subcommand and date, then hands off to the command orchestration
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `whoop` - daily WHOOP health reports as YAML.
//!
//! Usage:
//! ```bash
//! # Last night's sleep, today's recovery
//! whoop sleep
//! whoop recovery
//!
//! # A specific date
//! whoop sleep 2024-01-15
//! whoop workouts 2024-01-15
//! whoop cycles 2024-01-15
//!
//! # Account profile and the combined daily summary
//! whoop profile
//! whoop summary 2024-01-15
//! ```

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "whoop",
    about = "WHOOP CLI - fetch daily health data as YAML reports",
    long_about = "Command-line client for the WHOOP API. Fetches sleep, recovery, \
                  strain cycles, workouts, and profile data, and prints a YAML report \
                  for the requested calendar date.",
    after_help = "DATE format: YYYY-MM-DD (defaults to today)"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Get sleep data (the night that ended on the date)
    Sleep {
        /// Date (YYYY-MM-DD)
        date: Option<String>,
    },

    /// Get recovery data
    Recovery {
        /// Date (YYYY-MM-DD)
        date: Option<String>,
    },

    /// Get workout data
    Workouts {
        /// Date (YYYY-MM-DD)
        date: Option<String>,
    },

    /// Get the daily strain cycle
    Cycles {
        /// Date (YYYY-MM-DD)
        date: Option<String>,
    },

    /// Get the account profile
    Profile,

    /// Get the daily summary (sleep + recovery)
    Summary {
        /// Date (YYYY-MM-DD)
        date: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Reports go to stdout; logging stays on stderr so documents pipe clean
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let outcome = match cli.command {
        Command::Sleep { date } => commands::sleep(date.as_deref()).await,
        Command::Recovery { date } => commands::recovery(date.as_deref()).await,
        Command::Workouts { date } => commands::workouts(date.as_deref()).await,
        Command::Cycles { date } => commands::cycles(date.as_deref()).await,
        Command::Profile => commands::profile().await,
        Command::Summary { date } => commands::summary(date.as_deref()).await,
    };

    if let Err(error) = outcome {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}
