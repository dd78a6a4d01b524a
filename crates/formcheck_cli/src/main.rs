mod commands;
mod output;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "formcheck")]
#[command(version, about = "Form field validation CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a field definition and print the resulting field
    Validate {
        /// Path to the field definition file (YAML, TOML or JSON)
        field: String,

        /// Validate even if the field has not been touched
        #[arg(long)]
        ignore_touched: bool,

        /// Reference date for date-relative rules (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// List the rules of a field definition without evaluating them
    Check {
        /// Path to the field definition file (YAML, TOML or JSON)
        field: String,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// List the built-in rules
    Rules,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    // Execute command
    match cli.command {
        Commands::Validate {
            field,
            ignore_touched,
            today,
            format,
        } => commands::validate::execute(&field, ignore_touched, today, &format),

        Commands::Check { field, format } => commands::check::execute(&field, &format),

        Commands::Rules => commands::rules::execute(),
    }
}
