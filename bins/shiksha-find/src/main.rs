//! shiksha-find: fuzzy search over exported clusters, manuals and modules.

use clap::{Parser, Subcommand};
use shiksha_cli::output::Status;
use shiksha_search::SearchConfig;
use shiksha_telemetry::TelemetryConfig;
use std::process::ExitCode;

mod commands;

/// Typo-tolerant search, matching and highlighting from the command line
#[derive(Parser)]
#[command(name = "shiksha-find")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(short, long, global = true, default_value = "text")]
    format: String,

    /// Configuration file (defaults to ./.shiksha-search.toml when present)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a JSON array of records
    Search {
        /// JSON file with an array of records, or - for stdin
        items: String,

        /// Search query
        query: String,

        /// Field path to search (repeatable, dot-notation for nesting)
        #[arg(short = 'F', long = "field", required = true)]
        fields: Vec<String>,

        /// Minimum per-field score
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Maximum number of results
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Fold accents and punctuation before matching
        #[arg(long)]
        normalize: bool,
    },

    /// Match one text against a query
    Match {
        /// Text to search in
        text: String,

        /// Search query
        query: String,

        /// Minimum score for a match
        #[arg(short, long)]
        threshold: Option<f64>,
    },

    /// Edit-distance similarity of two strings
    Similarity {
        /// First string
        a: String,

        /// Second string
        b: String,
    },

    /// Mark query words inside a text
    Highlight {
        /// Text to mark up
        text: String,

        /// Search query
        query: String,

        /// Markup inserted before each match
        #[arg(long)]
        open: Option<String>,

        /// Markup inserted after each match
        #[arg(long)]
        close: Option<String>,
    },

    /// Fold accents and punctuation out of a text
    Normalize {
        /// Text to normalize
        text: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let telemetry = if cli.verbose {
        TelemetryConfig::verbose()
    } else {
        TelemetryConfig::default()
    };
    if let Err(e) = shiksha_telemetry::init_with_config(telemetry) {
        Status::warning(&format!("{:#}", e));
    }

    let config = match SearchConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            Status::error(&e.to_string());
            return ExitCode::from(2);
        }
    };
    tracing::debug!(path = ?config.path, "configuration loaded");

    let json = cli.format == "json";
    let result = match cli.command {
        Commands::Search { items, query, fields, threshold, limit, normalize } => {
            let options = commands::SearchOptions {
                threshold: threshold.unwrap_or(config.search.threshold),
                limit: limit.or(config.search.limit),
                normalize: normalize || config.search.normalize,
            };
            commands::search(&items, &query, &fields, &options, json)
        }

        Commands::Match { text, query, threshold } => {
            commands::match_text(&text, &query, threshold.unwrap_or(config.matching.threshold), json)
        }

        Commands::Similarity { a, b } => commands::similarity(&a, &b, json),

        Commands::Highlight { text, query, open, close } => {
            let mut marker = config.highlight.clone();
            if let Some(open) = open {
                marker.open = open;
            }
            if let Some(close) = close {
                marker.close = close;
            }
            commands::highlight(&text, &query, &marker, json)
        }

        Commands::Normalize { text } => commands::normalize(&text, json),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            Status::error(&format!("{:#}", e));
            ExitCode::from(2)
        }
    }
}
