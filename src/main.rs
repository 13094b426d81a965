//! Citation Engine CLI
//!
//! Command-line interface for rendering bibliographic source records from
//! CSV files into a sorted reference list.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- sources.csv > references.txt
//! cargo run -- --style gost sources.csv > references.txt
//! cargo run -- --strategy async --batch-size 2000 sources.csv > references.txt
//! ```
//!
//! The program reads source records from the input CSV file, renders each
//! one in the selected citation style, sorts the citations, and writes the
//! numbered reference list to stdout. Log output goes to stderr so stdout
//! stays clean for the list.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, incomplete style
//!   configuration, etc.)

use citation_engine::cli;
use citation_engine::strategy;
use std::process;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() {
    // Log to stderr; stdout carries the reference list
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "citation_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = cli::parse_args();

    // Create the appropriate processing strategy based on CLI arguments
    let strategy = {
        let config = if matches!(args.strategy, cli::StrategyType::Async) {
            Some(args.to_batch_config())
        } else {
            None
        };
        strategy::create_strategy(args.strategy, args.style, config)
    };

    let mut output = std::io::stdout();
    if let Err(e) = strategy.process(&args.input_file, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
