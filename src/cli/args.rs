use crate::strategy::BatchConfig;
use crate::styles::StyleId;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Render a bibliography CSV into a sorted reference list
#[derive(Parser, Debug)]
#[command(name = "citation-engine")]
#[command(about = "Render source records into a sorted citation list", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing source records
    #[arg(value_name = "INPUT", help = "Path to the input CSV file")]
    pub input_file: PathBuf,

    /// Citation style to render
    #[arg(
        long = "style",
        value_name = "STYLE",
        default_value = "apa",
        help = "Citation style: 'apa' or 'gost' (GOST R 7.0.5-2008)"
    )]
    pub style: StyleId,

    /// Processing strategy to use for rendering
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "sync",
        help = "Processing strategy: 'sync' for synchronous or 'async' for asynchronous"
    )]
    pub strategy: StrategyType,

    /// Number of records per batch (async mode only)
    #[arg(
        long = "batch-size",
        value_name = "SIZE",
        help = "Number of records per batch (default: 1000)"
    )]
    pub batch_size: Option<usize>,

    /// Maximum number of concurrent batches (async mode only)
    #[arg(
        long = "max-concurrent",
        value_name = "COUNT",
        help = "Maximum number of batches rendering concurrently (default: CPU cores)"
    )]
    pub max_concurrent_batches: Option<usize>,
}

/// Available processing strategies
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

impl CliArgs {
    /// Create a BatchConfig from CLI arguments
    ///
    /// Uses the CLI values where provided and falls back to defaults
    /// otherwise. Zero values are reported and replaced by defaults.
    pub fn to_batch_config(&self) -> BatchConfig {
        let default = BatchConfig::default();
        BatchConfig::new(
            self.batch_size.unwrap_or(default.batch_size),
            self.max_concurrent_batches
                .unwrap_or(default.max_concurrent_batches),
        )
    }
}
