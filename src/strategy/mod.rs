//! Processing strategy module for citation rendering
//!
//! This module defines the Strategy pattern for complete rendering
//! pipelines, encompassing CSV reading, citation formatting, and reference
//! list output. This allows different processing implementations
//! (synchronous, asynchronous batch) to be selected at runtime.

use crate::cli::StrategyType;
use crate::styles::StyleId;
use std::io::Write;
use std::path::Path;

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncProcessingStrategy, BatchConfig};
pub use sync::SyncProcessingStrategy;

/// Processing strategy trait for complete rendering pipelines
///
/// Each strategy reads source records from a CSV file, renders them in its
/// bound citation style, and writes the sorted, numbered reference list to
/// the output sink.
pub trait ProcessingStrategy: Send + Sync {
    /// Process source records from the input file and write the reference
    /// list to the output
    ///
    /// # Arguments
    ///
    /// * `input_path` - Path to the input CSV file containing source records
    /// * `output` - Mutable reference to a writer for the reference list
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input file cannot be opened
    /// - A record's kind has no registered strategy for the style (the
    ///   whole batch aborts)
    /// - A template/model mismatch surfaces during rendering
    /// - Output cannot be written
    ///
    /// Rows that fail parsing or validation are logged as warnings and
    /// skipped; they do not fail the batch.
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), String>;
}

/// Create a processing strategy for a style
///
/// Factory function selecting the processing implementation at runtime.
///
/// # Arguments
///
/// * `strategy_type` - The type of processing strategy to create (Sync or Async)
/// * `style` - The citation style to render
/// * `config` - Optional configuration for async batch processing (ignored for sync)
///
/// # Returns
///
/// A boxed trait object implementing the ProcessingStrategy trait
pub fn create_strategy(
    strategy_type: StrategyType,
    style: StyleId,
    config: Option<BatchConfig>,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy::new(style)),
        StrategyType::Async => {
            let config = config.unwrap_or_default();
            Box::new(AsyncProcessingStrategy::new(style, config))
        }
    }
}
