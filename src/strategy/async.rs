//! Asynchronous batch processing strategy
//!
//! Multi-threaded implementation of the ProcessingStrategy trait. Source
//! records are read in batches and rendered concurrently; the final sort is
//! the synchronization point that sees every rendered string before
//! ordering.
//!
//! # Architecture
//!
//! ```text
//! AsyncProcessingStrategy
//!     ├── BatchConfig (batch_size, max_concurrent_batches)
//!     ├── AsyncReader (batch CSV reading)
//!     └── CitationFormatter (rendering, shared via Arc)
//! ```
//!
//! Rendering is a pure function of the record, so batches carry no ordering
//! dependency between each other. Task handles are joined in spawn order,
//! which keeps the concatenated results in input order for the stable
//! tie-break of the final sort.

use crate::core::{sort_citations, CitationFormatter};
use crate::io::async_reader::AsyncReader;
use crate::io::output::write_reference_list;
use crate::strategy::ProcessingStrategy;
use crate::styles::StyleId;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

/// Configuration for batch processing
///
/// Controls how many records are read per batch and the number of worker
/// threads rendering batches concurrently.
#[derive(Clone, Debug)]
pub struct BatchConfig {
    /// Number of records per batch
    pub batch_size: usize,
    /// Maximum number of batches rendering concurrently
    pub max_concurrent_batches: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: 1000,
            max_concurrent_batches: num_cpus::get(),
        }
    }
}

impl BatchConfig {
    /// Create a new BatchConfig with custom values
    ///
    /// Zero values fall back to the defaults with a warning.
    pub fn new(batch_size: usize, max_concurrent_batches: usize) -> Self {
        let default = Self::default();

        let batch_size = if batch_size == 0 {
            tracing::warn!(
                "Invalid batch_size ({}), using default ({})",
                batch_size,
                default.batch_size
            );
            default.batch_size
        } else {
            batch_size
        };

        let max_concurrent_batches = if max_concurrent_batches == 0 {
            tracing::warn!(
                "Invalid max_concurrent_batches ({}), using default ({})",
                max_concurrent_batches,
                default.max_concurrent_batches
            );
            default.max_concurrent_batches
        } else {
            max_concurrent_batches
        };

        Self {
            batch_size,
            max_concurrent_batches,
        }
    }
}

/// Asynchronous batch processing strategy
///
/// Reads records in batches and spawns one tokio task per batch to render
/// concurrently. Parallelism is bounded by the runtime's worker thread
/// count (`max_concurrent_batches`).
#[derive(Debug, Clone)]
pub struct AsyncProcessingStrategy {
    style: StyleId,
    config: BatchConfig,
}

impl AsyncProcessingStrategy {
    /// Create a strategy rendering the given style with the specified
    /// batch configuration
    pub fn new(style: StyleId, config: BatchConfig) -> Self {
        Self { style, config }
    }
}

impl ProcessingStrategy for AsyncProcessingStrategy {
    /// Process source records from the input file and write the reference
    /// list to the output
    ///
    /// The pipeline:
    /// 1. Creates a tokio multi-threaded runtime
    /// 2. Reads records in batches from CSV using AsyncReader
    /// 3. Spawns one rendering task per batch (rendering is pure, so
    ///    batches are independent)
    /// 4. Joins tasks in spawn order, aborting on the first dispatch or
    ///    substitution error
    /// 5. Sorts the full list once and writes it out
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), String> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.config.max_concurrent_batches)
            .build()
            .map_err(|e| format!("Failed to create tokio runtime: {}", e))?;

        runtime.block_on(async {
            let formatter = Arc::new(CitationFormatter::new(self.style));

            let file = tokio::fs::File::open(input_path)
                .await
                .map_err(|e| format!("Failed to open file '{}': {}", input_path.display(), e))?;

            // Wrap tokio file in a compatibility layer for csv-async
            let compat_file = tokio_util::compat::TokioAsyncReadCompatExt::compat(file);
            let mut reader = AsyncReader::new(compat_file);

            // Spawn one rendering task per batch while reading continues
            let mut handles = Vec::new();
            loop {
                let batch = reader.read_batch(self.config.batch_size).await;
                if batch.is_empty() {
                    break;
                }

                let formatter = Arc::clone(&formatter);
                handles.push(tokio::spawn(async move {
                    batch
                        .into_iter()
                        .map(|record| formatter.format_record(record))
                        .collect::<Result<Vec<_>, _>>()
                }));
            }

            // Join in spawn order so the stable sort sees records in input
            // order; the first rendering error aborts the whole batch.
            let mut citations = Vec::new();
            for handle in handles {
                let rendered = handle
                    .await
                    .map_err(|e| format!("Rendering task failed: {}", e))?
                    .map_err(|e| e.to_string())?;
                citations.extend(rendered);
            }

            // Synchronization point: every rendered string is visible here
            sort_citations(&mut citations);

            write_reference_list(&citations, output)
        })
    }
}
