//! Synchronous processing strategy
//!
//! Single-threaded implementation of the ProcessingStrategy trait. It
//! orchestrates the pipeline, delegating:
//! - CSV reading to `SyncReader` (iterator interface)
//! - Rendering and sorting to `CitationFormatter` (core logic)
//! - Output to `output::write_reference_list` (format handling)
//!
//! Rows that fail parsing or validation are logged as warnings and
//! skipped; a dispatch or substitution error aborts the whole batch.

use crate::core::CitationFormatter;
use crate::io::output::write_reference_list;
use crate::io::sync_reader::SyncReader;
use crate::strategy::ProcessingStrategy;
use crate::styles::StyleId;
use std::io::Write;
use std::path::Path;

/// Synchronous processing strategy
///
/// Reads the whole file through the streaming reader, renders each record
/// in input order, sorts once, and writes the numbered list.
///
/// # Examples
///
/// ```no_run
/// use citation_engine::strategy::{ProcessingStrategy, SyncProcessingStrategy};
/// use citation_engine::styles::StyleId;
/// use std::path::Path;
/// use std::io;
///
/// let strategy = SyncProcessingStrategy::new(StyleId::Apa);
/// let mut output = io::stdout();
///
/// strategy.process(Path::new("sources.csv"), &mut output)
///     .expect("Processing failed");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SyncProcessingStrategy {
    style: StyleId,
}

impl SyncProcessingStrategy {
    /// Create a strategy rendering the given style
    pub fn new(style: StyleId) -> Self {
        Self { style }
    }
}

impl ProcessingStrategy for SyncProcessingStrategy {
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), String> {
        let formatter = CitationFormatter::new(self.style);

        let reader = SyncReader::new(input_path)?;

        // Collect valid records in input order; the formatter's stable sort
        // relies on that order for tie-breaking.
        let mut records = Vec::new();
        for result in reader {
            match result {
                Ok(record) => records.push(record),
                Err(e) => tracing::warn!("Skipping source record: {}", e),
            }
        }

        let citations = formatter.format(records).map_err(|e| e.to_string())?;

        write_reference_list(&citations, output)
    }
}
