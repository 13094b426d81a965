//! Synchronous CSV reader with iterator interface
//!
//! Provides a streaming iterator over source records from a CSV file.
//! Delegates CSV format concerns to the csv_format module.
//!
//! # Iterator Interface
//!
//! SyncReader implements the Iterator trait, yielding
//! `Result<SourceRecord, String>` for each CSV row:
//!
//! ```no_run
//! use citation_engine::io::sync_reader::SyncReader;
//! use std::path::Path;
//!
//! let reader = SyncReader::new(Path::new("sources.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(record) => println!("Read source: {:?}", record),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual row parse/validation errors are yielded as Err variants,
//!   with line numbers for debugging; callers decide whether to skip or
//!   abort
//!
//! # Memory Efficiency
//!
//! Rows are read and converted one at a time; memory usage does not depend
//! on file size.

use crate::io::csv_format::{convert_raw_record, RawRecord};
use crate::types::SourceRecord;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::path::Path;

/// Synchronous CSV reader
///
/// Provides an iterator interface over validated source records.
#[derive(Debug)]
pub struct SyncReader {
    reader: csv::Reader<File>,
    line_num: usize,
}

impl SyncReader {
    /// Create a new SyncReader from a file path
    ///
    /// Opens the CSV file and prepares it for streaming iteration.
    /// The CSV reader is configured to:
    /// - Trim whitespace from all fields
    /// - Allow flexible field counts (most columns are unused per row)
    /// - Use an 8KB buffer for efficient I/O
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> Result<Self, String> {
        let file = File::open(path)
            .map_err(|e| format!("Failed to open file '{}': {}", path.display(), e))?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        Ok(Self {
            reader,
            line_num: 0,
        })
    }
}

impl Iterator for SyncReader {
    type Item = Result<SourceRecord, String>;

    /// Get the next source record from the CSV file
    ///
    /// Reads the next row, deserializes it into a RawRecord, and converts
    /// it into a validated SourceRecord. Errors carry the line number
    /// (header counted as line 1).
    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<RawRecord>();

        match deserializer.next()? {
            Ok(raw_record) => {
                self.line_num += 1;
                Some(
                    convert_raw_record(raw_record)
                        .map_err(|e| format!("Line {}: {}", self.line_num + 1, e)),
                )
            }
            Err(e) => {
                self.line_num += 1;
                Some(Err(format!(
                    "Line {}: CSV parse error: {}",
                    self.line_num + 1,
                    e
                )))
            }
        }
    }
}
