//! I/O module
//!
//! Handles CSV input and reference list output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (row structure, record conversion)
//! - `sync_reader` - Synchronous CSV reader with iterator interface
//! - `async_reader` - Asynchronous CSV reader with batch reading interface
//! - `output` - Numbered reference list writer

pub mod async_reader;
pub mod csv_format;
pub mod output;
pub mod sync_reader;

pub use async_reader::AsyncReader;
pub use csv_format::{convert_raw_record, RawRecord};
pub use output::write_reference_list;
pub use sync_reader::SyncReader;
