//! Core citation logic module
//!
//! This module contains the formatting and aggregation core:
//! - `formatter` - Per-record strategy dispatch, rendering, and the final
//!   sort of the reference list

pub mod formatter;

pub use formatter::{sort_citations, CitationFormatter, FormattedCitation};
