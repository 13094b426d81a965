//! Citation Engine Library
//! # Overview
//!
//! This library renders structured bibliographic source records into
//! citation strings conforming to a chosen citation style (APA or
//! GOST R 7.0.5-2008) and produces a sorted reference list.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (source records, the `SourceKind` dispatch
//!   tag, errors)
//! - [`styles`] - Citation styles: per-{style, kind} formatting strategies,
//!   the placeholder template engine, and the dispatch registry
//! - [`core`] - Business logic:
//!   - [`core::formatter`] - Record-to-strategy dispatch, rendering, and the
//!     final sort of the reference list
//! - [`io`] - CSV input and reference list output
//! - [`strategy`] - Sync and async processing pipelines
//! - [`cli`] - CLI argument parsing
//!
//! # Source Record Kinds
//!
//! The engine supports five kinds of bibliographic source:
//!
//! - **Book**: a published monograph, optionally with an edition
//! - **InternetResource**: an online article with access date
//! - **ArticlesCollection**: an article inside a collection
//! - **Dissertation**: a defended dissertation with speciality code
//! - **JournalArticle**: an article in a periodical journal
//!
//! # Pipeline
//!
//! Records are validated at construction and immutable afterwards. A
//! [`core::CitationFormatter`] bound to one style dispatches each record to
//! the matching strategy, renders it once, and sorts the batch by the
//! rendered string (code-point order, stable on ties).

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod styles;
pub mod types;

pub use core::{sort_citations, CitationFormatter, FormattedCitation};
pub use io::write_reference_list;
pub use styles::{Bindings, FormatStrategy, StyleId, StyleRegistry, Template};
pub use types::{
    ArticlesCollection, Book, CitationError, Dissertation, InternetResource, JournalArticle,
    SourceKind, SourceRecord,
};
