//! Citation styles module
//!
//! A style is a complete set of per-record-kind templates producing
//! citations that conform to one citation standard. This module contains:
//! - `template` - Named-placeholder substitution with loud failure on
//!   unbound placeholders
//! - `apa` - American Psychological Association strategies
//! - `gost` - GOST R 7.0.5-2008 strategies
//! - `registry` - The `(style, kind)` to strategy dispatch table
//!
//! Every strategy implements [`FormatStrategy`]: it declares the record
//! kind it renders, owns a fixed template, and binds the record's fields
//! (plus derived clauses) to the template's placeholders.

pub mod apa;
pub mod gost;
pub mod registry;
pub mod template;

pub use registry::StyleRegistry;
pub use template::{Bindings, Template};

use crate::types::{CitationError, SourceKind, SourceRecord};
use clap::ValueEnum;
use std::fmt;

/// Supported citation styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum StyleId {
    /// American Psychological Association
    Apa,
    /// GOST R 7.0.5-2008, the Russian national standard
    Gost,
}

impl StyleId {
    /// All styles, used for registry completeness checks
    pub const ALL: [StyleId; 2] = [StyleId::Apa, StyleId::Gost];

    /// Stable style name used in error messages and the CLI
    pub fn name(&self) -> &'static str {
        match self {
            StyleId::Apa => "apa",
            StyleId::Gost => "gost",
        }
    }
}

impl fmt::Display for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One formatting strategy per {style, record kind} pair
///
/// A strategy renders exactly one record kind. Dispatch from record to
/// strategy is the registry's job; a strategy invoked with a record of the
/// wrong kind reports a mismatched-record error rather than guessing.
pub trait FormatStrategy: Send + Sync {
    /// The record kind this strategy renders
    fn kind(&self) -> SourceKind;

    /// The fixed template owned by this strategy
    fn template(&self) -> Template;

    /// Bind the record's fields (and derived clauses) to placeholder names
    ///
    /// # Errors
    ///
    /// Returns [`CitationError::MismatchedRecord`] if the record is not of
    /// the kind this strategy renders.
    fn bindings(&self, record: &SourceRecord) -> Result<Bindings, CitationError>;

    /// Render the record into a citation string
    ///
    /// Pure function of the record; rendering the same record twice yields
    /// the identical string.
    fn format(&self, record: &SourceRecord) -> Result<String, CitationError> {
        self.template().substitute(&self.bindings(record)?)
    }
}

/// Edition clause shared by both styles: "<edition> изд. – " when the
/// edition is present, empty text otherwise.
pub(crate) fn edition_clause(edition: Option<&str>) -> String {
    match edition {
        Some(edition) => format!("{} изд. – ", edition),
        None => String::new(),
    }
}
