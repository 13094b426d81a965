//! Error types for the citation engine
//!
//! This module defines all error types that can occur while constructing
//! source records and rendering them into citations. Errors are designed to
//! be descriptive and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **Validation errors**: raised at record-construction time, before the
//!   core ever sees the record (empty required field, non-positive number,
//!   malformed speciality code).
//! - **Dispatch errors**: no strategy registered for a record kind in the
//!   selected style. Aborts the whole batch on first occurrence.
//! - **Substitution errors**: a template placeholder has no bound value, or
//!   a strategy received a record of the wrong kind. These indicate an
//!   internal template/model mismatch and always propagate.

use crate::styles::StyleId;
use crate::types::record::SourceKind;
use thiserror::Error;

/// Main error type for the citation engine
///
/// Each variant carries enough context to diagnose the failing record or
/// template without re-reading the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CitationError {
    /// A required string field was empty
    ///
    /// Raised during record construction; the record never comes into
    /// existence.
    #[error("{kind} field '{field}' must not be empty")]
    EmptyField {
        /// The kind of record being constructed
        kind: SourceKind,
        /// The offending field name
        field: &'static str,
    },

    /// A numeric field was zero or negative
    ///
    /// Year, page count, and volume must all be strictly positive.
    #[error("{kind} field '{field}' must be positive, got {value}")]
    NonPositive {
        /// The kind of record being constructed
        kind: SourceKind,
        /// The offending field name
        field: &'static str,
        /// The rejected value
        value: i64,
    },

    /// A dissertation speciality code did not match the NN.NN.NN pattern
    #[error("speciality code '{code}' does not match the NN.NN.NN pattern")]
    MalformedSpecialityCode {
        /// The rejected code
        code: String,
    },

    /// The registry has no strategy for this record kind in this style
    ///
    /// Surfaced distinctly from validation errors so callers can tell a bad
    /// record apart from an incomplete style configuration.
    #[error("no {style} strategy registered for source type '{kind}'")]
    UnknownSourceType {
        /// The record kind with no registered strategy
        kind: SourceKind,
        /// The style that was being rendered
        style: StyleId,
    },

    /// A template placeholder has no bound value
    ///
    /// Can only happen when a template and its bindings disagree, which is a
    /// programmer error. Never silently rendered as blank text.
    #[error("template placeholder '${placeholder}' has no bound value")]
    MissingPlaceholder {
        /// The unbound placeholder name
        placeholder: String,
    },

    /// A strategy received a record of a kind it was not built for
    ///
    /// The dispatch table prevents this in normal operation; reaching it
    /// means a strategy was invoked directly with the wrong record.
    #[error("strategy for {expected} records received a {found} record")]
    MismatchedRecord {
        /// The kind the strategy is bound to
        expected: SourceKind,
        /// The kind that was actually supplied
        found: SourceKind,
    },
}

impl CitationError {
    /// Create an EmptyField error
    pub fn empty_field(kind: SourceKind, field: &'static str) -> Self {
        CitationError::EmptyField { kind, field }
    }

    /// Create a NonPositive error
    pub fn non_positive(kind: SourceKind, field: &'static str, value: i64) -> Self {
        CitationError::NonPositive { kind, field, value }
    }

    /// Create a MalformedSpecialityCode error
    pub fn malformed_speciality_code(code: impl Into<String>) -> Self {
        CitationError::MalformedSpecialityCode { code: code.into() }
    }

    /// Create an UnknownSourceType error
    pub fn unknown_source_type(kind: SourceKind, style: StyleId) -> Self {
        CitationError::UnknownSourceType { kind, style }
    }

    /// Create a MissingPlaceholder error
    pub fn missing_placeholder(placeholder: impl Into<String>) -> Self {
        CitationError::MissingPlaceholder {
            placeholder: placeholder.into(),
        }
    }

    /// Create a MismatchedRecord error
    pub fn mismatched_record(expected: SourceKind, found: SourceKind) -> Self {
        CitationError::MismatchedRecord { expected, found }
    }

    /// Whether this error was raised at record-construction time
    ///
    /// Validation errors never reach the formatting core; everything else
    /// originates inside it.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CitationError::EmptyField { .. }
                | CitationError::NonPositive { .. }
                | CitationError::MalformedSpecialityCode { .. }
        )
    }
}
