//! Style registry: the dispatch table from (style, record kind) to strategy
//!
//! Dispatch is an explicit mapping rather than run-time type inspection, so
//! a missing {style, kind} pairing is a detectable configuration state:
//! [`StyleRegistry::verify_complete`] checks for one entry per kind per
//! style, and a lookup miss surfaces as a distinct unknown-source-type
//! error naming the offending kind and style.

use crate::styles::apa::{
    ApaBook, ApaCollectionArticle, ApaDissertation, ApaInternetResource, ApaJournalArticle,
};
use crate::styles::gost::{
    GostBook, GostCollectionArticle, GostDissertation, GostInternetResource, GostJournalArticle,
};
use crate::styles::{FormatStrategy, StyleId};
use crate::types::{CitationError, SourceKind};
use std::collections::HashMap;

/// Dispatch table mapping (style, record kind) to a formatting strategy
pub struct StyleRegistry {
    strategies: HashMap<(StyleId, SourceKind), Box<dyn FormatStrategy>>,
}

impl StyleRegistry {
    /// Create an empty registry
    ///
    /// Useful for tests exercising incomplete configurations; production
    /// callers want [`StyleRegistry::builtin`].
    pub fn new() -> Self {
        StyleRegistry {
            strategies: HashMap::new(),
        }
    }

    /// Create a registry with every built-in strategy registered
    ///
    /// Covers all five record kinds for both styles. Completeness is
    /// asserted by `verify_complete` in the test suite.
    pub fn builtin() -> Self {
        let mut registry = StyleRegistry::new();

        registry.register(StyleId::Apa, Box::new(ApaBook));
        registry.register(StyleId::Apa, Box::new(ApaInternetResource));
        registry.register(StyleId::Apa, Box::new(ApaCollectionArticle));
        registry.register(StyleId::Apa, Box::new(ApaDissertation));
        registry.register(StyleId::Apa, Box::new(ApaJournalArticle));

        registry.register(StyleId::Gost, Box::new(GostBook));
        registry.register(StyleId::Gost, Box::new(GostInternetResource));
        registry.register(StyleId::Gost, Box::new(GostCollectionArticle));
        registry.register(StyleId::Gost, Box::new(GostDissertation));
        registry.register(StyleId::Gost, Box::new(GostJournalArticle));

        registry
    }

    /// Register a strategy under a style
    ///
    /// The kind key comes from the strategy itself, so a strategy can never
    /// be registered under the wrong kind. Replaces any previous entry for
    /// the same (style, kind) pair.
    pub fn register(&mut self, style: StyleId, strategy: Box<dyn FormatStrategy>) {
        self.strategies.insert((style, strategy.kind()), strategy);
    }

    /// Look up the strategy for a record kind in a style
    ///
    /// # Errors
    ///
    /// Returns [`CitationError::UnknownSourceType`] when no strategy is
    /// registered for the pair.
    pub fn strategy(
        &self,
        style: StyleId,
        kind: SourceKind,
    ) -> Result<&dyn FormatStrategy, CitationError> {
        self.strategies
            .get(&(style, kind))
            .map(|strategy| strategy.as_ref())
            .ok_or_else(|| CitationError::unknown_source_type(kind, style))
    }

    /// Verify that one strategy is registered per kind for the given style
    pub fn verify_style(&self, style: StyleId) -> Result<(), CitationError> {
        for kind in SourceKind::ALL {
            self.strategy(style, kind)?;
        }
        Ok(())
    }

    /// Verify that every style covers every record kind
    ///
    /// Reports the first missing pairing as an unknown-source-type error.
    pub fn verify_complete(&self) -> Result<(), CitationError> {
        for style in StyleId::ALL {
            self.verify_style(style)?;
        }
        Ok(())
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        StyleRegistry::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_is_complete() {
        assert_eq!(StyleRegistry::builtin().verify_complete(), Ok(()));
    }

    #[test]
    fn test_empty_registry_reports_first_missing_pairing() {
        let registry = StyleRegistry::new();

        assert_eq!(
            registry.verify_complete(),
            Err(CitationError::unknown_source_type(
                SourceKind::Book,
                StyleId::Apa
            ))
        );
    }

    #[test]
    fn test_lookup_miss_names_kind_and_style() {
        let mut registry = StyleRegistry::new();
        registry.register(StyleId::Apa, Box::new(ApaBook));

        assert_eq!(
            registry
                .strategy(StyleId::Apa, SourceKind::Dissertation)
                .err(),
            Some(CitationError::unknown_source_type(
                SourceKind::Dissertation,
                StyleId::Apa
            ))
        );
    }

    #[test]
    fn test_strategies_are_keyed_by_style() {
        let mut registry = StyleRegistry::new();
        registry.register(StyleId::Apa, Box::new(ApaBook));

        assert!(registry.strategy(StyleId::Apa, SourceKind::Book).is_ok());
        assert_eq!(
            registry.strategy(StyleId::Gost, SourceKind::Book).err(),
            Some(CitationError::unknown_source_type(
                SourceKind::Book,
                StyleId::Gost
            ))
        );
    }

    #[test]
    fn test_partial_style_fails_verification() {
        let mut registry = StyleRegistry::new();
        registry.register(StyleId::Gost, Box::new(GostBook));
        registry.register(StyleId::Gost, Box::new(GostInternetResource));

        assert_eq!(
            registry.verify_style(StyleId::Gost),
            Err(CitationError::unknown_source_type(
                SourceKind::ArticlesCollection,
                StyleId::Gost
            ))
        );
    }
}
