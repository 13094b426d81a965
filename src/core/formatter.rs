//! Citation formatting and aggregation
//!
//! The [`CitationFormatter`] dispatches each source record through the
//! style registry, renders it once into a [`FormattedCitation`], and sorts
//! the batch by the rendered string. Rendering is a pure function of the
//! record, so formatting the same record twice yields the identical string;
//! the sort is the only step that looks across records.
//!
//! A batch fails on the first error: an unregistered record kind or a
//! template/model mismatch aborts the whole list rather than returning a
//! partial result.

use crate::styles::{StyleId, StyleRegistry};
use crate::types::{CitationError, SourceRecord};
use std::cmp::Ordering;

/// A source record paired with its rendered citation string
///
/// Owns the record it was rendered from. The string is computed once at
/// construction and cached; `formatted()` never re-renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedCitation {
    record: SourceRecord,
    rendered: String,
}

impl FormattedCitation {
    /// The cached citation string
    pub fn formatted(&self) -> &str {
        &self.rendered
    }

    /// The source record this citation was rendered from
    pub fn source(&self) -> &SourceRecord {
        &self.record
    }
}

/// Renders batches of source records into a sorted reference list
///
/// Bound to one style; dispatch from record kind to strategy goes through
/// the registry, so an unregistered kind surfaces as a distinct
/// unknown-source-type error.
pub struct CitationFormatter {
    style: StyleId,
    registry: StyleRegistry,
}

impl CitationFormatter {
    /// Create a formatter for a style using the built-in registry
    pub fn new(style: StyleId) -> Self {
        CitationFormatter::with_registry(style, StyleRegistry::builtin())
    }

    /// Create a formatter with a custom registry
    ///
    /// Lets tests exercise incomplete or replaced strategy configurations.
    pub fn with_registry(style: StyleId, registry: StyleRegistry) -> Self {
        CitationFormatter { style, registry }
    }

    /// The style this formatter renders
    pub fn style(&self) -> StyleId {
        self.style
    }

    /// Render a single record into a formatted citation
    ///
    /// Emits one info log line per record; logging is fire-and-forget and
    /// never affects the rendered string.
    ///
    /// # Errors
    ///
    /// Returns [`CitationError::UnknownSourceType`] when the registry has no
    /// strategy for the record's kind, or a substitution error when a
    /// template and its bindings disagree.
    pub fn format_record(&self, record: SourceRecord) -> Result<FormattedCitation, CitationError> {
        let strategy = self.registry.strategy(self.style, record.kind())?;
        let rendered = strategy.format(&record)?;

        tracing::info!(
            style = %self.style,
            kind = %record.kind(),
            "formatted \"{}\"",
            record.title()
        );

        Ok(FormattedCitation { record, rendered })
    }

    /// Render a batch of records and return them sorted by citation string
    ///
    /// Aborts on the first dispatch or substitution error; no partial list
    /// is returned. The sort is stable, so records rendering to identical
    /// strings keep their input order.
    pub fn format(
        &self,
        records: Vec<SourceRecord>,
    ) -> Result<Vec<FormattedCitation>, CitationError> {
        let mut citations = records
            .into_iter()
            .map(|record| self.format_record(record))
            .collect::<Result<Vec<_>, _>>()?;

        sort_citations(&mut citations);
        Ok(citations)
    }
}

/// Sort citations by their rendered string
///
/// Byte-wise comparison, which for UTF-8 strings is code-point order.
/// `sort_by` is stable, so ties preserve input order.
pub fn sort_citations(citations: &mut [FormattedCitation]) {
    citations.sort_by(|a, b| compare_rendered(a, b));
}

fn compare_rendered(a: &FormattedCitation, b: &FormattedCitation) -> Ordering {
    a.formatted().cmp(b.formatted())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::apa::ApaBook;
    use crate::types::{fixtures, InternetResource, SourceKind};
    use rstest::rstest;

    fn mixed_batch() -> Vec<SourceRecord> {
        vec![
            fixtures::book().into(),
            fixtures::internet_resource().into(),
            fixtures::articles_collection().into(),
            fixtures::dissertation().into(),
            fixtures::journal_article().into(),
        ]
    }

    #[test]
    fn test_format_record_caches_rendered_string() {
        let formatter = CitationFormatter::new(StyleId::Apa);

        let citation = formatter
            .format_record(fixtures::book().into())
            .unwrap();

        assert_eq!(
            citation.formatted(),
            "Иванов И.М., Петров С.Н. (2020) Наука как искусство (3-е изд. – ) СПб.: Просвещение, 999 с."
        );
        assert_eq!(citation.source(), &SourceRecord::from(fixtures::book()));
    }

    #[test]
    fn test_format_record_is_pure() {
        let formatter = CitationFormatter::new(StyleId::Gost);

        let first = formatter.format_record(fixtures::dissertation().into());
        let second = formatter.format_record(fixtures::dissertation().into());
        assert_eq!(
            first.unwrap().formatted(),
            second.unwrap().formatted()
        );
    }

    /// The mixed batch must come back ordered purely by code-point
    /// comparison of the rendered strings.
    #[rstest]
    #[case::apa(StyleId::Apa)]
    #[case::gost(StyleId::Gost)]
    fn test_format_sorts_by_rendered_string(#[case] style: StyleId) {
        let formatter = CitationFormatter::new(style);

        let citations = formatter.format(mixed_batch()).unwrap();

        let mut expected: Vec<String> = mixed_batch()
            .into_iter()
            .map(|record| {
                formatter
                    .format_record(record)
                    .unwrap()
                    .formatted()
                    .to_string()
            })
            .collect();
        expected.sort();

        let actual: Vec<_> = citations
            .iter()
            .map(|citation| citation.formatted().to_string())
            .collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_apa_batch_order() {
        let formatter = CitationFormatter::new(StyleId::Apa);

        let citations = formatter.format(mixed_batch()).unwrap();

        let kinds: Vec<_> = citations
            .iter()
            .map(|citation| citation.source().kind())
            .collect();
        assert_eq!(
            kinds,
            [
                SourceKind::InternetResource,
                SourceKind::Dissertation,
                SourceKind::Book,
                SourceKind::ArticlesCollection,
                SourceKind::JournalArticle,
            ]
        );
    }

    #[test]
    fn test_gost_batch_order() {
        let formatter = CitationFormatter::new(StyleId::Gost);

        let citations = formatter.format(mixed_batch()).unwrap();

        let kinds: Vec<_> = citations
            .iter()
            .map(|citation| citation.source().kind())
            .collect();
        assert_eq!(
            kinds,
            [
                SourceKind::Dissertation,
                SourceKind::JournalArticle,
                SourceKind::ArticlesCollection,
                SourceKind::Book,
                SourceKind::InternetResource,
            ]
        );
    }

    #[test]
    fn test_unknown_source_type_aborts_batch() {
        // A registry covering only books: the second record has no strategy.
        let mut registry = StyleRegistry::new();
        registry.register(StyleId::Apa, Box::new(ApaBook));
        let formatter = CitationFormatter::with_registry(StyleId::Apa, registry);

        let result = formatter.format(vec![
            fixtures::book().into(),
            fixtures::journal_article().into(),
        ]);

        assert_eq!(
            result.unwrap_err(),
            CitationError::unknown_source_type(SourceKind::JournalArticle, StyleId::Apa)
        );
    }

    #[test]
    fn test_ties_preserve_input_order() {
        // Two distinct resources engineered to render the identical APA
        // string: the article/link split differs but the concatenation
        // does not.
        let first = InternetResource::new(
            "Наука как искусство",
            "Ведомости",
            "https://www.vedomosti.ru",
            "01.01.2021",
        )
        .unwrap();
        let second = InternetResource::new(
            "Наука",
            "Ведомости",
            "как искусство https://www.vedomosti.ru",
            "01.01.2021",
        )
        .unwrap();
        assert_ne!(first, second);

        let formatter = CitationFormatter::new(StyleId::Apa);
        let citations = formatter
            .format(vec![second.clone().into(), first.clone().into()])
            .unwrap();

        assert_eq!(citations[0].formatted(), citations[1].formatted());
        assert_eq!(citations[0].source(), &SourceRecord::from(second));
        assert_eq!(citations[1].source(), &SourceRecord::from(first));
    }

    #[test]
    fn test_empty_batch_renders_empty_list() {
        let formatter = CitationFormatter::new(StyleId::Apa);
        assert!(formatter.format(Vec::new()).unwrap().is_empty());
    }
}
