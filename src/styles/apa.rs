//! American Psychological Association (APA) citation strategies
//!
//! One strategy per record kind. Each owns its fixed template and binds the
//! record's fields one-to-one to the template's placeholders. The book
//! strategy additionally derives the edition clause, which renders as empty
//! text when the edition is absent.

use crate::styles::{edition_clause, Bindings, FormatStrategy, Template};
use crate::types::{CitationError, SourceKind, SourceRecord};

/// APA book citation
#[derive(Debug, Clone, Copy, Default)]
pub struct ApaBook;

impl FormatStrategy for ApaBook {
    fn kind(&self) -> SourceKind {
        SourceKind::Book
    }

    fn template(&self) -> Template {
        Template::new("$authors ($year) $title ($edition) $city: $publishing_house, $pages с.")
    }

    fn bindings(&self, record: &SourceRecord) -> Result<Bindings, CitationError> {
        let SourceRecord::Book(book) = record else {
            return Err(CitationError::mismatched_record(self.kind(), record.kind()));
        };

        Ok(Bindings::new()
            .set("authors", book.authors())
            .set("year", book.year())
            .set("title", book.title())
            .set("edition", edition_clause(book.edition()))
            .set("city", book.city())
            .set("publishing_house", book.publishing_house())
            .set("pages", book.pages()))
    }
}

/// APA internet resource citation
#[derive(Debug, Clone, Copy, Default)]
pub struct ApaInternetResource;

impl FormatStrategy for ApaInternetResource {
    fn kind(&self) -> SourceKind {
        SourceKind::InternetResource
    }

    fn template(&self) -> Template {
        Template::new("$website ($access_date) $article $link")
    }

    fn bindings(&self, record: &SourceRecord) -> Result<Bindings, CitationError> {
        let SourceRecord::InternetResource(resource) = record else {
            return Err(CitationError::mismatched_record(self.kind(), record.kind()));
        };

        Ok(Bindings::new()
            .set("website", resource.website())
            .set("access_date", resource.access_date())
            .set("article", resource.article())
            .set("link", resource.link()))
    }
}

/// APA citation for an article inside a collection
#[derive(Debug, Clone, Copy, Default)]
pub struct ApaCollectionArticle;

impl FormatStrategy for ApaCollectionArticle {
    fn kind(&self) -> SourceKind {
        SourceKind::ArticlesCollection
    }

    fn template(&self) -> Template {
        Template::new(
            "$authors ($year) $article_title, $collection_title $city: $publishing_house, $pages с.",
        )
    }

    fn bindings(&self, record: &SourceRecord) -> Result<Bindings, CitationError> {
        let SourceRecord::ArticlesCollection(article) = record else {
            return Err(CitationError::mismatched_record(self.kind(), record.kind()));
        };

        Ok(Bindings::new()
            .set("authors", article.authors())
            .set("year", article.year())
            .set("article_title", article.article_title())
            .set("collection_title", article.collection_title())
            .set("city", article.city())
            .set("publishing_house", article.publishing_house())
            .set("pages", article.pages()))
    }
}

/// APA dissertation citation
#[derive(Debug, Clone, Copy, Default)]
pub struct ApaDissertation;

impl FormatStrategy for ApaDissertation {
    fn kind(&self) -> SourceKind {
        SourceKind::Dissertation
    }

    fn template(&self) -> Template {
        Template::new(
            "$author ($year) $title, дис. [$author_title $speciality_field $speciality_code] $city, $pages с.",
        )
    }

    fn bindings(&self, record: &SourceRecord) -> Result<Bindings, CitationError> {
        let SourceRecord::Dissertation(dissertation) = record else {
            return Err(CitationError::mismatched_record(self.kind(), record.kind()));
        };

        Ok(Bindings::new()
            .set("author", dissertation.author())
            .set("year", dissertation.year())
            .set("title", dissertation.title())
            .set("author_title", dissertation.author_title())
            .set("speciality_field", dissertation.speciality_field())
            .set("speciality_code", dissertation.speciality_code())
            .set("city", dissertation.city())
            .set("pages", dissertation.pages()))
    }
}

/// APA journal article citation
#[derive(Debug, Clone, Copy, Default)]
pub struct ApaJournalArticle;

impl FormatStrategy for ApaJournalArticle {
    fn kind(&self) -> SourceKind {
        SourceKind::JournalArticle
    }

    fn template(&self) -> Template {
        Template::new("$authors ($year) $title. $journal, $volume $pages с.")
    }

    fn bindings(&self, record: &SourceRecord) -> Result<Bindings, CitationError> {
        let SourceRecord::JournalArticle(article) = record else {
            return Err(CitationError::mismatched_record(self.kind(), record.kind()));
        };

        Ok(Bindings::new()
            .set("authors", article.authors())
            .set("year", article.year())
            .set("title", article.title())
            .set("journal", article.journal())
            .set("volume", article.volume())
            .set("pages", article.pages()))
    }
}
