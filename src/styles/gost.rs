//! GOST R 7.0.5-2008 citation strategies
//!
//! The Russian national standard for bibliographic references. Same
//! dispatch contract as the APA set: one strategy per record kind, each
//! with its own fixed template.
//!
//! The dissertation template ends in a Latin "c." rather than the Cyrillic
//! "с." used everywhere else; the quirk is preserved from the reference
//! bibliography this style reproduces.

use crate::styles::{edition_clause, Bindings, FormatStrategy, Template};
use crate::types::{CitationError, SourceKind, SourceRecord};

/// GOST book citation
#[derive(Debug, Clone, Copy, Default)]
pub struct GostBook;

impl FormatStrategy for GostBook {
    fn kind(&self) -> SourceKind {
        SourceKind::Book
    }

    fn template(&self) -> Template {
        Template::new("$authors $title. – $edition$city: $publishing_house, $year. – $pages с.")
    }

    fn bindings(&self, record: &SourceRecord) -> Result<Bindings, CitationError> {
        let SourceRecord::Book(book) = record else {
            return Err(CitationError::mismatched_record(self.kind(), record.kind()));
        };

        Ok(Bindings::new()
            .set("authors", book.authors())
            .set("title", book.title())
            .set("edition", edition_clause(book.edition()))
            .set("city", book.city())
            .set("publishing_house", book.publishing_house())
            .set("year", book.year())
            .set("pages", book.pages()))
    }
}

/// GOST internet resource citation
#[derive(Debug, Clone, Copy, Default)]
pub struct GostInternetResource;

impl FormatStrategy for GostInternetResource {
    fn kind(&self) -> SourceKind {
        SourceKind::InternetResource
    }

    fn template(&self) -> Template {
        Template::new("$article // $website URL: $link (дата обращения: $access_date).")
    }

    fn bindings(&self, record: &SourceRecord) -> Result<Bindings, CitationError> {
        let SourceRecord::InternetResource(resource) = record else {
            return Err(CitationError::mismatched_record(self.kind(), record.kind()));
        };

        Ok(Bindings::new()
            .set("article", resource.article())
            .set("website", resource.website())
            .set("link", resource.link())
            .set("access_date", resource.access_date()))
    }
}

/// GOST citation for an article inside a collection
#[derive(Debug, Clone, Copy, Default)]
pub struct GostCollectionArticle;

impl FormatStrategy for GostCollectionArticle {
    fn kind(&self) -> SourceKind {
        SourceKind::ArticlesCollection
    }

    fn template(&self) -> Template {
        Template::new(
            "$authors $article_title // $collection_title. – $city: $publishing_house, $year. – С. $pages.",
        )
    }

    fn bindings(&self, record: &SourceRecord) -> Result<Bindings, CitationError> {
        let SourceRecord::ArticlesCollection(article) = record else {
            return Err(CitationError::mismatched_record(self.kind(), record.kind()));
        };

        Ok(Bindings::new()
            .set("authors", article.authors())
            .set("article_title", article.article_title())
            .set("collection_title", article.collection_title())
            .set("city", article.city())
            .set("publishing_house", article.publishing_house())
            .set("year", article.year())
            .set("pages", article.pages()))
    }
}

/// GOST dissertation citation
#[derive(Debug, Clone, Copy, Default)]
pub struct GostDissertation;

impl FormatStrategy for GostDissertation {
    fn kind(&self) -> SourceKind {
        SourceKind::Dissertation
    }

    fn template(&self) -> Template {
        Template::new(
            "$author $title: дис. $author_title $speciality_field: $speciality_code $city $year. $pages c.",
        )
    }

    fn bindings(&self, record: &SourceRecord) -> Result<Bindings, CitationError> {
        let SourceRecord::Dissertation(dissertation) = record else {
            return Err(CitationError::mismatched_record(self.kind(), record.kind()));
        };

        Ok(Bindings::new()
            .set("author", dissertation.author())
            .set("title", dissertation.title())
            .set("author_title", dissertation.author_title())
            .set("speciality_field", dissertation.speciality_field())
            .set("speciality_code", dissertation.speciality_code())
            .set("city", dissertation.city())
            .set("year", dissertation.year())
            .set("pages", dissertation.pages()))
    }
}

/// GOST journal article citation
#[derive(Debug, Clone, Copy, Default)]
pub struct GostJournalArticle;

impl FormatStrategy for GostJournalArticle {
    fn kind(&self) -> SourceKind {
        SourceKind::JournalArticle
    }

    fn template(&self) -> Template {
        Template::new("$authors $title // $journal. $year. № $volume. С. $pages.")
    }

    fn bindings(&self, record: &SourceRecord) -> Result<Bindings, CitationError> {
        let SourceRecord::JournalArticle(article) = record else {
            return Err(CitationError::mismatched_record(self.kind(), record.kind()));
        };

        Ok(Bindings::new()
            .set("authors", article.authors())
            .set("title", article.title())
            .set("journal", article.journal())
            .set("year", article.year())
            .set("volume", article.volume())
            .set("pages", article.pages()))
    }
}
