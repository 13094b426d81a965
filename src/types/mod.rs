//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `record`: Source record shapes, the `SourceKind` tag, and the
//!   `SourceRecord` tagged union
//! - `error`: Error types for the citation engine

pub mod error;
pub mod record;

pub use error::CitationError;
pub use record::{
    ArticlesCollection, Book, Dissertation, InternetResource, JournalArticle, SourceKind,
    SourceRecord,
};

/// Shared record fixtures mirroring the reference bibliography used across
/// the test suite.
#[cfg(test)]
pub(crate) mod fixtures {
    use super::record::{
        ArticlesCollection, Book, Dissertation, InternetResource, JournalArticle,
    };

    pub(crate) fn book() -> Book {
        Book::new(
            "Иванов И.М., Петров С.Н.",
            "Наука как искусство",
            Some("3-е".to_string()),
            "СПб.",
            "Просвещение",
            2020,
            999,
        )
        .unwrap()
    }

    pub(crate) fn internet_resource() -> InternetResource {
        InternetResource::new(
            "Наука как искусство",
            "Ведомости",
            "https://www.vedomosti.ru",
            "01.01.2021",
        )
        .unwrap()
    }

    pub(crate) fn articles_collection() -> ArticlesCollection {
        ArticlesCollection::new(
            "Иванов И.М., Петров С.Н.",
            "Наука как искусство",
            "Сборник научных трудов",
            "СПб.",
            "АСТ",
            2020,
            "25-30",
        )
        .unwrap()
    }

    pub(crate) fn dissertation() -> Dissertation {
        Dissertation::new(
            "Иванов И.М.",
            "Наука как искусство",
            "д-р. / канд.",
            "экон.",
            "01.01.01",
            "СПб.",
            2020,
            199,
        )
        .unwrap()
    }

    pub(crate) fn journal_article() -> JournalArticle {
        JournalArticle::new(
            "Иванов И.М., Петров С.Н.",
            "Наука как искусство",
            "Научный журнал",
            2020,
            1,
            "25-30",
        )
        .unwrap()
    }
}
