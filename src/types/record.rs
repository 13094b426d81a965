//! Bibliographic source records
//!
//! This module defines the closed set of source record shapes (book,
//! internet resource, article in a collection, dissertation, journal
//! article), the `SourceKind` tag used for strategy dispatch, and the
//! `SourceRecord` tagged union that carries any record through the pipeline.
//!
//! Records are immutable once constructed. Every constructor validates its
//! fields and returns an error rather than producing an invalid record, so
//! downstream components never re-validate.

use crate::types::error::CitationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Pattern for dissertation speciality codes, e.g. "01.01.01"
static SPECIALITY_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{2}$").expect("speciality code pattern compiles"));

/// Source record kinds supported by the citation engine
///
/// This is the dispatch tag: every strategy declares the kind it renders,
/// and the style registry maps `(style, kind)` to a strategy. The tag is
/// stable and matches the `type` column of the CSV input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// A published book
    Book,
    /// An online article or page
    InternetResource,
    /// An article inside a collection of articles
    ArticlesCollection,
    /// A defended dissertation
    Dissertation,
    /// An article in a periodical journal
    JournalArticle,
}

impl SourceKind {
    /// All record kinds, in declaration order
    ///
    /// Used by the registry completeness check to verify that every style
    /// covers every kind.
    pub const ALL: [SourceKind; 5] = [
        SourceKind::Book,
        SourceKind::InternetResource,
        SourceKind::ArticlesCollection,
        SourceKind::Dissertation,
        SourceKind::JournalArticle,
    ];

    /// Stable tag used in CSV input, error messages, and log lines
    pub fn name(&self) -> &'static str {
        match self {
            SourceKind::Book => "book",
            SourceKind::InternetResource => "internet_resource",
            SourceKind::ArticlesCollection => "articles_collection",
            SourceKind::Dissertation => "dissertation",
            SourceKind::JournalArticle => "journal_article",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A published book
///
/// Fields are private; construction validates that `year` and `pages` are
/// strictly positive. `edition` is optional and rendered as a clause only
/// when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    authors: String,
    title: String,
    edition: Option<String>,
    city: String,
    publishing_house: String,
    year: i32,
    pages: u32,
}

impl Book {
    /// Create a validated book record
    pub fn new(
        authors: impl Into<String>,
        title: impl Into<String>,
        edition: Option<String>,
        city: impl Into<String>,
        publishing_house: impl Into<String>,
        year: i32,
        pages: u32,
    ) -> Result<Self, CitationError> {
        Ok(Book {
            authors: authors.into(),
            title: title.into(),
            edition,
            city: city.into(),
            publishing_house: publishing_house.into(),
            year: positive_year(year, SourceKind::Book)?,
            pages: positive_count(pages, SourceKind::Book, "pages")?,
        })
    }

    pub fn authors(&self) -> &str {
        &self.authors
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn edition(&self) -> Option<&str> {
        self.edition.as_deref()
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn publishing_house(&self) -> &str {
        &self.publishing_house
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn pages(&self) -> u32 {
        self.pages
    }
}

/// An online article or page
///
/// No field-level constraints; the constructor exists so this record is
/// built the same way as every other kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternetResource {
    article: String,
    website: String,
    link: String,
    access_date: String,
}

impl InternetResource {
    /// Create an internet resource record
    pub fn new(
        article: impl Into<String>,
        website: impl Into<String>,
        link: impl Into<String>,
        access_date: impl Into<String>,
    ) -> Result<Self, CitationError> {
        Ok(InternetResource {
            article: article.into(),
            website: website.into(),
            link: link.into(),
            access_date: access_date.into(),
        })
    }

    pub fn article(&self) -> &str {
        &self.article
    }

    pub fn website(&self) -> &str {
        &self.website
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn access_date(&self) -> &str {
        &self.access_date
    }
}

/// An article published inside a collection
///
/// `pages` is a free-form range like "25-30", not a count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticlesCollection {
    authors: String,
    article_title: String,
    collection_title: String,
    city: String,
    publishing_house: String,
    year: i32,
    pages: String,
}

impl ArticlesCollection {
    /// Create a validated collection-article record
    pub fn new(
        authors: impl Into<String>,
        article_title: impl Into<String>,
        collection_title: impl Into<String>,
        city: impl Into<String>,
        publishing_house: impl Into<String>,
        year: i32,
        pages: impl Into<String>,
    ) -> Result<Self, CitationError> {
        Ok(ArticlesCollection {
            authors: authors.into(),
            article_title: article_title.into(),
            collection_title: collection_title.into(),
            city: city.into(),
            publishing_house: publishing_house.into(),
            year: positive_year(year, SourceKind::ArticlesCollection)?,
            pages: pages.into(),
        })
    }

    pub fn authors(&self) -> &str {
        &self.authors
    }

    pub fn article_title(&self) -> &str {
        &self.article_title
    }

    pub fn collection_title(&self) -> &str {
        &self.collection_title
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn publishing_house(&self) -> &str {
        &self.publishing_house
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn pages(&self) -> &str {
        &self.pages
    }
}

/// A defended dissertation
///
/// All string fields must be non-empty and the speciality code must match
/// the NN.NN.NN digit-group pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dissertation {
    author: String,
    title: String,
    author_title: String,
    speciality_field: String,
    speciality_code: String,
    city: String,
    year: i32,
    pages: u32,
}

impl Dissertation {
    /// Create a validated dissertation record
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        author: impl Into<String>,
        title: impl Into<String>,
        author_title: impl Into<String>,
        speciality_field: impl Into<String>,
        speciality_code: impl Into<String>,
        city: impl Into<String>,
        year: i32,
        pages: u32,
    ) -> Result<Self, CitationError> {
        const KIND: SourceKind = SourceKind::Dissertation;

        let speciality_code = speciality_code.into();
        if !SPECIALITY_CODE.is_match(&speciality_code) {
            return Err(CitationError::malformed_speciality_code(speciality_code));
        }

        Ok(Dissertation {
            author: non_empty(author.into(), KIND, "author")?,
            title: non_empty(title.into(), KIND, "title")?,
            author_title: non_empty(author_title.into(), KIND, "author_title")?,
            speciality_field: non_empty(speciality_field.into(), KIND, "speciality_field")?,
            speciality_code,
            city: non_empty(city.into(), KIND, "city")?,
            year: positive_year(year, KIND)?,
            pages: positive_count(pages, KIND, "pages")?,
        })
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author_title(&self) -> &str {
        &self.author_title
    }

    pub fn speciality_field(&self) -> &str {
        &self.speciality_field
    }

    pub fn speciality_code(&self) -> &str {
        &self.speciality_code
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn pages(&self) -> u32 {
        self.pages
    }
}

/// An article in a periodical journal
///
/// `pages` is a free-form range like "25-30"; `volume` is the issue number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalArticle {
    authors: String,
    title: String,
    journal: String,
    year: i32,
    volume: u32,
    pages: String,
}

impl JournalArticle {
    /// Create a validated journal-article record
    pub fn new(
        authors: impl Into<String>,
        title: impl Into<String>,
        journal: impl Into<String>,
        year: i32,
        volume: u32,
        pages: impl Into<String>,
    ) -> Result<Self, CitationError> {
        const KIND: SourceKind = SourceKind::JournalArticle;

        Ok(JournalArticle {
            authors: non_empty(authors.into(), KIND, "authors")?,
            title: non_empty(title.into(), KIND, "title")?,
            journal: non_empty(journal.into(), KIND, "journal")?,
            year: positive_year(year, KIND)?,
            volume: positive_count(volume, KIND, "volume")?,
            pages: non_empty(pages.into(), KIND, "pages")?,
        })
    }

    pub fn authors(&self) -> &str {
        &self.authors
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn journal(&self) -> &str {
        &self.journal
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn volume(&self) -> u32 {
        self.volume
    }

    pub fn pages(&self) -> &str {
        &self.pages
    }
}

/// Tagged union over all record shapes
///
/// This is what flows through readers, formatters, and the aggregator.
/// Strategies receive a `&SourceRecord` and destructure the variant they
/// are bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceRecord {
    Book(Book),
    InternetResource(InternetResource),
    ArticlesCollection(ArticlesCollection),
    Dissertation(Dissertation),
    JournalArticle(JournalArticle),
}

impl SourceRecord {
    /// The dispatch tag of this record
    pub fn kind(&self) -> SourceKind {
        match self {
            SourceRecord::Book(_) => SourceKind::Book,
            SourceRecord::InternetResource(_) => SourceKind::InternetResource,
            SourceRecord::ArticlesCollection(_) => SourceKind::ArticlesCollection,
            SourceRecord::Dissertation(_) => SourceKind::Dissertation,
            SourceRecord::JournalArticle(_) => SourceKind::JournalArticle,
        }
    }

    /// Identifying field used in log lines
    ///
    /// The article title for internet resources and collection articles,
    /// the work title otherwise.
    pub fn title(&self) -> &str {
        match self {
            SourceRecord::Book(book) => book.title(),
            SourceRecord::InternetResource(resource) => resource.article(),
            SourceRecord::ArticlesCollection(article) => article.article_title(),
            SourceRecord::Dissertation(dissertation) => dissertation.title(),
            SourceRecord::JournalArticle(article) => article.title(),
        }
    }
}

impl From<Book> for SourceRecord {
    fn from(record: Book) -> Self {
        SourceRecord::Book(record)
    }
}

impl From<InternetResource> for SourceRecord {
    fn from(record: InternetResource) -> Self {
        SourceRecord::InternetResource(record)
    }
}

impl From<ArticlesCollection> for SourceRecord {
    fn from(record: ArticlesCollection) -> Self {
        SourceRecord::ArticlesCollection(record)
    }
}

impl From<Dissertation> for SourceRecord {
    fn from(record: Dissertation) -> Self {
        SourceRecord::Dissertation(record)
    }
}

impl From<JournalArticle> for SourceRecord {
    fn from(record: JournalArticle) -> Self {
        SourceRecord::JournalArticle(record)
    }
}

fn non_empty(
    value: String,
    kind: SourceKind,
    field: &'static str,
) -> Result<String, CitationError> {
    if value.is_empty() {
        Err(CitationError::empty_field(kind, field))
    } else {
        Ok(value)
    }
}

fn positive_year(year: i32, kind: SourceKind) -> Result<i32, CitationError> {
    if year > 0 {
        Ok(year)
    } else {
        Err(CitationError::non_positive(kind, "year", year as i64))
    }
}

fn positive_count(value: u32, kind: SourceKind, field: &'static str) -> Result<u32, CitationError> {
    if value > 0 {
        Ok(value)
    } else {
        Err(CitationError::non_positive(kind, field, value as i64))
    }
}
