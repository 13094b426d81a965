//! CSV format handling for source records
//!
//! This module centralizes the CSV input format:
//! - RawRecord structure for deserialization
//! - Conversion from raw rows to validated domain records
//!
//! One row describes one source; the `type` column selects the record kind
//! and the remaining columns are filled as that kind requires, left empty
//! otherwise. All functions are pure (no I/O) for easy testing.

use crate::types::{
    ArticlesCollection, Book, Dissertation, InternetResource, JournalArticle, SourceKind,
    SourceRecord,
};
use serde::Deserialize;
use std::str::FromStr;

/// CSV row structure for deserialization
///
/// Matches the input header:
/// `type,authors,title,collection_title,edition,city,publishing_house,year,pages,volume,journal,website,link,access_date,author_title,speciality_field,speciality_code`
///
/// Every column except `type` is optional because each record kind uses a
/// different subset.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct RawRecord {
    #[serde(rename = "type")]
    pub source_type: String,
    pub authors: Option<String>,
    pub title: Option<String>,
    pub collection_title: Option<String>,
    pub edition: Option<String>,
    pub city: Option<String>,
    pub publishing_house: Option<String>,
    pub year: Option<String>,
    pub pages: Option<String>,
    pub volume: Option<String>,
    pub journal: Option<String>,
    pub website: Option<String>,
    pub link: Option<String>,
    pub access_date: Option<String>,
    pub author_title: Option<String>,
    pub speciality_field: Option<String>,
    pub speciality_code: Option<String>,
}

/// Convert a RawRecord into a validated SourceRecord
///
/// This function:
/// - Parses the `type` column (case-insensitive) into a SourceKind
/// - Checks that the columns the kind requires are present
/// - Parses numeric columns
/// - Runs the record constructor, which applies the field-level invariants
///
/// # Errors
///
/// Returns a descriptive message when the type is unknown, a required
/// column is missing, a numeric column does not parse, or construction-time
/// validation rejects a field value.
pub fn convert_raw_record(raw: RawRecord) -> Result<SourceRecord, String> {
    let kind = match raw.source_type.to_lowercase().as_str() {
        "book" => SourceKind::Book,
        "internet_resource" => SourceKind::InternetResource,
        "articles_collection" => SourceKind::ArticlesCollection,
        "dissertation" => SourceKind::Dissertation,
        "journal_article" => SourceKind::JournalArticle,
        _ => return Err(format!("Invalid source type: '{}'", raw.source_type)),
    };

    let record = match kind {
        SourceKind::Book => Book::new(
            require(raw.authors, kind, "authors")?,
            require(raw.title, kind, "title")?,
            raw.edition,
            require(raw.city, kind, "city")?,
            require(raw.publishing_house, kind, "publishing_house")?,
            parse_number::<i32>(raw.year, kind, "year")?,
            parse_number::<u32>(raw.pages, kind, "pages")?,
        )
        .map_err(|e| e.to_string())?
        .into(),

        SourceKind::InternetResource => InternetResource::new(
            require(raw.title, kind, "title")?,
            require(raw.website, kind, "website")?,
            require(raw.link, kind, "link")?,
            require(raw.access_date, kind, "access_date")?,
        )
        .map_err(|e| e.to_string())?
        .into(),

        SourceKind::ArticlesCollection => ArticlesCollection::new(
            require(raw.authors, kind, "authors")?,
            require(raw.title, kind, "title")?,
            require(raw.collection_title, kind, "collection_title")?,
            require(raw.city, kind, "city")?,
            require(raw.publishing_house, kind, "publishing_house")?,
            parse_number::<i32>(raw.year, kind, "year")?,
            require(raw.pages, kind, "pages")?,
        )
        .map_err(|e| e.to_string())?
        .into(),

        SourceKind::Dissertation => Dissertation::new(
            require(raw.authors, kind, "authors")?,
            require(raw.title, kind, "title")?,
            require(raw.author_title, kind, "author_title")?,
            require(raw.speciality_field, kind, "speciality_field")?,
            require(raw.speciality_code, kind, "speciality_code")?,
            require(raw.city, kind, "city")?,
            parse_number::<i32>(raw.year, kind, "year")?,
            parse_number::<u32>(raw.pages, kind, "pages")?,
        )
        .map_err(|e| e.to_string())?
        .into(),

        SourceKind::JournalArticle => JournalArticle::new(
            require(raw.authors, kind, "authors")?,
            require(raw.title, kind, "title")?,
            require(raw.journal, kind, "journal")?,
            parse_number::<i32>(raw.year, kind, "year")?,
            parse_number::<u32>(raw.volume, kind, "volume")?,
            require(raw.pages, kind, "pages")?,
        )
        .map_err(|e| e.to_string())?
        .into(),
    };

    Ok(record)
}

fn require(
    value: Option<String>,
    kind: SourceKind,
    column: &'static str,
) -> Result<String, String> {
    value
        .filter(|value| !value.is_empty())
        .ok_or_else(|| format!("{} row is missing column '{}'", kind, column))
}

fn parse_number<T: FromStr>(
    value: Option<String>,
    kind: SourceKind,
    column: &'static str,
) -> Result<T, String> {
    let text = require(value, kind, column)?;
    text.parse::<T>()
        .map_err(|_| format!("Invalid {} '{}' in a {} row", column, text, kind))
}
