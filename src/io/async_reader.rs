//! Asynchronous CSV reader with batch interface
//!
//! Provides a batch reading interface over source records from a CSV file.
//!
//! # Design
//!
//! The AsyncReader uses:
//! - csv-async for streaming CSV parsing
//! - tokio for the async runtime
//! - Batch reading so the async strategy can render batches concurrently
//!
//! Invalid rows are logged as warnings and skipped; batch reading never
//! fails mid-file.

use crate::io::csv_format::{convert_raw_record, RawRecord};
use crate::types::SourceRecord;
use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::stream::StreamExt;

/// Asynchronous CSV reader
///
/// Provides batch reading interface over validated source records.
pub struct AsyncReader<R: AsyncRead + Unpin> {
    csv_reader: csv_async::AsyncDeserializer<R>,
}

impl<R: AsyncRead + Unpin + Send + 'static> AsyncReader<R> {
    /// Create a new AsyncReader from an async reader
    pub fn new(reader: R) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .flexible(true)
            .trim(csv_async::Trim::All)
            .create_deserializer(reader);

        Self { csv_reader }
    }

    /// Read a batch of source records
    ///
    /// Reads up to `batch_size` rows, converting each into a validated
    /// SourceRecord. Rows that fail parsing or validation are logged as
    /// warnings and skipped.
    ///
    /// Returns an empty vector when the end of the file is reached.
    pub async fn read_batch(&mut self, batch_size: usize) -> Vec<SourceRecord> {
        let mut batch = Vec::with_capacity(batch_size);
        let mut rows = self.csv_reader.deserialize::<RawRecord>();

        while batch.len() < batch_size {
            match rows.next().await {
                Some(Ok(raw_record)) => match convert_raw_record(raw_record) {
                    Ok(record) => batch.push(record),
                    Err(e) => tracing::warn!("Skipping source record: {}", e),
                },
                Some(Err(e)) => tracing::warn!("CSV parse error: {}", e),
                None => break,
            }
        }

        batch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SourceKind;
    use futures::io::Cursor;

    const HEADER: &str = "type,authors,title,collection_title,edition,city,publishing_house,year,pages,volume,journal,website,link,access_date,author_title,speciality_field,speciality_code\n";
    const BOOK_ROW: &str = "book,\"Иванов И.М., Петров С.Н.\",Наука как искусство,,3-е,СПб.,Просвещение,2020,999,,,,,,,,\n";
    const JOURNAL_ROW: &str = "journal_article,\"Иванов И.М., Петров С.Н.\",Наука как искусство,,,,,2020,25-30,1,Научный журнал,,,,,,\n";
    const INTERNET_ROW: &str = "internet_resource,,Наука как искусство,,,,,,,,,Ведомости,https://www.vedomosti.ru,01.01.2021,,,\n";

    fn csv_content(rows: &[&str]) -> String {
        let mut content = HEADER.to_string();
        for row in rows {
            content.push_str(row);
        }
        content
    }

    #[tokio::test]
    async fn test_async_reader_read_batch() {
        let content = csv_content(&[BOOK_ROW, JOURNAL_ROW, INTERNET_ROW]);
        let mut reader = AsyncReader::new(Cursor::new(content.into_bytes()));

        let batch = reader.read_batch(2).await;
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].kind(), SourceKind::Book);
        assert_eq!(batch[1].kind(), SourceKind::JournalArticle);

        let batch = reader.read_batch(2).await;
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].kind(), SourceKind::InternetResource);

        let batch = reader.read_batch(2).await;
        assert!(batch.is_empty());
    }

    #[tokio::test]
    async fn test_async_reader_empty_csv() {
        let content = csv_content(&[]);
        let mut reader = AsyncReader::new(Cursor::new(content.into_bytes()));

        let batch = reader.read_batch(10).await;
        assert!(batch.is_empty());
    }

    #[tokio::test]
    async fn test_async_reader_skips_invalid_rows() {
        let content = csv_content(&[
            "podcast,,Наука,,,,,,,,,,,,,,\n",
            BOOK_ROW,
            "book,Иванов И.М.,Наука,,,СПб.,Просвещение,0,100,,,,,,,,\n",
        ]);
        let mut reader = AsyncReader::new(Cursor::new(content.into_bytes()));

        // Unknown type and non-positive year rows are skipped with a warning
        let batch = reader.read_batch(10).await;
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].kind(), SourceKind::Book);
        assert_eq!(batch[0].title(), "Наука как искусство");
    }

    #[tokio::test]
    async fn test_async_reader_batch_size_larger_than_records() {
        let content = csv_content(&[BOOK_ROW]);
        let mut reader = AsyncReader::new(Cursor::new(content.into_bytes()));

        let batch = reader.read_batch(100).await;
        assert_eq!(batch.len(), 1);
    }

    #[tokio::test]
    async fn test_async_reader_preserves_row_order() {
        let content = csv_content(&[INTERNET_ROW, JOURNAL_ROW, BOOK_ROW]);
        let mut reader = AsyncReader::new(Cursor::new(content.into_bytes()));

        let batch = reader.read_batch(10).await;
        let kinds: Vec<_> = batch.iter().map(|record| record.kind()).collect();
        assert_eq!(
            kinds,
            [
                SourceKind::InternetResource,
                SourceKind::JournalArticle,
                SourceKind::Book,
            ]
        );
    }

    #[tokio::test]
    async fn test_async_reader_trims_whitespace() {
        let content = csv_content(&[
            "  book  ,Иванов И.М.,  Наука как искусство  ,,,СПб.,Просвещение,2020,999,,,,,,,,\n",
        ]);
        let mut reader = AsyncReader::new(Cursor::new(content.into_bytes()));

        let batch = reader.read_batch(10).await;
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].title(), "Наука как искусство");
    }
}
