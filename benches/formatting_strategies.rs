//! Benchmark suite for citation formatting
//!
//! Compares the two citation styles over in-memory record batches of
//! increasing size using the divan benchmarking framework. Rendering is a
//! pure function of the record, so the batches are built once per
//! benchmark and cloned into each iteration.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```

use citation_engine::core::CitationFormatter;
use citation_engine::styles::StyleId;
use citation_engine::types::{
    ArticlesCollection, Book, Dissertation, InternetResource, JournalArticle, SourceRecord,
};

fn main() {
    divan::main();
}

/// Build a mixed-kind batch of `len` records with varying field values
fn record_batch(len: usize) -> Vec<SourceRecord> {
    (0..len)
        .map(|i| {
            let title = format!("Наука как искусство {}", i);
            match i % 5 {
                0 => Book::new(
                    "Иванов И.М., Петров С.Н.",
                    title,
                    Some("3-е".to_string()),
                    "СПб.",
                    "Просвещение",
                    2020,
                    999,
                )
                .expect("valid book")
                .into(),
                1 => InternetResource::new(
                    title,
                    "Ведомости",
                    "https://www.vedomosti.ru",
                    "01.01.2021",
                )
                .expect("valid internet resource")
                .into(),
                2 => ArticlesCollection::new(
                    "Иванов И.М., Петров С.Н.",
                    title,
                    "Сборник научных трудов",
                    "СПб.",
                    "АСТ",
                    2020,
                    "25-30",
                )
                .expect("valid collection article")
                .into(),
                3 => Dissertation::new(
                    "Иванов И.М.",
                    title,
                    "д-р. / канд.",
                    "экон.",
                    "01.01.01",
                    "СПб.",
                    2020,
                    199,
                )
                .expect("valid dissertation")
                .into(),
                _ => JournalArticle::new(
                    "Иванов И.М., Петров С.Н.",
                    title,
                    "Научный журнал",
                    2020,
                    1,
                    "25-30",
                )
                .expect("valid journal article")
                .into(),
            }
        })
        .collect()
}

/// Render and sort a mixed batch in APA style
#[divan::bench(args = [100, 1_000, 10_000])]
fn apa_batch(bencher: divan::Bencher, len: usize) {
    let formatter = CitationFormatter::new(StyleId::Apa);
    let records = record_batch(len);

    bencher.bench(|| {
        formatter
            .format(divan::black_box(records.clone()))
            .expect("formatting failed")
    });
}

/// Render and sort a mixed batch in GOST style
#[divan::bench(args = [100, 1_000, 10_000])]
fn gost_batch(bencher: divan::Bencher, len: usize) {
    let formatter = CitationFormatter::new(StyleId::Gost);
    let records = record_batch(len);

    bencher.bench(|| {
        formatter
            .format(divan::black_box(records.clone()))
            .expect("formatting failed")
    });
}
