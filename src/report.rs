//! Report assembly.
//!
//! Combines the raw records with every derived score into the serializable
//! report structures written by the `output` module.

use crate::models::{Book, BookRecord, BookReport, Corpus, CorpusReport};
use crate::normalize::structural_profile;
use crate::scores::{
    composite_score, corpus_aggregates, linguistic_complexity, structural_complexity,
};

/// Build the derived-score report for one book.
pub fn build_book_report(book: Book, record: &BookRecord) -> BookReport {
    BookReport {
        book,
        structural: record.structural,
        linguistic: record.linguistic,
        historical: record.historical,
        composite_score: composite_score(record),
        structural_complexity: structural_complexity(&record.structural),
        linguistic_complexity: linguistic_complexity(&record.linguistic),
    }
}

/// Build the full corpus report: aggregates, per-book scores and the
/// normalized structural profile.
pub fn build_corpus_report(corpus: &Corpus) -> CorpusReport {
    CorpusReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        aggregates: corpus_aggregates(corpus),
        books: Book::ALL
            .into_iter()
            .map(|book| build_book_report(book, corpus.record(book)))
            .collect(),
        structural_profile: structural_profile(&corpus.books),
    }
}
