//! Integration tests for scriptura-metrics.
//!
//! These tests verify the public API end-to-end, from the reference corpus
//! through score derivation to serialized reports.

use scriptura_metrics::dataset::reference_corpus;
use scriptura_metrics::models::{Book, Metric};
use scriptura_metrics::network::summarize_network;
use scriptura_metrics::normalize::{book_profile, normalize_metric};
use scriptura_metrics::output::{write_csv, write_json};
use scriptura_metrics::report::build_corpus_report;
use scriptura_metrics::scores::{composite_score, structural_complexity};
use scriptura_metrics::timeline::{dominant_book, influence_at};

const EPS: f64 = 1e-9;

#[test]
fn test_composite_scores_match_documented_figures() {
    let corpus = reference_corpus();

    let expected = [
        (Book::Quran, 9.4625),
        (Book::Torah, 9.18),
        (Book::Bible, 9.105),
    ];
    for (book, score) in expected {
        let computed = composite_score(corpus.record(book));
        assert!(
            (computed - score).abs() < EPS,
            "{book}: computed {computed}, expected {score}"
        );
    }
}

#[test]
fn test_structural_complexity_matches_documented_figures() {
    let corpus = reference_corpus();

    let expected = [
        (Book::Quran, 20.33),
        (Book::Torah, 20.8065),
        (Book::Bible, 19.4085),
    ];
    for (book, score) in expected {
        let computed = structural_complexity(&corpus.record(book).structural);
        assert!((computed - score).abs() < EPS);
    }
}

#[test]
fn test_normalizer_always_anchors_one_book_at_100() {
    let corpus = reference_corpus();

    for metric in Metric::ALL {
        let scaled = normalize_metric(metric, &corpus.books);
        let at_max = scaled
            .values()
            .into_iter()
            .filter(|v| (v - 100.0).abs() < EPS)
            .count();
        assert_eq!(at_max, 1, "metric {metric}");
    }
}

#[test]
fn test_mutating_one_book_leaves_others_untouched() {
    let corpus = reference_corpus();
    let mut books = corpus.books;

    let quran_composite = composite_score(&books[Book::Quran]);
    let bible_composite = composite_score(&books[Book::Bible]);

    books.torah.historical.legal_influence = 0.0;
    books.torah.structural.vocabulary_richness = 0.0;

    assert_eq!(composite_score(&books[Book::Quran]), quran_composite);
    assert_eq!(composite_score(&books[Book::Bible]), bible_composite);
}

#[test]
fn test_book_profiles_are_complete_and_bounded() {
    let corpus = reference_corpus();

    for book in Book::ALL {
        let profile = book_profile(book, &corpus.books);
        assert_eq!(profile.len(), 15);
        for (metric, scaled) in profile {
            assert!(
                scaled <= 100.0 + EPS,
                "{book} {metric} scaled to {scaled}"
            );
        }
    }
}

#[test]
fn test_network_summaries_for_reference_networks() {
    let corpus = reference_corpus();

    for book in Book::ALL {
        let summary = summarize_network(corpus.networks.get(book));
        assert_eq!(summary.node_count, 6);
        assert_eq!(summary.link_count, 6);
        assert!((summary.density - 40.0).abs() < EPS);
        assert!(summary.mean_link_weight > 80.0 && summary.mean_link_weight < 95.0);
    }
}

#[test]
fn test_timeline_queries() {
    let corpus = reference_corpus();

    assert_eq!(influence_at(&corpus.timeline, Book::Quran, -1500), Some(0));
    assert_eq!(influence_at(&corpus.timeline, Book::Quran, 2000), Some(95));

    let last = corpus.timeline.last().unwrap();
    assert_eq!(dominant_book(last), Book::Bible);

    let first = corpus.timeline.first().unwrap();
    assert_eq!(dominant_book(first), Book::Torah);
}

#[test]
fn test_corpus_report_round_trips_through_json() {
    let corpus = reference_corpus();
    let report = build_corpus_report(&corpus);

    let mut buffer = Vec::new();
    write_json(&report, &mut buffer).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

    assert_eq!(value["books"].as_array().unwrap().len(), 3);
    assert_eq!(value["structural_profile"].as_array().unwrap().len(), 5);

    let torah = &value["books"][1];
    assert_eq!(torah["book"], "torah");
    assert_eq!(torah["historical"]["manuscripts_earliest"], -250);
    assert!((torah["composite_score"].as_f64().unwrap() - 9.18).abs() < EPS);
}

#[test]
fn test_csv_export_lists_every_book_once() {
    let corpus = reference_corpus();
    let report = build_corpus_report(&corpus);

    let mut buffer = Vec::new();
    write_csv(&report.books, &mut buffer).unwrap();
    let text = String::from_utf8(buffer).unwrap();

    for book in Book::ALL {
        let rows = text
            .lines()
            .filter(|l| l.starts_with(book.name()))
            .count();
        assert_eq!(rows, 1, "{book}");
    }
}

#[test]
fn test_aggregates_match_dataset() {
    let corpus = reference_corpus();
    let report = build_corpus_report(&corpus);

    assert!((report.aggregates.mean_legal_influence - 9.5).abs() < EPS);
    assert!((report.aggregates.mean_oral_preservation - 97.63333333333333).abs() < 1e-6);
    assert_eq!(report.aggregates.total_academic_studies, 664_000);
}
