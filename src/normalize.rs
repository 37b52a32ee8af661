//! Cross-book normalization for comparative profiles.
//!
//! Scales each book's value for a metric against the maximum across the
//! three books, so that radar-style views always span 0-100.

use crate::models::{Book, BookRecord, Metric, PerBook};
use serde::Serialize;

/// Raw and normalized values of one metric across the three books.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MetricComparison {
    pub metric: Metric,
    pub raw: PerBook<f64>,
    pub scaled: PerBook<f64>,
}

/// Scale each book's value to 0-100 against the cross-book maximum.
///
/// Exactly one book scores 100 whenever at least one value is positive.
/// If no value is positive there is nothing to scale against and all
/// outputs are 0.
pub fn normalize_metric(metric: Metric, books: &PerBook<BookRecord>) -> PerBook<f64> {
    let raw = books.map(|_, record| metric.value(record));
    let max = raw
        .values()
        .into_iter()
        .fold(f64::NEG_INFINITY, f64::max);

    if max <= 0.0 {
        return PerBook::new(0.0, 0.0, 0.0);
    }

    raw.map(|_, value| value / max * 100.0)
}

/// Raw values together with their normalized counterparts.
pub fn compare_metric(metric: Metric, books: &PerBook<BookRecord>) -> MetricComparison {
    MetricComparison {
        metric,
        raw: books.map(|_, record| metric.value(record)),
        scaled: normalize_metric(metric, books),
    }
}

/// Normalized values of the five structural metrics, for the structural
/// radar view.
pub fn structural_profile(books: &PerBook<BookRecord>) -> Vec<MetricComparison> {
    Metric::STRUCTURAL
        .iter()
        .map(|&metric| compare_metric(metric, books))
        .collect()
}

/// One book's normalized position on every metric.
pub fn book_profile(book: Book, books: &PerBook<BookRecord>) -> Vec<(Metric, f64)> {
    Metric::ALL
        .iter()
        .map(|&metric| (metric, normalize_metric(metric, books)[book]))
        .collect()
}
