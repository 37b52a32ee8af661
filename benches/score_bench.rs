//! Criterion benchmarks for the derived-score calculators.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scriptura_metrics::dataset::{reference_books, reference_corpus};
use scriptura_metrics::models::{Book, Metric};
use scriptura_metrics::normalize::normalize_metric;
use scriptura_metrics::report::build_corpus_report;
use scriptura_metrics::scores::{composite_score, structural_complexity};

fn bench_scores(c: &mut Criterion) {
    let books = reference_books();

    let mut group = c.benchmark_group("scores");

    group.bench_function("composite_score", |b| {
        b.iter(|| composite_score(black_box(&books.quran)))
    });

    group.bench_function("structural_complexity", |b| {
        b.iter(|| structural_complexity(black_box(&books.quran.structural)))
    });

    group.bench_function("normalize_all_metrics", |b| {
        b.iter(|| {
            for metric in Metric::ALL {
                black_box(normalize_metric(metric, black_box(&books)));
            }
        })
    });

    group.bench_function("composite_all_books", |b| {
        b.iter(|| {
            Book::ALL
                .into_iter()
                .map(|book| composite_score(books.get(book)))
                .sum::<f64>()
        })
    });

    group.finish();
}

fn bench_report(c: &mut Criterion) {
    let corpus = reference_corpus();

    c.bench_function("build_corpus_report", |b| {
        b.iter(|| build_corpus_report(black_box(&corpus)))
    });
}

criterion_group!(benches, bench_scores, bench_report);
criterion_main!(benches);
