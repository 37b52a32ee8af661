//! Scriptura Comparative Metrics Library
//!
//! Structural, linguistic, thematic and historical metrics for three sacred
//! texts, together with the weighted composite scores derived from them.
//! All figures are fixed reference constants; the calculators are pure
//! functions over an explicitly constructed corpus value.
//!
//! # Example
//!
//! ```
//! use scriptura_metrics::prelude::*;
//!
//! let corpus = reference_corpus();
//!
//! let quran = corpus.record(Book::Quran);
//! let score = composite_score(quran);
//! assert!((score - 9.4625).abs() < 1e-9);
//!
//! // Cross-book comparison of a single metric, scaled to 0-100
//! let scaled = normalize_metric(Metric::RhythmicPatterns, &corpus.books);
//! assert_eq!(scaled[Book::Quran], 100.0);
//! ```
//!
//! # Report Example
//!
//! ```
//! use scriptura_metrics::prelude::*;
//!
//! let corpus = reference_corpus();
//! let report = build_corpus_report(&corpus);
//!
//! let mut json = Vec::new();
//! write_json(&report, &mut json).unwrap();
//! assert!(!json.is_empty());
//! ```

pub mod dataset;
pub mod models;
pub mod network;
pub mod normalize;
pub mod output;
pub mod report;
pub mod scores;
pub mod themes;
pub mod timeline;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::dataset::{
        doctrinal_convergences, doctrinal_divergences, doctrinal_similarity, impact_profiles,
        influence_timeline, literary_patterns, reference_books, reference_corpus,
        regional_diffusion, style_features, thematic_networks, theme_groups,
    };
    pub use crate::models::{
        Book, BookRecord, BookReport, Corpus, CorpusAggregates, CorpusReport, DoctrinalPoint,
        HistoricalMetrics, ImpactProfile, LinguisticMetrics, Metric, MetricCategory,
        PatternUsage, PerBook, RegionalDiffusion, SimilarityMatrix, StructuralMetrics,
        StyleFeature, ThematicNetwork, ThemeGroup, ThemeLink, TimelineEpoch, UnknownMetric,
    };
    pub use crate::network::{summarize_network, NetworkSummary};
    pub use crate::normalize::{
        book_profile, compare_metric, normalize_metric, structural_profile, MetricComparison,
    };
    pub use crate::output::{
        format_year, print_book_profile, print_book_report, print_metric_comparison,
        print_network, print_overview, print_themes, print_timeline, write_csv, write_csv_file,
        write_json, write_json_file, OutputError,
    };
    pub use crate::report::{build_book_report, build_corpus_report};
    pub use crate::scores::{
        composite_score, corpus_aggregates, linguistic_complexity, structural_complexity,
        COMPOSITE_WEIGHTS,
    };
    pub use crate::themes::{group_means, subtheme_leaders, ThemeGroupSummary};
    pub use crate::timeline::{dominant_book, influence_at, influence_growth};
}

// Re-export commonly used types at the crate root
pub use models::{Book, BookRecord, Corpus, Metric, PerBook};
pub use scores::{composite_score, structural_complexity};
