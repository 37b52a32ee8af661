//! Derived score calculators.
//!
//! All scores are pure weighted sums over a single book record. The weights
//! reproduce the published reference figures and must not be retuned.

use crate::models::{BookRecord, Corpus, CorpusAggregates, LinguisticMetrics, StructuralMetrics};

/// Composite score weights, applied in field order:
/// thematic cohesion, semantic density, legal influence, oral preservation.
pub const COMPOSITE_WEIGHTS: [f64; 4] = [0.20, 0.25, 0.30, 0.25];

/// Overall impact score for one book on a 0-10 scale.
///
/// Oral preservation is a percentage and is brought onto the 0-10 scale
/// before weighting.
pub fn composite_score(record: &BookRecord) -> f64 {
    let [w_cohesion, w_density, w_legal, w_preservation] = COMPOSITE_WEIGHTS;

    record.structural.thematic_cohesion * w_cohesion
        + record.linguistic.semantic_density * w_density
        + record.historical.legal_influence * w_legal
        + (record.linguistic.oral_preservation / 10.0) * w_preservation
}

/// Structural complexity index over the structural metrics alone.
///
/// The result is not clamped; inputs outside their documented ranges
/// propagate into the output unchanged.
pub fn structural_complexity(structural: &StructuralMetrics) -> f64 {
    (structural.vocabulary_richness * 30.0
        + structural.thematic_cohesion * 25.0
        + (100.0 - structural.repetition_rate) * 20.0
        + structural.rhythmic_patterns as f64 * 0.25)
        / 100.0
}

/// Mean of semantic density and grammatical complexity, 0-10.
pub fn linguistic_complexity(linguistic: &LinguisticMetrics) -> f64 {
    (linguistic.semantic_density + linguistic.grammatical_complexity) / 2.0
}

/// Corpus-wide averages across the three books.
pub fn corpus_aggregates(corpus: &Corpus) -> CorpusAggregates {
    let books = corpus.books.values();
    let count = books.len() as f64;

    CorpusAggregates {
        mean_grammatical_complexity: books
            .iter()
            .map(|b| b.linguistic.grammatical_complexity)
            .sum::<f64>()
            / count,
        mean_oral_preservation: books
            .iter()
            .map(|b| b.linguistic.oral_preservation)
            .sum::<f64>()
            / count,
        mean_legal_influence: books
            .iter()
            .map(|b| b.historical.legal_influence)
            .sum::<f64>()
            / count,
        total_academic_studies: books
            .iter()
            .map(|b| b.historical.academic_studies as u64)
            .sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{reference_books, reference_corpus};
    use crate::models::Book;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_composite_score_reference_values() {
        let books = reference_books();

        // 9.2*0.2 + 9.1*0.25 + 9.5*0.3 + 9.99*0.25
        assert!((composite_score(&books[Book::Quran]) - 9.4625).abs() < EPS);
        // 8.8*0.2 + 8.4*0.25 + 9.8*0.3 + 9.52*0.25
        assert!((composite_score(&books[Book::Torah]) - 9.18).abs() < EPS);
        // 8.5*0.2 + 8.8*0.25 + 9.2*0.3 + 9.78*0.25
        assert!((composite_score(&books[Book::Bible]) - 9.105).abs() < EPS);
    }

    #[test]
    fn test_structural_complexity_reference_values() {
        let books = reference_books();

        assert!((structural_complexity(&books[Book::Quran].structural) - 20.33).abs() < EPS);
        assert!((structural_complexity(&books[Book::Torah].structural) - 20.8065).abs() < EPS);
        assert!((structural_complexity(&books[Book::Bible].structural) - 19.4085).abs() < EPS);
    }

    #[test]
    fn test_structural_complexity_is_idempotent() {
        let books = reference_books();
        let first = structural_complexity(&books[Book::Quran].structural);
        for _ in 0..10 {
            assert_eq!(structural_complexity(&books[Book::Quran].structural), first);
        }
    }

    #[test]
    fn test_structural_complexity_does_not_clamp() {
        let out_of_range = StructuralMetrics {
            avg_verse_length: 25.6,
            vocabulary_richness: 10.0, // far above the documented 0-1 range
            repetition_rate: 0.0,
            rhythmic_patterns: 10_000,
            thematic_cohesion: 100.0,
        };
        let score = structural_complexity(&out_of_range);
        assert!(score > 50.0);
    }

    #[test]
    fn test_linguistic_complexity() {
        let books = reference_books();
        assert!((linguistic_complexity(&books[Book::Quran].linguistic) - 8.9).abs() < EPS);
        assert!((linguistic_complexity(&books[Book::Torah].linguistic) - 8.15).abs() < EPS);
        assert!((linguistic_complexity(&books[Book::Bible].linguistic) - 8.5).abs() < EPS);
    }

    #[test]
    fn test_corpus_aggregates() {
        let corpus = reference_corpus();
        let aggregates = corpus_aggregates(&corpus);

        assert!((aggregates.mean_grammatical_complexity - (8.7 + 7.9 + 8.2) / 3.0).abs() < EPS);
        assert!((aggregates.mean_oral_preservation - (99.9 + 95.2 + 97.8) / 3.0).abs() < EPS);
        assert!((aggregates.mean_legal_influence - 9.5).abs() < EPS);
        assert_eq!(aggregates.total_academic_studies, 664_000);
    }

    #[test]
    fn test_scores_do_not_cross_contaminate() {
        let mut books = reference_books();
        let torah_before = composite_score(&books[Book::Torah]);
        let bible_before = structural_complexity(&books[Book::Bible].structural);

        books.quran.structural.thematic_cohesion = 0.0;
        books.quran.linguistic.semantic_density = 0.0;

        assert_eq!(composite_score(&books[Book::Torah]), torah_before);
        assert_eq!(
            structural_complexity(&books[Book::Bible].structural),
            bible_before
        );
    }
}
