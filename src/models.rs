//! Data structures for the comparative metrics corpus.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three texts under comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Book {
    Quran,
    Torah,
    Bible,
}

impl Book {
    pub const ALL: [Book; 3] = [Book::Quran, Book::Torah, Book::Bible];

    /// Display name of the book.
    pub fn name(&self) -> &'static str {
        match self {
            Book::Quran => "Quran",
            Book::Torah => "Torah",
            Book::Bible => "Bible",
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One value per book, indexed by the `Book` enum.
///
/// Used for every per-book table in the corpus so that a book can never be
/// missing or misspelled the way a string-keyed map would allow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerBook<T> {
    pub quran: T,
    pub torah: T,
    pub bible: T,
}

impl<T> PerBook<T> {
    pub fn new(quran: T, torah: T, bible: T) -> Self {
        Self { quran, torah, bible }
    }

    pub fn get(&self, book: Book) -> &T {
        match book {
            Book::Quran => &self.quran,
            Book::Torah => &self.torah,
            Book::Bible => &self.bible,
        }
    }

    /// Apply `f` to each book's value, keeping the book order.
    pub fn map<U>(&self, mut f: impl FnMut(Book, &T) -> U) -> PerBook<U> {
        PerBook {
            quran: f(Book::Quran, &self.quran),
            torah: f(Book::Torah, &self.torah),
            bible: f(Book::Bible, &self.bible),
        }
    }

    /// Iterate `(book, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Book, &T)> {
        [
            (Book::Quran, &self.quran),
            (Book::Torah, &self.torah),
            (Book::Bible, &self.bible),
        ]
        .into_iter()
    }
}

impl<T: Copy> PerBook<T> {
    pub fn values(&self) -> [T; 3] {
        [self.quran, self.torah, self.bible]
    }
}

impl<T> std::ops::Index<Book> for PerBook<T> {
    type Output = T;

    fn index(&self, book: Book) -> &T {
        self.get(book)
    }
}

// ============================================================================
// Book records
// ============================================================================

/// Structural metrics of a text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StructuralMetrics {
    pub avg_verse_length: f64,    // words per verse
    pub vocabulary_richness: f64, // type/token ratio, 0-1
    pub repetition_rate: f64,     // percent
    pub rhythmic_patterns: u32,
    pub thematic_cohesion: f64,   // 0-10
}

/// Linguistic metrics of a text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinguisticMetrics {
    pub unique_words: u32,
    pub root_words: u32,
    pub grammatical_complexity: f64, // 0-10
    pub semantic_density: f64,       // 0-10
    pub oral_preservation: f64,      // percent
}

/// Historical metrics of a text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoricalMetrics {
    pub manuscripts_earliest: i32,  // year CE, negative for BCE
    pub translations_timeline: i32, // year CE of first translation
    pub academic_studies: u32,
    pub cultural_references: u32,
    pub legal_influence: f64,       // 0-10
}

/// The full metric record for one book.
///
/// Records are fixed at construction and never mutated afterwards; every
/// field is present by construction, so there is no runtime validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    pub structural: StructuralMetrics,
    pub linguistic: LinguisticMetrics,
    pub historical: HistoricalMetrics,
}

// ============================================================================
// Metric identifiers
// ============================================================================

/// Metric group within a book record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricCategory {
    Structural,
    Linguistic,
    Historical,
}

impl fmt::Display for MetricCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MetricCategory::Structural => "structural",
            MetricCategory::Linguistic => "linguistic",
            MetricCategory::Historical => "historical",
        };
        f.write_str(s)
    }
}

/// Closed set of the fifteen book-record metrics.
///
/// Cross-book comparison is always dispatched through this enum rather than
/// metric-name strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    AvgVerseLength,
    VocabularyRichness,
    RepetitionRate,
    RhythmicPatterns,
    ThematicCohesion,
    UniqueWords,
    RootWords,
    GrammaticalComplexity,
    SemanticDensity,
    OralPreservation,
    ManuscriptsEarliest,
    TranslationsTimeline,
    AcademicStudies,
    CulturalReferences,
    LegalInfluence,
}

impl Metric {
    pub const ALL: [Metric; 15] = [
        Metric::AvgVerseLength,
        Metric::VocabularyRichness,
        Metric::RepetitionRate,
        Metric::RhythmicPatterns,
        Metric::ThematicCohesion,
        Metric::UniqueWords,
        Metric::RootWords,
        Metric::GrammaticalComplexity,
        Metric::SemanticDensity,
        Metric::OralPreservation,
        Metric::ManuscriptsEarliest,
        Metric::TranslationsTimeline,
        Metric::AcademicStudies,
        Metric::CulturalReferences,
        Metric::LegalInfluence,
    ];

    /// The five structural metrics, in display order.
    pub const STRUCTURAL: [Metric; 5] = [
        Metric::AvgVerseLength,
        Metric::VocabularyRichness,
        Metric::RepetitionRate,
        Metric::RhythmicPatterns,
        Metric::ThematicCohesion,
    ];

    /// Kebab-case identifier used on the command line and in file output.
    pub fn id(&self) -> &'static str {
        match self {
            Metric::AvgVerseLength => "avg-verse-length",
            Metric::VocabularyRichness => "vocabulary-richness",
            Metric::RepetitionRate => "repetition-rate",
            Metric::RhythmicPatterns => "rhythmic-patterns",
            Metric::ThematicCohesion => "thematic-cohesion",
            Metric::UniqueWords => "unique-words",
            Metric::RootWords => "root-words",
            Metric::GrammaticalComplexity => "grammatical-complexity",
            Metric::SemanticDensity => "semantic-density",
            Metric::OralPreservation => "oral-preservation",
            Metric::ManuscriptsEarliest => "manuscripts-earliest",
            Metric::TranslationsTimeline => "translations-timeline",
            Metric::AcademicStudies => "academic-studies",
            Metric::CulturalReferences => "cultural-references",
            Metric::LegalInfluence => "legal-influence",
        }
    }

    /// Human-readable label for reports.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::AvgVerseLength => "Average verse length (words)",
            Metric::VocabularyRichness => "Vocabulary richness",
            Metric::RepetitionRate => "Repetition rate (%)",
            Metric::RhythmicPatterns => "Rhythmic patterns",
            Metric::ThematicCohesion => "Thematic cohesion",
            Metric::UniqueWords => "Unique words",
            Metric::RootWords => "Root words",
            Metric::GrammaticalComplexity => "Grammatical complexity",
            Metric::SemanticDensity => "Semantic density",
            Metric::OralPreservation => "Oral preservation (%)",
            Metric::ManuscriptsEarliest => "Earliest manuscript (year)",
            Metric::TranslationsTimeline => "First translation (year)",
            Metric::AcademicStudies => "Academic studies",
            Metric::CulturalReferences => "Cultural references",
            Metric::LegalInfluence => "Legal influence",
        }
    }

    pub fn category(&self) -> MetricCategory {
        match self {
            Metric::AvgVerseLength
            | Metric::VocabularyRichness
            | Metric::RepetitionRate
            | Metric::RhythmicPatterns
            | Metric::ThematicCohesion => MetricCategory::Structural,
            Metric::UniqueWords
            | Metric::RootWords
            | Metric::GrammaticalComplexity
            | Metric::SemanticDensity
            | Metric::OralPreservation => MetricCategory::Linguistic,
            Metric::ManuscriptsEarliest
            | Metric::TranslationsTimeline
            | Metric::AcademicStudies
            | Metric::CulturalReferences
            | Metric::LegalInfluence => MetricCategory::Historical,
        }
    }

    /// Read this metric out of a book record as a float.
    pub fn value(&self, record: &BookRecord) -> f64 {
        match self {
            Metric::AvgVerseLength => record.structural.avg_verse_length,
            Metric::VocabularyRichness => record.structural.vocabulary_richness,
            Metric::RepetitionRate => record.structural.repetition_rate,
            Metric::RhythmicPatterns => record.structural.rhythmic_patterns as f64,
            Metric::ThematicCohesion => record.structural.thematic_cohesion,
            Metric::UniqueWords => record.linguistic.unique_words as f64,
            Metric::RootWords => record.linguistic.root_words as f64,
            Metric::GrammaticalComplexity => record.linguistic.grammatical_complexity,
            Metric::SemanticDensity => record.linguistic.semantic_density,
            Metric::OralPreservation => record.linguistic.oral_preservation,
            Metric::ManuscriptsEarliest => record.historical.manuscripts_earliest as f64,
            Metric::TranslationsTimeline => record.historical.translations_timeline as f64,
            Metric::AcademicStudies => record.historical.academic_studies as f64,
            Metric::CulturalReferences => record.historical.cultural_references as f64,
            Metric::LegalInfluence => record.historical.legal_influence,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned when parsing an unknown metric identifier.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown metric: {0}")]
pub struct UnknownMetric(pub String);

impl FromStr for Metric {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .iter()
            .find(|m| m.id() == s)
            .copied()
            .ok_or_else(|| UnknownMetric(s.to_string()))
    }
}

// ============================================================================
// Auxiliary tables
// ============================================================================

/// A named theme group with seven sub-themes scored 0-100 per book.
#[derive(Debug, Clone, Serialize)]
pub struct ThemeGroup {
    pub name: &'static str,
    pub subthemes: [&'static str; 7],
    pub scores: PerBook<[u32; 7]>,
}

/// Usage of one literary device, scored 0-100 per book.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PatternUsage {
    pub pattern: &'static str,
    pub scores: PerBook<u32>,
}

/// One row of the stylistic feature matrix.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StyleFeature {
    pub name: &'static str,
    pub scores: PerBook<f64>,
}

/// A weighted link between two theme nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeLink {
    pub source: &'static str,
    pub target: &'static str,
    pub weight: u32, // 0-100
}

/// The thematic concept network of one book.
#[derive(Debug, Clone, Serialize)]
pub struct ThematicNetwork {
    pub book: Book,
    pub nodes: [&'static str; 6],
    pub links: [ThemeLink; 6],
}

/// One epoch on the historical influence timeline.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TimelineEpoch {
    pub year: i32,
    pub influence: PerBook<u32>, // 0-100
    pub event: &'static str,
}

/// Present-day presence of each book in one world region, in percent.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RegionalDiffusion {
    pub region: &'static str,
    pub presence: PerBook<u32>,
}

/// Four-dimensional impact profile of one book, each axis 0-10.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactProfile {
    pub cultural: f64,
    pub legal: f64,
    pub philosophical: f64,
    pub artistic: f64,
}

/// A doctrinal aspect shared or contested across the books, scored 0-100.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DoctrinalPoint {
    pub aspect: &'static str,
    pub degree: u32,
}

/// Symmetric doctrinal similarity between books, unit diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityMatrix {
    pub values: [[f64; 3]; 3],
}

impl SimilarityMatrix {
    pub fn between(&self, a: Book, b: Book) -> f64 {
        self.values[a as usize][b as usize]
    }
}

/// The complete immutable dataset: one record per book plus every auxiliary
/// table. Constructed explicitly and passed by reference into the calculator
/// functions; there is no process-wide instance.
#[derive(Debug, Clone, Serialize)]
pub struct Corpus {
    pub books: PerBook<BookRecord>,
    pub themes: Vec<ThemeGroup>,
    pub patterns: Vec<PatternUsage>,
    pub style_features: Vec<StyleFeature>,
    pub networks: PerBook<ThematicNetwork>,
    pub timeline: Vec<TimelineEpoch>,
    pub diffusion: Vec<RegionalDiffusion>,
    pub impact: PerBook<ImpactProfile>,
    pub convergences: Vec<DoctrinalPoint>,
    pub divergences: Vec<DoctrinalPoint>,
    pub similarity: SimilarityMatrix,
}

impl Corpus {
    /// The metric record of one book.
    pub fn record(&self, book: Book) -> &BookRecord {
        self.books.get(book)
    }
}

// ============================================================================
// Report types
// ============================================================================

/// Derived scores for one book alongside its raw record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookReport {
    pub book: Book,
    pub structural: StructuralMetrics,
    pub linguistic: LinguisticMetrics,
    pub historical: HistoricalMetrics,
    pub composite_score: f64,
    pub structural_complexity: f64,
    pub linguistic_complexity: f64,
}

/// Corpus-wide averages shown at the top of the overview report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorpusAggregates {
    pub mean_grammatical_complexity: f64,
    pub mean_oral_preservation: f64,
    pub mean_legal_influence: f64,
    pub total_academic_studies: u64,
}

/// Full comparison report over the three books.
#[derive(Debug, Clone, Serialize)]
pub struct CorpusReport {
    pub version: String,
    pub aggregates: CorpusAggregates,
    pub books: Vec<BookReport>,
    pub structural_profile: Vec<crate::normalize::MetricComparison>,
}
