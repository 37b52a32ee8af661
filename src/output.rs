//! Output formatting for reports (JSON, CSV, console).

use crate::models::{
    Book, BookReport, Corpus, CorpusReport, Metric, RegionalDiffusion, ThematicNetwork,
    TimelineEpoch,
};
use crate::network::NetworkSummary;
use crate::normalize::MetricComparison;
use crate::themes::{group_means, subtheme_leaders};
use crate::timeline::{dominant_book, influence_growth};
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write the corpus report as pretty-printed JSON.
pub fn write_json<W: Write>(report: &CorpusReport, writer: &mut W) -> Result<(), OutputError> {
    let json = serde_json::to_string_pretty(report)?;
    writer.write_all(json.as_bytes())?;
    Ok(())
}

/// Write the corpus report as JSON to a file.
pub fn write_json_file(report: &CorpusReport, path: &Path) -> Result<(), OutputError> {
    let mut file = std::fs::File::create(path)?;
    write_json(report, &mut file)
}

/// Write book reports as CSV, one row per book.
pub fn write_csv<W: Write>(reports: &[BookReport], writer: &mut W) -> Result<(), OutputError> {
    writeln!(
        writer,
        "book,avg_verse_length,vocabulary_richness,repetition_rate,rhythmic_patterns,\
         thematic_cohesion,unique_words,root_words,grammatical_complexity,semantic_density,\
         oral_preservation,manuscripts_earliest,translations_timeline,academic_studies,\
         cultural_references,legal_influence,composite_score,structural_complexity,\
         linguistic_complexity"
    )?;

    for report in reports {
        writeln!(
            writer,
            "{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{}",
            report.book,
            report.structural.avg_verse_length,
            report.structural.vocabulary_richness,
            report.structural.repetition_rate,
            report.structural.rhythmic_patterns,
            report.structural.thematic_cohesion,
            report.linguistic.unique_words,
            report.linguistic.root_words,
            report.linguistic.grammatical_complexity,
            report.linguistic.semantic_density,
            report.linguistic.oral_preservation,
            report.historical.manuscripts_earliest,
            report.historical.translations_timeline,
            report.historical.academic_studies,
            report.historical.cultural_references,
            report.historical.legal_influence,
            report.composite_score,
            report.structural_complexity,
            report.linguistic_complexity
        )?;
    }

    Ok(())
}

/// Write book reports as CSV to a file.
pub fn write_csv_file(reports: &[BookReport], path: &Path) -> Result<(), OutputError> {
    let mut file = std::fs::File::create(path)?;
    write_csv(reports, &mut file)
}

/// Print the corpus overview: aggregates, derived scores and style matrix.
pub fn print_overview(corpus: &Corpus, report: &CorpusReport) {
    println!("=== Corpus Overview ===");
    println!("Version: {}", report.version);
    println!();
    println!(
        "Mean grammatical complexity: {:.1}/10",
        report.aggregates.mean_grammatical_complexity
    );
    println!(
        "Mean oral preservation: {:.1}%",
        report.aggregates.mean_oral_preservation
    );
    println!(
        "Mean legal influence: {:.1}/10",
        report.aggregates.mean_legal_influence
    );
    println!(
        "Academic studies: {}K",
        report.aggregates.total_academic_studies / 1000
    );

    println!("\n=== Derived Scores ===");
    println!(
        "{:<8} {:>10} {:>12} {:>12}",
        "Book", "Composite", "Structural", "Linguistic"
    );
    for book in &report.books {
        println!(
            "{:<8} {:>10.4} {:>12.4} {:>12.2}",
            book.book.name(),
            book.composite_score,
            book.structural_complexity,
            book.linguistic_complexity
        );
    }

    println!("\n=== Style Features ===");
    println!(
        "{:<24} {:>8} {:>8} {:>8}",
        "Feature", "Quran", "Torah", "Bible"
    );
    for feature in &corpus.style_features {
        println!(
            "{:<24} {:>8.2} {:>8.2} {:>8.2}",
            feature.name, feature.scores.quran, feature.scores.torah, feature.scores.bible
        );
    }
}

/// Print the full detail report for one book.
pub fn print_book_report(report: &BookReport, corpus: &Corpus) {
    println!("=== {} ===", report.book);

    println!("\nStructure:");
    println!(
        "  Average verse length: {} words",
        report.structural.avg_verse_length
    );
    println!(
        "  Vocabulary richness: {:.2}",
        report.structural.vocabulary_richness
    );
    println!("  Repetition rate: {}%", report.structural.repetition_rate);
    println!(
        "  Rhythmic patterns: {}",
        report.structural.rhythmic_patterns
    );
    println!(
        "  Thematic cohesion: {}/10",
        report.structural.thematic_cohesion
    );

    println!("\nLinguistics:");
    println!("  Unique words: {}", report.linguistic.unique_words);
    println!("  Root words: {}", report.linguistic.root_words);
    println!(
        "  Grammatical complexity: {}/10",
        report.linguistic.grammatical_complexity
    );
    println!(
        "  Semantic density: {}/10",
        report.linguistic.semantic_density
    );
    println!(
        "  Oral preservation: {}%",
        report.linguistic.oral_preservation
    );

    println!("\nHistory:");
    println!(
        "  Earliest manuscript: {}",
        format_year(report.historical.manuscripts_earliest)
    );
    println!(
        "  First translation: {}",
        format_year(report.historical.translations_timeline)
    );
    println!("  Academic studies: {}", report.historical.academic_studies);
    println!(
        "  Cultural references: {}",
        report.historical.cultural_references
    );
    println!(
        "  Legal influence: {}/10",
        report.historical.legal_influence
    );

    let impact = corpus.impact.get(report.book);
    println!("\nImpact profile:");
    println!("  Cultural: {}/10", impact.cultural);
    println!("  Legal: {}/10", impact.legal);
    println!("  Philosophical: {}/10", impact.philosophical);
    println!("  Artistic: {}/10", impact.artistic);

    println!("\nScores:");
    println!("  Composite: {:.4}/10", report.composite_score);
    println!("  Structural complexity: {:.4}", report.structural_complexity);
    println!(
        "  Linguistic complexity: {:.2}/10",
        report.linguistic_complexity
    );
}

/// Format a signed year as BCE/CE.
pub fn format_year(year: i32) -> String {
    if year < 0 {
        format!("{} BCE", -year)
    } else {
        format!("{} CE", year)
    }
}

/// Print raw and normalized values of one metric across the books.
pub fn print_metric_comparison(comparison: &MetricComparison) {
    println!("=== {} ===", comparison.metric.label());
    println!("{:<8} {:>14} {:>10}", "Book", "Raw", "Scaled");
    for (book, raw) in comparison.raw.iter() {
        println!(
            "{:<8} {:>14.2} {:>10.1}",
            book.name(),
            raw,
            comparison.scaled[book]
        );
    }
}

/// Print one book's normalized position on every metric.
pub fn print_book_profile(book: Book, profile: &[(Metric, f64)]) {
    println!("=== Profile: {book} ===");
    println!("{:<28} {:<12} {:>8}", "Metric", "Category", "Scaled");
    for (metric, scaled) in profile {
        println!(
            "{:<28} {:<12} {:>8.1}",
            metric.label(),
            metric.category(),
            scaled
        );
    }
}

/// Print theme groups, doctrinal convergences and the similarity matrix.
pub fn print_themes(corpus: &Corpus) {
    for group in &corpus.themes {
        println!("=== {} Themes ===", group.name);
        let summary = group_means(group);
        println!(
            "Mean: Quran {:.1}, Torah {:.1}, Bible {:.1}",
            summary.means.quran, summary.means.torah, summary.means.bible
        );
        let leaders = subtheme_leaders(group);
        println!(
            "{:<16} {:>6} {:>6} {:>6}  {}",
            "Sub-theme", "Quran", "Torah", "Bible", "Leader"
        );
        for (i, subtheme) in group.subthemes.iter().enumerate() {
            println!(
                "{:<16} {:>6} {:>6} {:>6}  {}",
                subtheme,
                group.scores.quran[i],
                group.scores.torah[i],
                group.scores.bible[i],
                leaders[i].1
            );
        }
        println!();
    }

    println!("=== Literary Patterns ===");
    println!("{:<16} {:>6} {:>6} {:>6}", "Pattern", "Quran", "Torah", "Bible");
    for pattern in &corpus.patterns {
        println!(
            "{:<16} {:>6} {:>6} {:>6}",
            pattern.pattern, pattern.scores.quran, pattern.scores.torah, pattern.scores.bible
        );
    }

    println!("\n=== Doctrinal Convergence ===");
    for point in &corpus.convergences {
        println!("  {:<20} {}%", point.aspect, point.degree);
    }

    println!("\n=== Doctrinal Divergence ===");
    for point in &corpus.divergences {
        println!("  {:<20} {}%", point.aspect, point.degree);
    }

    println!("\n=== Doctrinal Similarity ===");
    println!("{:<8} {:>6} {:>6} {:>6}", "", "Quran", "Torah", "Bible");
    for a in Book::ALL {
        print!("{:<8}", a.name());
        for b in Book::ALL {
            print!(" {:>6.2}", corpus.similarity.between(a, b));
        }
        println!();
    }
}

/// Print one book's thematic network and its summary metrics.
pub fn print_network(network: &ThematicNetwork, summary: &NetworkSummary) {
    println!("=== Thematic Network: {} ===", network.book);
    println!("Nodes: {}", network.nodes.join(", "));
    println!("\nLinks:");
    for link in &network.links {
        println!("  {} - {} ({})", link.source, link.target, link.weight);
    }
    println!("\nNode count: {}", summary.node_count);
    println!("Mean link weight: {:.1}%", summary.mean_link_weight);
    println!("Network density: {:.1}%", summary.density);
    println!(
        "Strongest link: {} - {} ({})",
        summary.strongest_link.source, summary.strongest_link.target, summary.strongest_link.weight
    );
}

/// Print the influence timeline and present-day diffusion.
pub fn print_timeline(timeline: &[TimelineEpoch], diffusion: &[RegionalDiffusion]) {
    println!("=== Historical Influence ===");
    println!(
        "{:>6} {:>6} {:>6} {:>6} {:>8}  {}",
        "Year", "Quran", "Torah", "Bible", "Leading", "Event"
    );
    for epoch in timeline {
        println!(
            "{:>6} {:>6} {:>6} {:>6} {:>8}  {}",
            epoch.year,
            epoch.influence.quran,
            epoch.influence.torah,
            epoch.influence.bible,
            dominant_book(epoch).name(),
            epoch.event
        );
    }

    println!("\nInfluence growth 500-2000:");
    for book in Book::ALL {
        if let Some(growth) = influence_growth(timeline, book, 500, 2000) {
            println!("  {:<6} {:+}", book.name(), growth);
        }
    }

    println!("\n=== Geographic Diffusion ===");
    println!(
        "{:<14} {:>6} {:>6} {:>6}",
        "Region", "Quran", "Torah", "Bible"
    );
    for region in diffusion {
        println!(
            "{:<14} {:>6} {:>6} {:>6}",
            region.region, region.presence.quran, region.presence.torah, region.presence.bible
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::reference_corpus;
    use crate::report::build_corpus_report;

    #[test]
    fn test_write_json_contains_scores() {
        let corpus = reference_corpus();
        let report = build_corpus_report(&corpus);

        let mut buffer = Vec::new();
        write_json(&report, &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["books"].as_array().unwrap().len(), 3);
        assert_eq!(value["books"][0]["book"], "quran");
        assert!((value["books"][0]["composite_score"].as_f64().unwrap() - 9.4625).abs() < 1e-9);
        assert_eq!(value["aggregates"]["total_academic_studies"], 664_000);
    }

    #[test]
    fn test_write_csv_shape() {
        let corpus = reference_corpus();
        let report = build_corpus_report(&corpus);

        let mut buffer = Vec::new();
        write_csv(&report.books, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4); // header + one row per book

        let header_fields = lines[0].split(',').count();
        for row in &lines[1..] {
            assert_eq!(row.split(',').count(), header_fields);
        }
        assert!(lines[1].starts_with("Quran,25.6,"));
        assert!(lines[2].contains(",-250,"));
    }

    #[test]
    fn test_format_year() {
        assert_eq!(format_year(-250), "250 BCE");
        assert_eq!(format_year(642), "642 CE");
        assert_eq!(format_year(0), "0 CE");
    }
}
