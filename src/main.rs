//! Scriptura Comparative Metrics CLI
//!
//! Prints and exports the reference comparison of three sacred texts:
//! raw metric records, derived scores, thematic and historical tables.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

mod dataset;
mod models;
mod network;
mod normalize;
mod output;
mod report;
mod scores;
mod themes;
mod timeline;

use dataset::reference_corpus;
use models::{Book, Metric};
use network::summarize_network;
use normalize::{book_profile, compare_metric};
use output::{
    print_book_profile, print_book_report, print_metric_comparison, print_network,
    print_overview, print_themes, print_timeline, write_csv_file, write_json_file,
};
use report::{build_book_report, build_corpus_report};

#[derive(Parser)]
#[command(name = "scriptura-metrics")]
#[command(about = "Comparative metrics for three sacred texts")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Book selector (CLI version, mirrors models::Book)
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliBook {
    Quran,
    Torah,
    Bible,
}

impl From<CliBook> for Book {
    fn from(book: CliBook) -> Self {
        match book {
            CliBook::Quran => Book::Quran,
            CliBook::Torah => Book::Torah,
            CliBook::Bible => Book::Bible,
        }
    }
}

/// Export file format
#[derive(Clone, Copy, Debug, ValueEnum)]
enum ExportFormat {
    /// Full corpus report as pretty-printed JSON
    Json,
    /// Flat per-book metric table as CSV
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// Show corpus-wide aggregates and derived scores
    Overview,

    /// Show the full metric record and scores of one book
    Book {
        /// Book to report on
        #[arg(long, value_enum)]
        book: CliBook,
    },

    /// Compare one metric across the three books
    ///
    /// Values are shown raw and scaled to 0-100 against the cross-book
    /// maximum.
    Compare {
        /// Metric identifier, e.g. vocabulary-richness
        #[arg(long)]
        metric: Metric,
    },

    /// Show one book's normalized position on every metric
    Profile {
        /// Book to profile
        #[arg(long, value_enum)]
        book: CliBook,
    },

    /// Show theme groups, literary patterns and doctrinal comparison
    Themes,

    /// Show one book's thematic network and its summary metrics
    Network {
        /// Book whose network to show
        #[arg(long, value_enum)]
        book: CliBook,
    },

    /// Show the historical influence timeline and geographic diffusion
    Timeline,

    /// Write the full report to a file
    Export {
        /// Output file path
        #[arg(long)]
        output: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Suppress the confirmation message
        #[arg(long)]
        quiet: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let corpus = reference_corpus();

    match cli.command {
        Commands::Overview => {
            let report = build_corpus_report(&corpus);
            print_overview(&corpus, &report);
        }

        Commands::Book { book } => {
            let book = Book::from(book);
            let report = build_book_report(book, corpus.record(book));
            print_book_report(&report, &corpus);
        }

        Commands::Compare { metric } => {
            let comparison = compare_metric(metric, &corpus.books);
            print_metric_comparison(&comparison);
        }

        Commands::Profile { book } => {
            let book = Book::from(book);
            let profile = book_profile(book, &corpus.books);
            print_book_profile(book, &profile);
        }

        Commands::Themes => {
            print_themes(&corpus);
        }

        Commands::Network { book } => {
            let network = corpus.networks.get(Book::from(book));
            let summary = summarize_network(network);
            print_network(network, &summary);
        }

        Commands::Timeline => {
            print_timeline(&corpus.timeline, &corpus.diffusion);
        }

        Commands::Export {
            output,
            format,
            quiet,
        } => {
            let report = build_corpus_report(&corpus);
            match format {
                ExportFormat::Json => write_json_file(&report, &output)?,
                ExportFormat::Csv => write_csv_file(&report.books, &output)?,
            }
            if !quiet {
                eprintln!("Output: {}", output.display());
            }
        }
    }

    Ok(())
}
