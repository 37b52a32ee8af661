//! Theme group summaries and doctrinal comparison queries.

use crate::models::{Book, PerBook, ThemeGroup};
use serde::Serialize;

/// Per-book averages over one theme group.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ThemeGroupSummary {
    pub group: &'static str,
    pub means: PerBook<f64>,
}

/// Mean sub-theme score per book for one group.
pub fn group_means(group: &ThemeGroup) -> ThemeGroupSummary {
    ThemeGroupSummary {
        group: group.name,
        means: group.scores.map(|_, scores| {
            scores.iter().map(|&s| s as f64).sum::<f64>() / scores.len() as f64
        }),
    }
}

/// The book with the highest score for each sub-theme of a group.
///
/// Ties go to the earlier book in `Book::ALL` order.
pub fn subtheme_leaders(group: &ThemeGroup) -> Vec<(&'static str, Book)> {
    group
        .subthemes
        .iter()
        .enumerate()
        .map(|(i, &subtheme)| {
            let mut leader = Book::Quran;
            for book in [Book::Torah, Book::Bible] {
                if group.scores[book][i] > group.scores[leader][i] {
                    leader = book;
                }
            }
            (subtheme, leader)
        })
        .collect()
}
