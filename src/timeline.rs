//! Queries over the historical influence timeline.

use crate::models::{Book, TimelineEpoch};

/// Influence of one book at an exact epoch year, if that epoch exists.
pub fn influence_at(timeline: &[TimelineEpoch], book: Book, year: i32) -> Option<u32> {
    timeline
        .iter()
        .find(|epoch| epoch.year == year)
        .map(|epoch| epoch.influence[book])
}

/// The most influential book at one epoch. Ties go to the earlier book in
/// `Book::ALL` order.
pub fn dominant_book(epoch: &TimelineEpoch) -> Book {
    let mut dominant = Book::Quran;
    for book in Book::ALL {
        if epoch.influence[book] > epoch.influence[dominant] {
            dominant = book;
        }
    }
    dominant
}

/// Influence change of one book between two epoch years.
///
/// Returns `None` when either year has no epoch.
pub fn influence_growth(
    timeline: &[TimelineEpoch],
    book: Book,
    from_year: i32,
    to_year: i32,
) -> Option<i32> {
    let from = influence_at(timeline, book, from_year)?;
    let to = influence_at(timeline, book, to_year)?;
    Some(to as i32 - from as i32)
}
