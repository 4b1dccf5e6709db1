use std::cmp::Ordering;

use crate::domain::records::BookRecord;

/// Own rating at or above which a book makes the "My Best" shelf.
pub const BEST_RATING_THRESHOLD: f64 = 4.5;

/// Books by own rating, highest first; equal ratings ordered by title.
pub fn sorted_by_rating(records: &[BookRecord]) -> Vec<&BookRecord> {
    sorted_by(records, BookRecord::rating_or_default)
}

/// Books by Goodreads rating, highest first; equal ratings ordered by title.
pub fn sorted_by_goodreads_rating(records: &[BookRecord]) -> Vec<&BookRecord> {
    sorted_by(records, BookRecord::goodreads_rating_or_default)
}

/// Books rated at least `threshold`, in [`sorted_by_rating`] order.
pub fn top_rated(records: &[BookRecord], threshold: f64) -> Vec<&BookRecord> {
    sorted_by_rating(records)
        .into_iter()
        .filter(|record| record.rating.is_some_and(|rating| rating >= threshold))
        .collect()
}

fn sorted_by(records: &[BookRecord], rating: fn(&BookRecord) -> f64) -> Vec<&BookRecord> {
    let mut sorted: Vec<&BookRecord> = records.iter().collect();
    sorted.sort_by(|a, b| by_rating_then_title(a, b, rating));
    sorted
}

fn by_rating_then_title(a: &BookRecord, b: &BookRecord, rating: fn(&BookRecord) -> f64) -> Ordering {
    rating(b)
        .total_cmp(&rating(a))
        .then_with(|| a.title.cmp(&b.title))
}
