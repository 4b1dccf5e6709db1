use crate::domain::formatting::{format_optional_rating, format_rating_diff};
use crate::domain::records::BookRecord;

use super::or_em_dash;

/// One row of a book table on the dashboard.
pub struct BookRowView {
    pub title: String,
    pub author: String,
    pub year: String,
    pub genre: String,
    pub rating: String,
    pub goodreads_rating: String,
    pub gap: String,
    /// "Over" or "Under", empty when either rating is missing.
    pub trend: &'static str,
    pub cover_url: String,
}

impl BookRowView {
    pub fn from_record(record: &BookRecord) -> Self {
        Self {
            title: record.title.clone(),
            author: record.author.clone(),
            year: or_em_dash(record.year_read),
            genre: or_em_dash(record.genre.as_deref().map(str::trim).filter(|g| !g.is_empty())),
            rating: format_optional_rating(record.rating),
            goodreads_rating: format_optional_rating(record.goodreads_rating),
            gap: or_em_dash(record.ratings_gap().map(format_rating_diff)),
            trend: record.ratings_trend().map_or("", |t| t.as_str()),
            cover_url: record.cover_url.clone().unwrap_or_default(),
        }
    }
}
