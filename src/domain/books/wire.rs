//! Display-keyed JSON format served at `/api/v1/book-ratings`.
//!
//! The wire shape mirrors the spreadsheet export the reading log started as:
//! keys such as `"Year read"` and `"Goodreads Rating"`, numbers that sometimes
//! arrive as text, and duplicated columns (`Type`/`type`, `Genre`/`genres`,
//! `Source`/`source`).
//! [`RawBookRecord::into_record`] is the only place that shape is interpreted.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use super::records::{BookRecord, RatingsTrend};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawBookRecord {
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    #[serde(rename = "Author", default)]
    pub author: Option<String>,
    #[serde(rename = "Type", default)]
    pub book_type: Option<String>,
    #[serde(rename = "type", default, skip_serializing)]
    pub book_type_lower: Option<String>,
    #[serde(rename = "genres", default)]
    pub genres: Option<String>,
    #[serde(rename = "Genre", default, skip_serializing)]
    pub genre: Option<String>,
    #[serde(rename = "Year read", default, deserialize_with = "lenient_i64")]
    pub year_read: Option<i64>,
    #[serde(rename = "Rating", default, deserialize_with = "lenient_f64")]
    pub rating: Option<f64>,
    #[serde(rename = "Goodreads Rating", default, deserialize_with = "lenient_f64")]
    pub goodreads_rating: Option<f64>,
    #[serde(rename = "Source", default)]
    pub source: Option<String>,
    #[serde(rename = "source", default, skip_serializing)]
    pub source_lower: Option<String>,
    #[serde(rename = "Cover_url", default)]
    pub cover_url: Option<String>,
    #[serde(rename = "num_ratings", default, deserialize_with = "lenient_i64")]
    pub num_ratings: Option<i64>,
    #[serde(rename = "num_editions", default, deserialize_with = "lenient_i64")]
    pub num_editions: Option<i64>,
    #[serde(rename = "Ratings gap", default, skip_deserializing)]
    pub ratings_gap: Option<f64>,
    #[serde(rename = "Ratings trend", default, skip_deserializing)]
    pub ratings_trend: Option<RatingsTrend>,
}

impl RawBookRecord {
    /// Map the display-keyed shape onto the canonical record.
    ///
    /// `Type` wins over `type`, `Source` over `source` and `genres` over
    /// `Genre`; the fallback column
    /// is only consulted when the preferred one is absent or blank.
    pub fn into_record(self) -> BookRecord {
        BookRecord {
            title: self.title.unwrap_or_default(),
            author: self.author.unwrap_or_default(),
            book_type: first_present(self.book_type, self.book_type_lower),
            genre: first_present(self.genres, self.genre),
            year_read: self.year_read.and_then(|y| i32::try_from(y).ok()),
            rating: self.rating,
            goodreads_rating: self.goodreads_rating,
            source: first_present(self.source, self.source_lower),
            cover_url: self.cover_url.filter(|url| !url.trim().is_empty()),
            num_ratings: self.num_ratings,
            num_editions: self.num_editions,
        }
    }

    pub fn from_record(record: &BookRecord) -> Self {
        Self {
            title: Some(record.title.clone()),
            author: Some(record.author.clone()),
            book_type: record.book_type.clone(),
            book_type_lower: None,
            genres: record.genre.clone(),
            genre: None,
            year_read: record.year_read.map(i64::from),
            rating: record.rating,
            goodreads_rating: record.goodreads_rating,
            source: record.source.clone(),
            source_lower: None,
            cover_url: record.cover_url.clone(),
            num_ratings: record.num_ratings,
            num_editions: record.num_editions,
            ratings_gap: record.ratings_gap(),
            ratings_trend: record.ratings_trend(),
        }
    }
}

fn first_present(preferred: Option<String>, fallback: Option<String>) -> Option<String> {
    preferred
        .filter(|s| !s.trim().is_empty())
        .or_else(|| fallback.filter(|s| !s.trim().is_empty()))
}

/// Convert an arbitrary JSON payload into canonical records.
///
/// A payload that is not an array yields no records. Array elements that
/// cannot be read as a record are skipped.
pub fn parse_records(payload: Value) -> Vec<BookRecord> {
    let Value::Array(items) = payload else {
        warn!("book payload is not an array, treating as empty");
        return Vec::new();
    };

    let total = items.len();
    let records: Vec<BookRecord> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| {
            if !item.is_object() {
                warn!(index, "skipping non-object book entry");
                return None;
            }
            match serde_json::from_value::<RawBookRecord>(item) {
                Ok(raw) => Some(raw.into_record()),
                Err(err) => {
                    warn!(index, error = %err, "skipping malformed book entry");
                    None
                }
            }
        })
        .collect();

    if records.len() < total {
        warn!(kept = records.len(), total, "some book entries were dropped");
    }
    records
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => parse_decimal(&s),
        _ => None,
    })
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => parse_count(&s),
        _ => None,
    })
}

/// Parse a decimal such as `"4.25"`, returning `None` for blank or non-finite text.
pub fn parse_decimal(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Parse a count written for humans, e.g. `"1,234"` or `"12 editions"`.
pub fn parse_count(text: &str) -> Option<i64> {
    let digits = text.trim().replace(',', "");
    let leading = digits.split_whitespace().next()?;
    leading
        .parse::<i64>()
        .ok()
        .or_else(|| parse_decimal(leading).map(|f| f as i64))
}
