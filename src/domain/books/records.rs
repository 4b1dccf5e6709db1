use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::ids::BookRecordId;

/// Bucket name for books whose type is absent or blank.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Value an absent rating contributes to averages. An explicit rating of 0
/// and a missing rating are therefore indistinguishable in every mean.
pub const MISSING_RATING: f64 = 0.0;

/// Own rating at or above which a book counts as a success.
pub const SUCCESS_RATING: f64 = 4.0;

/// One finished book in canonical form.
///
/// Every downstream computation works on this shape; display-keyed payloads
/// are converted once at the boundary (see [`crate::domain::wire`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    pub title: String,
    pub author: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub book_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_read: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goodreads_rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_ratings: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_editions: Option<i64>,
}

impl BookRecord {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            ..Self::default()
        }
    }

    pub fn rating_or_default(&self) -> f64 {
        self.rating.unwrap_or(MISSING_RATING)
    }

    pub fn goodreads_rating_or_default(&self) -> f64 {
        self.goodreads_rating.unwrap_or(MISSING_RATING)
    }

    /// Type bucket name, falling back to [`UNCATEGORIZED`] for absent or blank values.
    pub fn type_label(&self) -> &str {
        non_blank(self.book_type.as_deref()).unwrap_or(UNCATEGORIZED)
    }

    /// Genre trimmed and lowercased; `None` when absent or blank.
    pub fn normalized_genre(&self) -> Option<String> {
        non_blank(self.genre.as_deref()).map(str::to_lowercase)
    }

    /// Trimmed discovery source; `None` when absent or whitespace-only.
    pub fn source_key(&self) -> Option<&str> {
        non_blank(self.source.as_deref())
    }

    /// Raw author name, or `None` when blank.
    pub fn author_key(&self) -> Option<&str> {
        if self.author.trim().is_empty() {
            None
        } else {
            Some(&self.author)
        }
    }

    pub fn is_success(&self) -> bool {
        self.rating_or_default() >= SUCCESS_RATING
    }

    /// Own rating minus the Goodreads rating, when both are known.
    pub fn ratings_gap(&self) -> Option<f64> {
        match (self.rating, self.goodreads_rating) {
            (Some(own), Some(goodreads)) => Some(own - goodreads),
            _ => None,
        }
    }

    pub fn ratings_trend(&self) -> Option<RatingsTrend> {
        self.ratings_gap().map(|gap| {
            if gap > 0.0 {
                RatingsTrend::Over
            } else {
                RatingsTrend::Under
            }
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Whether the reader rated a book above or below the Goodreads consensus.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum RatingsTrend {
    Over,
    Under,
}

impl RatingsTrend {
    pub fn as_str(&self) -> &'static str {
        match self {
            RatingsTrend::Over => "Over",
            RatingsTrend::Under => "Under",
        }
    }
}

impl fmt::Display for RatingsTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record as stored, with its row id and insertion time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredBookRecord {
    pub id: BookRecordId,
    #[serde(flatten)]
    pub record: BookRecord,
    pub created_at: DateTime<Utc>,
}
