use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::ids::RecommendationId;

/// Title shown when no recommendation exists for the requested day.
pub const NO_RECOMMENDATION_TITLE: &str = "No recommendation available";

/// Hint shown alongside the placeholder recommendation.
pub const NO_RECOMMENDATION_REASONING: &str =
    "Run the update script to generate today's recommendation";

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationStatus {
    #[default]
    Pending,
    Accepted,
    Dismissed,
    /// Placeholder marker: no recommendation was available.
    #[serde(rename = "none")]
    Unavailable,
}

impl RecommendationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationStatus::Pending => "pending",
            RecommendationStatus::Accepted => "accepted",
            RecommendationStatus::Dismissed => "dismissed",
            RecommendationStatus::Unavailable => "none",
        }
    }
}

impl std::str::FromStr for RecommendationStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(RecommendationStatus::Pending),
            "accepted" => Ok(RecommendationStatus::Accepted),
            "dismissed" => Ok(RecommendationStatus::Dismissed),
            "none" => Ok(RecommendationStatus::Unavailable),
            _ => Err(()),
        }
    }
}

/// A book suggestion produced by the external recommendation job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecommendation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecommendationId>,
    pub title: String,
    pub author: String,
    pub source: String,
    pub goodreads_rating: f64,
    pub recommendation_score: f64,
    pub reasoning: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub status: RecommendationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl DailyRecommendation {
    /// Placeholder returned instead of an error when nothing is stored.
    pub fn none() -> Self {
        Self {
            id: None,
            title: NO_RECOMMENDATION_TITLE.to_string(),
            author: String::new(),
            source: String::new(),
            goodreads_rating: 0.0,
            recommendation_score: 0.0,
            reasoning: NO_RECOMMENDATION_REASONING.to_string(),
            date: None,
            status: RecommendationStatus::Unavailable,
            cover_url: None,
            created_at: None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.status == RecommendationStatus::Unavailable
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRecommendation {
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub goodreads_rating: Option<f64>,
    #[serde(default)]
    pub recommendation_score: Option<f64>,
    #[serde(default)]
    pub reasoning: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub status: RecommendationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
}
