use crate::domain::formatting::{EM_DASH, format_rating};
use crate::domain::recommendations::DailyRecommendation;

pub struct RecommendationView {
    pub title: String,
    pub author: String,
    pub source: String,
    pub goodreads_rating: String,
    pub score: String,
    pub reasoning: String,
    pub date: String,
    pub cover_url: String,
    pub is_placeholder: bool,
}

impl RecommendationView {
    pub fn from_domain(recommendation: &DailyRecommendation) -> Self {
        let is_placeholder = recommendation.is_placeholder();
        let rating_or_dash = |value: f64| {
            if is_placeholder {
                EM_DASH.to_string()
            } else {
                format_rating(value)
            }
        };

        Self {
            title: recommendation.title.clone(),
            author: recommendation.author.clone(),
            source: recommendation.source.clone(),
            goodreads_rating: rating_or_dash(recommendation.goodreads_rating),
            score: rating_or_dash(recommendation.recommendation_score),
            reasoning: recommendation.reasoning.clone(),
            date: recommendation
                .date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            cover_url: recommendation.cover_url.clone().unwrap_or_default(),
            is_placeholder,
        }
    }
}
