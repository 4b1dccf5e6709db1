use chrono::NaiveDate;
use tracing::{debug, error};

use crate::domain::RepositoryError;
use crate::domain::recommendations::DailyRecommendation;
use crate::domain::repositories::RecommendationRepository;

/// The recommendation stored for `day`, or the placeholder when there is none.
///
/// Storage errors also produce the placeholder; the dashboard never fails
/// because the recommendation job has not run.
pub async fn recommendation_for_day(
    repo: &dyn RecommendationRepository,
    day: NaiveDate,
) -> DailyRecommendation {
    match repo.for_date(day).await {
        Ok(recommendation) => recommendation,
        Err(RepositoryError::NotFound) => {
            debug!(%day, "no recommendation stored for day");
            DailyRecommendation::none()
        }
        Err(err) => {
            error!(error = %err, %day, "error fetching daily recommendation");
            DailyRecommendation::none()
        }
    }
}
