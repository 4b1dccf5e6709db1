use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::Utc;
use tracing::info;

use crate::application::errors::{ApiError, AppError};
use crate::application::services::recommendation_for_day;
use crate::application::state::AppState;
use crate::domain::recommendations::{DailyRecommendation, NewRecommendation};

#[tracing::instrument(skip(state))]
pub(crate) async fn todays_recommendation(
    State(state): State<AppState>,
) -> Json<DailyRecommendation> {
    let today = Utc::now().date_naive();
    Json(recommendation_for_day(&*state.recommendation_repo, today).await)
}

#[tracing::instrument(skip(state))]
pub(crate) async fn latest_recommendation(
    State(state): State<AppState>,
) -> Result<Json<DailyRecommendation>, ApiError> {
    let latest = state
        .recommendation_repo
        .latest()
        .await
        .map_err(AppError::from)?;
    Ok(Json(latest))
}

#[tracing::instrument(skip(state, payload))]
pub(crate) async fn create_recommendation(
    State(state): State<AppState>,
    Json(mut payload): Json<NewRecommendation>,
) -> Result<(StatusCode, Json<DailyRecommendation>), ApiError> {
    payload.title = payload.title.trim().to_string();
    if payload.title.is_empty() {
        return Err(AppError::validation("title is required").into());
    }

    let stored = state
        .recommendation_repo
        .insert(payload)
        .await
        .map_err(AppError::from)?;

    info!(title = %stored.title, date = ?stored.date, "daily recommendation stored");
    Ok((StatusCode::CREATED, Json(stored)))
}
