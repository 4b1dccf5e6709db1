use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;
use tracing::error;

use crate::application::services::load_dashboard;
use crate::application::state::AppState;
use crate::domain::stats::ReadingStats;

#[derive(Debug, Serialize)]
pub(crate) struct HealthResponse {
    success: bool,
    count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[tracing::instrument(skip(state))]
pub(crate) async fn get_stats(State(state): State<AppState>) -> Json<ReadingStats> {
    Json(load_dashboard(&*state.book_repo).await.stats)
}

/// Database round-trip check reporting the number of stored records.
#[tracing::instrument(skip(state))]
pub(crate) async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match state.book_repo.count().await {
        Ok(count) => (
            StatusCode::OK,
            Json(HealthResponse {
                success: true,
                count,
                error: None,
            }),
        ),
        Err(err) => {
            error!(error = %err, "health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    success: false,
                    count: 0,
                    error: Some(err.to_string()),
                }),
            )
        }
    }
}
