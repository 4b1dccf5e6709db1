use axum::Json;
use axum::extract::State;

use crate::application::errors::{ApiError, AppError};
use crate::application::state::AppState;
use crate::domain::wire::RawBookRecord;

/// Every record in the display-keyed export format, newest year first.
#[tracing::instrument(skip(state))]
pub(crate) async fn list_book_ratings(
    State(state): State<AppState>,
) -> Result<Json<Vec<RawBookRecord>>, ApiError> {
    let books = state.book_repo.list().await.map_err(AppError::from)?;
    let rows = books
        .iter()
        .map(|stored| RawBookRecord::from_record(&stored.record))
        .collect();
    Ok(Json(rows))
}
