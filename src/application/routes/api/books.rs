use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::application::errors::{ApiError, AppError};
use crate::application::state::AppState;
use crate::domain::ids::BookRecordId;
use crate::domain::records::{BookRecord, StoredBookRecord};
use crate::domain::wire::parse_records;

const MAX_RATING: f64 = 5.0;

#[derive(Debug, Deserialize)]
pub(crate) struct BookListQuery {
    #[serde(default)]
    year: Option<i32>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ImportResponse {
    imported: u64,
}

#[tracing::instrument(skip(state))]
pub(crate) async fn list_books(
    State(state): State<AppState>,
    Query(query): Query<BookListQuery>,
) -> Result<Json<Vec<StoredBookRecord>>, ApiError> {
    let mut books = state.book_repo.list().await.map_err(AppError::from)?;
    if let Some(year) = query.year {
        books.retain(|book| book.record.year_read == Some(year));
    }
    Ok(Json(books))
}

#[tracing::instrument(skip(state))]
pub(crate) async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<BookRecordId>,
) -> Result<Json<StoredBookRecord>, ApiError> {
    let book = state.book_repo.get(id).await.map_err(AppError::from)?;
    Ok(Json(book))
}

#[tracing::instrument(skip(state, payload))]
pub(crate) async fn create_book(
    State(state): State<AppState>,
    Json(payload): Json<BookRecord>,
) -> Result<(StatusCode, Json<StoredBookRecord>), ApiError> {
    let record = validate_record(payload)?;
    let stored = state
        .book_repo
        .insert(record)
        .await
        .map_err(AppError::from)?;

    info!(book_id = %stored.id, title = %stored.record.title, "book record created");
    Ok((StatusCode::CREATED, Json(stored)))
}

#[tracing::instrument(skip(state))]
pub(crate) async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<BookRecordId>,
) -> Result<StatusCode, ApiError> {
    state.book_repo.delete(id).await.map_err(AppError::from)?;
    info!(book_id = %id, "book record deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Replace the whole library with a display-keyed export.
#[tracing::instrument(skip(state, payload))]
pub(crate) async fn import_books(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<ImportResponse>, ApiError> {
    if !payload.is_array() {
        return Err(AppError::validation("import payload must be a JSON array").into());
    }

    let records = parse_records(payload);
    let imported = state
        .book_repo
        .replace_all(records)
        .await
        .map_err(AppError::from)?;

    info!(imported, "book records imported");
    Ok(Json(ImportResponse { imported }))
}

fn validate_record(mut record: BookRecord) -> Result<BookRecord, AppError> {
    record.title = record.title.trim().to_string();
    if record.title.is_empty() {
        return Err(AppError::validation("title is required"));
    }
    record.author = record.author.trim().to_string();

    for (field, value) in [
        ("rating", record.rating),
        ("goodreads_rating", record.goodreads_rating),
    ] {
        if let Some(value) = value
            && !(0.0..=MAX_RATING).contains(&value)
        {
            return Err(AppError::validation(format!(
                "{field} must be between 0 and {MAX_RATING}"
            )));
        }
    }

    Ok(record)
}
