pub(crate) mod books;
pub(crate) mod ratings;
pub(crate) mod recommendations;
pub(crate) mod stats;

use axum::routing::{get, post};

use crate::application::state::AppState;

pub(super) fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/books", get(books::list_books).post(books::create_book))
        .route(
            "/books/{id}",
            get(books::get_book).delete(books::delete_book),
        )
        .route("/import", post(books::import_books))
        .route("/book-ratings", get(ratings::list_book_ratings))
        .route("/stats", get(stats::get_stats))
        .route("/health", get(stats::health))
        .route(
            "/daily-recommendation",
            get(recommendations::todays_recommendation),
        )
        .route(
            "/daily-recommendations",
            post(recommendations::create_recommendation),
        )
        .route(
            "/daily-recommendations/latest",
            get(recommendations::latest_recommendation),
        )
}
