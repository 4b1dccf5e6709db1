use std::sync::Arc;

use readstats::application::routes::app_router;
use readstats::application::state::AppState;
use readstats::domain::records::{BookRecord, StoredBookRecord};
use readstats::domain::repositories::{BookRecordRepository, RecommendationRepository};
use readstats::infrastructure::database::Database;
use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};
use tokio::net::TcpListener;
use tokio::task::AbortHandle;

pub struct TestApp {
    pub address: String,
    pub book_repo: Arc<dyn BookRecordRepository>,
    #[allow(dead_code)]
    pub recommendation_repo: Arc<dyn RecommendationRepository>,
    server_handle: AbortHandle,
}

impl TestApp {
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.address, path)
    }

    pub fn page_url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self.server_handle.abort();
    }
}

pub async fn spawn_app() -> TestApp {
    let database = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory database");

    let state = AppState::from_database(&database);
    let book_repo = state.book_repo.clone();
    let recommendation_repo = state.recommendation_repo.clone();

    let app = app_router(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");

    let local_addr = listener.local_addr().expect("Failed to get local address");
    let address = format!("http://{}", local_addr);

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Server failed to start");
    })
    .abort_handle();

    TestApp {
        address,
        book_repo,
        recommendation_repo,
        server_handle,
    }
}

/// POST a JSON payload and deserialize the response.
pub async fn create_entity<P: Serialize, R: DeserializeOwned>(
    app: &TestApp,
    path: &str,
    payload: &P,
) -> R {
    let response = Client::new()
        .post(app.api_url(path))
        .json(payload)
        .send()
        .await
        .unwrap_or_else(|e| panic!("failed to create entity at {path}: {e}"));

    response
        .json()
        .await
        .unwrap_or_else(|e| panic!("failed to deserialize entity from {path}: {e}"))
}

pub fn book(title: &str, author: &str, year: i32, rating: f64, goodreads: f64) -> BookRecord {
    BookRecord {
        book_type: Some("Fiction".to_string()),
        year_read: Some(year),
        rating: Some(rating),
        goodreads_rating: Some(goodreads),
        ..BookRecord::new(title, author)
    }
}

pub async fn create_book(app: &TestApp, record: BookRecord) -> StoredBookRecord {
    create_entity(app, "/books", &record).await
}

/// Store the same small library used across the stats tests.
pub async fn seed_library(app: &TestApp) {
    let records = vec![
        BookRecord {
            genre: Some("Fantasy".to_string()),
            source: Some("Library".to_string()),
            ..book("The Hobbit", "J.R.R. Tolkien", 2024, 5.0, 4.3)
        },
        BookRecord {
            genre: Some("Romance".to_string()),
            source: Some("Kindle".to_string()),
            ..book("Emma", "Jane Austen", 2024, 4.0, 4.0)
        },
        BookRecord {
            genre: Some("Fantasy".to_string()),
            source: Some("Library".to_string()),
            ..book("The Silmarillion", "J.R.R. Tolkien", 2023, 3.0, 3.9)
        },
    ];
    app.book_repo
        .replace_all(records)
        .await
        .expect("Failed to seed library");
}

pub fn assert_full_page(body: &str) {
    assert!(body.contains("<!DOCTYPE html>"), "Should be a full HTML page");
    assert!(body.contains("</html>"), "Page should be complete");
}
