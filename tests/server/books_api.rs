use reqwest::Client;
use serde_json::{Value, json};

use crate::helpers::{book, create_book, spawn_app};
use readstats::domain::records::StoredBookRecord;

#[tokio::test]
async fn create_book_returns_201_and_stored_record() {
    let app = spawn_app().await;

    let response = Client::new()
        .post(app.api_url("/books"))
        .json(&book("Dune", "Frank Herbert", 2024, 4.5, 4.25))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 201);
    let stored: StoredBookRecord = response.json().await.expect("Failed to parse JSON");
    assert_eq!(stored.record.title, "Dune");
    assert_eq!(stored.record.year_read, Some(2024));
    assert_eq!(stored.record.book_type.as_deref(), Some("Fiction"));
}

#[tokio::test]
async fn create_book_rejects_blank_title() {
    let app = spawn_app().await;

    let response = Client::new()
        .post(app.api_url("/books"))
        .json(&json!({"title": "   ", "author": "Nobody"}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["message"], "title is required");
}

#[tokio::test]
async fn list_books_orders_by_year_then_title_and_filters() {
    let app = spawn_app().await;
    create_book(&app, book("Middlemarch", "George Eliot", 2023, 4.0, 4.0)).await;
    create_book(&app, book("Dune", "Frank Herbert", 2024, 4.5, 4.25)).await;
    create_book(&app, book("Beloved", "Toni Morrison", 2024, 4.0, 3.9)).await;

    let client = Client::new();
    let books: Vec<StoredBookRecord> = client
        .get(app.api_url("/books"))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");
    let titles: Vec<_> = books.iter().map(|b| b.record.title.as_str()).collect();
    assert_eq!(titles, ["Beloved", "Dune", "Middlemarch"]);

    let books: Vec<StoredBookRecord> = client
        .get(app.api_url("/books?year=2023"))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].record.title, "Middlemarch");
}

#[tokio::test]
async fn get_and_delete_book() {
    let app = spawn_app().await;
    let stored = create_book(&app, book("Dune", "Frank Herbert", 2024, 4.5, 4.25)).await;
    let client = Client::new();

    let response = client
        .get(app.api_url(&format!("/books/{}", stored.id)))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), 200);

    let response = client
        .delete(app.api_url(&format!("/books/{}", stored.id)))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), 204);

    let response = client
        .delete(app.api_url(&format!("/books/{}", stored.id)))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn import_replaces_library_from_display_keyed_rows() {
    let app = spawn_app().await;
    create_book(&app, book("Old Entry", "Someone", 2020, 3.0, 3.0)).await;

    let payload = json!([
        {
            "Title": "Piranesi",
            "Author": "Susanna Clarke",
            "type": "Fiction",
            "Genre": "Fantasy",
            "Year read": "2023",
            "Rating": "4.5",
            "Goodreads Rating": 4.24,
            "source": "Library",
            "num_ratings": "312,441",
            "num_editions": "96 editions"
        },
        "not a row",
        {"Title": "Educated", "Author": "Tara Westover", "Type": "Non-Fiction"}
    ]);

    let response = Client::new()
        .post(app.api_url("/import"))
        .json(&payload)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["imported"], 2);

    let records = app.book_repo.list_records().await.expect("list records");
    assert_eq!(records.len(), 2);
    let piranesi = records
        .iter()
        .find(|r| r.title == "Piranesi")
        .expect("Piranesi imported");
    assert_eq!(piranesi.book_type.as_deref(), Some("Fiction"));
    assert_eq!(piranesi.genre.as_deref(), Some("Fantasy"));
    assert_eq!(piranesi.year_read, Some(2023));
    assert_eq!(piranesi.rating, Some(4.5));
    assert_eq!(piranesi.source.as_deref(), Some("Library"));
    assert_eq!(piranesi.num_ratings, Some(312_441));
    assert_eq!(piranesi.num_editions, Some(96));
    assert!(records.iter().all(|r| r.title != "Old Entry"));
}

#[tokio::test]
async fn import_rejects_non_array_payload() {
    let app = spawn_app().await;
    create_book(&app, book("Kept", "Someone", 2020, 3.0, 3.0)).await;

    let response = Client::new()
        .post(app.api_url("/import"))
        .json(&json!({"Title": "Dune"}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 400);
    assert_eq!(app.book_repo.count().await.expect("count"), 1);
}

#[tokio::test]
async fn book_ratings_uses_display_keys_and_derived_columns() {
    let app = spawn_app().await;
    create_book(&app, book("Emma", "Jane Austen", 2023, 3.5, 4.0)).await;
    create_book(&app, book("Dune", "Frank Herbert", 2024, 4.5, 4.0)).await;

    let rows: Vec<Value> = Client::new()
        .get(app.api_url("/book-ratings"))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["Title"], "Dune");
    assert_eq!(rows[0]["Year read"], 2024);
    assert_eq!(rows[0]["Type"], "Fiction");
    assert_eq!(rows[0]["Ratings gap"], 0.5);
    assert_eq!(rows[0]["Ratings trend"], "Over");
    assert_eq!(rows[1]["Ratings trend"], "Under");
    assert!(rows[0].get("type").is_none());
}

#[tokio::test]
async fn health_reports_record_count() {
    let app = spawn_app().await;
    create_book(&app, book("Dune", "Frank Herbert", 2024, 4.5, 4.0)).await;

    let body: Value = Client::new()
        .get(app.api_url("/health"))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");

    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 1);
}
