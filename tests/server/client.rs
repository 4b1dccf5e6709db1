use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::helpers::{book, create_book, seed_library, spawn_app};
use readstats::domain::stats;
use readstats::infrastructure::client::ReadstatsClient;

#[tokio::test]
async fn client_fetches_records_from_running_server() {
    let app = spawn_app().await;
    seed_library(&app).await;

    let client = ReadstatsClient::from_base_url(&app.address).expect("valid url");
    let records = client.book_ratings().fetch().await.expect("fetch records");

    assert_eq!(records.len(), 3);
    let computed = stats::compute(&records);
    assert_eq!(computed.total_books, 3);
    assert_eq!(computed.current_year, 2024);
}

#[tokio::test]
async fn client_book_crud_round_trip() {
    let app = spawn_app().await;
    let client = ReadstatsClient::from_base_url(&app.address).expect("valid url");

    let created = client
        .books()
        .create(&book("Dune", "Frank Herbert", 2024, 4.5, 4.25))
        .await
        .expect("create book");
    let fetched = client.books().get(created.id).await.expect("get book");
    assert_eq!(fetched.record.title, "Dune");

    client.books().delete(created.id).await.expect("delete book");
    let err = client.books().get(created.id).await.unwrap_err();
    assert!(err.to_string().contains("404"));
}

#[tokio::test]
async fn client_surfaces_validation_message() {
    let app = spawn_app().await;
    create_book(&app, book("Existing", "Someone", 2024, 4.0, 4.0)).await;
    let client = ReadstatsClient::from_base_url(&app.address).expect("valid url");

    let err = client
        .books()
        .create(&book("  ", "Nobody", 2024, 4.0, 4.0))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("title is required"));
}

#[tokio::test]
async fn server_error_degrades_to_empty_records() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/book-ratings"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let client = ReadstatsClient::from_base_url(&mock_server.uri()).expect("valid url");

    assert!(client.book_ratings().fetch().await.is_err());
    let records = client.book_ratings().fetch_or_empty().await;
    assert!(records.is_empty());
    assert!(stats::compute(&records).is_empty());
}

#[tokio::test]
async fn non_array_payload_is_treated_as_empty() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/book-ratings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": "nope"})))
        .mount(&mock_server)
        .await;

    let client = ReadstatsClient::from_base_url(&mock_server.uri()).expect("valid url");
    let records = client.book_ratings().fetch().await.expect("fetch succeeds");

    assert!(records.is_empty());
}

#[tokio::test]
async fn unreachable_server_degrades_to_empty_records() {
    // Nothing listens on port 9 (discard) in the test environment.
    let client = ReadstatsClient::from_base_url("http://127.0.0.1:9").expect("valid url");

    let records = client.book_ratings().fetch_or_empty().await;

    assert!(records.is_empty());
}

#[tokio::test]
async fn mixed_payload_keeps_only_object_rows() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/book-ratings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"Title": "Emma", "Author": "Jane Austen", "Rating": 4, "Year read": 2024},
            null,
            42,
            {"Title": "Dune", "Author": "Frank Herbert", "Rating": "4.5", "Year read": "2023"}
        ])))
        .mount(&mock_server)
        .await;

    let client = ReadstatsClient::from_base_url(&mock_server.uri()).expect("valid url");
    let records = client.book_ratings().fetch_or_empty().await;

    assert_eq!(records.len(), 2);
    assert_eq!(records[1].rating, Some(4.5));
    assert_eq!(records[1].year_read, Some(2023));
}

#[tokio::test]
async fn client_reads_server_computed_stats() {
    let app = spawn_app().await;
    seed_library(&app).await;
    let client = ReadstatsClient::from_base_url(&app.address).expect("valid url");

    let remote = client.stats().get().await.expect("fetch stats");
    let records = client.book_ratings().fetch().await.expect("fetch records");

    assert_eq!(remote.total_books, 3);
    assert_eq!(remote.yoy_growth, Some(100));
    assert_eq!(remote.source_performance, stats::compute(&records).source_performance);
}

#[tokio::test]
async fn client_import_replaces_library() {
    let app = spawn_app().await;
    seed_library(&app).await;
    let client = ReadstatsClient::from_base_url(&app.address).expect("valid url");

    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    std::io::Write::write_all(
        &mut file,
        br#"[{"Title":"Beloved","Author":"Toni Morrison","type":"Fiction","Year read":2025}]"#,
    )
    .expect("write export");

    let rows = readstats::presentation::cli::import::read_rows(file.path()).expect("read rows");
    let summary = client.books().import(&rows).await.expect("import");
    assert_eq!(summary.imported, 1);

    let books = client.books().list(None).await.expect("list books");
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].record.title, "Beloved");
    assert_eq!(books[0].record.book_type.as_deref(), Some("Fiction"));
}
