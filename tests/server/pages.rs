use reqwest::Client;

use crate::helpers::{assert_full_page, book, create_book, seed_library, spawn_app};

#[tokio::test]
async fn dashboard_shows_no_data_message_when_empty() {
    let app = spawn_app().await;

    let response = Client::new()
        .get(app.page_url("/"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);
    let body = response.text().await.expect("Failed to read body");
    assert_full_page(&body);
    assert!(body.contains("No data available."));
    assert!(body.contains("No recommendation available"));
}

#[tokio::test]
async fn dashboard_renders_library_sections() {
    let app = spawn_app().await;
    seed_library(&app).await;

    let body = Client::new()
        .get(app.page_url("/"))
        .send()
        .await
        .expect("Failed to execute request")
        .text()
        .await
        .expect("Failed to read body");

    assert_full_page(&body);
    assert!(!body.contains("No data available."));
    assert!(body.contains("Executive Summary"));
    assert!(body.contains("Books Finished by Year"));
    assert!(body.contains("Genre Distribution Over Time"));
    assert!(body.contains("My Best"));
    assert!(body.contains("The Hobbit"));
    assert!(body.contains("+100%"));
}

#[tokio::test]
async fn goodreads_panel_lists_books_by_goodreads_rating() {
    let app = spawn_app().await;
    create_book(&app, book("Crowd Pleaser", "A. Writer", 2024, 2.0, 4.9)).await;
    create_book(&app, book("Personal Favourite", "B. Writer", 2024, 5.0, 3.1)).await;

    let body = Client::new()
        .get(app.page_url("/"))
        .send()
        .await
        .expect("Failed to execute request")
        .text()
        .await
        .expect("Failed to read body");

    let start = body
        .find("Highest Rated on Goodreads")
        .expect("Goodreads panel rendered");
    let end = body.find("Rating Comparisons").expect("comparison panel rendered");
    let panel = &body[start..end];
    let crowd = panel.find("Crowd Pleaser").expect("Crowd Pleaser listed");
    let favourite = panel
        .find("Personal Favourite")
        .expect("Personal Favourite listed");
    assert!(crowd < favourite);
}

#[tokio::test]
async fn responses_carry_security_headers() {
    let app = spawn_app().await;

    let response = Client::new()
        .get(app.page_url("/"))
        .send()
        .await
        .expect("Failed to execute request");

    let headers = response.headers();
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-frame-options"], "DENY");
    assert!(headers.contains_key("content-security-policy"));
}

#[tokio::test]
async fn stylesheet_is_served() {
    let app = spawn_app().await;

    let response = Client::new()
        .get(app.page_url("/static/css/styles.css"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);
    assert_eq!(response.headers()["content-type"], "text/css; charset=utf-8");
}
