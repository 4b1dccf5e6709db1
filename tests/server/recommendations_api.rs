use chrono::Utc;
use reqwest::Client;
use serde_json::{Value, json};

use crate::helpers::{create_entity, spawn_app};
use readstats::domain::recommendations::{
    DailyRecommendation, NO_RECOMMENDATION_TITLE, RecommendationStatus,
};

#[tokio::test]
async fn todays_recommendation_falls_back_to_placeholder() {
    let app = spawn_app().await;

    let recommendation: DailyRecommendation = Client::new()
        .get(app.api_url("/daily-recommendation"))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");

    assert_eq!(recommendation.title, NO_RECOMMENDATION_TITLE);
    assert_eq!(recommendation.status, RecommendationStatus::Unavailable);
    assert_eq!(recommendation.goodreads_rating, 0.0);
}

#[tokio::test]
async fn stored_recommendation_for_today_is_returned() {
    let app = spawn_app().await;
    let today = Utc::now().date_naive().to_string();

    let created: DailyRecommendation = create_entity(
        &app,
        "/daily-recommendations",
        &json!({
            "title": "Piranesi",
            "author": "Susanna Clarke",
            "source": "Goodreads",
            "goodreads_rating": 4.24,
            "recommendation_score": 8.5,
            "reasoning": "You loved The Hobbit",
            "date": today,
        }),
    )
    .await;
    assert!(created.id.is_some());
    assert_eq!(created.status, RecommendationStatus::Pending);

    let today_rec: DailyRecommendation = Client::new()
        .get(app.api_url("/daily-recommendation"))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");
    assert_eq!(today_rec.title, "Piranesi");
    assert_eq!(today_rec.goodreads_rating, 4.24);
}

#[tokio::test]
async fn latest_returns_404_when_none_stored() {
    let app = spawn_app().await;

    let response = Client::new()
        .get(app.api_url("/daily-recommendations/latest"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn latest_picks_most_recent_date() {
    let app = spawn_app().await;
    for (title, date) in [("Older", "2025-01-02"), ("Newest", "2025-03-01"), ("Middle", "2025-02-01")] {
        let _: DailyRecommendation = create_entity(
            &app,
            "/daily-recommendations",
            &json!({"title": title, "date": date}),
        )
        .await;
    }

    let latest: DailyRecommendation = Client::new()
        .get(app.api_url("/daily-recommendations/latest"))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");

    assert_eq!(latest.title, "Newest");
}

#[tokio::test]
async fn create_recommendation_requires_title() {
    let app = spawn_app().await;

    let response = Client::new()
        .post(app.api_url("/daily-recommendations"))
        .json(&json!({"title": "  ", "date": "2025-01-01"}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn duplicate_recommendation_for_same_day_conflicts() {
    let app = spawn_app().await;
    let payload = json!({"title": "Middlemarch", "date": "2025-04-01"});

    let _: DailyRecommendation = create_entity(&app, "/daily-recommendations", &payload).await;

    let response = Client::new()
        .post(app.api_url("/daily-recommendations"))
        .json(&payload)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 409);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "conflict");
}
