use reqwest::Client;

use crate::helpers::{seed_library, spawn_app};
use readstats::domain::stats::ReadingStats;

async fn fetch_stats(url: String) -> ReadingStats {
    Client::new()
        .get(url)
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON")
}

#[tokio::test]
async fn stats_for_empty_library_are_zeroed() {
    let app = spawn_app().await;

    let stats = fetch_stats(app.api_url("/stats")).await;

    assert_eq!(stats.total_books, 0);
    assert_eq!(stats.avg_rating, 0.0);
    assert_eq!(stats.yoy_growth, None);
    assert!(stats.type_distribution.is_empty());
    assert!(stats.leading_author.is_none());
    assert_eq!(stats.last_year, stats.current_year - 1);
}

#[tokio::test]
async fn stats_summarise_stored_library() {
    let app = spawn_app().await;
    seed_library(&app).await;

    let stats = fetch_stats(app.api_url("/stats")).await;

    assert_eq!(stats.total_books, 3);
    assert_eq!(stats.avg_rating, 4.0);
    assert_eq!(stats.current_year, 2024);
    assert_eq!(stats.last_year, 2023);
    assert_eq!(stats.current_year_books, 2);
    assert_eq!(stats.yoy_growth, Some(100));
    assert_eq!(stats.fiction_proportion, 100.0);
    assert_eq!(stats.leading_author.as_deref(), Some("J.R.R. Tolkien"));
    assert_eq!(stats.leading_genre.as_deref(), Some("fantasy"));
    assert!(stats.is_more_critical);

    let years: Vec<_> = stats.yearly_totals.iter().map(|y| (y.year, y.total)).collect();
    assert_eq!(years, [(2023, 1), (2024, 2)]);
}

#[tokio::test]
async fn source_ties_are_ordered_by_name() {
    let app = spawn_app().await;
    seed_library(&app).await;

    let stats = fetch_stats(app.api_url("/stats")).await;

    let sources: Vec<_> = stats
        .source_performance
        .iter()
        .map(|s| (s.source.as_str(), s.book_count, s.success_rate))
        .collect();
    assert_eq!(sources, [("Kindle", 1, 100.0), ("Library", 2, 50.0)]);
}

#[tokio::test]
async fn genre_shares_sum_to_one_hundred() {
    let app = spawn_app().await;
    seed_library(&app).await;

    let stats = fetch_stats(app.api_url("/stats")).await;

    for year in &stats.genre_distribution {
        assert!(
            (year.total() - 100.0).abs() <= 0.07,
            "{} sums to {}",
            year.year,
            year.total()
        );
    }
    let y2024 = stats
        .genre_distribution
        .iter()
        .find(|y| y.year == 2024)
        .expect("2024 present");
    assert_eq!(y2024.speculative, 50.0);
    assert_eq!(y2024.romance, 50.0);
    assert_eq!(y2024.uncategorized, 0.0);
}
