use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::query_as;

use crate::domain::RepositoryError;
use crate::domain::ids::RecommendationId;
use crate::domain::recommendations::{
    DailyRecommendation, NewRecommendation, RecommendationStatus,
};
use crate::domain::repositories::RecommendationRepository;
use crate::infrastructure::database::DatabasePool;
use crate::infrastructure::repositories::db_err;

const COLUMNS: &str = "id, title, author, source, goodreads_rating, recommendation_score, reasoning, date, status, cover_url, created_at";

#[derive(Clone)]
pub struct SqlRecommendationRepository {
    pool: DatabasePool,
}

impl SqlRecommendationRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    fn to_domain(row: RecommendationRow) -> Result<DailyRecommendation, RepositoryError> {
        let status = RecommendationStatus::from_str(&row.status).map_err(|()| {
            RepositoryError::unexpected(format!("invalid recommendation status: {}", row.status))
        })?;

        Ok(DailyRecommendation {
            id: Some(RecommendationId::new(row.id)),
            title: row.title,
            author: row.author,
            source: row.source,
            goodreads_rating: row.goodreads_rating.unwrap_or_default(),
            recommendation_score: row.recommendation_score.unwrap_or_default(),
            reasoning: row.reasoning,
            date: Some(row.date),
            status,
            cover_url: row.cover_url,
            created_at: Some(row.created_at),
        })
    }

    async fn fetch_first(
        &self,
        query: &str,
        date: Option<NaiveDate>,
    ) -> Result<DailyRecommendation, RepositoryError> {
        let mut conn = self.pool.acquire().await.map_err(db_err)?;

        let mut statement = query_as::<_, RecommendationRow>(query);
        if let Some(date) = date {
            statement = statement.bind(date);
        }

        let row = statement
            .fetch_optional(&mut *conn)
            .await
            .map_err(db_err)?
            .ok_or(RepositoryError::NotFound)?;

        Self::to_domain(row)
    }
}

#[async_trait]
impl RecommendationRepository for SqlRecommendationRepository {
    async fn insert(
        &self,
        recommendation: NewRecommendation,
    ) -> Result<DailyRecommendation, RepositoryError> {
        let query = format!(
            "INSERT INTO daily_recommendations
                (title, author, source, goodreads_rating, recommendation_score, reasoning, date, status, cover_url, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        let mut conn = self.pool.acquire().await.map_err(db_err)?;

        let row = query_as::<_, RecommendationRow>(&query)
            .bind(recommendation.title)
            .bind(recommendation.author)
            .bind(recommendation.source)
            .bind(recommendation.goodreads_rating)
            .bind(recommendation.recommendation_score)
            .bind(recommendation.reasoning)
            .bind(recommendation.date)
            .bind(recommendation.status.as_str())
            .bind(recommendation.cover_url)
            .bind(Utc::now())
            .fetch_one(&mut *conn)
            .await
            .map_err(|err| {
                if let sqlx::Error::Database(database_err) = &err
                    && database_err.is_unique_violation()
                {
                    return RepositoryError::conflict(
                        "a recommendation with this title already exists for that date",
                    );
                }
                db_err(err)
            })?;

        Self::to_domain(row)
    }

    async fn for_date(&self, date: NaiveDate) -> Result<DailyRecommendation, RepositoryError> {
        let query = format!(
            "SELECT {COLUMNS} FROM daily_recommendations
             WHERE date = ?
             ORDER BY created_at DESC, id DESC
             LIMIT 1"
        );
        self.fetch_first(&query, Some(date)).await
    }

    async fn latest(&self) -> Result<DailyRecommendation, RepositoryError> {
        let query = format!(
            "SELECT {COLUMNS} FROM daily_recommendations
             ORDER BY date DESC, created_at DESC, id DESC
             LIMIT 1"
        );
        self.fetch_first(&query, None).await
    }
}

#[derive(sqlx::FromRow)]
struct RecommendationRow {
    id: i64,
    title: String,
    author: String,
    source: String,
    goodreads_rating: Option<f64>,
    recommendation_score: Option<f64>,
    reasoning: String,
    date: NaiveDate,
    status: String,
    cover_url: Option<String>,
    created_at: DateTime<Utc>,
}
