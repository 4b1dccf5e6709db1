use std::sync::Arc;

use crate::domain::repositories::{BookRecordRepository, RecommendationRepository};
use crate::infrastructure::database::Database;
use crate::infrastructure::repositories::book_records::SqlBookRecordRepository;
use crate::infrastructure::repositories::recommendations::SqlRecommendationRepository;

#[derive(Clone)]
pub struct AppState {
    pub book_repo: Arc<dyn BookRecordRepository>,
    pub recommendation_repo: Arc<dyn RecommendationRepository>,
}

impl AppState {
    /// Build the application state, with one repository per table, over a shared pool.
    pub fn from_database(database: &Database) -> Self {
        let pool = database.clone_pool();

        let book_repo: Arc<dyn BookRecordRepository> =
            Arc::new(SqlBookRecordRepository::new(pool.clone()));
        let recommendation_repo: Arc<dyn RecommendationRepository> =
            Arc::new(SqlRecommendationRepository::new(pool));

        Self {
            book_repo,
            recommendation_repo,
        }
    }
}
