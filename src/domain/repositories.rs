use async_trait::async_trait;
use chrono::NaiveDate;

use super::RepositoryError;
use crate::domain::ids::BookRecordId;
use crate::domain::recommendations::{DailyRecommendation, NewRecommendation};
use crate::domain::records::{BookRecord, StoredBookRecord};

#[async_trait]
pub trait BookRecordRepository: Send + Sync {
    async fn insert(&self, record: BookRecord) -> Result<StoredBookRecord, RepositoryError>;
    async fn get(&self, id: BookRecordId) -> Result<StoredBookRecord, RepositoryError>;
    /// All records, most recent year first, then by title.
    async fn list(&self) -> Result<Vec<StoredBookRecord>, RepositoryError>;
    async fn delete(&self, id: BookRecordId) -> Result<(), RepositoryError>;
    async fn count(&self) -> Result<u64, RepositoryError>;
    /// Atomically swap the whole table for `records`. Returns the number stored.
    async fn replace_all(&self, records: Vec<BookRecord>) -> Result<u64, RepositoryError>;

    async fn list_records(&self) -> Result<Vec<BookRecord>, RepositoryError> {
        let stored = self.list().await?;
        Ok(stored.into_iter().map(|s| s.record).collect())
    }
}

#[async_trait]
pub trait RecommendationRepository: Send + Sync {
    async fn insert(
        &self,
        recommendation: NewRecommendation,
    ) -> Result<DailyRecommendation, RepositoryError>;
    /// Newest recommendation created for `date`.
    async fn for_date(&self, date: NaiveDate) -> Result<DailyRecommendation, RepositoryError>;
    /// Recommendation with the most recent date, whatever day that is.
    async fn latest(&self) -> Result<DailyRecommendation, RepositoryError>;
}
