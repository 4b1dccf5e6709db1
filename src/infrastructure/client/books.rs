use anyhow::Result;
use serde::Deserialize;

use super::ReadstatsClient;
use super::define_client_crud;
use crate::domain::ids::BookRecordId;
use crate::domain::records::{BookRecord, StoredBookRecord};
use crate::domain::wire::RawBookRecord;

/// Response body of `POST /api/v1/import`.
#[derive(Debug, Deserialize)]
pub struct ImportSummary {
    pub imported: u64,
}

pub struct BooksClient<'a> {
    client: &'a ReadstatsClient,
}

impl<'a> BooksClient<'a> {
    pub fn new(client: &'a ReadstatsClient) -> Self {
        Self { client }
    }

    define_client_crud!(
        entity_path: "api/v1/books",
        id_type: BookRecordId,
        entity_type: StoredBookRecord,
        new_type: BookRecord
    );

    pub async fn list(&self, year: Option<i32>) -> Result<Vec<StoredBookRecord>> {
        let mut url = self.client.endpoint("api/v1/books")?;
        if let Some(year) = year {
            url.query_pairs_mut()
                .append_pair("year", &year.to_string());
        }
        let response = self
            .client
            .request(reqwest::Method::GET, url)
            .send()
            .await?;
        self.client.handle_response(response).await
    }

    /// Replace every stored record with `records`.
    pub async fn import(&self, records: &[RawBookRecord]) -> Result<ImportSummary> {
        let url = self.client.endpoint("api/v1/import")?;
        let response = self
            .client
            .request(reqwest::Method::POST, url)
            .json(records)
            .send()
            .await?;
        self.client.handle_response(response).await
    }
}
