use anyhow::{Context, Result, anyhow};
use tracing::{debug, error};

use super::ReadstatsClient;
use crate::domain::records::BookRecord;
use crate::domain::wire::parse_records;

pub struct BookRatingsClient<'a> {
    client: &'a ReadstatsClient,
}

impl<'a> BookRatingsClient<'a> {
    pub fn new(client: &'a ReadstatsClient) -> Self {
        Self { client }
    }

    /// Fetch the display-keyed book list and map it to canonical records.
    ///
    /// Transport and HTTP errors are returned; a body that is JSON but not an
    /// array yields an empty list.
    pub async fn fetch(&self) -> Result<Vec<BookRecord>> {
        let url = self.client.endpoint("api/v1/book-ratings")?;
        let response = self
            .client
            .request(reqwest::Method::GET, url)
            .send()
            .await
            .context("failed to reach book ratings endpoint")?;

        if !response.status().is_success() {
            return Err(self.client.response_error(response).await);
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|err| anyhow!("book ratings response is not JSON: {err}"))?;
        let records = parse_records(payload);
        debug!(count = records.len(), "fetched book ratings");
        Ok(records)
    }

    /// Like [`fetch`](Self::fetch), but logs any failure and returns no records.
    pub async fn fetch_or_empty(&self) -> Vec<BookRecord> {
        match self.fetch().await {
            Ok(records) => records,
            Err(err) => {
                error!(error = %err, "error loading book data, continuing with no records");
                Vec::new()
            }
        }
    }
}
