use anyhow::Result;

use super::ReadstatsClient;
use crate::domain::recommendations::{DailyRecommendation, NewRecommendation};

pub struct RecommendationsClient<'a> {
    client: &'a ReadstatsClient,
}

impl<'a> RecommendationsClient<'a> {
    pub fn new(client: &'a ReadstatsClient) -> Self {
        Self { client }
    }

    /// Today's recommendation, or the placeholder when none is stored.
    pub async fn today(&self) -> Result<DailyRecommendation> {
        self.client.get_json("api/v1/daily-recommendation").await
    }

    pub async fn latest(&self) -> Result<DailyRecommendation> {
        self.client
            .get_json("api/v1/daily-recommendations/latest")
            .await
    }

    pub async fn create(&self, payload: &NewRecommendation) -> Result<DailyRecommendation> {
        let url = self.client.endpoint("api/v1/daily-recommendations")?;
        let response = self
            .client
            .request(reqwest::Method::POST, url)
            .json(payload)
            .send()
            .await?;
        self.client.handle_response(response).await
    }
}
