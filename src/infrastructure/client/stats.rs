use anyhow::Result;

use super::ReadstatsClient;
use crate::domain::stats::ReadingStats;

pub struct StatsClient<'a> {
    client: &'a ReadstatsClient,
}

impl<'a> StatsClient<'a> {
    pub fn new(client: &'a ReadstatsClient) -> Self {
        Self { client }
    }

    /// Statistics as computed by the server.
    pub async fn get(&self) -> Result<ReadingStats> {
        self.client.get_json("api/v1/stats").await
    }
}
