use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Args, Subcommand};

use super::print_json;
use crate::domain::recommendations::{NewRecommendation, RecommendationStatus};
use crate::infrastructure::client::ReadstatsClient;

#[derive(Debug, Subcommand)]
pub enum RecommendationCommands {
    /// Show today's recommendation
    Show,
    /// Show the most recent recommendation
    Latest,
    /// Store a recommendation
    Set(SetRecommendationCommand),
}

pub async fn run(client: &ReadstatsClient, cmd: RecommendationCommands) -> Result<()> {
    match cmd {
        RecommendationCommands::Show => print_json(&client.recommendations().today().await?),
        RecommendationCommands::Latest => print_json(&client.recommendations().latest().await?),
        RecommendationCommands::Set(c) => set_recommendation(client, c).await,
    }
}

#[derive(Debug, Args)]
pub struct SetRecommendationCommand {
    #[arg(long)]
    pub title: String,
    #[arg(long, default_value = "")]
    pub author: String,
    #[arg(long, default_value = "")]
    pub source: String,
    #[arg(long)]
    pub goodreads_rating: Option<f64>,
    #[arg(long)]
    pub score: Option<f64>,
    #[arg(long, default_value = "")]
    pub reasoning: String,
    /// Day the recommendation is for (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<String>,
    /// pending, accepted or dismissed
    #[arg(long, default_value = "pending")]
    pub status: String,
    #[arg(long)]
    pub cover_url: Option<String>,
}

impl SetRecommendationCommand {
    fn into_payload(self) -> Result<NewRecommendation> {
        let date = match self.date {
            Some(text) => NaiveDate::parse_from_str(&text, "%Y-%m-%d")
                .with_context(|| format!("invalid date {text:?}, expected YYYY-MM-DD"))?,
            None => Utc::now().date_naive(),
        };
        let status = self
            .status
            .parse::<RecommendationStatus>()
            .map_err(|()| anyhow::anyhow!("unknown status {:?}", self.status))?;

        Ok(NewRecommendation {
            title: self.title,
            author: self.author,
            source: self.source,
            goodreads_rating: self.goodreads_rating,
            recommendation_score: self.score,
            reasoning: self.reasoning,
            date,
            status,
            cover_url: self.cover_url,
        })
    }
}

pub async fn set_recommendation(
    client: &ReadstatsClient,
    command: SetRecommendationCommand,
) -> Result<()> {
    let payload = command.into_payload()?;
    let stored = client.recommendations().create(&payload).await?;
    print_json(&stored)
}
