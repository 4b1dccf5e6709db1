use std::fmt::Write as _;

use anyhow::Result;
use clap::Args;

use super::print_json;
use crate::domain::formatting::{
    EM_DASH, format_book_count, format_growth, format_percent, format_rating,
    format_rating_diff,
};
use crate::domain::stats::{self, ReadingStats};
use crate::infrastructure::client::ReadstatsClient;

#[derive(Debug, Args)]
pub struct StatsCommand {
    /// Print the full statistics as JSON
    #[arg(long)]
    pub json: bool,
}

/// Fetch the library over HTTP and summarise it locally.
///
/// An unreachable server or a malformed payload is logged and summarised as
/// an empty library rather than failing the command.
pub async fn run(client: &ReadstatsClient, command: StatsCommand) -> Result<()> {
    let records = client.book_ratings().fetch_or_empty().await;
    let computed = stats::compute(&records);

    if command.json {
        print_json(&computed)
    } else {
        print!("{}", render_summary(&computed));
        Ok(())
    }
}

pub fn render_summary(stats: &ReadingStats) -> String {
    if stats.is_empty() {
        return "No data available.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "Total books:      {}", stats.total_books);
    let _ = writeln!(
        out,
        "{}:             {} ({} vs {})",
        stats.current_year,
        format_book_count(stats.current_year_books),
        format_growth(stats.yoy_growth),
        stats.last_year
    );
    let _ = writeln!(
        out,
        "Average rating:   {} (Goodreads {}, {})",
        format_rating(stats.avg_rating),
        format_rating(stats.avg_goodreads_rating),
        format_rating_diff(stats.rating_diff)
    );
    let _ = writeln!(out, "Fiction:          {}", format_percent(stats.fiction_proportion));
    let _ = writeln!(
        out,
        "Leading genre:    {}",
        stats.leading_genre.as_deref().unwrap_or(EM_DASH)
    );
    let _ = writeln!(
        out,
        "Leading author:   {}",
        stats.leading_author.as_deref().unwrap_or(EM_DASH)
    );

    if !stats.source_performance.is_empty() {
        let _ = writeln!(out, "\nSources:");
        for source in &stats.source_performance {
            let _ = writeln!(
                out,
                "  {:<20} {} avg, {}, {} success",
                source.source,
                format_rating(source.avg_rating),
                format_book_count(source.book_count),
                format_percent(source.success_rate)
            );
        }
    }

    out
}
