use crate::domain::formatting::{
    format_book_count, format_growth, format_percent, format_rating, format_rating_diff,
    format_rating_precise,
};
use crate::domain::genres::GenreCategory;
use crate::domain::rankings::{
    BEST_RATING_THRESHOLD, sorted_by_goodreads_rating, sorted_by_rating, top_rated,
};
use crate::domain::recommendations::DailyRecommendation;
use crate::domain::records::{BookRecord, UNCATEGORIZED};
use crate::domain::stats::{ReadingStats, YearGenreShare};

use super::{BookRowView, RecommendationView, bar_width};

/// Rows in the "Highest Rated on Goodreads" panel.
const GOODREADS_TOP_LEN: usize = 10;

pub struct StatCard {
    pub label: &'static str,
    pub value: String,
    pub detail: String,
}

/// A labelled horizontal bar.
pub struct BarView {
    pub label: String,
    pub value: String,
    pub width: String,
}

pub struct GenreSegmentView {
    pub label: &'static str,
    /// CSS modifier, e.g. "non-fiction".
    pub class: String,
    pub share: String,
    pub width: String,
}

pub struct GenreRowView {
    pub year: i32,
    pub segments: Vec<GenreSegmentView>,
}

pub struct TrendRowView {
    pub year: i32,
    pub rating: String,
    pub goodreads_rating: String,
    pub count: String,
}

pub struct SourceRowView {
    pub source: String,
    pub avg_rating: String,
    pub avg_goodreads_rating: String,
    pub book_count: String,
    pub success_rate: String,
    pub width: String,
}

/// Everything the dashboard template shows, already formatted.
pub struct DashboardView {
    pub has_data: bool,
    pub cards: Vec<StatCard>,
    pub summary: Vec<String>,
    pub yearly: Vec<BarView>,
    pub types: Vec<BarView>,
    pub genres: Vec<GenreRowView>,
    pub trends: Vec<TrendRowView>,
    pub sources: Vec<SourceRowView>,
    pub best: Vec<BookRowView>,
    /// Books with a Goodreads rating, highest first.
    pub goodreads_top: Vec<BookRowView>,
    pub comparisons: Vec<BookRowView>,
    pub recommendation: RecommendationView,
    pub undated_note: String,
}

impl DashboardView {
    pub fn new(
        stats: &ReadingStats,
        records: &[BookRecord],
        recommendation: &DailyRecommendation,
    ) -> Self {
        Self {
            has_data: !stats.is_empty(),
            cards: build_cards(stats),
            summary: build_summary(stats),
            yearly: build_yearly(stats),
            types: stats
                .type_distribution
                .iter()
                .map(|share| BarView {
                    label: share.name.clone(),
                    value: format_percent(share.value),
                    width: bar_width(share.value, 100.0),
                })
                .collect(),
            genres: stats.genre_distribution.iter().map(genre_row).collect(),
            trends: stats
                .rating_trends
                .iter()
                .map(|point| TrendRowView {
                    year: point.year,
                    rating: format_rating_precise(point.average_rating),
                    goodreads_rating: format_rating_precise(point.average_goodreads_rating),
                    count: format_book_count(point.count),
                })
                .collect(),
            sources: stats
                .source_performance
                .iter()
                .map(|source| SourceRowView {
                    source: source.source.clone(),
                    avg_rating: format_rating(source.avg_rating),
                    avg_goodreads_rating: format_rating(source.avg_goodreads_rating),
                    book_count: format_book_count(source.book_count),
                    success_rate: format_percent(source.success_rate),
                    width: bar_width(source.avg_rating, 5.0),
                })
                .collect(),
            best: top_rated(records, BEST_RATING_THRESHOLD)
                .into_iter()
                .map(BookRowView::from_record)
                .collect(),
            goodreads_top: sorted_by_goodreads_rating(records)
                .into_iter()
                .filter(|record| record.goodreads_rating.is_some())
                .take(GOODREADS_TOP_LEN)
                .map(BookRowView::from_record)
                .collect(),
            comparisons: sorted_by_rating(records)
                .into_iter()
                .map(BookRowView::from_record)
                .collect(),
            recommendation: RecommendationView::from_domain(recommendation),
            undated_note: match stats.undated_books {
                0 => String::new(),
                n => format!("{} without a year read are not shown by year.", format_book_count(n)),
            },
        }
    }
}

fn build_cards(stats: &ReadingStats) -> Vec<StatCard> {
    vec![
        StatCard {
            label: "Total Books Finished",
            value: stats.total_books.to_string(),
            detail: String::new(),
        },
        StatCard {
            label: "Books This Year",
            value: stats.current_year_books.to_string(),
            detail: format!("{} vs {}", format_growth(stats.yoy_growth), stats.last_year),
        },
        StatCard {
            label: "Average Ratings",
            value: format!(
                "{} / {}",
                format_rating(stats.avg_rating),
                format_rating(stats.avg_goodreads_rating)
            ),
            detail: if stats.is_more_critical {
                "more critical than Goodreads".to_string()
            } else {
                "more generous than Goodreads".to_string()
            },
        },
        StatCard {
            label: "Rating Difference",
            value: format_rating_diff(stats.rating_diff),
            detail: "own minus Goodreads".to_string(),
        },
        StatCard {
            label: "Fiction",
            value: format_percent(stats.fiction_proportion),
            detail: stats
                .leading_genre
                .as_deref()
                .map_or_else(String::new, |genre| format!("mostly {genre}")),
        },
    ]
}

fn build_summary(stats: &ReadingStats) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Finished reading {} to date in {}. Change from {}: {}.",
            format_book_count(stats.current_year_books),
            stats.current_year,
            stats.last_year,
            format_growth(stats.yoy_growth)
        ),
        format!(
            "Average rating for books was {}, compared to {} average rating for the same set on Goodreads.",
            format_rating(stats.avg_rating),
            format_rating(stats.avg_goodreads_rating)
        ),
    ];

    let fiction = format_percent(stats.fiction_proportion);
    lines.push(match &stats.leading_genre {
        Some(genre) => format!(
            "{fiction} of total books finished were fiction, and {genre} is the genre most read among finished books."
        ),
        None => format!("{fiction} of total books finished were fiction."),
    });

    if let Some(author) = &stats.leading_author {
        lines.push(format!("{author} is the author most read, overall."));
    }

    lines
}

fn build_yearly(stats: &ReadingStats) -> Vec<BarView> {
    let max = stats
        .yearly_totals
        .iter()
        .map(|year| year.total)
        .max()
        .unwrap_or(0);

    stats
        .yearly_totals
        .iter()
        .map(|year| BarView {
            label: year.year.to_string(),
            value: year.total.to_string(),
            width: bar_width(year.total as f64, max as f64),
        })
        .collect()
}

fn genre_row(share: &YearGenreShare) -> GenreRowView {
    let mut segments: Vec<GenreSegmentView> = GenreCategory::ALL
        .into_iter()
        .map(|category| {
            let value = share.share(category);
            GenreSegmentView {
                label: category.display_label(),
                class: category.display_label().to_lowercase(),
                share: format_percent(value),
                width: bar_width(value, 100.0),
            }
        })
        .collect();
    segments.push(GenreSegmentView {
        label: UNCATEGORIZED,
        class: UNCATEGORIZED.to_lowercase(),
        share: format_percent(share.uncategorized),
        width: bar_width(share.uncategorized, 100.0),
    });
    segments.retain(|segment| segment.width != "0%" && segment.width != "0.0%");

    GenreRowView {
        year: share.year,
        segments,
    }
}
