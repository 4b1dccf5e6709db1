//! Reading statistics derived from a flat list of finished books.
//!
//! [`compute`] is a pure transform: no I/O, no shared state, and the same
//! input always produces the same [`ReadingStats`]. The only ambient input is
//! the wall-clock year used when the records carry no year at all, which
//! [`compute_with_fallback_year`] lets callers pin.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::analytics::genres::GenreCategory;
use crate::domain::records::BookRecord;

/// Share of all books held by one type bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeShare {
    pub name: String,
    /// Percentage of all records, unrounded.
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearTotal {
    pub year: i32,
    pub total: u64,
}

/// Per-year genre mix. The seven percentages sum to 100.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YearGenreShare {
    pub year: i32,
    pub literary: f64,
    pub speculative: f64,
    pub historical: f64,
    pub romance: f64,
    pub contemporary: f64,
    pub non_fiction: f64,
    pub uncategorized: f64,
}

impl YearGenreShare {
    pub fn share(&self, category: GenreCategory) -> f64 {
        match category {
            GenreCategory::Literary => self.literary,
            GenreCategory::Speculative => self.speculative,
            GenreCategory::Historical => self.historical,
            GenreCategory::Romance => self.romance,
            GenreCategory::Contemporary => self.contemporary,
            GenreCategory::NonFiction => self.non_fiction,
        }
    }

    fn set_share(&mut self, category: GenreCategory, value: f64) {
        let slot = match category {
            GenreCategory::Literary => &mut self.literary,
            GenreCategory::Speculative => &mut self.speculative,
            GenreCategory::Historical => &mut self.historical,
            GenreCategory::Romance => &mut self.romance,
            GenreCategory::Contemporary => &mut self.contemporary,
            GenreCategory::NonFiction => &mut self.non_fiction,
        };
        *slot = value;
    }

    pub fn total(&self) -> f64 {
        GenreCategory::ALL
            .into_iter()
            .map(|category| self.share(category))
            .sum::<f64>()
            + self.uncategorized
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingTrendPoint {
    pub year: i32,
    pub average_rating: f64,
    pub average_goodreads_rating: f64,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourcePerformance {
    pub source: String,
    pub avg_rating: f64,
    pub book_count: u64,
    pub avg_goodreads_rating: f64,
    /// Percentage of the group's books rated 4 or higher.
    pub success_rate: f64,
}

/// Complete statistics view-model. Derived on every request, never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadingStats {
    pub total_books: u64,
    /// Mean own rating over all records, rounded to one decimal.
    pub avg_rating: f64,
    pub current_year: i32,
    pub last_year: i32,
    pub current_year_books: u64,
    pub last_year_books: u64,
    /// Percent change in books read between the two most recent years.
    /// `None` when the earlier year has no books.
    pub yoy_growth: Option<i64>,
    pub type_distribution: Vec<TypeShare>,
    pub fiction_proportion: f64,
    pub leading_genre: Option<String>,
    pub leading_author: Option<String>,
    /// Mean Goodreads rating over all records, unrounded.
    pub avg_goodreads_rating: f64,
    pub rating_diff: f64,
    pub is_more_critical: bool,
    pub yearly_totals: Vec<YearTotal>,
    pub genre_distribution: Vec<YearGenreShare>,
    pub rating_trends: Vec<RatingTrendPoint>,
    pub source_performance: Vec<SourcePerformance>,
    /// Records without a year read; excluded from every year-keyed series.
    pub undated_books: u64,
}

impl ReadingStats {
    /// Statistics for an empty library.
    pub fn empty(current_year: i32) -> Self {
        Self {
            current_year,
            last_year: current_year - 1,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_books == 0
    }
}

/// Compute statistics, using the wall-clock year when no record has a year read.
pub fn compute(records: &[BookRecord]) -> ReadingStats {
    compute_with_fallback_year(records, Utc::now().year())
}

pub fn compute_with_fallback_year(records: &[BookRecord], fallback_year: i32) -> ReadingStats {
    if records.is_empty() {
        return ReadingStats::empty(fallback_year);
    }

    let total_books = records.len() as u64;
    let avg_rating = round_to(mean(records, BookRecord::rating_or_default), 1);
    let avg_goodreads_rating = mean(records, BookRecord::goodreads_rating_or_default);
    let rating_diff = round_to(avg_rating - avg_goodreads_rating, 1);

    let by_year = group_by_year(records);
    let undated_books = records.iter().filter(|r| r.year_read.is_none()).count() as u64;

    let mut recent = by_year.keys().rev().copied();
    let current_year = recent.next().unwrap_or(fallback_year);
    let last_year = recent.next().unwrap_or(current_year - 1);
    let current_year_books = bucket_len(&by_year, current_year);
    let last_year_books = bucket_len(&by_year, last_year);

    let type_distribution = type_distribution(records);
    let fiction_proportion = type_distribution
        .iter()
        .find(|share| share.name == "Fiction")
        .map_or(0.0, |share| share.value);

    ReadingStats {
        total_books,
        avg_rating,
        current_year,
        last_year,
        current_year_books,
        last_year_books,
        yoy_growth: yoy_growth(current_year_books, last_year_books),
        type_distribution,
        fiction_proportion,
        leading_genre: most_frequent(records.iter().filter_map(BookRecord::normalized_genre)),
        leading_author: most_frequent(
            records
                .iter()
                .filter_map(|r| r.author_key().map(str::to_string)),
        ),
        avg_goodreads_rating,
        rating_diff,
        is_more_critical: rating_diff < 0.0,
        yearly_totals: yearly_totals(&by_year),
        genre_distribution: genre_distribution(&by_year),
        rating_trends: rating_trends(&by_year),
        source_performance: source_performance(records),
        undated_books,
    }
}

type YearBuckets<'a> = BTreeMap<i32, Vec<&'a BookRecord>>;

fn group_by_year(records: &[BookRecord]) -> YearBuckets<'_> {
    let mut buckets: YearBuckets<'_> = BTreeMap::new();
    for record in records {
        if let Some(year) = record.year_read {
            buckets.entry(year).or_default().push(record);
        }
    }
    buckets
}

fn bucket_len(buckets: &YearBuckets<'_>, year: i32) -> u64 {
    buckets.get(&year).map_or(0, |books| books.len() as u64)
}

fn yoy_growth(current: u64, last: u64) -> Option<i64> {
    if last == 0 {
        return None;
    }
    let ratio = current as f64 / last as f64;
    Some(((ratio - 1.0) * 100.0).round() as i64)
}

fn type_distribution(records: &[BookRecord]) -> Vec<TypeShare> {
    let total = records.len() as f64;
    group_in_order(records.iter(), |r| r.type_label().to_string())
        .into_iter()
        .map(|(name, books)| TypeShare {
            name,
            value: books.len() as f64 / total * 100.0,
        })
        .collect()
}

fn yearly_totals(buckets: &YearBuckets<'_>) -> Vec<YearTotal> {
    buckets
        .iter()
        .map(|(&year, books)| YearTotal {
            year,
            total: books.len() as u64,
        })
        .collect()
}

fn rating_trends(buckets: &YearBuckets<'_>) -> Vec<RatingTrendPoint> {
    buckets
        .iter()
        .map(|(&year, books)| RatingTrendPoint {
            year,
            average_rating: mean_of(books, BookRecord::rating_or_default),
            average_goodreads_rating: mean_of(books, BookRecord::goodreads_rating_or_default),
            count: books.len() as u64,
        })
        .collect()
}

/// Shares are whole hundredths of a percent allotted by largest remainder,
/// so the seven values of every year sum to exactly 100.
fn genre_distribution(buckets: &YearBuckets<'_>) -> Vec<YearGenreShare> {
    buckets
        .iter()
        .map(|(&year, books)| {
            // One slot per category, then the uncategorized residual.
            let mut counts = [0_u64; GenreCategory::ALL.len() + 1];
            for book in books {
                let slot = book
                    .normalized_genre()
                    .and_then(|genre| GenreCategory::for_genre(&genre))
                    .map_or(GenreCategory::ALL.len(), |category| category as usize);
                counts[slot] += 1;
            }

            let hundredths = apportion(&counts, 10_000);
            let mut share = YearGenreShare {
                year,
                ..YearGenreShare::default()
            };
            for category in GenreCategory::ALL {
                share.set_share(category, hundredths[category as usize] as f64 / 100.0);
            }
            share.uncategorized = hundredths[GenreCategory::ALL.len()] as f64 / 100.0;
            share
        })
        .collect()
}

/// Split `units` across `counts` proportionally. Floors first, then hands the
/// leftover units to the largest remainders; equal remainders favour the
/// earlier slot.
fn apportion<const N: usize>(counts: &[u64; N], units: u64) -> [u64; N] {
    let total: u64 = counts.iter().sum();
    let mut allotted = [0_u64; N];
    if total == 0 {
        return allotted;
    }

    let mut remainders = [0_u64; N];
    for (slot, &count) in counts.iter().enumerate() {
        allotted[slot] = count * units / total;
        remainders[slot] = count * units % total;
    }

    let leftover = units - allotted.iter().sum::<u64>();
    let mut order: Vec<usize> = (0..N).collect();
    order.sort_by(|&a, &b| remainders[b].cmp(&remainders[a]).then(a.cmp(&b)));
    for &slot in order.iter().take(leftover as usize) {
        allotted[slot] += 1;
    }
    allotted
}

fn source_performance(records: &[BookRecord]) -> Vec<SourcePerformance> {
    let sourced = records.iter().filter(|r| r.source_key().is_some());
    let mut rows: Vec<SourcePerformance> =
        group_in_order(sourced, |r| r.source_key().unwrap_or_default().to_string())
            .into_iter()
            .map(|(source, books)| {
                let successes = books.iter().filter(|b| b.is_success()).count();
                SourcePerformance {
                    source,
                    avg_rating: mean_of(&books, BookRecord::rating_or_default),
                    book_count: books.len() as u64,
                    avg_goodreads_rating: mean_of(&books, BookRecord::goodreads_rating_or_default),
                    success_rate: successes as f64 / books.len() as f64 * 100.0,
                }
            })
            .collect();

    rows.sort_by(|a, b| {
        b.avg_rating
            .total_cmp(&a.avg_rating)
            .then_with(|| a.source.cmp(&b.source))
    });
    rows
}

/// Group items by key, keeping groups in first-encountered order.
fn group_in_order<'a, I, K, F>(items: I, key: F) -> Vec<(K, Vec<&'a BookRecord>)>
where
    I: Iterator<Item = &'a BookRecord>,
    K: Eq + Hash + Clone,
    F: Fn(&BookRecord) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<&'a BookRecord>)> = Vec::new();
    for item in items {
        let k = key(item);
        if let Some(&position) = index.get(&k) {
            groups[position].1.push(item);
        } else {
            index.insert(k.clone(), groups.len());
            groups.push((k, vec![item]));
        }
    }
    groups
}

/// Most common value; ties go to whichever value appeared first.
fn most_frequent<I>(values: I) -> Option<String>
where
    I: Iterator<Item = String>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut order: Vec<String> = Vec::new();
    for value in values {
        let count = counts.entry(value.clone()).or_insert_with(|| {
            order.push(value.clone());
            0
        });
        *count += 1;
    }

    let mut best: Option<(&String, usize)> = None;
    for value in &order {
        let count = counts.get(value).copied().unwrap_or_default();
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value.clone())
}

fn mean(records: &[BookRecord], value: fn(&BookRecord) -> f64) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    records.iter().map(value).sum::<f64>() / records.len() as f64
}

fn mean_of(records: &[&BookRecord], value: fn(&BookRecord) -> f64) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    records.iter().map(|r| value(r)).sum::<f64>() / records.len() as f64
}

/// Round half away from zero to `places` decimals.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}
