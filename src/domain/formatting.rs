use crate::domain::stats::round_to;

/// Em dash constant for use as a placeholder when a value is absent.
pub const EM_DASH: &str = "\u{2014}";

/// Shown in place of a year-over-year figure that cannot be computed.
pub const NOT_AVAILABLE: &str = "N/A";

/// Format a rating with one decimal, e.g. "4.0".
pub fn format_rating(rating: f64) -> String {
    format!("{:.1}", round_to(rating, 1))
}

/// Format an optional rating, using an em dash when absent.
pub fn format_optional_rating(rating: Option<f64>) -> String {
    rating.map_or_else(|| EM_DASH.to_string(), format_rating)
}

/// Format a rating with two decimals, as used in per-year trend tooltips.
pub fn format_rating_precise(rating: f64) -> String {
    format!("{:.2}", round_to(rating, 2))
}

/// Format a percentage as a whole number, rounding half away from zero.
pub fn format_percent(value: f64) -> String {
    format!("{}%", round_to(value, 0) as i64)
}

/// Format a signed rating difference, e.g. "+0.4" or "-0.3".
pub fn format_rating_diff(diff: f64) -> String {
    let rounded = round_to(diff, 1);
    if rounded > 0.0 {
        format!("+{rounded:.1}")
    } else if rounded == 0.0 {
        "0.0".to_string()
    } else {
        format!("{rounded:.1}")
    }
}

/// Format year-over-year growth, e.g. "+25%", "-50%", or "N/A".
pub fn format_growth(growth: Option<i64>) -> String {
    match growth {
        Some(value) if value > 0 => format!("+{value}%"),
        Some(value) => format!("{value}%"),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Format a book count for display.
pub fn format_book_count(count: u64) -> String {
    if count == 1 {
        "1 book".to_string()
    } else {
        format!("{count} books")
    }
}
