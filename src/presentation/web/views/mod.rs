mod books;
mod dashboard;
mod recommendations;

pub use books::BookRowView;
pub use dashboard::{
    BarView, DashboardView, GenreRowView, GenreSegmentView, SourceRowView, StatCard, TrendRowView,
};
pub use recommendations::RecommendationView;

use crate::domain::formatting::EM_DASH;

/// Render an optional value, falling back to an em dash.
pub(crate) fn or_em_dash<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| EM_DASH.to_string(), |v| v.to_string())
}

/// CSS width for a bar of `value` relative to `max`, e.g. "42.5%".
pub(crate) fn bar_width(value: f64, max: f64) -> String {
    if max <= 0.0 || !value.is_finite() {
        return "0%".to_string();
    }
    let percent = (value / max * 100.0).clamp(0.0, 100.0);
    format!("{percent:.1}%")
}
