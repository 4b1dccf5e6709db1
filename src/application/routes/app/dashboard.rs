use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use chrono::Utc;

use crate::application::routes::render_html;
use crate::application::services::{load_dashboard, recommendation_for_day};
use crate::application::state::AppState;
use crate::presentation::web::templates::DashboardTemplate;
use crate::presentation::web::views::DashboardView;

#[tracing::instrument(skip(state))]
pub(crate) async fn dashboard_page(
    State(state): State<AppState>,
) -> Result<Html<String>, StatusCode> {
    let now = Utc::now();
    let (dashboard, recommendation) = tokio::join!(
        load_dashboard(&*state.book_repo),
        recommendation_for_day(&*state.recommendation_repo, now.date_naive()),
    );

    let template = DashboardTemplate {
        nav_active: "dashboard",
        version: env!("CARGO_PKG_VERSION"),
        generated_at: now.format("%Y-%m-%d %H:%M UTC").to_string(),
        dashboard: DashboardView::new(&dashboard.stats, &dashboard.records, &recommendation),
    };

    render_html(template)
}
