use askama::Template;

use super::views::DashboardView;

#[derive(Template)]
#[template(path = "pages/dashboard.html")]
pub struct DashboardTemplate {
    pub nav_active: &'static str,
    pub version: &'static str,
    pub generated_at: String,
    pub dashboard: DashboardView,
}

pub fn render_template<T: Template>(template: T) -> Result<String, askama::Error> {
    template.render()
}
