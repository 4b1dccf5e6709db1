pub mod recommendations;
pub mod stats;

pub use recommendations::recommendation_for_day;
pub use stats::{Dashboard, load_dashboard, load_records};
