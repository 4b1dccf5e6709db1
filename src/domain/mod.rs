pub mod analytics;
pub mod books;
pub mod errors;
pub mod formatting;
pub mod ids;
pub mod recommendations;
pub mod repositories;

// Re-exports
pub use analytics::{genres, rankings, stats};
pub use books::{records, wire};
pub use errors::RepositoryError;
