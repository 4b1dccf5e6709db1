pub mod client;
pub mod database;
pub mod repositories;
