mod books_api;
mod client;
mod helpers;
mod pages;
mod recommendations_api;
mod stats_api;
