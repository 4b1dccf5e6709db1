pub mod genres;
pub mod rankings;
pub mod stats;
