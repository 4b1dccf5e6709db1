use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical genre categories used by the per-year distribution chart.
///
/// The taxonomy is closed and non-exhaustive: a normalised genre belongs to
/// at most one category, and many genres belong to none.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenreCategory {
    Literary,
    Speculative,
    Historical,
    Romance,
    Contemporary,
    NonFiction,
}

impl GenreCategory {
    pub const ALL: [GenreCategory; 6] = [
        GenreCategory::Literary,
        GenreCategory::Speculative,
        GenreCategory::Historical,
        GenreCategory::Romance,
        GenreCategory::Contemporary,
        GenreCategory::NonFiction,
    ];

    pub fn display_label(&self) -> &'static str {
        match self {
            GenreCategory::Literary => "Literary",
            GenreCategory::Speculative => "Speculative",
            GenreCategory::Historical => "Historical",
            GenreCategory::Romance => "Romance",
            GenreCategory::Contemporary => "Contemporary",
            GenreCategory::NonFiction => "Non-Fiction",
        }
    }

    /// Normalised genre strings that belong to this category.
    pub fn members(&self) -> &'static [&'static str] {
        match self {
            GenreCategory::Literary => &[
                "literary fiction",
                "psychological fiction",
                "philosophical fiction",
                "political fiction",
            ],
            GenreCategory::Speculative => &[
                "science fiction",
                "dystopian",
                "fantasy",
                "magical realism",
                "mythological fiction",
            ],
            GenreCategory::Historical => &["historical fiction"],
            GenreCategory::Romance => &["romance"],
            GenreCategory::Contemporary => &["satire", "essay"],
            GenreCategory::NonFiction => &["memoir", "self-help", "non-fiction", "nonfiction"],
        }
    }

    /// Category for an already-normalised (trimmed, lowercased) genre.
    pub fn for_genre(normalized: &str) -> Option<GenreCategory> {
        Self::ALL
            .into_iter()
            .find(|category| category.members().contains(&normalized))
    }
}

impl fmt::Display for GenreCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_label())
    }
}
