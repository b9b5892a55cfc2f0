//! Sort field sets for list views
//!
//! Each variant maps to the column path the movie table uses for its header.

use super::traits::SortableField;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Columns of the movie table that can be sorted.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum MovieSortField {
    /// Sort by title (as written, capitals first)
    #[default]
    #[serde(rename = "title")]
    Title,
    /// Sort by the genre's display name
    #[serde(rename = "genre.name")]
    GenreName,
    /// Sort by copies in stock
    #[serde(rename = "numberInStock")]
    NumberInStock,
    /// Sort by daily rental rate
    #[serde(rename = "dailyRentalRate")]
    DailyRentalRate,
    /// Sort by the like flag (unliked first when ascending)
    #[serde(rename = "liked")]
    Liked,
}

impl SortableField for MovieSortField {
    const ALL: &'static [Self] = &[
        MovieSortField::Title,
        MovieSortField::GenreName,
        MovieSortField::NumberInStock,
        MovieSortField::DailyRentalRate,
        MovieSortField::Liked,
    ];

    fn path(&self) -> &'static str {
        match self {
            MovieSortField::Title => "title",
            MovieSortField::GenreName => "genre.name",
            MovieSortField::NumberInStock => "numberInStock",
            MovieSortField::DailyRentalRate => "dailyRentalRate",
            MovieSortField::Liked => "liked",
        }
    }
}

impl MovieSortField {
    /// Column header label.
    pub fn label(&self) -> &'static str {
        match self {
            MovieSortField::Title => "Title",
            MovieSortField::GenreName => "Genre",
            MovieSortField::NumberInStock => "Stock",
            MovieSortField::DailyRentalRate => "Rate",
            MovieSortField::Liked => "Liked",
        }
    }
}

impl fmt::Display for MovieSortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
