//! `Listable` implementations for catalog records

use super::{
    fields::MovieSortField,
    keys::SortKey,
    traits::Listable,
};
use vidly_model::{GenreID, Movie};

impl Listable for Movie {
    type Field = MovieSortField;

    fn display_text(&self) -> &str {
        &self.title
    }

    fn category_id(&self) -> Option<&GenreID> {
        Some(self.genre_id())
    }

    fn sort_key(&self, field: MovieSortField) -> SortKey {
        match field {
            MovieSortField::Title => SortKey::text(&self.title),
            MovieSortField::GenreName => SortKey::text(&self.genre.name),
            MovieSortField::NumberInStock => {
                SortKey::count(self.number_in_stock)
            }
            MovieSortField::DailyRentalRate => {
                SortKey::amount(self.daily_rental_rate)
            }
            MovieSortField::Liked => SortKey::flag(self.liked),
        }
    }
}
