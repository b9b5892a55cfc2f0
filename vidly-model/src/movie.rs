use crate::{
    error::ModelError,
    genre::Genre,
    ids::{GenreID, MovieID},
};

/// A rentable movie record as served by the catalog API.
///
/// Field names on the wire follow the API (`_id`, `numberInStock`,
/// `dailyRentalRate`). `liked` is a client-side flag and defaults to `false`
/// when the server omits it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Movie {
    #[cfg_attr(feature = "serde", serde(rename = "_id"))]
    pub id: MovieID,
    pub title: String,
    pub genre: Genre,
    #[cfg_attr(feature = "serde", serde(default))]
    pub number_in_stock: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub daily_rental_rate: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub liked: bool,
}

impl Movie {
    pub fn new(id: MovieID, title: impl Into<String>, genre: Genre) -> Self {
        Self {
            id,
            title: title.into(),
            genre,
            number_in_stock: 0,
            daily_rental_rate: 0.0,
            liked: false,
        }
    }

    pub fn with_stock(mut self, number_in_stock: u32) -> Self {
        self.number_in_stock = number_in_stock;
        self
    }

    pub fn with_rate(mut self, daily_rental_rate: f64) -> Self {
        self.daily_rental_rate = daily_rental_rate;
        self
    }

    pub fn with_liked(mut self, liked: bool) -> Self {
        self.liked = liked;
        self
    }

    pub fn genre_id(&self) -> &GenreID {
        &self.genre.id
    }

    /// Returns a copy of this record with the like flag flipped.
    pub fn toggled_like(&self) -> Self {
        let mut copy = self.clone();
        copy.liked = !self.liked;
        copy
    }

    /// Check the record against the constraints the rental form enforces.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.title.trim().is_empty() {
            return Err(ModelError::InvalidRecord(format!(
                "movie {} has an empty title",
                self.id
            )));
        }
        if self.genre.is_all() {
            return Err(ModelError::InvalidRecord(format!(
                "movie {} must reference a concrete genre",
                self.id
            )));
        }
        if !self.daily_rental_rate.is_finite() || self.daily_rental_rate < 0.0 {
            return Err(ModelError::InvalidRecord(format!(
                "movie {} has an invalid daily rental rate {}",
                self.id, self.daily_rental_rate
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terminator() -> Movie {
        Movie::new(
            MovieID::new("1").unwrap(),
            "Terminator",
            Genre::new("action", "Action"),
        )
        .with_stock(6)
        .with_rate(2.5)
    }

    #[test]
    fn toggled_like_leaves_original_untouched() {
        let movie = terminator();
        let toggled = movie.toggled_like();
        assert!(!movie.liked);
        assert!(toggled.liked);
        assert_eq!(toggled.id, movie.id);
    }

    #[test]
    fn validate_rejects_sentinel_genre_and_blank_title() {
        assert!(terminator().validate().is_ok());

        let mut untitled = terminator();
        untitled.title = "  ".to_string();
        assert!(untitled.validate().is_err());

        let mut ungrouped = terminator();
        ungrouped.genre = Genre::all_genres();
        assert!(ungrouped.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn decodes_api_wire_format() {
        let raw = r#"{
            "_id": "5b21ca3eeb7f6fbccd471815",
            "title": "Terminator",
            "genre": { "_id": "5b21ca3eeb7f6fbccd471818", "name": "Action" },
            "numberInStock": 6,
            "dailyRentalRate": 2.5
        }"#;
        let movie: Movie = serde_json::from_str(raw).unwrap();
        assert_eq!(movie.id.as_str(), "5b21ca3eeb7f6fbccd471815");
        assert_eq!(movie.genre.name, "Action");
        assert_eq!(movie.number_in_stock, 6);
        assert!(!movie.liked);

        let blank = r#"{"_id": "", "title": "x", "genre": {"_id": "a", "name": "A"}}"#;
        assert!(serde_json::from_str::<Movie>(blank).is_err());
    }
}
