use crate::ids::GenreID;

/// Display name of the "no filter" genre selector.
pub const ALL_GENRES_NAME: &str = "All Genres";

/// A labelled grouping of movies.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Genre {
    #[cfg_attr(feature = "serde", serde(rename = "_id"))]
    pub id: GenreID,
    pub name: String,
}

impl Genre {
    pub fn new(id: impl Into<GenreID>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Sentinel genre that disables genre filtering when selected.
    pub fn all_genres() -> Self {
        Self {
            id: GenreID::all(),
            name: ALL_GENRES_NAME.to_string(),
        }
    }

    pub fn is_all(&self) -> bool {
        self.id.is_all()
    }
}

impl Default for Genre {
    fn default() -> Self {
        Self::all_genres()
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
