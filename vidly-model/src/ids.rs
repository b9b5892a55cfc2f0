use crate::error::ModelError;

/// Strongly typed ID for movies with validation
///
/// The catalog API hands out opaque document ids, so the value is kept as a
/// string and only checked for emptiness.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "String", into = "String")
)]
pub struct MovieID(String);

impl MovieID {
    pub fn new(id: impl Into<String>) -> Result<Self, ModelError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ModelError::InvalidId(
                "Movie ID cannot be empty".to_string(),
            ));
        }
        Ok(MovieID(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for MovieID {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MovieID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for MovieID {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        MovieID::new(value)
    }
}

impl From<MovieID> for String {
    fn from(value: MovieID) -> Self {
        value.0
    }
}

impl std::str::FromStr for MovieID {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MovieID::new(s)
    }
}

/// Strongly typed ID for genres
///
/// Unlike [`MovieID`] the empty value is legal: it is the id of the
/// "All Genres" selector and means "do not filter by genre".
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct GenreID(String);

impl GenreID {
    pub fn new(id: impl Into<String>) -> Self {
        GenreID(id.into())
    }

    /// The id carried by the "All Genres" selector.
    pub fn all() -> Self {
        GenreID(String::new())
    }

    pub fn is_all(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for GenreID {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GenreID {
    fn from(value: &str) -> Self {
        GenreID::new(value)
    }
}

impl From<String> for GenreID {
    fn from(value: String) -> Self {
        GenreID(value)
    }
}

impl std::fmt::Display for GenreID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
