//! Catalog service traits and implementations
//!
//! The list pipeline never talks to the network. These services supply the
//! movie and genre snapshots it runs over and carry out the mutations whose
//! results are fed back into it. Transport failures surface as
//! [`CatalogError`]; retry and backoff are not attempted here.

#[cfg(feature = "http")]
pub mod http;
pub mod memory;

#[cfg(feature = "http")]
pub use http::HttpCatalog;
pub use memory::{CatalogSnapshot, InMemoryCatalog};

use async_trait::async_trait;
use std::fmt::Debug;
use vidly_model::{Genre, ModelError, Movie, MovieID};

/// Errors raised by catalog collaborators
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    #[error("Request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    #[cfg(feature = "http")]
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid base URL '{0}'")]
    InvalidBaseUrl(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid record: {0}")]
    Model(#[from] ModelError),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl CatalogError {
    pub fn movie_not_found(id: &MovieID) -> Self {
        CatalogError::NotFound {
            entity_type: "movie",
            id: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound { .. })
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Source of movie records and the mutations the list view issues
#[async_trait]
pub trait MovieService: Send + Sync + Debug {
    /// Fetch the full movie collection
    async fn fetch_movies(&self) -> CatalogResult<Vec<Movie>>;

    /// Fetch a single movie
    async fn fetch_movie(&self, id: &MovieID) -> CatalogResult<Movie>;

    /// Delete a movie. A movie that is already gone yields `NotFound`.
    async fn delete_movie(&self, id: &MovieID) -> CatalogResult<()>;
}

/// Source of genre records
#[async_trait]
pub trait GenreService: Send + Sync + Debug {
    /// Fetch every genre, without the "All Genres" selector
    async fn fetch_genres(&self) -> CatalogResult<Vec<Genre>>;
}

/// Prepend the "All Genres" selector to a fetched genre list.
///
/// A sentinel already present in `genres` is dropped so the selector appears
/// exactly once, in first position.
pub fn with_all_genres(genres: Vec<Genre>) -> Vec<Genre> {
    std::iter::once(Genre::all_genres())
        .chain(genres.into_iter().filter(|genre| !genre.is_all()))
        .collect()
}
