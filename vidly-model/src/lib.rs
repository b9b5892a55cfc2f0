//! Core data model definitions shared across Vidly crates.
#![allow(missing_docs)]

pub mod error;
pub mod genre;
pub mod ids;
pub mod movie;

// Intentionally curated re-exports for downstream consumers.
pub use error::{ModelError, Result as ModelResult};
pub use genre::Genre;
pub use ids::{GenreID, MovieID};
pub use movie::Movie;
