//! # Vidly Core
//!
//! Core library for the Vidly rental catalog: the list pipeline that turns
//! a movie snapshot into one rendered page, the catalog services that supply
//! that snapshot, and the view state that drives both.
//!
//! ## Overview
//!
//! - **Query**: search, genre filter, stable sort and pagination over any
//!   [`query::Listable`] collection
//! - **Catalog**: async movie and genre services backed by HTTP or memory
//! - **View**: movie table state with optimistic deletion
//! - **Auth**: login form validation
//!
//! ## Feature Flags
//!
//! - `http`: enables [`catalog::HttpCatalog`] (reqwest, rustls)
//!
//! ## Examples
//!
//! ```
//! use vidly_core::query::prelude::*;
//! use vidly_model::{Genre, Movie, MovieID};
//!
//! let action = Genre::new("action", "Action");
//! let movies = vec![
//!     Movie::new(MovieID::new("1").unwrap(), "Terminator", action.clone()),
//!     Movie::new(MovieID::new("2").unwrap(), "Die Hard", action),
//! ];
//!
//! let state = ViewStateBuilder::new().search("die").build().unwrap();
//! let page = compute_page(&movies, &state).unwrap();
//! assert_eq!(page.total_count, 1);
//! ```
#![allow(missing_docs)]

pub mod auth;
pub mod catalog;
pub mod error;
pub mod query;
pub mod view;

pub use error::{Result, VidlyError};
pub use view::{MoviesView, PendingDelete};
