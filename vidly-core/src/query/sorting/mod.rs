//! Sorting module for the list pipeline
//!
//! This module provides:
//! - Core traits for sortable list entries
//! - Typed sort fields resolved from column paths
//! - Sort key extraction and comparison
//! - Stable ordering of filtered views

pub mod fields;
pub mod impls;
pub mod keys;
pub mod simple;
pub mod traits;


pub use fields::*;
pub use keys::*;
pub use simple::*;
pub use traits::*;
