//! Intentional query crate surface consumed by list views and the CLI.

pub use super::builder::ViewStateBuilder;
pub use super::filtering::filter_hash;
pub use super::pagination::{page_count, page_numbers};
pub use super::pipeline::compute_page;
pub use super::sorting::{Listable, MovieSortField, SortableField};
pub use super::types::{
    ConfigurationError, DEFAULT_PAGE_SIZE, PageResult, SearchMode, SortOrder,
    SortSpec, ViewState,
};
