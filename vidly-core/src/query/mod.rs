pub mod builder;
pub mod filtering;
pub mod pagination;
pub mod pipeline;
pub mod prelude;
pub mod sorting;
pub mod types;

pub use builder::ViewStateBuilder;
pub use pagination::{page_count, page_numbers, paginate};
pub use pipeline::compute_page;
pub use sorting::*;
pub use types::*;
