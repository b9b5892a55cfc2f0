use crate::query::sorting::{MovieSortField, SortableField};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use vidly_model::GenreID;

/// Page size used by the movie list when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 4;

/// Snapshot of the filter/sort/pagination choices driving one pipeline run.
///
/// The enclosing view owns this value and hands it to
/// [`compute_page`](crate::query::compute_page) on every change; the pipeline
/// never keeps or mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    default,
    rename_all = "camelCase",
    bound(deserialize = "F: Deserialize<'de> + Default")
)]
pub struct ViewState<F = MovieSortField> {
    pub search: String,
    pub search_mode: SearchMode,
    /// Empty id means "All Genres".
    pub selected_genre: GenreID,
    pub sort: SortSpec<F>,
    /// 1-based; 0 is treated as the first page.
    pub current_page: usize,
    pub page_size: usize,
}

impl<F: Default> Default for ViewState<F> {
    fn default() -> Self {
        Self {
            search: String::new(),
            search_mode: SearchMode::default(),
            selected_genre: GenreID::all(),
            sort: SortSpec::default(),
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl<F> ViewState<F> {
    /// Page number with the 1-based floor applied.
    pub fn effective_page(&self) -> usize {
        self.current_page.max(1)
    }
}

/// How the search text is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Case-insensitive substring match; regex metacharacters are literal.
    #[default]
    Literal,
    /// Case-insensitive regular expression. Invalid patterns match nothing.
    Pattern,
}

/// Sort criteria: which field and in which direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec<F = MovieSortField> {
    #[serde(rename = "path")]
    pub field: F,
    pub order: SortOrder,
}

impl<F: Default> Default for SortSpec<F> {
    fn default() -> Self {
        Self {
            field: F::default(),
            order: SortOrder::Ascending,
        }
    }
}

impl<F: SortableField> SortSpec<F> {
    pub fn new(field: F, order: SortOrder) -> Self {
        Self { field, order }
    }

    pub fn ascending(field: F) -> Self {
        Self::new(field, SortOrder::Ascending)
    }

    pub fn descending(field: F) -> Self {
        Self::new(field, SortOrder::Descending)
    }

    /// Resolve a raw field path such as `"genre.name"`.
    pub fn from_path(
        path: &str,
        order: SortOrder,
    ) -> Result<Self, ConfigurationError> {
        F::from_path(path)
            .map(|field| Self::new(field, order))
            .ok_or_else(|| ConfigurationError::UnknownSortPath {
                path: path.to_string(),
            })
    }

    pub fn path(&self) -> &'static str {
        self.field.path()
    }

    /// Column-header click: the active column flips direction, any other
    /// column starts ascending.
    pub fn toggled(self, field: F) -> Self {
        if self.field == field {
            Self::new(field, self.order.reversed())
        } else {
            Self::ascending(field)
        }
    }
}

/// Sort order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortOrder {
    pub fn reversed(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            other => Err(ConfigurationError::UnknownSortOrder {
                order: other.to_string(),
            }),
        }
    }
}

/// One window of the processed list plus the number of matches before
/// windowing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total_count: usize,
}

impl<T> PageResult<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of pages needed to show every match at `page_size`.
    pub fn page_count(&self, page_size: usize) -> usize {
        crate::query::pagination::page_count(self.total_count, page_size)
    }
}

/// Invalid pipeline configuration. These indicate a bug at the call site and
/// are always surfaced to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("unknown sort path '{path}'")]
    UnknownSortPath { path: String },

    #[error("unknown sort order '{order}' (expected 'asc' or 'desc')")]
    UnknownSortOrder { order: String },

    #[error("page size must be positive, got {page_size}")]
    NonPositivePageSize { page_size: usize },
}
