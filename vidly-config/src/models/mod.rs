pub mod sources;

use std::path::PathBuf;
use std::time::Duration;
use vidly_core::query::{
    ConfigurationError, MovieSortField, SearchMode, SortSpec,
    ViewState, ViewStateBuilder,
};

pub const DEFAULT_API_URL: &str = "http://localhost:3900";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Fully resolved configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub api: ApiConfig,
    pub list: ListConfig,
    pub metadata: ConfigMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Catalog server root; `/api/...` is appended per request
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Initial state of the movie list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListConfig {
    pub page_size: usize,
    pub sort: SortSpec<MovieSortField>,
    pub search_mode: SearchMode,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: vidly_core::query::DEFAULT_PAGE_SIZE,
            sort: SortSpec::default(),
            search_mode: SearchMode::Literal,
        }
    }
}

impl ListConfig {
    /// Starting view state for a fresh list.
    pub fn view_state(&self) -> Result<ViewState, ConfigurationError> {
        let mut state = ViewStateBuilder::new()
            .sort_by(self.sort.field, self.sort.order)
            .page_size(self.page_size)
            .build()?;
        state.search_mode = self.search_mode;
        Ok(state)
    }
}

/// Where the file-level settings came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    Explicit(PathBuf),
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

impl ConfigSource {
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            ConfigSource::Explicit(path)
            | ConfigSource::EnvPath(path)
            | ConfigSource::File(path) => Some(path),
            ConfigSource::Default | ConfigSource::EnvInline => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigMetadata {
    pub source: ConfigSource,
    pub env_file_loaded: bool,
    /// Names of the `VIDLY_*` variables that overrode file values
    pub env_overrides: Vec<&'static str>,
}
