use super::{
    sorting::{MovieSortField, SortableField},
    types::*,
};
use vidly_model::{Genre, GenreID};

/// Fluent API for building view states
#[derive(Debug, Clone)]
pub struct ViewStateBuilder<F = MovieSortField> {
    state: ViewState<F>,
}

impl<F: SortableField + Default> ViewStateBuilder<F> {
    /// Create a new builder starting from the default view state
    pub fn new() -> Self {
        Self {
            state: ViewState::default(),
        }
    }
}

impl<F: SortableField> ViewStateBuilder<F> {
    /// Start from an existing state
    pub fn from_state(state: ViewState<F>) -> Self {
        Self { state }
    }

    // === Filter methods ===

    /// Case-insensitive literal search on the display text
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.state.search = text.into();
        self.state.search_mode = SearchMode::Literal;
        self
    }

    /// Case-insensitive regex search on the display text
    pub fn search_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.state.search = pattern.into();
        self.state.search_mode = SearchMode::Pattern;
        self
    }

    /// Filter by genre id; the empty id selects all genres
    pub fn genre(mut self, genre: impl Into<GenreID>) -> Self {
        self.state.selected_genre = genre.into();
        self
    }

    /// Filter by a genre record, including the "All Genres" sentinel
    pub fn genre_of(mut self, genre: &Genre) -> Self {
        self.state.selected_genre = genre.id.clone();
        self
    }

    /// Drop the genre filter
    pub fn all_genres(mut self) -> Self {
        self.state.selected_genre = GenreID::all();
        self
    }

    // === Sort methods ===

    pub fn sort_by(mut self, field: F, order: SortOrder) -> Self {
        self.state.sort = SortSpec::new(field, order);
        self
    }

    /// Sort by a raw column path, rejecting unknown paths
    pub fn sort_by_path(
        mut self,
        path: &str,
        order: SortOrder,
    ) -> Result<Self, ConfigurationError> {
        self.state.sort = SortSpec::from_path(path, order)?;
        Ok(self)
    }

    // === Pagination methods ===

    /// Set the 1-based page
    pub fn page(mut self, page: usize) -> Self {
        self.state.current_page = page;
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.state.page_size = page_size;
        self
    }

    // === Build method ===

    /// Build the final state, validating the page size
    pub fn build(self) -> Result<ViewState<F>, ConfigurationError> {
        super::pagination::ensure_page_size(self.state.page_size)?;
        Ok(self.state)
    }
}

impl<F: SortableField + Default> Default for ViewStateBuilder<F> {
    fn default() -> Self {
        Self::new()
    }
}
