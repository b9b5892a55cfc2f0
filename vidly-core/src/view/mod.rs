//! Movie list view state
//!
//! [`MoviesView`] is the state a movie table keeps between renders: the
//! current movie snapshot, the genre list with the "All Genres" selector in
//! front, and the [`ViewState`] the user is steering. Each interaction
//! replaces part of that state and the page is recomputed from scratch by
//! [`compute_page`].
//!
//! Deletion is optimistic. The record disappears from the local snapshot
//! first, the service is asked to delete it, and a failure puts the record
//! back where it was. No retry is attempted; the caller decides how to tell
//! the user.

use crate::catalog::{CatalogResult, GenreService, MovieService, with_all_genres};
use crate::query::{
    compute_page,
    filtering::filter_hash,
    pagination::page_numbers,
    sorting::MovieSortField,
    types::{ConfigurationError, PageResult, SortSpec, ViewState},
};
use tracing::{debug, info, warn};
use vidly_model::{Genre, Movie, MovieID};

/// A movie removed locally while its deletion is in flight.
#[derive(Debug, Clone)]
#[must_use = "a pending delete must be confirmed or rolled back"]
pub struct PendingDelete {
    index: usize,
    movie: Movie,
}

impl PendingDelete {
    pub fn movie(&self) -> &Movie {
        &self.movie
    }
}

#[derive(Debug, Clone)]
pub struct MoviesView {
    movies: Vec<Movie>,
    genres: Vec<Genre>,
    selected: Genre,
    state: ViewState,
}

impl Default for MoviesView {
    fn default() -> Self {
        Self::new(ViewState::default())
    }
}

impl MoviesView {
    pub fn new(state: ViewState) -> Self {
        Self {
            movies: Vec::new(),
            genres: with_all_genres(Vec::new()),
            selected: Genre::all_genres(),
            state,
        }
    }

    /// Build a view over an already fetched snapshot.
    pub fn with_snapshot(
        state: ViewState,
        genres: Vec<Genre>,
        movies: Vec<Movie>,
    ) -> Self {
        let mut view = Self::new(state);
        view.replace_snapshot(genres, movies);
        view
    }

    /// Fetch movies and genres and replace the local snapshot with them.
    pub async fn load<S>(&mut self, catalog: &S) -> CatalogResult<()>
    where
        S: MovieService + GenreService + ?Sized,
    {
        let genres = catalog.fetch_genres().await?;
        let movies = catalog.fetch_movies().await?;
        info!(
            movies = movies.len(),
            genres = genres.len(),
            "loaded movie catalog"
        );
        self.replace_snapshot(genres, movies);
        Ok(())
    }

    /// Swap in a new snapshot. The latest snapshot always wins.
    ///
    /// A selected genre missing from the new snapshot falls back to "All
    /// Genres"; when that changes the filters, paging restarts at page 1.
    pub fn replace_snapshot(&mut self, genres: Vec<Genre>, movies: Vec<Movie>) {
        let filters = filter_hash(&self.state);
        self.genres = with_all_genres(genres);
        self.movies = movies;

        // Keep the selection only if the genre still exists.
        if let Some(current) = self
            .genres
            .iter()
            .find(|genre| genre.id == self.state.selected_genre)
        {
            self.selected = current.clone();
        } else {
            self.selected = Genre::all_genres();
            self.state.selected_genre = self.selected.id.clone();
        }

        if filter_hash(&self.state) != filters {
            debug!("selected genre dropped from snapshot, back to page 1");
            self.state.current_page = 1;
        }
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Genres in display order, "All Genres" first.
    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    pub fn selected_genre(&self) -> &Genre {
        &self.selected
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    // === Interaction handlers ===

    /// Select a genre. Clears the search box and returns to page 1.
    pub fn select_genre(&mut self, genre: &Genre) {
        self.selected = genre.clone();
        self.state.selected_genre = genre.id.clone();
        self.state.search.clear();
        self.state.current_page = 1;
    }

    /// Update the search text. Resets the genre to "All Genres" and returns
    /// to page 1.
    pub fn search(&mut self, text: impl Into<String>) {
        self.state.search = text.into();
        self.selected = Genre::all_genres();
        self.state.selected_genre = self.selected.id.clone();
        self.state.current_page = 1;
        debug!(search = %self.state.search, "search updated");
    }

    pub fn sort_by(&mut self, sort: SortSpec) {
        self.state.sort = sort;
    }

    /// Column header click. The active column flips direction; any other
    /// column starts ascending.
    pub fn sort_column(&mut self, field: MovieSortField) -> SortSpec {
        self.state.sort = self.state.sort.toggled(field);
        self.state.sort
    }

    pub fn change_page(&mut self, page: usize) {
        self.state.current_page = page;
    }

    /// Flip the like flag on one movie. The record is replaced by a toggled
    /// copy; every other record is left untouched. Returns the new flag, or
    /// `None` when the movie is not in the snapshot.
    pub fn toggle_like(&mut self, id: &MovieID) -> Option<bool> {
        let slot = self.movies.iter_mut().find(|movie| &movie.id == id)?;
        *slot = slot.toggled_like();
        Some(slot.liked)
    }

    // === Optimistic delete ===

    /// Remove a movie from the local snapshot ahead of the server call.
    pub fn begin_delete(&mut self, id: &MovieID) -> Option<PendingDelete> {
        let index = self.movies.iter().position(|movie| &movie.id == id)?;
        let movie = self.movies.remove(index);
        Some(PendingDelete { index, movie })
    }

    /// Put a movie back after its deletion failed.
    pub fn rollback(&mut self, pending: PendingDelete) {
        let index = pending.index.min(self.movies.len());
        warn!(movie = %pending.movie.id, "restoring movie after failed delete");
        self.movies.insert(index, pending.movie);
    }

    /// Delete a movie optimistically.
    ///
    /// Returns `Ok(None)` when the movie is not in the local snapshot and
    /// `Ok(Some(movie))` once the service confirms. On failure the movie is
    /// restored at its original position before the error is returned.
    pub async fn delete<S>(
        &mut self,
        service: &S,
        id: &MovieID,
    ) -> CatalogResult<Option<Movie>>
    where
        S: MovieService + ?Sized,
    {
        let Some(pending) = self.begin_delete(id) else {
            return Ok(None);
        };

        match service.delete_movie(id).await {
            Ok(()) => {
                info!(movie = %id, "movie deleted");
                Ok(Some(pending.movie))
            }
            Err(err) => {
                self.rollback(pending);
                Err(err)
            }
        }
    }

    // === Rendering helpers ===

    /// Run the list pipeline over the current snapshot.
    pub fn paged_data(&self) -> Result<PageResult<Movie>, ConfigurationError> {
        compute_page(&self.movies, &self.state)
    }

    /// Page links for the pagination control.
    pub fn page_links(&self, total_count: usize) -> Vec<usize> {
        page_numbers(total_count, self.state.page_size)
    }

    /// Summary line shown above the table.
    pub fn headline(&self, total_count: usize) -> String {
        if self.movies.is_empty() {
            "There are no movies in the database.".to_string()
        } else {
            format!("Showing {total_count} movies in the database.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::SortOrder;

    fn movie(id: &str, title: &str, genre: &Genre) -> Movie {
        Movie::new(MovieID::new(id).unwrap(), title, genre.clone())
    }

    fn sample_view() -> MoviesView {
        let action = Genre::new("action", "Action");
        let comedy = Genre::new("comedy", "Comedy");
        MoviesView::with_snapshot(
            ViewState::default(),
            vec![action.clone(), comedy.clone()],
            vec![
                movie("1", "Terminator", &action),
                movie("2", "Airplane", &comedy),
                movie("3", "Die Hard", &action),
            ],
        )
    }

    #[test]
    fn genre_selection_clears_search_and_page() {
        let mut view = sample_view();
        view.search("term");
        view.change_page(2);

        let comedy = view.genres()[2].clone();
        view.select_genre(&comedy);

        assert_eq!(view.state().search, "");
        assert_eq!(view.state().current_page, 1);
        assert_eq!(view.selected_genre().name, "Comedy");

        let page = view.paged_data().unwrap();
        assert_eq!(page.total_count, 1);
        assert_eq!(page.items[0].title, "Airplane");
    }

    #[test]
    fn search_resets_genre_to_all() {
        let mut view = sample_view();
        let action = view.genres()[1].clone();
        view.select_genre(&action);
        view.change_page(3);

        view.search("AIR");

        assert!(view.selected_genre().is_all());
        assert!(view.state().selected_genre.is_all());
        assert_eq!(view.state().current_page, 1);
        assert_eq!(view.paged_data().unwrap().total_count, 1);
    }

    #[test]
    fn toggle_like_only_touches_one_record() {
        let mut view = sample_view();
        let id = MovieID::new("2").unwrap();

        assert_eq!(view.toggle_like(&id), Some(true));
        assert_eq!(view.toggle_like(&id), Some(false));
        assert_eq!(view.toggle_like(&id), Some(true));

        let liked: Vec<&str> = view
            .movies()
            .iter()
            .filter(|m| m.liked)
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(liked, vec!["2"]);
        assert_eq!(view.toggle_like(&MovieID::new("99").unwrap()), None);
    }

    #[test]
    fn rollback_restores_original_position() {
        let mut view = sample_view();
        let pending = view.begin_delete(&MovieID::new("2").unwrap()).unwrap();
        assert_eq!(view.movies().len(), 2);
        assert_eq!(pending.movie().title, "Airplane");

        view.rollback(pending);
        let ids: Vec<&str> = view.movies().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn sorting_applies_to_paged_data() {
        let mut view = sample_view();
        view.sort_by(SortSpec::new(MovieSortField::Title, SortOrder::Descending));

        let titles: Vec<String> = view
            .paged_data()
            .unwrap()
            .items
            .into_iter()
            .map(|m| m.title)
            .collect();
        assert_eq!(titles, vec!["Terminator", "Die Hard", "Airplane"]);
    }

    #[test]
    fn stale_genre_selection_falls_back_to_all() {
        let mut view = sample_view();
        let comedy = view.genres()[2].clone();
        view.select_genre(&comedy);

        view.replace_snapshot(vec![Genre::new("action", "Action")], Vec::new());
        assert!(view.selected_genre().is_all());
        assert_eq!(view.genres().len(), 2);
    }

    #[test]
    fn dropped_genre_restarts_paging() {
        let mut view = sample_view();
        let action = view.genres()[1].clone();
        view.select_genre(&action);
        view.change_page(2);

        // Genre still present: the page is kept.
        let movies = view.movies().to_vec();
        view.replace_snapshot(vec![action.clone()], movies);
        assert_eq!(view.state().current_page, 2);

        view.replace_snapshot(vec![Genre::new("comedy", "Comedy")], Vec::new());
        assert!(view.state().selected_genre.is_all());
        assert_eq!(view.state().current_page, 1);
    }

    #[test]
    fn header_clicks_toggle_sort_direction() {
        let mut view = sample_view();
        assert_eq!(view.state().sort, SortSpec::ascending(MovieSortField::Title));

        let flipped = view.sort_column(MovieSortField::Title);
        assert_eq!(flipped.order, SortOrder::Descending);

        let other = view.sort_column(MovieSortField::GenreName);
        assert_eq!(other, SortSpec::ascending(MovieSortField::GenreName));

        let titles: Vec<String> = view
            .paged_data()
            .unwrap()
            .items
            .into_iter()
            .map(|m| m.title)
            .collect();
        assert_eq!(titles, vec!["Terminator", "Die Hard", "Airplane"]);
    }

    #[test]
    fn headline_reflects_snapshot_and_count() {
        let view = sample_view();
        assert_eq!(view.headline(3), "Showing 3 movies in the database.");
        assert_eq!(view.page_links(3), Vec::<usize>::new());

        let empty = MoviesView::default();
        assert_eq!(empty.headline(0), "There are no movies in the database.");
    }
}
