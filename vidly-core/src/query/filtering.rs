//! Search and genre filtering for list views.
//!
//! Search text is matched case-insensitively against the record's display
//! text only. In [`SearchMode::Literal`] the text is escaped before it reaches
//! the regex engine, so characters such as `(`, `+` or `?` typed into the
//! search box match themselves. [`SearchMode::Pattern`] hands the text to the
//! engine unchanged; a pattern that fails to compile matches nothing.

use crate::query::{
    sorting::Listable,
    types::{SearchMode, ViewState},
};
use regex::{Regex, RegexBuilder};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use tracing::warn;
use vidly_model::GenreID;

/// Compiled form of the search box contents.
#[derive(Debug, Clone)]
pub enum SearchMatcher {
    /// Empty search: every record passes.
    Everything,
    Pattern(Regex),
    /// The pattern could not be compiled.
    Nothing,
}

impl SearchMatcher {
    pub fn new(text: &str, mode: SearchMode) -> Self {
        if text.is_empty() {
            return SearchMatcher::Everything;
        }

        let pattern = match mode {
            SearchMode::Literal => regex::escape(text),
            SearchMode::Pattern => text.to_string(),
        };

        match RegexBuilder::new(&pattern).case_insensitive(true).build() {
            Ok(regex) => SearchMatcher::Pattern(regex),
            Err(err) => {
                warn!(
                    search = text,
                    error = %err,
                    "search pattern rejected; matching nothing"
                );
                SearchMatcher::Nothing
            }
        }
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        match self {
            SearchMatcher::Everything => true,
            SearchMatcher::Pattern(regex) => regex.is_match(haystack),
            SearchMatcher::Nothing => false,
        }
    }
}

/// Genre predicate. The "All Genres" selector lets everything through.
pub fn matches_genre(category: Option<&GenreID>, selected: &GenreID) -> bool {
    selected.is_all() || category == Some(selected)
}

/// Apply search then genre filtering, preserving input order.
pub fn filter_entries<'a, T: Listable>(
    items: &'a [T],
    state: &ViewState<T::Field>,
) -> Vec<&'a T> {
    let matcher = SearchMatcher::new(&state.search, state.search_mode);

    items
        .iter()
        .filter(|item| matcher.is_match(item.display_text()))
        .filter(|item| matches_genre(item.category_id(), &state.selected_genre))
        .collect()
}

/// Compute a stable hash for the filtering part of a view state
///
/// Sort and pagination do not contribute: two states with the same hash
/// select the same set of records, so a changed hash means paging should
/// restart from the first page.
pub fn filter_hash<F>(state: &ViewState<F>) -> u64 {
    let mut hasher = DefaultHasher::new();

    match state.search_mode {
        SearchMode::Literal => state.search.to_lowercase().hash(&mut hasher),
        // Regex case folding is not the same as `to_lowercase`
        SearchMode::Pattern => state.search.hash(&mut hasher),
    }
    state.search_mode.hash(&mut hasher);
    state.selected_genre.hash(&mut hasher);

    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{sorting::MovieSortField, types::SortSpec};

    #[test]
    fn empty_search_matches_everything() {
        let matcher = SearchMatcher::new("", SearchMode::Literal);
        assert!(matcher.is_match(""));
        assert!(matcher.is_match("Terminator"));
    }

    #[test]
    fn literal_search_is_case_insensitive_substring() {
        let matcher = SearchMatcher::new("TERMIN", SearchMode::Literal);
        assert!(matcher.is_match("The Terminator"));
        assert!(!matcher.is_match("Titanic"));
    }

    #[test]
    fn literal_search_escapes_metacharacters() {
        let matcher = SearchMatcher::new("(500", SearchMode::Literal);
        assert!(matcher.is_match("(500) Days of Summer"));
        assert!(!matcher.is_match("500 Days"));

        let dot = SearchMatcher::new("a.c", SearchMode::Literal);
        assert!(!dot.is_match("abc"));
        assert!(dot.is_match("A.C. Slater"));
    }

    #[test]
    fn pattern_search_supports_regex_and_survives_invalid_input() {
        let matcher = SearchMatcher::new("^the", SearchMode::Pattern);
        assert!(matcher.is_match("The Sixth Sense"));
        assert!(!matcher.is_match("Into the Wild"));

        let broken = SearchMatcher::new("(unclosed", SearchMode::Pattern);
        assert!(matches!(broken, SearchMatcher::Nothing));
        assert!(!broken.is_match("(unclosed"));
    }

    #[test]
    fn all_genres_selector_disables_filter() {
        let action = GenreID::from("action");
        assert!(matches_genre(Some(&action), &GenreID::all()));
        assert!(matches_genre(None, &GenreID::all()));
        assert!(matches_genre(Some(&action), &GenreID::from("action")));
        assert!(!matches_genre(Some(&action), &GenreID::from("drama")));
        assert!(!matches_genre(None, &GenreID::from("drama")));
    }

    #[test]
    fn filter_hash_ignores_sort_and_page() {
        let base: ViewState = ViewState {
            search: "Alien".to_string(),
            ..Default::default()
        };
        let paged = ViewState {
            current_page: 7,
            sort: SortSpec::descending(MovieSortField::DailyRentalRate),
            search: "alien".to_string(),
            ..base.clone()
        };
        assert_eq!(filter_hash(&base), filter_hash(&paged));

        let regenred = ViewState {
            selected_genre: GenreID::from("horror"),
            ..base.clone()
        };
        assert_ne!(filter_hash(&base), filter_hash(&regenred));
    }
}
