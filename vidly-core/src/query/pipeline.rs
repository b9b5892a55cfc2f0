//! The list processing pipeline: search, genre filter, sort, paginate.

use crate::query::{
    filtering::filter_entries,
    pagination::{ensure_page_size, paginate},
    sorting::{Listable, sort_entries},
    types::{ConfigurationError, PageResult, ViewState},
};
use tracing::debug;

/// Derive one page of `all_items` for the given view state.
///
/// Records are searched by display text, filtered by genre, stably sorted
/// and windowed. `total_count` counts every record that passed the filters,
/// independent of the requested page. The input is never modified; the
/// returned items are clones of the matched records.
///
/// # Errors
///
/// Returns [`ConfigurationError::NonPositivePageSize`] when
/// `state.page_size` is zero.
pub fn compute_page<T: Listable>(
    all_items: &[T],
    state: &ViewState<T::Field>,
) -> Result<PageResult<T>, ConfigurationError> {
    let page_size = ensure_page_size(state.page_size)?;

    let filtered = filter_entries(all_items, state);
    let total_count = filtered.len();

    let sorted = sort_entries(filtered, &state.sort);

    let page = state.effective_page();
    let items: Vec<T> = paginate(&sorted, page, page_size)
        .into_iter()
        .cloned()
        .collect();

    debug!(
        input = all_items.len(),
        matched = total_count,
        page,
        page_size,
        returned = items.len(),
        "computed list page"
    );

    Ok(PageResult { items, total_count })
}
