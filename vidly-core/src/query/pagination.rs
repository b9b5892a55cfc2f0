//! Page windowing helpers shared by the pipeline and pagination controls.

use crate::query::types::ConfigurationError;

/// Reject a zero page size.
pub fn ensure_page_size(page_size: usize) -> Result<usize, ConfigurationError> {
    if page_size == 0 {
        return Err(ConfigurationError::NonPositivePageSize { page_size });
    }
    Ok(page_size)
}

/// Index of the first entry on the 1-based `page`. Page 0 counts as page 1.
pub fn page_offset(page: usize, page_size: usize) -> usize {
    page.max(1).saturating_sub(1).saturating_mul(page_size)
}

/// Return the entries of the 1-based `page`. Pages past the end are empty.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    let start = page_offset(page, page_size);
    items.iter().skip(start).take(page_size).cloned().collect()
}

/// Number of pages needed to show `total_count` entries.
pub fn page_count(total_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size)
}

/// Page numbers to offer in a pagination control.
///
/// Empty when everything fits on a single page, since the control is hidden
/// in that case.
pub fn page_numbers(total_count: usize, page_size: usize) -> Vec<usize> {
    let pages = page_count(total_count, page_size);
    if pages <= 1 {
        return Vec::new();
    }
    (1..=pages).collect()
}
