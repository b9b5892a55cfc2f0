use super::traits::Listable;
use crate::query::types::{SortOrder, SortSpec};

/// Order borrowed entries by `spec`.
///
/// Keys are extracted once per entry. The underlying sort is stable in both
/// directions, so entries with equal keys keep their input order.
pub fn sort_entries<'a, T: Listable>(
    entries: Vec<&'a T>,
    spec: &SortSpec<T::Field>,
) -> Vec<&'a T> {
    let reverse = spec.order == SortOrder::Descending;

    let mut keyed: Vec<_> = entries
        .into_iter()
        .map(|entry| (entry.sort_key(spec.field), entry))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| a.compare_with_order(b, reverse));

    keyed.into_iter().map(|(_, entry)| entry).collect()
}
