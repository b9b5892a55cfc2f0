//! Core traits for sortable list entries
//!
//! Every record type shown in a list view implements [`Listable`] so the
//! pipeline can search, filter, and order it without knowing its concrete
//! shape. The permitted sort columns are a closed [`SortableField`] set per
//! record type, so an unknown column is rejected when the path is parsed
//! rather than when the list is rendered.

use super::keys::SortKey;
use vidly_model::GenreID;

/// Closed set of columns a record type can be ordered by.
pub trait SortableField:
    Copy + Eq + std::fmt::Debug + Send + Sync + 'static
{
    /// Every permitted field, in column order.
    const ALL: &'static [Self];

    /// Column path used by the presentation layer (e.g. `"genre.name"`).
    fn path(&self) -> &'static str;

    /// Resolve a column path to a field, `None` when it is not sortable.
    fn from_path(path: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.path() == path)
    }
}

/// A record the list pipeline can process.
pub trait Listable: Clone {
    /// The columns this record can be sorted by.
    type Field: SortableField;

    /// Text matched by the search box.
    fn display_text(&self) -> &str;

    /// Category the record belongs to, if any.
    fn category_id(&self) -> Option<&GenreID>;

    /// Extract the comparison key for `field`.
    fn sort_key(&self, field: Self::Field) -> SortKey;
}
