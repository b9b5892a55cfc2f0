//! Sort key types for comparing list entries
//!
//! Keys are extracted once per record before ordering, so comparisons never
//! re-derive (or re-allocate) the underlying value.

use ordered_float::OrderedFloat;
use std::cmp::Ordering;

/// Comparable value pulled out of a record for one sort field.
///
/// Only keys produced by the same field are ever compared with each other;
/// the cross-variant ordering exists solely to keep `Ord` total.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SortKey {
    /// Text as written. Byte order, so uppercase sorts before lowercase.
    Text(String),
    Count(u64),
    Amount(OrderedFloat<f64>),
    Flag(bool),
}

impl SortKey {
    pub fn text(value: &str) -> Self {
        SortKey::Text(value.to_owned())
    }

    pub fn count(value: impl Into<u64>) -> Self {
        SortKey::Count(value.into())
    }

    /// Floating point key. NaN sorts after every number.
    pub fn amount(value: f64) -> Self {
        SortKey::Amount(OrderedFloat(value))
    }

    pub fn flag(value: bool) -> Self {
        SortKey::Flag(value)
    }

    /// Compare while honouring a direction flag
    #[inline]
    pub fn compare_with_order(&self, other: &Self, reverse: bool) -> Ordering {
        if reverse {
            other.cmp(self)
        } else {
            self.cmp(other)
        }
    }
}
