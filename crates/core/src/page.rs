//! Offset/limit pagination
//!
//! Every list query (address spaces, addresses, connections, and the nested
//! connection and link lists) pages its filtered result through
//! [`calc_lower_upper`] and returns a [`Page`] envelope whose `Total` counts
//! the filtered set before slicing.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Half-open index range `[lower, upper)` selected by a page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBounds {
    /// First included index
    pub lower: usize,
    /// One past the last included index
    pub upper: usize,
}

impl PageBounds {
    /// The bounds as a slice range
    pub fn range(&self) -> Range<usize> {
        self.lower..self.upper
    }

    /// Number of selected items
    pub fn len(&self) -> usize {
        self.upper - self.lower
    }

    /// Check if the page selects nothing
    pub fn is_empty(&self) -> bool {
        self.lower == self.upper
    }
}

/// Compute the page bounds for `offset`/`first` over `len` items
///
/// - `offset` absent or non-positive means 0; otherwise clamped to `len`.
/// - `first` absent or non-positive means no limit; otherwise the page ends
///   at `lower + first`, clamped to `len`.
///
/// # Examples
///
/// ```
/// use consolemock_core::calc_lower_upper;
///
/// assert_eq!(calc_lower_upper(None, None, 10).range(), 0..10);
/// assert_eq!(calc_lower_upper(Some(2), Some(3), 10).range(), 2..5);
/// assert_eq!(calc_lower_upper(Some(8), Some(5), 10).range(), 8..10);
/// assert_eq!(calc_lower_upper(Some(20), Some(5), 10).range(), 10..10);
/// assert_eq!(calc_lower_upper(Some(-1), Some(0), 10).range(), 0..10);
/// ```
pub fn calc_lower_upper(offset: Option<i64>, first: Option<i64>, len: usize) -> PageBounds {
    let lower = match offset {
        Some(o) if o > 0 => usize::try_from(o).unwrap_or(usize::MAX).min(len),
        _ => 0,
    };
    let upper = match first {
        Some(f) if f > 0 => lower
            .saturating_add(usize::try_from(f).unwrap_or(usize::MAX))
            .min(len),
        _ => len,
    };
    PageBounds { lower, upper }
}

/// A page of results plus the size of the unpaginated set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Page<T> {
    /// Number of items matching the query before pagination
    pub total: usize,
    /// The selected items, in query order
    pub items: Vec<T>,
}

impl<T> Page<T> {
    /// Slice `all` according to `first`/`offset`
    pub fn paginate(all: Vec<T>, first: Option<i64>, offset: Option<i64>) -> Self {
        let total = all.len();
        let bounds = calc_lower_upper(offset, first, total);
        let items = all
            .into_iter()
            .skip(bounds.lower)
            .take(bounds.len())
            .collect();
        Page { total, items }
    }

    /// Transform every item, keeping the total
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            total: self.total,
            items: self.items.into_iter().map(f).collect(),
        }
    }

    /// Fallible version of [`Page::map`]
    pub fn try_map<U, E>(self, f: impl FnMut(T) -> Result<U, E>) -> Result<Page<U>, E> {
        Ok(Page {
            total: self.total,
            items: self.items.into_iter().map(f).collect::<Result<_, _>>()?,
        })
    }
}
