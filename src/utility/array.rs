//! Slice helpers.

use std::collections::HashSet;
use std::hash::Hash;

/// First element.
#[inline]
pub fn head<T>(items: &[T]) -> Option<&T> {
    items.first()
}

/// Every element but the first; empty for an empty slice.
#[inline]
pub fn tail<T>(items: &[T]) -> &[T] {
    items.split_first().map(|(_, rest)| rest).unwrap_or_default()
}

/// Last element.
#[inline]
pub fn last<T>(items: &[T]) -> Option<&T> {
    items.last()
}

/// Every element but the last; empty for an empty slice.
#[inline]
pub fn init<T>(items: &[T]) -> &[T] {
    items.split_last().map(|(_, rest)| rest).unwrap_or_default()
}

/// Integers from `start` up to, not including, `end`.
///
/// Empty when `start >= end`.
pub fn range(start: i64, end: i64) -> Vec<i64> {
    (start..end).collect()
}

/// Distinct elements in order of first occurrence.
///
/// ```rust
/// use fnkit::utility::array::uniq;
///
/// assert_eq!(uniq(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
/// ```
pub fn uniq<T>(items: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// Splits pairs into two vectors.
pub fn unzip<A, B, I>(pairs: I) -> (Vec<A>, Vec<B>)
where
    I: IntoIterator<Item = (A, B)>,
{
    pairs.into_iter().unzip()
}
