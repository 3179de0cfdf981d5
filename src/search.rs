//! Exact substring search: Boyer-Moore-Horspool for the first occurrence,
//! Knuth-Morris-Pratt for all of them.
//!
//! The free functions build a throwaway searcher per call. Keep a [`Horspool`] or [`Kmp`]
//! around to search many texts for the same pattern.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::ops::Range;

use crate::comparator::{hash_with, EqualityComparator, HashingComparator, Natural};
use crate::error::{check_range, Result};
use crate::prefix::prefix_function_by;

mod horspool;
pub use horspool::{Horspool, HorspoolIter};

mod kmp;
pub use kmp::{Kmp, KmpIter};

pub fn boyer_moore_horspool_search<T: PartialEq + Hash>(text: &[T], pattern: &[T]) -> Option<usize> {
  Horspool::new(pattern).find(text)
}

/// Index of the first occurrence of `pattern` in `text`, `None` if there is none or the
/// pattern is empty.
///
/// The skip table hashes elements, so a plain equality closure is not enough: pass
/// [`Natural`] or a [`by_key`](crate::comparator::by_key) projection.
pub fn boyer_moore_horspool_search_by<T, C: HashingComparator<T>>(text: &[T], pattern: &[T], comparator: C) -> Option<usize> {
  Horspool::with_comparator(pattern, comparator).find(text)
}

pub fn boyer_moore_horspool_search_range<T: PartialEq + Hash>(text: &[T], range: Range<usize>, pattern: &[T]) -> Result<Option<usize>> {
  boyer_moore_horspool_search_range_by(text, range, pattern, Natural)
}

/// Like [`boyer_moore_horspool_search_by`], restricted to `text[range]`.
/// The returned index is relative to the whole `text`.
pub fn boyer_moore_horspool_search_range_by<T, C: HashingComparator<T>>(
  text: &[T],
  range: Range<usize>,
  pattern: &[T],
  comparator: C,
) -> Result<Option<usize>> {
  check_range(&range, text.len())?;
  let offset = range.start;
  Ok(boyer_moore_horspool_search_by(&text[range], pattern, comparator).map(|i| i + offset))
}

pub fn knuth_morris_pratt_search<T: PartialEq>(text: &[T], pattern: &[T]) -> Vec<usize> {
  Kmp::new(pattern).find_all(text)
}

/// Starting indices of all (possibly overlapping) occurrences of `pattern` in `text`, ascending.
/// Empty if there are none or the pattern is empty.
pub fn knuth_morris_pratt_search_by<T, C: EqualityComparator<T>>(text: &[T], pattern: &[T], comparator: C) -> Vec<usize> {
  Kmp::with_comparator(pattern, comparator).find_all(text)
}

pub fn knuth_morris_pratt_search_range<T: PartialEq>(text: &[T], range: Range<usize>, pattern: &[T]) -> Result<Vec<usize>> {
  knuth_morris_pratt_search_range_by(text, range, pattern, Natural)
}

/// Like [`knuth_morris_pratt_search_by`], restricted to `text[range]`.
/// Only occurrences lying entirely inside the range are reported, with indices relative to `text`.
pub fn knuth_morris_pratt_search_range_by<T, C: EqualityComparator<T>>(
  text: &[T],
  range: Range<usize>,
  pattern: &[T],
  comparator: C,
) -> Result<Vec<usize>> {
  check_range(&range, text.len())?;
  let offset = range.start;
  let mut res = knuth_morris_pratt_search_by(&text[range], pattern, comparator);
  res.iter_mut().for_each(|i| *i += offset);
  Ok(res)
}

pub fn contains<T: PartialEq>(text: &[T], pattern: &[T]) -> bool {
  Kmp::new(pattern).find(text).is_some()
}

pub fn count_occurrences<T: PartialEq>(text: &[T], pattern: &[T]) -> usize {
  Kmp::new(pattern).find_iter(text).count()
}
