//! Prefix-function and Z-function, plus the period and border queries derived from them.

use crate::comparator::{EqualityComparator, Natural};

pub fn prefix_function<T: PartialEq>(seq: &[T]) -> Vec<usize> {
  prefix_function_by(seq, Natural)
}

/// `res[i]` is the length of the longest proper prefix of `seq[..=i]` that is also a suffix of it.
///
/// runtime: O(n) comparisons, `j` never grows faster than `i`
pub fn prefix_function_by<T, C: EqualityComparator<T>>(seq: &[T], comparator: C) -> Vec<usize> {
  let mut res = vec![0; seq.len()];

  for i in 1..seq.len() {
    let mut j = res[i - 1];
    while j > 0 && !comparator.equals(&seq[i], &seq[j]) {
      j = res[j - 1];
    }
    if comparator.equals(&seq[i], &seq[j]) {
      j += 1;
    }
    res[i] = j;
  }
  res
}

pub fn z_function<T: PartialEq>(seq: &[T]) -> Vec<usize> {
  z_function_by(seq, Natural)
}

/// `res[i]` is the length of the longest common prefix of `seq` and `seq[i..]`.
/// `res[0]` is 0 by convention.
///
/// runtime: O(n), every successful comparison moves the right end of the window
pub fn z_function_by<T, C: EqualityComparator<T>>(seq: &[T], comparator: C) -> Vec<usize> {
  let n = seq.len();
  let mut res = vec![0; n];

  // [left, right) is the rightmost window known to match a prefix of seq
  let (mut left, mut right) = (0, 0);
  for i in 1..n {
    let mut len = if i < right {
      std::cmp::min(res[i - left], right - i)
    } else {
      0
    };
    while i + len < n && comparator.equals(&seq[len], &seq[i + len]) {
      len += 1;
    }
    if i + len > right {
      (left, right) = (i, i + len);
    }
    res[i] = len;
  }
  res
}

pub fn smallest_period<T: PartialEq>(seq: &[T]) -> usize {
  smallest_period_by(seq, Natural)
}

/// Smallest `p > 0` with `seq[i] == seq[i + p]` wherever both exist, 0 for the empty sequence.
/// The period need not divide the length (`abcab` has period 3).
pub fn smallest_period_by<T, C: EqualityComparator<T>>(seq: &[T], comparator: C) -> usize {
  match prefix_function_by(seq, comparator).last() {
    None => 0,
    Some(border) => seq.len() - border,
  }
}

pub fn border_lengths<T: PartialEq>(seq: &[T]) -> Vec<usize> {
  border_lengths_by(seq, Natural)
}

/// All lengths `l < n` with `seq[..l] == seq[n-l..]`, longest first. Always ends with 0
/// unless the sequence is empty.
pub fn border_lengths_by<T, C: EqualityComparator<T>>(seq: &[T], comparator: C) -> Vec<usize> {
  let table = prefix_function_by(seq, comparator);
  let Some(&longest) = table.last() else {
    return vec![];
  };

  // following the failure links from the end enumerates the borders by decreasing length
  std::iter::successors(Some(longest), |&len| {
    if len == 0 { None } else { Some(table[len - 1]) }
  })
  .collect()
}
