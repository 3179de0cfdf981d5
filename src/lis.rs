//! Longest strictly increasing subsequence by patience sorting.

use std::cmp::Ordering;

use crate::comparator::{Natural, OrderComparator};

pub fn longest_increasing_subsequence<T: Ord + Clone>(seq: &[T]) -> Vec<T> {
  longest_increasing_subsequence_by(seq, Natural)
}

/// A longest subsequence of `seq` that is strictly increasing under `comparator`.
/// Equal elements never both appear. Empty for an empty input.
pub fn longest_increasing_subsequence_by<T: Clone, C: OrderComparator<T>>(seq: &[T], comparator: C) -> Vec<T> {
  longest_increasing_subsequence_indices_by(seq, comparator)
    .into_iter()
    .map(|i| seq[i].clone())
    .collect()
}

pub fn longest_increasing_subsequence_indices<T: Ord>(seq: &[T]) -> Vec<usize> {
  longest_increasing_subsequence_indices_by(seq, Natural)
}

/// Indices (ascending) of the elements picked by [`longest_increasing_subsequence_by`].
///
/// `tails[l]` is the index of the smallest element ending an increasing subsequence of
/// length `l + 1` seen so far. The tails are increasing, so each element finds its pile
/// by binary search. When several answers exist, the one ending in the final top of the
/// last pile is returned, following the predecessors recorded when each element was placed.
///
/// runtime: O(n log n)
pub fn longest_increasing_subsequence_indices_by<T, C: OrderComparator<T>>(seq: &[T], comparator: C) -> Vec<usize> {
  if seq.is_empty() {
    log::trace!("lis: empty sequence");
    return vec![];
  }

  let mut tails: Vec<usize> = Vec::with_capacity(seq.len());
  let mut predecessor: Vec<Option<usize>> = vec![None; seq.len()];

  for (i, element) in seq.iter().enumerate() {
    // first pile whose top is >= element
    let pile = tails.partition_point(|&top| comparator.compare(&seq[top], element) == Ordering::Less);
    predecessor[i] = pile.checked_sub(1).map(|p| tails[p]);
    if pile == tails.len() {
      tails.push(i);
    } else {
      tails[pile] = i;
    }
  }

  let mut res: Vec<usize> = std::iter::successors(tails.last().copied(), |&i| predecessor[i]).collect();
  res.reverse();
  res
}
