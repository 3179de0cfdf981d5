//! Pattern matching and structural analysis over arbitrary slices.
//!
//! Every algorithm works on `&[T]` for any element type and comes in two flavors: `foo` uses the
//! element's own `PartialEq`/`Hash`/`Ord`, `foo_by` takes a comparator (see [`comparator`]).
//! Nothing here allocates beyond per-call working tables, and nothing keeps state between calls.

pub mod comparator;
mod error;
pub mod lis;
pub mod naive;
pub mod prefix;
pub mod rotation;
pub mod search;

pub use comparator::{
  by_key,
  reversed,
  ByKey,
  EqualityComparator,
  HashingComparator,
  Natural,
  OrderComparator,
  Reverse,
};
pub use error::{Error, Result};
pub use lis::{
  longest_increasing_subsequence,
  longest_increasing_subsequence_by,
  longest_increasing_subsequence_indices,
  longest_increasing_subsequence_indices_by,
};
pub use prefix::{
  border_lengths,
  border_lengths_by,
  prefix_function,
  prefix_function_by,
  smallest_period,
  smallest_period_by,
  z_function,
  z_function_by,
};
pub use rotation::{
  booths_minimal_rotation,
  booths_minimal_rotation_by,
  is_rotation,
  is_rotation_by,
  minimal_rotation,
  minimal_rotation_by,
};
pub use search::{
  boyer_moore_horspool_search,
  boyer_moore_horspool_search_by,
  boyer_moore_horspool_search_range,
  boyer_moore_horspool_search_range_by,
  contains,
  count_occurrences,
  knuth_morris_pratt_search,
  knuth_morris_pratt_search_by,
  knuth_morris_pratt_search_range,
  knuth_morris_pratt_search_range_by,
  Horspool,
  Kmp,
};
