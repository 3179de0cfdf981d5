//! Pluggable element comparisons.
//!
//! Every algorithm of this crate takes its notion of "equal" or "smaller" as a value.
//! Closures work directly, `Natural` forwards to the element's own impls and `ByKey`
//! compares through a projection (e.g. case-insensitive matching).

use std::cmp::Ordering;
use std::hash::{DefaultHasher, Hash, Hasher};

pub trait EqualityComparator<T: ?Sized> {
  fn equals(&self, a: &T, b: &T) -> bool;
}

/// An equality that can also hash elements.
///
/// Elements that are `equals` must produce the same hash. The Boyer-Moore-Horspool
/// skip table is keyed by these hashes.
pub trait HashingComparator<T: ?Sized>: EqualityComparator<T> {
  fn hash<H: Hasher>(&self, value: &T, state: &mut H);
}

/// A total order on elements.
pub trait OrderComparator<T: ?Sized> {
  fn compare(&self, a: &T, b: &T) -> Ordering;

  fn less(&self, a: &T, b: &T) -> bool {
    self.compare(a, b) == Ordering::Less
  }
}

impl<T: ?Sized, F> EqualityComparator<T> for F
where F: Fn(&T, &T) -> bool
{
  fn equals(&self, a: &T, b: &T) -> bool {
    self(a, b)
  }
}

impl<T: ?Sized, F> OrderComparator<T> for F
where F: Fn(&T, &T) -> Ordering
{
  fn compare(&self, a: &T, b: &T) -> Ordering {
    self(a, b)
  }
}

/// Uses the element's own `PartialEq`, `Hash` and `Ord`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: PartialEq + ?Sized> EqualityComparator<T> for Natural {
  fn equals(&self, a: &T, b: &T) -> bool {
    a == b
  }
}

impl<T: PartialEq + Hash + ?Sized> HashingComparator<T> for Natural {
  fn hash<H: Hasher>(&self, value: &T, state: &mut H) {
    value.hash(state);
  }
}

impl<T: Ord + ?Sized> OrderComparator<T> for Natural {
  fn compare(&self, a: &T, b: &T) -> Ordering {
    a.cmp(b)
  }
}

/// Compares elements by the key `F` extracts from them.
#[derive(Clone, Copy, Debug)]
pub struct ByKey<F>(pub F);

pub fn by_key<T: ?Sized, K, F>(key: F) -> ByKey<F>
where F: Fn(&T) -> K
{
  ByKey(key)
}

impl<T: ?Sized, K: PartialEq, F> EqualityComparator<T> for ByKey<F>
where F: Fn(&T) -> K
{
  fn equals(&self, a: &T, b: &T) -> bool {
    (self.0)(a) == (self.0)(b)
  }
}

impl<T: ?Sized, K: PartialEq + Hash, F> HashingComparator<T> for ByKey<F>
where F: Fn(&T) -> K
{
  fn hash<H: Hasher>(&self, value: &T, state: &mut H) {
    (self.0)(value).hash(state);
  }
}

impl<T: ?Sized, K: Ord, F> OrderComparator<T> for ByKey<F>
where F: Fn(&T) -> K
{
  fn compare(&self, a: &T, b: &T) -> Ordering {
    (self.0)(a).cmp(&(self.0)(b))
  }
}

/// Flips an order: the longest increasing subsequence becomes the longest decreasing one,
/// the minimal rotation becomes the maximal one.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reverse<C>(pub C);

pub fn reversed<C>(comparator: C) -> Reverse<C> {
  Reverse(comparator)
}

impl<T: ?Sized, C: OrderComparator<T>> OrderComparator<T> for Reverse<C> {
  fn compare(&self, a: &T, b: &T) -> Ordering {
    self.0.compare(b, a)
  }
}

// hashes `value` the way `comparator` sees it
pub(crate) fn hash_with<T: ?Sized, C: HashingComparator<T>>(comparator: &C, value: &T) -> u64 {
  let mut hasher = DefaultHasher::new();
  comparator.hash(value, &mut hasher);
  hasher.finish()
}

#[cfg(test)]
mod tests {
  use super::*;
  use test_case::test_case;

  #[test_case('a', 'A', true ; "case folded")]
  #[test_case('a', 'b', false ; "different letters")]
  fn by_key_equality(a: char, b: char, expected: bool) {
    let cmp = by_key(|c: &char| c.to_ascii_lowercase());
    assert_eq!(expected, cmp.equals(&a, &b));
    if expected {
      assert_eq!(hash_with(&cmp, &a), hash_with(&cmp, &b));
    }
  }

  #[test]
  fn closures_are_comparators() {
    let eq = |a: &i32, b: &i32| (a - b).abs() <= 1;
    assert!(eq.equals(&3, &4));
    assert!(!eq.equals(&3, &5));

    let ord = |a: &i32, b: &i32| b.cmp(a);
    assert_eq!(Ordering::Greater, ord.compare(&1, &2));
    assert!(ord.less(&2, &1));
  }

  #[test]
  fn reverse_flips_natural_order() {
    assert_eq!(Ordering::Less, Natural.compare(&1, &2));
    assert_eq!(Ordering::Greater, reversed(Natural).compare(&1, &2));
    assert_eq!(Ordering::Equal, reversed(Natural).compare(&"x", &"x"));
  }
}
