//! Cyclic rotations: Booth's least rotation, normalization and rotation detection.

use std::cmp::Ordering;

use crate::comparator::{EqualityComparator, Natural, OrderComparator};
use crate::search::Kmp;

pub fn booths_minimal_rotation<T: Ord>(seq: &[T]) -> usize {
  booths_minimal_rotation_by(seq, Natural)
}

/// Start index of the lexicographically least rotation of `seq` (0 for an empty sequence).
/// Among equal least rotations the lowest index wins.
///
/// runtime: O(n), a KMP failure function over `seq ++ seq`
pub fn booths_minimal_rotation_by<T, C: OrderComparator<T>>(seq: &[T], comparator: C) -> usize {
  let n = seq.len();
  if n == 0 {
    log::trace!("booth: empty sequence");
    return 0;
  }

  let doubled: Vec<&T> = seq.iter().chain(seq).collect();
  // failure[d] is the border length (minus one) of the candidate rotation's first d + 1 elements
  let mut failure: Vec<Option<usize>> = vec![None; 2 * n];
  let mut k = 0;

  for j in 1..2 * n {
    let mut i = failure[j - k - 1];
    while let Some(border) = i {
      match comparator.compare(doubled[j], doubled[k + border + 1]) {
        Ordering::Equal => break,
        Ordering::Less => k = j - border - 1,
        Ordering::Greater => {}
      }
      i = failure[border];
    }

    match i {
      Some(border) => failure[j - k] = Some(border + 1),
      None => match comparator.compare(doubled[j], doubled[k]) {
        Ordering::Equal => failure[j - k] = Some(0),
        Ordering::Less => {
          k = j;
          failure[0] = None;
        }
        Ordering::Greater => failure[j - k] = None,
      },
    }
  }

  debug_assert!(k < n);
  k
}

pub fn minimal_rotation<T: Ord + Clone>(seq: &[T]) -> Vec<T> {
  minimal_rotation_by(seq, Natural)
}

/// The least rotation itself, e.g. `abc` for `bca`.
pub fn minimal_rotation_by<T: Clone, C: OrderComparator<T>>(seq: &[T], comparator: C) -> Vec<T> {
  let k = booths_minimal_rotation_by(seq, comparator);
  seq[k..].iter().chain(&seq[..k]).cloned().collect()
}

pub fn is_rotation<T: PartialEq>(a: &[T], b: &[T]) -> bool {
  is_rotation_by(a, b, Natural)
}

/// Whether `b` is `a` rotated by some amount. Two empty sequences are rotations of each other.
pub fn is_rotation_by<T, C: EqualityComparator<T>>(a: &[T], b: &[T], comparator: C) -> bool {
  if a.len() != b.len() {
    return false;
  }
  if a.is_empty() {
    return true;
  }

  // every rotation of `a` is a window of `a ++ a` without its last element
  let doubled: Vec<&T> = a.iter().chain(a).take(2 * a.len() - 1).collect();
  let pattern: Vec<&T> = b.iter().collect();
  Kmp::with_comparator(&pattern, |x: &&T, y: &&T| comparator.equals(x, y))
    .find(&doubled)
    .is_some()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::comparator::{by_key, reversed};
  use crate::naive;
  use rand::{distributions::Uniform, rngs::StdRng, Rng, SeedableRng};
  use test_case::test_case;

  #[test_case("bca", 2 ; "abc starts at index 2")]
  #[test_case("", 0 ; "empty")]
  #[test_case("z", 0 ; "single")]
  #[test_case("aaaa", 0 ; "constant")]
  #[test_case("abab", 0 ; "periodic picks lowest index")]
  #[test_case("baba", 1 ; "periodic shifted")]
  #[test_case("cbaab", 2 ; "least starts inside")]
  #[test_case("bbaaccaadd", 2 ; "competing candidates")]
  fn test_booth(s: &str, expected: usize) {
    assert_eq!(expected, booths_minimal_rotation(s.as_bytes()));
  }

  #[test]
  fn reversed_order_finds_maximal_rotation() {
    assert_eq!(1, booths_minimal_rotation_by(b"bca", reversed(Natural)));
  }

  #[test]
  fn normalized_rotation() {
    assert_eq!(b"abc".to_vec(), minimal_rotation(b"bca"));
    assert_eq!(b"aab".to_vec(), minimal_rotation(b"aba"));
    assert!(minimal_rotation::<u8>(&[]).is_empty());
  }

  #[test]
  fn random_against_naive() {
    let mut rng = StdRng::seed_from_u64(5);
    let letters = Uniform::new(b'a', b'd');
    for _ in 0..300 {
      let s: Vec<u8> = (0..rng.gen_range(0..30)).map(|_| rng.sample(letters)).collect();
      let k = booths_minimal_rotation(&s);
      assert_eq!(naive::minimal_rotation(&s), k, "{:?}", s);
      assert_eq!(k, booths_minimal_rotation(&s));
    }
  }

  #[test_case("abcde", "cdeab", true ; "rotated")]
  #[test_case("abcde", "abcde", true ; "identity")]
  #[test_case("abcde", "abced", false ; "permuted")]
  #[test_case("abc", "abca", false ; "different lengths")]
  #[test_case("", "", true ; "both empty")]
  #[test_case("aab", "aba", true ; "repeated letters")]
  fn test_is_rotation(a: &str, b: &str, expected: bool) {
    assert_eq!(expected, is_rotation(a.as_bytes(), b.as_bytes()));
  }

  #[test]
  fn rotation_ignoring_case() {
    let a: Vec<char> = "Rust".chars().collect();
    let b: Vec<char> = "STru".chars().collect();
    assert!(is_rotation_by(&a, &b, by_key(|c: &char| c.to_ascii_lowercase())));
    assert!(!is_rotation(&a, &b));
  }
}
