use super::*;

/// Bad-character shifts, bucketed by the comparator's hash of the element.
/// Each bucket holds `(representative index in the pattern, shift)`.
#[derive(Debug, Clone)]
struct SkipTable {
  buckets: HashMap<u64, Vec<(usize, usize)>>,
  default: usize,
}

/// Boyer-Moore-Horspool searcher for a fixed pattern.
///
/// The skip table is built once in [`Horspool::with_comparator`] and reused for every text.
pub struct Horspool<'p, T, C = Natural> {
  pattern: &'p [T],
  comparator: C,
  skips: SkipTable,
}

// the pattern is borrowed, so only the comparator needs to be cloneable
impl<T, C: Clone> Clone for Horspool<'_, T, C> {
  fn clone(&self) -> Self {
    Self { pattern: self.pattern, comparator: self.comparator.clone(), skips: self.skips.clone() }
  }
}

impl<T, C: fmt::Debug> fmt::Debug for Horspool<'_, T, C> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Horspool")
      .field("pattern_len", &self.pattern.len())
      .field("comparator", &self.comparator)
      .field("skips", &self.skips)
      .finish()
  }
}

impl<'p, T: PartialEq + Hash> Horspool<'p, T> {
  pub fn new(pattern: &'p [T]) -> Self {
    Self::with_comparator(pattern, Natural)
  }
}

impl<'p, T, C: HashingComparator<T>> Horspool<'p, T, C> {
  pub fn with_comparator(pattern: &'p [T], comparator: C) -> Self {
    let k = pattern.len();
    if k == 0 {
      log::trace!("horspool: empty pattern never matches");
    }

    // the last element is left out, so that every shift is >= 1
    let mut buckets: HashMap<u64, Vec<(usize, usize)>> = HashMap::new();
    for (i, element) in pattern.iter().enumerate().take(k.saturating_sub(1)) {
      let bucket = buckets.entry(hash_with(&comparator, element)).or_default();
      let shift = k - 1 - i;
      match bucket.iter_mut().find(|(j, _)| comparator.equals(&pattern[*j], element)) {
        Some((_, existing)) => *existing = shift,
        None => bucket.push((i, shift)),
      }
    }

    Self { pattern, comparator, skips: SkipTable { buckets, default: k } }
  }

  pub fn pattern(&self) -> &'p [T] {
    self.pattern
  }

  /// How far the window moves when `element` is aligned with the last pattern position.
  pub fn shift(&self, element: &T) -> usize {
    let bucket = self.skips.buckets.get(&hash_with(&self.comparator, element));
    bucket
      .and_then(|bucket| bucket.iter().find(|(j, _)| self.comparator.equals(&self.pattern[*j], element)))
      .map_or(self.skips.default, |(_, shift)| *shift)
  }

  /// First occurrence of the pattern in `text`, if any.
  ///
  /// runtime: O(m * k) worst case, sub-linear on average
  pub fn find(&self, text: &[T]) -> Option<usize> {
    self.find_from(text, 0)
  }

  pub fn find_iter<'s, 't>(&'s self, text: &'t [T]) -> HorspoolIter<'s, 't, 'p, T, C> {
    HorspoolIter { searcher: self, text, pos: 0 }
  }

  /// All occurrences, including overlapping ones, in ascending order.
  pub fn find_all(&self, text: &[T]) -> Vec<usize> {
    self.find_iter(text).collect()
  }

  fn find_from(&self, text: &[T], start: usize) -> Option<usize> {
    let k = self.pattern.len();
    if k == 0 {
      return None;
    }
    if k > text.len() {
      log::trace!("horspool: pattern of length {} longer than text of length {}", k, text.len());
      return None;
    }

    let mut pos = start;
    while pos + k <= text.len() {
      let window = &text[pos..pos + k];
      if (0..k).rev().all(|i| self.comparator.equals(&window[i], &self.pattern[i])) {
        return Some(pos);
      }
      pos += self.shift(&window[k - 1]);
    }
    None
  }
}

/// Iterator over the occurrences found by [`Horspool::find_iter`].
pub struct HorspoolIter<'s, 't, 'p, T, C> {
  searcher: &'s Horspool<'p, T, C>,
  text: &'t [T],
  pos: usize,
}

impl<T, C: HashingComparator<T>> Iterator for HorspoolIter<'_, '_, '_, T, C> {
  type Item = usize;

  fn next(&mut self) -> Option<usize> {
    let found = self.searcher.find_from(self.text, self.pos)?;
    // the bad-character shift never jumps over an occurrence, even right after a match
    let last = found + self.searcher.pattern.len() - 1;
    self.pos = found + self.searcher.shift(&self.text[last]);
    Some(found)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::comparator::by_key;
  use test_case::test_case;

  #[test_case("needle", "haystackneedlehaystack", Some(8) ; "needle in haystack")]
  #[test_case("abc", "abc", Some(0) ; "whole text")]
  #[test_case("abc", "xxabxabc", Some(5) ; "at the end")]
  #[test_case("aa", "aaaa", Some(0) ; "first of overlapping")]
  #[test_case("abd", "abcabcabc", None ; "no occ")]
  #[test_case("", "abc", None ; "empty pattern")]
  #[test_case("abcd", "abc", None ; "pattern too long")]
  #[test_case("a", "", None ; "empty text")]
  fn test_find(pattern: &str, text: &str, expected: Option<usize>) {
    assert_eq!(expected, Horspool::new(pattern.as_bytes()).find(text.as_bytes()));
  }

  #[test_case("aba", "ababa", vec![0, 2] ; "overlapping")]
  #[test_case("aa", "aaaa", vec![0, 1, 2] ; "run")]
  #[test_case("ab", "xabxxab", vec![1, 5] ; "disjoint")]
  #[test_case("", "aaa", vec![] ; "empty pattern")]
  fn test_find_all(pattern: &str, text: &str, expected: Vec<usize>) {
    assert_eq!(expected, Horspool::new(pattern.as_bytes()).find_all(text.as_bytes()));
  }

  #[test]
  fn skip_table() {
    let searcher = Horspool::new(b"abcab".as_slice());
    assert_eq!(1, searcher.shift(&b'a'));
    assert_eq!(2, searcher.shift(&b'c'));
    // 'b' at the last position does not count
    assert_eq!(3, searcher.shift(&b'b'));
    assert_eq!(5, searcher.shift(&b'z'));
  }

  #[test]
  fn case_insensitive() {
    let text: Vec<char> = "Hay NEEDLE hay".chars().collect();
    let pattern: Vec<char> = "needle".chars().collect();
    let searcher = Horspool::with_comparator(&pattern, by_key(|c: &char| c.to_ascii_lowercase()));
    assert_eq!(Some(4), searcher.find(&text));
    assert_eq!(None, Horspool::new(&pattern).find(&text));
  }

  // every element lands in the same bucket, so lookups must fall back to the equality
  struct Colliding;

  impl EqualityComparator<u8> for Colliding {
    fn equals(&self, a: &u8, b: &u8) -> bool {
      a == b
    }
  }

  impl HashingComparator<u8> for Colliding {
    fn hash<H: std::hash::Hasher>(&self, _value: &u8, state: &mut H) {
      state.write_u8(0);
    }
  }

  #[derive(PartialEq, Hash)]
  struct Opaque(u8);

  #[test]
  fn clone_without_element_bounds() {
    let pattern = [Opaque(1), Opaque(2)];
    let searcher = Horspool::new(&pattern);
    let copy = searcher.clone();
    assert_eq!(Some(1), copy.find(&[Opaque(0), Opaque(1), Opaque(2)]));
    assert_eq!(searcher.shift(&Opaque(1)), copy.shift(&Opaque(1)));
  }

  #[test]
  fn hash_collisions() {
    let searcher = Horspool::with_comparator(b"abcab".as_slice(), Colliding);
    assert_eq!(1, searcher.shift(&b'a'));
    assert_eq!(2, searcher.shift(&b'c'));
    assert_eq!(5, searcher.shift(&b'z'));
    assert_eq!(vec![2, 5], searcher.find_all(b"xxabcabcab"));
  }
}
