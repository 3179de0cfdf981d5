use super::*;

/// Knuth-Morris-Pratt searcher for a fixed pattern.
pub struct Kmp<'p, T, C = Natural> {
  pattern: &'p [T],
  comparator: C,
  failure: Vec<usize>,
}

// the pattern is borrowed, so only the comparator needs to be cloneable
impl<T, C: Clone> Clone for Kmp<'_, T, C> {
  fn clone(&self) -> Self {
    Self { pattern: self.pattern, comparator: self.comparator.clone(), failure: self.failure.clone() }
  }
}

impl<T, C: fmt::Debug> fmt::Debug for Kmp<'_, T, C> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Kmp")
      .field("pattern_len", &self.pattern.len())
      .field("comparator", &self.comparator)
      .field("failure", &self.failure)
      .finish()
  }
}

impl<'p, T: PartialEq> Kmp<'p, T> {
  pub fn new(pattern: &'p [T]) -> Self {
    Self::with_comparator(pattern, Natural)
  }
}

impl<'p, T, C: EqualityComparator<T>> Kmp<'p, T, C> {
  pub fn with_comparator(pattern: &'p [T], comparator: C) -> Self {
    if pattern.is_empty() {
      log::trace!("kmp: empty pattern never matches");
    }
    let failure = prefix_function_by(pattern, |a: &T, b: &T| comparator.equals(a, b));
    Self { pattern, comparator, failure }
  }

  pub fn pattern(&self) -> &'p [T] {
    self.pattern
  }

  /// The prefix-function of the pattern: `failure_table()[i]` is where matching resumes
  /// after `i + 1` pattern elements matched and the next one did not.
  pub fn failure_table(&self) -> &[usize] {
    &self.failure
  }

  pub fn find(&self, text: &[T]) -> Option<usize> {
    self.find_iter(text).next()
  }

  /// All occurrences, overlapping ones included, in ascending order.
  ///
  /// runtime: O(m + k)
  pub fn find_all(&self, text: &[T]) -> Vec<usize> {
    if self.pattern.len() > text.len() {
      log::trace!("kmp: pattern of length {} longer than text of length {}", self.pattern.len(), text.len());
      return vec![];
    }
    self.find_iter(text).collect()
  }

  pub fn find_iter<'s, 't>(&'s self, text: &'t [T]) -> KmpIter<'s, 't, 'p, T, C> {
    KmpIter { searcher: self, text, text_index: 0, pattern_index: 0 }
  }
}

/// Lazy iterator over the occurrences found by [`Kmp::find_iter`].
pub struct KmpIter<'s, 't, 'p, T, C> {
  searcher: &'s Kmp<'p, T, C>,
  text: &'t [T],
  text_index: usize,
  pattern_index: usize,
}

impl<T, C: EqualityComparator<T>> Iterator for KmpIter<'_, '_, '_, T, C> {
  type Item = usize;

  fn next(&mut self) -> Option<usize> {
    let pattern = self.searcher.pattern;
    if pattern.is_empty() {
      return None;
    }

    while self.text_index < self.text.len() {
      if self.searcher.comparator.equals(&self.text[self.text_index], &pattern[self.pattern_index]) {
        self.text_index += 1;
        self.pattern_index += 1;

        if self.pattern_index == pattern.len() {
          // resume on the longest border, so overlapping occurrences are found as well
          self.pattern_index = self.searcher.failure[pattern.len() - 1];
          return Some(self.text_index - pattern.len());
        }
      } else if self.pattern_index > 0 {
        self.pattern_index = self.searcher.failure[self.pattern_index - 1];
      } else {
        self.text_index += 1;
      }
    }
    None
  }
}
