//! Brute-force versions of the algorithms in this crate.
//! They are quadratic (or worse) and only meant as oracles for tests and benchmarks.

use itertools::Itertools;

// runtime O(n^2)
pub fn z_function<A: PartialEq>(s: &[A]) -> Vec<usize> {
  (0..s.len())
    .map(|i| if i == 0 { 0 } else { common_prefix(s, &s[i..]) })
    .collect()
}

// runtime O(n^3)
pub fn prefix_function<A: PartialEq>(s: &[A]) -> Vec<usize> {
  (0..s.len())
    .map(|i| {
      let window = &s[..=i];
      // a border is proper, so at most i long
      (0..=i).rev().find(|&len| window[..len] == window[i + 1 - len..]).unwrap_or(0)
    })
    .collect()
}

pub fn find_all<A: PartialEq>(text: &[A], pattern: &[A]) -> Vec<usize> {
  if pattern.is_empty() {
    return vec![];
  }
  text.windows(pattern.len()).positions(|window| window == pattern).collect()
}

pub fn find_first<A: PartialEq>(text: &[A], pattern: &[A]) -> Option<usize> {
  find_all(text, pattern).first().copied()
}

// compares all n rotations, returns the first minimal one
pub fn minimal_rotation<A: Ord>(s: &[A]) -> usize {
  (0..s.len())
    .position_min_by(|&i, &j| s[i..].iter().chain(&s[..i]).cmp(s[j..].iter().chain(&s[..j])))
    .unwrap_or(0)
}

// quadratic dynamic program over "longest strictly increasing run ending at i"
pub fn longest_increasing_subsequence_len<A: Ord>(s: &[A]) -> usize {
  let mut best: Vec<usize> = vec![1; s.len()];
  for i in 0..s.len() {
    for j in 0..i {
      if s[j] < s[i] {
        best[i] = best[i].max(best[j] + 1);
      }
    }
  }
  best.into_iter().max().unwrap_or(0)
}

fn common_prefix<A: PartialEq>(a: &[A], b: &[A]) -> usize {
  a.iter().zip(b).take_while(|(x, y)| x == y).count()
}
