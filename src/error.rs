use std::ops::Range;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
  #[error("range start {start} is past its end {end}")]
  InvertedRange { start: usize, end: usize },
  #[error("range end {end} exceeds sequence length {len}")]
  RangeOutOfBounds { end: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

// validates a caller supplied window into a sequence of length `len`
pub(crate) fn check_range(range: &Range<usize>, len: usize) -> Result<()> {
  let err = if range.start > range.end {
    Error::InvertedRange { start: range.start, end: range.end }
  } else if range.end > len {
    Error::RangeOutOfBounds { end: range.end, len }
  } else {
    return Ok(());
  };
  log::debug!("rejecting range {:?} over sequence of length {}: {}", range, len, err);
  Err(err)
}
