//! Literal set statistics consumed by feasibility and scoring.

use crate::{error::SelectError, literal::Literal};

/// Summary of a literal set, computed once per selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LiteralStats {
  /// Number of literals in the set.
  pub count: usize,
  /// Longest literal, in bytes.
  pub max_len: usize,
  /// Longest trailing repeated-byte run over the set.
  pub max_flood_tail: usize,
}

impl LiteralStats {
  /// Compute all statistics in one pass.
  ///
  /// # Errors
  ///
  /// [`SelectError::EmptyLiteralSet`] if `lits` is empty.
  pub fn of(lits: &[Literal]) -> Result<Self, SelectError> {
    if lits.is_empty() {
      return Err(SelectError::EmptyLiteralSet);
    }
    let (max_len, max_flood_tail) = lits.iter().fold((0, 0), |(len, tail), lit| {
      (len.max(lit.len()), tail.max(flood_tail_len(lit.bytes())))
    });
    Ok(Self {
      count: lits.len(),
      max_len,
      max_flood_tail,
    })
  }
}

/// Longest literal in the set, in bytes.
///
/// # Errors
///
/// [`SelectError::EmptyLiteralSet`] if `lits` is empty.
pub fn max_literal_len(lits: &[Literal]) -> Result<usize, SelectError> {
  lits.iter().map(Literal::len).max().ok_or(SelectError::EmptyLiteralSet)
}

/// Longest flood tail over the set; see [`flood_tail_len`].
///
/// # Errors
///
/// [`SelectError::EmptyLiteralSet`] if `lits` is empty.
pub fn max_flood_tail_len(lits: &[Literal]) -> Result<usize, SelectError> {
  lits
    .iter()
    .map(|lit| flood_tail_len(lit.bytes()))
    .max()
    .ok_or(SelectError::EmptyLiteralSet)
}

/// Length of the run of bytes at the end of `s` equal to its last byte.
///
/// The count starts at 1 and grows while the byte in front of the run still
/// matches, so `"aaab"` is 1, `"xaaa"` is 3 and `"aaaa"` is 4. A single byte has
/// nothing in front of it and counts as 0, as does an empty slice.
#[must_use]
pub fn flood_tail_len(s: &[u8]) -> usize {
  let [head @ .., last] = s else {
    return 0;
  };
  if head.is_empty() {
    return 0;
  }
  1 + head.iter().rev().take_while(|&b| b == last).count()
}
