//! Error types for literal construction and engine selection.
//!
//! "No usable engine" is not an error: selection returns `Ok(None)` and the
//! caller falls back to another matching strategy.

use thiserror::Error;

use crate::literal::MAX_MASK_LEN;

/// Engine selection was handed input it cannot reason about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[non_exhaustive]
pub enum SelectError {
  /// The literal set was empty. Selection needs at least one literal.
  #[error("literal set is empty")]
  EmptyLiteralSet,
}

/// A literal failed validation at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[non_exhaustive]
pub enum LiteralError {
  #[error("literal has no bytes")]
  Empty,

  #[error("mask is {len} bytes, at most {MAX_MASK_LEN} are supported")]
  MaskTooLong { len: usize },

  #[error("mask is {msk} bytes but compare is {cmp} bytes")]
  MaskLengthMismatch { msk: usize, cmp: usize },

  #[error("mask is {msk} bytes but literal is only {lit} bytes")]
  MaskLongerThanLiteral { msk: usize, lit: usize },

  /// `cmp` has a bit set that `msk` does not select.
  #[error("compare byte {index} has bits outside the mask")]
  CmpOutsideMask { index: usize },
}
