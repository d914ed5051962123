//! Candidate literals.
//!
//! A [`Literal`] is a non-empty byte string with an optional and/compare mask
//! over its trailing bytes. Bytes covered by the mask are compared as
//! `(input & msk) == cmp` by the confirmation stage, never by the bucket match.

use alloc::vec::Vec;

use crate::error::LiteralError;

/// Longest supported and/compare mask, in bytes.
pub const MAX_MASK_LEN: usize = 8;

/// A literal to be matched, with optional trailing and/compare mask.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Literal {
  bytes: Vec<u8>,
  id: u32,
  nocase: bool,
  msk: Vec<u8>,
  cmp: Vec<u8>,
}

impl Literal {
  /// Create an unmasked, case-sensitive literal.
  ///
  /// # Errors
  ///
  /// [`LiteralError::Empty`] if `bytes` is empty.
  pub fn new(id: u32, bytes: impl Into<Vec<u8>>) -> Result<Self, LiteralError> {
    let bytes = bytes.into();
    if bytes.is_empty() {
      return Err(LiteralError::Empty);
    }
    Ok(Self {
      bytes,
      id,
      nocase: false,
      msk: Vec::new(),
      cmp: Vec::new(),
    })
  }

  /// Mark the literal as case-insensitive.
  #[must_use]
  pub fn with_nocase(mut self, nocase: bool) -> Self {
    self.nocase = nocase;
    self
  }

  /// Attach an and/compare mask aligned to the end of the literal.
  ///
  /// # Errors
  ///
  /// Fails if the mask is longer than [`MAX_MASK_LEN`] or the literal, if
  /// `msk` and `cmp` differ in length, or if `cmp` sets bits `msk` does not.
  pub fn with_mask(mut self, msk: impl Into<Vec<u8>>, cmp: impl Into<Vec<u8>>) -> Result<Self, LiteralError> {
    let msk = msk.into();
    let cmp = cmp.into();

    if msk.len() != cmp.len() {
      return Err(LiteralError::MaskLengthMismatch {
        msk: msk.len(),
        cmp: cmp.len(),
      });
    }
    if msk.len() > MAX_MASK_LEN {
      return Err(LiteralError::MaskTooLong { len: msk.len() });
    }
    if msk.len() > self.bytes.len() {
      return Err(LiteralError::MaskLongerThanLiteral {
        msk: msk.len(),
        lit: self.bytes.len(),
      });
    }
    if let Some(index) = msk.iter().zip(&cmp).position(|(&m, &c)| c & m != c) {
      return Err(LiteralError::CmpOutsideMask { index });
    }

    self.msk = msk;
    self.cmp = cmp;
    Ok(self)
  }

  #[inline]
  #[must_use]
  pub fn bytes(&self) -> &[u8] {
    &self.bytes
  }

  #[inline]
  #[must_use]
  pub fn id(&self) -> u32 {
    self.id
  }

  #[inline]
  #[must_use]
  pub fn nocase(&self) -> bool {
    self.nocase
  }

  #[inline]
  #[must_use]
  pub fn msk(&self) -> &[u8] {
    &self.msk
  }

  #[inline]
  #[must_use]
  pub fn cmp(&self) -> &[u8] {
    &self.cmp
  }

  /// True if some bytes are excluded from exact comparison.
  #[inline]
  #[must_use]
  pub fn has_mask(&self) -> bool {
    !self.msk.is_empty()
  }

  /// Length in bytes; always at least one.
  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.bytes.len()
  }

  /// Always false: literals are validated non-empty at construction.
  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.bytes.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_literal_rejected() {
    assert_eq!(Literal::new(0, b"".as_slice()), Err(LiteralError::Empty));
  }

  #[test]
  fn plain_literal() {
    let lit = Literal::new(7, b"foo".as_slice()).unwrap();
    assert_eq!(lit.id(), 7);
    assert_eq!(lit.bytes(), b"foo");
    assert_eq!(lit.len(), 3);
    assert!(!lit.is_empty());
    assert!(!lit.has_mask());
    assert!(!lit.nocase());
    assert!(lit.with_nocase(true).nocase());
  }

  #[test]
  fn valid_mask() {
    let lit = Literal::new(1, b"abcd".as_slice())
      .unwrap()
      .with_mask([0xdf, 0xff], [0x40, 0x64])
      .unwrap();
    assert!(lit.has_mask());
    assert_eq!(lit.msk(), [0xdf, 0xff]);
    assert_eq!(lit.cmp(), [0x40, 0x64]);
  }

  #[test]
  fn mask_validation() {
    let lit = Literal::new(1, b"abc".as_slice()).unwrap();
    assert_eq!(
      lit.clone().with_mask([0xff], [0x00, 0x00]),
      Err(LiteralError::MaskLengthMismatch { msk: 1, cmp: 2 })
    );
    assert_eq!(
      lit.clone().with_mask([0xff; 4], [0x00; 4]),
      Err(LiteralError::MaskLongerThanLiteral { msk: 4, lit: 3 })
    );
    assert_eq!(
      lit.clone().with_mask([0xf0, 0xff], [0x0f, 0x00]),
      Err(LiteralError::CmpOutsideMask { index: 0 })
    );

    let long = Literal::new(1, [b'x'; 16].as_slice()).unwrap();
    assert_eq!(
      long.with_mask([0xff; 9], [0x00; 9]),
      Err(LiteralError::MaskTooLong { len: 9 })
    );
  }

  #[test]
  fn empty_mask_is_no_mask() {
    let lit = Literal::new(1, b"abc".as_slice())
      .unwrap()
      .with_mask(Vec::new(), Vec::new())
      .unwrap();
    assert!(!lit.has_mask());
  }
}
