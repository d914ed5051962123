//! Hardware capability bitset.
//!
//! [`Caps`] answers one question: "does this target provide every feature an
//! engine variant needs?" Each bit is one ISA extension. The layout is
//! architecture-partitioned but the API is the same everywhere.
//!
//! # Bit Layout
//!
//! - Bits 0-31: x86/x86_64 features
//! - Bits 32-63: aarch64 features
//!
//! # Usage
//!
//! ```
//! use platform::caps::{x86, Caps};
//!
//! let host = x86::SSE2 | x86::SSSE3 | x86::AVX2;
//! assert!(host.has(x86::FAT_TEDDY_READY));
//! assert!(host.has(x86::TEDDY_READY));
//! assert!(!host.has(x86::VBMI_READY));
//! assert!(host.has(Caps::NONE));
//! ```

use core::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Core Capability Type
// ─────────────────────────────────────────────────────────────────────────────

/// Hardware capabilities: a 64-bit feature bitset.
///
/// `Caps` is `Copy`, `Send`, and `Sync`; it is plain data.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Caps(pub(crate) u64);

impl Caps {
  /// Empty capability set. Every target satisfies it.
  pub const NONE: Self = Self(0);

  /// Create a capability set from its raw word.
  ///
  /// Only available in test builds or with the `testing` feature.
  #[cfg(any(test, feature = "testing"))]
  #[inline]
  #[must_use]
  pub const fn from_raw(word: u64) -> Self {
    Self(word)
  }

  /// Raw underlying word.
  #[inline]
  #[must_use]
  pub const fn as_raw(self) -> u64 {
    self.0
  }

  /// Check if all features in `required` are present.
  #[inline(always)]
  #[must_use]
  pub const fn has(self, required: Self) -> bool {
    (self.0 & required.0) == required.0
  }

  /// Union of two capability sets.
  #[inline]
  #[must_use]
  pub const fn union(self, other: Self) -> Self {
    Self(self.0 | other.0)
  }

  /// Intersection of two capability sets.
  #[inline]
  #[must_use]
  pub const fn intersection(self, other: Self) -> Self {
    Self(self.0 & other.0)
  }

  /// Features in `self` that are missing from `other`.
  #[inline]
  #[must_use]
  pub const fn difference(self, other: Self) -> Self {
    Self(self.0 & !other.0)
  }

  #[inline]
  #[must_use]
  pub const fn is_empty(self) -> bool {
    self.0 == 0
  }

  /// Number of features present.
  #[inline]
  #[must_use]
  pub const fn count(self) -> u32 {
    self.0.count_ones()
  }

  /// A capability set with a single bit set.
  ///
  /// Bits above 63 wrap; callers use the named constants below.
  #[inline]
  #[must_use]
  pub const fn bit(bit: u8) -> Self {
    Self(1u64 << (bit % 64))
  }

  #[inline]
  #[must_use]
  pub const fn has_bit(self, bit: u8) -> bool {
    (self.0 & (1u64 << (bit % 64))) != 0
  }

  /// Iterate the names of the known features present in this set.
  pub fn feature_names(self) -> impl Iterator<Item = &'static str> {
    FEATURE_NAMES
      .iter()
      .filter(move |(caps, _)| self.has(*caps))
      .map(|&(_, name)| name)
  }
}

impl core::ops::BitOr for Caps {
  type Output = Self;

  #[inline]
  fn bitor(self, rhs: Self) -> Self::Output {
    self.union(rhs)
  }
}

impl core::ops::BitAnd for Caps {
  type Output = Self;

  #[inline]
  fn bitand(self, rhs: Self) -> Self::Output {
    self.intersection(rhs)
  }
}

impl core::ops::BitOrAssign for Caps {
  #[inline]
  fn bitor_assign(&mut self, rhs: Self) {
    *self = self.union(rhs);
  }
}

impl fmt::Debug for Caps {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_set().entries(self.feature_names()).finish()
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Architecture Identification
// ─────────────────────────────────────────────────────────────────────────────

/// Target architecture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Arch {
  X86_64,
  X86,
  Aarch64,
  #[default]
  Other,
}

impl Arch {
  /// Architecture of the current compilation target.
  #[inline]
  #[must_use]
  pub const fn current() -> Self {
    if cfg!(target_arch = "x86_64") {
      Self::X86_64
    } else if cfg!(target_arch = "x86") {
      Self::X86
    } else if cfg!(target_arch = "aarch64") {
      Self::Aarch64
    } else {
      Self::Other
    }
  }

  #[inline]
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::X86_64 => "x86_64",
      Self::X86 => "x86",
      Self::Aarch64 => "aarch64",
      Self::Other => "other",
    }
  }
}

impl fmt::Display for Arch {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// x86/x86_64 Features (bits 0-31)
// ─────────────────────────────────────────────────────────────────────────────

/// x86/x86_64 features relevant to bucketed literal matching.
pub mod x86 {
  use super::Caps;

  // ─── SSE Family ───
  pub const SSE2: Caps = Caps::bit(0);
  pub const SSSE3: Caps = Caps::bit(1);
  pub const SSE41: Caps = Caps::bit(2);
  pub const SSE42: Caps = Caps::bit(3);
  pub const POPCNT: Caps = Caps::bit(4);

  // ─── AVX Family ───
  pub const AVX: Caps = Caps::bit(5);
  pub const AVX2: Caps = Caps::bit(6);
  pub const BMI2: Caps = Caps::bit(7);

  // ─── AVX-512 ───
  pub const AVX512F: Caps = Caps::bit(8);
  pub const AVX512BW: Caps = Caps::bit(9);
  pub const AVX512VL: Caps = Caps::bit(10);
  pub const AVX512VBMI: Caps = Caps::bit(11);

  // ─── Combined Capability Masks ───

  /// 128-bit byte shuffles: the baseline for 8-bucket Teddy.
  pub const TEDDY_READY: Caps = Caps(SSE2.0 | SSSE3.0);

  /// 256-bit byte shuffles: required for 16-bucket "fat" Teddy.
  pub const FAT_TEDDY_READY: Caps = Caps(TEDDY_READY.0 | AVX2.0);

  /// AVX-512 foundation with byte/word ops.
  pub const AVX512_READY: Caps = Caps(AVX2.0 | AVX512F.0 | AVX512BW.0 | AVX512VL.0);

  /// AVX-512 VBMI permutes on top of [`AVX512_READY`].
  pub const VBMI_READY: Caps = Caps(AVX512_READY.0 | AVX512VBMI.0);
}

// ─────────────────────────────────────────────────────────────────────────────
// aarch64 Features (bits 32-63)
// ─────────────────────────────────────────────────────────────────────────────

/// aarch64 features relevant to bucketed literal matching.
pub mod aarch64 {
  use super::Caps;

  pub const NEON: Caps = Caps::bit(32); // Baseline on AArch64
  pub const SVE: Caps = Caps::bit(33);
  pub const SVE2: Caps = Caps::bit(34);

  /// `tbl`-based nibble shuffles: the baseline for 8-bucket Teddy on Arm.
  pub const TEDDY_READY: Caps = NEON;
}

#[rustfmt::skip]
const FEATURE_NAMES: &[(Caps, &str)] = &[
  (x86::SSE2, "sse2"),
  (x86::SSSE3, "ssse3"),
  (x86::SSE41, "sse4.1"),
  (x86::SSE42, "sse4.2"),
  (x86::POPCNT, "popcnt"),
  (x86::AVX, "avx"),
  (x86::AVX2, "avx2"),
  (x86::BMI2, "bmi2"),
  (x86::AVX512F, "avx512f"),
  (x86::AVX512BW, "avx512bw"),
  (x86::AVX512VL, "avx512vl"),
  (x86::AVX512VBMI, "avx512vbmi"),
  (aarch64::NEON, "neon"),
  (aarch64::SVE, "sve"),
  (aarch64::SVE2, "sve2"),
];
