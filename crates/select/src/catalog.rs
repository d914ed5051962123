//! Engine descriptions and the built-in Teddy catalog.
//!
//! An [`EngineDescription`] names one concrete bucketed matching kernel: how
//! many buckets it has, what the target must provide to run it, and the
//! variant-specific shape of its matching scheme. Descriptions are plain
//! `Copy` values; the catalog is a `static` table and never changes.
//!
//! # Catalog Layout
//!
//! | ids | Kernel | Buckets | Requires |
//! |-----|--------|---------|----------|
//! | 1-8 | Teddy | 8 | SSSE3 |
//! | 9-16 | Fat Teddy | 16 | AVX2 |
//! | 17-24 | Teddy (NEON) | 8 | NEON |
//!
//! Within each group masks run 1..=4, each unpacked then packed.

use core::fmt;

use platform::{
  caps::{aarch64, x86},
  Caps, Target,
};

// ─────────────────────────────────────────────────────────────────────────────
// Descriptions
// ─────────────────────────────────────────────────────────────────────────────

/// Shape of a Teddy kernel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TeddyParams {
  /// Trailing byte positions examined per literal. Always at least 1.
  pub num_masks: u32,
  /// Packed kernels let several literals share a bucket.
  pub packed: bool,
}

/// Variant-specific part of an engine description.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum EngineVariant {
  Teddy(TeddyParams),
}

/// One concrete matching-engine variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EngineDescription {
  id: u32,
  required_caps: Caps,
  num_buckets: u32,
  confirm_pull_back_distance: u32,
  confirm_top_level_split: u32,
  variant: EngineVariant,
}

impl EngineDescription {
  /// Describe a Teddy kernel.
  ///
  /// `num_masks` and `num_buckets` must both be at least 1.
  #[must_use]
  pub const fn teddy(id: u32, required_caps: Caps, num_buckets: u32, num_masks: u32, packed: bool) -> Self {
    debug_assert!(num_buckets >= 1, "teddy kernel needs at least one bucket");
    debug_assert!(num_masks >= 1, "teddy kernel needs at least one mask");
    Self {
      id,
      required_caps,
      num_buckets,
      confirm_pull_back_distance: 0,
      confirm_top_level_split: 1,
      variant: EngineVariant::Teddy(TeddyParams { num_masks, packed }),
    }
  }

  /// At least one bucket and one mask.
  #[inline]
  #[must_use]
  pub const fn is_well_formed(&self) -> bool {
    match self.variant {
      EngineVariant::Teddy(p) => self.num_buckets >= 1 && p.num_masks >= 1,
    }
  }

  /// Override the confirmation tuning carried for the confirm-table builder.
  #[must_use]
  pub const fn with_confirm(mut self, pull_back_distance: u32, top_level_split: u32) -> Self {
    self.confirm_pull_back_distance = pull_back_distance;
    self.confirm_top_level_split = top_level_split;
    self
  }

  #[inline]
  #[must_use]
  pub const fn id(&self) -> u32 {
    self.id
  }

  #[inline]
  #[must_use]
  pub const fn required_caps(&self) -> Caps {
    self.required_caps
  }

  #[inline]
  #[must_use]
  pub const fn num_buckets(&self) -> u32 {
    self.num_buckets
  }

  #[inline]
  #[must_use]
  pub const fn confirm_pull_back_distance(&self) -> u32 {
    self.confirm_pull_back_distance
  }

  #[inline]
  #[must_use]
  pub const fn confirm_top_level_split(&self) -> u32 {
    self.confirm_top_level_split
  }

  #[inline]
  #[must_use]
  pub const fn variant(&self) -> EngineVariant {
    self.variant
  }

  /// Teddy shape, if this is a Teddy kernel.
  #[inline]
  #[must_use]
  pub const fn teddy_params(&self) -> Option<TeddyParams> {
    match self.variant {
      EngineVariant::Teddy(p) => Some(p),
    }
  }

  /// True if `target` provides everything this engine needs.
  #[inline]
  #[must_use]
  pub const fn is_valid_on_target(&self, target: &Target) -> bool {
    target.is_valid_for(self.required_caps)
  }

  /// Default length of the flood-detection suffix for this engine.
  ///
  /// Teddy looks at `num_masks` trailing bytes, so floods shorter than that
  /// cannot stall it.
  #[inline]
  #[must_use]
  pub const fn default_flood_suffix_length(&self) -> u32 {
    match self.variant {
      EngineVariant::Teddy(p) => p.num_masks,
    }
  }

  /// Kernel family label used in diagnostics.
  #[must_use]
  pub const fn family_name(&self) -> &'static str {
    match self.variant {
      EngineVariant::Teddy(_) if self.num_buckets > 8 => "fat-teddy",
      EngineVariant::Teddy(_) => "teddy",
    }
  }
}

impl fmt::Display for EngineDescription {
  /// `teddy#3 m2/b8`, with a `/packed` suffix for packed kernels.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}#{}", self.family_name(), self.id)?;
    match self.variant {
      EngineVariant::Teddy(p) => {
        write!(f, " m{}/b{}", p.num_masks, self.num_buckets)?;
        if p.packed {
          f.write_str("/packed")?;
        }
      }
    }
    Ok(())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Built-in Catalog
// ─────────────────────────────────────────────────────────────────────────────

const fn teddy(id: u32, caps: Caps, buckets: u32, masks: u32, packed: bool) -> EngineDescription {
  EngineDescription::teddy(id, caps, buckets, masks, packed)
}

/// Every Teddy kernel this build knows how to construct.
pub static TEDDY_ENGINES: [EngineDescription; 24] = ENGINES;

const fn all_well_formed(mut table: &[EngineDescription]) -> bool {
  while let [head, rest @ ..] = table {
    if !head.is_well_formed() {
      return false;
    }
    table = rest;
  }
  true
}

const _: () = assert!(all_well_formed(&ENGINES), "malformed entry in TEDDY_ENGINES");

#[rustfmt::skip]
const ENGINES: [EngineDescription; 24] = [
  // ─── 128-bit Teddy (SSSE3) ───
  teddy(1,  x86::TEDDY_READY,      8,  1, false),
  teddy(2,  x86::TEDDY_READY,      8,  1, true),
  teddy(3,  x86::TEDDY_READY,      8,  2, false),
  teddy(4,  x86::TEDDY_READY,      8,  2, true),
  teddy(5,  x86::TEDDY_READY,      8,  3, false),
  teddy(6,  x86::TEDDY_READY,      8,  3, true),
  teddy(7,  x86::TEDDY_READY,      8,  4, false),
  teddy(8,  x86::TEDDY_READY,      8,  4, true),

  // ─── 256-bit Fat Teddy (AVX2) ───
  teddy(9,  x86::FAT_TEDDY_READY,  16, 1, false),
  teddy(10, x86::FAT_TEDDY_READY,  16, 1, true),
  teddy(11, x86::FAT_TEDDY_READY,  16, 2, false),
  teddy(12, x86::FAT_TEDDY_READY,  16, 2, true),
  teddy(13, x86::FAT_TEDDY_READY,  16, 3, false),
  teddy(14, x86::FAT_TEDDY_READY,  16, 3, true),
  teddy(15, x86::FAT_TEDDY_READY,  16, 4, false),
  teddy(16, x86::FAT_TEDDY_READY,  16, 4, true),

  // ─── 128-bit Teddy (NEON) ───
  teddy(17, aarch64::TEDDY_READY,  8,  1, false),
  teddy(18, aarch64::TEDDY_READY,  8,  1, true),
  teddy(19, aarch64::TEDDY_READY,  8,  2, false),
  teddy(20, aarch64::TEDDY_READY,  8,  2, true),
  teddy(21, aarch64::TEDDY_READY,  8,  3, false),
  teddy(22, aarch64::TEDDY_READY,  8,  3, true),
  teddy(23, aarch64::TEDDY_READY,  8,  4, false),
  teddy(24, aarch64::TEDDY_READY,  8,  4, true),
];

/// The built-in catalog, in selection order.
#[inline]
#[must_use]
pub fn catalog() -> &'static [EngineDescription] {
  &TEDDY_ENGINES
}

/// Find the built-in engine with the given id.
#[must_use]
pub fn lookup(id: u32) -> Option<EngineDescription> {
  lookup_in(catalog(), id)
}

/// Find the engine with the given id in an arbitrary catalog.
#[must_use]
pub fn lookup_in(catalog: &[EngineDescription], id: u32) -> Option<EngineDescription> {
  catalog.iter().find(|desc| desc.id == id).copied()
}
