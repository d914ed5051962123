//! Hard constraints: can an engine service a literal set on a target at all?

use core::fmt;

use platform::Target;

use crate::{
  catalog::{EngineDescription, EngineVariant},
  config::Tunables,
  literal::Literal,
};

/// Why an engine was excluded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
  /// The target lacks a required feature.
  NotValidOnTarget,
  /// Unpacked and fewer buckets than literals.
  TooFewBuckets { buckets: u32, literals: usize },
  /// Over the per-bucket load ceiling, even for packed kernels.
  OverloadedBuckets { buckets: u32, literals: usize },
  /// More masks than the longest literal has bytes.
  MasksExceedLiteralLen { masks: u32, max_len: usize },
  /// Too large a share of literals are shorter than the mask depth.
  TooManyShortLiterals { short: usize, literals: usize },
}

impl fmt::Display for Rejection {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match *self {
      Self::NotValidOnTarget => f.write_str("not valid on target"),
      Self::TooFewBuckets { buckets, literals } => {
        write!(f, "{buckets} buckets < {literals} literals and not packed")
      }
      Self::OverloadedBuckets { buckets, literals } => {
        write!(f, "too many literals ({literals}) for {buckets} buckets")
      }
      Self::MasksExceedLiteralLen { masks, max_len } => {
        write!(f, "{masks} masks > max literal length {max_len}")
      }
      Self::TooManyShortLiterals { short, literals } => {
        write!(f, "{short} of {literals} literals shorter than mask depth")
      }
    }
  }
}

/// Check every constraint, reporting the first one violated.
///
/// `max_lit_len` is the longest literal in `lits`. The mask-depth check is
/// against that maximum, not the minimum: short literals that slip through are
/// covered by [`need_confirm`](crate::need_confirm).
///
/// # Errors
///
/// The [`Rejection`] describing the first violated constraint.
pub fn check(
  lits: &[Literal],
  engine: &EngineDescription,
  max_lit_len: usize,
  target: &Target,
  tunables: &Tunables,
) -> Result<(), Rejection> {
  if !engine.is_valid_on_target(target) {
    return Err(Rejection::NotValidOnTarget);
  }

  let EngineVariant::Teddy(teddy) = engine.variant();
  let buckets = engine.num_buckets();
  let literals = lits.len();

  if (buckets as usize) < literals && !teddy.packed {
    return Err(Rejection::TooFewBuckets { buckets, literals });
  }
  if (buckets as usize).saturating_mul(tunables.bucket_load_factor) < literals {
    return Err(Rejection::OverloadedBuckets { buckets, literals });
  }
  if teddy.num_masks as usize > max_lit_len {
    return Err(Rejection::MasksExceedLiteralLen {
      masks: teddy.num_masks,
      max_len: max_lit_len,
    });
  }

  if literals > tunables.short_literal_check_min {
    let short = lits.iter().filter(|lit| lit.len() < teddy.num_masks as usize).count();
    if short.saturating_mul(tunables.short_literal_max_fraction_denominator) > literals {
      return Err(Rejection::TooManyShortLiterals { short, literals });
    }
  }

  Ok(())
}

/// True if `engine` may service `lits` on `target` under the default tunables.
#[inline]
#[must_use]
pub fn is_allowed(lits: &[Literal], engine: &EngineDescription, max_lit_len: usize, target: &Target) -> bool {
  check(lits, engine, max_lit_len, target, &Tunables::DEFAULT).is_ok()
}
