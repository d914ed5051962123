//! Selection tunables and runtime overrides.
//!
//! [`Tunables`] carries every weight and threshold of the feasibility filter
//! and the scoring heuristic. [`SelectConfig`] adds a forced-engine override
//! read once from the environment (with `std`).
//!
//! # Environment
//!
//! | Variable | Values |
//! |----------|--------|
//! | `BUCKETLIT_TEDDY_FORCE` | `auto`, `none`/`off`, or an engine id |
//! | `BUCKETLIT_TEDDY_BUCKET_LOAD` | literals per bucket ceiling (min 1) |

/// Fixed weights and thresholds of the Teddy selection heuristic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tunables {
  /// Hard ceiling on literals per bucket, packed or not.
  pub bucket_load_factor: usize,
  /// Literal count above which the short-literal check applies.
  pub short_literal_check_min: usize,
  /// At most `1 / denominator` of literals may be shorter than the mask depth.
  pub short_literal_max_fraction_denominator: usize,

  /// Bonus for unpacked kernels.
  pub unpacked_bonus: u32,
  /// Heavily loaded when `literals > heavy_load_ratio * buckets`.
  pub heavy_load_ratio: usize,
  /// Per-mask bonus under heavy load.
  pub heavy_load_mask_weight: u32,
  /// Flat bonus under light load.
  pub light_load_bonus: u32,
  /// Bonus when masks outnumber the longest flood tail.
  pub flood_bonus: u32,
  /// Preferred mask count.
  pub sweet_spot_masks: u32,
  /// Numerator of the mask sweet-spot bonus.
  pub sweet_spot_numerator: u32,
  /// Numerator of the small-engine bonus.
  pub size_numerator: u32,
}

impl Tunables {
  pub const DEFAULT: Self = Self {
    bucket_load_factor: 6,
    short_literal_check_min: 40,
    short_literal_max_fraction_denominator: 5,
    unpacked_bonus: 100,
    heavy_load_ratio: 4,
    heavy_load_mask_weight: 4,
    light_load_bonus: 100,
    flood_bonus: 50,
    sweet_spot_masks: 3,
    sweet_spot_numerator: 6,
    size_numerator: 16,
  };
}

impl Default for Tunables {
  #[inline]
  fn default() -> Self {
    Self::DEFAULT
  }
}

/// Forced engine selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TeddyForce {
  /// Score every feasible engine.
  #[default]
  Auto,
  /// Never select a Teddy engine.
  Disabled,
  /// Use this engine id if it is feasible, otherwise fall back to `Auto`.
  Engine(u32),
}

impl TeddyForce {
  /// Parse a force value: `auto`, `none`/`off`/`disabled`, or a decimal id.
  #[must_use]
  pub fn parse(value: &str) -> Option<Self> {
    let value = value.trim();
    if value.is_empty() {
      return None;
    }
    if value.eq_ignore_ascii_case("auto") {
      return Some(Self::Auto);
    }
    if value.eq_ignore_ascii_case("none") || value.eq_ignore_ascii_case("off") || value.eq_ignore_ascii_case("disabled")
    {
      return Some(Self::Disabled);
    }
    value.parse::<u32>().ok().map(Self::Engine)
  }
}

/// Full selection configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SelectConfig {
  pub force: TeddyForce,
  pub tunables: Tunables,
}

#[derive(Clone, Copy, Debug, Default)]
struct Overrides {
  force: Option<TeddyForce>,
  bucket_load_factor: Option<usize>,
}

#[cfg(feature = "std")]
fn read_env_overrides() -> Overrides {
  fn var(name: &str) -> Option<std::string::String> {
    std::env::var(name).ok()
  }

  let force = var("BUCKETLIT_TEDDY_FORCE").and_then(|v| {
    let parsed = TeddyForce::parse(&v);
    if parsed.is_none() {
      tracing::warn!(value = %v, "ignoring unparseable BUCKETLIT_TEDDY_FORCE");
    }
    parsed
  });
  let bucket_load_factor = var("BUCKETLIT_TEDDY_BUCKET_LOAD").and_then(|v| v.trim().parse::<usize>().ok());

  Overrides {
    force,
    bucket_load_factor,
  }
}

#[cfg(feature = "std")]
fn overrides() -> Overrides {
  use std::sync::OnceLock;
  static OVERRIDES: OnceLock<Overrides> = OnceLock::new();
  *OVERRIDES.get_or_init(read_env_overrides)
}

#[cfg(not(feature = "std"))]
fn overrides() -> Overrides {
  Overrides::default()
}

fn config_from(ov: Overrides) -> SelectConfig {
  let mut tunables = Tunables::DEFAULT;
  if let Some(v) = ov.bucket_load_factor {
    tunables.bucket_load_factor = v.max(1);
  }
  SelectConfig {
    force: ov.force.unwrap_or_default(),
    tunables,
  }
}

/// Process-wide selection configuration.
#[inline]
#[must_use]
pub fn get() -> SelectConfig {
  config_from(overrides())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_match_documented_constants() {
    let t = Tunables::default();
    assert_eq!(t.bucket_load_factor, 6);
    assert_eq!(t.short_literal_check_min, 40);
    assert_eq!(t.short_literal_max_fraction_denominator, 5);
    assert_eq!(t.unpacked_bonus, 100);
    assert_eq!(t.light_load_bonus, 100);
    assert_eq!(t.flood_bonus, 50);
    assert_eq!(t.sweet_spot_masks, 3);
  }

  #[test]
  fn parse_force() {
    assert_eq!(TeddyForce::parse("auto"), Some(TeddyForce::Auto));
    assert_eq!(TeddyForce::parse(" AUTO "), Some(TeddyForce::Auto));
    assert_eq!(TeddyForce::parse("off"), Some(TeddyForce::Disabled));
    assert_eq!(TeddyForce::parse("None"), Some(TeddyForce::Disabled));
    assert_eq!(TeddyForce::parse("13"), Some(TeddyForce::Engine(13)));
    assert_eq!(TeddyForce::parse(""), None);
    assert_eq!(TeddyForce::parse("fat"), None);
    assert_eq!(TeddyForce::parse("-1"), None);
  }

  #[test]
  fn overrides_apply() {
    let cfg = config_from(Overrides {
      force: Some(TeddyForce::Engine(3)),
      bucket_load_factor: Some(0),
    });
    assert_eq!(cfg.force, TeddyForce::Engine(3));
    assert_eq!(cfg.tunables.bucket_load_factor, 1);

    assert_eq!(config_from(Overrides::default()), SelectConfig::default());
  }
}
