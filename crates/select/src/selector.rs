//! Cost heuristic and engine selection.
//!
//! Every feasible engine gets an integer score made of independent terms; the
//! highest score wins and ties go to the earlier catalog entry. All arithmetic
//! is unsigned with truncating division.

use platform::Target;

use crate::{
  analyze::LiteralStats,
  catalog::{self, EngineDescription, EngineVariant},
  config::{self, SelectConfig, TeddyForce, Tunables},
  confirm::need_confirm,
  error::SelectError,
  feasibility,
  literal::Literal,
};

// ─────────────────────────────────────────────────────────────────────────────
// Scoring
// ─────────────────────────────────────────────────────────────────────────────

/// The terms of one engine's score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
  /// Unpacked kernels confirm less often.
  pub unpacked: u32,
  /// Mask bonus under heavy bucket reuse, flat bonus otherwise.
  pub load: u32,
  /// Enough masks to see past the longest flood tail.
  pub flood: u32,
  /// Peaks at the preferred mask count.
  pub sweet_spot: u32,
  /// Smaller kernels are cheaper.
  pub size: u32,
}

impl ScoreBreakdown {
  /// Score `engine` for a set of `literals` literals whose longest flood tail
  /// is `max_flood_tail`.
  #[must_use]
  pub fn compute(engine: &EngineDescription, literals: usize, max_flood_tail: usize, t: &Tunables) -> Self {
    let EngineVariant::Teddy(teddy) = engine.variant();
    let buckets = engine.num_buckets();

    let heavily_loaded = literals > t.heavy_load_ratio.saturating_mul(buckets as usize);

    Self {
      unpacked: if teddy.packed { 0 } else { t.unpacked_bonus },
      load: if heavily_loaded {
        teddy.num_masks.saturating_mul(t.heavy_load_mask_weight)
      } else {
        t.light_load_bonus
      },
      flood: if teddy.num_masks as usize > max_flood_tail { t.flood_bonus } else { 0 },
      sweet_spot: t.sweet_spot_numerator / (t.sweet_spot_masks.abs_diff(teddy.num_masks) + 1),
      size: t.size_numerator / buckets.max(1),
    }
  }

  #[inline]
  #[must_use]
  pub const fn total(&self) -> u32 {
    self
      .unpacked
      .saturating_add(self.load)
      .saturating_add(self.flood)
      .saturating_add(self.sweet_spot)
      .saturating_add(self.size)
  }
}

/// Total score of `engine`; see [`ScoreBreakdown`].
#[inline]
#[must_use]
pub fn score(engine: &EngineDescription, literals: usize, max_flood_tail: usize, tunables: &Tunables) -> u32 {
  ScoreBreakdown::compute(engine, literals, max_flood_tail, tunables).total()
}

// ─────────────────────────────────────────────────────────────────────────────
// Selection
// ─────────────────────────────────────────────────────────────────────────────

/// Pick the best feasible engine from `catalog`.
///
/// Returns `Ok(None)` when nothing is feasible; the caller should fall back to
/// a different matching strategy.
///
/// # Errors
///
/// [`SelectError::EmptyLiteralSet`] if `lits` is empty.
pub fn choose_engine_in(
  catalog: &[EngineDescription],
  target: &Target,
  lits: &[Literal],
  tunables: &Tunables,
) -> Result<Option<EngineDescription>, SelectError> {
  let stats = LiteralStats::of(lits)?;
  tracing::debug!(
    literals = stats.count,
    max_lit_len = stats.max_len,
    max_flood_tail = stats.max_flood_tail,
    "choosing teddy engine"
  );

  let mut best: Option<(EngineDescription, u32)> = None;
  for engine in catalog {
    if let Err(reason) = feasibility::check(lits, engine, stats.max_len, target, tunables) {
      tracing::debug!(engine = %engine, %reason, "engine disallowed");
      continue;
    }

    let breakdown = ScoreBreakdown::compute(engine, stats.count, stats.max_flood_tail, tunables);
    let total = breakdown.total();
    tracing::trace!(engine = %engine, ?breakdown, score = total, "engine scored");

    match best {
      Some((_, best_score)) if total <= best_score => {}
      _ => best = Some((*engine, total)),
    }
  }

  match best {
    Some((engine, total)) => {
      tracing::debug!(engine = %engine, score = total, "using engine");
      Ok(Some(engine))
    }
    None => {
      tracing::debug!("failed to find engine");
      Ok(None)
    }
  }
}

/// Pick an engine from the built-in catalog under an explicit configuration.
///
/// A forced engine is used only if it passes the feasibility filter;
/// otherwise selection falls back to scoring the whole catalog.
///
/// # Errors
///
/// [`SelectError::EmptyLiteralSet`] if `lits` is empty.
pub fn choose_engine_with(
  config: &SelectConfig,
  target: &Target,
  lits: &[Literal],
) -> Result<Option<EngineDescription>, SelectError> {
  match config.force {
    TeddyForce::Auto => {}
    TeddyForce::Disabled => {
      if lits.is_empty() {
        return Err(SelectError::EmptyLiteralSet);
      }
      tracing::debug!("teddy disabled by configuration");
      return Ok(None);
    }
    TeddyForce::Engine(id) => {
      let stats = LiteralStats::of(lits)?;
      match catalog::lookup(id) {
        Some(engine) => match feasibility::check(lits, &engine, stats.max_len, target, &config.tunables) {
          Ok(()) => {
            tracing::debug!(engine = %engine, "using forced engine");
            return Ok(Some(engine));
          }
          Err(reason) => {
            tracing::warn!(engine = %engine, %reason, "forced engine infeasible, selecting automatically");
          }
        },
        None => {
          tracing::warn!(id, "forced engine id unknown, selecting automatically");
        }
      }
    }
  }

  choose_engine_in(catalog::catalog(), target, lits, &config.tunables)
}

/// Pick an engine from the built-in catalog under the default tunables.
///
/// Depends only on `target` and `lits`: environment overrides apply to
/// [`select`] and [`choose_engine_with`], never here.
///
/// # Errors
///
/// [`SelectError::EmptyLiteralSet`] if `lits` is empty.
pub fn choose_engine(target: &Target, lits: &[Literal]) -> Result<Option<EngineDescription>, SelectError> {
  choose_engine_in(catalog::catalog(), target, lits, &Tunables::DEFAULT)
}

/// A chosen engine together with what the matcher builder needs to know.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
  pub engine: EngineDescription,
  /// Score the engine received under the active tunables.
  pub score: u32,
  /// Whether a confirmation stage must follow every bucket hit.
  pub needs_confirm: bool,
}

/// Choose an engine and decide whether its hits need confirming.
///
/// # Errors
///
/// [`SelectError::EmptyLiteralSet`] if `lits` is empty.
pub fn select(target: &Target, lits: &[Literal]) -> Result<Option<Selection>, SelectError> {
  select_with(&config::get(), target, lits)
}

/// [`select`] under an explicit configuration.
///
/// # Errors
///
/// [`SelectError::EmptyLiteralSet`] if `lits` is empty.
pub fn select_with(config: &SelectConfig, target: &Target, lits: &[Literal]) -> Result<Option<Selection>, SelectError> {
  let Some(engine) = choose_engine_with(config, target, lits)? else {
    return Ok(None);
  };
  let stats = LiteralStats::of(lits)?;
  Ok(Some(Selection {
    engine,
    score: score(&engine, stats.count, stats.max_flood_tail, &config.tunables),
    needs_confirm: need_confirm(&engine, lits)?,
  }))
}
