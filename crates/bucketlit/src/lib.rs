//! Engine selection for bucketed multi-literal matching.
//!
//! `bucketlit` decides which Teddy kernel variant should search for a set of
//! literals on a given machine, and whether that kernel's bucket hits must be
//! confirmed against the real literal before being reported.
//!
//! # Quick Start
//!
//! ```
//! use bucketlit::{Literal, Target};
//!
//! let lits = vec![
//!   Literal::new(0, b"GET ".as_slice()).unwrap(),
//!   Literal::new(1, b"POST".as_slice()).unwrap(),
//! ];
//!
//! match bucketlit::select(&bucketlit::host(), &lits).unwrap() {
//!   Some(sel) => println!("{} (confirm: {})", sel.engine, sel.needs_confirm),
//!   None => println!("no Teddy kernel for this set; use another matcher"),
//! }
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | Runtime CPU detection and environment overrides |
//!
//! Without `std`, host capabilities come from compile-time target features
//! only and the default tunables always apply.
#![cfg_attr(not(feature = "std"), no_std)]

// =============================================================================
// Target model
// =============================================================================

pub use platform::{
  caps::{self, aarch64, x86},
  host, set_caps_override, Arch, Caps, Target,
};

// =============================================================================
// Selection
// =============================================================================

pub use select::{
  // Catalog
  catalog,
  // Selection
  choose_engine,
  choose_engine_in,
  choose_engine_with,
  config,
  // Analysis
  max_flood_tail_len,
  max_literal_len,
  // Confirmation
  need_confirm,
  // Feasibility
  is_allowed,
  lookup,
  lookup_in,
  score,
  select,
  select_with,
  EngineDescription,
  EngineVariant,
  LiteralError,
  Literal,
  LiteralStats,
  Rejection,
  ScoreBreakdown,
  SelectConfig,
  SelectError,
  Selection,
  TeddyForce,
  TeddyParams,
  Tunables,
  MAX_MASK_LEN,
};

/// Look up a previously chosen engine by id.
///
/// Alias of [`lookup`] for callers re-resolving an id stored alongside a
/// compiled matcher.
#[inline]
#[must_use]
pub fn lookup_engine(id: u32) -> Option<EngineDescription> {
  select::lookup(id)
}
