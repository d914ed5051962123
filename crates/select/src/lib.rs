//! Teddy engine selection for bucketed multi-literal matching.
//!
//! Given a literal set and a [`Target`], this crate picks which Teddy kernel
//! variant should be built and whether its bucket hits need confirming.
//!
//! # Pipeline
//!
//! 1. [`LiteralStats`]: longest literal and longest flood tail
//! 2. [`feasibility::check`]: hard constraints per catalog entry
//! 3. [`choose_engine`]: score the survivors, keep the strict maximum
//! 4. [`need_confirm`]: can a bucket hit be trusted on its own?
//!
//! # Usage
//!
//! ```
//! use platform::{caps::x86, Target};
//! use select::{choose_engine, need_confirm, Literal};
//!
//! let lits = vec![
//!   Literal::new(0, b"foo".as_slice()).unwrap(),
//!   Literal::new(1, b"bar".as_slice()).unwrap(),
//! ];
//! let target = Target::with_caps(x86::TEDDY_READY);
//!
//! if let Some(engine) = choose_engine(&target, &lits).unwrap() {
//!   let confirm = need_confirm(&engine, &lits).unwrap();
//!   println!("{engine}: confirm={confirm}");
//! }
//! ```
//!
//! Selection is a pure function of the literal set, the target and the static
//! catalog; every entry point is safe to call concurrently.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod analyze;
pub mod catalog;
pub mod config;
pub mod confirm;
pub mod error;
pub mod feasibility;
pub mod literal;
pub mod selector;

pub use analyze::{max_flood_tail_len, max_literal_len, LiteralStats};
pub use catalog::{catalog, lookup, lookup_in, EngineDescription, EngineVariant, TeddyParams, TEDDY_ENGINES};
pub use config::{SelectConfig, TeddyForce, Tunables};
pub use confirm::need_confirm;
pub use error::{LiteralError, SelectError};
pub use feasibility::{is_allowed, Rejection};
pub use literal::{Literal, MAX_MASK_LEN};
pub use platform::Target;
pub use selector::{
  choose_engine, choose_engine_in, choose_engine_with, score, select, select_with, ScoreBreakdown, Selection,
};
