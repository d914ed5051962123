//! Fuzz target for engine selection.
//!
//! Tests that:
//! - No panics on arbitrary literal sets and targets
//! - The chosen engine passes the feasibility filter
//! - No feasible engine outscores the chosen one
//! - A "no confirm" answer implies an exact fit

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use platform::{Caps, Target};
use select::{catalog, choose_engine_in, feasibility, need_confirm, score, Literal, LiteralStats, Tunables};

#[derive(Debug, Arbitrary)]
struct Input {
  caps: u64,
  literals: Vec<(Vec<u8>, Option<(u8, u8)>)>,
}

fuzz_target!(|input: Input| {
  let target = Target::with_caps(Caps::from_raw(input.caps));
  let lits: Vec<Literal> = input
    .literals
    .into_iter()
    .take(256)
    .zip(0u32..)
    .filter_map(|((bytes, mask), id)| {
      let lit = Literal::new(id, bytes).ok()?;
      match mask {
        Some((m, c)) => lit.with_mask([m], [c & m]).ok(),
        None => Some(lit),
      }
    })
    .collect();

  let t = Tunables::DEFAULT;
  let Ok(chosen) = choose_engine_in(catalog(), &target, &lits, &t) else {
    assert!(lits.is_empty());
    return;
  };
  let Some(engine) = chosen else {
    return;
  };

  let stats = LiteralStats::of(&lits).unwrap();
  assert!(feasibility::is_allowed(&lits, &engine, stats.max_len, &target));

  let best = score(&engine, stats.count, stats.max_flood_tail, &t);
  for other in catalog() {
    if feasibility::is_allowed(&lits, other, stats.max_len, &target) {
      assert!(score(other, stats.count, stats.max_flood_tail, &t) <= best);
    }
  }

  if !need_confirm(&engine, &lits).unwrap() {
    let teddy = engine.teddy_params().unwrap();
    assert!(!teddy.packed && lits.len() <= engine.num_buckets() as usize);
    assert!(lits.iter().all(|l| l.len() <= teddy.num_masks as usize && !l.has_mask()));
  }
});
