//! Fuzz target for the capability bitset and target validity.
//!
//! Tests that:
//! - has() is a superset test consistent with has_bit()
//! - union/intersection/difference obey their set laws
//! - Target::is_valid_for agrees with Caps::has

#![no_main]

use libfuzzer_sys::fuzz_target;
use platform::{Caps, Target};

fuzz_target!(|data: (u64, u64)| {
  let a = Caps::from_raw(data.0);
  let b = Caps::from_raw(data.1);

  // ─── Invariant: Self-containment ───
  assert!(a.has(a));
  assert!(a.has(Caps::NONE));

  // ─── Invariant: Superset ───
  assert_eq!(a.has(b), (a & b) == b, "has() must be a subset test");
  assert!((a | b).has(a) && (a | b).has(b));

  // ─── Invariant: Difference ───
  assert!((a.difference(b) & b).is_empty());
  assert_eq!(a.difference(b) | (a & b), a);

  // ─── Invariant: has_bit consistency ───
  for n in 0u8..64 {
    assert_eq!(a.has_bit(n), a.has(Caps::bit(n)));
  }

  // ─── Invariant: Target validity ───
  let target = Target::with_caps(a);
  assert_eq!(target.is_valid_for(b), a.has(b));
  assert_eq!(target.missing(b).is_empty(), a.has(b));
});
