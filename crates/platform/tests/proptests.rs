//! Property tests for the capability bitset.

use platform::{Caps, Target};
use proptest::prelude::*;

fn caps_from_bits(bits: &[u8]) -> Caps {
  bits.iter().fold(Caps::NONE, |acc, &b| acc | Caps::bit(b))
}

fn arb_caps() -> impl Strategy<Value = Caps> {
  proptest::collection::vec(0u8..64, 0..12).prop_map(|bits| caps_from_bits(&bits))
}

proptest! {
  #[test]
  fn has_is_subset(a in arb_caps(), b in arb_caps()) {
    prop_assert_eq!(a.has(b), (a & b) == b);
  }

  #[test]
  fn union_contains_both(a in arb_caps(), b in arb_caps()) {
    let u = a | b;
    prop_assert!(u.has(a));
    prop_assert!(u.has(b));
    prop_assert!(u.count() <= a.count() + b.count());
  }

  #[test]
  fn difference_partitions(a in arb_caps(), b in arb_caps()) {
    prop_assert!((a.difference(b) & b).is_empty());
    prop_assert_eq!(a.difference(b) | a.intersection(b), a);
  }

  #[test]
  fn target_missing_is_the_gap(have in arb_caps(), need in arb_caps()) {
    let target = Target::with_caps(have);
    prop_assert_eq!(target.is_valid_for(need), target.missing(need).is_empty());
    prop_assert_eq!(target.missing(need), need.difference(have));
  }
}
