//! End-to-end selection over small hand-built catalogs.

use platform::{caps::x86, Caps, Target};
use select::{
  choose_engine_in, is_allowed, lookup_in, max_literal_len, need_confirm, score, EngineDescription, Literal, Tunables,
};

fn three_engine_catalog() -> [EngineDescription; 3] {
  [
    EngineDescription::teddy(1, Caps::NONE, 8, 1, false),
    EngineDescription::teddy(2, Caps::NONE, 16, 3, false),
    EngineDescription::teddy(3, Caps::NONE, 32, 4, true),
  ]
}

/// `n` literals of length `len`, all bytes distinct within a literal.
fn distinct_literals(n: u32, len: usize) -> Vec<Literal> {
  (0..n)
    .map(|i| {
      let bytes: Vec<u8> = (0..len).map(|j| b'A' + (i as u8) + (j as u8) * 10).collect();
      Literal::new(i, bytes).unwrap()
    })
    .collect()
}

#[test]
fn ten_literals_pick_the_unpacked_sixteen_bucket_engine() {
  let catalog = three_engine_catalog();
  let lits = distinct_literals(10, 4);
  let target = Target::generic();
  let t = Tunables::DEFAULT;

  let max_len = max_literal_len(&lits).unwrap();
  assert!(!is_allowed(&lits, &catalog[0], max_len, &target));
  assert!(is_allowed(&lits, &catalog[1], max_len, &target));
  assert!(is_allowed(&lits, &catalog[2], max_len, &target));

  // Every literal ends in a single distinct byte: flood tail 1.
  assert_eq!(score(&catalog[1], 10, 1, &t), 100 + 100 + 50 + 6 + 1);
  assert_eq!(score(&catalog[2], 10, 1, &t), 100 + 50 + 3);

  let chosen = choose_engine_in(&catalog, &target, &lits, &t).unwrap().unwrap();
  assert_eq!(chosen.id(), 2);
  for _ in 0..8 {
    assert_eq!(choose_engine_in(&catalog, &target, &lits, &t).unwrap(), Some(chosen));
  }

  // Four-byte literals are longer than three masks.
  assert!(need_confirm(&chosen, &lits).unwrap());
}

#[test]
fn literals_within_mask_depth_need_no_confirm() {
  let catalog = three_engine_catalog();
  let lits = distinct_literals(10, 3);
  let t = Tunables::DEFAULT;

  let chosen = choose_engine_in(&catalog, &Target::generic(), &lits, &t).unwrap().unwrap();
  assert_eq!(chosen.id(), 2);
  assert!(!need_confirm(&chosen, &lits).unwrap());

  let masked: Vec<Literal> = lits
    .iter()
    .cloned()
    .enumerate()
    .map(|(i, lit)| if i == 4 { lit.with_mask([0xdf], [0x40]).unwrap() } else { lit })
    .collect();
  assert!(need_confirm(&chosen, &masked).unwrap());
}

#[test]
fn target_without_caps_selects_nothing() {
  let catalog = [
    EngineDescription::teddy(1, x86::TEDDY_READY, 8, 1, false),
    EngineDescription::teddy(2, x86::FAT_TEDDY_READY, 16, 3, false),
  ];
  let lits = distinct_literals(2, 4);
  assert_eq!(choose_engine_in(&catalog, &Target::generic(), &lits, &Tunables::DEFAULT), Ok(None));
  assert_eq!(
    choose_engine_in(&catalog, &Target::with_caps(x86::FAT_TEDDY_READY), &lits, &Tunables::DEFAULT)
      .unwrap()
      .map(|e| e.id()),
    Some(2)
  );
}

#[test]
fn chosen_id_round_trips_through_lookup() {
  let catalog = three_engine_catalog();
  let lits = distinct_literals(10, 4);
  let chosen = choose_engine_in(&catalog, &Target::generic(), &lits, &Tunables::DEFAULT)
    .unwrap()
    .unwrap();
  assert_eq!(lookup_in(&catalog, chosen.id()), Some(chosen));
  assert_eq!(lookup_in(&catalog, 99), None);
}

#[test]
fn concurrent_selection_agrees() {
  let lits = distinct_literals(12, 5);
  let target = Target::with_caps(x86::FAT_TEDDY_READY);
  let expected = select::choose_engine_in(select::catalog(), &target, &lits, &Tunables::DEFAULT).unwrap();

  std::thread::scope(|s| {
    let handles: Vec<_> = (0..4)
      .map(|_| s.spawn(|| select::choose_engine_in(select::catalog(), &target, &lits, &Tunables::DEFAULT).unwrap()))
      .collect();
    for h in handles {
      assert_eq!(h.join().unwrap(), expected);
    }
  });
}
