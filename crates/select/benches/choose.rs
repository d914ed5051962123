//! Engine selection benchmarks.
//!
//! Run: `cargo bench -p select -- choose`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use platform::{caps::x86, Target};
use select::{catalog, choose_engine_in, need_confirm, Literal, Tunables};

/// Literal set sizes, spanning light load through the packed ceiling.
const COUNTS: [usize; 5] = [1, 8, 16, 48, 96];

fn literals(n: usize) -> Vec<Literal> {
  (0..n)
    .map(|i| {
      let bytes = format!("lit{i:04}").into_bytes();
      Literal::new(i as u32, bytes).unwrap()
    })
    .collect()
}

/// Full catalog scan on a target that can run every x86 kernel.
fn bench_choose(c: &mut Criterion) {
  let mut group = c.benchmark_group("choose/fat-teddy-target");
  let target = Target::with_caps(x86::FAT_TEDDY_READY);

  for n in COUNTS {
    let lits = literals(n);
    group.throughput(Throughput::Elements(n as u64));
    group.bench_with_input(BenchmarkId::from_parameter(n), &lits, |b, lits| {
      b.iter(|| core::hint::black_box(choose_engine_in(catalog(), &target, lits, &Tunables::DEFAULT)));
    });
  }

  group.finish();
}

fn bench_need_confirm(c: &mut Criterion) {
  let mut group = c.benchmark_group("need_confirm");
  let engine = select::lookup(5).unwrap();

  for n in COUNTS {
    let lits = literals(n);
    group.bench_with_input(BenchmarkId::from_parameter(n), &lits, |b, lits| {
      b.iter(|| core::hint::black_box(need_confirm(&engine, lits)));
    });
  }

  group.finish();
}

criterion_group!(benches, bench_choose, bench_need_confirm);
criterion_main!(benches);
