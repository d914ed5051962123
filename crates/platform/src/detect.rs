//! Host capability detection.
//!
//! - Compile-time detection via `cfg!(target_feature = "...")`
//! - Runtime detection via `is_x86_feature_detected!` / `is_aarch64_feature_detected!` (std)
//! - Caching in a `OnceLock` (std); without std the compile-time set is cheap to rebuild
//! - A process-wide override for tests and cross-compilation
//! - Miri fallback (always reports no capabilities)

use core::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crate::caps::Caps;
#[allow(unused_imports)] // the per-arch modules are only used on their own targets
use crate::caps::{aarch64, x86};

// ─────────────────────────────────────────────────────────────────────────────
// Override Support
// ─────────────────────────────────────────────────────────────────────────────

static OVERRIDE_SET: AtomicBool = AtomicBool::new(false);
static OVERRIDE_BITS: AtomicU64 = AtomicU64::new(0);

/// Set or clear the host capabilities override.
///
/// While set, [`caps()`] returns the override instead of the detected set.
pub fn set_caps_override(value: Option<Caps>) {
  match value {
    Some(caps) => {
      OVERRIDE_BITS.store(caps.0, Ordering::Release);
      OVERRIDE_SET.store(true, Ordering::Release);
    }
    None => OVERRIDE_SET.store(false, Ordering::Release),
  }
}

#[inline]
pub fn has_override() -> bool {
  OVERRIDE_SET.load(Ordering::Acquire)
}

fn get_override() -> Option<Caps> {
  if !OVERRIDE_SET.load(Ordering::Acquire) {
    return None;
  }
  Some(Caps(OVERRIDE_BITS.load(Ordering::Acquire)))
}

// ─────────────────────────────────────────────────────────────────────────────
// Detection
// ─────────────────────────────────────────────────────────────────────────────

/// Features the compiler was told it may assume.
#[must_use]
pub(crate) const fn compile_time() -> Caps {
  let mut bits = 0u64;

  #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
  {
    if cfg!(target_feature = "sse2") {
      bits |= x86::SSE2.0;
    }
    if cfg!(target_feature = "ssse3") {
      bits |= x86::SSSE3.0;
    }
    if cfg!(target_feature = "sse4.1") {
      bits |= x86::SSE41.0;
    }
    if cfg!(target_feature = "sse4.2") {
      bits |= x86::SSE42.0;
    }
    if cfg!(target_feature = "popcnt") {
      bits |= x86::POPCNT.0;
    }
    if cfg!(target_feature = "avx") {
      bits |= x86::AVX.0;
    }
    if cfg!(target_feature = "avx2") {
      bits |= x86::AVX2.0;
    }
    if cfg!(target_feature = "bmi2") {
      bits |= x86::BMI2.0;
    }
    if cfg!(target_feature = "avx512f") {
      bits |= x86::AVX512F.0;
    }
    if cfg!(target_feature = "avx512bw") {
      bits |= x86::AVX512BW.0;
    }
    if cfg!(target_feature = "avx512vl") {
      bits |= x86::AVX512VL.0;
    }
    if cfg!(target_feature = "avx512vbmi") {
      bits |= x86::AVX512VBMI.0;
    }
  }

  #[cfg(target_arch = "aarch64")]
  {
    if cfg!(target_feature = "neon") {
      bits |= aarch64::NEON.0;
    }
    if cfg!(target_feature = "sve") {
      bits |= aarch64::SVE.0;
    }
    if cfg!(target_feature = "sve2") {
      bits |= aarch64::SVE2.0;
    }
  }

  Caps(bits)
}

#[cfg(all(feature = "std", any(target_arch = "x86", target_arch = "x86_64")))]
fn runtime() -> Caps {
  let mut caps = compile_time();
  let probes = [
    (std::arch::is_x86_feature_detected!("sse2"), x86::SSE2),
    (std::arch::is_x86_feature_detected!("ssse3"), x86::SSSE3),
    (std::arch::is_x86_feature_detected!("sse4.1"), x86::SSE41),
    (std::arch::is_x86_feature_detected!("sse4.2"), x86::SSE42),
    (std::arch::is_x86_feature_detected!("popcnt"), x86::POPCNT),
    (std::arch::is_x86_feature_detected!("avx"), x86::AVX),
    (std::arch::is_x86_feature_detected!("avx2"), x86::AVX2),
    (std::arch::is_x86_feature_detected!("bmi2"), x86::BMI2),
    (std::arch::is_x86_feature_detected!("avx512f"), x86::AVX512F),
    (std::arch::is_x86_feature_detected!("avx512bw"), x86::AVX512BW),
    (std::arch::is_x86_feature_detected!("avx512vl"), x86::AVX512VL),
    (std::arch::is_x86_feature_detected!("avx512vbmi"), x86::AVX512VBMI),
  ];
  for (present, feature) in probes {
    if present {
      caps |= feature;
    }
  }
  caps
}

#[cfg(all(feature = "std", target_arch = "aarch64"))]
fn runtime() -> Caps {
  let mut caps = compile_time();
  let probes = [
    (std::arch::is_aarch64_feature_detected!("neon"), aarch64::NEON),
    (std::arch::is_aarch64_feature_detected!("sve"), aarch64::SVE),
    (std::arch::is_aarch64_feature_detected!("sve2"), aarch64::SVE2),
  ];
  for (present, feature) in probes {
    if present {
      caps |= feature;
    }
  }
  caps
}

#[cfg(not(all(
  feature = "std",
  any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
)))]
fn runtime() -> Caps {
  compile_time()
}

fn detect() -> Caps {
  if cfg!(miri) {
    return Caps::NONE;
  }
  runtime()
}

// ─────────────────────────────────────────────────────────────────────────────
// Main API
// ─────────────────────────────────────────────────────────────────────────────

/// Host capabilities, honoring the override.
///
/// With `std`, detection runs once and is cached in a `OnceLock`.
#[inline]
#[must_use]
pub fn caps() -> Caps {
  if let Some(caps) = get_override() {
    return caps;
  }

  #[cfg(feature = "std")]
  {
    use std::sync::OnceLock;
    static CACHED: OnceLock<Caps> = OnceLock::new();
    *CACHED.get_or_init(detect)
  }

  #[cfg(not(feature = "std"))]
  {
    detect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn detected_includes_compile_time() {
    if has_override() {
      return;
    }
    let detected = caps();
    if !cfg!(miri) {
      assert!(detected.has(compile_time()));
    }
  }

  #[test]
  #[cfg(all(target_arch = "x86_64", not(miri)))]
  fn x86_64_baseline_has_sse2() {
    assert!(compile_time().has(x86::SSE2));
  }

  #[test]
  #[cfg(all(target_arch = "aarch64", not(miri)))]
  fn aarch64_baseline_has_neon() {
    assert!(compile_time().has(aarch64::NEON));
  }

  #[test]
  fn detection_is_stable() {
    assert_eq!(detect(), detect());
  }
}
