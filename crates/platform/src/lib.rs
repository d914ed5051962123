//! Target capability model for bucketlit.
//!
//! This crate answers "which instruction-set features can a matcher rely on?"
//! for engine selection.
//!
//! # Core Types
//!
//! - [`Caps`]: a feature bitset with a superset test ([`Caps::has`])
//! - [`Target`]: the capability fingerprint engines are validated against
//!
//! # Main Entry Point
//!
//! ```
//! use platform::{caps::x86, Target};
//!
//! let host = platform::host();
//! let ssse3_box = Target::with_caps(x86::TEDDY_READY);
//! assert!(ssse3_box.is_valid_for(x86::TEDDY_READY));
//! # let _ = host;
//! ```
//!
//! Detection results are cached; [`set_caps_override`] pins them for tests.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![no_std]

#[cfg(test)]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod caps;
mod detect;
pub mod target;

pub use caps::{Arch, Caps};
pub use detect::{has_override, set_caps_override};
pub use target::Target;

/// Detected host capabilities.
#[inline]
#[must_use]
pub fn caps() -> Caps {
  detect::caps()
}

/// The detected host as a [`Target`].
#[inline]
#[must_use]
pub fn host() -> Target {
  Target::host()
}
