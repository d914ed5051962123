//! Target descriptors.
//!
//! A [`Target`] is the capability fingerprint an engine description is checked
//! against: "is engine variant V usable here?" It is either the detected host
//! or a hand-built description of the machine a compiled matcher will run on.

use core::fmt;

use crate::caps::{Arch, Caps};

/// Hardware capability fingerprint of a compilation target.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Target {
  arch: Arch,
  caps: Caps,
}

impl Target {
  /// Build a target from an explicit architecture and capability set.
  #[inline]
  #[must_use]
  pub const fn new(arch: Arch, caps: Caps) -> Self {
    Self { arch, caps }
  }

  /// A target with the current architecture and the given capabilities.
  #[inline]
  #[must_use]
  pub const fn with_caps(caps: Caps) -> Self {
    Self::new(Arch::current(), caps)
  }

  /// A target that provides no optional features at all.
  ///
  /// Only engines with an empty requirement set are valid on it.
  #[inline]
  #[must_use]
  pub const fn generic() -> Self {
    Self::new(Arch::current(), Caps::NONE)
  }

  /// The machine this process is running on.
  #[inline]
  #[must_use]
  pub fn host() -> Self {
    Self::new(Arch::current(), crate::detect::caps())
  }

  #[inline]
  #[must_use]
  pub const fn arch(&self) -> Arch {
    self.arch
  }

  #[inline]
  #[must_use]
  pub const fn caps(&self) -> Caps {
    self.caps
  }

  /// True if this target provides every feature in `required`.
  #[inline]
  #[must_use]
  pub const fn is_valid_for(&self, required: Caps) -> bool {
    self.caps.has(required)
  }

  /// Features in `required` that this target lacks.
  #[inline]
  #[must_use]
  pub const fn missing(&self, required: Caps) -> Caps {
    required.difference(self.caps)
  }
}

impl fmt::Debug for Target {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Target")
      .field("arch", &self.arch)
      .field("caps", &self.caps)
      .finish()
  }
}

impl fmt::Display for Target {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.arch)?;
    for name in self.caps.feature_names() {
      write!(f, "+{name}")?;
    }
    Ok(())
  }
}
