//! # Build Mode
//!
//! The build mode is decided once per build by the `kernel` Cargo feature and
//! never changes afterwards. Each mode is modeled as a zero-sized
//! [`Environment`] marker; [`ActiveEnvironment`] names the one selected for
//! this build.
//!
//! ```
//! use image_transform_interop::mode::{ActiveEnvironment, Environment};
//! use image_transform_interop::{BUILD_MODE, BuildMode};
//!
//! assert_eq!(ActiveEnvironment::MODE, BUILD_MODE);
//! assert_eq!(BuildMode::Hosted.to_string(), "hosted");
//! ```

use crate::assertion::AssertionFailure;
use core::fmt;

/// The environment a build targets.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BuildMode {
    /// Privileged kernel environment, `core` only.
    Kernel,
    /// Ordinary user-mode environment with `std`.
    Hosted,
}

impl BuildMode {
    #[inline]
    #[must_use]
    pub const fn is_kernel(self) -> bool {
        matches!(self, Self::Kernel)
    }

    #[inline]
    #[must_use]
    pub const fn is_hosted(self) -> bool {
        matches!(self, Self::Hosted)
    }

    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kernel => "kernel",
            Self::Hosted => "hosted",
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A build environment and the primitives it provides to this layer.
pub trait Environment {
    /// The build mode this environment represents.
    const MODE: BuildMode;

    /// Whether the standard library is linked.
    const HAS_STD: bool;

    /// The environment's assertion primitive.
    ///
    /// Called for a failed [`interop_assert!`](crate::interop_assert) when no
    /// hook has been installed. Implementations are `#[track_caller]`, so the
    /// panic points at the assertion site.
    fn assertion_failed(failure: &AssertionFailure<'_>) -> !;
}

/// The restricted kernel environment.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct KernelEnvironment;

/// The ordinary hosted environment.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct HostedEnvironment;

impl Environment for KernelEnvironment {
    const MODE: BuildMode = BuildMode::Kernel;
    const HAS_STD: bool = false;

    #[cold]
    #[track_caller]
    fn assertion_failed(failure: &AssertionFailure<'_>) -> ! {
        // No stderr here; the log sink is the only way out before the panic
        // handler takes over.
        log::error!(target: "interop::assert", "{failure}");
        panic!("{failure}")
    }
}

#[cfg(not(feature = "kernel"))]
impl Environment for HostedEnvironment {
    const MODE: BuildMode = BuildMode::Hosted;
    const HAS_STD: bool = true;

    #[cold]
    #[track_caller]
    fn assertion_failed(failure: &AssertionFailure<'_>) -> ! {
        log::error!(target: "interop::assert", "{failure}");
        std::panic!("{failure}")
    }
}

/// The environment selected for this build.
#[cfg(feature = "kernel")]
pub type ActiveEnvironment = KernelEnvironment;

/// The environment selected for this build.
#[cfg(not(feature = "kernel"))]
pub type ActiveEnvironment = HostedEnvironment;

/// The build mode of this build.
pub const BUILD_MODE: BuildMode = ActiveEnvironment::MODE;

c_assert!(
    BUILD_MODE.is_kernel() != ActiveEnvironment::HAS_STD,
    "kernel builds must not link std, hosted builds must"
);
