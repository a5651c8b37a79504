//! # Runtime Assertions
//!
//! [`interop_assert!`](crate::interop_assert) is the one assertion name
//! algorithm code uses. Like the assertion primitives of both environments it
//! is only checked in builds with `debug_assertions`.
//!
//! A failed assertion goes to exactly one binding:
//!
//! 1. the hook installed with [`install_assertion_hook`], if any, otherwise
//! 2. the active environment's primitive,
//!    [`Environment::assertion_failed`].
//!
//! ```should_panic
//! use image_transform_interop::interop_assert;
//!
//! let stride = 3;
//! interop_assert!(stride % 4 == 0, "stride {stride} is not DWORD aligned");
//! # if !cfg!(debug_assertions) { panic!() }
//! ```

mod hook_cell;

use crate::error::InteropError;
use crate::mode::{ActiveEnvironment, Environment};
use core::fmt;
use core::panic::Location;
use hook_cell::HookCell;

/// A failed [`interop_assert!`](crate::interop_assert).
#[derive(Debug, Copy, Clone)]
pub struct AssertionFailure<'a> {
    expression: &'static str,
    message: Option<fmt::Arguments<'a>>,
    location: &'static Location<'static>,
}

impl<'a> AssertionFailure<'a> {
    #[must_use]
    pub const fn new(
        expression: &'static str,
        message: Option<fmt::Arguments<'a>>,
        location: &'static Location<'static>,
    ) -> Self {
        Self {
            expression,
            message,
            location,
        }
    }

    /// The asserted expression, as written.
    #[must_use]
    pub const fn expression(&self) -> &'static str {
        self.expression
    }

    #[must_use]
    pub const fn message(&self) -> Option<fmt::Arguments<'a>> {
        self.message
    }

    #[must_use]
    pub const fn location(&self) -> &'static Location<'static> {
        self.location
    }
}

impl fmt::Display for AssertionFailure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "assertion failed: {}", self.expression)?;
        if let Some(message) = self.message {
            write!(f, ": {message}")?;
        }
        write!(f, " at {}", self.location)
    }
}

/// A replacement assertion primitive.
pub type AssertionHook = fn(&AssertionFailure<'_>) -> !;

static HOOK: HookCell<AssertionHook> = HookCell::new();

/// Binds failed assertions to `hook` instead of the environment primitive.
///
/// The binding can be set once; it is never replaced.
///
/// # Errors
/// [`InteropError::AssertionHookAlreadyInstalled`] if a hook is already
/// bound.
pub fn install_assertion_hook(hook: AssertionHook) -> Result<(), InteropError> {
    if HOOK.try_set(hook).is_ok() {
        log::debug!(target: "interop::assert", "assertion hook installed");
        Ok(())
    } else {
        log::warn!(target: "interop::assert", "assertion hook already installed; keeping it");
        Err(InteropError::AssertionHookAlreadyInstalled)
    }
}

/// The installed assertion hook, if any.
#[must_use]
pub fn assertion_hook() -> Option<AssertionHook> {
    HOOK.get().copied()
}

/// Reports a failed assertion at the caller's location.
#[doc(hidden)]
#[cold]
#[inline(never)]
#[track_caller]
pub fn assertion_failed(expression: &'static str, message: Option<fmt::Arguments<'_>>) -> ! {
    let failure = AssertionFailure::new(expression, message, Location::caller());
    if let Some(hook) = assertion_hook() {
        hook(&failure)
    }
    ActiveEnvironment::assertion_failed(&failure)
}

/// Asserts a condition in builds with `debug_assertions`.
///
/// An optional `format!`-style message follows the condition. In release
/// builds the condition is type-checked but never evaluated.
#[macro_export]
macro_rules! interop_assert {
    ($cond:expr $(,)?) => {
        if ::core::cfg!(debug_assertions) && !$cond {
            $crate::assertion::assertion_failed(
                ::core::stringify!($cond),
                ::core::option::Option::None,
            )
        }
    };
    ($cond:expr, $($arg:tt)+) => {
        if ::core::cfg!(debug_assertions) && !$cond {
            $crate::assertion::assertion_failed(
                ::core::stringify!($cond),
                ::core::option::Option::Some(::core::format_args!($($arg)+)),
            )
        }
    };
}
