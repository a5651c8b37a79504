//! # Image Transform Interop
//!
//! A build-mode independent vocabulary of types, helpers and compile-time
//! checks for numeric / image-transform code that has to build unmodified in
//! two incompatible environments:
//!
//! * **Kernel build** (`--features kernel`): a restricted, privileged
//!   environment without the standard library. The crate is `#![no_std]` and
//!   only depends on `core`.
//! * **Hosted build** (default): an ordinary user-mode build that links `std`.
//!
//! The build mode is resolved once, at compile time, from the single `kernel`
//! feature. Both branches export the same names, so algorithm code never
//! branches on the build mode itself.
//!
//! ## Vocabulary
//!
//! | Concern | Items |
//! |---------|-------|
//! | Build mode | [`BuildMode`], [`BUILD_MODE`], [`mode::Environment`] |
//! | Base types | [`types::Byte`], [`types::Int`], … |
//! | Geometry | [`Point`], [`Rect`], [`Size`] (`#[repr(C)]`, platform layout) |
//! | Assertions | [`interop_assert!`] (runtime, debug builds), [`c_assert!`] (compile time) |
//! | Annotations | [`in_bcount!`], [`out_bcount!`], [`inout_bcount!`], … (no-ops) |
//! | Numeric | [`numeric::min`], [`numeric::max`], [`numeric::clamp`], `const fn` variants |
//! | Alignment | [`Aligned`], [`SseAligned`], [`aligned!`], [`force_inline!`] |
//!
//! Nothing is placed into a global namespace; downstream code opts in:
//!
//! ```
//! use image_transform_interop::prelude::*;
//!
//! c_assert!(size_of::<Rect>() == 4 * size_of::<Int>());
//!
//! fn row_bytes(width: in_param!(Int), bpp: in_param!(Int)) -> Int {
//!     interop_assert!(width >= 0);
//!     max(width, 0) * bpp
//! }
//!
//! assert_eq!(row_bytes(4, 3), 12);
//! ```
//!
//! ## Zero runtime cost
//!
//! Everything except [`interop_assert!`] (debug builds only) and the small
//! geometry helpers resolves at compile time. The crate holds no runtime state
//! apart from the optional assertion hook slot, allocates nothing and never
//! blocks.

#![cfg_attr(all(feature = "kernel", not(test)), no_std)]
#![allow(unsafe_code)]

#[macro_use]
mod static_assert;

pub mod align;
pub mod annotations;
pub mod assertion;
mod error;
pub mod geometry;
pub mod mode;
pub mod numeric;
pub mod types;

pub use align::{Aligned, Alignment, SseAligned};
pub use error::InteropError;
pub use geometry::{Point, Rect, Size};
pub use interop_layout_derive::ContiguousLayout;
pub use mode::{ActiveEnvironment, BUILD_MODE, BuildMode};

/// The full interop vocabulary, for glob import.
pub mod prelude {
    pub use crate::align::{
        A1, A2, A4, A8, A16, A32, A64, Aligned, Alignment, SseAligned, VECTOR_REGISTER_BYTES,
    };
    pub use crate::assertion::{AssertionFailure, install_assertion_hook};
    pub use crate::geometry::{
        LpPoint, LpRect, LpSize, PPoint, PRect, PSize, Point, PointRef, Rect, RectRef, Size,
        SizeRef,
    };
    pub use crate::mode::{BUILD_MODE, BuildMode, Environment};
    pub use crate::numeric::{clamp, max, min};
    pub use crate::types::{Byte, DWord, Int, Long, QWord, UInt, ULong, Word};
    pub use crate::{ContiguousLayout, InteropError};

    pub use crate::{
        aligned, assert_align, assert_size, c_assert, force_inline, in_bcount, in_ecount,
        in_param, inout_bcount, inout_ecount, inout_param, interop_assert, out_bcount,
        out_ecount, out_param, unreferenced_parameter,
    };
}
