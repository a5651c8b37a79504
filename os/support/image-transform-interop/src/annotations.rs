//! # Parameter Annotations
//!
//! Buffer direction and extent hints for function signatures. They are used in
//! type position and expand to exactly the annotated type; count and size
//! arguments are discarded. Annotated code therefore builds the same with or
//! without any analysis tooling.
//!
//! | Direction | No qualifier | Byte size | Element count |
//! |-----------|--------------|-----------|---------------|
//! | in        | [`in_param!`](crate::in_param) | [`in_bcount!`](crate::in_bcount) | [`in_ecount!`](crate::in_ecount) |
//! | out       | [`out_param!`](crate::out_param) | [`out_bcount!`](crate::out_bcount) | [`out_ecount!`](crate::out_ecount) |
//! | inout     | [`inout_param!`](crate::inout_param) | [`inout_bcount!`](crate::inout_bcount) | [`inout_ecount!`](crate::inout_ecount) |
//!
//! ```
//! use image_transform_interop::prelude::*;
//!
//! fn invert(
//!     dst: out_bcount!(&mut [Byte], len),
//!     src: in_bcount!(&[Byte], len),
//!     len: in_param!(usize),
//! ) {
//!     for (d, s) in dst[..len].iter_mut().zip(&src[..len]) {
//!         *d = !*s;
//!     }
//! }
//!
//! let mut out = [0u8; 2];
//! invert(&mut out, &[0x00, 0xF0], 2);
//! assert_eq!(out, [0xFF, 0x0F]);
//! ```

/// Input parameter.
#[macro_export]
macro_rules! in_param {
    ($ty:ty) => { $ty };
}

/// Output parameter.
#[macro_export]
macro_rules! out_param {
    ($ty:ty) => { $ty };
}

/// Input and output parameter.
#[macro_export]
macro_rules! inout_param {
    ($ty:ty) => { $ty };
}

/// Input buffer of `size` bytes.
#[macro_export]
macro_rules! in_bcount {
    ($ty:ty, $size:expr $(,)?) => { $ty };
}

/// Output buffer of `size` bytes.
#[macro_export]
macro_rules! out_bcount {
    ($ty:ty, $size:expr $(,)?) => { $ty };
}

/// Input and output buffer of `size` bytes.
#[macro_export]
macro_rules! inout_bcount {
    ($ty:ty, $size:expr $(,)?) => { $ty };
}

/// Input buffer of `count` elements.
#[macro_export]
macro_rules! in_ecount {
    ($ty:ty, $count:expr $(,)?) => { $ty };
}

/// Output buffer of `count` elements.
#[macro_export]
macro_rules! out_ecount {
    ($ty:ty, $count:expr $(,)?) => { $ty };
}

/// Input and output buffer of `count` elements.
#[macro_export]
macro_rules! inout_ecount {
    ($ty:ty, $count:expr $(,)?) => { $ty };
}
