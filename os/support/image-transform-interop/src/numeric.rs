//! # Numeric Helpers
//!
//! `min`/`max` as plain functions. Each argument is evaluated exactly once, so
//! side effects in the arguments are safe.
//!
//! The comparison is the classic ternary: [`min`] returns `x` only if
//! `x < y`, [`max`] returns `x` only if `x > y`. Ties and unordered values
//! (`NaN`) therefore yield `y`.
//!
//! ```
//! use image_transform_interop::numeric::{clamp, max, min};
//!
//! assert_eq!(min(3, 5), 3);
//! assert_eq!(max(3, 5), 5);
//! assert_eq!(clamp(300, 0, 255), 255);
//! assert!(min(f32::NAN, 1.0) == 1.0);
//! ```
//!
//! For constant contexts, [`consts`] carries `const fn` variants per
//! primitive type.

/// The smaller of `x` and `y`; `y` on ties.
#[allow(clippy::inline_always)]
#[inline(always)]
pub fn min<T: PartialOrd>(x: T, y: T) -> T {
    if x < y { x } else { y }
}

/// The larger of `x` and `y`; `y` on ties.
#[allow(clippy::inline_always)]
#[inline(always)]
pub fn max<T: PartialOrd>(x: T, y: T) -> T {
    if x > y { x } else { y }
}

/// Restricts `value` to `[lo, hi]`.
///
/// Unlike [`Ord::clamp`] this does not panic on `lo > hi`; the result is
/// then `hi`.
#[allow(clippy::inline_always)]
#[inline(always)]
pub fn clamp<T: PartialOrd>(value: T, lo: T, hi: T) -> T {
    min(max(value, lo), hi)
}

/// `const fn` variants of [`min`](super::min) and [`max`](super::max).
///
/// ```
/// use image_transform_interop::c_assert;
/// use image_transform_interop::numeric::consts::{max_i32, min_i32};
///
/// c_assert!(min_i32(3, 5) == 3);
/// c_assert!(max_i32(3, 5) == 5);
/// ```
pub mod consts {
    macro_rules! const_min_max {
        ($($ty:ty => $min:ident, $max:ident;)*) => {
            $(
                #[doc = concat!("Constant `min` for `", stringify!($ty), "`.")]
                #[inline]
                #[must_use]
                pub const fn $min(x: $ty, y: $ty) -> $ty {
                    if x < y { x } else { y }
                }

                #[doc = concat!("Constant `max` for `", stringify!($ty), "`.")]
                #[inline]
                #[must_use]
                pub const fn $max(x: $ty, y: $ty) -> $ty {
                    if x > y { x } else { y }
                }
            )*
        };
    }

    const_min_max! {
        u8 => min_u8, max_u8;
        u16 => min_u16, max_u16;
        u32 => min_u32, max_u32;
        u64 => min_u64, max_u64;
        usize => min_usize, max_usize;
        i8 => min_i8, max_i8;
        i16 => min_i16, max_i16;
        i32 => min_i32, max_i32;
        i64 => min_i64, max_i64;
        isize => min_isize, max_isize;
        f32 => min_f32, max_f32;
        f64 => min_f64, max_f64;
    }
}
