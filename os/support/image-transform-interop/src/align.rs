//! # Alignment and Inlining
//!
//! [`Aligned<A, T>`] raises the alignment of any `T` to the alignment named by
//! the marker `A` (or keeps `T`'s own if that is larger). [`aligned!`] spells
//! the same type from a byte count, and [`SseAligned<T>`] fixes it to the
//! 16-byte vector register width.
//!
//! ```
//! use core::mem::{align_of, size_of};
//! use image_transform_interop::{SseAligned, aligned};
//!
//! #[derive(Default)]
//! struct Pixel4 {
//!     bgra: [u8; 16],
//! }
//!
//! let px: SseAligned<Pixel4> = SseAligned::default();
//! assert_eq!(align_of::<SseAligned<Pixel4>>(), 16);
//! assert_eq!(size_of::<aligned!(32, Pixel4)>(), 32);
//! assert_eq!(px.bgra, [0; 16]);
//! ```
//!
//! Only power-of-two widths from 1 to 64 bytes are known:
//!
//! ```compile_fail
//! use image_transform_interop::aligned;
//!
//! type Odd = aligned!(24, u8);
//! ```

use core::fmt;
use core::ops::{Deref, DerefMut};

#[cfg(any(
    target_arch = "x86",
    target_arch = "x86_64",
    target_arch = "arm",
    target_arch = "aarch64",
    target_arch = "wasm32"
))]
/// Width of the target's vector registers (SSE / NEON / simd128), in bytes.
pub const VECTOR_REGISTER_BYTES: usize = 16;

#[cfg(not(any(
    target_arch = "x86",
    target_arch = "x86_64",
    target_arch = "arm",
    target_arch = "aarch64",
    target_arch = "wasm32"
)))]
compile_error!(
    "image-transform-interop: no vector alignment is known for this target architecture"
);

mod sealed {
    pub trait Sealed {}
}

/// A zero-sized marker carrying an alignment.
pub trait Alignment: Copy + Default + sealed::Sealed {
    /// The alignment in bytes.
    const BYTES: usize;
}

macro_rules! alignment_markers {
    ($($name:ident => $bytes:literal),* $(,)?) => {
        $(
            #[doc = concat!("Alignment marker for ", stringify!($bytes), " bytes.")]
            #[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
            #[repr(align($bytes))]
            pub struct $name;

            impl sealed::Sealed for $name {}

            impl Alignment for $name {
                const BYTES: usize = $bytes;
            }

            assert_align!($name, $bytes);
            assert_size!($name, 0);
        )*
    };
}

alignment_markers! {
    A1 => 1,
    A2 => 2,
    A4 => 4,
    A8 => 8,
    A16 => 16,
    A32 => 32,
    A64 => 64,
}

/// `T` stored at an alignment of at least `A::BYTES`.
///
/// The wrapper is `#[repr(C)]`: the value sits at offset 0 and the size is
/// rounded up to a multiple of the alignment.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
#[repr(C)]
pub struct Aligned<A: Alignment, T> {
    _alignment: [A; 0],
    value: T,
}

/// `T` aligned to the vector register width.
pub type SseAligned<T> = Aligned<A16, T>;

assert_align!(SseAligned<u8>, VECTOR_REGISTER_BYTES);
assert_size!(SseAligned<u8>, 16);
assert_align!(SseAligned<u128>, 16);

impl<A: Alignment, T> Aligned<A, T> {
    #[inline]
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self {
            _alignment: [],
            value,
        }
    }

    #[inline]
    #[must_use]
    pub fn into_inner(self) -> T {
        self.value
    }

    #[inline]
    #[must_use]
    pub const fn get(&self) -> &T {
        &self.value
    }

    #[inline]
    #[must_use]
    pub const fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<A: Alignment, T> Deref for Aligned<A, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<A: Alignment, T> DerefMut for Aligned<A, T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.value
    }
}

impl<A: Alignment, T> From<T> for Aligned<A, T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<A: Alignment, T: fmt::Debug> fmt::Debug for Aligned<A, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aligned")
            .field("align", &A::BYTES)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

/// Whether `ptr` is aligned to `A::BYTES`.
///
/// For buffers handed in by callers, whose alignment the type system cannot
/// see.
#[inline]
#[must_use]
pub fn is_aligned_to<A: Alignment, T>(ptr: *const T) -> bool {
    ptr.addr().is_multiple_of(A::BYTES)
}

/// `T` aligned to `n` bytes, for `n` in 1, 2, 4, …, 64.
///
/// ```
/// use image_transform_interop::aligned;
///
/// let v: aligned!(8, u8) = 7.into();
/// assert_eq!(*v, 7);
/// ```
#[macro_export]
macro_rules! aligned {
    (1, $ty:ty) => { $crate::align::Aligned<$crate::align::A1, $ty> };
    (2, $ty:ty) => { $crate::align::Aligned<$crate::align::A2, $ty> };
    (4, $ty:ty) => { $crate::align::Aligned<$crate::align::A4, $ty> };
    (8, $ty:ty) => { $crate::align::Aligned<$crate::align::A8, $ty> };
    (16, $ty:ty) => { $crate::align::Aligned<$crate::align::A16, $ty> };
    (32, $ty:ty) => { $crate::align::Aligned<$crate::align::A32, $ty> };
    (64, $ty:ty) => { $crate::align::Aligned<$crate::align::A64, $ty> };
}

/// Marks every function in the block `#[inline(always)]`.
///
/// ```
/// use image_transform_interop::force_inline;
///
/// force_inline! {
///     fn luma(r: u8, g: u8, b: u8) -> u8 {
///         ((u16::from(r) * 77 + u16::from(g) * 150 + u16::from(b) * 29) >> 8) as u8
///     }
/// }
///
/// assert_eq!(luma(255, 255, 255), 255);
/// ```
#[macro_export]
macro_rules! force_inline {
    ($($item:item)*) => {
        $(
            #[allow(clippy::inline_always)]
            #[inline(always)]
            $item
        )*
    };
}
