//! Base integer aliases.
//!
//! The kernel environment brings its own base types; the hosted build
//! synthesizes them from fixed-width integers. Either way algorithm code sees
//! the same names with the same widths.

use core::ffi::{c_int, c_long, c_uint, c_ulong};

/// An 8-bit unsigned byte, as supplied by the kernel environment.
#[cfg(feature = "kernel")]
pub type Byte = core::ffi::c_uchar;

/// An 8-bit unsigned byte.
#[cfg(not(feature = "kernel"))]
pub type Byte = u8;

/// 16-bit unsigned word.
pub type Word = u16;

/// 32-bit unsigned double word.
pub type DWord = u32;

/// 64-bit unsigned quad word.
pub type QWord = u64;

/// The platform's C `int`; all geometry fields use it.
pub type Int = c_int;

/// The platform's C `unsigned int`.
pub type UInt = c_uint;

/// The platform's C `long`.
pub type Long = c_long;

/// The platform's C `unsigned long`.
pub type ULong = c_ulong;

assert_size!(Byte, 1);
c_assert!(Byte::MIN == 0, "Byte must be unsigned");
assert_size!(Int, 4);
assert_size!(UInt, 4);
assert_size!(Word, 2);
assert_size!(DWord, 4);
assert_size!(QWord, 8);
