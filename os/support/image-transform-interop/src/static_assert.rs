//! Compile-time assertions and diagnostic suppression.

/// Compile-time assertion.
///
/// Expands to an anonymous `const` item, so a false condition fails the build
/// with a diagnostic and never reaches a running program. May be used at
/// module level or inside a function body, any number of times.
///
/// ```
/// use image_transform_interop::c_assert;
///
/// c_assert!(1 == 1);
/// c_assert!(u8::MAX as usize + 1 == 256, "u8 must hold 256 values");
/// ```
///
/// ```compile_fail
/// use image_transform_interop::c_assert;
///
/// c_assert!(1 == 0);
/// ```
#[macro_export]
macro_rules! c_assert {
    ($cond:expr $(,)?) => {
        const _: () = if !$cond {
            ::core::panic!(
                "{}",
                ::core::concat!("compile-time assertion failed: ", ::core::stringify!($cond))
            )
        };
    };
    ($cond:expr, $msg:literal $(,)?) => {
        const _: () = if !$cond {
            ::core::panic!("{}", $msg)
        };
    };
}

/// Compile-time assertion on the size of a type, in bytes.
///
/// ```
/// use image_transform_interop::assert_size;
///
/// assert_size!(u32, 4);
/// ```
#[macro_export]
macro_rules! assert_size {
    ($ty:ty, $size:expr $(,)?) => {
        $crate::c_assert!(::core::mem::size_of::<$ty>() == $size);
    };
}

/// Compile-time assertion on the alignment of a type, in bytes.
///
/// ```
/// use image_transform_interop::{SseAligned, assert_align};
///
/// assert_align!(SseAligned<u8>, 16);
/// ```
#[macro_export]
macro_rules! assert_align {
    ($ty:ty, $align:expr $(,)?) => {
        $crate::c_assert!(::core::mem::align_of::<$ty>() == $align);
    };
}

/// Marks parameters as intentionally unused.
///
/// Only borrows its arguments; it evaluates nothing with side effects and
/// moves nothing.
///
/// ```
/// use image_transform_interop::unreferenced_parameter;
///
/// fn callback(context: &str, flags: u32) -> bool {
///     unreferenced_parameter!(context, flags);
///     true
/// }
///
/// assert!(callback("ctx", 0));
/// ```
#[macro_export]
macro_rules! unreferenced_parameter {
    ($($param:expr),+ $(,)?) => {{
        $( let _ = &$param; )+
    }};
}
