use crate::geometry::{Point, Size};

/// Errors reported by the interop layer at runtime.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum InteropError {
    #[error("an assertion hook is already installed")]
    AssertionHookAlreadyInstalled,
    #[error("a rectangle at {origin:?} with extent {size:?} exceeds the coordinate range")]
    GeometryOverflow { origin: Point, size: Size },
}
