//! # Geometry Value Types
//!
//! Minimal `Point`, `Rect` and `Size` structs for algorithm code.
//!
//! The field order and widths follow the conventional platform layout
//! (`x, y`; `left, top, right, bottom`; `cx, cy`, all C `int`), so values stay
//! bit-compatible with the platform's own definitions and can cross an FFI
//! boundary as-is. The layout is pinned at compile time by
//! [`ContiguousLayout`].
//!
//! ## Rectangles
//!
//! Rectangles are half-open: `left` and `top` are inside, `right` and
//! `bottom` are not. A rectangle with `right <= left` or `bottom <= top` is
//! empty.
//!
//! ```
//! use image_transform_interop::{Point, Rect};
//!
//! let a = Rect::new(0, 0, 10, 10);
//! let b = Rect::new(5, 5, 20, 20);
//!
//! assert_eq!(a.intersect(&b), Some(Rect::new(5, 5, 10, 10)));
//! assert!(a.contains(Point::new(9, 9)));
//! assert!(!a.contains(Point::new(10, 9)));
//! ```

use crate::error::InteropError;
use crate::numeric::{max, min};
use crate::types::Int;
use core::ops::{Add, Sub};
use interop_layout_derive::ContiguousLayout;

/// A point in a 2D integer coordinate space.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, ContiguousLayout)]
#[layout(size = 8, align = 4)]
#[repr(C)]
pub struct Point {
    pub x: Int,
    pub y: Int,
}

/// An axis-aligned rectangle given by its edges.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, ContiguousLayout)]
#[layout(size = 16, align = 4)]
#[repr(C)]
pub struct Rect {
    pub left: Int,
    pub top: Int,
    pub right: Int,
    pub bottom: Int,
}

/// A 2D extent.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, ContiguousLayout)]
#[layout(size = 8, align = 4)]
#[repr(C)]
pub struct Size {
    pub cx: Int,
    pub cy: Int,
}

pub type PPoint = *mut Point;
pub type LpPoint = *mut Point;
pub type PRect = *mut Rect;
pub type LpRect = *mut Rect;
pub type PSize = *mut Size;
pub type LpSize = *mut Size;

pub type PointRef<'a> = &'a Point;
pub type RectRef<'a> = &'a Rect;
pub type SizeRef<'a> = &'a Size;

assert_size!(Point, 2 * size_of::<Int>());
assert_size!(Rect, 4 * size_of::<Int>());
assert_size!(Size, 2 * size_of::<Int>());

impl Point {
    #[inline]
    #[must_use]
    pub const fn new(x: Int, y: Int) -> Self {
        Self { x, y }
    }

    /// Moves the point by `(dx, dy)`, saturating at the coordinate range.
    #[inline]
    #[must_use]
    pub const fn offset(self, dx: Int, dy: Int) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

/// Component-wise; saturates at the coordinate range like [`Point::offset`].
impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

/// Component-wise; saturates at the coordinate range.
impl Sub for Point {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

impl From<(Int, Int)> for Point {
    #[inline]
    fn from((x, y): (Int, Int)) -> Self {
        Self::new(x, y)
    }
}

impl Size {
    #[inline]
    #[must_use]
    pub const fn new(cx: Int, cy: Int) -> Self {
        Self { cx, cy }
    }

    /// Number of cells covered; never overflows.
    #[inline]
    #[must_use]
    pub fn area(self) -> i64 {
        i64::from(self.cx) * i64::from(self.cy)
    }

    /// `true` if either extent is zero or negative.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.cx <= 0 || self.cy <= 0
    }
}

impl From<(Int, Int)> for Size {
    #[inline]
    fn from((cx, cy): (Int, Int)) -> Self {
        Self::new(cx, cy)
    }
}

impl Rect {
    #[inline]
    #[must_use]
    pub const fn new(left: Int, top: Int, right: Int, bottom: Int) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The rectangle spanned by two corner points.
    #[inline]
    #[must_use]
    pub const fn from_points(top_left: Point, bottom_right: Point) -> Self {
        Self::new(top_left.x, top_left.y, bottom_right.x, bottom_right.y)
    }

    /// The rectangle at `origin` with extent `size`.
    ///
    /// # Errors
    /// [`InteropError::GeometryOverflow`] if the far edges do not fit the
    /// coordinate type.
    pub const fn from_origin_size(origin: Point, size: Size) -> Result<Self, InteropError> {
        match (origin.x.checked_add(size.cx), origin.y.checked_add(size.cy)) {
            (Some(right), Some(bottom)) => Ok(Self::new(origin.x, origin.y, right, bottom)),
            _ => Err(InteropError::GeometryOverflow { origin, size }),
        }
    }

    /// Horizontal extent; saturates instead of overflowing.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> Int {
        self.right.saturating_sub(self.left)
    }

    /// Vertical extent; saturates instead of overflowing.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> Int {
        self.bottom.saturating_sub(self.top)
    }

    #[inline]
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    #[inline]
    #[must_use]
    pub const fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    #[inline]
    #[must_use]
    pub const fn bottom_right(&self) -> Point {
        Point::new(self.right, self.bottom)
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.right <= self.left || self.bottom <= self.top
    }

    /// Whether `p` lies inside; the right and bottom edges are exclusive.
    #[inline]
    #[must_use]
    pub const fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x < self.right && p.y >= self.top && p.y < self.bottom
    }

    /// The overlap of both rectangles, or `None` if they do not overlap.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let r = Self::new(
            max(self.left, other.left),
            max(self.top, other.top),
            min(self.right, other.right),
            min(self.bottom, other.bottom),
        );
        if r.is_empty() { None } else { Some(r) }
    }

    /// The smallest rectangle containing both. Empty operands are ignored;
    /// if both are empty the result is the zero rectangle.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => Self::default(),
            (true, false) => *other,
            (false, true) => *self,
            (false, false) => Self::new(
                min(self.left, other.left),
                min(self.top, other.top),
                max(self.right, other.right),
                max(self.bottom, other.bottom),
            ),
        }
    }

    /// Moves all edges by `(dx, dy)`, saturating at the coordinate range.
    #[inline]
    #[must_use]
    pub const fn offset(&self, dx: Int, dy: Int) -> Self {
        Self::new(
            self.left.saturating_add(dx),
            self.top.saturating_add(dy),
            self.right.saturating_add(dx),
            self.bottom.saturating_add(dy),
        )
    }

    /// Swaps inverted edges so that `left <= right` and `top <= bottom`.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self::new(
            min(self.left, self.right),
            min(self.top, self.bottom),
            max(self.left, self.right),
            max(self.top, self.bottom),
        )
    }
}
