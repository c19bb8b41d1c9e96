#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All values are signed pixels with the origin at the top-left of the
//! parent's client area. Locations may go negative (a bottom-docked container
//! grows upward past its parent's origin), so everything is `i32`.

/// A location in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// Zero size.
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a new size.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// A rectangle used for child bounds and content boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: i32,
    /// Top edge (inclusive).
    pub y: i32,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from a location and a size.
    #[inline]
    pub const fn from_parts(location: Point, size: Size) -> Self {
        Self::new(location.x, location.y, size.width, size.height)
    }

    /// Top-left corner.
    #[inline]
    pub const fn location(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Width and height.
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// True when either dimension is zero or negative.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Half-open containment: the right and bottom edges are outside.
    #[inline]
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// The box left after removing `sides` (padding or margin).
    ///
    /// The origin moves by `left`/`top`; width and height stop at zero when
    /// the sides are wider than the rectangle.
    pub fn inner(&self, sides: Sides) -> Rect {
        Rect {
            x: self.x.saturating_add(sides.left),
            y: self.y.saturating_add(sides.top),
            width: self.width.saturating_sub(sides.horizontal_sum()).max(0),
            height: self.height.saturating_sub(sides.vertical_sum()).max(0),
        }
    }
}

/// Four edge thicknesses, used for container padding and child margins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Sides {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Sides {
    /// The same thickness on every edge.
    pub const fn all(val: i32) -> Self {
        Self::new(val, val, val, val)
    }

    /// Clockwise from the top, like CSS shorthand.
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Horizontal space taken (`left + right`).
    #[inline]
    pub const fn horizontal_sum(&self) -> i32 {
        self.left.saturating_add(self.right)
    }

    /// Vertical space taken (`top + bottom`).
    #[inline]
    pub const fn vertical_sum(&self) -> i32 {
        self.top.saturating_add(self.bottom)
    }
}

impl From<i32> for Sides {
    fn from(val: i32) -> Self {
        Self::all(val)
    }
}

/// `(vertical, horizontal)`.
impl From<(i32, i32)> for Sides {
    fn from((vertical, horizontal): (i32, i32)) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }
}

impl From<(i32, i32, i32, i32)> for Sides {
    fn from((top, right, bottom, left): (i32, i32, i32, i32)) -> Self {
        Self::new(top, right, bottom, left)
    }
}
