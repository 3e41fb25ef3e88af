//! Screen geometry primitives
//!
//! Integer screen coordinates with the origin at the top-left corner,
//! x growing right and y growing down.

/// A point in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset this point by `dx`, `dy`
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Width and height in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    /// Create a new size
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Check if either dimension is zero
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    /// Top-left corner
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    /// Create a new rectangle from its top-left corner and size
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Rectangle anchored at (0, 0)
    pub const fn with_size(size: Size) -> Self {
        Self {
            origin: Point::new(0, 0),
            size,
        }
    }

    /// Exclusive right edge
    pub const fn right(&self) -> i32 {
        self.origin.x + self.size.width as i32
    }

    /// Exclusive bottom edge
    pub const fn bottom(&self) -> i32 {
        self.origin.y + self.size.height as i32
    }

    /// Center point, rounding toward the origin
    pub const fn center(&self) -> Point {
        Point {
            x: self.origin.x + (self.size.width / 2) as i32,
            y: self.origin.y + (self.size.height / 2) as i32,
        }
    }

    /// Check whether a point lies inside the rectangle
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.y >= self.origin.y
            && point.x < self.right()
            && point.y < self.bottom()
    }

    /// Check whether two rectangles share at least one pixel
    pub const fn overlaps(&self, other: &Rect) -> bool {
        if self.size.is_empty() || other.size.is_empty() {
            return false;
        }
        self.origin.x < other.right()
            && other.origin.x < self.right()
            && self.origin.y < other.bottom()
            && other.origin.y < self.bottom()
    }

    /// Intersection of two rectangles, `None` if they don't overlap
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        if !self.overlaps(other) {
            return None;
        }
        let left = self.origin.x.max(other.origin.x);
        let top = self.origin.y.max(other.origin.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Some(Rect::new(
            Point::new(left, top),
            Size::new((right - left) as u32, (bottom - top) as u32),
        ))
    }
}

/// Fill color
///
/// The target panels are 1-bit, so the palette is the two colors the
/// face actually uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    Black,
    White,
}
