//! Viewport-relative geometry shared by every motion primitive.
//!
//! All values are CSS pixels as `f64`. Rects are expressed relative to the
//! viewport's top-left corner (what a bounding-client-rect query returns),
//! while [`LayoutBox`] is expressed in document coordinates and converted on
//! demand for a given scroll position.

use serde::{Deserialize, Serialize};

/// A point in viewport coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Size of the visible viewport
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The visible area as a rect at the origin
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// Axis-aligned rectangle relative to the viewport
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Grow (positive) or shrink (negative) the rect on every side
    ///
    /// The center stays put, so a rect shrunk past zero collapses to its
    /// center point.
    pub fn inflate(&self, margin: f64) -> Rect {
        let width = (self.width + 2.0 * margin).max(0.0);
        let height = (self.height + 2.0 * margin).max(0.0);
        Rect::new(
            self.x + (self.width - width) / 2.0,
            self.y + (self.height - height) / 2.0,
            width,
            height,
        )
    }

    /// Whether two rects overlap by a non-empty area
    ///
    /// Zero-sized rects count as intersecting when they lie inside `other`,
    /// so an empty marker element can still be observed.
    pub fn intersects(&self, other: &Rect) -> bool {
        let horizontal = if self.width > 0.0 && other.width > 0.0 {
            self.left() < other.right() && self.right() > other.left()
        } else {
            self.left() <= other.right() && self.right() >= other.left()
        };
        let vertical = if self.height > 0.0 && other.height > 0.0 {
            self.top() < other.bottom() && self.bottom() > other.top()
        } else {
            self.top() <= other.bottom() && self.bottom() >= other.top()
        };
        horizontal && vertical
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }
}

/// Element box in document coordinates (independent of scroll)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl LayoutBox {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Bounding rect relative to the viewport when the page is scrolled to `scroll_y`
    pub fn client_rect(&self, scroll_y: f64) -> Rect {
        Rect::new(self.left, self.top - scroll_y, self.width, self.height)
    }
}
