use std::cmp;
use std::fmt;

use super::{Point2, Vector2};

/// An integer rectangle, with top-left corner at `min`, and the exclusive bottom-right
/// corner at `max`.
#[derive(Serialize, Deserialize, Copy, Clone, PartialEq)]
pub struct Rect2D {
    pub min: Point2<i32>,
    pub max: Point2<i32>,
}

impl Rect2D {
    #[inline]
    pub fn new(min: Point2<i32>, max: Point2<i32>) -> Self {
        Rect2D { min: min, max: max }
    }

    /// Creates a rectangle at `min` spanning `wh`.
    #[inline]
    pub fn from_min_and_wh(min: Point2<i32>, wh: Vector2<i32>) -> Self {
        Rect2D {
            min: min,
            max: min + wh,
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn wh(&self) -> Vector2<i32> {
        Vector2::new(self.width(), self.height())
    }

    /// Inverted rectangles count as empty.
    #[inline]
    pub fn area(&self) -> i32 {
        cmp::max(0, self.width()) * cmp::max(0, self.height())
    }

    /// Returns true if a rectangle of `wh` could be placed inside.
    #[inline]
    pub fn can_hold(&self, wh: Vector2<i32>) -> bool {
        self.width() >= wh.x && self.height() >= wh.y
    }

    #[inline]
    pub fn contains_rect(&self, rhs: &Rect2D) -> bool {
        rhs.min.x >= self.min.x
            && rhs.min.y >= self.min.y
            && rhs.max.x <= self.max.x
            && rhs.max.y <= self.max.y
    }

    /// Returns true if the two rectangles share at least one pixel.
    #[inline]
    pub fn overlaps(&self, rhs: &Rect2D) -> bool {
        cmp::max(self.min.x, rhs.min.x) < cmp::min(self.max.x, rhs.max.x)
            && cmp::max(self.min.y, rhs.min.y) < cmp::min(self.max.y, rhs.max.y)
    }
}

impl fmt::Debug for Rect2D {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[{},{},{},{}]",
            self.min.x, self.min.y, self.max.x, self.max.y
        )
    }
}
