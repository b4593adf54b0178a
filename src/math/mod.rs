//! This module contains the math utils, the vector types mainly come from `cgmath`.

pub use cgmath::{Point2, Vector2};

pub mod rect;
pub use self::rect::Rect2D;

/// Returns true if `v` is a positive power of two. Non-power-of-two textures are
/// supported everywhere, but they are worth a note in the build log.
#[inline]
pub fn is_power_of_two(v: i32) -> bool {
    v > 0 && (v & (v - 1)) == 0
}
