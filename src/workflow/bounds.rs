//! Glyph images mark the extent of the glyph with pure red bars along the first row and the
//! first column. The glyph sits between the end of the first bar and the start of the
//! second one, or before the first bar if there is only one.

use crate::math::{Point2, Rect2D};

const RED: [u8; 4] = [255, 0, 0, 255];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum State {
    LeftOfFirst,
    InsideFirst,
    Middle,
    InsideSecond,
    RightOfSecond,
}

/// Returns the glyph rectangle of a `w`x`h` RGBA image.
pub fn bounding_rect(rgba: &[u8], w: i32, h: i32) -> Rect2D {
    let pixel = |x: i32, y: i32| {
        let i = ((y * w + x) * 4) as usize;
        [rgba[i], rgba[i + 1], rgba[i + 2], rgba[i + 3]]
    };

    let (min_x, max_x) = extent(w, |i| pixel(i, 0));
    let (min_y, max_y) = extent(h, |i| pixel(0, i));

    Rect2D::new(Point2::new(min_x, min_y), Point2::new(max_x, max_y))
}

fn extent<F>(len: i32, pixel: F) -> (i32, i32)
where
    F: Fn(i32) -> [u8; 4],
{
    let mut state = State::LeftOfFirst;
    let mut first = (0, 0);
    let mut second = (0, 0);

    for i in 0..len {
        let p = pixel(i);

        state = match state {
            State::LeftOfFirst if p == RED => {
                first.0 = i;
                State::InsideFirst
            }
            State::InsideFirst if p[3] == 0 => {
                first.1 = i;
                State::Middle
            }
            State::Middle if p == RED => {
                second.0 = i;
                State::InsideSecond
            }
            State::InsideSecond if p[3] == 0 => {
                second.1 = i;
                State::RightOfSecond
            }
            _ => state,
        };
    }

    match state {
        State::LeftOfFirst => (0, len),
        State::InsideFirst | State::Middle => (0, first.0),
        State::InsideSecond | State::RightOfSecond => (first.1, second.0),
    }
}
