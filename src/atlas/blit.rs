use std::cmp;

use crate::math::{Point2, Rect2D, Vector2};

/// Pretty general blit function. `src` and `dst` are two row-major 2D arrays with
/// dimensions `src_wh` and `dst_wh`. The pixels of `src_rect` inside `src` are copied to
/// `dst_min` inside `dst`, and clipped to `dst_rect`. Anything falling outside of either
/// buffer is clipped as well.
pub fn blit_rect<T: Copy>(
    src_wh: Vector2<i32>,
    dst_wh: Vector2<i32>,
    src_rect: Rect2D,
    dst_rect: Rect2D,
    dst_min: Point2<i32>,
    src: &[T],
    dst: &mut [T],
) {
    let clip = Rect2D::new(
        Point2::new(cmp::max(0, dst_rect.min.x), cmp::max(0, dst_rect.min.y)),
        Point2::new(
            cmp::min(dst_wh.x, dst_rect.max.x),
            cmp::min(dst_wh.y, dst_rect.max.y),
        ),
    );

    let min = Point2::new(
        clamp(dst_min.x, clip.min.x, clip.max.x),
        clamp(dst_min.y, clip.min.y, clip.max.y),
    );

    let src_w = cmp::min(src_rect.width(), src_wh.x - src_rect.min.x);
    let src_h = cmp::min(src_rect.height(), src_wh.y - src_rect.min.y);

    let row_width = cmp::min(clip.max.x, min.x + src_w) - min.x;
    let rows = cmp::min(clip.max.y, min.y + src_h) - min.y;

    if row_width <= 0 || rows <= 0 || src_rect.min.x < 0 || src_rect.min.y < 0 {
        return;
    }

    let row_width = row_width as usize;
    for row in 0..rows {
        let dst_start = ((min.y + row) * dst_wh.x + min.x) as usize;
        let src_start = ((src_rect.min.y + row) * src_wh.x + src_rect.min.x) as usize;

        dst[dst_start..dst_start + row_width]
            .copy_from_slice(&src[src_start..src_start + row_width]);
    }
}

#[inline]
fn clamp(v: i32, min: i32, max: i32) -> i32 {
    cmp::max(min, cmp::min(max, v))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x0: i32, y0: i32, x1: i32, y1: i32) -> Rect2D {
        Rect2D::new(Point2::new(x0, y0), Point2::new(x1, y1))
    }

    #[test]
    fn copy_into_corner() {
        let src = [1, 2, 3, 4, 5, 6];
        let mut dst = [0; 16];

        blit_rect(
            Vector2::new(3, 2),
            Vector2::new(4, 4),
            rect(0, 0, 3, 2),
            rect(0, 0, 4, 4),
            Point2::new(1, 2),
            &src,
            &mut dst,
        );

        assert_eq!(
            dst,
            [
                0, 0, 0, 0, //
                0, 0, 0, 0, //
                0, 1, 2, 3, //
                0, 4, 5, 6,
            ]
        );
    }

    #[test]
    fn non_square_source_rows() {
        // A wide source: rows must advance by the source width.
        let src: Vec<i32> = (0..8).collect();
        let mut dst = vec![0; 8];

        blit_rect(
            Vector2::new(4, 2),
            Vector2::new(4, 2),
            rect(0, 0, 4, 2),
            rect(0, 0, 4, 2),
            Point2::new(0, 0),
            &src,
            &mut dst,
        );

        assert_eq!(dst, src);
    }

    #[test]
    fn clipped() {
        let src = [1, 2, 3, 4];
        let mut dst = [0; 9];

        blit_rect(
            Vector2::new(2, 2),
            Vector2::new(3, 3),
            rect(0, 0, 2, 2),
            rect(0, 0, 3, 3),
            Point2::new(2, 2),
            &src,
            &mut dst,
        );

        assert_eq!(dst, [0, 0, 0, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn sub_rect() {
        let src: Vec<i32> = (0..9).collect();
        let mut dst = [0; 4];

        blit_rect(
            Vector2::new(3, 3),
            Vector2::new(2, 2),
            rect(1, 1, 3, 3),
            rect(0, 0, 2, 2),
            Point2::new(0, 0),
            &src,
            &mut dst,
        );

        assert_eq!(dst, [4, 5, 7, 8]);
    }
}
