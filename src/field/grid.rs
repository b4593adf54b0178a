//! Nearest-seed propagation used by the distance field builder. This is the classic
//! "8-points signed sequential Euclidean distance" sweep: two passes over the grid, each
//! followed by a row correction in the opposite horizontal direction.

use super::BinaryImage;

/// Offset from a cell to the nearest known seed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Point {
    pub dx: i32,
    pub dy: i32,
}

impl Point {
    /// The cell is a seed itself.
    pub const INSIDE: Point = Point { dx: 0, dy: 0 };
    /// No seed has been found yet.
    pub const EMPTY: Point = Point {
        dx: 9999,
        dy: 9999,
    };

    #[inline]
    pub fn dist_sq(self) -> i32 {
        self.dx * self.dx + self.dy * self.dy
    }

    #[inline]
    pub fn dist(self) -> f32 {
        f64::from(self.dist_sq()).sqrt() as f32
    }
}

pub struct Grid {
    w: i32,
    h: i32,
    v: Vec<Point>,
}

impl Grid {
    /// Creates a grid of the size of `image`, where the pixels accepted by `seed` are
    /// `Point::INSIDE` and every other cell is `Point::EMPTY`. `seed` receives the
    /// foreground flag of the pixel.
    pub fn new<F>(image: &BinaryImage, seed: F) -> Self
    where
        F: Fn(bool) -> bool,
    {
        let v = (0..image.len())
            .map(|i| {
                if seed(image.is_foreground_at(i)) {
                    Point::INSIDE
                } else {
                    Point::EMPTY
                }
            })
            .collect();

        Grid {
            w: image.width(),
            h: image.height(),
            v: v,
        }
    }

    /// Out-of-grid reads return `Point::EMPTY`.
    #[inline]
    pub fn get(&self, row: i32, col: i32) -> Point {
        if row >= 0 && col >= 0 && row < self.h && col < self.w {
            self.v[(row * self.w + col) as usize]
        } else {
            Point::EMPTY
        }
    }

    /// Out-of-grid writes are ignored.
    #[inline]
    pub fn set(&mut self, row: i32, col: i32, p: Point) {
        if row >= 0 && col >= 0 && row < self.h && col < self.w {
            self.v[(row * self.w + col) as usize] = p;
        }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.v
    }

    #[inline]
    fn compare(&self, p: &mut Point, row: i32, col: i32, offset_x: i32, offset_y: i32) {
        let mut other = self.get(row + offset_y, col + offset_x);
        other.dx += offset_x;
        other.dy += offset_y;

        if other.dist_sq() < p.dist_sq() {
            *p = other;
        }
    }

    /// Propagates the seeds so that every cell holds the offset to its (approximately)
    /// nearest seed. The sweep order is part of the result and must not change.
    pub fn propagate(&mut self) {
        for y in 0..self.h {
            for x in 0..self.w {
                let mut p = self.get(y, x);
                self.compare(&mut p, y, x, -1, 0);
                self.compare(&mut p, y, x, 0, -1);
                self.compare(&mut p, y, x, -1, -1);
                self.compare(&mut p, y, x, 1, -1);
                self.set(y, x, p);
            }

            for x in (0..self.w).rev() {
                let mut p = self.get(y, x);
                self.compare(&mut p, y, x, 1, 0);
                self.set(y, x, p);
            }
        }

        for y in (0..self.h).rev() {
            for x in (0..self.w).rev() {
                let mut p = self.get(y, x);
                self.compare(&mut p, y, x, 1, 0);
                self.compare(&mut p, y, x, 0, 1);
                self.compare(&mut p, y, x, -1, 1);
                self.compare(&mut p, y, x, 1, 1);
                self.set(y, x, p);
            }

            for x in 0..self.w {
                let mut p = self.get(y, x);
                self.compare(&mut p, y, x, -1, 0);
                self.set(y, x, p);
            }
        }
    }
}
