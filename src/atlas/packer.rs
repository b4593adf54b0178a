//! Guillotine rectangle packing.
//!
//! The free space of the atlas is kept as a list of rectangles sorted by descending area.
//! Every placement puts a rectangle into the top-left corner of a free bin and cuts the
//! remaining L-shaped space into two rectangles with one straight cut.

use crate::math::{Point2, Rect2D, Vector2};

/// The strategy used to pick a free bin for the next rectangle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinChoice {
    /// Scans the free list from its end and takes the first bin that fits, which is the
    /// smallest one since the list is sorted by descending area.
    Smallest,
    /// Takes the largest bin that fits. Reproduces the layouts of older atlas builds.
    Largest,
}

impl Default for BinChoice {
    fn default() -> Self {
        BinChoice::Smallest
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Division {
    pub left: Rect2D,
    pub right: Rect2D,
    pub occupied: Rect2D,
}

/// Places a rectangle of `wh` in the top-left corner of `dest`, and divides the remaining
/// space into two rectangles. Of the two ways to cut, the one that leaves the largest
/// single rectangle wins. Returns `None` if `wh` does not fit.
pub fn divide_with_rect(dest: &Rect2D, wh: Vector2<i32>) -> Option<Division> {
    if !dest.can_hold(wh) {
        return None;
    }

    let occupied = Rect2D::from_min_and_wh(dest.min, wh);

    let rects = [
        // Vertical cut, the right part keeps the full height.
        Rect2D::new(Point2::new(occupied.max.x, occupied.min.y), dest.max),
        Rect2D::new(
            Point2::new(occupied.min.x, occupied.max.y),
            Point2::new(occupied.max.x, dest.max.y),
        ),
        // Horizontal cut, the bottom part keeps the full width.
        Rect2D::new(Point2::new(occupied.min.x, occupied.max.y), dest.max),
        Rect2D::new(
            Point2::new(occupied.max.x, occupied.min.y),
            Point2::new(dest.max.x, occupied.max.y),
        ),
    ];

    let mut largest = 0;
    for i in 1..rects.len() {
        if rects[i].area() > rects[largest].area() {
            largest = i;
        }
    }

    let (left, right) = if largest < 2 {
        (rects[0], rects[1])
    } else {
        (rects[2], rects[3])
    };

    debug!(
        "[Packer] divides {:?} with [w,h] = [{},{}], into LEFT = {:?} and RIGHT = {:?}.",
        dest, wh.x, wh.y, left, right
    );

    Some(Division {
        left: left,
        right: right,
        occupied: occupied,
    })
}

pub struct Packer {
    bins: Vec<Rect2D>,
    choice: BinChoice,
}

impl Packer {
    pub fn new(wh: Vector2<i32>, choice: BinChoice) -> Self {
        Packer {
            bins: vec![Rect2D::from_min_and_wh(Point2::new(0, 0), wh)],
            choice: choice,
        }
    }

    /// The free rectangles, by descending area.
    #[inline]
    pub fn free_bins(&self) -> &[Rect2D] {
        &self.bins
    }

    /// Places a rectangle of `wh` and returns where it went. Returns `None` if no free bin
    /// can hold it, the packer is left untouched in that case.
    pub fn insert(&mut self, wh: Vector2<i32>) -> Option<Rect2D> {
        let index = match self.choice {
            BinChoice::Smallest => (0..self.bins.len())
                .rev()
                .find(|&i| self.bins[i].can_hold(wh)),
            BinChoice::Largest => (0..self.bins.len()).find(|&i| self.bins[i].can_hold(wh)),
        }?;

        let division = divide_with_rect(&self.bins[index], wh)?;
        self.bins.remove(index);

        if division.left.area() > 0 {
            self.bins.push(division.left);
        }

        if division.right.area() > 0 {
            self.bins.push(division.right);
        }

        // Picking from the end relies on this order.
        self.bins.sort_by(|lhs, rhs| rhs.area().cmp(&lhs.area()));

        Some(division.occupied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x0: i32, y0: i32, x1: i32, y1: i32) -> Rect2D {
        Rect2D::new(Point2::new(x0, y0), Point2::new(x1, y1))
    }

    #[test]
    fn divide_prefers_largest_leftover() {
        // A wide tile leaves a large bottom strip, so the cut is horizontal.
        let div = divide_with_rect(&rect(0, 0, 10, 10), Vector2::new(8, 2)).unwrap();
        assert_eq!(div.occupied, rect(0, 0, 8, 2));
        assert_eq!(div.left, rect(0, 2, 10, 10));
        assert_eq!(div.right, rect(8, 0, 10, 2));

        // A tall tile leaves a large right strip, so the cut is vertical.
        let div = divide_with_rect(&rect(0, 0, 10, 10), Vector2::new(2, 8)).unwrap();
        assert_eq!(div.occupied, rect(0, 0, 2, 8));
        assert_eq!(div.left, rect(2, 0, 10, 10));
        assert_eq!(div.right, rect(0, 8, 2, 10));
    }

    #[test]
    fn divide_tie_keeps_vertical_cut() {
        let div = divide_with_rect(&rect(4, 4, 8, 8), Vector2::new(2, 2)).unwrap();
        assert_eq!(div.occupied, rect(4, 4, 6, 6));
        assert_eq!(div.left, rect(6, 4, 8, 8));
        assert_eq!(div.right, rect(4, 6, 6, 8));
    }

    #[test]
    fn divide_too_large() {
        assert!(divide_with_rect(&rect(0, 0, 4, 4), Vector2::new(5, 1)).is_none());
        assert!(divide_with_rect(&rect(0, 0, 4, 4), Vector2::new(1, 5)).is_none());
    }

    #[test]
    fn exact_fit_leaves_nothing() {
        let mut packer = Packer::new(Vector2::new(4, 4), BinChoice::Smallest);
        assert_eq!(packer.insert(Vector2::new(4, 4)), Some(rect(0, 0, 4, 4)));
        assert!(packer.free_bins().is_empty());
        assert_eq!(packer.insert(Vector2::new(1, 1)), None);
    }

    #[test]
    fn bins_sorted_by_area() {
        let mut packer = Packer::new(Vector2::new(16, 16), BinChoice::Smallest);
        packer.insert(Vector2::new(6, 3)).unwrap();
        packer.insert(Vector2::new(3, 3)).unwrap();

        let areas: Vec<_> = packer.free_bins().iter().map(|r| r.area()).collect();
        let mut sorted = areas.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(areas, sorted);
    }

    #[test]
    fn choice() {
        // After the first tile the free list is [4,0,16,16] (192) and [0,4,4,16] (48).
        let mut smallest = Packer::new(Vector2::new(16, 16), BinChoice::Smallest);
        smallest.insert(Vector2::new(4, 4)).unwrap();
        assert_eq!(
            smallest.free_bins(),
            &[rect(4, 0, 16, 16), rect(0, 4, 4, 16)][..]
        );
        assert_eq!(smallest.insert(Vector2::new(4, 4)), Some(rect(0, 4, 4, 8)));

        let mut largest = Packer::new(Vector2::new(16, 16), BinChoice::Largest);
        largest.insert(Vector2::new(4, 4)).unwrap();
        assert_eq!(largest.insert(Vector2::new(4, 4)), Some(rect(4, 0, 8, 4)));
    }
}
