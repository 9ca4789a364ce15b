use super::{Cell, LiveSet};

/// Smallest axis-aligned rectangle enclosing a LiveSet.
/// Recomputed every generation, never cached.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BoundingBox {
    /// (min x, min y)
    pub bottom_left: Cell,
    /// (max x, max y)
    pub top_right: Cell,
}

impl BoundingBox {
    /// Scan the set once for its extremes.
    /// An empty set yields the degenerate box at the origin.
    pub fn of(set: &LiveSet) -> Self {
        let mut cells = set.iter();
        let Some(first) = cells.next() else {
            return Self {
                bottom_left: Cell::new(0, 0),
                top_right: Cell::new(0, 0),
            };
        };

        cells.fold(
            Self {
                bottom_left: first,
                top_right: first,
            },
            |acc, c| Self {
                bottom_left: Cell::new(acc.bottom_left.x.min(c.x), acc.bottom_left.y.min(c.y)),
                top_right: Cell::new(acc.top_right.x.max(c.x), acc.top_right.y.max(c.y)),
            },
        )
    }

    /// Box grown by `pad` cells on every side, clamped to the i64 plane
    pub const fn padded(self, pad: i64) -> Self {
        Self {
            bottom_left: Cell::new(
                self.bottom_left.x.saturating_sub(pad),
                self.bottom_left.y.saturating_sub(pad),
            ),
            top_right: Cell::new(
                self.top_right.x.saturating_add(pad),
                self.top_right.y.saturating_add(pad),
            ),
        }
    }

    pub const fn width(&self) -> u64 {
        self.top_right.x.abs_diff(self.bottom_left.x).saturating_add(1)
    }

    pub const fn height(&self) -> u64 {
        self.top_right.y.abs_diff(self.bottom_left.y).saturating_add(1)
    }
}

/// Bounding box of `set`
pub fn corners(set: &LiveSet) -> BoundingBox {
    BoundingBox::of(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set_is_origin() {
        let bb = corners(&LiveSet::new());
        assert_eq!(bb.top_right, Cell::new(0, 0));
        assert_eq!(bb.bottom_left, Cell::new(0, 0));
        assert_eq!((bb.width(), bb.height()), (1, 1));
    }

    #[test]
    fn test_single_cell() {
        let bb = corners(&LiveSet::from_coords(&[(-4, 9)]));
        assert_eq!(bb.bottom_left, Cell::new(-4, 9));
        assert_eq!(bb.top_right, Cell::new(-4, 9));
    }

    #[test]
    fn test_extremes_from_different_cells() {
        let bb = corners(&LiveSet::from_coords(&[(3, 2), (2, 3), (3, 3), (3, 4), (4, 4)]));
        assert_eq!(bb.bottom_left, Cell::new(2, 2));
        assert_eq!(bb.top_right, Cell::new(4, 4));
    }

    #[test]
    fn test_negative_coordinates() {
        let bb = corners(&LiveSet::from_coords(&[(-2, -2), (3, 1), (0, -5)]));
        assert_eq!(bb.bottom_left, Cell::new(-2, -5));
        assert_eq!(bb.top_right, Cell::new(3, 1));
        assert_eq!((bb.width(), bb.height()), (6, 7));
    }

    #[test]
    fn test_padded() {
        let bb = corners(&LiveSet::from_coords(&[(0, 0), (2, 5)])).padded(1);
        assert_eq!(bb.bottom_left, Cell::new(-1, -1));
        assert_eq!(bb.top_right, Cell::new(3, 6));
    }

    #[test]
    fn test_padded_clamps_at_plane_edge() {
        let bb = corners(&LiveSet::from_coords(&[(i64::MAX, 0), (i64::MIN, i64::MIN)])).padded(1);
        assert_eq!(bb.bottom_left, Cell::new(i64::MIN, i64::MIN));
        assert_eq!(bb.top_right, Cell::new(i64::MAX, 1));
        assert_eq!(bb.width(), u64::MAX);
    }
}
