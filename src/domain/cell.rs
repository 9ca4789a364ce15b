/// Cell is a coordinate on the unbounded Life plane.
/// Two cells are the same cell when both coordinates match.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}

impl Cell {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Structural equality on both coordinates.
    /// Agrees with the derived `Eq` that `LiveSet` membership relies on.
    pub const fn same(self, other: Cell) -> bool {
        self.x == other.x && self.y == other.y
    }

    const OFFSETS: [(i64, i64); 8] = [
        (-1, -1), (0, -1), (1, -1),
        (-1, 0), (1, 0),
        (-1, 1), (0, 1), (1, 1),
    ];

    /// Cell shifted by (dx, dy), `None` past the edge of i64
    pub fn offset(self, dx: i64, dy: i64) -> Option<Cell> {
        Some(Cell::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }

    /// Moore neighborhood, bottom row first then left to right:
    /// (x-1,y-1) (x,y-1) (x+1,y-1) (x-1,y) (x+1,y) (x-1,y+1) (x,y+1) (x+1,y+1)
    /// Always 8 cells except on the edge of the i64 plane, where missing ones are skipped.
    pub fn neighbors(self) -> impl Iterator<Item = Cell> {
        Self::OFFSETS
            .into_iter()
            .filter_map(move |(dx, dy)| self.offset(dx, dy))
    }
}

impl From<(i64, i64)> for Cell {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_is_componentwise() {
        assert!(Cell::new(1, 2).same(Cell::new(1, 2)));
        assert!(!Cell::new(1, 2).same(Cell::new(2, 1)));
        assert!(!Cell::new(1, 2).same(Cell::new(1, 3)));
        assert!(!Cell::new(0, 5).same(Cell::new(5, 5)));
    }

    #[test]
    fn test_neighbors_order() {
        let n: Vec<Cell> = Cell::new(0, 0).neighbors().collect();
        assert_eq!(
            n,
            vec![
                Cell::new(-1, -1),
                Cell::new(0, -1),
                Cell::new(1, -1),
                Cell::new(-1, 0),
                Cell::new(1, 0),
                Cell::new(-1, 1),
                Cell::new(0, 1),
                Cell::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_neighbors_at_plane_edge() {
        let corner = Cell::new(i64::MAX, i64::MIN);
        let n: Vec<Cell> = corner.neighbors().collect();
        assert_eq!(
            n,
            vec![
                Cell::new(i64::MAX - 1, i64::MIN),
                Cell::new(i64::MAX - 1, i64::MIN + 1),
                Cell::new(i64::MAX, i64::MIN + 1),
            ]
        );
        assert_eq!(Cell::new(5, 5).offset(1, -1), Some(Cell::new(6, 4)));
    }

    #[test]
    fn test_neighbors_exclude_self() {
        let c = Cell::new(7, -3);
        assert!(c.neighbors().all(|n| !n.same(c)));
    }
}
