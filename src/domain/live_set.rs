use std::collections::BTreeSet;

use super::Cell;

/// LiveSet holds the live cells of one generation.
/// Inserting a cell twice is harmless; membership is all that matters.
/// Each generation builds a fresh LiveSet rather than editing the previous one.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct LiveSet {
    cells: BTreeSet<Cell>,
}

impl LiveSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from raw coordinate pairs
    pub fn from_coords(coords: &[(i64, i64)]) -> Self {
        coords.iter().copied().map(Cell::from).collect()
    }

    pub fn insert(&mut self, cell: Cell) {
        self.cells.insert(cell);
    }

    /// Membership by the derived `Eq`, i.e. `Cell::same`
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Number of distinct live cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Live cells ordered by x, then y
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Same shape shifted by (dx, dy)
    #[cfg(test)]
    pub fn translated(&self, dx: i64, dy: i64) -> Self {
        self.iter().map(|c| Cell::new(c.x + dx, c.y + dy)).collect()
    }
}

impl FromIterator<Cell> for LiveSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<Cell> for LiveSet {
    fn extend<I: IntoIterator<Item = Cell>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_contains_nothing() {
        let set = LiveSet::new();
        assert!(set.is_empty());
        assert!(!set.contains(Cell::new(0, 0)));
    }

    #[test]
    fn test_duplicates_are_harmless() {
        let set = LiveSet::from_coords(&[(1, 1), (1, 1), (2, 3)]);
        assert_eq!(set.len(), 2);
        assert!(set.contains(Cell::new(1, 1)));
        assert!(set.contains(Cell::new(2, 3)));
        assert!(!set.contains(Cell::new(3, 2)));
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let a = LiveSet::from_coords(&[(1, 1), (2, 1), (1, 2)]);
        let b = LiveSet::from_coords(&[(1, 2), (1, 1), (2, 1)]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_translated() {
        let set = LiveSet::from_coords(&[(0, 0), (1, -1)]);
        assert_eq!(set.translated(2, 3), LiveSet::from_coords(&[(2, 3), (3, 2)]));
    }
}
