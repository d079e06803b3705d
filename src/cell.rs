use core::fmt;

/// A `(row, column)` coordinate. Coordinates may be negative so that neighbours of border
/// cells can be represented before they are checked against a [Grid](crate::grid::Grid).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: i32,
    pub column: i32,
}

impl Cell {
    pub const fn new(row: i32, column: i32) -> Cell {
        Cell { row, column }
    }

    /// The 4-neighbourhood in the order up, down, left, right.
    pub fn neighbours(&self) -> [Cell; 4] {
        [
            Cell::new(self.row - 1, self.column),
            Cell::new(self.row + 1, self.column),
            Cell::new(self.row, self.column - 1),
            Cell::new(self.row, self.column + 1),
        ]
    }

    pub fn manhattan_distance(&self, other: &Cell) -> i32 {
        (self.row - other.row).abs() + (self.column - other.column).abs()
    }

    /// True if `other` is exactly one orthogonal step away.
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, column): (i32, i32)) -> Self {
        Cell::new(row, column)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.row, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbours_are_orthogonal_and_ordered() {
        let c = Cell::new(0, 0);
        assert_eq!(
            c.neighbours(),
            [
                Cell::new(-1, 0),
                Cell::new(1, 0),
                Cell::new(0, -1),
                Cell::new(0, 1)
            ]
        );
        assert!(c.neighbours().iter().all(|n| n.is_adjacent(&c)));
    }

    #[test]
    fn display_matches_row_column_pair() {
        assert_eq!(Cell::new(2, 4).to_string(), "(2,4)");
        assert_eq!(Cell::from((-1, 3)).to_string(), "(-1,3)");
    }
}
