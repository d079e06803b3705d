use crate::cell::Cell;
use crate::error::{invalid_grid, Result, RouteError};
use core::fmt;
use log::info;
use num_traits::Zero;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// [Grid] is an immutable rectangular table of open ([true]) and blocked ([false]) cells stored
/// row-major. Connected components of open cells are computed once on construction using a
/// [UnionFind] structure so that unreachable goals can be rejected without searching.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: usize,
    columns: usize,
    open: Vec<bool>,
    components: UnionFind<usize>,
}

impl Grid {
    /// Builds a grid from rows of numeric values where any non-zero value marks an open cell.
    pub fn from_rows<T, R>(rows: &[R]) -> Result<Grid>
    where
        T: Zero,
        R: AsRef<[T]>,
    {
        let flags = rows
            .iter()
            .map(|row| row.as_ref().iter().map(|v| !v.is_zero()).collect::<Vec<bool>>())
            .collect::<Vec<_>>();
        Grid::from_flags(&flags)
    }

    /// Builds a grid from rows of open flags.
    pub fn from_flags<R: AsRef<[bool]>>(rows: &[R]) -> Result<Grid> {
        let first = rows
            .first()
            .ok_or_else(|| invalid_grid("the table has no rows"))?;
        let columns = first.as_ref().len();
        if columns == 0 {
            return Err(invalid_grid("row 0 has no columns"));
        }
        let mut open = Vec::with_capacity(rows.len() * columns);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != columns {
                return Err(invalid_grid(format!(
                    "row {i} has {} columns, expected {columns}",
                    row.len()
                )));
            }
            open.extend_from_slice(row);
        }
        let mut grid = Grid {
            rows: rows.len(),
            columns,
            open,
            components: UnionFind::new(0),
        };
        grid.generate_components();
        Ok(grid)
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row >= 0
            && cell.column >= 0
            && (cell.row as usize) < self.rows
            && (cell.column as usize) < self.columns
    }

    /// Whether a cell inside the grid is open. Querying a cell outside the grid is an error.
    pub fn is_open(&self, cell: Cell) -> Result<bool> {
        if !self.contains(cell) {
            return Err(RouteError::OutOfBounds {
                cell,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(self.open[self.index(cell)])
    }

    /// Bounds-safe variant of [is_open](Self::is_open): cells outside the grid are not passable.
    pub fn is_passable(&self, cell: Cell) -> bool {
        self.contains(cell) && self.open[self.index(cell)]
    }

    /// Passable orthogonal neighbours of `cell`, in the order of [Cell::neighbours].
    pub fn open_neighbours(&self, cell: Cell) -> SmallVec<[Cell; 4]> {
        cell.neighbours()
            .into_iter()
            .filter(|n| self.is_passable(*n))
            .collect()
    }

    /// Checks if both cells are open and on the same connected component.
    pub fn connected(&self, a: Cell, b: Cell) -> bool {
        self.is_passable(a)
            && self.is_passable(b)
            && self.components.equiv(self.index(a), self.index(b))
    }

    /// Number of open cells, an upper bound on the length of any simple route.
    pub fn open_count(&self) -> usize {
        self.open.iter().filter(|o| **o).count()
    }

    /// Row-major iterator over every cell of the grid and its open flag.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, bool)> + '_ {
        (0..self.rows).flat_map(move |r| {
            (0..self.columns).map(move |c| {
                let cell = Cell::new(r as i32, c as i32);
                (cell, self.open[self.index(cell)])
            })
        })
    }

    fn index(&self, cell: Cell) -> usize {
        debug_assert!(self.contains(cell));
        cell.row as usize * self.columns + cell.column as usize
    }

    /// Links every open cell to its open right and lower neighbours. Together these cover every
    /// orthogonal edge exactly once.
    fn generate_components(&mut self) {
        info!(
            "Generating connected components for {}x{} grid",
            self.rows, self.columns
        );
        let mut components = UnionFind::new(self.rows * self.columns);
        for (cell, open) in self.cells() {
            if !open {
                continue;
            }
            let ix = self.index(cell);
            for n in [
                Cell::new(cell.row + 1, cell.column),
                Cell::new(cell.row, cell.column + 1),
            ] {
                if self.is_passable(n) {
                    components.union(ix, self.index(n));
                }
            }
        }
        self.components = components;
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.open.chunks(self.columns) {
            let values = row
                .iter()
                .map(|&o| if o { "1" } else { "0" })
                .collect::<Vec<_>>();
            writeln!(f, "{}", values.join(" "))?;
        }
        Ok(())
    }
}
