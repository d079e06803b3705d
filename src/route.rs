use crate::cell::Cell;
use crate::error::{Result, RouteError};
use crate::grid::Grid;
use core::fmt;
use fxhash::FxHashMap;
use itertools::Itertools;

/// An ordered sequence of [Cell]s, from the route start (index 0) to its current end.
///
/// Besides the cells themselves a multiplicity table is kept so that membership tests are
/// O(1), which both the search and the renderer rely on. Appending does not reject duplicates;
/// callers that need a simple path check [contains](Self::contains) first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Route {
    cells: Vec<Cell>,
    counts: FxHashMap<Cell, usize>,
}

impl Route {
    pub fn new() -> Route {
        Route::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Route {
        Route {
            cells: Vec::with_capacity(capacity),
            counts: FxHashMap::default(),
        }
    }

    pub fn append(&mut self, cell: Cell) {
        self.cells.push(cell);
        *self.counts.entry(cell).or_insert(0) += 1;
    }

    /// Removes the last cell; used to backtrack out of an exhausted branch.
    pub(crate) fn pop(&mut self) -> Option<Cell> {
        let cell = self.cells.pop()?;
        if let Some(count) = self.counts.get_mut(&cell) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(&cell);
            }
        }
        Some(cell)
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.counts.contains_key(cell)
    }

    /// Number of cells held.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of moves needed to follow the route.
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    pub fn start(&self) -> Result<Cell> {
        self.cells.first().copied().ok_or(RouteError::EmptyRoute)
    }

    pub fn end(&self) -> Result<Cell> {
        self.cells.last().copied().ok_or(RouteError::EmptyRoute)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Checks that the route is a simple orthogonal path over open cells of `grid`.
    pub fn is_valid_on(&self, grid: &Grid) -> bool {
        !self.is_empty()
            && self.cells.iter().all(|c| grid.is_passable(*c))
            && self
                .cells
                .iter()
                .tuple_windows()
                .all(|(a, b)| a.is_adjacent(b))
            && self.cells.iter().all_unique()
    }
}

impl FromIterator<Cell> for Route {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        let mut route = Route::new();
        for cell in iter {
            route.append(cell);
        }
        route
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for cell in &self.cells {
            if !first {
                write!(f, " -> ")?;
            }
            write!(f, "{}", cell)?;
            first = false;
        }
        Ok(())
    }
}
