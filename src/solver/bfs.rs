use crate::{
    cell::Cell,
    error::{Result, RouteError},
    grid::Grid,
    route::Route,
    solver::RouteSolver,
    FxIndexMap,
};
use indexmap::map::Entry::Vacant;
use log::warn;
use std::collections::VecDeque;

/// Deterministic breadth-first search. Every step has cost 1, so the first time the goal is
/// dequeued its route is a shortest one. Neighbours are expanded in the order of
/// [Cell::neighbours].
#[derive(Clone, Copy, Debug, Default)]
pub struct BreadthFirstSolver;

/// Walks the parent indices back from `index` and returns the cells in start-to-goal order.
fn reverse_path(parents: &FxIndexMap<Cell, usize>, index: usize) -> Route {
    let mut cells: Vec<Cell> = std::iter::successors(parents.get_index(index), |&(_, &parent)| {
        parents.get_index(parent)
    })
    .map(|(cell, _)| *cell)
    .collect();
    cells.reverse();
    cells.into_iter().collect()
}

impl RouteSolver for BreadthFirstSolver {
    fn search(&mut self, grid: &Grid, start: Cell, goal: Cell) -> Result<Route> {
        let mut parents: FxIndexMap<Cell, usize> = FxIndexMap::default();
        parents.insert(start, usize::MAX);
        let mut to_see: VecDeque<(usize, Cell)> = VecDeque::from([(0, start)]);

        while let Some((index, cell)) = to_see.pop_front() {
            if cell == goal {
                return Ok(reverse_path(&parents, index));
            }
            for n in grid.open_neighbours(cell) {
                if let Vacant(e) = parents.entry(n) {
                    let n_index = e.index();
                    e.insert(index);
                    to_see.push_back((n_index, n));
                }
            }
        }
        warn!("{} could not be reached from {} by breadth-first search", goal, start);
        Err(RouteError::NoRouteFound { start, goal })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_shortest_route_around_wall() {
        // |S#G|
        // | # |
        // |   |
        let grid = Grid::from_rows(&[[1, 0, 1], [1, 0, 1], [1, 1, 1]]).unwrap();
        let route = BreadthFirstSolver
            .search(&grid, Cell::new(0, 0), Cell::new(0, 2))
            .unwrap();
        let expected: Vec<Cell> = [(0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (1, 2), (0, 2)]
            .into_iter()
            .map(Cell::from)
            .collect();
        assert_eq!(route.cells(), expected.as_slice());
    }

    #[test]
    fn unreachable_goal_is_reported() {
        let grid = Grid::from_rows(&[[1, 0, 1]]).unwrap();
        let start = Cell::new(0, 0);
        let goal = Cell::new(0, 2);
        assert_eq!(
            BreadthFirstSolver.search(&grid, start, goal),
            Err(RouteError::NoRouteFound { start, goal })
        );
    }
}
