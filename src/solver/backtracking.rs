//! Randomized depth-first backtracking search.
//!
//! One working [Route] is extended cell by cell from the start. Reaching the goal records a copy
//! of the working route if it is shorter than the best one so far, and branches that can no
//! longer beat the best route are cut. Neighbours are visited in a freshly shuffled order at
//! every step, so among equally short routes the one returned depends on the random source.
//!
//! The traversal uses an explicit stack of frames instead of recursion; each frame holds the
//! shuffled neighbours of one cell of the working route that are still to be tried.
use crate::{
    cell::Cell,
    error::{Result, RouteError},
    grid::Grid,
    route::Route,
    solver::RouteSolver,
    IMPROVED_PRUNING,
};
use log::{debug, trace, warn};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use smallvec::SmallVec;

struct Frame {
    pending: smallvec::IntoIter<[Cell; 4]>,
}

#[derive(Clone, Debug)]
pub struct BacktrackingSolver<R = StdRng> {
    rng: R,
    /// Maximum number of cells entered before the search gives up. [None] searches exhaustively.
    pub step_limit: Option<usize>,
    /// Also cut branches whose Manhattan distance to the goal rules out a shorter route.
    pub improved_pruning: bool,
}

impl BacktrackingSolver<StdRng> {
    /// A solver whose visiting order is reproducible from `seed`.
    pub fn seeded(seed: u64) -> Self {
        BacktrackingSolver::new(StdRng::seed_from_u64(seed))
    }
}

impl Default for BacktrackingSolver<StdRng> {
    fn default() -> Self {
        BacktrackingSolver::new(StdRng::from_entropy())
    }
}

impl<R: Rng> BacktrackingSolver<R> {
    pub fn new(rng: R) -> Self {
        BacktrackingSolver {
            rng,
            step_limit: None,
            improved_pruning: IMPROVED_PRUNING,
        }
    }

    pub fn with_step_limit(mut self, limit: usize) -> Self {
        self.step_limit = Some(limit);
        self
    }

    /// Passable neighbours of `cell` in random order.
    fn shuffled_neighbours(&mut self, grid: &Grid, cell: Cell) -> SmallVec<[Cell; 4]> {
        let mut neighbours = cell.neighbours();
        neighbours.shuffle(&mut self.rng);
        neighbours
            .into_iter()
            .filter(|n| grid.is_passable(*n))
            .collect()
    }

    /// Whether the working route, currently ending in `cell`, cannot lead to a route shorter
    /// than `best`.
    fn prunable(&self, working: &Route, cell: Cell, goal: Cell, best: &Route) -> bool {
        let bound = if self.improved_pruning {
            working.len() + cell.manhattan_distance(&goal) as usize
        } else {
            working.len()
        };
        bound >= best.len()
    }
}

impl<R: Rng> RouteSolver for BacktrackingSolver<R> {
    fn search(&mut self, grid: &Grid, start: Cell, goal: Cell) -> Result<Route> {
        let mut working = Route::with_capacity(grid.open_count());
        let mut best: Option<Route> = None;
        let mut stack: Vec<Frame> = Vec::new();
        let mut steps = 0;
        let mut limit_hit = false;
        let mut next = Some(start);

        loop {
            if let Some(cell) = next.take() {
                if self.step_limit.is_some_and(|limit| steps >= limit) {
                    limit_hit = true;
                    break;
                }
                steps += 1;
                working.append(cell);
                trace!("Visiting {}", cell);

                if cell == goal {
                    if best.as_ref().map_or(true, |b| working.len() < b.len()) {
                        debug!(
                            "Found route of length {} after {} steps",
                            working.len(),
                            steps
                        );
                        best = Some(working.clone());
                    }
                    working.pop();
                    continue;
                }
                if let Some(b) = &best {
                    if self.prunable(&working, cell, goal, b) {
                        trace!("Pruning at {}, cannot beat length {}", cell, b.len());
                        working.pop();
                        continue;
                    }
                }
                let pending = self.shuffled_neighbours(grid, cell).into_iter();
                stack.push(Frame { pending });
            }

            let Some(frame) = stack.last_mut() else {
                break;
            };
            match frame.pending.find(|n| !working.contains(n)) {
                Some(n) => next = Some(n),
                None => {
                    // Every neighbour is exhausted: backtrack to the parent cell.
                    stack.pop();
                    working.pop();
                }
            }
        }

        match best {
            Some(route) => {
                if limit_hit {
                    warn!(
                        "Step limit reached, returning route of length {} which may not be the shortest",
                        route.len()
                    );
                } else {
                    debug!("Search exhausted after {} steps", steps);
                }
                Ok(route)
            }
            None if limit_hit => Err(RouteError::StepLimitExceeded {
                limit: self.step_limit.unwrap_or(steps),
            }),
            None => Err(RouteError::NoRouteFound { start, goal }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::bfs::BreadthFirstSolver;

    fn sample_grid() -> Grid {
        Grid::from_rows(&[
            [1, 1, 1, 1, 1],
            [1, 1, 0, 0, 1],
            [0, 1, 1, 0, 1],
            [0, 1, 1, 1, 1],
            [1, 1, 0, 1, 1],
            [1, 1, 1, 1, 0],
        ])
        .unwrap()
    }

    #[test]
    fn start_equal_to_goal_is_a_single_cell_route() {
        let grid = sample_grid();
        let mut solver = BacktrackingSolver::seeded(1);
        let route = solver
            .search(&grid, Cell::new(0, 0), Cell::new(0, 0))
            .unwrap();
        assert_eq!(route.cells(), &[Cell::new(0, 0)]);
    }

    /// Both pruning rules keep the search exhaustive, so they agree with breadth-first search.
    #[test]
    fn pruning_rules_agree_on_length() {
        let grid = sample_grid();
        let start = Cell::new(2, 4);
        let goal = Cell::new(1, 0);
        let expected = BreadthFirstSolver.search(&grid, start, goal).unwrap().len();
        for improved_pruning in [false, true] {
            for seed in 0..20 {
                let mut solver = BacktrackingSolver::seeded(seed);
                solver.improved_pruning = improved_pruning;
                let route = solver.search(&grid, start, goal).unwrap();
                assert_eq!(route.len(), expected);
            }
        }
    }

    #[test]
    fn same_seed_gives_same_route() {
        let grid = sample_grid();
        let a = BacktrackingSolver::seeded(7)
            .search(&grid, Cell::new(5, 0), Cell::new(0, 4))
            .unwrap();
        let b = BacktrackingSolver::seeded(7)
            .search(&grid, Cell::new(5, 0), Cell::new(0, 4))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn step_limit_without_route_is_an_error() {
        let grid = sample_grid();
        let mut solver = BacktrackingSolver::seeded(3).with_step_limit(1);
        assert_eq!(
            solver.search(&grid, Cell::new(2, 4), Cell::new(1, 0)),
            Err(RouteError::StepLimitExceeded { limit: 1 })
        );
    }

    /// With a budget of two cells the outcome depends on which neighbour of the start is tried
    /// first: the goal gives a route, the other neighbour exhausts the budget.
    #[test]
    fn step_limit_returns_best_route_so_far() {
        let grid = Grid::from_rows(&[[1, 1], [1, 1]]).unwrap();
        let start = Cell::new(0, 0);
        let goal = Cell::new(0, 1);
        let (mut found, mut exhausted) = (0, 0);
        for seed in 0..32 {
            let mut solver = BacktrackingSolver::seeded(seed).with_step_limit(2);
            match solver.search(&grid, start, goal) {
                Ok(route) => {
                    assert_eq!(route.cells(), &[start, goal]);
                    found += 1;
                }
                Err(err) => {
                    assert_eq!(err, RouteError::StepLimitExceeded { limit: 2 });
                    exhausted += 1;
                }
            }
        }
        assert!(found > 0 && exhausted > 0);
    }

    /// Without the component check the search itself must terminate and report failure.
    #[test]
    fn exhaustive_search_reports_missing_route() {
        let grid = Grid::from_rows(&[[1, 1, 0, 1], [1, 1, 0, 1]]).unwrap();
        let start = Cell::new(0, 0);
        let goal = Cell::new(1, 3);
        assert_eq!(
            BacktrackingSolver::seeded(5).search(&grid, start, goal),
            Err(RouteError::NoRouteFound { start, goal })
        );
    }
}
