use crate::{
    cell::Cell,
    error::{Endpoint, EndpointIssue, Result, RouteError},
    grid::Grid,
    route::Route,
    solver::{backtracking::BacktrackingSolver, RouteSolver},
};
use log::debug;

/// [PathFinder] ties a [Grid] to a validated start and goal. The route search runs on the first
/// call to [shortest_route](Self::shortest_route); its outcome, including failure, is cached and
/// returned by every later call.
#[derive(Debug)]
pub struct PathFinder<'a, S = BacktrackingSolver> {
    grid: &'a Grid,
    start: Cell,
    goal: Cell,
    solver: S,
    shortest: Option<Result<Route>>,
}

impl<'a> PathFinder<'a> {
    /// Uses a [BacktrackingSolver] seeded from system entropy.
    pub fn new(grid: &'a Grid, start: Cell, goal: Cell) -> Result<Self> {
        PathFinder::with_solver(grid, start, goal, BacktrackingSolver::default())
    }
}

impl<'a, S: RouteSolver> PathFinder<'a, S> {
    pub fn with_solver(grid: &'a Grid, start: Cell, goal: Cell, solver: S) -> Result<Self> {
        check_endpoint(grid, Endpoint::Start, start)?;
        check_endpoint(grid, Endpoint::Goal, goal)?;
        Ok(PathFinder {
            grid,
            start,
            goal,
            solver,
            shortest: None,
        })
    }

    /// The shortest route found between start and goal.
    pub fn shortest_route(&mut self) -> Result<&Route> {
        let (grid, start, goal) = (self.grid, self.start, self.goal);
        let solver = &mut self.solver;
        let outcome = self.shortest.get_or_insert_with(|| {
            let outcome = solver.find_route(grid, start, goal);
            if let Ok(route) = &outcome {
                debug_assert!(route.is_valid_on(grid));
                debug!("Caching route of length {}: {}", route.len(), route);
            }
            outcome
        });
        match outcome {
            Ok(route) => Ok(route),
            Err(err) => Err(err.clone()),
        }
    }

    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    pub fn solver(&self) -> &S {
        &self.solver
    }
}

fn check_endpoint(grid: &Grid, endpoint: Endpoint, cell: Cell) -> Result<()> {
    let reason = if !grid.contains(cell) {
        EndpointIssue::OutOfBounds
    } else if !grid.is_open(cell)? {
        EndpointIssue::Blocked
    } else {
        return Ok(());
    };
    Err(RouteError::InvalidEndpoint {
        endpoint,
        cell,
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::bfs::BreadthFirstSolver;

    fn grid() -> Grid {
        Grid::from_rows(&[[1, 1, 0], [0, 1, 1]]).unwrap()
    }

    #[test]
    fn rejects_invalid_endpoints() {
        let grid = grid();
        let err = PathFinder::new(&grid, Cell::new(0, 2), Cell::new(1, 2)).unwrap_err();
        assert_eq!(
            err,
            RouteError::InvalidEndpoint {
                endpoint: Endpoint::Start,
                cell: Cell::new(0, 2),
                reason: EndpointIssue::Blocked
            }
        );
        let err = PathFinder::new(&grid, Cell::new(0, 0), Cell::new(2, 0)).unwrap_err();
        assert_eq!(
            err,
            RouteError::InvalidEndpoint {
                endpoint: Endpoint::Goal,
                cell: Cell::new(2, 0),
                reason: EndpointIssue::OutOfBounds
            }
        );
    }

    #[test]
    fn caches_the_route() {
        let grid = grid();
        let mut finder = PathFinder::new(&grid, Cell::new(0, 0), Cell::new(1, 2)).unwrap();
        let first = finder.shortest_route().unwrap().clone();
        let second = finder.shortest_route().unwrap().clone();
        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
    }

    #[test]
    fn caches_the_failure() {
        let grid = Grid::from_rows(&[[1, 0, 1]]).unwrap();
        let start = Cell::new(0, 0);
        let goal = Cell::new(0, 2);
        let mut finder =
            PathFinder::with_solver(&grid, start, goal, BreadthFirstSolver).unwrap();
        let expected = RouteError::NoRouteFound { start, goal };
        assert_eq!(finder.shortest_route().unwrap_err(), expected);
        assert_eq!(finder.shortest_route().unwrap_err(), expected);
    }
}
