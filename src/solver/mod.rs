use crate::{cell::Cell, error::Result, error::RouteError, grid::Grid, route::Route};
use log::info;

pub mod backtracking;
pub mod bfs;

pub trait RouteSolver {
    /// Searches a route from `start` to `goal`. Both endpoints are open cells of `grid`.
    fn search(&mut self, grid: &Grid, start: Cell, goal: Cell) -> Result<Route>;

    /// Computes a route after checking that start and goal share a connected component, so an
    /// unreachable goal is reported without exploring the grid.
    fn find_route(&mut self, grid: &Grid, start: Cell, goal: Cell) -> Result<Route> {
        if !grid.connected(start, goal) {
            info!("{} is not reachable from {}", goal, start);
            return Err(RouteError::NoRouteFound { start, goal });
        }
        info!("{} is reachable from {}, computing route", goal, start);
        self.search(grid, start, goal)
    }
}

impl<S: RouteSolver + ?Sized> RouteSolver for Box<S> {
    fn search(&mut self, grid: &Grid, start: Cell, goal: Cell) -> Result<Route> {
        (**self).search(grid, start, goal)
    }
}
