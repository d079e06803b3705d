//! # maze_pathfinding
//!
//! Route search on small 4-connected mazes. A [Grid](grid::Grid) of open and blocked cells is
//! searched for a simple route between two [Cell](cell::Cell)s. The default solver is a
//! randomized [depth-first backtracking](https://en.wikipedia.org/wiki/Backtracking) search
//! that keeps the shortest complete route it finds; since it only abandons branches that cannot
//! produce a shorter route, an unbounded search returns a shortest route. Among equally short
//! routes the one returned depends on the random source, which can be seeded. A deterministic
//! [breadth-first](https://en.wikipedia.org/wiki/Breadth-first_search) solver is also provided.
//!
//! [Connected components](https://en.wikipedia.org/wiki/Component_(graph_theory)) are
//! pre-computed for every grid so that unreachable goals are reported without searching.
//!
//! ```
//! use maze_pathfinding::{Cell, Grid, PathFinder};
//!
//! let grid = Grid::from_rows(&[[1, 1, 1], [0, 0, 1], [1, 1, 1]]).unwrap();
//! let mut finder = PathFinder::new(&grid, Cell::new(0, 0), Cell::new(2, 0)).unwrap();
//! let route = finder.shortest_route().unwrap();
//! assert_eq!(route.len(), 7);
//! ```
pub mod cell;
pub mod error;
pub mod finder;
pub mod grid;
pub mod render;
pub mod route;
pub mod solver;

use fxhash::FxBuildHasher;
use indexmap::IndexMap;

pub use cell::Cell;
pub use error::{Result, RouteError};
pub use finder::PathFinder;
pub use grid::Grid;
pub use render::RouteView;
pub use route::Route;
pub use solver::{backtracking::BacktrackingSolver, bfs::BreadthFirstSolver, RouteSolver};

/// Default for [BacktrackingSolver::improved_pruning].
pub const IMPROVED_PRUNING: bool = true;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;
