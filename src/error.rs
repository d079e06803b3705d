//! Error types for grid construction, route queries and route search.

use crate::cell::Cell;
use std::fmt;

/// Which end of a requested route an [RouteError::InvalidEndpoint] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

/// Why an endpoint was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndpointIssue {
    /// The cell lies outside the grid.
    OutOfBounds,
    /// The cell is inside the grid but not open.
    Blocked,
}

/// Main error type of the crate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteError {
    /// The input table is empty, has an empty row or is not rectangular.
    InvalidGrid {
        /// Description of what is wrong with the table
        reason: String,
    },

    /// A passability query was made for a cell outside the grid.
    OutOfBounds {
        cell: Cell,
        rows: usize,
        columns: usize,
    },

    /// The start or goal of a route cannot be part of any route.
    InvalidEndpoint {
        endpoint: Endpoint,
        cell: Cell,
        reason: EndpointIssue,
    },

    /// `start` or `end` was requested from a route holding no cells.
    EmptyRoute,

    /// The search finished without connecting start and goal.
    NoRouteFound { start: Cell, goal: Cell },

    /// The step budget ran out before any route was found.
    StepLimitExceeded { limit: usize },
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Goal => write!(f, "goal"),
        }
    }
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGrid { reason } => write!(f, "Invalid grid: {reason}"),
            Self::OutOfBounds {
                cell,
                rows,
                columns,
            } => write!(f, "Cell {cell} is outside the {rows}x{columns} grid"),
            Self::InvalidEndpoint {
                endpoint,
                cell,
                reason,
            } => match reason {
                EndpointIssue::OutOfBounds => {
                    write!(f, "Invalid {endpoint} {cell}: outside the grid")
                }
                EndpointIssue::Blocked => write!(f, "Invalid {endpoint} {cell}: cell is blocked"),
            },
            Self::EmptyRoute => write!(f, "Route holds no cells"),
            Self::NoRouteFound { start, goal } => {
                write!(f, "No route connects {start} and {goal}")
            }
            Self::StepLimitExceeded { limit } => {
                write!(f, "Step limit of {limit} reached before any route was found")
            }
        }
    }
}

impl std::error::Error for RouteError {}

/// Convenience type alias for results of this crate.
pub type Result<T> = std::result::Result<T, RouteError>;

/// Shorthand for an [RouteError::InvalidGrid] error.
pub(crate) fn invalid_grid(reason: impl ToString) -> RouteError {
    RouteError::InvalidGrid {
        reason: reason.to_string(),
    }
}
