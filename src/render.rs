use crate::{grid::Grid, route::Route};
use core::fmt;

/// Text overlay of a [Route] on its [Grid]. Each row is printed on its own line with every
/// cell between bars:
/// - `S` route start
/// - `G` route end
/// - `o` other route cells
/// - `.` open cells off the route
/// - `#` blocked cells
pub struct RouteView<'a> {
    pub grid: &'a Grid,
    pub route: &'a Route,
}

impl<'a> RouteView<'a> {
    pub fn new(grid: &'a Grid, route: &'a Route) -> Self {
        RouteView { grid, route }
    }
}

impl fmt::Display for RouteView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let start = self.route.start().ok();
        let end = self.route.end().ok();
        for (cell, open) in self.grid.cells() {
            if cell.column == 0 {
                write!(f, "|")?;
            }
            let marker = if Some(cell) == start {
                'S'
            } else if Some(cell) == end {
                'G'
            } else if self.route.contains(&cell) {
                'o'
            } else if open {
                '.'
            } else {
                '#'
            };
            write!(f, "{}|", marker)?;
            if cell.column as usize + 1 == self.grid.column_count() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
