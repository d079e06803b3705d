use maze_pathfinding::{Cell, Grid, PathFinder, RouteView};

// Finds a route through the sample maze below and prints it, where
// - S marks the start
// - G marks the goal
// - o marks the rest of the route
// - # marks a blocked cell
//
// Cells have a 4-neighbourhood.

fn main() -> maze_pathfinding::Result<()> {
    let grid = Grid::from_rows(&[
        [1, 1, 1, 1, 1],
        [1, 1, 0, 0, 1],
        [0, 1, 1, 0, 1],
        [0, 1, 1, 1, 1],
        [1, 1, 0, 1, 1],
        [1, 1, 1, 1, 0],
    ])?;
    println!("{}", grid);
    let mut finder = PathFinder::new(&grid, Cell::new(2, 4), Cell::new(1, 0))?;
    let route = finder.shortest_route()?;
    println!("Route ({} steps):", route.steps());
    println!("{}", route);
    print!("{}", RouteView::new(&grid, route));
    Ok(())
}
