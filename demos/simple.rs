use grid_astar::{GridConfig, PathFinder};

// In this example a path is found on the 10x10 reference grid with shape
//  __________
// |S         |
// |  ####### |
// |        # |
// | ###### # |
// |      # #E|
//  __________
// (rows 5-9 are empty) where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Afterwards the end cell's world position is printed, as a caller moving a
// player sprite would use it.

fn main() {
    let mut path_finder: PathFinder = PathFinder::from_config(&GridConfig::default()).unwrap();
    for ix in (12..=18).chain([28, 38, 48]).chain(31..=36).chain([46]) {
        path_finder.toggle_obstacle(ix).unwrap();
    }
    println!("{}", path_finder);
    let start = 0;
    let end = 49;
    match path_finder.execute(start, end).unwrap() {
        Some(path) => {
            println!("Path:");
            for ix in &path {
                println!("{:?}", path_finder.grid().to_row_col(*ix));
            }
            println!("Cost: {:?}", path_finder.path_cost(&path));
            println!("End position: {:?}", path_finder.grid().index_to_world(end));
        }
        None => println!("No path from {} to {}", start, end),
    }
}
