use grid_astar::{GridConfig, GridError, PathFinder};

fn reference_grid() -> PathFinder {
    PathFinder::from_config(&GridConfig::default()).unwrap()
}

fn is_contiguous(path_finder: &PathFinder, path: &[usize]) -> bool {
    path_finder.path_cost(path).is_some()
}

#[test]
fn diagonal_neighbour_on_reference_grid() {
    let mut path_finder = reference_grid();
    let path = path_finder.execute(0, 11).unwrap().unwrap();
    assert!(path == vec![0, 1, 11] || path == vec![0, 10, 11]);
    assert_eq!(path_finder.path_cost(&path), Some(20));
}

#[test]
fn blocked_corner_has_no_path() {
    let mut path_finder = reference_grid();
    path_finder.set_obstacle(1, true).unwrap();
    path_finder.set_obstacle(10, true).unwrap();
    assert_eq!(path_finder.execute(0, 11).unwrap(), None);
}

#[test]
fn surrounded_target_has_no_path() {
    let mut path_finder = reference_grid();
    for ix in [44, 64, 53, 55] {
        path_finder.set_obstacle(ix, true).unwrap();
    }
    assert_eq!(path_finder.execute(0, 54).unwrap(), None);
    assert_eq!(path_finder.execute(54, 0).unwrap(), None);
    assert_eq!(path_finder.execute(54, 54).unwrap(), Some(vec![54]));
}

#[test]
fn path_avoids_wall() {
    // A wall along column 5 with a single gap at row 9.
    let mut path_finder = reference_grid();
    for row in 0..9 {
        path_finder.set_obstacle(row * 10 + 5, true).unwrap();
    }
    let path = path_finder.execute(0, 9).unwrap().unwrap();
    assert!(is_contiguous(&path_finder, &path));
    assert!(path.contains(&95));
    assert!(path
        .iter()
        .all(|&ix| !path_finder.is_obstacle(ix).unwrap()));
    // 9 down, 9 across, 9 up.
    assert_eq!(path.len(), 28);
}

#[test]
fn same_path_after_clear() {
    let mut path_finder = reference_grid();
    for ix in [12, 22, 32, 42, 23, 24] {
        path_finder.set_obstacle(ix, true).unwrap();
    }
    let first = path_finder.execute(3, 81).unwrap();
    path_finder.clear();
    assert_eq!(path_finder.execute(3, 81).unwrap(), first);
}

#[test]
fn toggled_cell_can_be_crossed_again() {
    let mut path_finder = PathFinder::new(3, 1, 10).unwrap();
    path_finder.toggle_obstacle(1).unwrap();
    assert_eq!(path_finder.execute(0, 2).unwrap(), None);
    path_finder.toggle_obstacle(1).unwrap();
    assert!(!path_finder.cells()[1].is_obstacle);
    assert_eq!(path_finder.execute(0, 2).unwrap(), Some(vec![0, 1, 2]));
}

#[test]
fn caller_errors() {
    let mut path_finder = reference_grid();
    assert_eq!(
        path_finder.execute(100, 0),
        Err(GridError::IndexOutOfRange { index: 100, len: 100 })
    );
    path_finder.set_obstacle(5, true).unwrap();
    assert_eq!(
        path_finder.execute(0, 5),
        Err(GridError::BlockedEndpoint { index: 5 })
    );
    // The caller can still get next to the blocked cell.
    let path = path_finder.execute_approximate(0, 5).unwrap().unwrap();
    assert_eq!(path, vec![0, 1, 2, 3, 4]);
}

#[test]
fn search_state_is_inspectable() {
    let mut path_finder = reference_grid();
    let path = path_finder.execute(0, 99).unwrap().unwrap();
    let target = path_finder.cell(99).unwrap();
    assert_eq!(target.g, 180);
    assert_eq!(target.parent, Some(path[path.len() - 2]));
    assert!(path_finder.cell(0).unwrap().is_closed);
    path_finder.clear();
    assert!(path_finder.cells().iter().all(|c| !c.is_reached()));
}
