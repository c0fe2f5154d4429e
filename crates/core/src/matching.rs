//! Match detection: contiguous runs of three or more identical tiles.

use std::collections::BTreeSet;

use crate::grid::{GRID_SIZE, Grid};
use crate::types::Pos;

/// All cells covered by at least one horizontal or vertical 3-run.
/// A run of length n contributes all n cells through its overlapping
/// windows; cells shared by crossing runs appear once (set union).
/// Pure: safe to call speculatively on scratch grids.
pub fn find_matches(grid: &Grid) -> BTreeSet<Pos> {
    let mut matched = BTreeSet::new();

    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE - 2 {
            let window = [Pos::new(row, col), Pos::new(row, col + 1), Pos::new(row, col + 2)];
            if window_matches(grid, window) {
                matched.extend(window);
            }
        }
    }

    for col in 0..GRID_SIZE {
        for row in 0..GRID_SIZE - 2 {
            let window = [Pos::new(row, col), Pos::new(row + 1, col), Pos::new(row + 2, col)];
            if window_matches(grid, window) {
                matched.extend(window);
            }
        }
    }

    matched
}

fn window_matches(grid: &Grid, window: [Pos; 3]) -> bool {
    let [first, second, third] = window.map(|pos| grid.get(pos).map(|tile| tile.type_id));
    match (first, second, third) {
        (Some(a), Some(b), Some(c)) => a == b && b == c,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    #[test]
    fn clean_board_reports_nothing() {
        let grid = Grid::from_type_ids([
            [1, 2, 3, 1, 2, 3],
            [2, 3, 1, 2, 3, 1],
            [3, 1, 2, 3, 1, 2],
            [1, 2, 3, 1, 2, 3],
            [2, 3, 1, 2, 3, 1],
            [3, 1, 2, 3, 1, 2],
        ]);
        assert!(find_matches(&grid).is_empty());
    }

    #[test]
    fn horizontal_run_of_three_is_detected() {
        let grid = Grid::from_type_ids([
            [7, 7, 7, 1, 2, 3],
            [2, 3, 1, 2, 3, 1],
            [3, 1, 2, 3, 1, 2],
            [1, 2, 3, 1, 2, 3],
            [2, 3, 1, 2, 3, 1],
            [3, 1, 2, 3, 1, 2],
        ]);
        let matched = find_matches(&grid);
        assert_eq!(
            matched.into_iter().collect::<Vec<_>>(),
            vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2)]
        );
    }

    #[test]
    fn run_of_four_reports_all_four_cells() {
        let grid = Grid::from_type_ids([
            [5, 5, 5, 5, 2, 3],
            [2, 3, 1, 2, 3, 1],
            [3, 1, 2, 3, 1, 2],
            [1, 2, 3, 1, 2, 3],
            [2, 3, 1, 2, 3, 1],
            [3, 1, 2, 3, 1, 2],
        ]);
        assert_eq!(find_matches(&grid).len(), 4);
    }

    #[test]
    fn vertical_run_is_detected() {
        let grid = Grid::from_type_ids([
            [4, 2, 3, 1, 2, 3],
            [4, 3, 1, 2, 3, 1],
            [4, 1, 2, 3, 1, 2],
            [1, 2, 3, 1, 2, 3],
            [2, 3, 1, 2, 3, 1],
            [3, 1, 2, 3, 1, 2],
        ]);
        let matched = find_matches(&grid);
        assert!(matched.contains(&Pos::new(0, 0)));
        assert!(matched.contains(&Pos::new(1, 0)));
        assert!(matched.contains(&Pos::new(2, 0)));
        assert_eq!(matched.len(), 3);
    }

    #[test]
    fn l_shaped_overlap_reports_the_union_with_shared_cell_once() {
        // Vertical run at col 0 rows 0..=2 and horizontal run at row 2
        // cols 0..=2 share (2, 0).
        let grid = Grid::from_type_ids([
            [9, 2, 3, 1, 2, 3],
            [9, 3, 1, 2, 3, 1],
            [9, 9, 9, 3, 1, 2],
            [1, 2, 3, 1, 2, 3],
            [2, 3, 1, 2, 3, 1],
            [3, 1, 2, 3, 1, 2],
        ]);
        let matched = find_matches(&grid);
        assert_eq!(matched.len(), 5);
        assert!(matched.contains(&Pos::new(2, 0)));
    }

    #[test]
    fn empty_cells_never_participate_in_runs() {
        let grid = Grid::from_type_ids([
            [7, 0, 7, 7, 0, 7],
            [0, 0, 0, 0, 0, 0],
            [7, 0, 1, 2, 0, 7],
            [7, 0, 2, 1, 0, 7],
            [0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0],
        ]);
        assert!(find_matches(&grid).is_empty());
    }
}
