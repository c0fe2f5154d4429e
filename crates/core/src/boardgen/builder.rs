//! Initial board fill: random placement with local 3-run rejection.

use crate::grid::{GRID_SIZE, Grid};
use crate::rng::SeededStream;
use crate::types::Pos;

/// Draw cap per cell. With three or more active types rejection
/// succeeds within a handful of draws; the cap only matters for
/// degenerate type sets, where the last draw is accepted and the
/// generator's resolve pass cleans up the resulting runs.
const MAX_PLACEMENT_RETRIES: usize = 100;

/// Fill the grid row-major, rejecting any draw that would complete a
/// 3-run with the two cells to the left or the two cells above. Later
/// stages still re-check globally: the local rule does not cover
/// configurations introduced by subsequent nudge swaps.
pub(super) fn fill(active_type_ids: &[u8], stream: &mut SeededStream) -> Grid {
    let mut grid = Grid::empty();
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let pos = Pos::new(row, col);
            let mut candidate = draw(active_type_ids, stream);
            let mut retries = 0_usize;
            while completes_run(&grid, pos, candidate) && retries < MAX_PLACEMENT_RETRIES {
                candidate = draw(active_type_ids, stream);
                retries += 1;
            }
            grid.place(pos, candidate);
        }
    }
    grid
}

fn draw(active_type_ids: &[u8], stream: &mut SeededStream) -> u8 {
    active_type_ids[stream.index(active_type_ids.len())]
}

fn completes_run(grid: &Grid, pos: Pos, candidate: u8) -> bool {
    let same = |row: usize, col: usize| {
        grid.get(Pos::new(row, col)).is_some_and(|tile| tile.type_id == candidate)
    };
    (pos.col >= 2 && same(pos.row, pos.col - 1) && same(pos.row, pos.col - 2))
        || (pos.row >= 2 && same(pos.row - 1, pos.col) && same(pos.row - 2, pos.col))
}
