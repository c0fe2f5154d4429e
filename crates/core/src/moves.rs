//! Valid-move counting: which adjacent swaps would create a match.
//!
//! Used as the playability gate during generation and exposed as the
//! board-difficulty metric for the diagnostic tools.

use crate::grid::{GRID_SIZE, Grid};
use crate::matching::find_matches;
use crate::types::Pos;

/// Whether swapping `a` and `b` would leave at least one match on the
/// board. Simulated on a scratch copy; empty cells never swap.
pub fn swap_creates_match(grid: &Grid, a: Pos, b: Pos) -> bool {
    if grid.get(a).is_none() || grid.get(b).is_none() {
        return false;
    }
    !find_matches(&grid.swapped(a, b)).is_empty()
}

/// Every distinct valid swap, as (cell, right-or-down neighbor) pairs.
/// Enumerating only right and down neighbors counts each unordered
/// pair exactly once.
pub fn valid_moves(grid: &Grid) -> Vec<(Pos, Pos)> {
    let mut moves = Vec::new();
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let here = Pos::new(row, col);
            if col + 1 < GRID_SIZE {
                let right = Pos::new(row, col + 1);
                if swap_creates_match(grid, here, right) {
                    moves.push((here, right));
                }
            }
            if row + 1 < GRID_SIZE {
                let below = Pos::new(row + 1, col);
                if swap_creates_match(grid, here, below) {
                    moves.push((here, below));
                }
            }
        }
    }
    moves
}

pub fn count_valid_moves(grid: &Grid) -> usize {
    valid_moves(grid).len()
}

pub fn are_adjacent(a: Pos, b: Pos) -> bool {
    let row_delta = a.row.abs_diff(b.row);
    let col_delta = a.col.abs_diff(b.col);
    (row_delta == 1 && col_delta == 0) || (row_delta == 0 && col_delta == 1)
}
