//! Cascade resolution: clear matched tiles, apply column gravity,
//! refill from the board's active type set, repeat until stable.

use std::collections::BTreeSet;

use crate::catalog::{CATALOG, tile_type};
use crate::grid::{GRID_SIZE, Grid};
use crate::matching::find_matches;
use crate::moves::{count_valid_moves, swap_creates_match};
use crate::rng::SeededStream;
use crate::types::Pos;

/// Upper bound on nudge passes in [`ensure_playable`]; keeps the loop
/// off any request's critical path even when no safe swap exists.
pub const MAX_NUDGE_PASSES: usize = 200;

/// Clear `matched` cells, drop survivors column by column, and refill
/// the vacated top cells. Refill draws only from `active_type_ids`
/// (filtered against the catalog) so a board never grows a symbol the
/// player didn't start with; an empty set falls back to the full
/// catalog for direct library callers.
pub fn resolve(
    grid: &Grid,
    matched: &BTreeSet<Pos>,
    active_type_ids: &[u8],
    stream: &mut SeededStream,
) -> Grid {
    let pool = refill_pool(active_type_ids);
    let mut next = grid.clone();

    for col in 0..GRID_SIZE {
        let mut shift = 0_usize;
        for row in (0..GRID_SIZE).rev() {
            let pos = Pos::new(row, col);
            if matched.contains(&pos) {
                shift += 1;
                next.clear(pos);
            } else if shift > 0
                && let Some(tile) = next.get(pos)
            {
                next.place(Pos::new(row + shift, col), tile.type_id);
                next.clear(pos);
            }
        }
        for row in 0..shift {
            let type_id = pool[stream.index(pool.len())];
            next.place(Pos::new(row, col), type_id);
        }
    }

    next
}

/// Detect → resolve until the board is quiescent. Refills can create
/// fresh runs, so one pass is not enough; this is the chain-reaction
/// loop used both at generation time and during live play.
pub fn resolve_until_stable(mut grid: Grid, active_type_ids: &[u8], stream: &mut SeededStream) -> Grid {
    loop {
        let matched = find_matches(&grid);
        if matched.is_empty() {
            return grid;
        }
        grid = resolve(&grid, &matched, active_type_ids, stream);
    }
}

/// Raise the board's valid-move count toward `min_moves` by local
/// nudge swaps, scanning row-major and committing at most one swap per
/// pass. A nudge is committed only when it registers as a valid move
/// *and* leaves the board match-free once applied, so the pass never
/// hands out a pre-resolved board. When a full scan commits nothing
/// the board cannot be improved further and the loop exits early;
/// callers treat the result as best effort (the generator's seed
/// retry loop owns the hard floor).
pub fn ensure_playable(grid: &Grid, min_moves: usize) -> Grid {
    let mut result = grid.clone();
    let mut passes = 0_usize;

    while count_valid_moves(&result) < min_moves && passes < MAX_NUDGE_PASSES {
        let mut applied = false;

        'scan: for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let here = Pos::new(row, col);
                let mut neighbors = Vec::with_capacity(2);
                if col + 1 < GRID_SIZE {
                    neighbors.push(Pos::new(row, col + 1));
                }
                if row + 1 < GRID_SIZE {
                    neighbors.push(Pos::new(row + 1, col));
                }
                for neighbor in neighbors {
                    if swap_creates_match(&result, here, neighbor) {
                        let nudged = result.swapped(here, neighbor);
                        if find_matches(&nudged).is_empty() {
                            result = nudged;
                            applied = true;
                            break 'scan;
                        }
                    }
                }
            }
        }

        if !applied {
            break;
        }
        passes += 1;
    }

    result
}

fn refill_pool(active_type_ids: &[u8]) -> Vec<u8> {
    let filtered: Vec<u8> =
        active_type_ids.iter().copied().filter(|&id| tile_type(id).is_some()).collect();
    if filtered.is_empty() { CATALOG.iter().map(|entry| entry.id).collect() } else { filtered }
}
