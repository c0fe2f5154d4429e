//! High-level board generation: per-seed pipeline plus the bounded
//! retry-with-wraparound loop that enforces the playability floor.

use crate::cascade::{ensure_playable, resolve_until_stable};
use crate::grid::Grid;
use crate::moves::count_valid_moves;
use crate::rng::{self, SeededStream};

use super::builder;
use super::model::GeneratedBoard;
use super::type_select::select_active_types;

/// Floor on swaps-that-match for a freshly dealt board; below this the
/// round feels frustrating rather than mid-level.
pub const MIN_VALID_MOVES: usize = 12;
/// Seed pool for ordinary play when the caller supplies no seed.
pub const SEED_POOL_START: u32 = 1_000;
pub const SEED_POOL_SIZE: u32 = 1_000;
/// Hard cap on retry attempts; bounds worst-case latency since the
/// whole loop is synchronous on the caller's path.
pub const MAX_GENERATION_ATTEMPTS: u32 = 120;

pub struct BoardGenerator {
    min_valid_moves: usize,
    max_attempts: u32,
}

impl Default for BoardGenerator {
    fn default() -> Self {
        Self { min_valid_moves: MIN_VALID_MOVES, max_attempts: MAX_GENERATION_ATTEMPTS }
    }
}

impl BoardGenerator {
    pub fn new(min_valid_moves: usize) -> Self {
        Self { min_valid_moves, max_attempts: MAX_GENERATION_ATTEMPTS }
    }

    /// Generate a board for `seed`, or for a random pool seed when
    /// absent. Seeds whose boards fall short of the move floor retry
    /// with the next seed, wrapping at the pool end; an explicitly
    /// requested seed stops retrying once the wraparound returns to
    /// it. Never fails: after the attempt budget the last board is
    /// returned with `meets_move_floor` cleared.
    pub fn generate(&self, seed: Option<u32>) -> GeneratedBoard {
        let requested = seed.unwrap_or_else(random_pool_seed);
        let pool_end = SEED_POOL_START + SEED_POOL_SIZE;
        let mut candidate = requested;

        for attempt in 0..self.max_attempts {
            let (grid, active_type_ids) = self.attempt(candidate);
            let valid_moves = count_valid_moves(&grid);
            if valid_moves >= self.min_valid_moves {
                return GeneratedBoard {
                    grid,
                    seed_used: candidate,
                    active_type_ids,
                    valid_moves,
                    meets_move_floor: true,
                };
            }
            candidate = candidate.wrapping_add(1);
            if candidate >= pool_end {
                candidate = SEED_POOL_START;
            }
            if seed.is_some() && candidate == requested && attempt > 0 {
                break;
            }
        }

        let (grid, active_type_ids) = self.attempt(candidate);
        let valid_moves = count_valid_moves(&grid);
        GeneratedBoard {
            grid,
            seed_used: candidate,
            active_type_ids,
            valid_moves,
            meets_move_floor: valid_moves >= self.min_valid_moves,
        }
    }

    /// One candidate seed through the full pipeline: select types,
    /// fill, settle any residual matches, nudge toward the floor,
    /// settle again. The builder's rejection rule makes the first
    /// settle pass a no-op in the common case; it exists for the
    /// retry-cap escape hatch on degenerate type sets.
    fn attempt(&self, seed: u32) -> (Grid, Vec<u8>) {
        let mut stream = SeededStream::new(seed);
        let active_type_ids = select_active_types(seed, &mut stream);

        let grid = builder::fill(&active_type_ids, &mut stream);
        let grid = resolve_until_stable(grid, &active_type_ids, &mut stream);
        let grid = ensure_playable(&grid, self.min_valid_moves);
        let grid = resolve_until_stable(grid, &active_type_ids, &mut stream);

        (grid, active_type_ids)
    }
}

fn random_pool_seed() -> u32 {
    SEED_POOL_START + (rng::runtime_entropy() % u64::from(SEED_POOL_SIZE)) as u32
}
