//! One live play round: a generated board, player swaps, cascade
//! scoring. The timer and all presentation live with the caller; this
//! type only owns the board state and the score.

use crate::boardgen::{self, GeneratedBoard};
use crate::cascade::{ensure_playable, resolve};
use crate::grid::{GRID_SIZE, Grid};
use crate::matching::find_matches;
use crate::moves::{are_adjacent, count_valid_moves};
use crate::rng::SeededStream;
use crate::types::{Pos, RoundError, SwapOutcome};

pub const SCORE_PER_MATCH: u32 = 10;
/// Round length in seconds; enforced by the caller's clock.
pub const ROUND_SECONDS: u32 = 45;

/// Label for the refill stream so live-play refills never replay the
/// generation draw sequence.
const REFILL_STREAM: u64 = 1;

pub struct Round {
    grid: Grid,
    seed_used: u32,
    active_type_ids: Vec<u8>,
    score: u32,
    refill: SeededStream,
}

impl Round {
    pub fn new(seed: Option<u32>) -> Self {
        Self::from_board(boardgen::generate(seed))
    }

    /// Start a round on an already generated board. Deterministic:
    /// the refill stream is derived from the board's seed, so the same
    /// board plus the same swap sequence replays the same round.
    pub fn from_board(board: GeneratedBoard) -> Self {
        let refill = SeededStream::derived(board.seed_used, REFILL_STREAM);
        Self {
            grid: board.grid,
            seed_used: board.seed_used,
            active_type_ids: board.active_type_ids,
            score: 0,
            refill,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// The seed to report alongside the final score, for later
    /// verification of which board this round was played on.
    pub fn seed_used(&self) -> u32 {
        self.seed_used
    }

    pub fn active_type_ids(&self) -> &[u8] {
        &self.active_type_ids
    }

    pub fn valid_moves_remaining(&self) -> usize {
        count_valid_moves(&self.grid)
    }

    /// Apply a player swap. A swap that creates no match leaves the
    /// board untouched (`Reverted`); otherwise matches are cleared and
    /// cascades run to quiescence, scoring per cleared tile. After
    /// every refill a single-move playability nudge keeps the board
    /// from going dead mid-round.
    pub fn swap(&mut self, a: Pos, b: Pos) -> Result<SwapOutcome, RoundError> {
        for pos in [a, b] {
            if pos.row >= GRID_SIZE || pos.col >= GRID_SIZE {
                return Err(RoundError::OutOfBounds(pos));
            }
        }
        if !are_adjacent(a, b) {
            return Err(RoundError::NotAdjacent { a, b });
        }
        for pos in [a, b] {
            if self.grid.get(pos).is_none() {
                return Err(RoundError::EmptyCell(pos));
            }
        }

        let swapped = self.grid.swapped(a, b);
        let mut matched = find_matches(&swapped);
        if matched.is_empty() {
            return Ok(SwapOutcome::Reverted);
        }

        self.grid = swapped;
        let mut tiles_cleared = 0_usize;
        let mut cascades = 0_usize;
        let mut points = 0_u32;

        while !matched.is_empty() {
            tiles_cleared += matched.len();
            points += matched.len() as u32 * SCORE_PER_MATCH;
            cascades += 1;

            let resolved = resolve(&self.grid, &matched, &self.active_type_ids, &mut self.refill);
            self.grid = ensure_playable(&resolved, 1);
            matched = find_matches(&self.grid);
        }

        self.score += points;
        Ok(SwapOutcome::Cleared { tiles_cleared, cascades, points })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Board with zero valid moves; every swap on it reverts.
    fn dead_round() -> Round {
        let grid = Grid::from_type_ids([
            [1, 2, 1, 2, 1, 2],
            [3, 4, 3, 4, 3, 4],
            [5, 6, 5, 6, 5, 6],
            [7, 8, 7, 8, 7, 8],
            [9, 10, 9, 10, 9, 10],
            [11, 12, 11, 12, 11, 12],
        ]);
        Round::from_board(GeneratedBoard {
            grid,
            seed_used: 1_500,
            active_type_ids: (1..=12).collect(),
            valid_moves: 0,
            meets_move_floor: false,
        })
    }

    /// Board where swapping (0,2) and (0,3) completes a run of 7s.
    fn one_move_round() -> Round {
        let grid = Grid::from_type_ids([
            [7, 7, 1, 7, 2, 3],
            [2, 3, 4, 5, 6, 1],
            [5, 6, 2, 1, 3, 4],
            [1, 2, 5, 6, 4, 5],
            [4, 5, 6, 3, 1, 2],
            [6, 1, 3, 2, 5, 6],
        ]);
        Round::from_board(GeneratedBoard {
            grid,
            seed_used: 1_500,
            active_type_ids: vec![1, 2, 3, 4, 5, 6, 7],
            valid_moves: 1,
            meets_move_floor: false,
        })
    }

    #[test]
    fn non_adjacent_swaps_are_rejected() {
        let mut round = dead_round();
        let err = round.swap(Pos::new(0, 0), Pos::new(2, 2)).expect_err("diagonal swap");
        assert!(matches!(err, RoundError::NotAdjacent { .. }));
    }

    #[test]
    fn out_of_bounds_swaps_are_rejected() {
        let mut round = dead_round();
        let err = round.swap(Pos::new(5, 5), Pos::new(5, 6)).expect_err("off-board swap");
        assert_eq!(err, RoundError::OutOfBounds(Pos::new(5, 6)));
    }

    #[test]
    fn matchless_swaps_revert_and_score_nothing() {
        let mut round = dead_round();
        let before = round.grid().fingerprint();

        let outcome = round.swap(Pos::new(0, 0), Pos::new(0, 1)).expect("legal swap");

        assert_eq!(outcome, SwapOutcome::Reverted);
        assert_eq!(round.grid().fingerprint(), before);
        assert_eq!(round.score(), 0);
    }

    #[test]
    fn matching_swap_clears_scores_and_settles() {
        let mut round = one_move_round();

        let outcome = round.swap(Pos::new(0, 2), Pos::new(0, 3)).expect("legal swap");

        let SwapOutcome::Cleared { tiles_cleared, cascades, points } = outcome else {
            panic!("completing swap should clear, got {outcome:?}");
        };
        assert!(tiles_cleared >= 3);
        assert!(cascades >= 1);
        assert_eq!(points, tiles_cleared as u32 * SCORE_PER_MATCH);
        assert_eq!(round.score(), points);
        assert!(find_matches(round.grid()).is_empty());
        assert!(round.grid().is_coherent());
    }

    #[test]
    fn refills_stay_inside_the_active_set() {
        let mut round = one_move_round();
        round.swap(Pos::new(0, 2), Pos::new(0, 3)).expect("legal swap");

        for (id, _) in round.grid().type_counts() {
            assert!(round.active_type_ids().contains(&id), "id {id} appeared from outside");
        }
    }

    #[test]
    fn identical_rounds_replay_identically() {
        let mut left = one_move_round();
        let mut right = one_move_round();

        let outcome_left = left.swap(Pos::new(0, 2), Pos::new(0, 3)).expect("legal swap");
        let outcome_right = right.swap(Pos::new(0, 2), Pos::new(0, 3)).expect("legal swap");

        assert_eq!(outcome_left, outcome_right);
        assert_eq!(left.grid().fingerprint(), right.grid().fingerprint());
        assert_eq!(left.score(), right.score());
    }

    #[test]
    fn swap_order_of_arguments_does_not_matter() {
        let mut forward = one_move_round();
        let mut backward = one_move_round();

        let a = forward.swap(Pos::new(0, 2), Pos::new(0, 3)).expect("legal swap");
        let b = backward.swap(Pos::new(0, 3), Pos::new(0, 2)).expect("legal swap");

        assert_eq!(a, b);
        assert_eq!(forward.grid().fingerprint(), backward.grid().fingerprint());
    }
}
