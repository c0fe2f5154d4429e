//! Public result model for seeded board generation.

use crate::grid::Grid;

/// One generated board plus the provenance a caller needs to replay
/// or verify it: the seed actually used (which may differ from the
/// requested seed under retry), the catalog subset in play, and the
/// measured difficulty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedBoard {
    pub grid: Grid,
    pub seed_used: u32,
    pub active_type_ids: Vec<u8>,
    pub valid_moves: usize,
    /// False only when the attempt budget ran out below the floor and
    /// the board is a flagged best-effort result.
    pub meets_move_floor: bool,
}

impl GeneratedBoard {
    pub fn fingerprint(&self) -> String {
        self.grid.fingerprint()
    }
}
