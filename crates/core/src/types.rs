use serde::Serialize;

/// Grid coordinate, row 0 at the top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    OutOfBounds(Pos),
    NotAdjacent { a: Pos, b: Pos },
    EmptyCell(Pos),
}

/// What happened to a player swap once the engine finished with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwapOutcome {
    /// The swap produced no match and was undone.
    Reverted,
    /// The swap matched; cascades ran until the board settled.
    Cleared { tiles_cleared: usize, cascades: usize, points: u32 },
}
