//! The 6×6 board value type and its fingerprint codec.
//!
//! Grids are small enough to treat as values: every transformation
//! (swap, gravity, refill) produces a new `Grid`, which keeps the
//! speculative swap-and-check paths free of aliasing concerns.

use std::collections::BTreeMap;

use crate::types::Pos;

pub const GRID_SIZE: usize = 6;

/// A placed tile. `pos` mirrors the tile's matrix position and must be
/// kept in sync on every move and shift.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    pub type_id: u8,
    pub pos: Pos,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: [[Option<Tile>; GRID_SIZE]; GRID_SIZE],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FingerprintError {
    WrongRowCount(usize),
    UnparsableRow { row: usize, text: String },
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

impl Grid {
    pub fn empty() -> Self {
        Self { cells: [[None; GRID_SIZE]; GRID_SIZE] }
    }

    /// Build a grid from row-major type ids; 0 marks an empty cell.
    pub fn from_type_ids(ids: [[u8; GRID_SIZE]; GRID_SIZE]) -> Self {
        let mut grid = Self::empty();
        for (row, row_ids) in ids.iter().enumerate() {
            for (col, &id) in row_ids.iter().enumerate() {
                if id != 0 {
                    grid.place(Pos::new(row, col), id);
                }
            }
        }
        grid
    }

    pub fn get(&self, pos: Pos) -> Option<Tile> {
        self.cells[pos.row][pos.col]
    }

    pub fn place(&mut self, pos: Pos, type_id: u8) {
        self.cells[pos.row][pos.col] = Some(Tile { type_id, pos });
    }

    pub fn clear(&mut self, pos: Pos) {
        self.cells[pos.row][pos.col] = None;
    }

    /// New grid with the contents of `a` and `b` exchanged. Stored tile
    /// positions are re-synced to their destination cells.
    pub fn swapped(&self, a: Pos, b: Pos) -> Self {
        let mut next = self.clone();
        let tile_a = self.get(a).map(|tile| Tile { pos: b, ..tile });
        let tile_b = self.get(b).map(|tile| Tile { pos: a, ..tile });
        next.cells[b.row][b.col] = tile_a;
        next.cells[a.row][a.col] = tile_b;
        next
    }

    /// Every stored tile position matches its matrix position.
    pub fn is_coherent(&self) -> bool {
        self.iter().all(|(pos, tile)| tile.is_none_or(|t| t.pos == pos))
    }

    /// Row-major iteration over all 36 cells.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Option<Tile>)> + '_ {
        (0..GRID_SIZE).flat_map(move |row| {
            (0..GRID_SIZE).map(move |col| {
                let pos = Pos::new(row, col);
                (pos, self.get(pos))
            })
        })
    }

    /// Tile ids present on the board, with their cell counts.
    pub fn type_counts(&self) -> BTreeMap<u8, usize> {
        let mut counts = BTreeMap::new();
        for (_, tile) in self.iter() {
            if let Some(tile) = tile {
                *counts.entry(tile.type_id).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Compact identity encoding: tile ids row by row, rows joined by
    /// `|`, empty cells as `.`. Two grids are interchangeable for
    /// gameplay purposes iff their fingerprints are equal.
    pub fn fingerprint(&self) -> String {
        let mut out = String::new();
        for row in 0..GRID_SIZE {
            if row > 0 {
                out.push('|');
            }
            for col in 0..GRID_SIZE {
                match self.get(Pos::new(row, col)) {
                    Some(tile) => out.push_str(itoa(tile.type_id)),
                    None => out.push('.'),
                }
            }
        }
        out
    }

    /// Inverse of [`Grid::fingerprint`]. Digit runs are ambiguous
    /// ("11" is one tile or two), so rows are tokenized with
    /// backtracking under the constraint of exactly six cells per row;
    /// any consistent reading re-fingerprints to the input string.
    pub fn parse_fingerprint(text: &str) -> Result<Self, FingerprintError> {
        let rows: Vec<&str> = text.trim().split('|').collect();
        if rows.len() != GRID_SIZE {
            return Err(FingerprintError::WrongRowCount(rows.len()));
        }

        let mut grid = Self::empty();
        for (row, raw) in rows.iter().enumerate() {
            let mut ids = Vec::with_capacity(GRID_SIZE);
            if !tokenize_row(raw.trim().as_bytes(), &mut ids) {
                return Err(FingerprintError::UnparsableRow { row, text: (*raw).to_string() });
            }
            for (col, id) in ids.into_iter().enumerate() {
                if let Some(id) = id {
                    grid.place(Pos::new(row, col), id);
                }
            }
        }
        Ok(grid)
    }

    /// Stable byte encoding for hashing: row-major type ids, 0 for
    /// empty cells.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        self.iter().map(|(_, tile)| tile.map_or(0, |t| t.type_id)).collect()
    }
}

/// Tokenize one fingerprint row into exactly `GRID_SIZE` cells,
/// consuming the whole string. Prefers the two-digit reading (ids
/// 10..=20) and backtracks when that reading strands a suffix.
fn tokenize_row(text: &[u8], out: &mut Vec<Option<u8>>) -> bool {
    if out.len() == GRID_SIZE {
        return text.is_empty();
    }
    let Some(&first) = text.first() else {
        return false;
    };

    if first == b'.' {
        out.push(None);
        if tokenize_row(&text[1..], out) {
            return true;
        }
        out.pop();
        return false;
    }

    if !first.is_ascii_digit() || first == b'0' {
        return false;
    }

    if let Some(&second) = text.get(1)
        && second.is_ascii_digit()
    {
        let two_digit = (first - b'0') * 10 + (second - b'0');
        if (10..=20).contains(&two_digit) {
            out.push(Some(two_digit));
            if tokenize_row(&text[2..], out) {
                return true;
            }
            out.pop();
        }
    }

    out.push(Some(first - b'0'));
    if tokenize_row(&text[1..], out) {
        return true;
    }
    out.pop();
    false
}

/// Tile ids are 1..=20, so formatting never allocates.
fn itoa(id: u8) -> &'static str {
    const NAMES: [&str; 21] = [
        "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15", "16",
        "17", "18", "19", "20",
    ];
    NAMES[usize::from(id.min(20))]
}
