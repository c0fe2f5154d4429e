pub mod boardgen;
pub mod cascade;
pub mod catalog;
pub mod game;
pub mod grid;
pub mod matching;
pub mod moves;
pub mod rng;
pub mod types;

pub use boardgen::{BoardGenerator, GeneratedBoard, MIN_VALID_MOVES, generate};
pub use catalog::{CATALOG, TileType, tile_type};
pub use game::{ROUND_SECONDS, Round, SCORE_PER_MATCH};
pub use grid::{FingerprintError, GRID_SIZE, Grid, Tile};
pub use matching::find_matches;
pub use moves::{are_adjacent, count_valid_moves, valid_moves};
pub use types::*;
