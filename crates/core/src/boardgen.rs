//! Seeded board generation split into coherent submodules.

pub mod model;

mod builder;
mod generator;
mod type_select;

pub use generator::{
    BoardGenerator, MAX_GENERATION_ATTEMPTS, MIN_VALID_MOVES, SEED_POOL_SIZE, SEED_POOL_START,
};
pub use model::GeneratedBoard;
pub use type_select::{TEST_SEEDS, TYPES_PER_BOARD, TYPES_PER_TEST_SEED, select_active_types};

pub fn generate(seed: Option<u32>) -> GeneratedBoard {
    BoardGenerator::default().generate(seed)
}

#[cfg(test)]
mod tests {
    use super::{BoardGenerator, generate};

    #[test]
    fn generate_matches_board_generator_output() {
        let seed = 1_234_u32;

        let from_helper = generate(Some(seed));
        let from_generator = BoardGenerator::default().generate(Some(seed));

        assert_eq!(from_helper, from_generator);
    }
}
