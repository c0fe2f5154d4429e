//! Per-board active type selection: fixed blocks for the designated
//! test seeds, a shuffled catalog subset for everything else.

use crate::catalog::CATALOG;
use crate::rng::SeededStream;

/// Seeds reserved for reproducible manual testing. Declaration order
/// matters: seed k maps to the k-th consecutive 5-entry catalog block.
pub const TEST_SEEDS: [u32; 4] = [1_111, 2_222, 3_333, 4_444];
pub const TYPES_PER_TEST_SEED: usize = 5;
/// Subset size for ordinary play; fewer types per board means more
/// tiles per type and therefore more matches.
pub const TYPES_PER_BOARD: usize = 8;

/// Choose the catalog subset in play for one board. Test seeds get
/// their fixed block; a block clipped below 3 entries cannot form
/// matches and falls through to the random path. Random selection is
/// a Fisher-Yates shuffle of catalog indices driven by the board's
/// own stream, so the subset is reproducible from the seed.
pub fn select_active_types(seed: u32, stream: &mut SeededStream) -> Vec<u8> {
    let block = test_seed_block(seed);
    if block.len() >= 3 {
        return block;
    }
    random_subset(stream)
}

fn test_seed_block(seed: u32) -> Vec<u8> {
    let Some(block_index) = TEST_SEEDS.iter().position(|&test_seed| test_seed == seed) else {
        return Vec::new();
    };
    let start = block_index * TYPES_PER_TEST_SEED;
    let end = (start + TYPES_PER_TEST_SEED).min(CATALOG.len());
    if start >= end {
        return Vec::new();
    }
    CATALOG[start..end].iter().map(|entry| entry.id).collect()
}

fn random_subset(stream: &mut SeededStream) -> Vec<u8> {
    let mut indices: Vec<usize> = (0..CATALOG.len()).collect();
    // One draw per step, high index down to 1; the consumption order
    // is part of the reproducibility contract.
    for i in (1..indices.len()).rev() {
        let j = stream.index(i + 1);
        indices.swap(i, j);
    }
    indices.iter().take(TYPES_PER_BOARD).map(|&index| CATALOG[index].id).collect()
}
