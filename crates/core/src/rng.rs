//! Seeded pseudo-random streams for board generation and refill.
//!
//! Reproducibility contract: the same seed and the same call sequence
//! always produce the same draws. No cross-version stability is
//! promised beyond this crate.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

/// Deterministic stream of uniform values keyed by a 32-bit seed.
pub struct SeededStream {
    rng: ChaCha8Rng,
}

impl SeededStream {
    pub fn new(seed: u32) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(u64::from(seed)) }
    }

    /// A stream decorrelated from `new(seed)` by a caller-chosen label,
    /// so refill draws never replay the generation sequence.
    pub fn derived(seed: u32, label: u64) -> Self {
        let mixed = mix(u64::from(seed) ^ label.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self { rng: ChaCha8Rng::seed_from_u64(mixed) }
    }

    /// Uniform draw in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        // 53 high bits of the draw give a full-precision mantissa.
        (self.rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Uniform index in 0..len. `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        let drawn = (self.next_f64() * len as f64) as usize;
        drawn.min(len - 1)
    }
}

fn mix(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}

static ENTROPY_COUNTER: AtomicU64 = AtomicU64::new(0);

/// One-shot entropy for callers that did not supply a seed. Not a
/// reproducible stream; used only to pick a pool seed.
pub fn runtime_entropy() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(std::process::id());
    let counter = ENTROPY_COUNTER.fetch_add(1, Ordering::Relaxed);

    mix((now_nanos as u64) ^ ((now_nanos >> 64) as u64) ^ pid.rotate_left(17) ^ counter.rotate_left(7))
}
