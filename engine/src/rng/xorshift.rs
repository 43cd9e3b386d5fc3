//! xorshift64* random number generator
//!
//! Fast, high-quality PRNG suitable for simulation. Same seed, same sequence:
//! this is what makes runs reproducible and traces debuggable.

use serde::{Deserialize, Serialize};

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use queue_simulator_core_rs::SimRng;
///
/// let mut rng = SimRng::new(12345);
/// let value = rng.next_f64();
/// assert!(value >= 0.0 && value < 1.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimRng {
    /// Internal state (64-bit), never zero
    state: u64,
}

impl SimRng {
    /// Create a new RNG with the given seed.
    ///
    /// A zero seed is remapped to a fixed non-zero constant (xorshift state
    /// must never be zero).
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 0x9E3779B97F4A7C15 } else { seed };
        Self { state }
    }

    /// Generate the next random u64 value.
    pub fn next_u64(&mut self) -> u64 {
        // xorshift64* algorithm
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Generate a random f64 in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next_u64();
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    /// Current RNG state (for reproducing a run mid-stream).
    pub fn state(&self) -> u64 {
        self.state
    }
}
