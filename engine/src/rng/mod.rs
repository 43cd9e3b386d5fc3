//! Deterministic random number generation.

pub mod variate;
pub mod xorshift;

pub use variate::{ExponentialVariate, FixedVariate, VariateSource};
pub use xorshift::SimRng;
