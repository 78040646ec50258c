//! RNG module - deterministic uniform shape selection.
//!
//! Shape selection is an unweighted uniform draw over the seven kinds on
//! every spawn; there is deliberately no bag randomizer. A simple LCG keeps
//! games reproducible from a seed, for tests and benches.

use crate::types::ShapeKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Uniform IID shape stream.
#[derive(Debug, Clone)]
pub struct ShapePicker {
    rng: SimpleRng,
}

impl ShapePicker {
    /// Create a new picker with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next shape kind, each of the seven equally likely.
    pub fn draw(&mut self) -> ShapeKind {
        ShapeKind::ALL[self.rng.next_range(ShapeKind::ALL.len() as u32) as usize]
    }
}

impl Default for ShapePicker {
    fn default() -> Self {
        Self::new(1)
    }
}
