//! RNG module - uniform shape selection
//!
//! Each spawn draws a shape uniformly at random from the catalog. The
//! generator is a small seeded LCG so a seed fully determines the shape
//! sequence, which keeps games reproducible in tests.

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
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        (((self.next_u32() >> 16) as u64 * max as u64) >> 16) as u32
    }
}

/// Draws shapes uniformly from a fixed catalog
#[derive(Debug, Clone)]
pub struct ShapePicker {
    catalog: Vec<ShapeKind>,
    rng: SimpleRng,
}

impl ShapePicker {
    /// Create a picker over `catalog`.
    ///
    /// The catalog must be non-empty; `Game::new` checks this before building one.
    pub fn new(catalog: Vec<ShapeKind>, seed: u32) -> Self {
        debug_assert!(!catalog.is_empty());
        Self {
            catalog,
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next shape
    pub fn draw(&mut self) -> ShapeKind {
        let i = self.rng.next_range(self.catalog.len() as u32) as usize;
        self.catalog[i]
    }
}
