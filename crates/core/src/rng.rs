//! RNG module - injectable random source
//!
//! The simulation draws piece kinds and apple cells through [`RandomSource`].
//! The default source is a seeded LCG; tests can inject [`ScriptedRng`] to get
//! an exact sequence of picks.

use crate::types::PieceKind;

/// Source of uniform picks for the simulation
pub trait RandomSource {
    /// Uniform value in `[0, max)`. `max` is never 0.
    fn next_range(&mut self, max: u32) -> u32;

    /// Uniformly random piece kind
    fn next_piece(&mut self) -> PieceKind {
        PieceKind::ALL[self.next_range(PieceKind::ALL.len() as u32) as usize]
    }
}

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

    /// Current internal state (reseeding with it continues the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_range(&mut self, max: u32) -> u32 {
        // Low bits of an LCG cycle with a short period.
        (self.next_u32() >> 16) % max.max(1)
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Replays a fixed list of values, cycling when exhausted.
///
/// Each value is reduced modulo the requested range, so `ScriptedRng::new(vec![0])`
/// always picks the first candidate.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    values: Vec<u32>,
    pos: usize,
}

impl ScriptedRng {
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, pos: 0 }
    }

    /// Picks that yield the given piece kinds in order.
    pub fn pieces(kinds: &[PieceKind]) -> Self {
        Self::new(kinds.iter().map(|k| k.index() as u32).collect())
    }

    /// Number of values consumed so far
    pub fn consumed(&self) -> usize {
        self.pos
    }
}

impl RandomSource for ScriptedRng {
    fn next_range(&mut self, max: u32) -> u32 {
        if self.values.is_empty() {
            return 0;
        }
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v % max.max(1)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_range(&mut self, max: u32) -> u32 {
        (**self).next_range(max)
    }
}
