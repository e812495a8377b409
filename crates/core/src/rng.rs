//! RNG module - uniform random piece selection
//!
//! Each piece is drawn independently and uniformly from the seven kinds (no bag).
//! The source is abstracted behind [`PieceRng`] so games can run from a
//! seeded LCG (deterministic, used in tests and for `--seed`), from OS entropy,
//! or from any `rand` generator.

use rand::RngCore;

use crate::types::PieceKind;

/// A source of piece kinds.
pub trait PieceRng {
    /// Generate next random u32
    fn next_u32(&mut self) -> u32;

    /// Generate random value in range [0, max)
    fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Draw a kind uniformly at random
    fn next_kind(&mut self) -> PieceKind {
        PieceKind::from_index(self.next_range(PieceKind::ALL.len() as u32) as usize)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
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

    /// Create an RNG seeded from the thread-local entropy source
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().next_u32())
    }

    /// Current internal state; feeding it to [`SimpleRng::new`] resumes the sequence.
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl PieceRng for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        // Low bits of a power-of-two LCG cycle quickly; use the high half.
        self.state >> 16
    }
}

/// Adapter that lets any `rand` generator feed a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandSource<R>(pub R);

impl<R: RngCore> PieceRng for RandSource<R> {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }
}

/// Replays a fixed list of kinds, cycling when it runs out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedPieces {
    kinds: Vec<PieceKind>,
    pos: usize,
}

impl ScriptedPieces {
    /// # Panics
    ///
    /// Panics if `kinds` is empty.
    pub fn new(kinds: impl Into<Vec<PieceKind>>) -> Self {
        let kinds = kinds.into();
        assert!(!kinds.is_empty(), "scripted piece list must not be empty");
        Self { kinds, pos: 0 }
    }
}

impl PieceRng for ScriptedPieces {
    fn next_u32(&mut self) -> u32 {
        let kind = self.kinds[self.pos % self.kinds.len()];
        self.pos += 1;
        kind.index() as u32
    }
}
