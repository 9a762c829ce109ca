//! RNG module - uniform random piece generation
//!
//! Every draw picks one of the four kinds (I, O, T, L) with equal probability
//! and stamps it with the next id from a counter owned by the generator.
//!
//! Also provides a simple LCG so sessions are reproducible from a seed.

use crate::error::ActionError;
use crate::types::{Piece, PieceKind};

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
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Scales from the high bits: the low bits of a power-of-two LCG repeat
    /// with a tiny period (the low two bits cycle every 4 draws).
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

/// Piece generator with its own id counter
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rng: SimpleRng,
    /// Seed the generator was built with.
    seed: u32,
    /// Id handed to the next generated piece (never reused).
    next_id: u32,
}

impl PieceGenerator {
    /// Create a new generator with the given seed. Ids start at 0.
    pub fn new(seed: u32) -> Self {
        Self::resume(seed, 0)
    }

    /// Create a generator whose first piece gets `next_id`.
    pub fn resume(seed: u32, next_id: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            seed,
            next_id,
        }
    }

    /// Generate the next piece.
    ///
    /// Fails with [`ActionError::IdsExhausted`] once the id counter cannot
    /// advance; nothing changes in that case.
    pub fn generate(&mut self) -> Result<Piece, ActionError> {
        let id = self.next_id;
        let next_id = id.checked_add(1).ok_or(ActionError::IdsExhausted)?;

        let kind = PieceKind::ALL[self.rng.next_range(PieceKind::ALL.len() as u32) as usize];
        self.next_id = next_id;
        Ok(Piece::new(kind, id))
    }

    /// Whether [`PieceGenerator::generate`] would fail
    pub fn is_exhausted(&self) -> bool {
        self.next_id == u32::MAX
    }

    /// Id the next generated piece will carry
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    /// Seed this generator was built with (replays the same kind sequence)
    pub fn seed(&self) -> u32 {
        self.seed
    }
}
