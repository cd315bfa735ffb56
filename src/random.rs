//! Seeded random sources.
//!
//! Every generation call owns exactly one source and advances it
//! sequentially: octaves in order, lattice nodes left-to-right (1-D) or
//! row-major (2-D). Same seed, same draws, same field.

use clap::ValueEnum;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A deterministic stream of uniform doubles in [0, 1)
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

const MULTIPLIER: u64 = 0x5_DEEC_E66D;
const INCREMENT: u64 = 0xB;
const MASK: u64 = (1 << 48) - 1;
const DOUBLE_UNIT: f64 = 1.0 / (1u64 << 53) as f64;

/// 48-bit linear congruential generator.
///
/// Bit-compatible with the generator the legacy noise viewer used, so fields
/// produced with this source match its output for the same seed.
#[derive(Debug, Clone)]
pub struct LegacyRandom {
    state: u64,
}

impl LegacyRandom {
    pub fn new(seed: i64) -> Self {
        Self {
            state: (seed as u64 ^ MULTIPLIER) & MASK,
        }
    }

    /// Advance the state and return its top `bits` bits
    fn next_bits(&mut self, bits: u32) -> u64 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT) & MASK;
        self.state >> (48 - bits)
    }
}

impl RandomSource for LegacyRandom {
    fn next_f64(&mut self) -> f64 {
        let high = self.next_bits(26) << 27;
        let low = self.next_bits(27);
        (high + low) as f64 * DOUBLE_UNIT
    }
}

/// Source backed by `rand`'s standard generator
#[derive(Debug, Clone)]
pub struct StdSource {
    rng: StdRng,
}

impl StdSource {
    pub fn new(seed: i64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed as u64),
        }
    }
}

impl RandomSource for StdSource {
    fn next_f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Which generator backs a generation call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum RngKind {
    /// Legacy 48-bit LCG (reproduces the legacy viewer's fields)
    #[default]
    Legacy,
    /// `rand::rngs::StdRng`
    Std,
}

impl RngKind {
    /// Create a fresh source of this kind seeded with `seed`
    pub fn source(self, seed: i64) -> Box<dyn RandomSource> {
        match self {
            RngKind::Legacy => Box::new(LegacyRandom::new(seed)),
            RngKind::Std => Box::new(StdSource::new(seed)),
        }
    }
}

/// Draw one lattice node value for a layer of the given amplitude.
///
/// Result lies in (-amplitude/2, amplitude/2].
pub fn node_value<S: RandomSource + ?Sized>(source: &mut S, amplitude: f64) -> f64 {
    (amplitude / 2.0) - (source.next_f64() * amplitude)
}
