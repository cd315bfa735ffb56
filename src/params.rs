//! Generation parameters with documented defaults.
//!
//! Defaults reproduce the legacy viewer:
//! - 7 octaves (frequencies 2 through 128)
//! - smoothstep fade between 1-D nodes
//! - area-weighted bilinear inside 2-D cells
//! - the legacy 48-bit generator

use crate::error::{NoiseError, Result, MAX_OCTAVES};
use crate::interpolate::{Bilinear, Interpolation1D};
use crate::random::RngKind;

/// Default number of octaves summed per field
pub const DEFAULT_OCTAVES: u32 = 7;

/// Fractal noise parameters
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseParams {
    /// Number of layers summed, each doubling frequency and halving amplitude
    pub octaves: u32,

    /// Strategy filling between 1-D lattice nodes
    pub interpolation: Interpolation1D,

    /// Strategy filling inside 2-D lattice cells
    pub bilinear: Bilinear,

    /// Random generator seeded once per generation call
    pub rng: RngKind,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            octaves: DEFAULT_OCTAVES,
            interpolation: Interpolation1D::default(),
            bilinear: Bilinear::default(),
            rng: RngKind::default(),
        }
    }
}

impl NoiseParams {
    pub fn with_octaves(mut self, octaves: u32) -> Self {
        self.octaves = octaves;
        self
    }

    pub fn with_interpolation(mut self, interpolation: Interpolation1D) -> Self {
        self.interpolation = interpolation;
        self
    }

    pub fn with_bilinear(mut self, bilinear: Bilinear) -> Self {
        self.bilinear = bilinear;
        self
    }

    pub fn with_rng(mut self, rng: RngKind) -> Self {
        self.rng = rng;
        self
    }

    /// Validate configuration (octave frequency must fit 32 bits)
    pub fn validate(&self) -> Result<()> {
        if self.octaves > MAX_OCTAVES {
            return Err(NoiseError::TooManyOctaves(self.octaves));
        }
        Ok(())
    }
}
