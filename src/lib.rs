//! Valuenoise - deterministic fractal value noise
//!
//! Random values are assigned to lattice nodes, interpolated across the
//! sample domain, and summed over octaves of doubling frequency and halving
//! amplitude. The same seed always yields the same field.

pub mod cli;
pub mod error;
pub mod field;
pub mod fractal;
pub mod interpolate;
pub mod octave;
pub mod params;
pub mod random;
pub mod render;
pub mod sampler;

pub use error::{NoiseError, Result};
pub use field::Grid;
pub use fractal::{amplitude_envelope, generate, generate_2d, Fractal};
pub use params::NoiseParams;
pub use random::{LegacyRandom, RandomSource, RngKind, StdSource};
