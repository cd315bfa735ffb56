//! Error types for parameter validation and image export.
//!
//! Noise generation itself never fails: degenerate sizes produce zero-filled
//! fields. Errors only come from validating parameters up front and from
//! writing rendered images.

use thiserror::Error;

/// Largest octave count whose frequency (`2^octaves`) fits a 32-bit integer
pub const MAX_OCTAVES: u32 = 30;

#[derive(Debug, Error)]
pub enum NoiseError {
    #[error("octave count {0} exceeds the maximum of {max}", max = MAX_OCTAVES)]
    TooManyOctaves(u32),

    #[error("{axis} of {size} is smaller than octave frequency {frequency}; lattice step collapses to zero")]
    StepCollapsed {
        axis: &'static str,
        size: i64,
        frequency: i64,
    },

    #[error("cannot render an empty field")]
    EmptyField,

    #[error("{width}x{height} field at scale {scale} exceeds the maximum image size")]
    ImageTooLarge {
        width: usize,
        height: usize,
        scale: u32,
    },

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, NoiseError>;
