//! Command-line argument parsing.

use clap::{Parser, ValueEnum};

use crate::error::Result;
use crate::interpolate::{Bilinear, Interpolation1D};
use crate::params::{NoiseParams, DEFAULT_OCTAVES};
use crate::random::RngKind;
use crate::render::Palette;

/// Seed the legacy viewer rendered with
pub const DEFAULT_SEED: i64 = 27184235;

/// Field dimensionality
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Terrain profile from a 1-D field
    #[value(name = "1d")]
    Noise1D,
    /// Heightmap from a 2-D field
    #[default]
    #[value(name = "2d")]
    Noise2D,
}

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "valuenoise")]
#[command(about = "Render fractal value noise to a PNG", long_about = None)]
pub struct Args {
    /// Field dimensionality
    #[arg(long, value_enum, default_value_t = Mode::Noise2D)]
    pub mode: Mode,

    /// Image width (samples)
    #[arg(long, default_value_t = 800)]
    pub width: i32,

    /// Image height (samples; profile height in 1d mode)
    #[arg(long, default_value_t = 600)]
    pub height: i32,

    /// RNG seed for noise generation
    #[arg(long, default_value_t = DEFAULT_SEED, allow_negative_numbers = true)]
    pub seed: i64,

    /// Maximum amplitude (default: 200 in 1d, 255 in 2d)
    #[arg(long)]
    pub amplitude: Option<i32>,

    /// Number of octaves
    #[arg(long, default_value_t = DEFAULT_OCTAVES)]
    pub octaves: u32,

    /// 1-D interpolation between lattice nodes
    #[arg(long, value_enum, default_value_t = Interpolation1D::Fade)]
    pub interpolation: Interpolation1D,

    /// 2-D interpolation inside lattice cells
    #[arg(long, value_enum, default_value_t = Bilinear::AreaWeighted)]
    pub bilinear: Bilinear,

    /// Random generator
    #[arg(long, value_enum, default_value_t = RngKind::Legacy)]
    pub rng: RngKind,

    /// Colour palette (default: gray in 1d, terrain in 2d)
    #[arg(long, value_enum)]
    pub palette: Option<Palette>,

    /// Pixels per sample in 2d mode
    #[arg(long, default_value_t = 1)]
    pub scale: u32,

    /// Output file path
    #[arg(long, default_value = "noise.png")]
    pub output: String,
}

impl Args {
    /// Build validated generation parameters
    pub fn params(&self) -> Result<NoiseParams> {
        let params = NoiseParams::default()
            .with_octaves(self.octaves)
            .with_interpolation(self.interpolation)
            .with_bilinear(self.bilinear)
            .with_rng(self.rng);
        params.validate()?;
        Ok(params)
    }

    pub fn amplitude(&self) -> i32 {
        self.amplitude.unwrap_or(match self.mode {
            Mode::Noise1D => 200,
            Mode::Noise2D => 255,
        })
    }

    /// Amplitude of the 1d shading detail, `(255 - amplitude) * 100` saturated
    pub fn detail_amplitude(&self) -> i32 {
        255i32.saturating_sub(self.amplitude()).saturating_mul(100)
    }

    pub fn palette(&self) -> Palette {
        self.palette.unwrap_or(match self.mode {
            Mode::Noise1D => Palette::Gray,
            Mode::Noise2D => Palette::Terrain,
        })
    }
}
