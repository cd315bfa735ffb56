//! Continuous sampling of generated fields through the `noise` crate's
//! `NoiseFn` interface.
//!
//! Fields are defined at integer sample positions; between them the samplers
//! interpolate, and outside the field they clamp to the nearest edge.

use noise::NoiseFn;

use crate::field::Grid;
use crate::interpolate::{Cell, Corners, Interpolate1D, Interpolate2D, Linear, Parametric};

/// Lower sample index and fractional offset for `x` in a domain of `len`
/// samples, clamped to the domain.
fn locate(x: f64, len: usize) -> (usize, usize, f64) {
    let max = (len - 1) as f64;
    let x = if x.is_nan() { 0.0 } else { x.clamp(0.0, max) };
    let lower = x.floor() as usize;
    let upper = (lower + 1).min(len - 1);
    (lower, upper, x - lower as f64)
}

/// Samples a 1-D field at fractional positions
#[derive(Debug, Clone, Copy)]
pub struct WaveSampler<'a> {
    wave: &'a [f64],
}

impl<'a> WaveSampler<'a> {
    pub fn new(wave: &'a [f64]) -> Self {
        Self { wave }
    }
}

impl NoiseFn<f64, 1> for WaveSampler<'_> {
    fn get(&self, point: [f64; 1]) -> f64 {
        if self.wave.is_empty() {
            return 0.0;
        }
        let (lower, upper, t) = locate(point[0], self.wave.len());
        if lower == upper {
            return self.wave[lower];
        }
        Linear.interpolate(0.0, self.wave[lower], 1.0, self.wave[upper], t)
    }
}

/// Samples a grid at fractional `[x, y]` (column, row) positions
#[derive(Debug, Clone, Copy)]
pub struct GridSampler<'a> {
    grid: &'a Grid,
}

impl<'a> GridSampler<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }
}

impl NoiseFn<f64, 2> for GridSampler<'_> {
    fn get(&self, point: [f64; 2]) -> f64 {
        if self.grid.is_empty() {
            return 0.0;
        }
        let (c0, c1, tx) = locate(point[0], self.grid.width());
        let (r0, r1, ty) = locate(point[1], self.grid.height());
        let corners = Corners {
            top_left: self.grid[(r0, c0)],
            top_right: self.grid[(r0, c1)],
            bottom_left: self.grid[(r1, c0)],
            bottom_right: self.grid[(r1, c1)],
        };
        Parametric.interpolate(&Cell::local(1.0, 1.0), &corners, tx, ty)
    }
}
