//! Single noise layers: a lattice of random node values filled in by
//! interpolation.

use log::debug;

use crate::error::{NoiseError, Result};
use crate::field::Grid;
use crate::interpolate::{Cell, Corners, Interpolate1D, Interpolate2D};
use crate::random::{node_value, RandomSource};

/// One frequency/amplitude layer of a fractal sum
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Octave {
    /// 1-based position in the octave sequence
    pub index: u32,
    /// Lattice cells across the sample domain, `2^index`
    pub frequency: i64,
    /// Peak-to-peak range of node values, `max_amplitude / frequency`
    pub amplitude: f64,
}

impl Octave {
    /// The `index`-th octave (1-based) for a given maximum amplitude.
    ///
    /// Frequencies past `2^62` saturate at `i64::MAX`.
    pub fn nth(index: u32, max_amplitude: f64) -> Self {
        let frequency = 1i64
            .checked_shl(index)
            .filter(|f| *f > 0)
            .unwrap_or(i64::MAX);
        Self {
            index,
            frequency,
            amplitude: max_amplitude / frequency as f64,
        }
    }

    /// Octaves `1..=count`
    pub fn sequence(count: u32, max_amplitude: f64) -> impl Iterator<Item = Octave> {
        (1..=count).map(move |index| Octave::nth(index, max_amplitude))
    }
}

/// Lattice spacing along one axis, never below one sample
fn lattice_step(size: i64, frequency: i64, axis: &'static str) -> i64 {
    let step = size / frequency;
    if step < 1 {
        debug!(
            "{} {} below frequency {}, clamping lattice step to 1",
            axis, size, frequency
        );
        1
    } else {
        step
    }
}

/// Generate one 1-D layer of `length` samples.
///
/// Nodes sit at multiples of `length / frequency` (at least 1) and receive
/// their drawn value directly; samples between two nodes are interpolated.
/// Nodes are drawn up to `(step + 1) * frequency - 1`, and further when that
/// leaves the tail of the field uncovered (`length % frequency >= 2` with a
/// step close to the frequency). Only in that case does the draw count differ
/// from the legacy viewer. Non-positive `length` or `frequency` yields a
/// zero-filled field without drawing from `source`.
pub fn octave_1d<S, I>(
    source: &mut S,
    frequency: i64,
    amplitude: f64,
    length: i64,
    interp: &I,
) -> Vec<f64>
where
    S: RandomSource + ?Sized,
    I: Interpolate1D + ?Sized,
{
    let mut wave = vec![0.0; length.max(0) as usize];
    if length <= 0 || frequency <= 0 {
        return wave;
    }

    let step = lattice_step(length, frequency, "length");

    let mut last_node = node_value(source, amplitude);
    wave[0] = last_node;

    // The last node must sit at or past length - 1; the segment reaching past
    // the end is cut short.
    let covering_node = (length - 1 + step - 1) / step * step;
    let end = (step + 1)
        .saturating_mul(frequency)
        .saturating_sub(1)
        .max(covering_node + 1);
    for i in (step..end).step_by(step as usize) {
        let node = node_value(source, amplitude);
        if i < length {
            wave[i as usize] = node;
        }

        let start = i - step + 1;
        for j in start..i.min(length) {
            wave[j as usize] =
                interp.interpolate(start as f64, last_node, i as f64, node, j as f64);
        }
        last_node = node;
    }

    wave
}

/// Generate one 2-D layer of `height` rows by `width` columns.
///
/// The lattice has one extra row and column beyond the last full cell so every
/// sample has four enclosing corners. Nodes are drawn row-major. Samples on a
/// lattice point take the node value; all others interpolate inside their
/// cell, with the cell spanning `(0, 0)`-`(step_x, step_y)` in local
/// coordinates. Steps are clamped to at least 1, so a frequency larger than
/// a dimension makes every sample a node instead of dividing by zero.
pub fn octave_2d<S, I>(
    source: &mut S,
    frequency: i64,
    amplitude: f64,
    width: i64,
    height: i64,
    interp: &I,
) -> Grid
where
    S: RandomSource + ?Sized,
    I: Interpolate2D + ?Sized,
{
    if width <= 0 || height <= 0 || frequency <= 0 {
        return Grid::zeros(width.max(0) as usize, height.max(0) as usize);
    }

    let step_x = lattice_step(width, frequency, "width");
    let step_y = lattice_step(height, frequency, "height");

    let lattice_rows = (height / step_y + 2) as usize;
    let lattice_cols = (width / step_x + 2) as usize;
    let lattice = Grid::from_fn(lattice_cols, lattice_rows, |_, _| {
        node_value(source, amplitude)
    });

    let cell = Cell::local(step_x as f64, step_y as f64);

    Grid::from_fn(width as usize, height as usize, |i, j| {
        let (i, j) = (i as i64, j as i64);
        let i1 = i / step_y;
        let j1 = j / step_x;
        let ry = i - i1 * step_y;
        let rx = j - j1 * step_x;

        let (r, c) = (i1 as usize, j1 as usize);
        let corners = Corners {
            top_left: lattice[(r, c)],
            top_right: lattice[(r, c + 1)],
            bottom_left: lattice[(r + 1, c)],
            bottom_right: lattice[(r + 1, c + 1)],
        };

        if rx == 0 && ry == 0 {
            corners.top_left
        } else {
            interp.interpolate(&cell, &corners, rx as f64, ry as f64)
        }
    })
}

/// Report when any of `octaves` would collapse a 2-D lattice step to zero.
///
/// `octave_2d` clamps such steps to 1; callers that prefer to reject the
/// configuration check here first.
pub fn check_resolution_2d(width: i64, height: i64, octaves: u32) -> Result<()> {
    if octaves == 0 || width <= 0 || height <= 0 {
        return Ok(());
    }
    let frequency = Octave::nth(octaves, 1.0).frequency;
    if width < frequency {
        return Err(NoiseError::StepCollapsed {
            axis: "width",
            size: width,
            frequency,
        });
    }
    if height < frequency {
        return Err(NoiseError::StepCollapsed {
            axis: "height",
            size: height,
            frequency,
        });
    }
    Ok(())
}
