//! Fractal (fBm) composition: sum of octaves with doubling frequency and
//! halving amplitude.

use log::debug;

use crate::error::Result;
use crate::field::{self, Grid};
use crate::octave::{octave_1d, octave_2d, Octave};
use crate::params::NoiseParams;
use crate::random::{LegacyRandom, RandomSource};

/// Composes octave layers into a single field
#[derive(Debug, Clone, Default)]
pub struct Fractal {
    params: NoiseParams,
}

impl Fractal {
    /// Composer for validated `params`
    pub fn new(params: NoiseParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &NoiseParams {
        &self.params
    }

    /// Sum `params.octaves` 1-D layers of `length` samples.
    ///
    /// `source` is advanced through every octave in order; pass a freshly
    /// seeded source for reproducible output.
    pub fn generate<S>(&self, length: i32, max_amplitude: i32, source: &mut S) -> Vec<f64>
    where
        S: RandomSource + ?Sized,
    {
        let length = i64::from(length);
        let mut wave = vec![0.0; length.max(0) as usize];

        for octave in Octave::sequence(self.params.octaves, f64::from(max_amplitude)) {
            debug!(
                "1-D octave {}: frequency {}, amplitude {}",
                octave.index, octave.frequency, octave.amplitude
            );
            let layer = octave_1d(
                source,
                octave.frequency,
                octave.amplitude,
                length,
                &self.params.interpolation,
            );
            field::accumulate(&mut wave, &layer);
        }

        wave
    }

    /// Sum `params.octaves` 2-D layers of `height` rows by `width` columns
    pub fn generate_2d<S>(
        &self,
        width: i32,
        height: i32,
        max_amplitude: i32,
        source: &mut S,
    ) -> Grid
    where
        S: RandomSource + ?Sized,
    {
        let (width, height) = (i64::from(width), i64::from(height));
        let mut grid = Grid::zeros(width.max(0) as usize, height.max(0) as usize);

        for octave in Octave::sequence(self.params.octaves, f64::from(max_amplitude)) {
            debug!(
                "2-D octave {}: frequency {}, amplitude {}",
                octave.index, octave.frequency, octave.amplitude
            );
            let layer = octave_2d(
                source,
                octave.frequency,
                octave.amplitude,
                width,
                height,
                &self.params.bilinear,
            );
            grid.accumulate(&layer);
        }

        grid
    }

    /// 1-D field seeded with the configured generator
    pub fn generate_seeded(&self, length: i32, max_amplitude: i32, seed: i64) -> Vec<f64> {
        let mut source = self.params.rng.source(seed);
        self.generate(length, max_amplitude, &mut source)
    }

    /// 2-D field seeded with the configured generator
    pub fn generate_2d_seeded(&self, width: i32, height: i32, max_amplitude: i32, seed: i64) -> Grid {
        let mut source = self.params.rng.source(seed);
        self.generate_2d(width, height, max_amplitude, &mut source)
    }
}

/// 1-D fractal value noise with default parameters.
///
/// Returns `length` samples (empty for non-positive `length`).
pub fn generate(length: i32, max_amplitude: i32, seed: i64) -> Vec<f64> {
    Fractal::default().generate(length, max_amplitude, &mut LegacyRandom::new(seed))
}

/// 2-D fractal value noise with default parameters.
///
/// Returns a grid of `height` rows by `width` columns.
pub fn generate_2d(width: i32, height: i32, max_amplitude: i32, seed: i64) -> Grid {
    Fractal::default().generate_2d(width, height, max_amplitude, &mut LegacyRandom::new(seed))
}

/// Sum of octave amplitudes, `max_amplitude * (1 - 2^-octaves)`.
///
/// Node values of each octave lie within half its amplitude, so no sample of
/// a fractal field exceeds this in magnitude.
pub fn amplitude_envelope(max_amplitude: f64, octaves: u32) -> f64 {
    max_amplitude * (1.0 - 0.5f64.powf(f64::from(octaves)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpolate::{Bilinear, Interpolation1D};
    use crate::random::{node_value, RngKind};

    const EPS: f64 = 1e-9;

    #[test]
    fn test_generate_is_deterministic() {
        let a = generate(8, 200, 42);
        let b = generate(8, 200, 42);
        assert_eq!(a.len(), 8);
        let bits = |w: &[f64]| w.iter().map(|v| v.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&a), bits(&b));

        let a = generate_2d(4, 4, 255, 7);
        let b = generate_2d(4, 4, 255, 7);
        assert_eq!((a.width(), a.height()), (4, 4));
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_matches_legacy_output() {
        let expected = [
            -11.41041859837274,
            -24.469454480554326,
            -33.50358579038907,
            -34.009499730474815,
            -39.48084889285842,
            -35.389688018729906,
            -8.391199783659049,
            28.8795190070171,
        ];
        let wave = generate(8, 200, 42);
        for (got, want) in wave.iter().zip(expected) {
            assert!((got - want).abs() < EPS, "{} vs {}", got, want);
        }
    }

    #[test]
    fn test_generate_2d_matches_legacy_output() {
        let expected = [
            [-41.301977910676186, 3.2594156687961813, -29.414338946200782, -28.03531750293642],
            [-39.28248968795588, 15.80434397294705, -13.203957469267404, -6.111121921226461],
            [-32.56067040077824, -4.789639320442133, -22.20035632975178, 43.29662260254211],
            [11.08449890314165, -10.649716324970452, -39.492918072416536, 31.82488134494764],
        ];
        let grid = generate_2d(4, 4, 255, 7);
        for (row, want_row) in grid.rows().zip(expected) {
            for (got, want) in row.iter().zip(want_row) {
                assert!((got - want).abs() < EPS, "{} vs {}", got, want);
            }
        }

        let expected_row = [
            19.020322724175116,
            18.076279585476502,
            -1.6239631102533965,
            -3.9610035594617,
            1.9301248772337576,
            -11.038374349784068,
        ];
        let grid = generate_2d(6, 5, 100, 3);
        for (col, want) in expected_row.iter().enumerate() {
            assert!((grid[(2, col)] - want).abs() < EPS);
        }
    }

    #[test]
    fn test_2d_origin_sums_first_node_of_each_octave() {
        let (width, height, max_amplitude) = (4i64, 4i64, 255.0);
        let mut rng = LegacyRandom::new(7);
        let mut expected = 0.0;
        for octave in Octave::sequence(7, max_amplitude) {
            let step_x = (width / octave.frequency).max(1);
            let step_y = (height / octave.frequency).max(1);
            let nodes = ((height / step_y + 2) * (width / step_x + 2)) as usize;
            expected += node_value(&mut rng, octave.amplitude);
            for _ in 1..nodes {
                rng.next_f64();
            }
        }
        let grid = generate_2d(4, 4, 255, 7);
        assert_eq!(grid[(0, 0)], expected);
    }

    #[test]
    fn test_1d_origin_is_first_node() {
        let fractal = Fractal::new(NoiseParams::default().with_octaves(1)).unwrap();
        let wave = fractal.generate(32, 100, &mut LegacyRandom::new(9));
        let first = node_value(&mut LegacyRandom::new(9), 50.0);
        assert_eq!(wave[0], first);
    }

    #[test]
    fn test_zero_and_negative_sizes() {
        assert!(generate(0, 100, 1).is_empty());
        assert!(generate(-5, 100, 1).is_empty());
        assert!(generate_2d(0, 10, 100, 1).is_empty());
        assert!(generate_2d(10, -3, 100, 1).is_empty());
    }

    #[test]
    fn test_amplitude_envelope_bounds_output() {
        let max_amplitude = 255;
        let bound = amplitude_envelope(f64::from(max_amplitude), 7);
        assert!((bound - 255.0 * 127.0 / 128.0).abs() < EPS);

        for seed in 0..50 {
            let wave = generate(300, max_amplitude, seed);
            assert!(wave.iter().all(|v| v.abs() <= bound + EPS), "seed {}", seed);

            let grid = generate_2d(40, 30, max_amplitude, seed);
            assert!(grid.values().iter().all(|v| v.abs() <= bound + EPS), "seed {}", seed);
        }
    }

    #[test]
    fn test_amplitude_envelope_large_octave_counts() {
        assert_eq!(amplitude_envelope(1.0, 0), 0.0);
        for octaves in [63, 64, 200, u32::MAX] {
            let bound = amplitude_envelope(1.0, octaves);
            assert!(bound.is_finite());
            assert!((bound - 1.0).abs() < EPS, "{} octaves: {}", octaves, bound);
        }
        let summed: f64 = Octave::sequence(12, 300.0).map(|o| o.amplitude).sum();
        assert!((amplitude_envelope(300.0, 12) - summed).abs() < EPS);
    }

    #[test]
    fn test_generate_tail_is_continuous() {
        // 810 = 8 * 101 + 2: the frequency-8 layer needs a node past the end
        let wave = generate(810, 200, 1);
        let largest_jump = wave
            .windows(2)
            .map(|pair| (pair[1] - pair[0]).abs())
            .fold(0.0, f64::max);
        assert!(largest_jump < 4.0, "jump of {}", largest_jump);
        assert!((wave[809] - wave[808]).abs() < 1.0);
    }

    #[test]
    fn test_octave_count_zero_is_flat() {
        let fractal = Fractal::new(NoiseParams::default().with_octaves(0)).unwrap();
        assert_eq!(fractal.generate_seeded(5, 100, 1), vec![0.0; 5]);
        assert!(fractal.generate_2d_seeded(3, 3, 100, 1).values().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_invalid_params_rejected() {
        assert!(Fractal::new(NoiseParams::default().with_octaves(64)).is_err());
    }

    #[test]
    fn test_strategy_and_rng_selection() {
        let base = Fractal::default().generate_seeded(64, 100, 5);
        let linear = Fractal::new(NoiseParams::default().with_interpolation(Interpolation1D::Linear))
            .unwrap()
            .generate_seeded(64, 100, 5);
        assert_eq!(base.len(), linear.len());
        assert_ne!(base, linear);
        // Nodes are shared: same draws, different fill
        assert_eq!(base[0], linear[0]);

        let area = Fractal::default().generate_2d_seeded(33, 17, 100, 5);
        let parametric = Fractal::new(NoiseParams::default().with_bilinear(Bilinear::Parametric))
            .unwrap()
            .generate_2d_seeded(33, 17, 100, 5);
        for (a, p) in area.values().iter().zip(parametric.values()) {
            assert!((a - p).abs() < 1e-6);
        }

        let fractal = Fractal::new(NoiseParams::default().with_rng(RngKind::Std)).unwrap();
        let a = fractal.generate_seeded(64, 100, 5);
        assert_eq!(a, fractal.generate_seeded(64, 100, 5));
        assert_ne!(a, base);
    }

    #[test]
    fn test_default_seeded_matches_free_function() {
        assert_eq!(Fractal::default().generate_seeded(50, 80, 3), generate(50, 80, 3));
        assert_eq!(Fractal::default().generate_2d_seeded(9, 7, 80, 3), generate_2d(9, 7, 80, 3));
    }
}
