//! Valuenoise - render fractal value noise to a PNG heightmap or terrain
//! profile.

use std::time::Instant;

use clap::Parser;
use log::{info, warn};

use valuenoise::cli::{Args, Mode};
use valuenoise::fractal::{amplitude_envelope, Fractal};
use valuenoise::octave::check_resolution_2d;
use valuenoise::render::{render_heightmap, render_profile};
use valuenoise::field;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let fractal = Fractal::new(args.params()?)?;
    let amplitude = args.amplitude();
    let palette = args.palette();

    info!(
        "Generating {:?} noise: {}x{}, seed {}, amplitude {}, {} octaves",
        args.mode, args.width, args.height, args.seed, amplitude, fractal.params().octaves
    );

    let start = Instant::now();

    let img = match args.mode {
        Mode::Noise1D => {
            let surface = fractal.generate_seeded(args.width, amplitude, args.seed);
            let detail =
                fractal.generate_seeded(args.width, args.detail_amplitude(), args.seed);
            if let Some((lo, hi)) = field::min_max(&surface) {
                info!("  Range: {:.2} .. {:.2}", lo, hi);
            }
            let height = u32::try_from(args.height).unwrap_or(0);
            render_profile(&surface, &detail, amplitude, height, palette)?
        }
        Mode::Noise2D => {
            if let Err(e) = check_resolution_2d(
                i64::from(args.width),
                i64::from(args.height),
                fractal.params().octaves,
            ) {
                warn!("{}; high octaves degrade to one node per sample", e);
            }
            let grid = fractal.generate_2d_seeded(args.width, args.height, amplitude, args.seed);
            if let Some((lo, hi)) = grid.min_max() {
                info!(
                    "  Range: {:.2} .. {:.2} (envelope ±{:.2})",
                    lo,
                    hi,
                    amplitude_envelope(f64::from(amplitude), fractal.params().octaves) / 2.0
                );
            }
            render_heightmap(&grid, amplitude, palette, args.scale)?
        }
    };

    img.save(&args.output)?;

    let elapsed = start.elapsed();
    info!("  Output: {}", args.output);
    info!("  Time: {:.2}ms", elapsed.as_secs_f64() * 1000.0);

    Ok(())
}
