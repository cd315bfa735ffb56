//! Rendering of generated fields to images.
//!
//! 2-D fields become heightmaps coloured through a 256-entry palette; 1-D
//! fields become a filled terrain profile.

use clap::ValueEnum;
use image::{Rgb, RgbImage};
use noise::NoiseFn;

use crate::error::{NoiseError, Result};
use crate::field::Grid;
use crate::sampler::GridSampler;

/// Fill for pixels above a 1-D profile
pub const BACKGROUND: Rgb<u8> = Rgb([211, 211, 211]);

/// Colour ramp indexed by shade (0..=255)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Palette {
    /// Black to (almost) white
    #[default]
    Gray,
    /// Elevation bands: deep water, water, coast, land, hills, rock, snow
    Terrain,
}

impl Palette {
    /// Colour for every shade
    pub fn table(self) -> [Rgb<u8>; 256] {
        let mut table = [Rgb([0, 0, 0]); 256];
        for (i, entry) in table.iter_mut().enumerate() {
            *entry = match self {
                Palette::Gray => {
                    let gray = i as f64 / 256.0;
                    to_rgb(gray, gray, gray)
                }
                Palette::Terrain => terrain_color(i as f64 / 255.0),
            };
        }
        table
    }
}

fn to_rgb(r: f64, g: f64, b: f64) -> Rgb<u8> {
    let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0) as u8;
    Rgb([channel(r), channel(g), channel(b)])
}

/// Terrain colour for a normalized elevation in [0, 1]
fn terrain_color(value: f64) -> Rgb<u8> {
    const DEEP_WATER: f64 = 0.3;
    const WATER: f64 = 0.4;
    const COAST: f64 = 0.5;
    const LAND: f64 = 0.6;
    const HILLS: f64 = 0.7;
    const ROCK: f64 = 0.8;

    if value < DEEP_WATER {
        let f = value / DEEP_WATER;
        to_rgb(0.0, 0.0, 0.5 + 0.5 * f)
    } else if value < WATER {
        let f = (value - DEEP_WATER) / 0.1;
        to_rgb(0.0, 0.2 * f, 0.8 + 0.2 * (1.0 - f))
    } else if value < COAST {
        let f = (value - WATER) / 0.1;
        to_rgb(0.8 + 0.2 * f, 0.8 + 0.2 * f, 0.2 * (1.0 - f))
    } else if value < LAND {
        let f = (value - COAST) / 0.2;
        to_rgb(0.5 + 0.3 * f, 0.4 + 0.2 * f, 0.2 * (1.0 - f))
    } else if value < HILLS {
        let f = (value - LAND) / 0.2;
        to_rgb(0.2 + 0.2 * f, 0.8 + 0.2 * f, 0.1 * (1.0 - f))
    } else if value < ROCK {
        let f = (value - HILLS) / 0.2;
        to_rgb(0.4 + 0.4 * f, 0.4 + 0.4 * f, 0.4 + 0.4 * f)
    } else {
        let f = (value - ROCK) / 0.1;
        to_rgb(0.7 + 0.3 * f, 0.7 + 0.3 * f, 0.7 + 0.3 * f)
    }
}

/// Map a field value to a palette shade by offsetting half the amplitude
pub fn shade(value: f64, max_amplitude: i32) -> u8 {
    (value + f64::from(max_amplitude / 2)).clamp(0.0, 255.0) as u8
}

/// Pixel count along one image axis, if it fits the image dimension type
fn image_extent(samples: usize, scale: u32) -> Option<u32> {
    u32::try_from(samples).ok()?.checked_mul(scale)
}

/// Render a 2-D field as a heightmap.
///
/// With `scale > 1` each field sample spans `scale` pixels and the image is
/// resampled smoothly between samples.
pub fn render_heightmap(
    grid: &Grid,
    max_amplitude: i32,
    palette: Palette,
    scale: u32,
) -> Result<RgbImage> {
    if grid.is_empty() {
        return Err(NoiseError::EmptyField);
    }
    let scale = scale.max(1);
    let table = palette.table();
    let sampler = GridSampler::new(grid);

    let too_large = || NoiseError::ImageTooLarge {
        width: grid.width(),
        height: grid.height(),
        scale,
    };
    let width = image_extent(grid.width(), scale).ok_or_else(too_large)?;
    let height = image_extent(grid.height(), scale).ok_or_else(too_large)?;
    let img = RgbImage::from_fn(width, height, |x, y| {
        let value = if scale == 1 {
            grid[(y as usize, x as usize)]
        } else {
            sampler.get([
                f64::from(x) / f64::from(scale),
                f64::from(y) / f64::from(scale),
            ])
        };
        table[shade(value, max_amplitude) as usize]
    });

    Ok(img)
}

/// Render a 1-D field as a filled terrain profile `height` pixels tall.
///
/// Each column is filled from its surface (`surface + amplitude/2` pixels
/// above the bottom) downwards, darkening with depth. `detail` perturbs the
/// shading and is scaled down by 100; pass an empty slice to skip it.
pub fn render_profile(
    surface: &[f64],
    detail: &[f64],
    amplitude: i32,
    height: u32,
    palette: Palette,
) -> Result<RgbImage> {
    if surface.is_empty() || height == 0 {
        return Err(NoiseError::EmptyField);
    }
    let width = image_extent(surface.len(), 1).ok_or(NoiseError::ImageTooLarge {
        width: surface.len(),
        height: height as usize,
        scale: 1,
    })?;
    let table = palette.table();
    let mut img = RgbImage::from_pixel(width, height, BACKGROUND);
    let offset = i64::from(255i32.saturating_sub(amplitude) / 2);

    for (x, &value) in surface.iter().enumerate() {
        let column_height = (value + f64::from(amplitude / 2)) as i64;
        let top = i64::from(height) - column_height;
        let perturb = detail.get(x).map_or(0.0, |d| d / 100.0);

        for y in top.max(0)..i64::from(height) {
            let depth = y - top;
            let level = (column_height - depth + offset) as f64 + perturb;
            let index = level.clamp(0.0, 255.0) as usize;
            img.put_pixel(x as u32, y as u32, table[index]);
        }
    }

    Ok(img)
}
