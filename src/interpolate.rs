//! Interpolation strategies used to fill between lattice nodes.
//!
//! 1-D strategies map two known samples `(x1, y1)`, `(x2, y2)` and a query
//! position `x` to a value. 2-D strategies map the four corner values of a
//! rectangular cell and a query point to a value.
//!
//! None of these guard against degenerate input: `x1 == x2` (or a cell with
//! zero width or height) divides by zero and yields a non-finite result.
//! Queries outside the known range extrapolate with the same formula.

use clap::ValueEnum;

/// Interpolation between two known samples
pub trait Interpolate1D {
    fn interpolate(&self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64;
}

/// Straight line between the two samples
#[derive(Debug, Clone, Copy, Default)]
pub struct Linear;

impl Interpolate1D for Linear {
    fn interpolate(&self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
        ((x - x1) * (y2 - y1) / (x2 - x1)) + y1
    }
}

/// Quintic smoothstep, `6t^5 - 15t^4 + 10t^3`
///
/// First and second derivatives vanish at `t = 0` and `t = 1`.
pub fn fade_curve(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Smoothstep easing between the two samples
#[derive(Debug, Clone, Copy, Default)]
pub struct Fade;

impl Interpolate1D for Fade {
    fn interpolate(&self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
        let t = (x - x1) / (x2 - x1);
        y1 + fade_curve(t) * (y2 - y1)
    }
}

/// Selectable 1-D strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Interpolation1D {
    Linear,
    #[default]
    Fade,
}

impl Interpolate1D for Interpolation1D {
    fn interpolate(&self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
        match self {
            Interpolation1D::Linear => Linear.interpolate(x1, y1, x2, y2, x),
            Interpolation1D::Fade => Fade.interpolate(x1, y1, x2, y2, x),
        }
    }
}

/// Rectangular cell spanning `(x1, y1)` (top-left) to `(x2, y2)` (bottom-right)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Cell {
    /// Cell anchored at the origin with the given extent
    pub fn local(width: f64, height: f64) -> Self {
        Self {
            x1: 0.0,
            y1: 0.0,
            x2: width,
            y2: height,
        }
    }

    pub fn area(&self) -> f64 {
        (self.x2 - self.x1) * (self.y2 - self.y1)
    }
}

/// Values at the four corners of a cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corners {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_left: f64,
    pub bottom_right: f64,
}

/// Interpolation inside a rectangular cell
pub trait Interpolate2D {
    fn interpolate(&self, cell: &Cell, corners: &Corners, tx: f64, ty: f64) -> f64;
}

/// Bilinear interpolation by opposite-corner area weighting
///
/// Each corner is weighted by the area of the rectangle between the query
/// point and the diagonally opposite corner, normalized by the cell area.
#[derive(Debug, Clone, Copy, Default)]
pub struct AreaWeighted;

impl Interpolate2D for AreaWeighted {
    fn interpolate(&self, cell: &Cell, corners: &Corners, tx: f64, ty: f64) -> f64 {
        let w_bottom_right = ((tx - cell.x1) * (ty - cell.y1)).abs() * corners.bottom_right;
        let w_bottom_left = ((tx - cell.x2) * (ty - cell.y1)).abs() * corners.bottom_left;
        let w_top_right = ((tx - cell.x1) * (ty - cell.y2)).abs() * corners.top_right;
        let w_top_left = ((tx - cell.x2) * (ty - cell.y2)).abs() * corners.top_left;

        (w_bottom_right + w_bottom_left + w_top_right + w_top_left) / cell.area()
    }
}

/// Bilinear interpolation along both edges, then vertically
#[derive(Debug, Clone, Copy, Default)]
pub struct Parametric;

impl Interpolate2D for Parametric {
    fn interpolate(&self, cell: &Cell, corners: &Corners, tx: f64, ty: f64) -> f64 {
        let dx = (tx - cell.x1) / (cell.x2 - cell.x1);
        let dy = (ty - cell.y1) / (cell.y2 - cell.y1);

        let top = corners.top_left * (1.0 - dx) + corners.top_right * dx;
        let bottom = corners.bottom_left * (1.0 - dx) + corners.bottom_right * dx;

        top * (1.0 - dy) + bottom * dy
    }
}

/// Selectable 2-D strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Bilinear {
    #[default]
    #[value(name = "area")]
    AreaWeighted,
    Parametric,
}

impl Interpolate2D for Bilinear {
    fn interpolate(&self, cell: &Cell, corners: &Corners, tx: f64, ty: f64) -> f64 {
        match self {
            Bilinear::AreaWeighted => AreaWeighted.interpolate(cell, corners, tx, ty),
            Bilinear::Parametric => Parametric.interpolate(cell, corners, tx, ty),
        }
    }
}
