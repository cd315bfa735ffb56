//! Dense 2-D output field.

use std::ops::{Index, IndexMut};

/// Row-major grid of samples, `height` rows by `width` columns
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    values: Vec<f64>,
}

impl Grid {
    /// Zero-filled grid
    pub fn zeros(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            values: vec![0.0; width * height],
        }
    }

    /// Build a grid by evaluating `f(row, col)` in row-major order
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut values = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                values.push(f(row, col));
            }
        }
        Self {
            width,
            height,
            values,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.height && col < self.width {
            Some(self.values[row * self.width + col])
        } else {
            None
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks() panics on zero; a zero-width grid has no values anyway
        self.values.chunks(self.width.max(1))
    }

    /// Nested copy, one `Vec` per row
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }

    /// Add `other` element-wise into this grid.
    ///
    /// Both grids must share the same dimensions.
    pub fn accumulate(&mut self, other: &Grid) {
        debug_assert_eq!((self.width, self.height), (other.width, other.height));
        for (acc, v) in self.values.iter_mut().zip(&other.values) {
            *acc += v;
        }
    }

    /// Smallest and largest sample, `None` for an empty grid
    pub fn min_max(&self) -> Option<(f64, f64)> {
        min_max(&self.values)
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(col < self.width, "column {} out of bounds", col);
        &self.values[row * self.width + col]
    }
}

impl IndexMut<(usize, usize)> for Grid {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        assert!(col < self.width, "column {} out of bounds", col);
        &mut self.values[row * self.width + col]
    }
}

/// Add `other` element-wise into `acc`
pub fn accumulate(acc: &mut [f64], other: &[f64]) {
    for (a, v) in acc.iter_mut().zip(other) {
        *a += v;
    }
}

/// Smallest and largest value of a slice, `None` when empty
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    values.iter().fold(None, |acc, &v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_layout_is_row_major() {
        let grid = Grid::from_fn(3, 2, |row, col| (row * 10 + col) as f64);
        assert_eq!(grid.values(), &[0.0, 1.0, 2.0, 10.0, 11.0, 12.0]);
        assert_eq!(grid[(1, 2)], 12.0);
        assert_eq!(grid.get(1, 0), Some(10.0));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 3), None);
        assert_eq!(grid.to_rows(), vec![vec![0.0, 1.0, 2.0], vec![10.0, 11.0, 12.0]]);
    }

    #[test]
    fn test_accumulate_adds() {
        let mut acc = Grid::zeros(2, 2);
        let layer = Grid::from_fn(2, 2, |row, col| (row + col) as f64);
        acc.accumulate(&layer);
        acc.accumulate(&layer);
        assert_eq!(acc.values(), &[0.0, 2.0, 2.0, 4.0]);

        let mut wave = vec![1.0, 2.0];
        accumulate(&mut wave, &[0.5, -2.0]);
        assert_eq!(wave, vec![1.5, 0.0]);
    }

    #[test]
    fn test_empty_grid() {
        let grid = Grid::zeros(0, 5);
        assert!(grid.is_empty());
        assert_eq!(grid.rows().count(), 0);
        assert_eq!(grid.min_max(), None);
    }

    #[test]
    fn test_min_max() {
        assert_eq!(min_max(&[3.0, -1.0, 7.5, 0.0]), Some((-1.0, 7.5)));
        assert_eq!(min_max(&[]), None);
    }
}
