//! Sampling grid over a square region of the complex plane.

use num::Complex;

use crate::error::{FractalError, Result};

/// Rectangular region of the complex plane, given by its top edge and its
/// left/right bounds. The sampled area is square: the bottom edge sits
/// `right - left` below `top`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    top: f64,
    left: f64,
    right: f64,
}

impl Region {
    /// Fails with `InvalidRegion` unless `right > left`.
    pub fn new(top: f64, left: f64, right: f64) -> Result<Self> {
        if !(top.is_finite() && left.is_finite() && right.is_finite()) || right <= left {
            return Err(FractalError::InvalidRegion { left, right });
        }
        Ok(Self { top, left, right })
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn bottom(&self) -> f64 {
        self.top - self.width()
    }

    /// Distance between neighbouring samples for a grid of `resolution` pixels.
    pub fn interval(&self, resolution: usize) -> f64 {
        (self.right - self.left).abs() / (resolution - 1) as f64
    }
}

/// Given the row and column of a pixel, return the corresponding point in
/// the region's complex plane.
pub fn pixel_to_point(region: &Region, resolution: usize, row: usize, col: usize) -> Complex<f64> {
    let interval = region.interval(resolution);
    Complex {
        re: region.left + interval * col as f64,
        im: region.top - interval * row as f64,
    }
}

/// Immutable square grid of complex samples, stored row-major.
#[derive(Debug, Clone)]
pub struct Grid {
    resolution: usize,
    samples: Vec<Complex<f64>>,
}

impl Grid {
    /// Build a `resolution × resolution` grid over `region`.
    ///
    /// The region has already been validated by `Region::new`; `resolution`
    /// must be at least 2.
    pub fn new(region: &Region, resolution: usize) -> Self {
        assert!(resolution >= 2, "grid resolution must be at least 2");
        let samples = rows(*region, resolution).flatten().collect();
        Self {
            resolution,
            samples,
        }
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn get(&self, row: usize, col: usize) -> Complex<f64> {
        self.samples[row * self.resolution + col]
    }

    pub fn row(&self, row: usize) -> &[Complex<f64>] {
        let start = row * self.resolution;
        &self.samples[start..start + self.resolution]
    }

    /// All samples, row-major.
    pub fn samples(&self) -> &[Complex<f64>] {
        &self.samples
    }
}

/// Lazily yield the grid row by row, top to bottom.
pub fn rows(region: Region, resolution: usize) -> impl Iterator<Item = Vec<Complex<f64>>> {
    (0..resolution).map(move |row| {
        (0..resolution)
            .map(|col| pixel_to_point(&region, resolution, row, col))
            .collect()
    })
}
