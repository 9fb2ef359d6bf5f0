//! Magnitude field produced by the escape-time engine.

/// Square, row-major array of non-negative magnitudes.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    resolution: usize,
    values: Vec<f64>,
}

impl Field {
    pub(crate) fn from_values(resolution: usize, values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len(), resolution * resolution);
        Self { resolution, values }
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.resolution + col]
    }

    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.resolution;
        &self.values[start..start + self.resolution]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks_exact(self.resolution)
    }

    /// All magnitudes, row-major.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Smallest and largest magnitude in the field.
    pub fn bounds(&self) -> (f64, f64) {
        self.values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }
}
