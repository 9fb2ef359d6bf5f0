//! Escape-time iteration engine.
//!
//! Both fractals iterate `z ← z² + c`; they differ only in where `z₀` and `c`
//! come from. The field is computed in horizontal bands of rows, one band per
//! worker, each worker writing its own disjoint slice of the output.

use std::time::Instant;

use num::Complex;

use crate::config::EngineSettings;
use crate::field::Field;
use crate::grid::Grid;

/// Which iterated map to run, and where its parameter comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Variant {
    /// `z₀` is the grid sample; `c` is fixed for the whole image.
    Julia { c: Complex<f64> },
    /// `z₀` is zero; `c` is the grid sample.
    Mandelbrot,
}

impl Variant {
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Julia { .. } => "Julia",
            Variant::Mandelbrot => "Mandelbrot",
        }
    }

    /// Initial value and map parameter for the cell sampled at `point`.
    fn seed(&self, point: Complex<f64>) -> (Complex<f64>, Complex<f64>) {
        match *self {
            Variant::Julia { c } => (point, c),
            Variant::Mandelbrot => (Complex::new(0.0, 0.0), point),
        }
    }
}

/// Iterate `z ← z² + c` from `z0` at most `limit` times, stopping as soon as
/// `|z|` exceeds `threshold`, and return the final `|z|`.
pub fn escape_magnitude(z0: Complex<f64>, c: Complex<f64>, limit: u32, threshold: f64) -> f64 {
    let mut z = z0;
    for _ in 0..limit {
        z = z * z + c;
        if z.norm() > threshold {
            break;
        }
    }
    z.norm()
}

/// Magnitude recorded for a single grid sample.
pub fn cell_magnitude(variant: &Variant, point: Complex<f64>, limit: u32, threshold: f64) -> f64 {
    let (z0, c) = variant.seed(point);
    escape_magnitude(z0, c, limit, threshold)
}

/// Compute the field for a band of rows. `band` holds whole rows starting at
/// grid row `first_row`.
fn render_band(
    band: &mut [f64],
    first_row: usize,
    grid: &Grid,
    variant: &Variant,
    limit: u32,
    threshold: f64,
) {
    let resolution = grid.resolution();
    for (offset, out_row) in band.chunks_mut(resolution).enumerate() {
        let row = first_row + offset;
        if row % 100 == 0 {
            tracing::debug!(row, "computing row");
        }
        for (out, &point) in out_row.iter_mut().zip(grid.row(row)) {
            *out = cell_magnitude(variant, point, limit, threshold);
        }
    }
}

/// Run escape-time iteration over every cell of `grid`.
pub fn compute_field(grid: &Grid, variant: &Variant, limit: u32, settings: &EngineSettings) -> Field {
    let resolution = grid.resolution();
    let threshold = settings.threshold;
    let threads = settings.worker_count().min(resolution);
    let started = Instant::now();

    tracing::info!(
        fractal = variant.name(),
        resolution,
        iterations = limit,
        threads,
        "Creating fractal"
    );

    let mut values = vec![0.0; resolution * resolution];

    if threads <= 1 {
        render_band(&mut values, 0, grid, variant, limit, threshold);
    } else {
        let rows_per_band = resolution / threads + 1;
        let bands: Vec<&mut [f64]> = values.chunks_mut(rows_per_band * resolution).collect();
        let outcome = crossbeam::scope(|spawner| {
            for (i, band) in bands.into_iter().enumerate() {
                let first_row = rows_per_band * i;
                spawner.spawn(move |_| {
                    render_band(band, first_row, grid, variant, limit, threshold);
                });
            }
        });
        if let Err(panic) = outcome {
            std::panic::resume_unwind(panic);
        }
    }

    let field = Field::from_values(resolution, values);
    let (min, max) = field.bounds();
    tracing::info!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        min,
        max,
        "Fractal created"
    );
    field
}
