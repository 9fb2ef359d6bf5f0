//! Integration tests for grid generation and escape-time fields

use fractal::{
    Colormap, EngineSettings, Fractal, FractalError, FractalSpec, Grid, Region, Variant,
    RESOLUTION, THRESHOLD,
};
use num::Complex;

fn mandelbrot(top: f64, left: f64, right: f64, iterations: u32) -> Fractal {
    let region = Region::new(top, left, right).unwrap();
    let spec = FractalSpec::new(region, iterations, Variant::Mandelbrot).unwrap();
    Fractal::new(spec, EngineSettings::default()).unwrap()
}

fn julia(top: f64, left: f64, right: f64, iterations: u32, c: Complex<f64>) -> Fractal {
    let region = Region::new(top, left, right).unwrap();
    let spec = FractalSpec::new(region, iterations, Variant::Julia { c }).unwrap();
    Fractal::new(spec, EngineSettings::default()).unwrap()
}

#[test]
fn grid_has_resolution_rows_and_exact_corners() {
    let (top, left, right) = (0.75, -1.6, 0.4);
    let region = Region::new(top, left, right).unwrap();
    let grid = Grid::new(&region, RESOLUTION);

    assert_eq!(grid.samples().len(), RESOLUTION * RESOLUTION);
    assert_eq!(grid.row(RESOLUTION - 1).len(), RESOLUTION);
    assert_eq!(grid.get(0, 0), Complex::new(left, top));

    let width = right - left;
    let last = grid.get(RESOLUTION - 1, RESOLUTION - 1);
    assert!((last.re - right).abs() < 1e-12);
    assert!((last.im - (top - width)).abs() < 1e-12);
}

#[test]
fn invalid_region_fails_before_grid() {
    let err = Region::new(0.0, 1.0, 0.0).unwrap_err();
    assert!(matches!(err, FractalError::InvalidRegion { .. }));
}

#[test]
fn mandelbrot_center_stays_bounded() {
    let mut fractal = mandelbrot(1.0, -1.0, 1.0, 50);
    let center = RESOLUTION / 2;
    assert_eq!(fractal.grid().get(center, center), Complex::new(0.0, 0.0));

    let field = fractal.create();
    assert_eq!(field.resolution(), RESOLUTION);
    assert!(field.get(center, center) <= THRESHOLD);
    assert_eq!(field.get(center, center), 0.0);
}

#[test]
fn magnitudes_are_non_negative_and_stop_one_step_past_threshold() {
    let mut fractal = mandelbrot(1.0, -1.0, 1.0, 30);
    let field = fractal.create();
    // |c| <= sqrt(2) in this region, so one map application from |z| <= 2
    // lands at most at 4 + sqrt(2).
    let ceiling = THRESHOLD * THRESHOLD + 2f64.sqrt() + 1e-9;
    for &value in field.values() {
        assert!(value >= 0.0);
        assert!(value <= ceiling, "magnitude {} kept iterating past the threshold", value);
    }
}

#[test]
fn single_iteration_mandelbrot_records_sample_modulus() {
    let mut fractal = mandelbrot(1.25, -2.0, 0.5, 1);
    let grid = fractal.grid().clone();
    let field = fractal.create();
    for (value, sample) in field.values().iter().zip(grid.samples()) {
        assert_eq!(*value, sample.norm());
    }
}

#[test]
fn single_iteration_julia_records_one_map_application() {
    let c = Complex::new(-0.8, 0.156);
    let mut fractal = julia(1.5, -1.5, 1.5, 1, c);
    let grid = fractal.grid().clone();
    let field = fractal.create();
    for (value, z) in field.values().iter().zip(grid.samples()) {
        assert_eq!(*value, (z * z + c).norm());
    }
}

#[test]
fn julia_oscillation_consumes_whole_budget() {
    let c = Complex::new(-1.0, 0.0);
    let center = RESOLUTION / 2;

    let mut even = julia(1.0, -1.0, 1.0, 50, c);
    assert_eq!(even.create().get(center, center), 0.0);

    let mut odd = julia(1.0, -1.0, 1.0, 49, c);
    assert_eq!(odd.create().get(center, center), 1.0);
}

#[test]
fn recomputation_is_bit_identical() {
    let mut fractal = julia(1.0, -1.0, 1.0, 40, Complex::new(0.285, 0.01));
    let first = fractal.create().clone();
    let second = fractal.create().clone();
    assert_eq!(first.values().len(), second.values().len());
    assert!(first
        .values()
        .iter()
        .zip(second.values())
        .all(|(a, b)| a.to_bits() == b.to_bits()));
}

#[test]
fn display_requires_a_field() {
    let fractal = mandelbrot(1.0, -1.0, 1.0, 10);
    assert!(matches!(
        fractal.display(true, Colormap::Twilight, 1.0),
        Err(FractalError::NoFieldComputed)
    ));
}

#[test]
fn rendered_image_matches_resolution() {
    let mut fractal = mandelbrot(1.5, -2.0, 1.0, 20);
    fractal.create();
    let image = fractal
        .display(true, Colormap::Twilight, 1.0)
        .unwrap()
        .render();
    assert_eq!(image.dimensions(), (RESOLUTION as u32, RESOLUTION as u32));
}

#[test]
fn rendered_png_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("julia.png");
    let region = Region::new(1.0, -1.0, 1.0).unwrap();
    let spec = FractalSpec::new(
        region,
        25,
        Variant::Julia {
            c: Complex::new(-0.4, 0.6),
        },
    )
    .unwrap();
    let settings = EngineSettings {
        resolution: 101,
        ..EngineSettings::default()
    };
    let mut fractal = Fractal::new(spec, settings).unwrap();
    fractal.create();
    fractal
        .display(false, Colormap::Magma, 1.0)
        .unwrap()
        .save(&path)
        .unwrap();
    assert!(path.exists());
}
