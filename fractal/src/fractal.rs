//! A fractal instance: its parameters, its sampling grid and its latest field.

use crate::config::EngineSettings;
use crate::engine::{self, Variant};
use crate::error::{FractalError, Result};
use crate::field::Field;
use crate::grid::{Grid, Region};
use crate::render::{Colormap, DisplayRequest};

/// What to compute: region, iteration bound and iterated map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractalSpec {
    region: Region,
    iterations: u32,
    kind: Variant,
}

impl FractalSpec {
    /// Fails with `InvalidIterations` when `iterations` is zero.
    pub fn new(region: Region, iterations: u32, kind: Variant) -> Result<Self> {
        if iterations == 0 {
            return Err(FractalError::InvalidIterations(
                "iteration bound must be a positive integer".to_string(),
            ));
        }
        Ok(Self {
            region,
            iterations,
            kind,
        })
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn kind(&self) -> &Variant {
        &self.kind
    }
}

pub struct Fractal {
    spec: FractalSpec,
    settings: EngineSettings,
    grid: Grid,
    field: Option<Field>,
}

impl Fractal {
    /// Build the sampling grid for `spec`. No field exists until `create`.
    pub fn new(spec: FractalSpec, settings: EngineSettings) -> Result<Self> {
        settings.validate()?;
        let grid = Grid::new(spec.region(), settings.resolution);
        tracing::debug!(
            top = spec.region().top(),
            left = spec.region().left(),
            right = spec.region().right(),
            resolution = settings.resolution,
            "Built coordinate grid"
        );
        Ok(Self {
            spec,
            settings,
            grid,
            field: None,
        })
    }

    pub fn spec(&self) -> &FractalSpec {
        &self.spec
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Compute the magnitude field, replacing any previous one.
    pub fn create(&mut self) -> &Field {
        let field = engine::compute_field(
            &self.grid,
            self.spec.kind(),
            self.spec.iterations(),
            &self.settings,
        );
        self.field.insert(field)
    }

    /// The most recently computed field.
    pub fn field(&self) -> Result<&Field> {
        self.field.as_ref().ok_or(FractalError::NoFieldComputed)
    }

    /// Hand the field to the renderer.
    pub fn display(&self, continuous: bool, colormap: Colormap, scale: f64) -> Result<DisplayRequest<'_>> {
        Ok(DisplayRequest {
            field: self.field()?,
            continuous,
            colormap,
            scale,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_settings() -> EngineSettings {
        EngineSettings {
            resolution: 21,
            threads: 1,
            ..EngineSettings::default()
        }
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let region = Region::new(1.0, -1.0, 1.0).unwrap();
        let err = FractalSpec::new(region, 0, Variant::Mandelbrot).unwrap_err();
        assert!(matches!(err, FractalError::InvalidIterations(_)));
    }

    #[test]
    fn test_display_before_create_fails() {
        let region = Region::new(1.0, -1.0, 1.0).unwrap();
        let spec = FractalSpec::new(region, 10, Variant::Mandelbrot).unwrap();
        let fractal = Fractal::new(spec, small_settings()).unwrap();
        assert!(matches!(fractal.field(), Err(FractalError::NoFieldComputed)));
        assert!(matches!(
            fractal.display(true, Colormap::Twilight, 1.0),
            Err(FractalError::NoFieldComputed)
        ));
    }

    #[test]
    fn test_create_replaces_field() {
        let region = Region::new(1.0, -1.0, 1.0).unwrap();
        let spec = FractalSpec::new(region, 10, Variant::Mandelbrot).unwrap();
        let mut fractal = Fractal::new(spec, small_settings()).unwrap();
        let first = fractal.create().clone();
        let second = fractal.create().clone();
        assert_eq!(first, second);
        assert_eq!(fractal.field().unwrap().resolution(), 21);
        let request = fractal.display(false, Colormap::Gray, 1.0).unwrap();
        assert!(!request.continuous);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let region = Region::new(1.0, -1.0, 1.0).unwrap();
        let spec = FractalSpec::new(region, 10, Variant::Mandelbrot).unwrap();
        let settings = EngineSettings {
            resolution: 1,
            ..EngineSettings::default()
        };
        assert!(matches!(
            Fractal::new(spec, settings),
            Err(FractalError::InvalidConfig(_))
        ));
    }
}
