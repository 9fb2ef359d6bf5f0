//! Escape-time Julia and Mandelbrot set explorer
//!
//! Provides:
//! - Coordinate grids over square regions of the complex plane
//! - An escape-time engine producing magnitude fields, computed in row bands
//! - Colormap rendering and PNG output
//! - Interactive prompts for the zoom loop
//!
//! ## Example
//!
//! ```no_run
//! use fractal::{Colormap, EngineSettings, Fractal, FractalSpec, Region, Variant};
//!
//! fn main() -> fractal::Result<()> {
//!     let region = Region::new(1.5, -2.0, 1.0)?;
//!     let spec = FractalSpec::new(region, 50, Variant::Mandelbrot)?;
//!     let mut fractal = Fractal::new(spec, EngineSettings::default())?;
//!     fractal.create();
//!     fractal.display(true, Colormap::Twilight, 1.0)?.save("mandelbrot.png")?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod field;
pub mod fractal;
pub mod grid;
pub mod prompt;
pub mod render;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use config::{Config, EngineSettings, RESOLUTION, SCALE, THRESHOLD};
pub use engine::{compute_field, Variant};
pub use error::{FractalError, Result};
pub use field::Field;
pub use fractal::{Fractal, FractalSpec};
pub use grid::{Grid, Region};
pub use prompt::{Prompter, Selection};
pub use render::{Colormap, DisplayRequest};

/// Initialize tracing/logging with the given filter level
pub fn init_tracing(filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
