//! Error types for fractal construction, computation and display

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FractalError {
    #[error("Invalid region: right ({right}) must be greater than left ({left})")]
    InvalidRegion { left: f64, right: f64 },

    #[error("Invalid selection: {0} (expected 1: Julia or 2: Mandelbrot)")]
    InvalidSelection(String),

    #[error("No fractal defined: call create() before display")]
    NoFieldComputed,

    #[error("Invalid iteration bound: {0}")]
    InvalidIterations(String),

    #[error("Invalid complex parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown colormap: {0}")]
    InvalidColormap(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to read config file '{0}': {1}")]
    ConfigRead(String, String),

    #[error("Failed to parse config file '{0}': {1}")]
    ConfigParse(String, String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FractalError>;
