//! Configuration for the fractal explorer
//!
//! Supports loading configuration from a TOML file. The process-wide
//! constants (`RESOLUTION`, `THRESHOLD`, `SCALE`) are the defaults; a loaded
//! configuration is fixed at startup and passed explicitly from there on.

use serde::Deserialize;
use std::path::Path;

use crate::error::{FractalError, Result};

/// Side length of the sampled grid, in pixels.
pub const RESOLUTION: usize = 1001;

/// Escape radius: iteration stops once `|z|` exceeds this.
pub const THRESHOLD: f64 = 2.0;

/// Multiplier applied to magnitudes before colour mapping.
pub const SCALE: f64 = 1.0;

/// Top-level configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    /// Escape-time engine settings
    #[serde(default)]
    pub engine: EngineSettings,

    /// Renderer settings
    #[serde(default)]
    pub render: RenderConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Engine configuration
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct EngineSettings {
    /// Grid side length (default: 1001)
    #[serde(default = "default_resolution")]
    pub resolution: usize,

    /// Escape radius (default: 2.0)
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Worker threads; 0 means one per logical CPU (default: 0)
    #[serde(default)]
    pub threads: usize,
}

/// Renderer configuration
#[derive(Debug, Deserialize, Clone)]
pub struct RenderConfig {
    /// Magnitude multiplier (default: 1.0)
    #[serde(default = "default_scale")]
    pub scale: f64,

    /// Reduce magnitudes mod 1 before colouring (default: true)
    #[serde(default = "default_continuous")]
    pub continuous: bool,

    /// Colormap name (default: twilight)
    #[serde(default = "default_colormap")]
    pub colormap: String,

    /// PNG output path (default: fractal.png)
    #[serde(default = "default_output")]
    pub output: String,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Log level filter (default: "fractal=info")
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_resolution() -> usize {
    RESOLUTION
}

fn default_threshold() -> f64 {
    THRESHOLD
}

fn default_scale() -> f64 {
    SCALE
}

fn default_continuous() -> bool {
    true
}

fn default_colormap() -> String {
    "twilight".to_string()
}

fn default_output() -> String {
    "fractal.png".to_string()
}

fn default_log_level() -> String {
    "fractal=info".to_string()
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            resolution: default_resolution(),
            threshold: default_threshold(),
            threads: 0,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            scale: default_scale(),
            continuous: default_continuous(),
            colormap: default_colormap(),
            output: default_output(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl EngineSettings {
    /// Number of worker threads to actually use.
    pub fn worker_count(&self) -> usize {
        if self.threads == 0 {
            num_cpus::get().max(1)
        } else {
            self.threads
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.resolution < 2 {
            return Err(FractalError::InvalidConfig(format!(
                "resolution must be at least 2, got {}",
                self.resolution
            )));
        }
        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            return Err(FractalError::InvalidConfig(format!(
                "threshold must be a positive finite number, got {}",
                self.threshold
            )));
        }
        Ok(())
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::info!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| FractalError::ConfigRead(path.display().to_string(), e.to_string()))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| FractalError::ConfigParse(path.display().to_string(), e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.engine.validate()?;
        if !self.render.scale.is_finite() {
            return Err(FractalError::InvalidConfig(format!(
                "scale must be finite, got {}",
                self.render.scale
            )));
        }
        Ok(())
    }
}
