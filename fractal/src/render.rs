//! Colour mapping and PNG output for computed fields.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use image::{ImageBuffer, Rgb, RgbImage};

use crate::error::{FractalError, Result};
use crate::field::Field;

/// Named colormap. Each maps `t ∈ [0, 1]` to a colour by interpolating
/// linearly between evenly spaced anchor stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Colormap {
    #[default]
    Twilight,
    Viridis,
    Magma,
    Inferno,
    Plasma,
    Gray,
    Hsv,
}

const TWILIGHT: &[[u8; 3]] = &[
    [226, 217, 226],
    [153, 178, 204],
    [94, 128, 187],
    [87, 70, 162],
    [47, 20, 55],
    [130, 43, 76],
    [179, 82, 67],
    [206, 152, 136],
    [226, 217, 226],
];

const VIRIDIS: &[[u8; 3]] = &[
    [68, 1, 84],
    [71, 44, 122],
    [59, 81, 139],
    [44, 113, 142],
    [33, 144, 141],
    [39, 173, 129],
    [92, 200, 99],
    [170, 220, 50],
    [253, 231, 37],
];

const MAGMA: &[[u8; 3]] = &[
    [0, 0, 4],
    [28, 16, 68],
    [79, 18, 123],
    [129, 37, 129],
    [181, 54, 122],
    [229, 80, 100],
    [251, 135, 97],
    [254, 194, 135],
    [252, 253, 191],
];

const INFERNO: &[[u8; 3]] = &[
    [0, 0, 4],
    [31, 12, 72],
    [85, 15, 109],
    [136, 34, 106],
    [186, 54, 85],
    [227, 89, 51],
    [249, 140, 10],
    [249, 201, 50],
    [252, 255, 164],
];

const PLASMA: &[[u8; 3]] = &[
    [13, 8, 135],
    [75, 3, 161],
    [125, 3, 168],
    [168, 34, 150],
    [203, 70, 121],
    [229, 107, 93],
    [248, 148, 65],
    [253, 195, 40],
    [240, 249, 33],
];

const GRAY: &[[u8; 3]] = &[[0, 0, 0], [255, 255, 255]];

const HSV: &[[u8; 3]] = &[
    [255, 0, 0],
    [255, 255, 0],
    [0, 255, 0],
    [0, 255, 255],
    [0, 0, 255],
    [255, 0, 255],
    [255, 0, 0],
];

impl Colormap {
    pub fn name(&self) -> &'static str {
        match self {
            Colormap::Twilight => "twilight",
            Colormap::Viridis => "viridis",
            Colormap::Magma => "magma",
            Colormap::Inferno => "inferno",
            Colormap::Plasma => "plasma",
            Colormap::Gray => "gray",
            Colormap::Hsv => "hsv",
        }
    }

    fn stops(&self) -> &'static [[u8; 3]] {
        match self {
            Colormap::Twilight => TWILIGHT,
            Colormap::Viridis => VIRIDIS,
            Colormap::Magma => MAGMA,
            Colormap::Inferno => INFERNO,
            Colormap::Plasma => PLASMA,
            Colormap::Gray => GRAY,
            Colormap::Hsv => HSV,
        }
    }

    /// Colour for `t`, clamped to `[0, 1]`. Non-finite values take the top colour.
    pub fn color(&self, t: f64) -> [u8; 3] {
        let stops = self.stops();
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 1.0 };
        let segments = (stops.len() - 1) as f64;
        let position = t * segments;
        let index = (position.floor() as usize).min(stops.len() - 2);
        let frac = position - index as f64;
        let (from, to) = (stops[index], stops[index + 1]);
        let mut rgb = [0u8; 3];
        for (channel, out) in rgb.iter_mut().enumerate() {
            let a = from[channel] as f64;
            let b = to[channel] as f64;
            *out = (a + (b - a) * frac).round() as u8;
        }
        rgb
    }
}

impl FromStr for Colormap {
    type Err = FractalError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "twilight" => Ok(Colormap::Twilight),
            "viridis" => Ok(Colormap::Viridis),
            "magma" => Ok(Colormap::Magma),
            "inferno" => Ok(Colormap::Inferno),
            "plasma" => Ok(Colormap::Plasma),
            "gray" | "grey" => Ok(Colormap::Gray),
            "hsv" => Ok(Colormap::Hsv),
            other => Err(FractalError::InvalidColormap(other.to_string())),
        }
    }
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything the renderer needs from a computed fractal.
#[derive(Debug, Clone, Copy)]
pub struct DisplayRequest<'a> {
    pub field: &'a Field,
    /// Reduce each scaled magnitude mod 1 before colouring.
    pub continuous: bool,
    pub colormap: Colormap,
    pub scale: f64,
}

impl DisplayRequest<'_> {
    /// Colormap input for a raw magnitude.
    pub fn normalize(&self, magnitude: f64) -> f64 {
        let value = magnitude * self.scale;
        if self.continuous {
            value.rem_euclid(1.0)
        } else {
            value
        }
    }

    /// Render the field as an RGB image, one pixel per cell, row 0 on top.
    pub fn render(&self) -> RgbImage {
        let side = self.field.resolution() as u32;
        ImageBuffer::from_fn(side, side, |x, y| {
            let magnitude = self.field.get(y as usize, x as usize);
            Rgb(self.colormap.color(self.normalize(magnitude)))
        })
    }

    /// Render and write the image as PNG.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.render().save(path)?;
        tracing::info!(
            path = %path.display(),
            colormap = %self.colormap,
            continuous = self.continuous,
            "Wrote fractal image"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(field: &Field, continuous: bool) -> DisplayRequest<'_> {
        DisplayRequest {
            field,
            continuous,
            colormap: Colormap::Viridis,
            scale: 1.0,
        }
    }

    #[test]
    fn test_colormap_from_str() {
        assert_eq!("Twilight".parse::<Colormap>().unwrap(), Colormap::Twilight);
        assert_eq!("grey".parse::<Colormap>().unwrap(), Colormap::Gray);
        assert!(matches!(
            "jet".parse::<Colormap>(),
            Err(FractalError::InvalidColormap(_))
        ));
    }

    #[test]
    fn test_colormap_endpoints() {
        assert_eq!(Colormap::Gray.color(0.0), [0, 0, 0]);
        assert_eq!(Colormap::Gray.color(1.0), [255, 255, 255]);
        assert_eq!(Colormap::Gray.color(0.5), [128, 128, 128]);
        assert_eq!(Colormap::Viridis.color(1.0), [253, 231, 37]);
        assert_eq!(Colormap::Viridis.color(7.5), [253, 231, 37]);
        assert_eq!(Colormap::Viridis.color(-1.0), [68, 1, 84]);
        assert_eq!(Colormap::Twilight.color(0.0), Colormap::Twilight.color(1.0));
    }

    #[test]
    fn test_continuous_bands_repeat() {
        let field = Field::from_values(2, vec![0.25, 1.25, 2.25, 0.0]);
        let image = request(&field, true).render();
        assert_eq!(image.get_pixel(0, 0), image.get_pixel(1, 0));
        assert_eq!(image.get_pixel(0, 0), image.get_pixel(0, 1));
    }

    #[test]
    fn test_raw_mode_saturates() {
        let field = Field::from_values(2, vec![1.0, 3.0, 0.0, 0.5]);
        let req = request(&field, false);
        assert_eq!(req.normalize(3.0), 3.0);
        let image = req.render();
        assert_eq!(image.get_pixel(0, 0), image.get_pixel(1, 0));
        assert_ne!(image.get_pixel(0, 0), image.get_pixel(0, 1));
    }

    #[test]
    fn test_scale_applies_before_modulo() {
        let field = Field::from_values(2, vec![0.0; 4]);
        let req = DisplayRequest {
            scale: 2.0,
            ..request(&field, true)
        };
        assert_eq!(req.normalize(0.75), 0.5);
    }

    #[test]
    fn test_save_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let field = Field::from_values(3, vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9]);
        request(&field, false).save(&path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }
}
