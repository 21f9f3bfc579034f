//! # Glyph Rasterizers
//!
//! The pipeline does not draw text itself. A [`Rasterizer`] measures a
//! character at a given point size and draws it, centered, on a fixed canvas
//! as on-over-off pixels.
//!
//! ## Backends
//!
//! | Backend | Module | Font source |
//! |---------|--------|-------------|
//! | TrueType/OpenType | [`ttf`] | Font files registered per family and style |
//! | Spleen bitmap | [`spleen`] | Built in, always available |
//!
//! Neither backend substitutes another font when the requested one is
//! missing. A missing face is a [`GlyphError::Rasterizer`].

pub mod spleen;
pub mod ttf;

use serde::{Deserialize, Serialize};

use crate::bitmap::Bitmap;
use crate::error::GlyphError;

pub use spleen::SpleenRasterizer;
pub use ttf::TtfRasterizer;

/// Style selection for a font face.
///
/// Defaults to bold, upright: clock digits are drawn in the bold weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleFlags {
    pub bold: bool,
    pub italic: bool,
}

impl Default for StyleFlags {
    fn default() -> Self {
        Self::BOLD
    }
}

impl StyleFlags {
    pub const REGULAR: Self = Self {
        bold: false,
        italic: false,
    };

    pub const BOLD: Self = Self {
        bold: true,
        italic: false,
    };
}

impl std::fmt::Display for StyleFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.bold, self.italic) {
            (false, false) => write!(f, "regular"),
            (true, false) => write!(f, "bold"),
            (false, true) => write!(f, "italic"),
            (true, true) => write!(f, "bold italic"),
        }
    }
}

/// A request for one font at one size.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontProbe {
    family: String,
    style: StyleFlags,
    point_size: u32,
}

impl FontProbe {
    pub fn new(family: impl Into<String>, style: StyleFlags, point_size: u32) -> Self {
        Self {
            family: family.into(),
            style,
            point_size,
        }
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn style(&self) -> StyleFlags {
        self.style
    }

    pub fn point_size(&self) -> u32 {
        self.point_size
    }

    /// Same family and style at another size.
    pub fn with_size(&self, point_size: u32) -> Self {
        Self {
            family: self.family.clone(),
            style: self.style,
            point_size,
        }
    }
}

impl std::fmt::Display for FontProbe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}pt", self.family, self.style, self.point_size)
    }
}

/// A text-rendering backend.
///
/// Implementations must be shareable across threads: the job layer renders
/// the glyphs of a font in parallel.
pub trait Rasterizer: Send + Sync {
    /// Measured (width, height) of `ch` in pixels.
    fn measure(&self, ch: char, probe: &FontProbe) -> Result<(f32, f32), GlyphError>;

    /// Draw `ch` centered on a blank `canvas_width` × `canvas_height` canvas,
    /// using the measured size for centering. Ink outside the canvas is
    /// clipped.
    fn render(
        &self,
        ch: char,
        probe: &FontProbe,
        canvas_width: usize,
        canvas_height: usize,
    ) -> Result<Bitmap, GlyphError>;
}

/// Top-left corner that centers a `width` × `height` box on the canvas.
///
/// Either coordinate is negative when the box is larger than the canvas.
pub fn centered_origin(
    canvas_width: usize,
    canvas_height: usize,
    width: f32,
    height: f32,
) -> (f32, f32) {
    (
        (canvas_width as f32 - width) / 2.0,
        (canvas_height as f32 - height) / 2.0,
    )
}

fn check_canvas(canvas_width: usize, canvas_height: usize) -> Result<(), GlyphError> {
    if canvas_width == 0 || canvas_height == 0 {
        return Err(GlyphError::Config(format!(
            "canvas must be at least 1x1, got {}x{}",
            canvas_width, canvas_height
        )));
    }
    Ok(())
}

fn check_point_size(probe: &FontProbe) -> Result<(), GlyphError> {
    if probe.point_size() == 0 {
        return Err(GlyphError::Config(format!(
            "point size must be positive for {}",
            probe.family()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style_is_bold() {
        assert_eq!(StyleFlags::default(), StyleFlags::BOLD);
    }

    #[test]
    fn test_probe_with_size() {
        let probe = FontProbe::new("Roboto Mono", StyleFlags::BOLD, 40);
        let bigger = probe.with_size(41);
        assert_eq!(bigger.family(), "Roboto Mono");
        assert_eq!(bigger.point_size(), 41);
        assert_eq!(probe.point_size(), 40);
    }

    #[test]
    fn test_probe_display() {
        let probe = FontProbe::new("Arial", StyleFlags::REGULAR, 12);
        assert_eq!(probe.to_string(), "Arial regular 12pt");
    }

    #[test]
    fn test_centered_origin() {
        assert_eq!(centered_origin(32, 128, 20.0, 100.0), (6.0, 14.0));
        assert_eq!(centered_origin(32, 128, 40.0, 128.0), (-4.0, 0.0));
    }
}
