//! # Configuration
//!
//! Frame geometry for the target display, and the JSON job file that lists
//! which fonts to generate.
//!
//! ## Frame Presets
//!
//! | Preset | Frame (W×H) | Stored as | Reference digit |
//! |--------|-------------|-----------|-----------------|
//! | `CLOCK_32X128` | 32×128 | 128×32 | 6 |
//! | `CLOCK_16X64` | 16×64 | 64×16 | 6 |
//!
//! ## Job File
//!
//! ```json
//! {
//!   "output_dir": "out",
//!   "frame": { "width": 32, "height": 128 },
//!   "fonts": [
//!     { "name": "Roboto Mono", "path": "fonts/RobotoMono-Bold.ttf" },
//!     { "name": "spleen", "nudge": -2 }
//!   ]
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::GlyphError;
use crate::raster::{Rasterizer, SpleenRasterizer, StyleFlags, TtfRasterizer};

/// # Frame Configuration
///
/// One display cell, before rotation. Artifacts are stored rotated, so a
/// 32×128 frame produces 128×32 bitmaps.
///
/// ## Size Search
///
/// - **reference_digit**: the digit that must span the canvas width after
///   auto-sizing
/// - **max_point_size**: ceiling for every size search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Frame width in pixels, before rotation
    pub width: usize,

    /// Frame height in pixels, before rotation
    pub height: usize,

    /// Digit used to decide when the font is large enough
    pub reference_digit: u8,

    /// Upper bound for point-size searches
    pub max_point_size: u32,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self::CLOCK_32X128
    }
}

impl FrameConfig {
    /// Tall 32×128 cell used by the LED clock panel.
    pub const CLOCK_32X128: Self = Self {
        width: 32,
        height: 128,
        reference_digit: 6,
        max_point_size: 512,
    };

    /// Half-size cell.
    pub const CLOCK_16X64: Self = Self {
        width: 16,
        height: 64,
        reference_digit: 6,
        max_point_size: 256,
    };

    /// Dimensions of the stored (rotated) bitmap as (width, height).
    #[inline]
    pub fn rotated_dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Size of one packed artifact in bytes.
    #[inline]
    pub fn artifact_len(&self) -> usize {
        let (width, height) = self.rotated_dimensions();
        width.div_ceil(8) * height
    }

    /// `<H>x<W>` label used in artifact file names.
    ///
    /// ```
    /// use segglyph::config::FrameConfig;
    ///
    /// assert_eq!(FrameConfig::CLOCK_32X128.label(), "128x32");
    /// ```
    pub fn label(&self) -> String {
        format!("{}x{}", self.height, self.width)
    }

    pub fn validate(&self) -> Result<(), GlyphError> {
        if self.width == 0 || self.height == 0 {
            return Err(GlyphError::Config(format!(
                "frame must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        if self.reference_digit > 9 {
            return Err(GlyphError::Config(format!(
                "reference digit must be 0-9, got {}",
                self.reference_digit
            )));
        }
        if self.max_point_size == 0 {
            return Err(GlyphError::Config("max point size must be positive".to_string()));
        }
        Ok(())
    }
}

/// One font to generate glyphs for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSpec {
    /// Family name. Also names the output directory.
    pub name: String,

    /// TTF/OTF file. Omit for a built-in Spleen family.
    #[serde(default)]
    pub path: Option<PathBuf>,

    #[serde(default)]
    pub style: StyleFlags,

    /// Fixed point size, skipping auto-sizing.
    #[serde(default)]
    pub size: Option<u32>,

    /// Points to add to (or subtract from) the auto-sized result.
    #[serde(default)]
    pub nudge: i32,
}

impl FontSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
            style: StyleFlags::default(),
            size: None,
            nudge: 0,
        }
    }

    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn style(mut self, style: StyleFlags) -> Self {
        self.style = style;
        self
    }

    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn nudge(mut self, nudge: i32) -> Self {
        self.nudge = nudge;
        self
    }

    /// Directory name for this font's artifacts: spaces become underscores.
    pub fn dir_name(&self) -> String {
        self.name.replace(' ', "_")
    }

    /// Build the rasterizer that serves this font.
    pub fn rasterizer(&self) -> Result<Box<dyn Rasterizer>, GlyphError> {
        match &self.path {
            Some(path) => {
                let mut ttf = TtfRasterizer::new();
                ttf.load_face(self.name.clone(), self.style, path)?;
                Ok(Box::new(ttf))
            }
            None if SpleenRasterizer::supports(&self.name) => Ok(Box::new(SpleenRasterizer::new())),
            None => Err(GlyphError::Config(format!(
                "font '{}' has no path and is not a built-in font",
                self.name
            ))),
        }
    }
}

/// A batch of fonts to generate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default)]
    pub frame: FrameConfig,

    pub fonts: Vec<FontSpec>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl JobConfig {
    pub fn new(output_dir: impl Into<PathBuf>, frame: FrameConfig, fonts: Vec<FontSpec>) -> Self {
        Self {
            output_dir: output_dir.into(),
            frame,
            fonts,
        }
    }

    /// Parse a job from JSON text.
    pub fn from_json(json: &str) -> Result<Self, GlyphError> {
        let job: Self = serde_json::from_str(json)?;
        job.validate()?;
        Ok(job)
    }

    /// Load a job file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GlyphError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<(), GlyphError> {
        self.frame.validate()?;
        if self.fonts.is_empty() {
            return Err(GlyphError::Config("job lists no fonts".to_string()));
        }
        if let Some(font) = self.fonts.iter().find(|f| f.name.trim().is_empty()) {
            return Err(GlyphError::Config(format!(
                "font entry with empty name (path {:?})",
                font.path
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotated_dimensions() {
        let frame = FrameConfig::CLOCK_32X128;
        assert_eq!(frame.rotated_dimensions(), (128, 32));
        assert_eq!(frame.artifact_len(), 16 * 32);
    }

    #[test]
    fn test_validate_rejects_bad_digit() {
        let frame = FrameConfig {
            reference_digit: 10,
            ..FrameConfig::CLOCK_32X128
        };
        assert!(frame.validate().is_err());
    }

    #[test]
    fn test_dir_name() {
        assert_eq!(FontSpec::new("Comic Sans MS").dir_name(), "Comic_Sans_MS");
    }

    #[test]
    fn test_job_from_json_defaults() {
        let job = JobConfig::from_json(
            r#"{ "fonts": [ { "name": "spleen" }, { "name": "Roboto Mono", "path": "r.ttf", "nudge": -1 } ] }"#,
        )
        .unwrap();
        assert_eq!(job.frame, FrameConfig::CLOCK_32X128);
        assert_eq!(job.output_dir, PathBuf::from("."));
        assert_eq!(job.fonts[0].style, StyleFlags::BOLD);
        assert_eq!(job.fonts[1].nudge, -1);
        assert_eq!(job.fonts[1].path, Some(PathBuf::from("r.ttf")));
    }

    #[test]
    fn test_job_partial_frame() {
        let job = JobConfig::from_json(
            r#"{ "frame": { "width": 16, "height": 64 }, "fonts": [ { "name": "spleen" } ] }"#,
        )
        .unwrap();
        assert_eq!(job.frame.width, 16);
        assert_eq!(job.frame.reference_digit, 6);
    }

    #[test]
    fn test_job_without_fonts() {
        assert!(matches!(
            JobConfig::from_json(r#"{ "fonts": [] }"#),
            Err(GlyphError::Config(_))
        ));
    }

    #[test]
    fn test_job_bad_json() {
        assert!(matches!(
            JobConfig::from_json("{ not json"),
            Err(GlyphError::Json(_))
        ));
    }

    #[test]
    fn test_rasterizer_for_unknown_builtin() {
        assert!(matches!(
            FontSpec::new("Arial").rasterizer(),
            Err(GlyphError::Config(_))
        ));
        assert!(FontSpec::new("spleen").rasterizer().is_ok());
    }
}
