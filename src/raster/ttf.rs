//! TrueType/OpenType rasterizer.
//!
//! Renders glyphs with ab_glyph from font files registered per family and
//! style. Point sizes are converted to pixels at 96 DPI, and coverage is
//! thresholded to 1 bit at [`COVERAGE_THRESHOLD`].
//!
//! Faces are never looked up on the system. A probe for a family/style that
//! was not registered fails instead of drawing with some other face.

use std::collections::HashMap;
use std::path::Path;

use ab_glyph::{Font, FontArc, ScaleFont};

use super::{FontProbe, Rasterizer, StyleFlags, centered_origin, check_canvas, check_point_size};
use crate::bitmap::Bitmap;
use crate::error::GlyphError;

/// Minimum coverage for a pixel to be drawn as on.
pub const COVERAGE_THRESHOLD: f32 = 0.5;

/// Pixels per point at 96 DPI.
pub const PX_PER_POINT: f32 = 96.0 / 72.0;

/// Rasterizer backed by registered TTF/OTF faces.
#[derive(Clone, Default)]
pub struct TtfRasterizer {
    faces: HashMap<(String, StyleFlags), FontArc>,
}

impl TtfRasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an already-parsed face.
    pub fn add_face(&mut self, family: impl Into<String>, style: StyleFlags, font: FontArc) {
        self.faces.insert((family.into(), style), font);
    }

    /// Parse font bytes and register the face.
    pub fn add_face_bytes(
        &mut self,
        family: impl Into<String>,
        style: StyleFlags,
        bytes: Vec<u8>,
    ) -> Result<(), GlyphError> {
        let family = family.into();
        let font = FontArc::try_from_vec(bytes).map_err(|e| {
            GlyphError::Rasterizer(format!("Failed to parse font for '{}': {}", family, e))
        })?;
        self.add_face(family, style, font);
        Ok(())
    }

    /// Read a font file and register the face.
    pub fn load_face(
        &mut self,
        family: impl Into<String>,
        style: StyleFlags,
        path: impl AsRef<Path>,
    ) -> Result<(), GlyphError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            GlyphError::Rasterizer(format!("Failed to read font {}: {}", path.display(), e))
        })?;
        log::debug!("loaded {} ({} bytes)", path.display(), bytes.len());
        self.add_face_bytes(family, style, bytes)
    }

    /// True if a face is registered for `family` in `style`.
    pub fn has_face(&self, family: &str, style: StyleFlags) -> bool {
        self.faces.contains_key(&(family.to_string(), style))
    }

    fn face(&self, probe: &FontProbe) -> Result<&FontArc, GlyphError> {
        self.faces
            .get(&(probe.family().to_string(), probe.style()))
            .ok_or_else(|| {
                GlyphError::Rasterizer(format!(
                    "No {} face registered for '{}'",
                    probe.style(),
                    probe.family()
                ))
            })
    }
}

fn pixel_height(probe: &FontProbe) -> f32 {
    probe.point_size() as f32 * PX_PER_POINT
}

fn glyph_id(font: &FontArc, ch: char, probe: &FontProbe) -> Result<ab_glyph::GlyphId, GlyphError> {
    let id = font.glyph_id(ch);
    if id.0 == 0 {
        return Err(GlyphError::Rasterizer(format!(
            "'{}' has no glyph for {:?}",
            probe.family(),
            ch
        )));
    }
    Ok(id)
}

impl Rasterizer for TtfRasterizer {
    fn measure(&self, ch: char, probe: &FontProbe) -> Result<(f32, f32), GlyphError> {
        check_point_size(probe)?;
        let font = self.face(probe)?;
        let id = glyph_id(font, ch, probe)?;
        let scaled = font.as_scaled(pixel_height(probe));
        Ok((scaled.h_advance(id), scaled.ascent() - scaled.descent()))
    }

    fn render(
        &self,
        ch: char,
        probe: &FontProbe,
        canvas_width: usize,
        canvas_height: usize,
    ) -> Result<Bitmap, GlyphError> {
        check_canvas(canvas_width, canvas_height)?;
        check_point_size(probe)?;
        let font = self.face(probe)?;
        let id = glyph_id(font, ch, probe)?;

        let px = pixel_height(probe);
        let scaled = font.as_scaled(px);
        let (width, height) = (scaled.h_advance(id), scaled.ascent() - scaled.descent());
        let (origin_x, origin_y) = centered_origin(canvas_width, canvas_height, width, height);

        let glyph = id.with_scale_and_position(
            px,
            ab_glyph::point(origin_x, origin_y + scaled.ascent()),
        );

        let mut canvas = Bitmap::new(canvas_width, canvas_height);
        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|px, py, coverage| {
                let x = px as i64 + bounds.min.x as i64;
                let y = py as i64 + bounds.min.y as i64;

                if x >= 0 && y >= 0 && coverage >= COVERAGE_THRESHOLD {
                    canvas.set(x as usize, y as usize, true);
                }
            });
        }

        Ok(canvas)
    }
}
