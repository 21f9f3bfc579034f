//! Built-in rasterizer over the Spleen bitmap font family.
//!
//! Spleen glyphs are fixed-size cells. A point size is taken as the target
//! cell height in pixels, and the cell is scaled with nearest neighbor,
//! keeping the cell's aspect ratio.
//!
//! | Family | Source cell |
//! |--------|-------------|
//! | `spleen`, `spleen-12x24` | 12×24 |
//! | `spleen-8x16` | 8×16 |
//! | `spleen-6x12` | 6×12 |
//!
//! Bold is synthesized by smearing each source pixel one column to the
//! right. There is no italic face.

use spleen_font::{FONT_6X12, FONT_8X16, FONT_12X24, PSF2Font};

use super::{FontProbe, Rasterizer, centered_origin, check_canvas, check_point_size};
use crate::bitmap::Bitmap;
use crate::error::GlyphError;

/// Family names this rasterizer answers to.
pub const FAMILIES: &[&str] = &["spleen", "spleen-6x12", "spleen-8x16", "spleen-12x24"];

/// Rasterizer for the built-in Spleen fonts.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpleenRasterizer;

impl SpleenRasterizer {
    pub fn new() -> Self {
        Self
    }

    /// True if `family` names one of the built-in Spleen sizes.
    pub fn supports(family: &str) -> bool {
        FAMILIES.contains(&family)
    }
}

struct Cell {
    data: &'static [u8],
    width: usize,
    height: usize,
}

fn cell_for(family: &str) -> Result<Cell, GlyphError> {
    match family {
        "spleen" | "spleen-12x24" => Ok(Cell {
            data: FONT_12X24,
            width: 12,
            height: 24,
        }),
        "spleen-8x16" => Ok(Cell {
            data: FONT_8X16,
            width: 8,
            height: 16,
        }),
        "spleen-6x12" => Ok(Cell {
            data: FONT_6X12,
            width: 6,
            height: 12,
        }),
        other => Err(GlyphError::Rasterizer(format!(
            "'{}' is not a built-in font (expected one of {})",
            other,
            FAMILIES.join(", ")
        ))),
    }
}

/// Cell size in pixels at `point_size`.
fn scaled_cell(cell: &Cell, point_size: u32) -> (usize, usize) {
    let height = point_size as usize;
    let width = ((point_size as f32 * cell.width as f32 / cell.height as f32).round() as usize).max(1);
    (width, height)
}

/// Source glyph as a cell-sized bitmap.
fn source_glyph(cell: &Cell, ch: char) -> Result<Bitmap, GlyphError> {
    let mut font = PSF2Font::new(cell.data)
        .map_err(|_| GlyphError::Rasterizer("Failed to load Spleen font data".to_string()))?;
    let utf8 = ch.to_string();

    let glyph = font
        .glyph_for_utf8(utf8.as_bytes())
        .ok_or_else(|| GlyphError::Rasterizer(format!("Spleen has no glyph for {:?}", ch)))?;

    let mut bitmap = Bitmap::new(cell.width, cell.height);
    for (row_y, row) in glyph.enumerate() {
        for (col_x, on) in row.enumerate() {
            bitmap.set(col_x, row_y, on);
        }
    }
    Ok(bitmap)
}

/// Smear every on pixel one column right.
fn embolden(glyph: &Bitmap) -> Bitmap {
    let mut out = Bitmap::new(glyph.width(), glyph.height());
    for y in 0..glyph.height() {
        for x in 0..glyph.width() {
            let on = glyph.get(x, y) || (x > 0 && glyph.get(x - 1, y));
            out.set(x, y, on);
        }
    }
    out
}

impl Rasterizer for SpleenRasterizer {
    fn measure(&self, _ch: char, probe: &FontProbe) -> Result<(f32, f32), GlyphError> {
        check_point_size(probe)?;
        let cell = cell_for(probe.family())?;
        let (width, height) = scaled_cell(&cell, probe.point_size());
        Ok((width as f32, height as f32))
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
        if probe.style().italic {
            return Err(GlyphError::Rasterizer(format!(
                "{} has no italic face",
                probe.family()
            )));
        }

        let cell = cell_for(probe.family())?;
        let mut glyph = source_glyph(&cell, ch)?;
        if probe.style().bold {
            glyph = embolden(&glyph);
        }

        let (width, height) = scaled_cell(&cell, probe.point_size());
        let (origin_x, origin_y) =
            centered_origin(canvas_width, canvas_height, width as f32, height as f32);
        let (origin_x, origin_y) = (origin_x.floor() as i64, origin_y.floor() as i64);

        let mut canvas = Bitmap::new(canvas_width, canvas_height);
        for dy in 0..height {
            let cy = origin_y + dy as i64;
            if cy < 0 || cy >= canvas_height as i64 {
                continue;
            }
            let sy = dy * cell.height / height;
            for dx in 0..width {
                let cx = origin_x + dx as i64;
                if cx < 0 || cx >= canvas_width as i64 {
                    continue;
                }
                let sx = dx * cell.width / width;
                if glyph.get(sx, sy) {
                    canvas.set(cx as usize, cy as usize, true);
                }
            }
        }

        Ok(canvas)
    }
}
