//! # Fit-to-Frame Scaling
//!
//! Scales a trimmed glyph so it covers the display frame, then clips it.
//!
//! ## Fill, not Letterbox
//!
//! The scale ratio is the *larger* of the two axis ratios, so the glyph always
//! covers the frame on at least one axis and overflows the other. The overflow
//! is centered and cut off at the frame edges:
//!
//! ```text
//!   scaled glyph (too wide)        frame
//!   ┌──┬──────────────┬──┐
//!   │  │              │  │   →    ┌──────────────┐
//!   │  │    frame     │  │        │   clipped    │
//!   │  │              │  │        │    glyph     │
//!   └──┴──────────────┴──┘        └──────────────┘
//! ```
//!
//! Each cell on the clock panel is a fixed physical size, so a glyph that
//! is cut off slightly is preferred over one with blank bars around it.
//!
//! ## Resampling
//!
//! The bitmap is lifted into an 8-bit grayscale image (on = 255), resized
//! with the `image` crate's Catmull-Rom (bicubic) filter, and thresholded back:
//! only samples at full intensity ([`ON_LEVEL`]) come back as on.

use image::{
    GrayImage, Luma,
    imageops::{self, FilterType},
};

use crate::bitmap::Bitmap;
use crate::error::GlyphError;

/// Gray level a resampled pixel must reach to count as on.
pub const ON_LEVEL: u8 = 255;

/// Scale `bitmap` to cover a `target_width` × `target_height` frame.
///
/// The result is always exactly the requested size.
pub fn scale_to_fill(
    bitmap: Bitmap,
    target_width: usize,
    target_height: usize,
) -> Result<Bitmap, GlyphError> {
    if target_width == 0 || target_height == 0 {
        return Err(GlyphError::Config(format!(
            "target frame must be at least 1x1, got {}x{}",
            target_width, target_height
        )));
    }

    let (new_width, new_height) = fill_dimensions(
        bitmap.width(),
        bitmap.height(),
        target_width,
        target_height,
    );

    let source = to_gray(&bitmap);
    let scaled = imageops::resize(&source, new_width as u32, new_height as u32, FilterType::CatmullRom);

    let offset_x = (target_width as i64 - new_width as i64) / 2;
    let offset_y = (target_height as i64 - new_height as i64) / 2;

    log::trace!(
        "scaling {}x{} -> {}x{} at offset ({}, {})",
        bitmap.width(),
        bitmap.height(),
        new_width,
        new_height,
        offset_x,
        offset_y
    );

    let mut out = Bitmap::new(target_width, target_height);
    for y in 0..target_height {
        let sy = y as i64 - offset_y;
        if sy < 0 || sy >= new_height as i64 {
            continue;
        }
        for x in 0..target_width {
            let sx = x as i64 - offset_x;
            if sx < 0 || sx >= new_width as i64 {
                continue;
            }
            let Luma([level]) = *scaled.get_pixel(sx as u32, sy as u32);
            out.set(x, y, level >= ON_LEVEL);
        }
    }

    Ok(out)
}

/// Dimensions of the glyph after fill scaling, before clipping.
///
/// ```
/// use segglyph::pipeline::scale::fill_dimensions;
///
/// // Wide source: the height ratio wins, width overflows.
/// assert_eq!(fill_dimensions(20, 10, 32, 128), (256, 128));
/// // Tall source: the width ratio wins, height overflows.
/// assert_eq!(fill_dimensions(10, 20, 32, 32), (32, 64));
/// ```
pub fn fill_dimensions(
    source_width: usize,
    source_height: usize,
    target_width: usize,
    target_height: usize,
) -> (usize, usize) {
    let width_ratio = target_width as f64 / source_width as f64;
    let height_ratio = target_height as f64 / source_height as f64;
    let ratio = width_ratio.max(height_ratio);

    let new_width = (source_width as f64 * ratio).round().max(1.0) as usize;
    let new_height = (source_height as f64 * ratio).round().max(1.0) as usize;
    (new_width, new_height)
}

fn to_gray(bitmap: &Bitmap) -> GrayImage {
    GrayImage::from_fn(bitmap.width() as u32, bitmap.height() as u32, |x, y| {
        if bitmap.get(x as usize, y as usize) {
            Luma([ON_LEVEL])
        } else {
            Luma([0])
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_target_dimensions() {
        let bmp = Bitmap::from_ascii("#.#\n.#.").unwrap();
        let out = scale_to_fill(bmp, 32, 128).unwrap();
        assert_eq!((out.width(), out.height()), (32, 128));
    }

    #[test]
    fn test_solid_glyph_fills_frame() {
        let mut bmp = Bitmap::new(3, 4);
        for y in 0..4 {
            for x in 0..3 {
                bmp.set(x, y, true);
            }
        }
        let out = scale_to_fill(bmp, 32, 128).unwrap();
        assert_eq!(out.ink_count(), 32 * 128);
    }

    #[test]
    fn test_blank_stays_blank() {
        let out = scale_to_fill(Bitmap::new(5, 5), 16, 8).unwrap();
        assert!(!out.has_ink());
    }

    #[test]
    fn test_halves_keep_their_side() {
        let bmp = Bitmap::from_ascii("#.").unwrap();
        let out = scale_to_fill(bmp, 4, 2).unwrap();
        assert!(out.get(0, 0));
        assert!(out.get(0, 1));
        assert!(!out.get(3, 0));
        assert!(!out.get(3, 1));
    }

    #[test]
    fn test_tall_overflow_crops_rows_evenly() {
        // 3x1 grows to 9x3, one row overflows
        let bmp = Bitmap::from_ascii("#.#").unwrap();
        let out = scale_to_fill(bmp, 9, 2).unwrap();
        assert_eq!(out.to_ascii(), "110000011\n110000011\n");
    }

    #[test]
    fn test_wide_overflow_keeps_center_columns() {
        // 4x2 grows to 8x4, the outer three columns on each side are cut
        let bmp = Bitmap::from_ascii(
            "
            #..#
            #..#
            ",
        )
        .unwrap();
        let out = scale_to_fill(bmp, 2, 4).unwrap();
        assert!(!out.has_ink());

        let bmp = Bitmap::from_ascii(
            "
            .##.
            .##.
            ",
        )
        .unwrap();
        let out = scale_to_fill(bmp, 2, 4).unwrap();
        assert_eq!(out.ink_count(), 8);
    }

    #[test]
    fn test_fill_dimensions_same_aspect() {
        assert_eq!(fill_dimensions(4, 16, 32, 128), (32, 128));
    }

    #[test]
    fn test_fill_dimensions_rounds() {
        // ratio = max(32/3, 128/7) = 18.2857...; 3 * 18.2857 = 54.86 -> 55
        assert_eq!(fill_dimensions(3, 7, 32, 128), (55, 128));
    }

    #[test]
    fn test_zero_target_rejected() {
        let bmp = Bitmap::from_ascii("#").unwrap();
        assert!(matches!(
            scale_to_fill(bmp, 0, 10),
            Err(GlyphError::Config(_))
        ));
    }
}
