//! # Normalization Pipeline
//!
//! Turns a raw glyph canvas into the bytes stored for one display cell.
//!
//! ## Stages
//!
//! ```text
//! canvas ─► trim ─► scale ─► rotate ─► pack ─► bytes
//!  W×H     w'×H    W×H      H×W
//! ```
//!
//! - [`padding`]: empty-column counts at each edge
//! - [`trim`]: symmetric column trimming
//! - [`scale`]: fill-to-frame bicubic scaling with clipping
//! - [`rotate`]: 90° clockwise rotation
//! - [`pack`]: MSB-first 1-bit packing
//!
//! Every stage takes its input by value and hands back a new bitmap. Stages do
//! no I/O, which is what lets [`crate::job`] fan glyphs out across threads.
//!
//! ## Usage Example
//!
//! ```
//! use segglyph::Bitmap;
//! use segglyph::pipeline;
//!
//! let canvas = Bitmap::from_ascii("
//!     ...........
//!     ......##...
//!     ......##...
//! ").unwrap();
//!
//! let bytes = pipeline::normalize_and_pack(canvas, 8, 16).unwrap();
//! // Rotated frame is 16x8: 2 bytes per row, 8 rows
//! assert_eq!(bytes.len(), 2 * 8);
//! ```

pub mod pack;
pub mod padding;
pub mod rotate;
pub mod scale;
pub mod trim;

use crate::bitmap::Bitmap;
use crate::error::GlyphError;

/// Trim, scale to a `frame_width` × `frame_height` frame and rotate.
///
/// The result is `frame_height` × `frame_width`.
pub fn normalize(
    canvas: Bitmap,
    frame_width: usize,
    frame_height: usize,
) -> Result<Bitmap, GlyphError> {
    let trimmed = trim::trim_symmetric(canvas)?;
    let scaled = scale::scale_to_fill(trimmed, frame_width, frame_height)?;
    Ok(rotate::rotate_cw(scaled))
}

/// [`normalize`] followed by [`pack::pack`].
pub fn normalize_and_pack(
    canvas: Bitmap,
    frame_width: usize,
    frame_height: usize,
) -> Result<Vec<u8>, GlyphError> {
    let rotated = normalize(canvas, frame_width, frame_height)?;
    Ok(pack::pack(&rotated))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_dimensions() {
        let canvas = Bitmap::from_ascii("..#..\n..#..").unwrap();
        let out = normalize(canvas, 32, 128).unwrap();
        assert_eq!((out.width(), out.height()), (128, 32));
    }

    #[test]
    fn test_blank_canvas_fails_before_packing() {
        let err = normalize_and_pack(Bitmap::new(32, 128), 32, 128).unwrap_err();
        assert!(matches!(err, GlyphError::DegenerateGlyph(_)));
    }

    #[test]
    fn test_solid_bar_packs_to_ones() {
        // Same aspect as the frame, no padding: scales to a solid frame.
        let canvas = Bitmap::from_ascii(
            "
            ##
            ##
            ##
            ##
            ",
        )
        .unwrap();
        let bytes = normalize_and_pack(canvas, 8, 16).unwrap();
        assert_eq!(bytes, vec![0xFF; 2 * 8]);
    }
}
