//! # Symmetric Column Trimming
//!
//! Text measurement centers the advance box, not the ink. Slanted or serif
//! digits therefore end up off-center on the canvas. The trimmer fixes this
//! by dropping empty columns one at a time from whichever side has more of
//! them, until both sides are within one column of each other.
//!
//! ```text
//! before:  ░░░░░░██░░   left=6 right=2
//! step 1:  ░░░░░██░░    left=5 right=2
//! step 2:  ░░░░██░░     left=4 right=2
//! step 3:  ░░░██░░      left=3 right=2  → done
//! ```
//!
//! Each step shrinks the width by exactly one, so the loop finishes in at
//! most `width` iterations.

use super::padding::{Padding, padding};
use crate::bitmap::Bitmap;
use crate::error::GlyphError;

/// Trim `bitmap` until its left/right padding differs by at most one.
///
/// Returns the trimmed bitmap. Fails with [`GlyphError::DegenerateGlyph`] if
/// the bitmap has no ink, since there is nothing to center.
pub fn trim_symmetric(bitmap: Bitmap) -> Result<Bitmap, GlyphError> {
    if !bitmap.has_ink() {
        return Err(GlyphError::DegenerateGlyph(format!(
            "{}x{} bitmap has no ink to center",
            bitmap.width(),
            bitmap.height()
        )));
    }

    let mut current = bitmap;
    let mut pad = padding(&current);

    while pad.imbalance() > 1 {
        let width = current.width();
        if width <= 1 {
            return Err(GlyphError::DegenerateGlyph(format!(
                "trimming collapsed to zero width (padding {}/{})",
                pad.left, pad.right
            )));
        }

        current = drop_one_column(&current, &pad);
        pad = padding(&current);
    }

    log::trace!(
        "trimmed to {}x{} with padding {}/{}",
        current.width(),
        current.height(),
        pad.left,
        pad.right
    );

    Ok(current)
}

/// Drop one column from the heavier side.
fn drop_one_column(bitmap: &Bitmap, pad: &Padding) -> Bitmap {
    let width = bitmap.width();
    if pad.left > pad.right {
        bitmap.columns(1, width)
    } else {
        bitmap.columns(0, width - 1)
    }
}
