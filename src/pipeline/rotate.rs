//! 90° clockwise frame rotation.
//!
//! The clock panel is mounted sideways, so a W×H glyph frame is stored as
//! an H×W bitmap:
//!
//! ```text
//!   input (W=2, H=3)      output (3×2)
//!     a b                   e c a
//!     c d        →          f d b
//!     e f
//! ```
//!
//! `output(H-1-y, x) = input(x, y)`. No resampling.

use crate::bitmap::Bitmap;

/// Rotate `bitmap` 90° clockwise.
pub fn rotate_cw(bitmap: Bitmap) -> Bitmap {
    let (width, height) = (bitmap.width(), bitmap.height());
    let mut rotated = Bitmap::new(height, width);

    for x in 0..width {
        for y in 0..height {
            rotated.set(height - 1 - y, x, bitmap.get(x, y));
        }
    }

    rotated
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rotate_2x3() {
        // W=2, H=3 with a single pixel at (1, 0)
        let bmp = Bitmap::from_ascii(".#\n..\n..").unwrap();
        let out = rotate_cw(bmp);
        assert_eq!((out.width(), out.height()), (3, 2));
        // (x=1, y=0) -> (H-1-0, 1) = (2, 1)
        assert!(out.get(2, 1));
        assert_eq!(out.ink_count(), 1);
    }

    #[test]
    fn test_rotate_picture() {
        let bmp = Bitmap::from_ascii(
            "
            ##
            #.
            ..
            ",
        )
        .unwrap();
        let expected = Bitmap::from_ascii(
            "
            .##
            ..#
            ",
        )
        .unwrap();
        assert_eq!(rotate_cw(bmp), expected);
    }

    #[test]
    fn test_four_turns_identity() {
        let bmp = Bitmap::from_ascii("#..#\n.##.\n#...").unwrap();
        let out = rotate_cw(rotate_cw(rotate_cw(rotate_cw(bmp.clone()))));
        assert_eq!(out, bmp);
    }
}
