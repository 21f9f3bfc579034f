//! # Bit Packing
//!
//! Serializes a bitmap into the display's native 1-bit format.
//!
//! ## Layout
//!
//! - Rows top to bottom, no gap or alignment between rows
//! - Bit 7 (MSB) = leftmost pixel of each 8-pixel group
//! - 1 = on, 0 = off
//! - A short final group is padded with 0 bits on the right
//!
//! ```text
//! Byte value 0xF0 = 11110000 = ████░░░░
//! Byte value 0xAA = 10101010 = █░█░█░█░
//! ```
//!
//! Total length is `ceil(width / 8) * height` bytes.

use crate::bitmap::Bitmap;
use crate::error::GlyphError;

/// Bytes per packed row for a given width.
#[inline]
pub fn row_bytes(width: usize) -> usize {
    width.div_ceil(8)
}

/// Pack a whole bitmap, row-major, MSB first.
///
/// ```
/// use segglyph::{Bitmap, pipeline::pack::pack};
///
/// // 8 pixels pack into 1 byte
/// let bmp = Bitmap::from_ascii("####....").unwrap();
/// assert_eq!(pack(&bmp), vec![0xF0]);
///
/// // 12 pixels pack into 2 bytes (4 bits padding)
/// let bmp = Bitmap::from_ascii("############").unwrap();
/// assert_eq!(pack(&bmp), vec![0xFF, 0xF0]);
/// ```
pub fn pack(bitmap: &Bitmap) -> Vec<u8> {
    let width_bytes = row_bytes(bitmap.width());
    let mut data = vec![0u8; width_bytes * bitmap.height()];

    for (y, row) in bitmap.rows().enumerate() {
        let line = &mut data[y * width_bytes..(y + 1) * width_bytes];
        for (x, &on) in row.iter().enumerate() {
            if on {
                line[x / 8] |= 0x80 >> (x % 8); // MSB = leftmost
            }
        }
    }

    data
}

/// Unpack bytes produced by [`pack`] back into a bitmap.
///
/// The dimensions are not stored in the byte stream and must be known by
/// the caller.
pub fn unpack(data: &[u8], width: usize, height: usize) -> Result<Bitmap, GlyphError> {
    let width_bytes = row_bytes(width);
    if data.len() != width_bytes * height {
        return Err(GlyphError::Config(format!(
            "expected {} bytes for {}x{}, got {}",
            width_bytes * height,
            width,
            height,
            data.len()
        )));
    }

    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let byte = data[y * width_bytes + x / 8];
            let bit_idx = 7 - (x % 8);
            pixels.push((byte >> bit_idx) & 1 == 1);
        }
    }

    Bitmap::from_pixels(width, height, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pack_full_byte() {
        assert_eq!(pack(&Bitmap::from_ascii("########").unwrap()), vec![0xFF]);
        assert_eq!(pack(&Bitmap::new(8, 1)), vec![0x00]);
        assert_eq!(pack(&Bitmap::from_ascii("#.#.#.#.").unwrap()), vec![0xAA]);
    }

    #[test]
    fn test_pack_pads_short_group() {
        assert_eq!(pack(&Bitmap::from_ascii("##.").unwrap()), vec![0xC0]);
        assert_eq!(pack(&Bitmap::from_ascii("#########").unwrap()), vec![0xFF, 0x80]);
    }

    #[test]
    fn test_pack_last_pixel_of_group() {
        assert_eq!(pack(&Bitmap::from_ascii(".......#.......#").unwrap()), vec![0x01, 0x01]);
    }

    #[test]
    fn test_pack_rows_are_contiguous() {
        let bmp = Bitmap::from_ascii(
            "
            #.........
            .........#
            ",
        )
        .unwrap();
        // 10 pixels -> 2 bytes per row, no gap between rows
        assert_eq!(pack(&bmp), vec![0x80, 0x00, 0x00, 0x40]);
    }

    #[test]
    fn test_pack_length() {
        let bmp = Bitmap::new(128, 32);
        assert_eq!(pack(&bmp).len(), 16 * 32);
        let bmp = Bitmap::new(13, 5);
        assert_eq!(pack(&bmp).len(), 2 * 5);
    }

    #[test]
    fn test_unpack_reverses_pack() {
        let bmp = Bitmap::from_ascii(
            "
            #.#.#.#.#.#
            .#.#.#.#.#.
            ##.......##
            ",
        )
        .unwrap();
        assert_eq!(unpack(&pack(&bmp), 11, 3).unwrap(), bmp);
    }

    #[test]
    fn test_unpack_rejects_wrong_length() {
        assert!(matches!(unpack(&[0xFF], 9, 1), Err(GlyphError::Config(_))));
    }
}
