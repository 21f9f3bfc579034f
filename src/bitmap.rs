//! # Binary Pixel Buffers
//!
//! [`Bitmap`] is the pixel buffer every pipeline stage works on: a row-major
//! grid of on/off pixels, never smaller than 1×1.
//!
//! ## Coordinate System
//!
//! ```text
//! (0,0) ──────────────► x (column, 0..width)
//!   │
//!   │   ░░██░░
//!   │   ░███░░   ← true = on (ink), false = off (background)
//!   │   ░░██░░
//!   ▼
//!   y (row, 0..height)
//! ```
//!
//! Stages never mutate the buffer they are handed. Each one builds a fresh
//! `Bitmap` and returns it, so a buffer has exactly one owner at a time.

use crate::error::GlyphError;

/// A width × height grid of binary pixels, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bitmap {
    width: usize,
    height: usize,
    pixels: Vec<bool>,
}

impl Bitmap {
    /// Create an all-off bitmap.
    ///
    /// ## Panics
    ///
    /// Panics if either dimension is zero. Use [`Bitmap::from_pixels`] for
    /// dimensions that come from outside the crate.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            width >= 1 && height >= 1,
            "bitmap dimensions must be at least 1x1, got {}x{}",
            width,
            height
        );
        Self {
            width,
            height,
            pixels: vec![false; width * height],
        }
    }

    /// Wrap an existing row-major pixel vector.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<bool>) -> Result<Self, GlyphError> {
        if width == 0 || height == 0 {
            return Err(GlyphError::Config(format!(
                "bitmap dimensions must be at least 1x1, got {}x{}",
                width, height
            )));
        }
        if pixels.len() != width * height {
            return Err(GlyphError::Config(format!(
                "expected {} pixels for {}x{}, got {}",
                width * height,
                width,
                height,
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Parse an ASCII picture, one line per row.
    ///
    /// `1` and `#` are on, `0` and `.` are off. Surrounding whitespace on each
    /// line is ignored and blank lines are skipped.
    ///
    /// ```
    /// use segglyph::Bitmap;
    ///
    /// let bmp = Bitmap::from_ascii("
    ///     .#.
    ///     ####
    /// ").unwrap();
    /// assert_eq!((bmp.width(), bmp.height()), (3, 2));
    /// assert!(bmp.get(1, 0));
    /// assert!(!bmp.get(0, 0));
    /// ```
    pub fn from_ascii(picture: &str) -> Result<Self, GlyphError> {
        let rows: Vec<&str> = picture
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        let mut pixels = Vec::with_capacity(width * rows.len());

        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(GlyphError::Config(format!(
                    "row {} has {} columns, expected {}",
                    y,
                    row.chars().count(),
                    width
                )));
            }
            for ch in row.chars() {
                match ch {
                    '1' | '#' => pixels.push(true),
                    '0' | '.' => pixels.push(false),
                    other => {
                        return Err(GlyphError::Config(format!(
                            "unexpected character {:?} in bitmap row {}",
                            other, y
                        )));
                    }
                }
            }
        }

        Self::from_pixels(width, rows.len(), pixels)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel at `(x, y)`. Out-of-range coordinates read as off.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.pixels[y * self.width + x]
    }

    /// Set the pixel at `(x, y)`. Out-of-range writes are ignored, which
    /// gives stages clipping for free.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, on: bool) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = on;
        }
    }

    /// Iterate over rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.pixels.chunks(self.width)
    }

    /// True if no pixel in column `x` is on.
    pub fn column_is_empty(&self, x: usize) -> bool {
        (0..self.height).all(|y| !self.get(x, y))
    }

    /// True if at least one pixel is on.
    pub fn has_ink(&self) -> bool {
        self.pixels.iter().any(|&p| p)
    }

    /// Number of on pixels.
    pub fn ink_count(&self) -> usize {
        self.pixels.iter().filter(|&&p| p).count()
    }

    /// Copy of columns `start..end`, all rows preserved.
    pub(crate) fn columns(&self, start: usize, end: usize) -> Self {
        let mut out = Self::new(end - start, self.height);
        for y in 0..self.height {
            for x in start..end {
                out.set(x - start, y, self.get(x, y));
            }
        }
        out
    }

    /// Render as `1`/`0` text, skipping rows that contain no ink.
    ///
    /// This is the console preview used to eyeball a glyph at a given size.
    pub fn to_ascii(&self) -> String {
        let mut out = String::new();
        for row in self.rows() {
            if !row.iter().any(|&p| p) {
                continue;
            }
            out.extend(row.iter().map(|&p| if p { '1' } else { '0' }));
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_blank() {
        let bmp = Bitmap::new(4, 3);
        assert_eq!(bmp.width(), 4);
        assert_eq!(bmp.height(), 3);
        assert!(!bmp.has_ink());
    }

    #[test]
    #[should_panic]
    fn test_new_rejects_zero_width() {
        let _ = Bitmap::new(0, 3);
    }

    #[test]
    fn test_from_pixels_length_mismatch() {
        assert!(Bitmap::from_pixels(2, 2, vec![true; 3]).is_err());
        assert!(Bitmap::from_pixels(0, 2, vec![]).is_err());
    }

    #[test]
    fn test_get_set_clip() {
        let mut bmp = Bitmap::new(2, 2);
        bmp.set(1, 1, true);
        bmp.set(5, 5, true);
        assert!(bmp.get(1, 1));
        assert!(!bmp.get(5, 5));
        assert_eq!(bmp.ink_count(), 1);
    }

    #[test]
    fn test_from_ascii_rejects_ragged_rows() {
        assert!(Bitmap::from_ascii("10\n1").is_err());
        assert!(Bitmap::from_ascii("1x").is_err());
        assert!(Bitmap::from_ascii("").is_err());
    }

    #[test]
    fn test_columns() {
        let bmp = Bitmap::from_ascii("1001\n0110").unwrap();
        let mid = bmp.columns(1, 3);
        assert_eq!(mid, Bitmap::from_ascii("00\n11").unwrap());
    }

    #[test]
    fn test_to_ascii_skips_blank_rows() {
        let bmp = Bitmap::from_ascii("000\n010\n000\n110").unwrap();
        assert_eq!(bmp.to_ascii(), "010\n110\n");
    }
}
