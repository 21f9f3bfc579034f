//! Empty-column padding at the horizontal edges of a bitmap.

use crate::bitmap::Bitmap;

/// Count of all-off columns at each horizontal edge.
///
/// For a blank bitmap `left == width` and `right == 0`, so
/// `left + right <= width` holds for every input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding {
    pub left: usize,
    pub right: usize,
}

impl Padding {
    /// Absolute difference between the two sides.
    #[inline]
    pub fn imbalance(&self) -> usize {
        self.left.abs_diff(self.right)
    }

    /// True when the ink touches both edges.
    #[inline]
    pub fn is_flush(&self) -> bool {
        self.left == 0 && self.right == 0
    }
}

/// Measure the padding of `bitmap`.
///
/// ```
/// use segglyph::Bitmap;
/// use segglyph::pipeline::padding::{padding, Padding};
///
/// let bmp = Bitmap::from_ascii("..#....").unwrap();
/// assert_eq!(padding(&bmp), Padding { left: 2, right: 4 });
/// ```
pub fn padding(bitmap: &Bitmap) -> Padding {
    let width = bitmap.width();

    let left = (0..width)
        .position(|x| !bitmap.column_is_empty(x))
        .unwrap_or(width);

    if left == width {
        return Padding { left, right: 0 };
    }

    let right = (0..width)
        .rev()
        .position(|x| !bitmap.column_is_empty(x))
        .unwrap_or(0);

    Padding { left, right }
}
