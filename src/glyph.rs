//! The glyphs a clock face needs: ten digits and a colon.

use crate::config::FrameConfig;
use crate::error::GlyphError;

/// One glyph to render and store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlyphTask {
    Digit(u8),
    Colon,
}

impl GlyphTask {
    /// Digits 0-9, then the colon.
    pub const ALL: [GlyphTask; 11] = [
        GlyphTask::Digit(0),
        GlyphTask::Digit(1),
        GlyphTask::Digit(2),
        GlyphTask::Digit(3),
        GlyphTask::Digit(4),
        GlyphTask::Digit(5),
        GlyphTask::Digit(6),
        GlyphTask::Digit(7),
        GlyphTask::Digit(8),
        GlyphTask::Digit(9),
        GlyphTask::Colon,
    ];

    pub fn digit(digit: u8) -> Result<Self, GlyphError> {
        if digit > 9 {
            return Err(GlyphError::Config(format!("not a digit: {}", digit)));
        }
        Ok(GlyphTask::Digit(digit))
    }

    /// Character passed to the rasterizer.
    pub fn character(&self) -> char {
        match self {
            GlyphTask::Digit(d) => char::from(b'0' + d),
            GlyphTask::Colon => ':',
        }
    }

    /// Artifact file name, e.g. `digit_3_128x32.bin` or `colon_128x32.bin`.
    pub fn file_name(&self, frame: &FrameConfig) -> String {
        match self {
            GlyphTask::Digit(d) => format!("digit_{}_{}.bin", d, frame.label()),
            GlyphTask::Colon => format!("colon_{}.bin", frame.label()),
        }
    }
}

impl std::fmt::Display for GlyphTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GlyphTask::Digit(d) => write!(f, "digit {}", d),
            GlyphTask::Colon => write!(f, "colon"),
        }
    }
}
