//! # Auto-Sizing
//!
//! Picks the point size a font is rendered at.
//!
//! ## Algorithm
//!
//! 1. **Baseline**: the largest size at which every digit's measured box fits
//!    the frame.
//! 2. **Flush**: from the baseline, grow one point at a time until the
//!    reference digit, after symmetric trimming, has no empty column on either
//!    side. The digit then spans the full canvas width.
//!
//! Every search stops at [`FrameConfig::max_point_size`]. Some fonts never
//! satisfy the flush condition (a glyph with a hole down the middle of
//! its advance box, a font that measures oddly), and those fail with
//! [`GlyphError::UnboundedProbe`] instead of spinning.
//!
//! [`AutoSizer::recompute_for_size`] is the building block for interactive
//! tools: it returns the trimmed reference glyph and its padding for any size,
//! so a CLI or TUI can show the glyph while an operator tries sizes.

use crate::bitmap::Bitmap;
use crate::config::FrameConfig;
use crate::error::GlyphError;
use crate::glyph::GlyphTask;
use crate::pipeline::padding::{Padding, padding};
use crate::pipeline::trim::trim_symmetric;
use crate::raster::{FontProbe, Rasterizer, StyleFlags};

/// Size search for one font against one frame.
pub struct AutoSizer<'a> {
    rasterizer: &'a dyn Rasterizer,
    frame: FrameConfig,
}

impl<'a> AutoSizer<'a> {
    pub fn new(rasterizer: &'a dyn Rasterizer, frame: FrameConfig) -> Self {
        Self { rasterizer, frame }
    }

    /// Largest point size at which all ten digits measure within the frame.
    ///
    /// Never less than 1.
    pub fn baseline_size(&self, family: &str, style: StyleFlags) -> Result<u32, GlyphError> {
        let mut baseline: Option<u32> = None;

        for digit in 0..=9u8 {
            let ch = GlyphTask::Digit(digit).character();
            let fit = self.largest_fitting_size(ch, &FontProbe::new(family, style, 1))?;
            log::trace!("{} '{}' fits up to {}pt", family, ch, fit);
            baseline = Some(baseline.map_or(fit, |b| b.min(fit)));
        }

        Ok(baseline.unwrap_or(1).max(1))
    }

    fn largest_fitting_size(&self, ch: char, probe: &FontProbe) -> Result<u32, GlyphError> {
        let max_width = self.frame.width as f32;
        let max_height = self.frame.height as f32;

        let mut size = 1;
        loop {
            if size > self.frame.max_point_size {
                return Err(self.unbounded(
                    probe,
                    format!("{:?} still fits the {}x{} frame", ch, self.frame.width, self.frame.height),
                ));
            }
            let (width, height) = self.rasterizer.measure(ch, &probe.with_size(size))?;
            if width > max_width || height > max_height {
                return Ok(size - 1);
            }
            size += 1;
        }
    }

    /// Render the reference digit at `probe`'s size, trim it, and return the
    /// trimmed glyph with its padding.
    pub fn recompute_for_size(&self, probe: &FontProbe) -> Result<(Bitmap, Padding), GlyphError> {
        let ch = GlyphTask::Digit(self.frame.reference_digit).character();
        let canvas = self
            .rasterizer
            .render(ch, probe, self.frame.width, self.frame.height)?;
        let trimmed = trim_symmetric(canvas)?;
        let pad = padding(&trimmed);
        Ok((trimmed, pad))
    }

    /// Grow from `probe`'s size until the reference digit is flush with both
    /// canvas edges.
    pub fn adjust_until_flush(&self, probe: &FontProbe) -> Result<u32, GlyphError> {
        let mut size = probe.point_size().max(1);
        loop {
            if size > self.frame.max_point_size {
                return Err(self.unbounded(
                    probe,
                    format!(
                        "digit {} never spans the canvas width",
                        self.frame.reference_digit
                    ),
                ));
            }
            let (_, pad) = self.recompute_for_size(&probe.with_size(size))?;
            if pad.is_flush() {
                return Ok(size);
            }
            log::trace!("{}pt padding {}/{}", size, pad.left, pad.right);
            size += 1;
        }
    }

    /// Baseline followed by flush adjustment.
    pub fn auto_size(&self, family: &str, style: StyleFlags) -> Result<u32, GlyphError> {
        let baseline = self.baseline_size(family, style)?;
        let size = self.adjust_until_flush(&FontProbe::new(family, style, baseline))?;
        log::debug!("{} {}: baseline {}pt, flush at {}pt", family, style, baseline, size);
        Ok(size)
    }

    /// Apply an operator offset to a size, clamped to `1..=max_point_size`.
    pub fn nudge(&self, size: u32, delta: i32) -> u32 {
        let nudged = size as i64 + delta as i64;
        nudged.clamp(1, self.frame.max_point_size as i64) as u32
    }

    fn unbounded(&self, probe: &FontProbe, reason: String) -> GlyphError {
        GlyphError::UnboundedProbe {
            font: probe.family().to_string(),
            max_size: self.frame.max_point_size,
            reason,
        }
    }
}
