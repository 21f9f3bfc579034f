//! # Segglyph - Clock Display Glyph Generator
//!
//! Segglyph renders the digits 0-9 and a colon from a font and turns each one
//! into a fixed-size, centered, 1-bit bitmap for a small clock display.
//!
//! - **Pipeline**: trim, fill-scale, rotate and bit-pack a glyph canvas
//! - **Auto-sizing**: pick a point size that fills the display cell
//! - **Rasterizers**: TrueType via ab_glyph, or the built-in Spleen fonts
//! - **Jobs**: batch generation of per-font artifact directories
//!
//! ## Quick Start
//!
//! ```
//! use segglyph::{
//!     config::FrameConfig,
//!     glyph::GlyphTask,
//!     job,
//!     raster::{FontProbe, SpleenRasterizer, StyleFlags},
//!     sizing::AutoSizer,
//! };
//!
//! let frame = FrameConfig::CLOCK_32X128;
//! let rasterizer = SpleenRasterizer::new();
//!
//! // Pick a size that fills the cell
//! let sizer = AutoSizer::new(&rasterizer, frame);
//! let size = sizer.auto_size("spleen", StyleFlags::BOLD)?;
//!
//! // Render, normalize and pack one glyph
//! let probe = FontProbe::new("spleen", StyleFlags::BOLD, size);
//! let artifact = job::render_glyph(&rasterizer, &probe, &frame, GlyphTask::Digit(7))?;
//!
//! assert_eq!(artifact.file_name, "digit_7_128x32.bin");
//! assert_eq!(artifact.data.len(), 16 * 32);
//!
//! # Ok::<(), segglyph::GlyphError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`bitmap`] | Binary pixel buffer |
//! | [`pipeline`] | Padding, trimming, scaling, rotation, packing |
//! | [`raster`] | Rasterizer trait and backends |
//! | [`sizing`] | Point-size search |
//! | [`job`] | Batch generation and artifact output |
//! | [`config`] | Frame presets and job files |
//! | [`error`] | Error types |

pub mod bitmap;
pub mod config;
pub mod error;
pub mod glyph;
pub mod job;
pub mod pipeline;
pub mod raster;
pub mod sizing;

// Re-exports for convenience
pub use bitmap::Bitmap;
pub use config::FrameConfig;
pub use error::GlyphError;
