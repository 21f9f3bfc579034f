//! # Error Types
//!
//! This module defines error types used throughout the segglyph library.
//!
//! Every error is terminal for the font or glyph being processed. Artifacts
//! are only written once a whole font has made it through the pipeline, so
//! an error never leaves a half-written glyph set behind.

use thiserror::Error;

/// Main error type for segglyph operations
#[derive(Debug, Error)]
pub enum GlyphError {
    /// The symmetric trimmer ran out of columns, or the glyph has no ink
    #[error("Degenerate glyph: {0}")]
    DegenerateGlyph(String),

    /// A point-size search passed its configured ceiling
    #[error("Size search for '{font}' exceeded {max_size}pt: {reason}")]
    UnboundedProbe {
        font: String,
        max_size: u32,
        reason: String,
    },

    /// The rasterizer could not find or draw the requested font/glyph
    #[error("Rasterizer error: {0}")]
    Rasterizer(String),

    /// Invalid configuration or input data
    #[error("Config error: {0}")]
    Config(String),

    /// Image processing error
    #[error("Image error: {0}")]
    Image(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON job file error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
