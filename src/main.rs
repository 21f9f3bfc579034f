//! # Segglyph CLI
//!
//! Command-line interface for generating clock display glyphs.
//!
//! ## Usage
//!
//! ```bash
//! # Generate glyphs for every font listed in a job file
//! segglyph generate --config job.json
//!
//! # Generate from fonts given on the command line
//! segglyph generate --font "Roboto Mono=fonts/RobotoMono-Bold.ttf" --font spleen --out out
//!
//! # Show the sizes the auto-sizer picks
//! segglyph size --font spleen
//!
//! # Print the trimmed reference digit at the auto-sized size, nudged down by 2
//! segglyph preview --font spleen --nudge -2
//!
//! # Save the final rotated 1-bit glyph as PNG
//! segglyph preview --font spleen --glyph : --png colon.png
//! ```
//!
//! Set `RUST_LOG=debug` for per-file and per-size logging.

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use segglyph::{
    Bitmap, GlyphError,
    config::{FontSpec, FrameConfig, JobConfig},
    glyph::GlyphTask,
    job, pipeline,
    raster::{FontProbe, StyleFlags},
    sizing::AutoSizer,
};

/// Segglyph - Clock display glyph generator
#[derive(Parser, Debug)]
#[command(name = "segglyph")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate digit and colon artifacts for one or more fonts
    Generate {
        /// JSON job file (fonts given with --font are appended to it)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Font as NAME=PATH for a TTF/OTF file, or NAME for a built-in font
        #[arg(long = "font", value_name = "FONT", value_parser = parse_font_arg)]
        fonts: Vec<FontSpec>,

        /// Output directory (overrides the job file)
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,

        #[command(flatten)]
        frame: FrameArgs,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Print the baseline and flush point sizes for a font
    Size {
        /// Font as NAME=PATH or a built-in NAME
        #[arg(long, value_parser = parse_font_arg)]
        font: FontSpec,

        #[command(flatten)]
        frame: FrameArgs,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Show a glyph at a chosen or auto-sized point size
    Preview {
        /// Font as NAME=PATH or a built-in NAME
        #[arg(long, value_parser = parse_font_arg)]
        font: FontSpec,

        /// Fixed point size (skips auto-sizing)
        #[arg(long)]
        size: Option<u32>,

        /// Points to add to the auto-sized result
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        nudge: i32,

        /// Glyph to show (defaults to the reference digit)
        #[arg(long)]
        glyph: Option<char>,

        /// Save the final rotated glyph as PNG instead of printing ASCII
        #[arg(long, value_name = "FILE")]
        png: Option<PathBuf>,

        #[command(flatten)]
        frame: FrameArgs,

        #[command(flatten)]
        style: StyleArgs,
    },
}

/// Frame overrides on top of the 32x128 preset
#[derive(Args, Debug, Default)]
struct FrameArgs {
    /// Frame width in pixels, before rotation
    #[arg(long)]
    width: Option<usize>,

    /// Frame height in pixels, before rotation
    #[arg(long)]
    height: Option<usize>,

    /// Digit that must span the canvas after auto-sizing
    #[arg(long)]
    reference_digit: Option<u8>,

    /// Ceiling for point-size searches
    #[arg(long)]
    max_size: Option<u32>,
}

impl FrameArgs {
    fn apply(&self, base: FrameConfig) -> Result<FrameConfig, GlyphError> {
        let frame = FrameConfig {
            width: self.width.unwrap_or(base.width),
            height: self.height.unwrap_or(base.height),
            reference_digit: self.reference_digit.unwrap_or(base.reference_digit),
            max_point_size: self.max_size.unwrap_or(base.max_point_size),
        };
        frame.validate()?;
        Ok(frame)
    }
}

/// Face selection for fonts given on the command line
#[derive(Args, Debug, Default)]
struct StyleArgs {
    /// Use the regular weight instead of bold
    #[arg(long)]
    regular: bool,

    /// Use the italic face
    #[arg(long)]
    italic: bool,
}

impl StyleArgs {
    fn flags(&self) -> StyleFlags {
        StyleFlags {
            bold: !self.regular,
            italic: self.italic,
        }
    }
}

fn parse_font_arg(arg: &str) -> Result<FontSpec, String> {
    match arg.split_once('=') {
        Some((name, path)) if !name.trim().is_empty() && !path.trim().is_empty() => {
            Ok(FontSpec::new(name.trim()).path(path.trim()))
        }
        Some(_) => Err(format!("expected NAME=PATH, got '{}'", arg)),
        None if !arg.trim().is_empty() => Ok(FontSpec::new(arg.trim())),
        None => Err("font name must not be empty".to_string()),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), GlyphError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            config,
            fonts,
            out,
            frame,
            style,
        } => {
            let mut job = match config {
                Some(path) => JobConfig::load(&path)?,
                None => JobConfig::new(".", FrameConfig::default(), Vec::new()),
            };
            job.frame = frame.apply(job.frame)?;
            job.fonts
                .extend(fonts.into_iter().map(|f| f.style(style.flags())));
            if let Some(out) = out {
                job.output_dir = out;
            }

            let summary = job::run(&job)?;
            for report in &summary.reports {
                println!(
                    "{} @ {}pt -> {}",
                    report.name,
                    report.point_size,
                    report.dir.display()
                );
            }
            if !summary.is_success() {
                return Err(GlyphError::Config(format!(
                    "{} of {} fonts failed",
                    summary.failures.len(),
                    job.fonts.len()
                )));
            }
        }

        Commands::Size { font, frame, style } => {
            let frame = frame.apply(FrameConfig::default())?;
            let font = font.style(style.flags());
            let rasterizer = font.rasterizer()?;
            let sizer = AutoSizer::new(rasterizer.as_ref(), frame);

            let baseline = sizer.baseline_size(&font.name, font.style)?;
            let flush = sizer.adjust_until_flush(&FontProbe::new(
                font.name.clone(),
                font.style,
                baseline,
            ))?;
            println!("{} ({})", font.name, font.style);
            println!("  baseline: {}pt", baseline);
            println!("  flush:    {}pt", flush);
        }

        Commands::Preview {
            font,
            size,
            nudge,
            glyph,
            png,
            frame,
            style,
        } => {
            let frame = frame.apply(FrameConfig::default())?;
            let font = font.style(style.flags());
            let rasterizer = font.rasterizer()?;
            let sizer = AutoSizer::new(rasterizer.as_ref(), frame);

            let size = match size {
                Some(size) => size,
                None => sizer.nudge(sizer.auto_size(&font.name, font.style)?, nudge),
            };
            let probe = FontProbe::new(font.name.clone(), font.style, size);
            println!("{} @ {}pt", font.name, size);

            let task = match glyph {
                None => GlyphTask::digit(frame.reference_digit)?,
                Some(':') => GlyphTask::Colon,
                Some(ch) => GlyphTask::digit(ch.to_digit(10).ok_or_else(|| {
                    GlyphError::Config(format!("no clock glyph for {:?}", ch))
                })? as u8)?,
            };

            let canvas = rasterizer.render(task.character(), &probe, frame.width, frame.height)?;
            if let Some(png_path) = png {
                let rotated = pipeline::normalize(canvas, frame.width, frame.height)?;
                save_png(&png_path, &rotated)?;
                println!("Saved to {}", png_path.display());
            } else {
                let trimmed = pipeline::trim::trim_symmetric(canvas)?;
                let pad = pipeline::padding::padding(&trimmed);
                print!("{}", trimmed.to_ascii());
                println!("padding: {} left, {} right", pad.left, pad.right);
            }
        }
    }

    Ok(())
}

/// Save a bitmap as a PNG image, on pixels white
fn save_png(path: &Path, bitmap: &Bitmap) -> Result<(), GlyphError> {
    use image::{GrayImage, Luma};

    let img = GrayImage::from_fn(bitmap.width() as u32, bitmap.height() as u32, |x, y| {
        if bitmap.get(x as usize, y as usize) {
            Luma([255u8])
        } else {
            Luma([0u8])
        }
    });

    img.save(path)
        .map_err(|e| GlyphError::Image(format!("Failed to save PNG: {}", e)))?;

    Ok(())
}
