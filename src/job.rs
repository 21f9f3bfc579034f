//! # Batch Generation
//!
//! Drives the pipeline for a list of fonts and writes the artifacts.
//!
//! ## Per Font
//!
//! ```text
//! FontSpec ─► rasterizer ─► size ─► 11 glyphs (parallel) ─► write all
//! ```
//!
//! - The size is pinned by the font entry, or auto-sized and then nudged.
//! - The eleven glyphs are rendered and packed in memory with rayon.
//! - Files are written only when every glyph of the font succeeded, so a font
//!   that fails leaves no artifacts behind.
//!
//! A failing font does not stop the job. Its error is collected in the
//! [`JobSummary`] and the next font is processed.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::config::{FontSpec, FrameConfig, JobConfig};
use crate::error::GlyphError;
use crate::glyph::GlyphTask;
use crate::pipeline;
use crate::raster::{FontProbe, Rasterizer};
use crate::sizing::AutoSizer;

/// A packed glyph ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub task: GlyphTask,
    pub file_name: String,
    /// Width of the stored (rotated) bitmap
    pub width: usize,
    /// Height of the stored (rotated) bitmap
    pub height: usize,
    pub data: Vec<u8>,
}

/// Outcome of one font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontReport {
    pub name: String,
    pub point_size: u32,
    pub dir: PathBuf,
    pub files: Vec<PathBuf>,
}

/// Outcome of a whole job.
#[derive(Debug, Default)]
pub struct JobSummary {
    pub reports: Vec<FontReport>,
    pub failures: Vec<(String, GlyphError)>,
}

impl JobSummary {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Render, normalize and pack one glyph.
pub fn render_glyph(
    rasterizer: &dyn Rasterizer,
    probe: &FontProbe,
    frame: &FrameConfig,
    task: GlyphTask,
) -> Result<Artifact, GlyphError> {
    let canvas = rasterizer.render(task.character(), probe, frame.width, frame.height)?;
    let rotated = pipeline::normalize(canvas, frame.width, frame.height)
        .map_err(|e| annotate(e, probe, task))?;

    Ok(Artifact {
        task,
        file_name: task.file_name(frame),
        width: rotated.width(),
        height: rotated.height(),
        data: pipeline::pack::pack(&rotated),
    })
}

fn annotate(err: GlyphError, probe: &FontProbe, task: GlyphTask) -> GlyphError {
    match err {
        GlyphError::DegenerateGlyph(msg) => {
            GlyphError::DegenerateGlyph(format!("{} at {}: {}", task, probe, msg))
        }
        other => other,
    }
}

/// Render every clock glyph for one font, in parallel.
pub fn render_font(
    rasterizer: &dyn Rasterizer,
    probe: &FontProbe,
    frame: &FrameConfig,
) -> Result<Vec<Artifact>, GlyphError> {
    GlyphTask::ALL
        .par_iter()
        .map(|&task| render_glyph(rasterizer, probe, frame, task))
        .collect()
}

/// Point size for a font entry: pinned, or auto-sized and nudged.
pub fn resolve_size(
    rasterizer: &dyn Rasterizer,
    spec: &FontSpec,
    frame: &FrameConfig,
) -> Result<u32, GlyphError> {
    if let Some(size) = spec.size {
        if size == 0 {
            return Err(GlyphError::Config(format!(
                "fixed size for '{}' must be positive",
                spec.name
            )));
        }
        return Ok(size);
    }

    let sizer = AutoSizer::new(rasterizer, *frame);
    let size = sizer.auto_size(&spec.name, spec.style)?;
    Ok(sizer.nudge(size, spec.nudge))
}

/// Write artifacts into `dir`, creating it if needed.
///
/// All or nothing: if any write fails, the files this call already wrote are
/// removed again, and so is `dir` when this call created it.
pub fn write_artifacts(dir: &Path, artifacts: &[Artifact]) -> Result<Vec<PathBuf>, GlyphError> {
    let created = !dir.exists();
    std::fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        let path = dir.join(&artifact.file_name);
        if let Err(e) = std::fs::write(&path, &artifact.data) {
            log::warn!("failed to write {}: {}", path.display(), e);
            discard(dir, &written, created);
            return Err(e.into());
        }
        log::debug!("wrote {} ({} bytes)", path.display(), artifact.data.len());
        written.push(path);
    }
    Ok(written)
}

/// Best-effort removal of a partial write.
fn discard(dir: &Path, written: &[PathBuf], created: bool) {
    for path in written {
        let _ = std::fs::remove_file(path);
    }
    if created {
        let _ = std::fs::remove_dir(dir);
    }
}

/// Size, render and write one font.
pub fn generate_font(
    spec: &FontSpec,
    frame: &FrameConfig,
    output_dir: &Path,
) -> Result<FontReport, GlyphError> {
    let rasterizer = spec.rasterizer()?;
    let point_size = resolve_size(rasterizer.as_ref(), spec, frame)?;
    let probe = FontProbe::new(spec.name.clone(), spec.style, point_size);
    log::info!("{}: rendering at {}pt", spec.name, point_size);

    let artifacts = render_font(rasterizer.as_ref(), &probe, frame)?;

    let dir = output_dir.join(spec.dir_name());
    let files = write_artifacts(&dir, &artifacts)?;

    Ok(FontReport {
        name: spec.name.clone(),
        point_size,
        dir,
        files,
    })
}

/// Run every font in the job. Failures are collected, not fatal.
pub fn run(job: &JobConfig) -> Result<JobSummary, GlyphError> {
    job.validate()?;

    let mut summary = JobSummary::default();
    for spec in &job.fonts {
        match generate_font(spec, &job.frame, &job.output_dir) {
            Ok(report) => {
                log::info!(
                    "{}: {} files in {}",
                    report.name,
                    report.files.len(),
                    report.dir.display()
                );
                summary.reports.push(report);
            }
            Err(e) => {
                log::error!("{}: {}", spec.name, e);
                summary.failures.push((spec.name.clone(), e));
            }
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::{SpleenRasterizer, StyleFlags};

    #[test]
    fn test_render_glyph_artifact_shape() {
        let frame = FrameConfig::CLOCK_32X128;
        let probe = FontProbe::new("spleen", StyleFlags::BOLD, 64);
        let artifact = render_glyph(&SpleenRasterizer, &probe, &frame, GlyphTask::Digit(3)).unwrap();
        assert_eq!(artifact.file_name, "digit_3_128x32.bin");
        assert_eq!((artifact.width, artifact.height), (128, 32));
        assert_eq!(artifact.data.len(), frame.artifact_len());
    }

    #[test]
    fn test_render_font_covers_all_tasks_in_order() {
        let frame = FrameConfig::CLOCK_16X64;
        let probe = FontProbe::new("spleen-8x16", StyleFlags::BOLD, 32);
        let artifacts = render_font(&SpleenRasterizer, &probe, &frame).unwrap();
        let tasks: Vec<GlyphTask> = artifacts.iter().map(|a| a.task).collect();
        assert_eq!(tasks, GlyphTask::ALL.to_vec());
    }

    #[test]
    fn test_resolve_pinned_size() {
        let spec = FontSpec::new("spleen").size(40);
        let size = resolve_size(&SpleenRasterizer, &spec, &FrameConfig::CLOCK_32X128).unwrap();
        assert_eq!(size, 40);
    }

    #[test]
    fn test_resolve_zero_pinned_size() {
        let spec = FontSpec::new("spleen").size(0);
        assert!(matches!(
            resolve_size(&SpleenRasterizer, &spec, &FrameConfig::CLOCK_32X128),
            Err(GlyphError::Config(_))
        ));
    }

    #[test]
    fn test_degenerate_error_names_glyph() {
        // At 1pt the glyph samples a single background pixel of the cell.
        let probe = FontProbe::new("spleen", StyleFlags::REGULAR, 1);
        let err = render_glyph(
            &SpleenRasterizer,
            &probe,
            &FrameConfig::CLOCK_32X128,
            GlyphTask::Colon,
        )
        .unwrap_err();
        match err {
            GlyphError::DegenerateGlyph(msg) => assert!(msg.contains("colon")),
            other => panic!("unexpected error: {}", other),
        }
    }

    fn artifact(file_name: &str) -> Artifact {
        Artifact {
            task: GlyphTask::Colon,
            file_name: file_name.to_string(),
            width: 8,
            height: 1,
            data: vec![0xFF],
        }
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("segglyph-unit-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_failed_write_removes_created_dir() {
        let dir = scratch_dir("write-fresh");
        // the second name points into a directory that does not exist
        let artifacts = [artifact("a.bin"), artifact("missing/b.bin"), artifact("c.bin")];

        let err = write_artifacts(&dir, &artifacts).unwrap_err();
        assert!(matches!(err, GlyphError::Io(_)));
        assert!(!dir.exists());
    }

    #[test]
    fn test_failed_write_keeps_existing_files() {
        let dir = scratch_dir("write-existing");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("keep.txt"), b"x").unwrap();

        let artifacts = [artifact("a.bin"), artifact("missing/b.bin")];
        assert!(write_artifacts(&dir, &artifacts).is_err());

        assert!(dir.join("keep.txt").exists());
        assert!(!dir.join("a.bin").exists());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_write_artifacts_returns_paths() {
        let dir = scratch_dir("write-ok");
        let files = write_artifacts(&dir, &[artifact("a.bin"), artifact("b.bin")]).unwrap();
        assert_eq!(files, vec![dir.join("a.bin"), dir.join("b.bin")]);
        assert_eq!(std::fs::read(&files[1]).unwrap(), vec![0xFF]);
        let _ = std::fs::remove_dir_all(&dir);
    }
}
