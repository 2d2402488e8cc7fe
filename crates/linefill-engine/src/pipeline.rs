use std::path::PathBuf;

use anyhow::{Context, Result};
use linefill_core::{compose_with, ComposeOptions, ComposeStats};

use crate::io::{decode_image, encode_image};

/// Output file used when none is given.
pub const DEFAULT_OUTPUT_PATH: &str = "opt.png";

/// One decode → compose → encode run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub stroke_path: PathBuf,
    pub color_path: PathBuf,
    pub output_path: PathBuf,
    pub compose: ComposeOptions,
}

impl RunConfig {
    pub fn new(stroke_path: impl Into<PathBuf>, color_path: impl Into<PathBuf>) -> Self {
        Self {
            stroke_path: stroke_path.into(),
            color_path: color_path.into(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            compose: ComposeOptions::default(),
        }
    }

    pub fn with_output(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }
}

/// Decodes both inputs, composites them and writes the result.
///
/// Nothing is written unless compositing succeeds.
pub fn run(config: &RunConfig) -> Result<ComposeStats> {
    let stroke = decode_image(&config.stroke_path).context("failed to load stroke image")?;
    let color = decode_image(&config.color_path).context("failed to load color image")?;
    log::info!(
        "stroke {}x{} ({} ch), color {}x{} ({} ch)",
        stroke.width(),
        stroke.height(),
        stroke.channels().count(),
        color.width(),
        color.height(),
        color.channels().count()
    );

    let composite = compose_with(&stroke, &color, &config.compose)
        .context("cannot composite stroke and color images")?;
    let stats = composite.stats;
    log::info!(
        "{} outline pixels of {}: {} replaced, {} left unchanged",
        stats.outline,
        stats.pixels,
        stats.replaced,
        stats.exhausted
    );
    if stats.exhausted > 0 {
        log::debug!(
            "{} searches exhausted a budget of {} steps",
            stats.exhausted,
            config.compose.search_budget
        );
    }

    encode_image(&composite.grid, &config.output_path).context("failed to write output image")?;
    log::info!("wrote {}", config.output_path.display());

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use linefill_core::{Channels, ComposeError, PixelGrid, ShapeMismatch};
    use std::path::Path;

    fn write_rgba(path: &Path, width: usize, height: usize, pixels: &[[u8; 4]]) {
        let grid = PixelGrid::from_raw(width, height, Channels::Rgba, pixels.concat()).unwrap();
        encode_image(&grid, path).unwrap();
    }

    #[test]
    fn composites_files_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let stroke = dir.path().join("stroke.png");
        let color = dir.path().join("color.png");
        let out = dir.path().join("out.png");
        write_rgba(&stroke, 2, 2, &[[0, 0, 0, 200], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
        write_rgba(&color, 2, 2, &[[0, 0, 0, 0], [1, 1, 1, 0], [2, 2, 2, 0], [10, 20, 30, 255]]);

        let stats = run(&RunConfig::new(&stroke, &color).with_output(&out)).unwrap();
        assert_eq!(stats.replaced, 1);

        let result = decode_image(&out).unwrap();
        assert_eq!(result.pixel_at(0), &[10, 20, 30, 255]);
        assert_eq!(result.pixel_at(1), &[1, 1, 1, 0]);
        assert_eq!(result.pixel_at(2), &[2, 2, 2, 0]);
        assert_eq!(result.pixel_at(3), &[10, 20, 30, 255]);
    }

    #[test]
    fn mismatch_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let stroke = dir.path().join("stroke.png");
        let color = dir.path().join("color.png");
        let out = dir.path().join("out.png");
        write_rgba(&stroke, 4, 4, &[[0, 0, 0, 255]; 16]);
        write_rgba(&color, 4, 5, &[[0, 0, 0, 255]; 20]);

        let err = run(&RunConfig::new(&stroke, &color).with_output(&out)).unwrap_err();
        let shape = err.downcast_ref::<ComposeError>().unwrap();
        assert!(matches!(shape, ComposeError::Shape(ShapeMismatch::Dimensions { .. })));
        assert!(!out.exists());
    }

    #[test]
    fn rgb_inputs_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let stroke = dir.path().join("stroke.png");
        let color = dir.path().join("color.png");
        let rgb = PixelGrid::new(3, 3, Channels::Rgb).unwrap();
        encode_image(&rgb, &stroke).unwrap();
        encode_image(&rgb, &color).unwrap();

        let err = run(&RunConfig::new(&stroke, &color).with_output(dir.path().join("o.png")))
            .unwrap_err();
        assert!(format!("{err:#}").contains("RGBA"));
    }

    #[test]
    fn missing_input_names_the_role() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(&RunConfig::new(dir.path().join("a.png"), dir.path().join("b.png")))
            .unwrap_err();
        assert!(err.to_string().contains("stroke"));
    }

    #[test]
    fn default_output_path() {
        let config = RunConfig::new("s.png", "c.png");
        assert_eq!(config.output_path, PathBuf::from(DEFAULT_OUTPUT_PATH));
        assert_eq!(config.compose, ComposeOptions::default());
    }
}
