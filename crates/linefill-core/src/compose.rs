use crate::coerce::to_rgba;
use crate::error::{ComposeError, ShapeMismatch};
use crate::grid::{Channels, PixelGrid};
use crate::search::{NearestSearch, DEFAULT_SEARCH_BUDGET};
use crate::visibility::{alpha_exceeds, OUTLINE_THRESHOLD, VISIBILITY_THRESHOLD};

/// Compositing parameters.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ComposeOptions {
    /// Stroke alpha strictly above this marks an outline pixel.
    pub outline_threshold: u8,
    /// Color alpha strictly above this counts as fill.
    pub visibility_threshold: u8,
    /// Dequeues allowed per search.
    pub search_budget: usize,
}

impl ComposeOptions {
    /// Whether a stroke-grid pixel marks an outline.
    #[inline]
    pub fn is_outline(&self, pixel: &[u8]) -> bool {
        alpha_exceeds(pixel, self.outline_threshold)
    }
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            outline_threshold: OUTLINE_THRESHOLD,
            visibility_threshold: VISIBILITY_THRESHOLD,
            search_budget: DEFAULT_SEARCH_BUDGET,
        }
    }
}

/// Counters collected during one compositing pass.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ComposeStats {
    pub pixels: usize,
    /// Stroke pixels classified as outline.
    pub outline: usize,
    /// Outline pixels whose color was replaced.
    pub replaced: usize,
    /// Outline pixels left as-is because the search found nothing in budget.
    pub exhausted: usize,
}

/// Output of a compositing pass.
#[derive(Debug, Clone)]
pub struct Composite {
    pub grid: PixelGrid,
    pub stats: ComposeStats,
}

/// [`compose_with`] using default thresholds and budget.
pub fn compose(stroke: &PixelGrid, color: &PixelGrid) -> Result<Composite, ComposeError> {
    compose_with(stroke, color, &ComposeOptions::default())
}

/// Replaces every outline pixel of `stroke` with the nearest visible pixel of `color`.
///
/// The output starts as a copy of `color`. Pixels that are not outline, and
/// outline pixels whose search runs dry, keep their color-grid value.
pub fn compose_with(
    stroke: &PixelGrid,
    color: &PixelGrid,
    options: &ComposeOptions,
) -> Result<Composite, ComposeError> {
    check_shapes(stroke, color)?;

    let mut output = color.clone();
    let mut search = NearestSearch::new(options.search_budget, options.visibility_threshold);
    let mut stats = ComposeStats { pixels: stroke.pixel_count(), ..Default::default() };

    for offset in 0..stroke.pixel_count() {
        if !options.is_outline(stroke.pixel_at(offset)) {
            continue;
        }
        stats.outline += 1;

        match search.find(color, offset) {
            Some(found) => {
                let rgba = to_rgba(color.pixel_at(found))?;
                output.set_pixel_at(offset, &rgba)?;
                stats.replaced += 1;
            }
            None => stats.exhausted += 1,
        }
    }

    Ok(Composite { grid: output, stats })
}

fn check_shapes(stroke: &PixelGrid, color: &PixelGrid) -> Result<(), ShapeMismatch> {
    if stroke.width() != color.width() || stroke.height() != color.height() {
        return Err(ShapeMismatch::Dimensions { stroke: stroke.shape(), color: color.shape() });
    }
    if stroke.channels() != color.channels() {
        return Err(ShapeMismatch::ChannelCount {
            stroke: stroke.channels(),
            color: color.channels(),
        });
    }
    if color.channels() != Channels::Rgba {
        return Err(ShapeMismatch::NotRgba(color.channels()));
    }
    Ok(())
}
