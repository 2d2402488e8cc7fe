//! Alpha thresholds.
//!
//! Two thresholds exist and they are not interchangeable:
//! - [`VISIBILITY_THRESHOLD`] classifies *color* pixels during the search.
//! - [`OUTLINE_THRESHOLD`] classifies *stroke* pixels during compositing.
//!
//! The predicates built on them are
//! [`NearestSearch::is_visible`](crate::search::NearestSearch::is_visible) and
//! [`ComposeOptions::is_outline`](crate::compose::ComposeOptions::is_outline),
//! each carrying its own overridable threshold.

/// Color pixels with alpha strictly above this are visible fill.
pub const VISIBILITY_THRESHOLD: u8 = 50;

/// Stroke pixels with alpha strictly above this are outline and get replaced.
pub const OUTLINE_THRESHOLD: u8 = 60;

/// `true` if `pixel` has no alpha channel, or its alpha is strictly above `threshold`.
///
/// Only 4-channel pixels carry alpha; anything else counts as opaque.
#[inline]
pub fn alpha_exceeds(pixel: &[u8], threshold: u8) -> bool {
    match pixel {
        [_, _, _, a] => *a > threshold,
        _ => true,
    }
}
