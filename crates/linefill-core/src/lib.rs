//! Pixel grids and the nearest-visible-pixel compositor behind **linefill**.
//!
//! Given a *stroke* mask and a *color* fill of the same size, every stroke
//! pixel marked as outline is replaced by the first visible color pixel a
//! bounded diagonal flood fill reaches from the same position.
//!
//! This crate is intentionally dependency-free: no codecs, no logger. Image
//! files and diagnostics live in `linefill-engine`.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`grid`] | `PixelGrid`, `Channels`, `Coord`, offset arithmetic |
//! | [`visibility`] | `alpha_exceeds`, the two alpha thresholds |
//! | [`search`] | `NearestSearch` (incl. `is_visible`), `nearest_visible` |
//! | [`compose`] | `compose`, `compose_with`, `ComposeOptions` (incl. `is_outline`), `ComposeStats` |
//! | [`coerce`] | `to_rgba` |
//! | [`error`] | `GridError`, `ShapeMismatch`, `ContractViolation`, `ComposeError` |
//!
//! # Quick start
//!
//! ```rust
//! use linefill_core::{compose, Channels, PixelGrid};
//!
//! let stroke = PixelGrid::from_raw(2, 2, Channels::Rgba, [
//!     [0, 0, 0, 200], [0, 0, 0, 0],
//!     [0, 0, 0, 0],   [0, 0, 0, 0],
//! ].concat()).unwrap();
//! let color = PixelGrid::from_raw(2, 2, Channels::Rgba, [
//!     [0, 0, 0, 0],   [0, 0, 0, 0],
//!     [0, 0, 0, 0],   [10, 20, 30, 255],
//! ].concat()).unwrap();
//!
//! let out = compose(&stroke, &color).unwrap();
//! assert_eq!(out.grid.pixel_at(0), &[10, 20, 30, 255]);
//! ```

pub mod coerce;
pub mod compose;
pub mod error;
pub mod grid;
pub mod search;
pub mod visibility;

pub use coerce::to_rgba;
pub use compose::{compose, compose_with, ComposeOptions, ComposeStats, Composite};
pub use error::{ComposeError, ContractViolation, GridError, ShapeMismatch};
pub use grid::{Channels, Coord, GridShape, PixelGrid};
pub use search::{nearest_visible, NearestSearch, DEFAULT_SEARCH_BUDGET};
pub use visibility::{alpha_exceeds, OUTLINE_THRESHOLD, VISIBILITY_THRESHOLD};
