use std::fmt;

use crate::grid::{Channels, GridShape};

/// A grid could not be constructed from the given parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Width or height was zero.
    InvalidDimensions { width: usize, height: usize },
    /// Channel count other than 1, 3 or 4.
    UnsupportedChannels(usize),
    /// Raw buffer length does not equal `width * height * channels`.
    BufferLength { expected: usize, actual: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid dimensions {width}x{height}: width and height must be at least 1")
            }
            Self::UnsupportedChannels(n) => {
                write!(f, "unsupported channel count {n}: expected 1, 3 or 4")
            }
            Self::BufferLength { expected, actual } => {
                write!(f, "pixel buffer holds {actual} bytes, expected {expected}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// An internal invariant broke: a pixel did not have the length its grid declares.
///
/// These never come from user input. Channel counts are fixed once a grid is
/// built, so seeing one of these means a logic bug upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractViolation {
    /// Pixel written into a grid had the wrong number of channels.
    PixelSize { expected: usize, actual: usize },
    /// Pixel handed to RGBA coercion had a channel count other than 1, 3 or 4.
    UnsupportedChannels(usize),
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelSize { expected, actual } => {
                write!(f, "pixel size mismatch: grid has {expected} channels, pixel has {actual}")
            }
            Self::UnsupportedChannels(n) => {
                write!(f, "cannot coerce a {n}-channel pixel to RGBA")
            }
        }
    }
}

impl std::error::Error for ContractViolation {}

/// Stroke and color grids cannot be composited together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeMismatch {
    Dimensions { stroke: GridShape, color: GridShape },
    ChannelCount { stroke: Channels, color: Channels },
    /// Both grids agree, but the color grid is not RGBA.
    NotRgba(Channels),
}

impl fmt::Display for ShapeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dimensions { stroke, color } => write!(
                f,
                "stroke image is {}x{} but color image is {}x{}",
                stroke.width, stroke.height, color.width, color.height
            ),
            Self::ChannelCount { stroke, color } => write!(
                f,
                "stroke image has {} channels but color image has {}",
                stroke.count(),
                color.count()
            ),
            Self::NotRgba(channels) => write!(
                f,
                "images must be RGBA (4 channels), got {} channels",
                channels.count()
            ),
        }
    }
}

impl std::error::Error for ShapeMismatch {}

/// Failure of [`compose`](crate::compose::compose).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeError {
    Shape(ShapeMismatch),
    Contract(ContractViolation),
}

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shape(e) => write!(f, "{e}"),
            Self::Contract(e) => write!(f, "internal error: {e}"),
        }
    }
}

impl std::error::Error for ComposeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Shape(e) => Some(e),
            Self::Contract(e) => Some(e),
        }
    }
}

impl From<ShapeMismatch> for ComposeError {
    fn from(e: ShapeMismatch) -> Self {
        Self::Shape(e)
    }
}

impl From<ContractViolation> for ComposeError {
    fn from(e: ContractViolation) -> Self {
        Self::Contract(e)
    }
}
