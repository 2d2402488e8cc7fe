use std::fmt;
use std::path::PathBuf;

use linefill_core::GridError;

/// Failure reading or writing a raster file.
#[derive(Debug)]
pub enum ImageIoError {
    /// File missing, unreadable, or not a format the enabled codecs understand.
    Decode { path: PathBuf, source: image::ImageError },
    /// File decoded but does not form a valid grid (e.g. zero width).
    InvalidGrid { path: PathBuf, source: GridError },
    /// Grid is larger than the encoder can address.
    TooLarge { path: PathBuf, width: usize, height: usize },
    Encode { path: PathBuf, source: image::ImageError },
}

impl fmt::Display for ImageIoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode { path, source } => {
                write!(f, "failed to decode {}: {source}", path.display())
            }
            Self::InvalidGrid { path, source } => write!(f, "{}: {source}", path.display()),
            Self::TooLarge { path, width, height } => {
                write!(f, "cannot encode {}: {width}x{height} is too large", path.display())
            }
            Self::Encode { path, source } => {
                write!(f, "failed to encode {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ImageIoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode { source, .. } | Self::Encode { source, .. } => Some(source),
            Self::InvalidGrid { source, .. } => Some(source),
            Self::TooLarge { .. } => None,
        }
    }
}
