use crate::error::{ContractViolation, GridError};

/// Number of interleaved 8-bit channels per pixel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Channels {
    Gray,
    Rgb,
    Rgba,
}

impl Channels {
    #[inline]
    pub const fn count(self) -> usize {
        match self {
            Self::Gray => 1,
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }
}

impl TryFrom<usize> for Channels {
    type Error = GridError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Self::Gray),
            3 => Ok(Self::Rgb),
            4 => Ok(Self::Rgba),
            other => Err(GridError::UnsupportedChannels(other)),
        }
    }
}

/// Width, height and channel layout of a grid, without its pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridShape {
    pub width: usize,
    pub height: usize,
    pub channels: Channels,
}

/// Pixel position. Origin top-left, +X right, +Y down.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    #[inline]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Owned raster buffer: row-major, pixel-interleaved 8-bit channels.
///
/// Pixels are addressed by *offset* (`x + y * width`), not byte index.
/// The buffer length is always `width * height * channels`; every
/// constructor checks this and nothing hands out a resizable view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    channels: Channels,
    data: Vec<u8>,
}

impl PixelGrid {
    /// Creates an all-zero grid.
    pub fn new(width: usize, height: usize, channels: Channels) -> Result<Self, GridError> {
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            channels,
            data: vec![0; width * height * channels.count()],
        })
    }

    /// Wraps an existing buffer, validating its length against the shape.
    pub fn from_raw(
        width: usize,
        height: usize,
        channels: Channels,
        data: Vec<u8>,
    ) -> Result<Self, GridError> {
        check_dimensions(width, height)?;
        let expected = width * height * channels.count();
        if data.len() != expected {
            return Err(GridError::BufferLength { expected, actual: data.len() });
        }
        Ok(Self { width, height, channels, data })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn channels(&self) -> Channels {
        self.channels
    }

    #[inline]
    pub fn shape(&self) -> GridShape {
        GridShape { width: self.width, height: self.height, channels: self.channels }
    }

    /// Number of pixels (not bytes).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Linear offset of `(x, y)`. Callers pass coordinates already known to be in bounds.
    #[inline]
    pub fn offset_of(&self, x: usize, y: usize) -> usize {
        x + y * self.width
    }

    #[inline]
    pub fn coord_of(&self, offset: usize) -> Coord {
        Coord::new(offset % self.width, offset / self.width)
    }

    /// Offset reached by stepping `(dx, dy)` from `origin`, or `None` if that
    /// leaves the grid.
    pub fn translate(&self, origin: usize, dx: isize, dy: isize) -> Option<usize> {
        let Coord { x, y } = self.coord_of(origin);
        let x = x.checked_add_signed(dx)?;
        let y = y.checked_add_signed(dy)?;
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.offset_of(x, y))
    }

    /// The `channels`-length pixel at `offset`.
    ///
    /// # Panics
    /// If `offset >= pixel_count()`.
    #[inline]
    pub fn pixel_at(&self, offset: usize) -> &[u8] {
        assert!(offset < self.pixel_count(), "pixel offset {offset} out of range");
        let n = self.channels.count();
        &self.data[offset * n..offset * n + n]
    }

    /// Overwrites the whole pixel at `offset`.
    pub fn set_pixel_at(&mut self, offset: usize, pixel: &[u8]) -> Result<(), ContractViolation> {
        let n = self.channels.count();
        if pixel.len() != n {
            return Err(ContractViolation::PixelSize { expected: n, actual: pixel.len() });
        }
        assert!(offset < self.pixel_count(), "pixel offset {offset} out of range");
        self.data[offset * n..offset * n + n].copy_from_slice(pixel);
        Ok(())
    }
}

fn check_dimensions(width: usize, height: usize) -> Result<(), GridError> {
    if width == 0 || height == 0 {
        return Err(GridError::InvalidDimensions { width, height });
    }
    Ok(())
}
