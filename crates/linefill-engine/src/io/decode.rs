use std::path::Path;

use image::{DynamicImage, ImageError, ImageReader};
use linefill_core::{Channels, PixelGrid};

use super::ImageIoError;

/// Loads a raster file into an owned grid.
///
/// The codec is picked from the file contents, not its extension.
///
/// 8-bit gray, RGB and RGBA keep their layout. Anything else is normalized to
/// 8 bits: layouts with alpha become RGBA, other color layouts RGB, the rest gray.
pub fn decode_image(path: impl AsRef<Path>) -> Result<PixelGrid, ImageIoError> {
    let path = path.as_ref();
    let decode_err = |source: ImageError| ImageIoError::Decode { path: path.to_path_buf(), source };
    let img = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| decode_err(ImageError::IoError(e)))?
        .decode()
        .map_err(&decode_err)?;
    let width = img.width() as usize;
    let height = img.height() as usize;
    let (channels, data) = into_channels(img);

    log::debug!(
        "decoded {} as {width}x{height} with {} channels",
        path.display(),
        channels.count()
    );

    PixelGrid::from_raw(width, height, channels, data)
        .map_err(|source| ImageIoError::InvalidGrid { path: path.to_path_buf(), source })
}

fn into_channels(img: DynamicImage) -> (Channels, Vec<u8>) {
    match img {
        DynamicImage::ImageLuma8(buf) => (Channels::Gray, buf.into_raw()),
        DynamicImage::ImageRgb8(buf) => (Channels::Rgb, buf.into_raw()),
        DynamicImage::ImageRgba8(buf) => (Channels::Rgba, buf.into_raw()),
        other if other.color().has_alpha() => (Channels::Rgba, other.into_rgba8().into_raw()),
        other if other.color().has_color() => (Channels::Rgb, other.into_rgb8().into_raw()),
        other => (Channels::Gray, other.into_luma8().into_raw()),
    }
}
