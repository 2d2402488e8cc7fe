use std::path::Path;

use image::{ColorType, ImageFormat};
use linefill_core::{Channels, PixelGrid};

use super::ImageIoError;

/// Writes `grid` as a PNG at its own channel count.
///
/// The format is always PNG, whatever the extension of `path`.
pub fn encode_image(grid: &PixelGrid, path: impl AsRef<Path>) -> Result<(), ImageIoError> {
    let path = path.as_ref();
    let too_large = || ImageIoError::TooLarge {
        path: path.to_path_buf(),
        width: grid.width(),
        height: grid.height(),
    };
    let width = u32::try_from(grid.width()).map_err(|_| too_large())?;
    let height = u32::try_from(grid.height()).map_err(|_| too_large())?;

    let color = match grid.channels() {
        Channels::Gray => ColorType::L8,
        Channels::Rgb => ColorType::Rgb8,
        Channels::Rgba => ColorType::Rgba8,
    };

    image::save_buffer_with_format(path, grid.as_bytes(), width, height, color, ImageFormat::Png)
        .map_err(|source| ImageIoError::Encode { path: path.to_path_buf(), source })?;

    log::debug!("encoded {}x{} PNG to {}", width, height, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::decode_image;

    fn patterned(width: usize, height: usize, channels: Channels) -> PixelGrid {
        let len = width * height * channels.count();
        let data = (0..len).map(|i| (i * 37 % 251) as u8).collect();
        PixelGrid::from_raw(width, height, channels, data).unwrap()
    }

    #[test]
    fn round_trips_every_channel_layout() {
        let dir = tempfile::tempdir().unwrap();
        for (i, channels) in [Channels::Gray, Channels::Rgb, Channels::Rgba].into_iter().enumerate() {
            let grid = patterned(5, 3, channels);
            let path = dir.path().join(format!("rt{i}.png"));
            encode_image(&grid, &path).unwrap();
            assert_eq!(decode_image(&path).unwrap(), grid, "{channels:?}");
        }
    }

    #[test]
    fn writes_png_regardless_of_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");
        let grid = patterned(2, 2, Channels::Rgba);
        encode_image(&grid, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn unwritable_path_is_encode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("out.png");
        let grid = patterned(1, 1, Channels::Gray);
        let err = encode_image(&grid, &path).unwrap_err();
        assert!(matches!(err, ImageIoError::Encode { .. }));
    }
}
