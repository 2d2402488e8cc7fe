//! Raster file I/O through the `image` crate.
//!
//! - `decode_image`: read a PNG/JPEG/etc. into an owned [`PixelGrid`](linefill_core::PixelGrid).
//! - `encode_image`: write a grid to a PNG at its own channel count.

mod decode;
mod encode;
mod error;

pub use decode::decode_image;
pub use encode::encode_image;
pub use error::ImageIoError;
