//! Image codec for evidence attachments
//!
//! Downsamples an uploaded image and re-encodes it as a compact, self-contained
//! data URL that can be stored inline in the document. The caller-facing
//! contract is async so the codec slots into the same awaited flows as the
//! vault client, even though the work itself is CPU-bound.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::ImageFormat;
use log::debug;
use std::io::Cursor;
use thiserror::Error;

/// Width threshold above which images are scaled down
const MAX_WIDTH: u32 = 800;

/// JPEG re-encode quality (0.7 on a 0-1 scale)
const JPEG_QUALITY: u8 = 70;

/// Errors produced by the codec
#[derive(Error, Debug)]
pub enum CodecError {
    /// The declared media type maps to no known raster format
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    /// The input bytes could not be decoded as the declared format
    #[error("Failed to decode image: {0}")]
    Decode(image::ImageError),

    /// Re-encoding the resized raster failed
    #[error("Failed to encode image: {0}")]
    Encode(image::ImageError),
}

/// Compress an image into a data URL in its original declared media type.
///
/// Width is clamped to 800: wider images are scaled uniformly, and the height
/// of narrower images passes through unscaled while the width is still forced
/// to 800. This asymmetry is contractual; downstream rendering relies on it.
pub async fn compress_image(bytes: &[u8], mime_type: &str) -> Result<String, CodecError> {
    let format = ImageFormat::from_mime_type(mime_type)
        .ok_or_else(|| CodecError::UnsupportedMediaType(mime_type.to_string()))?;

    let img = image::load_from_memory_with_format(bytes, format).map_err(CodecError::Decode)?;

    let (width, height) = (img.width(), img.height());
    let target_height = if width > MAX_WIDTH {
        let scale = MAX_WIDTH as f64 / width as f64;
        (height as f64 * scale).round() as u32
    } else {
        height
    };
    let resized = img.resize_exact(MAX_WIDTH, target_height, FilterType::Triangle);

    debug!(
        "Compressed image {}x{} -> {}x{} ({})",
        width, height, MAX_WIDTH, target_height, mime_type
    );

    let mut buf = Vec::new();
    match format {
        ImageFormat::Jpeg => {
            let rgb = resized.to_rgb8();
            let mut encoder = JpegEncoder::new_with_quality(Cursor::new(&mut buf), JPEG_QUALITY);
            encoder.encode_image(&rgb).map_err(CodecError::Encode)?;
        }
        _ => {
            resized
                .write_to(&mut Cursor::new(&mut buf), format)
                .map_err(CodecError::Encode)?;
        }
    }

    Ok(format!("data:{};base64,{}", mime_type, BASE64.encode(&buf)))
}
