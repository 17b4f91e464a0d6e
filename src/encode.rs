//! Encoding rendered identicons and writing them out.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{DynamicImage, ExtendedColorType, ImageEncoder, ImageFormat, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// JPEG quality used when none is given.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Output encodings supported for a rendered identicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Png,
    Jpeg,
    /// PNG bytes as a base64 `data:` URI.
    Base64,
}

impl OutputFormat {
    /// File name extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Base64 => "txt",
        }
    }

    /// Encodes `img` in this format. `quality` only affects JPEG.
    pub fn encode(&self, img: &RgbaImage, quality: u8) -> Result<Vec<u8>> {
        match self {
            Self::Png => encode_png(img),
            Self::Jpeg => encode_jpeg(img, quality),
            Self::Base64 => Ok(data_uri(&encode_png(img)?, ImageFormat::Png).into_bytes()),
        }
    }
}

/// Encodes `img` as PNG with the best compression setting.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    PngEncoder::new_with_quality(&mut buf, CompressionType::Best, FilterType::Adaptive)
        .write_image(img.as_raw(), img.width(), img.height(), ExtendedColorType::Rgba8)?;
    Ok(buf)
}

/// Encodes `img` as JPEG. The alpha channel is dropped and `quality` is
/// clamped to 1-100.
pub fn encode_jpeg(img: &RgbaImage, quality: u8) -> Result<Vec<u8>> {
    let rgb = DynamicImage::ImageRgba8(img.clone()).to_rgb8();
    let mut buf = Vec::new();
    JpegEncoder::new_with_quality(&mut buf, quality.clamp(1, 100)).encode(
        rgb.as_raw(),
        rgb.width(),
        rgb.height(),
        ExtendedColorType::Rgb8,
    )?;
    Ok(buf)
}

/// Decodes PNG bytes back into an RGBA buffer.
pub fn decode_png(data: &[u8]) -> Result<RgbaImage> {
    Ok(image::load_from_memory_with_format(data, ImageFormat::Png)?.to_rgba8())
}

/// Standard base64 with padding, suitable for an HTML `img` tag.
pub fn encode_base64(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Wraps encoded image bytes in a `data:` URI.
pub fn data_uri(data: &[u8], format: ImageFormat) -> String {
    format!(
        "data:{};base64,{}",
        format.to_mime_type(),
        encode_base64(data)
    )
}

/// Writes `data` to `path`, replacing any existing file.
pub fn save_to_file(path: impl AsRef<Path>, data: &[u8]) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    let mut file = options.open(path.as_ref())?;
    file.write_all(data)?;
    log::debug!("wrote {} bytes to {}", data.len(), path.as_ref().display());
    Ok(())
}
