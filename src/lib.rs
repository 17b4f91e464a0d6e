//! identicon: deterministic 5x5 block avatars
//!
//! This crate turns an arbitrary piece of text, such as a username or an
//! email address, into a small symmetric block image. The same text (in
//! any letter case) always yields the same image.
//!
//! # Example
//!
//! ```
//! use identicon::{AvatarSpec, Identicon, encode_png, parse_hex_color};
//!
//! let spec = AvatarSpec::new("sometext", 320, 10)
//!     .with_background(parse_hex_color("ffffff").unwrap());
//!
//! let img = spec.create().unwrap();
//! let png = encode_png(&img).unwrap();
//! assert!(!png.is_empty());
//! ```
//!
//! # Pipeline
//!
//! 1. **Digest** ([`Digest`]) - SHA-1 of the lower-cased text
//! 2. **Pattern** ([`Palette`]) - mirror-symmetric 5x5 grid from digest bytes 3..18
//! 3. **Raster** - the grid scaled into the padded, centered canvas
//!
//! Encoding and file output live in a separate layer ([`OutputFormat`],
//! [`save_to_file`]) that only consumes the finished [`image::RgbaImage`].

mod avatar;
mod color;
mod digest;
mod encode;
mod error;
mod pattern;
mod profile;
mod raster;

pub use avatar::{
    AvatarSpec, DEFAULT_PADDING, DEFAULT_SIZE, Identicon, MAX_PADDING, MIN_PADDING, create,
};
pub use color::{Color, DEFAULT_BACKGROUND, derived_foreground, parse_hex_color, to_hex};
pub use digest::{DIGEST_LEN, Digest};
pub use encode::{
    DEFAULT_JPEG_QUALITY, OutputFormat, data_uri, decode_png, encode_base64, encode_jpeg,
    encode_png, save_to_file,
};
pub use error::{IdenticonError, Result};
pub use pattern::{GRID_SIZE, MIRROR_COLUMNS, PATTERN_BYTES, Palette};
pub use profile::AvatarProfile;
pub use raster::{RectPx, absolute_padding, align_center, rasterize};

/// The rendered output: a `size x size` non-premultiplied RGBA buffer.
pub type PixelBuffer = image::RgbaImage;
