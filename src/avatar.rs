//! Avatar settings and the identicon creation entry point.

use image::RgbaImage;
use log::{debug, trace};

use crate::color::{self, Color, DEFAULT_BACKGROUND};
use crate::digest::Digest;
use crate::error::{IdenticonError, Result};
use crate::pattern::Palette;
use crate::raster;

/// Default side length in pixels.
pub const DEFAULT_SIZE: i32 = 320;

/// Default padding, in percent of the side length.
pub const DEFAULT_PADDING: i32 = 10;

pub const MIN_PADDING: i32 = 0;
pub const MAX_PADDING: i32 = 10;

// ============================================================================
// Identicon Trait
// ============================================================================

/// Something that can be turned into an identicon image.
pub trait Identicon {
    /// Renders the image, failing only on invalid settings.
    fn create(&self) -> Result<RgbaImage>;
}

// ============================================================================
// AvatarSpec
// ============================================================================

/// Everything needed to render one 5x5 block avatar.
///
/// `None` colors are resolved at creation time: the background falls back
/// to [`DEFAULT_BACKGROUND`] and the foreground is derived from the text.
///
/// # Example
///
/// ```
/// use identicon::{AvatarSpec, Identicon};
///
/// let img = AvatarSpec::new("sometext", 64, 10).create().unwrap();
/// assert_eq!(img.dimensions(), (64, 64));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AvatarSpec {
    /// Case insensitive text.
    pub text: String,

    /// Side length in pixels. Must be at least 1.
    pub size: i32,

    /// Padding in percent of `size`. Values outside 0-10 are clamped.
    pub padding: i32,

    pub background: Option<Color>,
    pub foreground: Option<Color>,
}

impl AvatarSpec {
    /// Creates a spec with derived colors.
    pub fn new(text: impl Into<String>, size: i32, padding: i32) -> Self {
        Self {
            text: text.into(),
            size,
            padding,
            background: None,
            foreground: None,
        }
    }

    /// Sets an explicit background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Sets an explicit foreground color.
    pub fn with_foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    /// Padding percentage clamped into `MIN_PADDING..=MAX_PADDING`.
    pub fn clamped_padding(&self) -> i32 {
        self.padding.clamp(MIN_PADDING, MAX_PADDING)
    }

    /// Returns `(background, foreground)`, with explicit colors taking
    /// precedence over the defaults derived from `digest`.
    pub fn resolve_colors(&self, digest: &Digest) -> (Color, Color) {
        let background = self.background.unwrap_or(DEFAULT_BACKGROUND);
        let foreground = self
            .foreground
            .unwrap_or_else(|| color::derived_foreground(digest));
        (background, foreground)
    }

    fn validated_size(&self) -> Result<u32> {
        match u32::try_from(self.size) {
            Ok(size) if size >= 1 => Ok(size),
            _ => Err(IdenticonError::InvalidSize(self.size)),
        }
    }
}

impl Default for AvatarSpec {
    fn default() -> Self {
        Self::new(String::new(), DEFAULT_SIZE, DEFAULT_PADDING)
    }
}

impl Identicon for AvatarSpec {
    fn create(&self) -> Result<RgbaImage> {
        create(self)
    }
}

/// Renders the identicon described by `spec`.
///
/// Fails with [`IdenticonError::InvalidSize`] before doing any work when
/// `spec.size` is not positive. The padding is clamped, never rejected.
pub fn create(spec: &AvatarSpec) -> Result<RgbaImage> {
    let size = spec.validated_size()?;
    let padding = raster::absolute_padding(spec.clamped_padding() as u32, size);

    let digest = Digest::from_text(&spec.text);
    let (background, foreground) = spec.resolve_colors(&digest);
    let palette = Palette::mix(digest.pattern_bytes());

    debug!(
        "creating identicon: text_len={} size={} padding={}px block={}px",
        spec.text.len(),
        size,
        padding,
        raster::block_size(&raster::align_center(size, padding)),
    );
    trace!("block pattern:\n{palette}");

    Ok(raster::rasterize(
        &palette,
        size,
        padding,
        color::to_pixel(&background),
        color::to_pixel(&foreground),
    ))
}
