//! Rasterization of a [`Palette`] into an RGBA pixel buffer.

use image::{Rgba, RgbaImage};

use crate::pattern::{GRID_SIZE, Palette};

/// A rectangle defined in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RectPx {
    /// X offset from the left edge of the image
    pub x: u32,
    /// Y offset from the top edge of the image
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl RectPx {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Creates a square rectangle spanning `min..max` on both axes.
    pub fn square(min: u32, max: u32) -> Self {
        let side = max.saturating_sub(min);
        Self::new(min, min, side, side)
    }

    /// Returns the right edge coordinate (x + width).
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Returns the bottom edge coordinate (y + height).
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }
}

/// Converts a padding percentage (already clamped) into pixels, truncating.
pub fn absolute_padding(percent: u32, size: u32) -> u32 {
    (u64::from(percent) * u64::from(size) / 100) as u32
}

/// Finds the square region covered by the block grid.
///
/// The slack left after removing `padding` pixels from each side is split
/// so the grid stays centered: `min = padding + ((size - 2 * padding) % 5) / 2`
/// and `max = size - min`.
pub fn align_center(size: u32, padding: u32) -> RectPx {
    let inner = size.saturating_sub(padding.saturating_mul(2));
    let rem = inner % GRID_SIZE as u32;
    let min = (padding + rem / 2).min(size);
    RectPx::square(min, size - min)
}

/// Fills `rect`, clipped to the image bounds, with `color`.
pub fn fill_rect(img: &mut RgbaImage, rect: RectPx, color: Rgba<u8>) {
    let right = rect.right().min(img.width());
    let bottom = rect.bottom().min(img.height());
    for y in rect.y..bottom {
        for x in rect.x..right {
            img.put_pixel(x, y, color);
        }
    }
}

/// Renders `palette` onto a `size x size` canvas.
///
/// Every filled cell becomes a `block x block` square of `foreground`,
/// where `block` is the drawable width divided by 5. Any remainder of that
/// division stays as background on the right and bottom edges of the
/// drawable region.
pub fn rasterize(
    palette: &Palette,
    size: u32,
    padding: u32,
    background: Rgba<u8>,
    foreground: Rgba<u8>,
) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(size, size, background);

    let area = align_center(size, padding);
    let block = block_size(&area);

    let mut top = area.y;
    for row in palette.rows() {
        let mut left = area.x;
        for filled in row {
            if *filled {
                fill_rect(&mut img, RectPx::new(left, top, block, block), foreground);
            }
            left += block;
        }
        top += block;
    }

    img
}

/// Side length of one grid cell inside `area`.
pub fn block_size(area: &RectPx) -> u32 {
    area.width / GRID_SIZE as u32
}
