//! # Rendering Module
//!
//! Raster canvas with alpha-blended drawing primitives, text and effects.
//!
//! The canvas wraps an [`image::RgbaImage`]. Every primitive composites with
//! source-over blending and clips silently at the canvas edges, so scenes can
//! place shapes partially (or entirely) off-screen.

pub mod bitmap_font;
pub mod effects;
pub mod shapes;
pub mod text;

pub use effects::*;
pub use text::*;

use crate::{ArtError, ArtResult};
use image::{imageops, Pixel, Rgba, RgbaImage};
use std::path::Path;

/// Color type used by every drawing call.
pub type Color = Rgba<u8>;

/// Builds an opaque color.
pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Rgba([r, g, b, 255])
}

/// Builds a color with explicit alpha.
pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
    Rgba([r, g, b, a])
}

/// Common colors.
pub mod palette {
    use super::{rgb, Color};

    pub const BLACK: Color = rgb(0, 0, 0);
    pub const WHITE: Color = rgb(255, 255, 255);
    pub const ELECTRIC_BLUE: Color = rgb(30, 170, 255);
    pub const GOLD: Color = rgb(255, 215, 80);
    pub const NEON_RED: Color = rgb(255, 50, 50);
}

/// Axis-aligned bounding box in pixel coordinates.
///
/// Bounds are inclusive on both ends, so `Rect::new(0.0, 0.0, 9.0, 9.0)`
/// covers a 10x10 block of pixels when filled.
///
/// # Examples
///
/// ```
/// use barberbrawl::Rect;
///
/// let r = Rect::from_center((50.0, 40.0), 10.0, 5.0);
/// assert_eq!(r, Rect::new(40.0, 35.0, 60.0, 45.0));
/// assert_eq!(r.center(), (50.0, 40.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl Rect {
    /// Creates a rectangle from its corners.
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Creates a rectangle from a center point and half extents.
    pub fn from_center(center: (f32, f32), half_width: f32, half_height: f32) -> Self {
        Self::new(
            center.0 - half_width,
            center.1 - half_height,
            center.0 + half_width,
            center.1 + half_height,
        )
    }

    /// Creates a square around a center point.
    pub fn circle(center: (f32, f32), radius: f32) -> Self {
        Self::from_center(center, radius, radius)
    }

    /// Grows (or shrinks, for negative amounts) the rectangle on every side.
    pub fn inflate(&self, amount: f32) -> Self {
        Self::new(
            self.x0 - amount,
            self.y0 - amount,
            self.x1 + amount,
            self.y1 + amount,
        )
    }

    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    pub fn center(&self) -> (f32, f32) {
        ((self.x0 + self.x1) / 2.0, (self.y0 + self.y1) / 2.0)
    }

    /// Returns a copy with the corners ordered so that `x0 <= x1` and `y0 <= y1`.
    pub fn normalized(&self) -> Self {
        Self::new(
            self.x0.min(self.x1),
            self.y0.min(self.y1),
            self.x0.max(self.x1),
            self.y0.max(self.y1),
        )
    }
}

/// In-memory RGBA raster that scenes draw into before it is written to disk.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Creates a canvas filled with a single color.
    ///
    /// # Examples
    ///
    /// ```
    /// use barberbrawl::{Canvas, rgb};
    ///
    /// let canvas = Canvas::new(64, 32, rgb(20, 20, 25));
    /// assert_eq!(canvas.width(), 64);
    /// assert_eq!(canvas.pixel(10, 10), Some(rgb(20, 20, 25)));
    /// ```
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, background),
        }
    }

    /// Creates a fully transparent layer.
    pub fn transparent(width: u32, height: u32) -> Self {
        Self::new(width, height, rgba(0, 0, 0, 0))
    }

    /// Creates a transparent layer with the same size as this canvas.
    pub fn layer(&self) -> Self {
        Self::transparent(self.width(), self.height())
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Returns the pixel at the given position, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.image.get_pixel_checked(x, y).copied()
    }

    /// Borrows the underlying image buffer.
    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    /// Blends a color onto a single pixel, ignoring positions off the canvas.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 {
            return;
        }
        if let Some(px) = self.image.get_pixel_mut_checked(x as u32, y as u32) {
            if color.0[3] == 255 {
                *px = color;
            } else if color.0[3] > 0 {
                px.blend(&color);
            }
        }
    }

    /// Blends a color with an additional coverage factor in `0.0..=1.0`.
    pub fn blend_pixel_coverage(&mut self, x: i32, y: i32, color: Color, coverage: f32) {
        let alpha = crate::utils::scale_alpha(color.0[3], coverage.clamp(0.0, 1.0));
        self.blend_pixel(x, y, rgba(color.0[0], color.0[1], color.0[2], alpha));
    }

    /// Overwrites a pixel without blending.
    pub fn put_pixel(&mut self, x: u32, y: u32, color: Color) {
        if let Some(px) = self.image.get_pixel_mut_checked(x, y) {
            *px = color;
        }
    }

    /// Fills every pixel in the half-open span `[x_start, x_end)` of one row.
    pub(crate) fn blend_span(&mut self, y: i32, x_start: i32, x_end: i32, color: Color) {
        if y < 0 || y >= self.height() as i32 {
            return;
        }
        let start = x_start.max(0);
        let end = x_end.min(self.width() as i32);
        for x in start..end {
            self.blend_pixel(x, y, color);
        }
    }

    /// Composites an equally sized layer over this canvas.
    pub fn composite(&mut self, layer: &Canvas) {
        imageops::overlay(&mut self.image, &layer.image, 0, 0);
    }

    /// Returns a Gaussian-blurred copy of the canvas.
    pub fn blurred(&self, sigma: f32) -> Canvas {
        if sigma <= 0.0 {
            return self.clone();
        }
        Canvas {
            image: imageops::blur(&self.image, sigma),
        }
    }

    /// Applies a function to every pixel, passing its coordinates.
    pub fn map_pixels<F>(&mut self, mut f: F)
    where
        F: FnMut(u32, u32, Color) -> Color,
    {
        for (x, y, px) in self.image.enumerate_pixels_mut() {
            *px = f(x, y, *px);
        }
    }

    /// Encodes the canvas as PNG at the given path.
    pub fn save_png(&self, path: &Path) -> ArtResult<()> {
        if self.width() == 0 || self.height() == 0 {
            return Err(ArtError::InvalidDimensions {
                width: self.width(),
                height: self.height(),
            });
        }
        self.image
            .save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }
}
