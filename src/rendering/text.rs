//! # Text Rendering
//!
//! Arcade-style captions drawn with a TrueType font when one is available,
//! or with the built-in bitmap font otherwise.

use super::bitmap_font::{self, ADVANCE, GLYPH_HEIGHT, LINE_HEIGHT};
use super::{Canvas, Color, Rect};
use crate::{config, ArtError, ArtResult};
use ab_glyph::{Font, FontVec, GlyphId, PxScale, ScaleFont};
use log::{debug, warn};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Font used for every caption in a run.
pub enum Typeface {
    /// Outline font parsed from a TrueType/OpenType file
    TrueType { font: FontVec, source: PathBuf },
    /// Built-in 5x7 pixel font
    Bitmap,
}

impl fmt::Debug for Typeface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Typeface::TrueType { source, .. } => {
                f.debug_struct("TrueType").field("source", source).finish()
            }
            Typeface::Bitmap => f.write_str("Bitmap"),
        }
    }
}

impl Typeface {
    /// Picks the typeface for a run.
    ///
    /// An explicit path must load, otherwise the run fails. Without one, the
    /// common system font locations are probed and the bitmap font is the
    /// last resort.
    pub fn resolve(explicit: Option<&Path>) -> ArtResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        for candidate in config::FONT_CANDIDATES {
            let path = Path::new(candidate);
            if !path.is_file() {
                continue;
            }
            match Self::load(path) {
                Ok(typeface) => {
                    debug!("Using font {}", path.display());
                    return Ok(typeface);
                }
                Err(e) => warn!("Skipping font candidate: {}", e),
            }
        }

        warn!("No TrueType font found, using the built-in bitmap font");
        Ok(Self::Bitmap)
    }

    /// Loads a TrueType or OpenType font file.
    pub fn load(path: &Path) -> ArtResult<Self> {
        let font_load_error = |reason: String| ArtError::FontLoad {
            path: path.to_path_buf(),
            reason,
        };
        let bytes = fs::read(path).map_err(|e| font_load_error(e.to_string()))?;
        let font = FontVec::try_from_vec(bytes).map_err(|e| font_load_error(e.to_string()))?;
        Ok(Self::TrueType {
            font,
            source: path.to_path_buf(),
        })
    }

    /// Returns the built-in bitmap typeface.
    pub fn builtin() -> Self {
        Self::Bitmap
    }

    /// Measures the width and height of a single line of text.
    ///
    /// # Examples
    ///
    /// ```
    /// use barberbrawl::Typeface;
    ///
    /// let (w, h) = Typeface::builtin().measure("99", 16.0);
    /// assert_eq!((w, h), (22.0, 14.0));
    /// ```
    pub fn measure(&self, text: &str, size: f32) -> (f32, f32) {
        match self {
            Typeface::TrueType { font, .. } => {
                let scaled = font.as_scaled(PxScale::from(size));
                let mut width = 0.0;
                let mut previous: Option<GlyphId> = None;
                for c in text.chars() {
                    let id = scaled.glyph_id(c);
                    if let Some(prev) = previous {
                        width += scaled.kern(prev, id);
                    }
                    width += scaled.h_advance(id);
                    previous = Some(id);
                }
                (width, scaled.height())
            }
            Typeface::Bitmap => {
                let cell = bitmap_cell(size);
                let count = text.chars().count() as f32;
                let width = if count > 0.0 {
                    count * ADVANCE as f32 * cell - cell
                } else {
                    0.0
                };
                (width, GLYPH_HEIGHT as f32 * cell)
            }
        }
    }
}

/// Pixel size of one bitmap font cell for a requested font size.
fn bitmap_cell(size: f32) -> f32 {
    (size / LINE_HEIGHT as f32).round().max(1.0)
}

impl Canvas {
    /// Draws a line of text with its top-left corner at `pos`.
    pub fn draw_text(
        &mut self,
        typeface: &Typeface,
        pos: (f32, f32),
        text: &str,
        size: f32,
        color: Color,
    ) {
        match typeface {
            Typeface::TrueType { font, .. } => self.draw_outline_text(font, pos, text, size, color),
            Typeface::Bitmap => self.draw_bitmap_text(pos, text, size, color),
        }
    }

    /// Draws text with a solid outline, stamping the outline color at every
    /// offset within `stroke_width` before drawing the fill on top.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_text_stroked(
        &mut self,
        typeface: &Typeface,
        pos: (f32, f32),
        text: &str,
        size: f32,
        fill: Color,
        stroke_width: i32,
        stroke: Color,
    ) {
        let r = stroke_width.max(0);
        for dy in -r..=r {
            for dx in -r..=r {
                if (dx, dy) != (0, 0) && dx * dx + dy * dy <= r * r {
                    let offset = (pos.0 + dx as f32, pos.1 + dy as f32);
                    self.draw_text(typeface, offset, text, size, stroke);
                }
            }
        }
        self.draw_text(typeface, pos, text, size, fill);
    }

    fn draw_outline_text(&mut self, font: &FontVec, pos: (f32, f32), text: &str, size: f32, color: Color) {
        let scaled = font.as_scaled(PxScale::from(size));
        let mut caret = ab_glyph::point(pos.0, pos.1 + scaled.ascent());
        let mut previous: Option<GlyphId> = None;
        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = previous {
                caret.x += scaled.kern(prev, id);
            }
            let glyph = id.with_scale_and_position(scaled.scale(), caret);
            caret.x += scaled.h_advance(id);
            previous = Some(id);

            if let Some(outlined) = font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                let (left, top) = (bounds.min.x as i32, bounds.min.y as i32);
                outlined.draw(|gx, gy, coverage| {
                    self.blend_pixel_coverage(left + gx as i32, top + gy as i32, color, coverage);
                });
            }
        }
    }

    fn draw_bitmap_text(&mut self, pos: (f32, f32), text: &str, size: f32, color: Color) {
        let cell = bitmap_cell(size);
        let (x0, y0) = (pos.0.round(), pos.1.round());
        for (i, c) in text.chars().enumerate() {
            let rows = bitmap_font::glyph(c);
            let gx = x0 + (i as u32 * ADVANCE) as f32 * cell;
            for row in 0..GLYPH_HEIGHT {
                for col in 0..bitmap_font::GLYPH_WIDTH {
                    if bitmap_font::is_set(&rows, col, row) {
                        let x = gx + col as f32 * cell;
                        let y = y0 + row as f32 * cell;
                        self.fill_rect(Rect::new(x, y, x + cell - 1.0, y + cell - 1.0), color);
                    }
                }
            }
        }
    }
}
