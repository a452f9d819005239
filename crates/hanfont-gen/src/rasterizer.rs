#![forbid(unsafe_code)]

//! The rasterization boundary.
//!
//! The generator only needs one capability from the scalable-font world:
//! turn a code point into a centered `size x size` 1-bit cell. The
//! [`Rasterizer`] trait is that boundary; [`FontdueRasterizer`] is the
//! production implementation and tests substitute stubs.

use hanfont_asset::GlyphCell;

/// Coverage at or above this renders as ink in the 1-bit cell.
const INK_THRESHOLD: u8 = 128;

/// Vertical placement bias applied after centering, in pixels.
///
/// Carried over verbatim from previously shipped assets; rendered glyphs
/// must land on the same rows for visual parity.
pub const V_BIAS: i32 = -1;

/// Rasterizes one code point into a centered 1-bit glyph cell.
///
/// Returning `None` (missing glyph, rasterization failure) degrades to an
/// all-zero cell in the packed output; it never aborts a run.
pub trait Rasterizer {
    fn rasterize(&self, codepoint: char, size: u16) -> Option<GlyphCell>;
}

/// Production rasterizer backed by a parsed TTF/OTF font.
pub struct FontdueRasterizer {
    font: fontdue::Font,
}

impl FontdueRasterizer {
    /// Parse font bytes. The error string is fontdue's parse diagnostic.
    pub fn from_bytes(data: &[u8]) -> Result<Self, String> {
        let font = fontdue::Font::from_bytes(data, fontdue::FontSettings::default())
            .map_err(str::to_owned)?;
        Ok(Self { font })
    }
}

impl Rasterizer for FontdueRasterizer {
    fn rasterize(&self, codepoint: char, size: u16) -> Option<GlyphCell> {
        if self.font.lookup_glyph_index(codepoint) == 0 {
            return None;
        }
        let (metrics, coverage) = self.font.rasterize(codepoint, f32::from(size));
        blit_centered(&coverage, metrics.width, metrics.height, size)
    }
}

/// Center an ink box inside a blank cell, applying [`V_BIAS`] and clipping
/// rows and columns that fall outside the cell.
fn blit_centered(coverage: &[u8], width: usize, height: usize, size: u16) -> Option<GlyphCell> {
    if width == 0 || height == 0 {
        return None;
    }
    let mut cell = GlyphCell::blank(size);
    let x0 = (i32::from(size) - width as i32) / 2;
    let y0 = (i32::from(size) - height as i32) / 2 + V_BIAS;
    for row in 0..height {
        let y = y0 + row as i32;
        if y < 0 || y >= i32::from(size) {
            continue;
        }
        for col in 0..width {
            if coverage[row * width + col] < INK_THRESHOLD {
                continue;
            }
            let x = x0 + col as i32;
            if x < 0 || x >= i32::from(size) {
                continue;
            }
            cell.set(x as u16, y as u16, true);
        }
    }
    Some(cell)
}
