#![forbid(unsafe_code)]

//! Per-character and per-string drawing on top of the packed asset.
//!
//! `draw_glyph` is the primitive: look the glyph up, rebuild each row's
//! bit pattern most-significant-first, plot set bits. The string-level
//! entry points drive decoder + layout and then walk each line with the
//! primitive. None of them report errors; a character that cannot be drawn
//! advances the cursor by its billed width and leaves no mark.

use hanfont_asset::FontAsset;
use hanfont_text::{DecodedChar, Decoder, TextLayout};

use crate::surface::{Rgb565, Surface};

/// Extra pixels added to the cell size when no line height is given.
const LINE_GAP: u32 = 4;

/// Immediate-mode glyph renderer over a borrowed [`FontAsset`].
///
/// Construct one per asset and share it freely; the renderer holds no
/// mutable state and the asset is read-only.
#[derive(Debug, Clone, Copy)]
pub struct GlyphRenderer<'a> {
    asset: &'a FontAsset,
    layout: TextLayout,
    bg: Rgb565,
    cell_scale: u8,
}

impl<'a> GlyphRenderer<'a> {
    /// Renderer for an asset, with the asset's cell size as wide-glyph
    /// advance and a black ASCII cell background at scale 1.
    #[must_use]
    pub fn new(asset: &'a FontAsset) -> Self {
        Self {
            asset,
            layout: TextLayout::new(u32::from(asset.metrics().size())),
            bg: Rgb565::BLACK,
            cell_scale: 1,
        }
    }

    /// Override the ASCII cell background color.
    #[must_use]
    pub const fn with_background(mut self, bg: Rgb565) -> Self {
        self.bg = bg;
        self
    }

    /// Override the ASCII cell scale factor.
    #[must_use]
    pub const fn with_cell_scale(mut self, scale: u8) -> Self {
        self.cell_scale = scale;
        self
    }

    /// Override the hard line cap used by the wrapped entry points.
    #[must_use]
    pub const fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.layout = self.layout.with_max_lines(max_lines);
        self
    }

    /// The layout engine this renderer drives.
    #[inline]
    #[must_use]
    pub const fn layout(&self) -> &TextLayout {
        &self.layout
    }

    /// Line advance: explicit, or cell size plus a fixed gap.
    #[inline]
    #[must_use]
    fn line_advance(&self, line_height: Option<u32>) -> u32 {
        line_height.unwrap_or(self.layout.cell_width() + LINE_GAP)
    }

    /// Draw one packed glyph at `(x, y)`.
    ///
    /// A code point outside the asset's range, or one whose computed
    /// offset falls outside the blob, is a silent no-op: there is no error
    /// channel in the immediate-mode path.
    pub fn draw_glyph(
        &self,
        surface: &mut impl Surface,
        codepoint: u32,
        x: i32,
        y: i32,
        color: Rgb565,
    ) {
        let Some(glyph) = self.asset.glyph(codepoint) else {
            return;
        };
        let size = glyph.size();
        for (row, mask) in glyph.rows().enumerate() {
            if mask == 0 {
                continue;
            }
            for col in 0..size {
                if mask & (1 << (size - 1 - col)) != 0 {
                    surface.set_pixel(x + i32::from(col), y + row as i32, color);
                }
            }
        }
    }

    /// Draw one decoded character and return its advance.
    fn draw_decoded(
        &self,
        surface: &mut impl Surface,
        decoded: &DecodedChar,
        x: i32,
        y: i32,
        color: Rgb565,
    ) -> u32 {
        match decoded {
            DecodedChar::Ascii(byte) => {
                surface.draw_cell(x, y, *byte, color, self.bg, self.cell_scale);
            }
            DecodedChar::Wide { codepoint, .. } => {
                // Out-of-range code points advance but leave no mark,
                // keeping column accounting width-stable.
                self.draw_glyph(surface, *codepoint, x, y, color);
            }
            DecodedChar::Invalid => {}
        }
        self.layout.char_width(decoded)
    }

    /// Draw one pre-segmented byte range left-to-right from `(x, y)`.
    fn draw_segment(
        &self,
        surface: &mut impl Surface,
        bytes: &[u8],
        x: i32,
        y: i32,
        color: Rgb565,
    ) {
        let mut cursor = x;
        for (_, decoded) in Decoder::new(bytes) {
            cursor += self.draw_decoded(surface, &decoded, cursor, y, color) as i32;
        }
    }

    /// Draw a single unwrapped line.
    pub fn draw_str(
        &self,
        surface: &mut impl Surface,
        text: impl AsRef<[u8]>,
        x: i32,
        y: i32,
        color: Rgb565,
    ) {
        self.draw_segment(surface, text.as_ref(), x, y, color);
    }

    /// Draw a single line truncated to a width and character budget.
    pub fn draw_truncated(
        &self,
        surface: &mut impl Surface,
        text: impl AsRef<[u8]>,
        x: i32,
        y: i32,
        color: Rgb565,
        max_width: u32,
        max_chars: usize,
    ) {
        let bytes = text.as_ref();
        let line = self.layout.truncate(bytes, max_width, max_chars);
        self.draw_segment(surface, &bytes[line.start..line.start + line.len], x, y, color);
    }

    /// Greedy-wrap `text` into lines of at most `max_width` pixels and
    /// draw them top to bottom from `(x, y)`.
    pub fn draw_wrapped(
        &self,
        surface: &mut impl Surface,
        text: impl AsRef<[u8]>,
        x: i32,
        y: i32,
        color: Rgb565,
        max_width: u32,
        line_height: Option<u32>,
    ) {
        let bytes = text.as_ref();
        let advance = self.line_advance(line_height) as i32;
        let lines = self.layout.wrap(bytes, max_width);
        #[cfg(feature = "tracing")]
        if lines.truncated() {
            tracing::trace!(max_lines = self.layout.max_lines(), "wrapped output truncated");
        }
        for (i, line) in lines.iter().enumerate() {
            self.draw_segment(
                surface,
                &bytes[line.start..line.start + line.len],
                x,
                y + i as i32 * advance,
                color,
            );
        }
    }

    /// Draw a single line centered on `center_x`.
    pub fn draw_centered(
        &self,
        surface: &mut impl Surface,
        text: impl AsRef<[u8]>,
        y: i32,
        color: Rgb565,
        center_x: i32,
    ) {
        let bytes = text.as_ref();
        let (start_x, _) = self.layout.center(bytes, center_x);
        self.draw_segment(surface, bytes, start_x, y, color);
    }

    /// Wrap `text` to `max_width` and center each resulting line on
    /// `center_x` independently.
    ///
    /// Two passes: segmentation first, then per-line placement, because a
    /// line's width is only known once the line is fully segmented.
    pub fn draw_center_wrapped(
        &self,
        surface: &mut impl Surface,
        text: impl AsRef<[u8]>,
        y: i32,
        color: Rgb565,
        center_x: i32,
        max_width: u32,
        line_height: Option<u32>,
    ) {
        let bytes = text.as_ref();
        let advance = self.line_advance(line_height) as i32;
        for (i, line) in self.layout.center_wrap(bytes, max_width).iter().enumerate() {
            let start_x = TextLayout::centered_origin(center_x, line.width);
            self.draw_segment(
                surface,
                &bytes[line.start..line.start + line.len],
                start_x,
                y + i as i32 * advance,
                color,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hanfont_asset::{CodepointRange, FontMetrics, GlyphCell, pack_cell};

    /// Surface stub recording every call.
    #[derive(Debug, Default)]
    struct Recording {
        pixels: Vec<(i32, i32)>,
        cells: Vec<(i32, i32, u8)>,
    }

    impl Surface for Recording {
        fn set_pixel(&mut self, x: i32, y: i32, _color: Rgb565) {
            self.pixels.push((x, y));
        }
        fn draw_cell(&mut self, x: i32, y: i32, glyph: u8, _fg: Rgb565, _bg: Rgb565, _scale: u8) {
            self.cells.push((x, y, glyph));
        }
    }

    /// One-glyph 16px asset whose single glyph is a diagonal.
    fn diagonal_asset() -> FontAsset {
        let metrics = FontMetrics::for_size(16).unwrap();
        let mut cell = GlyphCell::blank(16);
        for i in 0..16 {
            cell.set(i, i, true);
        }
        let blob = pack_cell(&cell, metrics);
        let range = CodepointRange::new(0x4E00, 0x4E00).unwrap();
        FontAsset::from_vec(blob, range, 16).unwrap()
    }

    #[test]
    fn draw_glyph_plots_exactly_the_packed_bits() {
        let asset = diagonal_asset();
        let renderer = GlyphRenderer::new(&asset);
        let mut surface = Recording::default();
        renderer.draw_glyph(&mut surface, 0x4E00, 10, 20, Rgb565::WHITE);
        let expected: Vec<(i32, i32)> = (0..16).map(|i| (10 + i, 20 + i)).collect();
        assert_eq!(surface.pixels, expected);
    }

    #[test]
    fn out_of_range_draw_is_a_no_op() {
        let asset = diagonal_asset();
        let renderer = GlyphRenderer::new(&asset);
        let mut surface = Recording::default();
        renderer.draw_glyph(&mut surface, 0x3000, 0, 0, Rgb565::WHITE);
        assert!(surface.pixels.is_empty());
        assert!(surface.cells.is_empty());
    }

    #[test]
    fn ascii_delegates_to_the_cell_drawer() {
        let asset = diagonal_asset();
        let renderer = GlyphRenderer::new(&asset);
        let mut surface = Recording::default();
        renderer.draw_str(&mut surface, "Hi", 5, 7, Rgb565::WHITE);
        assert_eq!(surface.cells, vec![(5, 7, b'H'), (11, 7, b'i')]);
        assert!(surface.pixels.is_empty());
    }

    #[test]
    fn unsupported_wide_chars_advance_without_marks() {
        let asset = diagonal_asset();
        let renderer = GlyphRenderer::new(&asset);
        let mut surface = Recording::default();
        // U+00E9 is outside the asset range: placeholder width only.
        renderer.draw_str(&mut surface, "a\u{00E9}b", 0, 0, Rgb565::WHITE);
        assert_eq!(surface.cells, vec![(0, 0, b'a'), (22, 0, b'b')]);
        assert!(surface.pixels.is_empty());
    }

    #[test]
    fn invalid_bytes_are_skipped_entirely() {
        let asset = diagonal_asset();
        let renderer = GlyphRenderer::new(&asset);
        let mut surface = Recording::default();
        renderer.draw_str(&mut surface, [b'a', 0xE4, 0xB8, b'b'], 0, 0, Rgb565::WHITE);
        // The truncated sequence neither draws nor advances.
        assert_eq!(surface.cells, vec![(0, 0, b'a'), (6, 0, b'b')]);
    }

    #[test]
    fn wrapped_lines_stack_by_line_height() {
        let asset = diagonal_asset();
        let renderer = GlyphRenderer::new(&asset);
        let mut surface = Recording::default();
        // Five copies of the one covered ideograph, three per 48px line.
        let text = "\u{4E00}".repeat(5);
        renderer.draw_wrapped(&mut surface, &text, 0, 0, Rgb565::WHITE, 48, Some(20));
        let rows: Vec<i32> = surface
            .pixels
            .iter()
            .map(|&(_, y)| (y / 20) * 20)
            .collect::<std::collections::BTreeSet<_>>()
            .into_iter()
            .collect();
        assert_eq!(rows, vec![0, 20]);
    }

    #[test]
    fn default_line_height_is_cell_plus_gap() {
        let asset = diagonal_asset();
        let renderer = GlyphRenderer::new(&asset);
        assert_eq!(renderer.line_advance(None), 20);
        assert_eq!(renderer.line_advance(Some(18)), 18);
    }

    #[test]
    fn centered_span_is_symmetric_about_center_x() {
        let asset = diagonal_asset();
        let renderer = GlyphRenderer::new(&asset);
        let mut surface = Recording::default();
        // Width 16 centered at 60 -> glyph origin at 52.
        renderer.draw_centered(&mut surface, "\u{4E00}", 0, Rgb565::WHITE, 60);
        let min_x = surface.pixels.iter().map(|&(x, _)| x).min().unwrap();
        let max_x = surface.pixels.iter().map(|&(x, _)| x).max().unwrap();
        assert_eq!(min_x, 52);
        assert!(max_x < 52 + 16);
    }
}
