#![forbid(unsafe_code)]

//! Pixel-width layout: wrap, truncate, center.
//!
//! The engine decides line segmentation and placement; it never draws.
//! Every operation is a single pass over the decoded characters (center
//! and center-wrap are two logical passes because a line's width is only
//! known once the line is fully segmented), and every loop is bounded by
//! the input length plus the configured caps.
//!
//! Decode-and-layout runs one state machine: `SCANNING -> (emit char,
//! width accounting) -> SCANNING`, with exits `LINE_BREAK` (width would
//! overflow, line non-empty), `LINE_CAP_REACHED` (terminal for wrap),
//! `STRING_END` (terminal), and `INVALID_BYTE` (self-loop after a one-byte
//! skip). No other states exist.

use smallvec::SmallVec;

use crate::decode::{DecodedChar, Decoder};

/// Fixed advance for ASCII characters, in pixels.
pub const ASCII_WIDTH: u32 = 6;

/// Default hard cap on lines per wrap call.
pub const DEFAULT_MAX_LINES: usize = 50;

/// One wrapped or centered line: a byte range into the source string plus
/// its pixel width. Ephemeral; lifetime is one layout call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutLine {
    /// Byte index of the line's first character.
    pub start: usize,
    /// Byte length of the line.
    pub len: usize,
    /// Pixel width of the line.
    pub width: u32,
}

/// Bounded line storage with an explicit capacity-exceeded contract.
///
/// Capacity is fixed at construction. [`push`](Self::push) refuses once
/// full and records the overflow, so callers receive a partial but
/// bounds-safe result instead of unbounded growth.
#[derive(Debug, Clone)]
pub struct LineBuffer {
    lines: SmallVec<[LayoutLine; 32]>,
    capacity: usize,
    truncated: bool,
}

impl LineBuffer {
    /// Create an empty buffer accepting at most `capacity` lines.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: SmallVec::new(),
            capacity,
            truncated: false,
        }
    }

    /// Append a line. Returns `false` (and records truncation) when the
    /// buffer is already at capacity.
    pub fn push(&mut self, line: LayoutLine) -> bool {
        if self.lines.len() >= self.capacity {
            self.truncated = true;
            return false;
        }
        self.lines.push(line);
        true
    }

    /// The accepted lines, in order.
    #[inline]
    #[must_use]
    pub fn lines(&self) -> &[LayoutLine] {
        &self.lines
    }

    /// Number of accepted lines.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether no line was accepted.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether input was dropped because the capacity was reached.
    #[inline]
    #[must_use]
    pub const fn truncated(&self) -> bool {
        self.truncated
    }

    /// Iterate over accepted lines.
    pub fn iter(&self) -> impl Iterator<Item = &LayoutLine> {
        self.lines.iter()
    }
}

impl<'a> IntoIterator for &'a LineBuffer {
    type Item = &'a LayoutLine;
    type IntoIter = std::slice::Iter<'a, LayoutLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

/// The layout engine: a width model plus segmentation operations.
///
/// `cell_width` is the fixed advance of every well-formed multi-byte
/// character (the font's cell size); ASCII advances [`ASCII_WIDTH`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextLayout {
    cell_width: u32,
    max_lines: usize,
}

impl TextLayout {
    /// Engine for a font cell size, with the default line cap.
    #[must_use]
    pub const fn new(cell_width: u32) -> Self {
        Self {
            cell_width,
            max_lines: DEFAULT_MAX_LINES,
        }
    }

    /// Override the hard line cap.
    #[must_use]
    pub const fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    /// Cell width used for multi-byte characters.
    #[inline]
    #[must_use]
    pub const fn cell_width(&self) -> u32 {
        self.cell_width
    }

    /// Hard cap on lines per wrap call.
    #[inline]
    #[must_use]
    pub const fn max_lines(&self) -> usize {
        self.max_lines
    }

    /// Pixel advance of one decoded character.
    ///
    /// Every well-formed multi-byte character is billed one cell width
    /// regardless of byte length; invalid positions contribute nothing.
    #[inline]
    #[must_use]
    pub const fn char_width(&self, decoded: &DecodedChar) -> u32 {
        match decoded {
            DecodedChar::Ascii(_) => ASCII_WIDTH,
            DecodedChar::Wide { .. } => self.cell_width,
            DecodedChar::Invalid => 0,
        }
    }

    /// Full-string pixel width.
    ///
    /// Accepts raw bytes; malformed positions are skipped by the decoder
    /// and contribute no width.
    #[must_use]
    pub fn measure(&self, text: impl AsRef<[u8]>) -> u32 {
        Decoder::new(text.as_ref())
            .map(|(_, decoded)| self.char_width(&decoded))
            .sum()
    }

    /// Greedy line fill.
    ///
    /// Before placing a character, if the line would overflow `max_width`
    /// and already holds at least one character, the line closes and the
    /// character opens the next one; a character is never split. Once the
    /// line cap is reached the remainder is silently dropped (the buffer
    /// reports [`LineBuffer::truncated`]).
    #[must_use]
    pub fn wrap(&self, text: impl AsRef<[u8]>, max_width: u32) -> LineBuffer {
        let mut lines = LineBuffer::new(self.max_lines);
        let mut line_start = 0usize;
        let mut line_end = 0usize;
        let mut line_width = 0u32;

        for (at, decoded) in Decoder::new(text.as_ref()) {
            let width = self.char_width(&decoded);
            if width == 0 {
                continue;
            }
            if line_width > 0 && line_width + width > max_width {
                let closed = lines.push(LayoutLine {
                    start: line_start,
                    len: line_end - line_start,
                    width: line_width,
                });
                if !closed {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(max_lines = self.max_lines, "line cap reached");
                    return lines;
                }
                line_width = 0;
            }
            if line_width == 0 {
                line_start = at;
            }
            line_width += width;
            line_end = at + decoded.byte_len();
        }

        if line_width > 0 {
            lines.push(LayoutLine {
                start: line_start,
                len: line_end - line_start,
                width: line_width,
            });
        }
        lines
    }

    /// Single-line layout with a width and character budget.
    ///
    /// Stops the moment a character would exceed `max_width`, or after
    /// `max_chars` characters, whichever comes first. The remainder is
    /// discarded; there is no second line.
    #[must_use]
    pub fn truncate(&self, text: impl AsRef<[u8]>, max_width: u32, max_chars: usize) -> LayoutLine {
        let mut width = 0u32;
        let mut chars = 0usize;
        let mut len = 0usize;
        for (at, decoded) in Decoder::new(text.as_ref()) {
            let char_width = self.char_width(&decoded);
            if char_width == 0 {
                continue;
            }
            if chars >= max_chars || width + char_width > max_width {
                break;
            }
            width += char_width;
            chars += 1;
            len = at + decoded.byte_len();
        }
        LayoutLine {
            start: 0,
            len,
            width,
        }
    }

    /// Single-line centering: `(start_x, width)` for drawing left-to-right
    /// from `start_x`.
    #[must_use]
    pub fn center(&self, text: impl AsRef<[u8]>, center_x: i32) -> (i32, u32) {
        let width = self.measure(text);
        (Self::centered_origin(center_x, width), width)
    }

    /// Pass 1 of centered wrapping: the same greedy segmentation as
    /// [`wrap`](Self::wrap), recording each line's byte range and width.
    ///
    /// Pass 2 places each line independently at
    /// [`centered_origin`](Self::centered_origin)`(center_x, line.width)`,
    /// so lines of different width share one vertical axis. The two-pass
    /// shape is required: a line's width is only known after the line is
    /// fully segmented.
    #[must_use]
    pub fn center_wrap(&self, text: impl AsRef<[u8]>, max_width: u32) -> LineBuffer {
        self.wrap(text, max_width)
    }

    /// Left edge of a span of `width` centered on `center_x`.
    ///
    /// Integer division truncates toward zero; for odd widths the span
    /// sits one pixel left of the exact center.
    #[inline]
    #[must_use]
    pub const fn centered_origin(center_x: i32, width: u32) -> i32 {
        center_x - (width as i32) / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_only_measure() {
        // "Hi" at ASCII width 6 -> 12 px.
        let layout = TextLayout::new(16);
        assert_eq!(layout.measure("Hi"), 12);
    }

    #[test]
    fn ascii_only_single_line_at_wide_budget() {
        let layout = TextLayout::new(16);
        let lines = layout.wrap("Hi", 100);
        assert_eq!(lines.len(), 1);
        assert_eq!(
            lines.lines()[0],
            LayoutLine {
                start: 0,
                len: 2,
                width: 12
            }
        );
        assert!(!lines.truncated());
    }

    #[test]
    fn five_ideographs_wrap_three_then_two() {
        // 16 px cells at max_width 48 fit exactly three per line.
        let layout = TextLayout::new(16);
        let text = "\u{4E00}\u{4E01}\u{4E02}\u{4E03}\u{4E04}";
        let lines = layout.wrap(text, 48);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines.lines()[0].width, 48);
        assert_eq!(lines.lines()[0].len, 9);
        assert_eq!(lines.lines()[1].width, 32);
        assert_eq!(lines.lines()[1].start, 9);
        assert_eq!(lines.lines()[1].len, 6);
    }

    #[test]
    fn overwide_character_gets_its_own_line() {
        // Cell 32 against max_width 20: each ideograph exceeds the budget
        // but still occupies one line by itself.
        let layout = TextLayout::new(32);
        let lines = layout.wrap("\u{4E00}\u{4E01}", 20);
        assert_eq!(lines.len(), 2);
        assert!(lines.lines().iter().all(|line| line.width == 32));
    }

    #[test]
    fn wrap_respects_line_cap() {
        let layout = TextLayout::new(16).with_max_lines(2);
        let text = "\u{4E00}".repeat(10);
        let lines = layout.wrap(&text, 16);
        assert_eq!(lines.len(), 2);
        assert!(lines.truncated());
    }

    #[test]
    fn wrap_of_empty_text_is_empty() {
        let layout = TextLayout::new(16);
        let lines = layout.wrap("", 100);
        assert!(lines.is_empty());
        assert!(!lines.truncated());
    }

    #[test]
    fn wrap_of_invalid_bytes_yields_no_lines() {
        // A truncated 3-byte sequence decodes to zero drawable characters.
        let layout = TextLayout::new(16);
        let lines = layout.wrap([0xE4u8, 0xB8], 100);
        assert!(lines.is_empty());
    }

    #[test]
    fn interior_invalid_bytes_take_no_width() {
        let layout = TextLayout::new(16);
        // "Hi" with a stray continuation byte in between.
        assert_eq!(layout.measure([b'H', 0x80, b'i']), 12);
    }

    #[test]
    fn truncate_stops_at_width() {
        let layout = TextLayout::new(16);
        let text = "\u{4E00}\u{4E01}\u{4E02}";
        let line = layout.truncate(text, 40, usize::MAX);
        // Two cells fit in 40 px; the third would overflow.
        assert_eq!(line.width, 32);
        assert_eq!(line.len, 6);
    }

    #[test]
    fn truncate_stops_at_char_budget() {
        let layout = TextLayout::new(16);
        let line = layout.truncate("abcdef", 1000, 3);
        assert_eq!(line.width, 18);
        assert_eq!(line.len, 3);
    }

    #[test]
    fn truncate_is_idempotent() {
        let layout = TextLayout::new(16);
        let text = "Hi\u{4E00}\u{4E01}\u{4E02} there";
        let once = layout.truncate(text, 50, 8);
        let twice = layout.truncate(&text[once.start..once.start + once.len], 50, 8);
        assert_eq!(once.width, twice.width);
        assert_eq!(once.len, twice.len);
    }

    #[test]
    fn center_even_width() {
        let layout = TextLayout::new(16);
        // "Hi" -> 12 px centered on 120 -> starts at 114.
        let (start, width) = layout.center("Hi", 120);
        assert_eq!((start, width), (114, 12));
    }

    #[test]
    fn center_odd_width_truncates_toward_zero() {
        let layout = TextLayout::new(16);
        let (start, width) = layout.center("abc", 9);
        assert_eq!(width, 18);
        assert_eq!(start, 0);
        // Odd widths: 7 / 2 truncates to 3 on both sides of zero.
        assert_eq!(TextLayout::centered_origin(10, 7), 7);
        assert_eq!(TextLayout::centered_origin(-10, 7), -13);
    }

    #[test]
    fn center_wrap_lines_center_independently() {
        let layout = TextLayout::new(16);
        let text = "\u{4E00}\u{4E01}\u{4E02}\u{4E03}\u{4E04}";
        let lines = layout.center_wrap(text, 48);
        assert_eq!(lines.len(), 2);
        let origins: Vec<i32> = lines
            .iter()
            .map(|line| TextLayout::centered_origin(100, line.width))
            .collect();
        assert_eq!(origins, vec![76, 84]);
    }

    #[test]
    fn line_buffer_reports_truncation() {
        let mut buffer = LineBuffer::new(1);
        assert!(buffer.push(LayoutLine {
            start: 0,
            len: 1,
            width: 6
        }));
        assert!(!buffer.push(LayoutLine {
            start: 1,
            len: 1,
            width: 6
        }));
        assert!(buffer.truncated());
        assert_eq!(buffer.len(), 1);
    }
}
