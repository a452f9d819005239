#![forbid(unsafe_code)]

//! The immutable packed font blob and its bounds-checked lookup.
//!
//! A [`FontAsset`] is built once offline and treated as read-only for the
//! life of the program. Construction validates the blob length against the
//! declared range so the runtime lookup can stay branch-light; lookup still
//! re-checks the physical bound because range constants and blob bytes may
//! come from separately generated artifacts.

use std::borrow::Cow;
use std::fmt;

use crate::metrics::FontMetrics;
use crate::pack::unpack_row;

/// Inclusive, contiguous Unicode scalar interval covered by one asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodepointRange {
    start: u32,
    end: u32,
}

impl CodepointRange {
    /// The GB2312 ideographic block, 20,902 code points.
    pub const GB2312: Self = Self {
        start: 0x4E00,
        end: 0x9FA5,
    };

    /// Create a range; `None` when `start > end`.
    #[must_use]
    pub const fn new(start: u32, end: u32) -> Option<Self> {
        if start > end {
            return None;
        }
        Some(Self { start, end })
    }

    /// First covered code point.
    #[inline]
    #[must_use]
    pub const fn start(&self) -> u32 {
        self.start
    }

    /// Last covered code point (inclusive).
    #[inline]
    #[must_use]
    pub const fn end(&self) -> u32 {
        self.end
    }

    /// Number of covered code points.
    #[inline]
    #[must_use]
    pub const fn char_count(&self) -> usize {
        (self.end - self.start + 1) as usize
    }

    /// Whether `codepoint` falls inside the range.
    #[inline]
    #[must_use]
    pub const fn contains(&self, codepoint: u32) -> bool {
        codepoint >= self.start && codepoint <= self.end
    }
}

/// Asset construction failures. Loader-time only; the lookup path never
/// reports errors.
#[derive(Debug)]
pub enum AssetError {
    /// The requested cell size has no table entry.
    UnsupportedSize(u16),
    /// Declared range has `start > end`.
    InvalidRange { start: u32, end: u32 },
    /// Blob length does not match `char_count * bytes_per_char`.
    SizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedSize(size) => write!(f, "unsupported cell size {size}"),
            Self::InvalidRange { start, end } => {
                write!(f, "invalid range U+{start:04X}..=U+{end:04X}")
            }
            Self::SizeMismatch { expected, actual } => {
                write!(f, "blob length {actual} does not match declared range ({expected} expected)")
            }
        }
    }
}

impl std::error::Error for AssetError {}

/// An immutable packed font blob addressed by arithmetic offset.
///
/// The blob holds one packed glyph per code point in `range`, in ascending
/// code point order. `Cow` lets both `include_bytes!` statics and
/// file-loaded vectors back an asset without copying.
#[derive(Debug, Clone)]
pub struct FontAsset {
    data: Cow<'static, [u8]>,
    range: CodepointRange,
    metrics: FontMetrics,
}

impl FontAsset {
    /// Construct an asset, validating blob length against the range.
    pub fn new(
        data: Cow<'static, [u8]>,
        range: CodepointRange,
        size: u16,
    ) -> Result<Self, AssetError> {
        let metrics = FontMetrics::for_size(size).ok_or(AssetError::UnsupportedSize(size))?;
        let expected = range.char_count() * metrics.bytes_per_char();
        if data.len() != expected {
            return Err(AssetError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            range,
            metrics,
        })
    }

    /// Construct from a `'static` blob (`include_bytes!`).
    pub fn from_static(
        data: &'static [u8],
        range: CodepointRange,
        size: u16,
    ) -> Result<Self, AssetError> {
        Self::new(Cow::Borrowed(data), range, size)
    }

    /// Construct from an owned blob (file load).
    pub fn from_vec(data: Vec<u8>, range: CodepointRange, size: u16) -> Result<Self, AssetError> {
        Self::new(Cow::Owned(data), range, size)
    }

    /// Construct from raw header constants, validating the range bounds as
    /// well as the blob length. Entry point for generated glyph libraries.
    pub fn from_parts(
        data: &'static [u8],
        start: u32,
        end: u32,
        size: u16,
    ) -> Result<Self, AssetError> {
        let range = CodepointRange::new(start, end).ok_or(AssetError::InvalidRange { start, end })?;
        Self::from_static(data, range, size)
    }

    /// Covered code point range.
    #[inline]
    #[must_use]
    pub const fn range(&self) -> CodepointRange {
        self.range
    }

    /// Packed row geometry.
    #[inline]
    #[must_use]
    pub const fn metrics(&self) -> FontMetrics {
        self.metrics
    }

    /// Total blob length in bytes.
    #[inline]
    #[must_use]
    pub fn total_size(&self) -> usize {
        self.data.len()
    }

    /// Raw blob bytes.
    #[inline]
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Byte offset of a code point's packed glyph.
    ///
    /// `None` when the code point is outside the range, or when the
    /// computed glyph span would exceed the physical blob. The second check
    /// is kept even though construction validates the length: range
    /// constants and blob bytes can be generated separately.
    #[must_use]
    pub fn offset_of(&self, codepoint: u32) -> Option<usize> {
        if !self.range.contains(codepoint) {
            return None;
        }
        let bytes_per_char = self.metrics.bytes_per_char();
        let offset = (codepoint - self.range.start()) as usize * bytes_per_char;
        if offset + bytes_per_char > self.data.len() {
            return None;
        }
        Some(offset)
    }

    /// Borrowed view of one glyph's packed bytes.
    #[must_use]
    pub fn glyph(&self, codepoint: u32) -> Option<PackedGlyph<'_>> {
        let offset = self.offset_of(codepoint)?;
        let bytes_per_char = self.metrics.bytes_per_char();
        Some(PackedGlyph {
            bytes: &self.data[offset..offset + bytes_per_char],
            metrics: self.metrics,
        })
    }
}

/// A borrowed per-glyph view over the asset blob.
#[derive(Debug, Clone, Copy)]
pub struct PackedGlyph<'a> {
    bytes: &'a [u8],
    metrics: FontMetrics,
}

impl PackedGlyph<'_> {
    /// Cell size in pixels.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> u16 {
        self.metrics.size()
    }

    /// Packed bytes for this glyph.
    #[inline]
    #[must_use]
    pub const fn bytes(&self) -> &[u8] {
        self.bytes
    }

    /// Row masks top to bottom; bit `(size - 1 - col)` is the pixel at `col`.
    pub fn rows(&self) -> impl Iterator<Item = u64> + '_ {
        self.bytes
            .chunks(self.metrics.bytes_per_row())
            .map(unpack_row)
    }
}
