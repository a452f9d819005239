#![forbid(unsafe_code)]

//! The fixed size table.
//!
//! Each supported cell size maps to a fixed `(bytes_per_row, height)` pair.
//! The pair is a static table entry, not derived at runtime, so the packer
//! and the renderer agree on row layout without storing it per glyph.

/// Packed row geometry for one supported cell size.
///
/// A glyph cell is a `size x size` 1-bit bitmap. Each row packs into
/// `bytes_per_row` bytes, most-significant-bit first, and a glyph occupies
/// `bytes_per_row * height` bytes in the asset blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontMetrics {
    size: u16,
    bytes_per_row: usize,
    height: usize,
}

impl FontMetrics {
    /// Cell sizes with a table entry, in ascending order.
    pub const SUPPORTED_SIZES: &'static [u16] = &[8, 10, 12, 14, 16, 20, 24, 28, 32, 36, 40];

    /// Look up the geometry for a cell size.
    ///
    /// Returns `None` for sizes without a table entry.
    #[must_use]
    pub const fn for_size(size: u16) -> Option<Self> {
        let (bytes_per_row, height) = match size {
            8 => (1, 8),
            10 => (2, 10),
            12 => (2, 12),
            14 => (2, 14),
            16 => (2, 16),
            20 => (3, 20),
            24 => (3, 24),
            28 => (4, 28),
            32 => (4, 32),
            36 => (5, 36),
            40 => (5, 40),
            _ => return None,
        };
        Some(Self {
            size,
            bytes_per_row,
            height,
        })
    }

    /// Cell size in pixels (both dimensions).
    #[inline]
    #[must_use]
    pub const fn size(&self) -> u16 {
        self.size
    }

    /// Packed bytes per cell row.
    #[inline]
    #[must_use]
    pub const fn bytes_per_row(&self) -> usize {
        self.bytes_per_row
    }

    /// Cell rows per glyph.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Packed bytes per glyph: `bytes_per_row * height`.
    #[inline]
    #[must_use]
    pub const fn bytes_per_char(&self) -> usize {
        self.bytes_per_row * self.height
    }
}
