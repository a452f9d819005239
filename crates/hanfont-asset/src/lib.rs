#![forbid(unsafe_code)]

//! Packed glyph assets for hanfont.
//!
//! This crate is the codec kernel shared by the offline generator and the
//! runtime renderer:
//! - [`FontMetrics`] - the fixed table of supported sizes and their packed
//!   row geometry
//! - [`GlyphCell`] - an owned `size x size` 1-bit bitmap
//! - [`pack_cell`] / [`unpack_cell`] - MSB-first row packing and its inverse
//! - [`FontAsset`] - an immutable packed blob with validated construction
//!   and O(1) bounds-checked lookup
//! - [`PackedGlyph`] - a borrowed per-glyph view yielding one row mask per
//!   cell row
//!
//! # Example
//! ```
//! use hanfont_asset::{CodepointRange, FontAsset, FontMetrics};
//!
//! let metrics = FontMetrics::for_size(16).unwrap();
//! let range = CodepointRange::new(0x4E00, 0x4E02).unwrap();
//! let blob = vec![0u8; metrics.bytes_per_char() * range.char_count()];
//! let asset = FontAsset::from_vec(blob, range, 16).unwrap();
//!
//! assert_eq!(asset.offset_of(0x4E01), Some(32));
//! assert_eq!(asset.offset_of(0x3000), None);
//! ```

pub mod asset;
pub mod metrics;
pub mod pack;

pub use asset::{AssetError, CodepointRange, FontAsset, PackedGlyph};
pub use metrics::FontMetrics;
pub use pack::{GlyphCell, pack_cell, unpack_cell, unpack_row};
