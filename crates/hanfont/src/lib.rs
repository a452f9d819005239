#![forbid(unsafe_code)]

//! hanfont public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports the packed-asset, layout, and rendering types from the
//! internal crates and offers a lightweight prelude for day-to-day usage.
//!
//! # Example
//! ```
//! use hanfont::prelude::*;
//!
//! struct Null;
//! impl Surface for Null {
//!     fn set_pixel(&mut self, _: i32, _: i32, _: Rgb565) {}
//!     fn draw_cell(&mut self, _: i32, _: i32, _: u8, _: Rgb565, _: Rgb565, _: u8) {}
//! }
//!
//! let range = CodepointRange::new(0x4E00, 0x4E01).unwrap();
//! let asset = FontAsset::from_vec(vec![0; 64], range, 16).unwrap();
//! let renderer = GlyphRenderer::new(&asset);
//! renderer.draw_center_wrapped(&mut Null, "\u{4E00}\u{4E01}", 0, Rgb565::WHITE, 120, 100, None);
//! ```

// --- Asset re-exports ------------------------------------------------------

pub use hanfont_asset::{
    AssetError, CodepointRange, FontAsset, FontMetrics, GlyphCell, PackedGlyph, pack_cell,
    unpack_cell, unpack_row,
};

// --- Text re-exports -------------------------------------------------------

pub use hanfont_text::{
    ASCII_WIDTH, DEFAULT_MAX_LINES, DecodedChar, Decoder, LayoutLine, LineBuffer, TextLayout,
    decode_one,
};

// --- Render re-exports -----------------------------------------------------

pub use hanfont_render::{GlyphRenderer, Rgb565, Surface};

/// Commonly used types for glancing imports.
pub mod prelude {
    pub use crate::{
        CodepointRange, DecodedChar, FontAsset, FontMetrics, GlyphRenderer, LayoutLine,
        LineBuffer, Rgb565, Surface, TextLayout,
    };
}
