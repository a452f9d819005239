#![forbid(unsafe_code)]

//! Glyph rendering for hanfont.
//!
//! The renderer unpacks glyphs from a [`hanfont_asset::FontAsset`] and
//! plots set bits through a host-provided [`Surface`] capability. ASCII
//! code points bypass the packed asset and are forwarded to the host's
//! cell-based drawer. All failure modes on this path degrade to "draw
//! less": missing glyphs are silent no-ops, malformed bytes are skipped,
//! capacity limits stop early.
//!
//! # Example
//! ```
//! use hanfont_asset::{CodepointRange, FontAsset};
//! use hanfont_render::{GlyphRenderer, Rgb565, Surface};
//!
//! struct Null;
//! impl Surface for Null {
//!     fn set_pixel(&mut self, _: i32, _: i32, _: Rgb565) {}
//!     fn draw_cell(&mut self, _: i32, _: i32, _: u8, _: Rgb565, _: Rgb565, _: u8) {}
//! }
//!
//! let range = CodepointRange::new(0x4E00, 0x4E00).unwrap();
//! let asset = FontAsset::from_vec(vec![0; 32], range, 16).unwrap();
//! let renderer = GlyphRenderer::new(&asset);
//! renderer.draw_str(&mut Null, "Hi \u{4E00}", 0, 0, Rgb565::WHITE);
//! ```

pub mod renderer;
pub mod surface;

pub use renderer::GlyphRenderer;
pub use surface::{Rgb565, Surface};
