#![forbid(unsafe_code)]

//! Text decoding and pixel layout for hanfont.
//!
//! This crate turns raw UTF-8 byte strings into bounded layout decisions:
//! - [`decode_one`] / [`Decoder`] - one-character UTF-8 classification with
//!   one-byte resynchronization on malformed input
//! - [`TextLayout`] - the width model plus wrap, truncate, center, and
//!   center-wrap segmentation (no drawing)
//! - [`LineBuffer`] - an explicit bounded container for wrapped lines
//!
//! The width model is deliberately byte-class based, not Unicode-table
//! based: ASCII is a fixed 6 px, every well-formed multi-byte character is
//! billed one glyph cell. Unsupported ranges keep their placeholder width
//! so column accounting stays stable.
//!
//! # Example
//! ```
//! use hanfont_text::TextLayout;
//!
//! let layout = TextLayout::new(16);
//! assert_eq!(layout.measure("Hi"), 12);
//!
//! let lines = layout.wrap("\u{4E00}\u{4E01}\u{4E02}\u{4E03}\u{4E04}", 48);
//! assert_eq!(lines.len(), 2);
//! assert_eq!(lines.lines()[0].width, 48);
//! assert_eq!(lines.lines()[1].width, 32);
//! ```

pub mod decode;
pub mod layout;

pub use decode::{DecodedChar, Decoder, decode_one};
pub use layout::{ASCII_WIDTH, DEFAULT_MAX_LINES, LayoutLine, LineBuffer, TextLayout};
