#![forbid(unsafe_code)]

//! Offline glyph library generator for hanfont.
//!
//! Drives a [`Rasterizer`] over every code point in the configured range,
//! centers each bitmap in its glyph cell, packs it with the
//! `hanfont-asset` codec, and emits the packaged library: the raw blob, a
//! generated Rust header module wiring the range/size constants to a
//! `FontAsset` constructor, a crate manifest, and a `library.json`
//! packaging manifest.
//!
//! Configuration failures (unsupported size, missing or unparsable font)
//! abort before any output path is touched; per-glyph failures degrade to
//! an all-zero cell and never abort the run.

pub mod cli;
pub mod emit;
pub mod generate;
pub mod naming;
pub mod rasterizer;

pub use generate::{GenConfig, GenError, GenSummary, build_blob, run};
pub use naming::Naming;
pub use rasterizer::{FontdueRasterizer, Rasterizer};
