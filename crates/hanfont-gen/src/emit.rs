#![forbid(unsafe_code)]

//! Output emission.
//!
//! A generated library is a small self-contained crate:
//!
//! ```text
//! <out_dir>/<lib_name>/
//!   Cargo.toml           generated crate manifest
//!   library.json         packaging manifest
//!   src/
//!     lib.rs             header module: constants + asset() constructor
//!     <lib_name>.bin     packed glyph blob
//! ```
//!
//! Emission runs after all validation; a failed run never reaches it.

use std::fs;
use std::path::PathBuf;

use hanfont_asset::FontMetrics;
use serde::Serialize;

use crate::generate::{GenConfig, GenError};

/// Packaging manifest serialized to `library.json`.
#[derive(Debug, Serialize)]
struct LibraryManifest<'a> {
    name: &'a str,
    version: &'a str,
    description: &'a str,
    platforms: &'a str,
}

/// Write the generated library tree and return its directory.
pub fn emit_library(
    config: &GenConfig,
    metrics: FontMetrics,
    blob: &[u8],
) -> Result<PathBuf, GenError> {
    let lib_name = config.naming.lib_name();
    let lib_dir = config.out_dir.join(&lib_name);
    let src_dir = lib_dir.join("src");
    fs::create_dir_all(&src_dir)?;

    fs::write(src_dir.join(format!("{lib_name}.bin")), blob)?;
    fs::write(src_dir.join("lib.rs"), header_source(config, metrics))?;
    fs::write(lib_dir.join("Cargo.toml"), crate_manifest(config))?;

    let manifest = LibraryManifest {
        name: &lib_name,
        version: "1.0.0",
        description: &description(config),
        platforms: "espressif32",
    };
    let json = serde_json::to_string_pretty(&manifest)?;
    fs::write(lib_dir.join("library.json"), json)?;

    Ok(lib_dir)
}

fn description(config: &GenConfig) -> String {
    format!(
        "{size}x{size} GB2312 Chinese font ({family})",
        size = config.size,
        family = config.naming.family()
    )
}

/// The generated header module: the four constants that must travel with
/// the blob, the embedded blob itself, and a validated constructor.
fn header_source(config: &GenConfig, metrics: FontMetrics) -> String {
    let lib_name = config.naming.lib_name();
    let obj_name = config.naming.obj_name();
    format!(
        r#"//! {obj_name}: {desc}, generated by hanfont-gen.

#![forbid(unsafe_code)]

use hanfont_asset::{{AssetError, FontAsset}};

pub const RANGE_START: u32 = 0x{start:04X};
pub const RANGE_END: u32 = 0x{end:04X};
pub const CELL_SIZE: u16 = {size};
pub const BYTES_PER_CHAR: usize = {bytes_per_char};
/// Advisory UI hint; not enforced by the codec.
pub const MAX_CHARS_PER_LINE: u32 = {max_chars};

pub static FONT_DATA: &[u8] = include_bytes!("{lib_name}.bin");

/// Validated [`FontAsset`] over the embedded blob.
pub fn asset() -> Result<FontAsset, AssetError> {{
    FontAsset::from_parts(FONT_DATA, RANGE_START, RANGE_END, CELL_SIZE)
}}
"#,
        desc = description(config),
        start = config.range.start(),
        end = config.range.end(),
        size = config.size,
        bytes_per_char = metrics.bytes_per_char(),
        max_chars = config.max_chars_per_line,
    )
}

fn crate_manifest(config: &GenConfig) -> String {
    format!(
        r#"[package]
name = "{crate_name}"
version = "1.0.0"
edition = "2024"
description = "{desc}"

[dependencies]
hanfont-asset = "0.1"
"#,
        crate_name = config.naming.crate_name(),
        desc = description(config),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn config_at(out_dir: &Path) -> GenConfig {
        let mut config = GenConfig::new(PathBuf::from("font.ttf"), 16, "FangSong");
        config.out_dir = out_dir.to_path_buf();
        config
    }

    #[test]
    fn header_carries_the_travelling_constants() {
        let config = config_at(Path::new("lib"));
        let metrics = FontMetrics::for_size(16).unwrap();
        let header = header_source(&config, metrics);
        assert!(header.contains("pub const RANGE_START: u32 = 0x4E00;"));
        assert!(header.contains("pub const RANGE_END: u32 = 0x9FA5;"));
        assert!(header.contains("pub const CELL_SIZE: u16 = 16;"));
        assert!(header.contains("pub const BYTES_PER_CHAR: usize = 32;"));
        assert!(header.contains("pub const MAX_CHARS_PER_LINE: u32 = 15;"));
        assert!(header.contains(r#"include_bytes!("GB2312_16_FangSong.bin")"#));
    }

    #[test]
    fn crate_manifest_uses_the_naming_scheme() {
        let config = config_at(Path::new("lib"));
        let manifest = crate_manifest(&config);
        assert!(manifest.contains(r#"name = "gb2312-16-fangsong""#));
    }
}
