#![forbid(unsafe_code)]

//! The generation pipeline: validate, rasterize in parallel, pack, emit.

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use hanfont_asset::{CodepointRange, FontMetrics, pack_cell};

use crate::emit;
use crate::naming::Naming;
use crate::rasterizer::{FontdueRasterizer, Rasterizer};

/// Glyph interval between progress log lines.
const PROGRESS_STEP: usize = 1000;

/// Generation failures. All of them are raised before any output file is
/// touched; a failed run writes nothing.
#[derive(Debug)]
pub enum GenError {
    /// Requested cell size has no table entry.
    UnsupportedSize(u16),
    /// Source font file could not be read.
    FontRead { path: PathBuf, source: io::Error },
    /// Source font bytes could not be parsed.
    FontParse(String),
    /// Output emission failed.
    Io(io::Error),
    /// library.json serialization failed.
    Manifest(serde_json::Error),
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedSize(size) => write!(
                f,
                "unsupported size {size}; supported: {:?}",
                FontMetrics::SUPPORTED_SIZES
            ),
            Self::FontRead { path, source } => {
                write!(f, "cannot read font {}: {source}", path.display())
            }
            Self::FontParse(msg) => write!(f, "cannot parse font: {msg}"),
            Self::Io(err) => write!(f, "output error: {err}"),
            Self::Manifest(err) => write!(f, "manifest error: {err}"),
        }
    }
}

impl std::error::Error for GenError {}

impl From<io::Error> for GenError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for GenError {
    fn from(err: serde_json::Error) -> Self {
        Self::Manifest(err)
    }
}

/// One generation run's configuration.
#[derive(Debug, Clone)]
pub struct GenConfig {
    /// Source font file.
    pub font_path: PathBuf,
    /// Requested cell size; must have a table entry.
    pub size: u16,
    /// Code point range to cover.
    pub range: CodepointRange,
    /// Naming scheme for emitted artifacts.
    pub naming: Naming,
    /// Output directory; the library lands in `<out_dir>/<lib_name>/`.
    pub out_dir: PathBuf,
    /// Advisory UI hint emitted into the header; never enforced.
    pub max_chars_per_line: u32,
    /// Parallel rasterization workers.
    pub workers: usize,
}

impl GenConfig {
    /// Config covering GB2312 with the default naming scheme.
    #[must_use]
    pub fn new(font_path: PathBuf, size: u16, family: &str) -> Self {
        Self {
            font_path,
            size,
            range: CodepointRange::GB2312,
            naming: Naming::new(family, size),
            out_dir: PathBuf::from("lib"),
            // Advisory default for a classic 240 px panel.
            max_chars_per_line: 240 / u32::from(size.max(1)),
            workers: 1,
        }
    }
}

/// Rasterize and pack every glyph in `range` into one blob.
///
/// Each glyph's rasterize -> pack -> write step touches only its own
/// output region, so glyphs are fanned out across scoped workers over
/// disjoint `chunks_mut` regions with no shared mutable state. Rows within
/// one glyph stay top-to-bottom; the blob is valid only after the scope
/// joins every worker. A rasterizer miss leaves the glyph's region zeroed.
#[must_use]
pub fn build_blob(
    rasterizer: &(impl Rasterizer + Sync),
    range: CodepointRange,
    metrics: FontMetrics,
    workers: usize,
) -> Vec<u8> {
    let bytes_per_char = metrics.bytes_per_char();
    let char_count = range.char_count();
    let mut blob = vec![0u8; char_count * bytes_per_char];

    let workers = workers.clamp(1, char_count.max(1));
    let glyphs_per_chunk = char_count.div_ceil(workers);
    let done = AtomicUsize::new(0);

    std::thread::scope(|scope| {
        for (chunk_index, chunk) in blob.chunks_mut(glyphs_per_chunk * bytes_per_char).enumerate() {
            let first = range.start() + (chunk_index * glyphs_per_chunk) as u32;
            let done = &done;
            scope.spawn(move || {
                for (i, region) in chunk.chunks_mut(bytes_per_char).enumerate() {
                    let codepoint = first + i as u32;
                    if let Some(ch) = char::from_u32(codepoint)
                        && let Some(cell) = rasterizer.rasterize(ch, metrics.size())
                        && !cell.is_blank()
                    {
                        region.copy_from_slice(&pack_cell(&cell, metrics));
                    }
                    let finished = done.fetch_add(1, Ordering::Relaxed) + 1;
                    if finished % PROGRESS_STEP == 0 {
                        tracing::info!(finished, total = char_count, "rasterizing");
                    }
                }
            });
        }
    });
    blob
}

/// Summary of a completed run.
#[derive(Debug, Clone)]
pub struct GenSummary {
    /// Directory the library was written to.
    pub lib_dir: PathBuf,
    /// Blob length in bytes.
    pub blob_len: usize,
}

/// Execute one full generation run.
///
/// Validation happens up front: an unsupported size or an unreadable or
/// unparsable font returns before any output path is created.
pub fn run(config: &GenConfig) -> Result<GenSummary, GenError> {
    let metrics =
        FontMetrics::for_size(config.size).ok_or(GenError::UnsupportedSize(config.size))?;

    let data = std::fs::read(&config.font_path).map_err(|source| GenError::FontRead {
        path: config.font_path.clone(),
        source,
    })?;
    let rasterizer = FontdueRasterizer::from_bytes(&data).map_err(GenError::FontParse)?;

    tracing::info!(
        font = %config.font_path.display(),
        size = config.size,
        lib = %config.naming.lib_name(),
        chars = config.range.char_count(),
        workers = config.workers,
        "generating"
    );

    let blob = build_blob(&rasterizer, config.range, metrics, config.workers);
    let lib_dir = emit::emit_library(config, metrics, &blob)?;

    tracing::info!(
        lib_dir = %lib_dir.display(),
        kib = blob.len() / 1024,
        "generation complete"
    );
    Ok(GenSummary {
        lib_dir,
        blob_len: blob.len(),
    })
}
