#![forbid(unsafe_code)]

//! Command-line argument parsing for the generator.
//!
//! Parses args manually (no external dependencies) to keep the binary
//! lean. Supports environment variable overrides via the `HANFONT_GEN_*`
//! prefix; explicit flags win over environment values.

use std::env;
use std::path::PathBuf;
use std::process;

use hanfont_asset::FontMetrics;

use crate::generate::GenConfig;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
hanfont-gen — GB2312 bitmap glyph library generator

USAGE:
    hanfont-gen <FONT_FILE> <SIZE> <FAMILY> [OPTIONS]

ARGS:
    FONT_FILE            Path to a TTF/OTF font file
    SIZE                 Cell size: 8, 10, 12, 14, 16, 20, 24, 28, 32, 36, 40
    FAMILY               Family name used in artifact names (FangSong, KaiTi, ...)

OPTIONS:
    --out-dir=DIR        Output directory (default: lib)
    --max-chars=N        Advisory chars-per-line hint (default: 240 / SIZE)
    --workers=N          Parallel rasterization workers (default: available cores)
    --help, -h           Show this help message
    --version, -V        Show version

EXAMPLES:
    hanfont-gen simfang.ttf 16 FangSong
    hanfont-gen simkai.ttf 24 KaiTi --out-dir=assets

ENVIRONMENT VARIABLES:
    HANFONT_GEN_OUT_DIR    Override --out-dir
    HANFONT_GEN_MAX_CHARS  Override --max-chars
    HANFONT_GEN_WORKERS    Override --workers";

/// Parsed command-line options.
#[derive(Debug)]
pub struct Opts {
    /// Source font file.
    pub font_path: PathBuf,
    /// Requested cell size.
    pub size: u16,
    /// Family name for the naming scheme.
    pub family: String,
    /// Output directory.
    pub out_dir: PathBuf,
    /// Advisory chars-per-line override.
    pub max_chars: Option<u32>,
    /// Worker count override.
    pub workers: Option<usize>,
}

impl Opts {
    /// Parse command-line arguments and environment variables.
    ///
    /// Prints help/usage and exits on `--help`, `--version`, or malformed
    /// input; this never returns in those cases.
    pub fn parse() -> Self {
        let args: Vec<String> = env::args().skip(1).collect();
        if args.iter().any(|a| a == "--help" || a == "-h") {
            println!("{HELP_TEXT}");
            process::exit(0);
        }
        if args.iter().any(|a| a == "--version" || a == "-V") {
            println!("hanfont-gen {VERSION}");
            process::exit(0);
        }

        let mut out_dir: Option<PathBuf> = env::var("HANFONT_GEN_OUT_DIR").ok().map(PathBuf::from);
        let mut max_chars: Option<u32> = env::var("HANFONT_GEN_MAX_CHARS")
            .ok()
            .and_then(|v| v.parse().ok());
        let mut workers: Option<usize> = env::var("HANFONT_GEN_WORKERS")
            .ok()
            .and_then(|v| v.parse().ok());

        let mut positional: Vec<&str> = Vec::new();
        for arg in &args {
            if let Some(value) = arg.strip_prefix("--out-dir=") {
                out_dir = Some(PathBuf::from(value));
            } else if let Some(value) = arg.strip_prefix("--max-chars=") {
                max_chars = value.parse().ok();
                if max_chars.is_none() {
                    usage_error(&format!("invalid --max-chars value: {value}"));
                }
            } else if let Some(value) = arg.strip_prefix("--workers=") {
                workers = value.parse().ok();
                if workers.is_none() {
                    usage_error(&format!("invalid --workers value: {value}"));
                }
            } else if arg.starts_with("--") {
                usage_error(&format!("unknown option: {arg}"));
            } else {
                positional.push(arg);
            }
        }

        if positional.len() != 3 {
            usage_error("expected <FONT_FILE> <SIZE> <FAMILY>");
        }
        let (font, size_arg, family) = (positional[0], positional[1], positional[2]);
        let Ok(size) = size_arg.parse::<u16>() else {
            usage_error(&format!("invalid size: {size_arg}"));
        };
        if FontMetrics::for_size(size).is_none() {
            usage_error(&format!(
                "unsupported size {size}; supported: {:?}",
                FontMetrics::SUPPORTED_SIZES
            ));
        }

        Self {
            font_path: PathBuf::from(font),
            size,
            family: family.to_owned(),
            out_dir: out_dir.unwrap_or_else(|| PathBuf::from("lib")),
            max_chars,
            workers,
        }
    }

    /// Resolve into a full generation config.
    #[must_use]
    pub fn into_config(self) -> GenConfig {
        let mut config = GenConfig::new(self.font_path, self.size, &self.family);
        config.out_dir = self.out_dir;
        if let Some(max_chars) = self.max_chars {
            config.max_chars_per_line = max_chars;
        }
        config.workers = self.workers.unwrap_or_else(|| {
            std::thread::available_parallelism().map_or(1, |n| n.get())
        });
        config
    }
}

fn usage_error(message: &str) -> ! {
    eprintln!("hanfont-gen: {message}");
    eprintln!("Try 'hanfont-gen --help' for usage.");
    process::exit(2);
}
