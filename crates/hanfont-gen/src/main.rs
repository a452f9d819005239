#![forbid(unsafe_code)]

//! hanfont-gen binary entry point.

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = hanfont_gen::cli::Opts::parse().into_config();
    match hanfont_gen::run(&config) {
        Ok(summary) => {
            println!(
                "generated {} ({} KiB)",
                summary.lib_dir.display(),
                summary.blob_len / 1024
            );
        }
        Err(e) => {
            eprintln!("hanfont-gen: {e}");
            std::process::exit(1);
        }
    }
}
