//! CLI entry point for the pipeline.

use statute_pipeline::cli;
use tracing_subscriber::EnvFilter;

fn main() {
    // INFO by default so progress lines are visible, respecting RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
