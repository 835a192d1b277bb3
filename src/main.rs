//! creatorgen — Qt Creator generic-project generator.
//!
//! Thin binary entry point. All logic lives in the `creatorgen-core` crate.
//! Run it with no arguments from the project root.

use anyhow::Context;
use creatorgen_core::{generate, GeneratorConfig};

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let root = std::env::current_dir().context("cannot resolve the current directory")?;
    let config = GeneratorConfig::default();

    let summary = generate(&root, &config)
        .with_context(|| format!("project generation failed in {}", root.display()))?;

    tracing::info!(
        "Done: {} of {} files listed",
        summary.files_written,
        summary.files_found
    );
    Ok(())
}
