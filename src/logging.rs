//! File logging for the terminal binary.
//!
//! The screen belongs to the game, so log records go to a file and nowhere
//! else. `RUST_LOG` selects levels as usual; the default is `info`.

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};

/// Install `env_logger` writing to `path` (appending).
pub fn init_file_logger(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("installing logger")?;
    Ok(())
}
