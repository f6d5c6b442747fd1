use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Sends all diagnostics to `path`. Stdout is owned by the terminal UI, so nothing may log there.
pub fn init(path: &Path) -> Result<()> {
  let file = File::create(path)
    .with_context(|| format!("Failed to open log file {}", path.display()))?;

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(Mutex::new(file))
    .with_ansi(false)
    .try_init()
    .map_err(|e| anyhow::anyhow!(e))
    .context("Failed to install log subscriber")
}
