use std::path::PathBuf;
use std::time::Duration;
use clap::Parser;
use reqwest::Url;

/// Browse and filter a car catalog from your terminal
#[derive(Debug, Clone, Parser)]
#[command(name = "showroom", version, about)]
pub struct Args {
  /// Site serving the catalog, `api/cars.json` is resolved against it
  #[arg(short, long, default_value = "http://localhost:3000/")]
  pub base_url: Url,

  /// Request timeout in seconds
  #[arg(short, long, default_value_t = 10)]
  pub timeout: u64,

  /// Diagnostics go here, the terminal belongs to the UI (filter with RUST_LOG)
  #[arg(long, default_value = "showroom.log")]
  pub log_file: PathBuf
}

impl Args {
  pub fn timeout(&self) -> Duration {
    Duration::from_secs(self.timeout)
  }
}
