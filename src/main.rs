use anyhow::Result;
use clap::Parser;
use tracing::info;

use catalog::{CatalogLoader, CatalogSource};
use config::Args;

mod catalog;
mod config;
mod filter;
mod logging;
mod scroll;
mod ui;

async fn run(args: Args) -> Result<()> {
  logging::init(&args.log_file)?;
  info!(base_url = %args.base_url, timeout = args.timeout, "starting showroom");

  let source = CatalogSource::new(args.base_url.clone(), args.timeout())?;

  // the guard outlives the view, dropping it abandons a fetch still in flight
  let (catalog, _load) = CatalogLoader::begin(source);

  // drop returns terminal to normal mode
  let mut ui = ui::UI::new()?;
  ui.listen(catalog).await
}

#[tokio::main]
async fn main() {
  let code = match run(Args::parse()).await {
    Ok(()) => 0,
    Err(e) => {
      eprintln!("showroom: {:#}", e);
      1
    }
  };

  // forcibly exit process whenever UI task finishes, the stdin reader thread never does
  std::process::exit(code);
}
