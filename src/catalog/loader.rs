use std::time::Duration;
use futures::channel::mpsc::{unbounded, UnboundedReceiver};
use reqwest::{Client, Url};
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use super::{Car, CatalogError};

/// Where the catalog lives, relative to the configured base url
pub const CATALOG_PATH: &str = "api/cars.json";

/// Resolves the catalog resource against `base`, the way a browser resolves a relative fetch.
pub fn catalog_url(base: &Url) -> Result<Url, CatalogError> {
  base.join(CATALOG_PATH).map_err(|e| CatalogError::Url(e.to_string()))
}

#[derive(Debug, Clone)]
pub struct CatalogSource {
  client: Client,
  base_url: Url
}

impl CatalogSource {
  pub fn new(base_url: Url, timeout: Duration) -> Result<Self, CatalogError> {
    let client = Client::builder()
      .timeout(timeout)
      .build()
      .map_err(CatalogError::Transport)?;

    Ok(Self { client, base_url })
  }

  /// Issues the single GET for the catalog. Any non-2xx answer is a failure.
  pub async fn fetch(&self) -> Result<Vec<Car>, CatalogError> {
    let url = catalog_url(&self.base_url)?;
    debug!(%url, "requesting catalog");

    let response = self.client
      .get(url)
      .send()
      .await
      .map_err(CatalogError::Transport)?;

    let status = response.status();
    if !status.is_success() {
      return Err(CatalogError::Status(status));
    }

    response.json::<Vec<Car>>().await.map_err(CatalogError::Decode)
  }
}

/// Ties the background fetch to whoever holds it. Dropping the guard aborts
/// the fetch, so a result can never reach a view that no longer exists.
#[derive(Debug)]
pub struct LoadGuard(JoinHandle<()>);

impl Drop for LoadGuard {
  fn drop(&mut self) {
    self.0.abort();
  }
}

pub struct CatalogLoader { }

impl CatalogLoader {
  /// Starts the one and only catalog fetch. The receiver yields the full catalog once
  /// on success. On failure the error is logged and the receiver simply closes.
  pub fn begin(source: CatalogSource) -> (UnboundedReceiver<Vec<Car>>, LoadGuard) {
    let (catalog_tx, catalog_rx) = unbounded::<Vec<Car>>();

    let handle = tokio::spawn(async move {
      match source.fetch().await {
        Ok(cars) => {
          info!(count = cars.len(), "catalog loaded");

          if catalog_tx.unbounded_send(cars).is_err() {
            debug!("catalog view is gone, discarding catalog");
          }
        },
        Err(e) => error!(error = %e, "catalog fetch failed")
      }
    });

    (catalog_rx, LoadGuard(handle))
  }
}
