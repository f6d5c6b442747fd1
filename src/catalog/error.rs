use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong while loading the catalog. Every variant
/// is the same "catalog fetch failed" condition to the view.
#[derive(Debug, Error)]
pub enum CatalogError {
  #[error("catalog fetch failed: cannot resolve catalog path: {0}")]
  Url(String),

  #[error("catalog fetch failed: {0}")]
  Transport(#[source] reqwest::Error),

  #[error("catalog fetch failed: server answered {0}")]
  Status(StatusCode),

  #[error("catalog fetch failed: response is not a list of cars: {0}")]
  Decode(#[source] reqwest::Error)
}
