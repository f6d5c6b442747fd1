use serde::Deserialize;

/// One listing of the catalog, exactly as served by the data endpoint
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Car {
  pub id: String,

  /// The consumer-recognizable name, e.g. "XC90"
  pub model_name: String,

  /// e.g. "suv", "estate", "sedan"
  pub body_type: String,

  /// The variant of the model, e.g. "plug-in hybrid"
  pub model_type: String,

  /// Static asset reference, never resolved by this program
  pub image_url: String
}
