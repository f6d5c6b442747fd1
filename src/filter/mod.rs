mod category;
mod showroom;

pub use category::*;
pub use showroom::*;

use std::collections::HashSet;
use crate::catalog::Car;

/// Distinct values of `category` across `cars`, in order of first occurrence.
/// Empty when no category is chosen.
pub fn derive_sub_options(cars: &[Car], category: Option<Category>) -> Vec<String> {
  let category = match category {
    Some(c) => c,
    None => return vec![]
  };

  let mut seen = HashSet::new();
  cars
    .iter()
    .map(|car| category.field(car))
    .filter(|value| seen.insert(*value))
    .map(String::from)
    .collect()
}
