use thiserror::Error;
use tracing::debug;

use crate::catalog::Car;
use super::{derive_sub_options, Category};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
  #[error("'{value}' is not a {category} in this catalog")]
  UnknownSubOption { category: Category, value: String }
}

/// The catalog as the view sees it: the canonical list, the current
/// selections, and the subset those selections let through.
#[derive(Debug, Clone, Default)]
pub struct Showroom {
  /// Everything the loader delivered, in served order. Never filtered in place.
  cars: Vec<Car>,

  category: Option<Category>,
  sub_option: Option<String>,

  /// Subset of `cars` currently on display, canonical order preserved
  filtered: Vec<Car>
}

impl Showroom {
  pub fn new() -> Self { Self::default() }

  pub fn cars(&self) -> &[Car] { &self.cars }
  pub fn filtered(&self) -> &[Car] { &self.filtered }
  pub fn category(&self) -> Option<Category> { self.category }
  pub fn sub_option(&self) -> Option<&str> { self.sub_option.as_deref() }

  pub fn sub_options(&self) -> Vec<String> {
    derive_sub_options(&self.cars, self.category)
  }

  /// The catalog arrived: show all of it.
  pub fn on_loaded(&mut self, cars: Vec<Car>) {
    self.filtered = cars.clone();
    self.cars = cars;
  }

  /// Always resets the sub-option and shows the full catalog again,
  /// whatever was selected before.
  pub fn on_category_change(&mut self, category: Option<Category>) {
    debug!(?category, "category changed");

    self.category = category;
    self.sub_option = None;
    self.filtered = self.cars.clone();
  }

  /// Filters by strict equality on the current category's field. Without a category
  /// this does nothing. `None` is the placeholder entry and shows everything.
  pub fn on_sub_option_change(&mut self, sub_option: Option<&str>) -> Result<(), FilterError> {
    let category = match self.category {
      Some(c) => c,
      None => return Ok(())
    };

    let value = match sub_option {
      Some(v) => v,
      None => {
        self.sub_option = None;
        self.filtered = self.cars.clone();
        return Ok(());
      }
    };

    if !self.cars.iter().any(|car| category.field(car) == value) {
      return Err(FilterError::UnknownSubOption { category, value: value.into() });
    }

    self.filtered = self.cars
      .iter()
      .filter(|car| category.field(car) == value)
      .cloned()
      .collect();
    self.sub_option = Some(value.into());

    debug!(%category, value, shown = self.filtered.len(), "sub-option changed");
    Ok(())
  }

  // selector stepping, the way arrow keys walk a <select>: placeholder first, no wrapping

  pub fn next_category(&mut self) {
    let index = self.category_index();
    if index < Category::ALL.len() {
      self.on_category_change(Some(Category::ALL[index]));
    }
  }

  pub fn previous_category(&mut self) {
    match self.category_index() {
      0 => (),
      1 => self.on_category_change(None),
      i => self.on_category_change(Some(Category::ALL[i - 2]))
    }
  }

  pub fn next_sub_option(&mut self) {
    let options = self.sub_options();
    let index = self.sub_option_index(&options);

    if let Some(value) = options.get(index) {
      // drawn from the derived options, cannot be rejected
      let _ = self.on_sub_option_change(Some(value.as_str()));
    }
  }

  pub fn previous_sub_option(&mut self) {
    let options = self.sub_options();

    let _ = match self.sub_option_index(&options) {
      0 => Ok(()),
      1 => self.on_sub_option_change(None),
      i => self.on_sub_option_change(Some(options[i - 2].as_str()))
    };
  }

  /// Selector position of the category, 0 being the placeholder
  pub fn category_index(&self) -> usize {
    self.category
      .and_then(|c| Category::ALL.iter().position(|a| *a == c))
      .map_or(0, |i| i + 1)
  }

  /// Selector position of the sub-option within `options`, 0 being the placeholder
  pub fn sub_option_index(&self, options: &[String]) -> usize {
    self.sub_option
      .as_ref()
      .and_then(|s| options.iter().position(|o| o == s))
      .map_or(0, |i| i + 1)
  }
}
