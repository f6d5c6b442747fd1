use std::fmt::{Display, Formatter, Result};
use crate::catalog::Car;

/// The fields of a [`Car`] the catalog can be filtered by.
/// `Option<Category>` is used wherever "no category" is a valid choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
  ModelName,
  BodyType
}

impl Category {
  /// Selector order. Both the category selector and the filter go through this list.
  pub const ALL: [Category; 2] = [Category::ModelName, Category::BodyType];

  /// The value of this category's field on `car`
  pub fn field<'a>(&self, car: &'a Car) -> &'a str {
    match self {
      Category::ModelName => &car.model_name,
      Category::BodyType  => &car.body_type
    }
  }

  /// Human label, shown in the category selector
  pub fn label(&self) -> &'static str {
    match self {
      Category::ModelName => "Model Name",
      Category::BodyType  => "Body Type"
    }
  }
}

impl From<&Category> for &'static str {
  fn from(category: &Category) -> &'static str {
    match category {
      Category::ModelName => "modelName",
      Category::BodyType  => "bodyType"
    }
  }
}

impl Display for Category {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    write!(f, "{}", <&'static str>::from(self))
  }
}
