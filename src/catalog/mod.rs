mod car;
mod error;
mod loader;

pub use car::*;
pub use error::*;
pub use loader::*;
