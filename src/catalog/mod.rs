mod fs;
mod source;

pub use fs::{CatalogFormat, FsCatalog, write_category};
pub use source::{FoodCatalog, StaticCatalog};
