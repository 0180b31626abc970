pub mod catalog;
pub mod config;
pub mod errors;

pub use catalog::product::{NewProduct, Product, ProductPatch};
pub use catalog::{CatalogStore, ProductPage, DEFAULT_LIST_LIMIT, LIST_WINDOW_START};
pub use errors::StoreError;
