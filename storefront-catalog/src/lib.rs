pub mod product;
pub mod pricing;
pub mod inventory;
pub mod repository;

pub use product::{CatalogError, CatalogProduct, CreateProduct, CreateProductService, ProductQuantity};
pub use inventory::InventoryError;
pub use repository::ProductRepository;
