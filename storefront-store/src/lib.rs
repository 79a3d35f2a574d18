pub mod app_config;
pub mod database;
pub mod customer_repo;
pub mod catalog_repo;
pub mod order_repo;
pub mod memory;

pub use database::DbClient;
pub use customer_repo::StoreCustomerRepository;
pub use catalog_repo::StoreProductRepository;
pub use order_repo::StoreOrderRepository;
pub use memory::{InMemoryCustomerRepository, InMemoryOrderRepository, InMemoryProductRepository};
