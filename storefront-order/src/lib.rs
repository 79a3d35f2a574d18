pub mod models;
pub mod repository;
pub mod error;
pub mod create;
pub mod find;

pub use models::{CreateOrderRequest, NewOrder, Order, OrderLineItem};
pub use repository::OrderRepository;
pub use error::OrderError;
pub use create::CreateOrderService;
pub use find::FindOrderService;
