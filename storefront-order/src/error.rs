use storefront_catalog::InventoryError;
use storefront_core::RepoError;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("Customer not found: {0}")]
    CustomerNotFound(Uuid),

    #[error("One or more products do not exist")]
    ProductNotFound,

    #[error("Insufficient stock for product {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: Uuid,
        requested: i32,
        available: i32,
    },

    #[error("Invalid order request: {0}")]
    InvalidRequest(String),

    #[error("Order not found: {0}")]
    OrderNotFound(Uuid),

    #[error("Repository error: {0}")]
    Repository(#[from] RepoError),
}

impl From<InventoryError> for OrderError {
    fn from(err: InventoryError) -> Self {
        match err {
            InventoryError::NotFound(_) => OrderError::ProductNotFound,
            InventoryError::InsufficientInventory { product_id, requested, available } => {
                OrderError::InsufficientStock { product_id, requested, available }
            }
        }
    }
}
