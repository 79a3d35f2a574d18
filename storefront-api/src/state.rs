use std::sync::Arc;
use storefront_catalog::{CreateProductService, ProductRepository};
use storefront_core::{CreateCustomerService, CustomerRepository};
use storefront_order::{CreateOrderService, FindOrderService, OrderRepository};
use storefront_store::{
    DbClient, InMemoryCustomerRepository, InMemoryOrderRepository, InMemoryProductRepository,
    StoreCustomerRepository, StoreOrderRepository, StoreProductRepository,
};

#[derive(Clone)]
pub struct AppState {
    pub customer_repo: Arc<dyn CustomerRepository>,
    pub product_repo: Arc<dyn ProductRepository>,
    pub order_repo: Arc<dyn OrderRepository>,
}

impl AppState {
    pub fn postgres(db: &DbClient) -> Self {
        Self {
            customer_repo: Arc::new(StoreCustomerRepository::new(db.pool.clone())),
            product_repo: Arc::new(StoreProductRepository::new(db.pool.clone())),
            order_repo: Arc::new(StoreOrderRepository::new(db.pool.clone())),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            customer_repo: Arc::new(InMemoryCustomerRepository::new()),
            product_repo: Arc::new(InMemoryProductRepository::new()),
            order_repo: Arc::new(InMemoryOrderRepository::new()),
        }
    }

    pub fn create_customer_service(&self) -> CreateCustomerService {
        CreateCustomerService::new(self.customer_repo.clone())
    }

    pub fn create_product_service(&self) -> CreateProductService {
        CreateProductService::new(self.product_repo.clone())
    }

    pub fn create_order_service(&self) -> CreateOrderService {
        CreateOrderService::new(
            self.order_repo.clone(),
            self.product_repo.clone(),
            self.customer_repo.clone(),
        )
    }

    pub fn find_order_service(&self) -> FindOrderService {
        FindOrderService::new(self.order_repo.clone())
    }
}
