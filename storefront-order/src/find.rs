use std::sync::Arc;
use uuid::Uuid;
use crate::error::OrderError;
use crate::models::Order;
use crate::repository::OrderRepository;

pub struct FindOrderService {
    orders: Arc<dyn OrderRepository>,
}

impl FindOrderService {
    pub fn new(orders: Arc<dyn OrderRepository>) -> Self {
        Self { orders }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, order_id: Uuid) -> Result<Order, OrderError> {
        self.orders
            .find_by_id(order_id)
            .await?
            .ok_or(OrderError::OrderNotFound(order_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use storefront_core::{Customer, RepoResult};
    use crate::models::NewOrder;

    struct SingleOrder(Order);

    #[async_trait]
    impl OrderRepository for SingleOrder {
        async fn create(&self, order: NewOrder) -> RepoResult<Order> {
            Ok(Order::new(order))
        }

        async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Order>> {
            Ok(Some(self.0.clone()).filter(|o| o.id == id))
        }
    }

    #[tokio::test]
    async fn test_find_order() {
        let order = Order::new(NewOrder {
            customer: Customer::new("Jane".to_string(), "jane@example.com".to_string()),
            products: Vec::new(),
        });
        let service = FindOrderService::new(Arc::new(SingleOrder(order.clone())));

        assert_eq!(service.execute(order.id).await.unwrap(), order);

        let missing = Uuid::new_v4();
        let err = service.execute(missing).await.unwrap_err();
        assert!(matches!(err, OrderError::OrderNotFound(id) if id == missing));
    }
}
