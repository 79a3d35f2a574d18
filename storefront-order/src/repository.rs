use async_trait::async_trait;
use uuid::Uuid;
use storefront_core::RepoResult;
use crate::models::{NewOrder, Order};

/// Repository trait for order data access
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Assign an identity to the order and persist it with its line items.
    async fn create(
        &self,
        order: NewOrder,
    ) -> RepoResult<Order>;

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> RepoResult<Option<Order>>;
}
