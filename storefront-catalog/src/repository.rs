use async_trait::async_trait;
use storefront_core::RepoResult;
use crate::product::{CatalogProduct, CreateProduct, ProductQuantity};

/// Repository trait for product catalog access
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Resolve every requested id in one batch. Ids that do not exist are
    /// simply absent from the result, which is returned in catalog order.
    async fn find_all_by_id(
        &self,
        products: &[ProductQuantity],
    ) -> RepoResult<Vec<CatalogProduct>>;

    /// Decrement the stock of each product by the given quantity.
    async fn update_quantity(
        &self,
        products: &[ProductQuantity],
    ) -> RepoResult<()>;

    async fn find_by_name(
        &self,
        name: &str,
    ) -> RepoResult<Option<CatalogProduct>>;

    async fn create(
        &self,
        product: CreateProduct,
    ) -> RepoResult<CatalogProduct>;
}
