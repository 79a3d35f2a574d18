use std::sync::Arc;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use storefront_core::RepoError;
use uuid::Uuid;
use crate::repository::ProductRepository;

/// A sellable product with its current price and stock on hand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub id: Uuid,
    pub name: String,
    pub price_cents: i64,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CatalogProduct {
    pub fn new(name: String, price_cents: i64, quantity: i32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            price_cents,
            quantity,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A product id paired with a quantity: one requested order line, or one
/// stock decrement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductQuantity {
    pub id: Uuid,
    pub quantity: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    pub price_cents: i64,
    pub quantity: i32,
}

/// Adds a product to the catalog. Names are unique.
pub struct CreateProductService {
    products: Arc<dyn ProductRepository>,
}

impl CreateProductService {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, request: CreateProduct) -> Result<CatalogProduct, CatalogError> {
        if request.name.trim().is_empty() {
            return Err(CatalogError::Invalid("product name is required".to_string()));
        }
        if request.price_cents < 0 {
            return Err(CatalogError::Invalid("price must not be negative".to_string()));
        }
        if request.quantity < 0 {
            return Err(CatalogError::Invalid("quantity must not be negative".to_string()));
        }

        if self.products.find_by_name(&request.name).await?.is_some() {
            tracing::warn!("Rejected product: name already in use");
            return Err(CatalogError::NameInUse(request.name));
        }

        let product = self.products.create(request).await?;
        tracing::info!(product_id = %product.id, "Product created");
        Ok(product)
    }
}

/// Catalog-related errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Product name already in use: {0}")]
    NameInUse(String),

    #[error("Invalid product: {0}")]
    Invalid(String),

    #[error("Repository error: {0}")]
    Repository(#[from] RepoError),
}
