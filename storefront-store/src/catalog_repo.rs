use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use storefront_catalog::{CatalogProduct, CreateProduct, ProductQuantity, ProductRepository};
use storefront_core::RepoResult;
use uuid::Uuid;

pub struct StoreProductRepository {
    pool: PgPool,
}

impl StoreProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: Uuid,
    name: String,
    price_cents: i64,
    quantity: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ProductRow> for CatalogProduct {
    fn from(row: ProductRow) -> Self {
        CatalogProduct {
            id: row.id,
            name: row.name,
            price_cents: row.price_cents,
            quantity: row.quantity,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl ProductRepository for StoreProductRepository {
    async fn find_all_by_id(
        &self,
        products: &[ProductQuantity],
    ) -> RepoResult<Vec<CatalogProduct>> {
        let ids: Vec<Uuid> = products.iter().map(|p| p.id).collect();

        let rows = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, price_cents, quantity, created_at, updated_at FROM products WHERE id = ANY($1) ORDER BY created_at, id",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CatalogProduct::from).collect())
    }

    async fn update_quantity(
        &self,
        products: &[ProductQuantity],
    ) -> RepoResult<()> {
        let mut tx = self.pool.begin().await?;

        for line in products {
            // The CHECK (quantity >= 0) constraint rejects an overdraw and
            // rolls back the whole batch.
            let result = sqlx::query(
                "UPDATE products SET quantity = quantity - $1, updated_at = NOW() WHERE id = $2",
            )
            .bind(line.quantity)
            .bind(line.id)
            .execute(&mut *tx)
            .await?;

            if result.rows_affected() == 0 {
                return Err(format!("Product not found: {}", line.id).into());
            }
        }

        tx.commit().await?;
        Ok(())
    }

    async fn find_by_name(
        &self,
        name: &str,
    ) -> RepoResult<Option<CatalogProduct>> {
        let row = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, price_cents, quantity, created_at, updated_at FROM products WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CatalogProduct::from))
    }

    async fn create(
        &self,
        product: CreateProduct,
    ) -> RepoResult<CatalogProduct> {
        let product = CatalogProduct::new(product.name, product.price_cents, product.quantity);

        sqlx::query(
            r#"
            INSERT INTO products (id, name, price_cents, quantity, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(product.id)
        .bind(product.name.as_str())
        .bind(product.price_cents)
        .bind(product.quantity)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(product)
    }
}
