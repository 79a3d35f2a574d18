use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use storefront_core::{Customer, RepoResult};
use storefront_order::{NewOrder, Order, OrderLineItem, OrderRepository};
use uuid::Uuid;

pub struct StoreOrderRepository {
    pool: PgPool,
}

impl StoreOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: Uuid,
    total_cents: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    customer_id: Uuid,
    customer_name: String,
    customer_email: String,
    customer_created_at: DateTime<Utc>,
    customer_updated_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct OrderProductRow {
    product_id: Uuid,
    price_cents: i64,
    quantity: i32,
}

#[async_trait]
impl OrderRepository for StoreOrderRepository {
    async fn create(
        &self,
        order: NewOrder,
    ) -> RepoResult<Order> {
        let order = Order::new(order);

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO orders (id, customer_id, total_cents, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(order.id)
        .bind(order.customer.id)
        .bind(order.total_cents)
        .bind(order.created_at)
        .bind(order.updated_at)
        .execute(&mut *tx)
        .await?;

        for (position, item) in order.items.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO order_products (id, order_id, product_id, position, price_cents, quantity)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(order.id)
            .bind(item.product_id)
            .bind(i32::try_from(position)?)
            .bind(item.price_cents)
            .bind(item.quantity)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(order)
    }

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> RepoResult<Option<Order>> {
        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT o.id, o.total_cents, o.created_at, o.updated_at,
                   c.id AS customer_id, c.name AS customer_name, c.email AS customer_email,
                   c.created_at AS customer_created_at, c.updated_at AS customer_updated_at
            FROM orders o
            JOIN customers c ON c.id = o.customer_id
            WHERE o.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let items = sqlx::query_as::<_, OrderProductRow>(
            "SELECT product_id, price_cents, quantity FROM order_products WHERE order_id = $1 ORDER BY position",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(Order {
            id: row.id,
            customer: Customer {
                id: row.customer_id,
                name: row.customer_name,
                email: row.customer_email.into(),
                created_at: row.customer_created_at,
                updated_at: row.customer_updated_at,
            },
            items: items
                .into_iter()
                .map(|item| OrderLineItem {
                    product_id: item.product_id,
                    price_cents: item.price_cents,
                    quantity: item.quantity,
                })
                .collect(),
            total_cents: row.total_cents,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }))
    }
}
