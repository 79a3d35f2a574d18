use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use storefront_core::{CreateCustomer, Customer, CustomerRepository, RepoResult};
use uuid::Uuid;

pub struct StoreCustomerRepository {
    pool: PgPool,
}

impl StoreCustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CustomerRow {
    id: Uuid,
    name: String,
    email: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer {
            id: row.id,
            name: row.name,
            email: row.email.into(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl CustomerRepository for StoreCustomerRepository {
    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> RepoResult<Option<Customer>> {
        let row = sqlx::query_as::<_, CustomerRow>(
            "SELECT id, name, email, created_at, updated_at FROM customers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Customer::from))
    }

    async fn find_by_email(
        &self,
        email: &str,
    ) -> RepoResult<Option<Customer>> {
        let row = sqlx::query_as::<_, CustomerRow>(
            "SELECT id, name, email, created_at, updated_at FROM customers WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Customer::from))
    }

    async fn create(
        &self,
        customer: CreateCustomer,
    ) -> RepoResult<Customer> {
        let customer = Customer::new(customer.name, customer.email.into_inner());

        sqlx::query(
            r#"
            INSERT INTO customers (id, name, email, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(customer.id)
        .bind(customer.name.as_str())
        .bind(customer.email.expose().as_str())
        .bind(customer.created_at)
        .bind(customer.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(customer)
    }
}
