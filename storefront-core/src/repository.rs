use async_trait::async_trait;
use uuid::Uuid;
use crate::customer::{CreateCustomer, Customer};
use crate::RepoResult;

/// Repository trait for customer data access
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> RepoResult<Option<Customer>>;

    async fn find_by_email(
        &self,
        email: &str,
    ) -> RepoResult<Option<Customer>>;

    async fn create(
        &self,
        customer: CreateCustomer,
    ) -> RepoResult<Customer>;
}
