use std::sync::Arc;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use storefront_shared::Masked;
use uuid::Uuid;
use crate::repository::CustomerRepository;
use crate::RepoError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: Masked<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    pub fn new(name: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email: Masked::new(email),
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCustomer {
    pub name: String,
    pub email: Masked<String>,
}

/// Registers a customer, keeping e-mail addresses unique.
pub struct CreateCustomerService {
    customers: Arc<dyn CustomerRepository>,
}

impl CreateCustomerService {
    pub fn new(customers: Arc<dyn CustomerRepository>) -> Self {
        Self { customers }
    }

    #[tracing::instrument(skip(self, request))]
    pub async fn execute(&self, request: CreateCustomer) -> Result<Customer, CustomerError> {
        if request.name.trim().is_empty() {
            return Err(CustomerError::Invalid("customer name is required".to_string()));
        }
        if !request.email.expose().contains('@') {
            return Err(CustomerError::Invalid("customer email is malformed".to_string()));
        }

        let existing = self.customers.find_by_email(request.email.expose()).await?;
        if existing.is_some() {
            tracing::warn!("Rejected customer registration: email already in use");
            return Err(CustomerError::EmailInUse);
        }

        let customer = self.customers.create(request).await?;
        tracing::info!(customer_id = %customer.id, "Customer created");
        Ok(customer)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CustomerError {
    #[error("Email address already in use")]
    EmailInUse,

    #[error("Invalid customer: {0}")]
    Invalid(String),

    #[error("Repository error: {0}")]
    Repository(#[from] RepoError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use crate::RepoResult;

    #[derive(Default)]
    struct FakeCustomers {
        rows: Mutex<Vec<Customer>>,
    }

    #[async_trait]
    impl CustomerRepository for FakeCustomers {
        async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Customer>> {
            Ok(self.rows.lock().unwrap().iter().find(|c| c.id == id).cloned())
        }

        async fn find_by_email(&self, email: &str) -> RepoResult<Option<Customer>> {
            Ok(self.rows.lock().unwrap().iter().find(|c| c.email.expose() == email).cloned())
        }

        async fn create(&self, customer: CreateCustomer) -> RepoResult<Customer> {
            let created = Customer::new(customer.name, customer.email.into_inner());
            self.rows.lock().unwrap().push(created.clone());
            Ok(created)
        }
    }

    fn request(name: &str, email: &str) -> CreateCustomer {
        CreateCustomer { name: name.to_string(), email: Masked::new(email.to_string()) }
    }

    #[tokio::test]
    async fn test_create_customer() {
        let repo = Arc::new(FakeCustomers::default());
        let service = CreateCustomerService::new(repo.clone());

        let customer = service.execute(request("Jane", "jane@example.com")).await.unwrap();

        assert_eq!(customer.name, "Jane");
        assert_eq!(customer.email.expose(), "jane@example.com");
        assert_eq!(repo.rows.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let repo = Arc::new(FakeCustomers::default());
        let service = CreateCustomerService::new(repo.clone());

        service.execute(request("Jane", "jane@example.com")).await.unwrap();
        let err = service.execute(request("Janet", "jane@example.com")).await.unwrap_err();

        assert!(matches!(err, CustomerError::EmailInUse));
        assert_eq!(repo.rows.lock().unwrap().len(), 1);
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_registration_logs_no_personal_data() {
        let captured = CapturedLogs::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let service = CreateCustomerService::new(Arc::new(FakeCustomers::default()));
        service.execute(request("Jane Doe", "jane@example.com")).await.unwrap();

        let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("Customer created"));
        assert!(!logs.contains("Jane Doe"));
        assert!(!logs.contains("jane@example.com"));
    }

    #[tokio::test]
    async fn test_blank_name_is_rejected() {
        let service = CreateCustomerService::new(Arc::new(FakeCustomers::default()));

        let err = service.execute(request("  ", "jane@example.com")).await.unwrap_err();
        assert!(matches!(err, CustomerError::Invalid(_)));
    }
}
