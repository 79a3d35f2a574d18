pub mod customer;
pub mod repository;

pub use customer::{CreateCustomer, CreateCustomerService, Customer, CustomerError};
pub use repository::CustomerRepository;

/// Error returned by every collaborator (repository) call.
pub type RepoError = Box<dyn std::error::Error + Send + Sync>;

pub type RepoResult<T> = Result<T, RepoError>;
