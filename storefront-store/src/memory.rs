//! In-process repositories with the same observable behaviour as the
//! Postgres ones. Used by the `memory` storage backend and by tests.

use async_trait::async_trait;
use storefront_catalog::{inventory, CatalogProduct, CreateProduct, ProductQuantity, ProductRepository};
use storefront_core::{CreateCustomer, Customer, CustomerRepository, RepoResult};
use storefront_order::{NewOrder, Order, OrderRepository};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryCustomerRepository {
    customers: RwLock<Vec<Customer>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Customer>> {
        let customers = self.customers.read().await;
        Ok(customers.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Customer>> {
        let customers = self.customers.read().await;
        Ok(customers.iter().find(|c| c.email.expose() == email).cloned())
    }

    async fn create(&self, customer: CreateCustomer) -> RepoResult<Customer> {
        let mut customers = self.customers.write().await;
        if customers.iter().any(|c| c.email == customer.email) {
            return Err("customers.email must be unique".into());
        }

        let created = Customer::new(customer.name, customer.email.into_inner());
        customers.push(created.clone());
        Ok(created)
    }
}

/// Products are kept in insertion order, which is the catalog order
/// reported by `find_all_by_id`.
#[derive(Default)]
pub struct InMemoryProductRepository {
    products: RwLock<Vec<CatalogProduct>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all_by_id(&self, products: &[ProductQuantity]) -> RepoResult<Vec<CatalogProduct>> {
        let catalog = self.products.read().await;
        Ok(catalog
            .iter()
            .filter(|p| products.iter().any(|requested| requested.id == p.id))
            .cloned()
            .collect())
    }

    async fn update_quantity(&self, products: &[ProductQuantity]) -> RepoResult<()> {
        let mut catalog = self.products.write().await;
        inventory::decrement(&mut catalog, products)?;
        Ok(())
    }

    async fn find_by_name(&self, name: &str) -> RepoResult<Option<CatalogProduct>> {
        let catalog = self.products.read().await;
        Ok(catalog.iter().find(|p| p.name == name).cloned())
    }

    async fn create(&self, product: CreateProduct) -> RepoResult<CatalogProduct> {
        let mut catalog = self.products.write().await;
        if catalog.iter().any(|p| p.name == product.name) {
            return Err("products.name must be unique".into());
        }

        let created = CatalogProduct::new(product.name, product.price_cents, product.quantity);
        catalog.push(created.clone());
        Ok(created)
    }
}

#[derive(Default)]
pub struct InMemoryOrderRepository {
    orders: RwLock<Vec<Order>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of orders stored so far.
    pub async fn len(&self) -> usize {
        self.orders.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.orders.read().await.is_empty()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn create(&self, order: NewOrder) -> RepoResult<Order> {
        let order = Order::new(order);
        self.orders.write().await.push(order.clone());
        Ok(order)
    }

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Order>> {
        let orders = self.orders.read().await;
        Ok(orders.iter().find(|o| o.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_order::OrderLineItem;

    fn new_product(name: &str, price_cents: i64, quantity: i32) -> CreateProduct {
        CreateProduct { name: name.to_string(), price_cents, quantity }
    }

    #[tokio::test]
    async fn test_find_all_by_id_returns_existing_products_in_catalog_order() {
        let repo = InMemoryProductRepository::new();
        let p1 = repo.create(new_product("P1", 1000, 5)).await.unwrap();
        let p2 = repo.create(new_product("P2", 2000, 2)).await.unwrap();

        let found = repo
            .find_all_by_id(&[
                ProductQuantity { id: p2.id, quantity: 1 },
                ProductQuantity { id: Uuid::new_v4(), quantity: 1 },
                ProductQuantity { id: p1.id, quantity: 1 },
            ])
            .await
            .unwrap();

        let ids: Vec<Uuid> = found.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![p1.id, p2.id]);
    }

    #[tokio::test]
    async fn test_update_quantity_decrements_stock() {
        let repo = InMemoryProductRepository::new();
        let p1 = repo.create(new_product("P1", 1000, 5)).await.unwrap();

        repo.update_quantity(&[ProductQuantity { id: p1.id, quantity: 3 }]).await.unwrap();
        assert_eq!(repo.find_by_name("P1").await.unwrap().unwrap().quantity, 2);

        let overdraw = repo.update_quantity(&[ProductQuantity { id: p1.id, quantity: 3 }]).await;
        assert!(overdraw.is_err());
        assert_eq!(repo.find_by_name("P1").await.unwrap().unwrap().quantity, 2);
    }

    #[tokio::test]
    async fn test_unique_constraints() {
        let products = InMemoryProductRepository::new();
        products.create(new_product("P1", 1000, 5)).await.unwrap();
        assert!(products.create(new_product("P1", 1, 1)).await.is_err());

        let customers = InMemoryCustomerRepository::new();
        let request = CreateCustomer { name: "Jane".to_string(), email: "jane@example.com".to_string().into() };
        let jane = customers.create(request.clone()).await.unwrap();
        assert!(customers.create(request).await.is_err());
        assert_eq!(customers.find_by_email("jane@example.com").await.unwrap(), Some(jane.clone()));
        assert_eq!(customers.find_by_id(jane.id).await.unwrap(), Some(jane));
    }

    #[tokio::test]
    async fn test_orders_get_distinct_ids() {
        let repo = InMemoryOrderRepository::new();
        assert!(repo.is_empty().await);
        let customer = Customer::new("Jane".to_string(), "jane@example.com".to_string());
        let lines = vec![OrderLineItem { product_id: Uuid::new_v4(), price_cents: 1000, quantity: 1 }];

        let first = repo.create(NewOrder { customer: customer.clone(), products: lines.clone() }).await.unwrap();
        let second = repo.create(NewOrder { customer, products: lines }).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(repo.len().await, 2);
        assert_eq!(repo.find_by_id(first.id).await.unwrap(), Some(first));
        assert_eq!(repo.find_by_id(Uuid::new_v4()).await.unwrap(), None);
    }
}
