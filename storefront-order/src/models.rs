use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use storefront_catalog::{pricing, ProductQuantity};
use storefront_core::Customer;

/// A placed order. Line prices are the catalog prices at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub customer: Customer,
    pub items: Vec<OrderLineItem>,
    pub total_cents: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Build a freshly identified order from the validated input.
    pub fn new(order: NewOrder) -> Self {
        let now = Utc::now();
        Self::with_id(Uuid::new_v4(), order, now)
    }

    pub fn with_id(id: Uuid, order: NewOrder, created_at: DateTime<Utc>) -> Self {
        let total_cents = pricing::order_total(
            order.products.iter().map(|item| (item.price_cents, item.quantity)),
        );
        Self {
            id,
            customer: order.customer,
            items: order.products,
            total_cents,
            created_at,
            updated_at: created_at,
        }
    }
}

/// One priced product line of an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub product_id: Uuid,
    pub price_cents: i64,
    pub quantity: i32,
}

impl OrderLineItem {
    pub fn line_total(&self) -> i64 {
        pricing::line_total(self.price_cents, self.quantity)
    }
}

/// What the order store receives: the resolved customer and the computed lines
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer: Customer,
    pub products: Vec<OrderLineItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub customer_id: Uuid,
    pub products: Vec<ProductQuantity>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_total_follows_line_items() {
        let customer = Customer::new("Jane".to_string(), "jane@example.com".to_string());
        let order = Order::new(NewOrder {
            customer: customer.clone(),
            products: vec![
                OrderLineItem { product_id: Uuid::new_v4(), price_cents: 1000, quantity: 3 },
                OrderLineItem { product_id: Uuid::new_v4(), price_cents: 2000, quantity: 2 },
            ],
        });

        assert_eq!(order.customer, customer);
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.items[0].line_total(), 3000);
        assert_eq!(order.total_cents, 7000);
        assert_eq!(order.created_at, order.updated_at);
    }

    #[test]
    fn test_create_order_request_wire_shape() {
        let customer_id = Uuid::new_v4();
        let product_id = Uuid::new_v4();
        let body = serde_json::json!({
            "customer_id": customer_id,
            "products": [{ "id": product_id, "quantity": 3 }],
        });

        let request: CreateOrderRequest = serde_json::from_value(body).unwrap();

        assert_eq!(request.customer_id, customer_id);
        assert_eq!(request.products, vec![ProductQuantity { id: product_id, quantity: 3 }]);
    }
}
