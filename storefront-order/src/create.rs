use std::sync::Arc;
use storefront_catalog::{inventory, CatalogProduct, ProductQuantity, ProductRepository};
use storefront_core::CustomerRepository;
use tracing::{error, info, warn};
use crate::error::OrderError;
use crate::models::{CreateOrderRequest, NewOrder, Order, OrderLineItem};
use crate::repository::OrderRepository;

/// Places an order for an existing customer.
///
/// The steps run strictly in sequence: resolve the customer, resolve every
/// requested product in one batch, check stock, price the lines from the
/// catalog, persist the order, then decrement stock. An unknown customer is
/// reported before the shape of the product list is checked, and a malformed
/// list is rejected before the catalog is queried. Any rejection happens
/// before the order is persisted. Stock checks and decrements are not
/// coordinated across concurrent calls.
pub struct CreateOrderService {
    orders: Arc<dyn OrderRepository>,
    products: Arc<dyn ProductRepository>,
    customers: Arc<dyn CustomerRepository>,
}

impl CreateOrderService {
    pub fn new(
        orders: Arc<dyn OrderRepository>,
        products: Arc<dyn ProductRepository>,
        customers: Arc<dyn CustomerRepository>,
    ) -> Self {
        Self { orders, products, customers }
    }

    #[tracing::instrument(
        skip(self, request),
        fields(customer_id = %request.customer_id, lines = request.products.len())
    )]
    pub async fn execute(&self, request: CreateOrderRequest) -> Result<Order, OrderError> {
        let CreateOrderRequest { customer_id, products } = request;

        let customer = match self.customers.find_by_id(customer_id).await? {
            Some(customer) => customer,
            None => {
                warn!("Rejected order: customer does not exist");
                return Err(OrderError::CustomerNotFound(customer_id));
            }
        };

        validate_lines(&products)?;

        let catalog = self.products.find_all_by_id(&products).await?;
        if catalog.len() != products.len() {
            warn!(
                requested = products.len(),
                resolved = catalog.len(),
                "Rejected order: some product does not exist"
            );
            return Err(OrderError::ProductNotFound);
        }

        let items = price_lines(&catalog, &products).inspect_err(|err| {
            warn!(error = %err, "Rejected order");
        })?;

        let order = self.orders.create(NewOrder { customer, products: items }).await?;

        // The order is already persisted here; a failed decrement is not rolled back.
        if let Err(err) = self.products.update_quantity(&products).await {
            error!(order_id = %order.id, error = %err, "Order persisted but stock decrement failed");
            return Err(OrderError::Repository(err));
        }

        info!(order_id = %order.id, total_cents = order.total_cents, "Order created");
        Ok(order)
    }
}

fn validate_lines(products: &[ProductQuantity]) -> Result<(), OrderError> {
    if products.is_empty() {
        return Err(OrderError::InvalidRequest("an order needs at least one product".to_string()));
    }

    if let Some(line) = products.iter().find(|p| p.quantity <= 0) {
        return Err(OrderError::InvalidRequest(format!(
            "quantity for product {} must be positive, got {}",
            line.id, line.quantity
        )));
    }

    Ok(())
}

/// Build one line per resolved product, in catalog order, checking stock as
/// it goes. The first product short on stock aborts the whole order.
fn price_lines(
    catalog: &[CatalogProduct],
    requested: &[ProductQuantity],
) -> Result<Vec<OrderLineItem>, OrderError> {
    catalog
        .iter()
        .map(|product| -> Result<OrderLineItem, OrderError> {
            let line = requested
                .iter()
                .find(|r| r.id == product.id)
                .ok_or(OrderError::ProductNotFound)?;

            inventory::ensure_available(product, line.quantity)?;

            Ok(OrderLineItem {
                product_id: product.id,
                price_cents: product.price_cents,
                quantity: line.quantity,
            })
        })
        .collect()
}
