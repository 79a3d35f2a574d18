use uuid::Uuid;
use crate::product::{CatalogProduct, ProductQuantity};

/// Check that `product` has at least `requested` units on hand.
pub fn ensure_available(product: &CatalogProduct, requested: i32) -> Result<(), InventoryError> {
    if product.quantity < requested {
        return Err(InventoryError::InsufficientInventory {
            product_id: product.id,
            requested,
            available: product.quantity,
        });
    }

    Ok(())
}

/// Apply a batch stock decrement to `stock`.
///
/// The batch is all-or-nothing: every line is checked before any product is
/// touched, so a failing line leaves the whole slice unchanged. Repeated ids
/// are accumulated.
pub fn decrement(stock: &mut [CatalogProduct], lines: &[ProductQuantity]) -> Result<(), InventoryError> {
    let mut remaining: Vec<(usize, i32)> = Vec::with_capacity(lines.len());

    for line in lines {
        let index = stock.iter()
            .position(|p| p.id == line.id)
            .ok_or(InventoryError::NotFound(line.id))?;

        // Summed in i64 so repeated lines near i32::MAX cannot overflow.
        let wanted = remaining.iter()
            .filter(|(i, _)| *i == index)
            .map(|(_, q)| i64::from(*q))
            .sum::<i64>()
            + i64::from(line.quantity);

        let product = &stock[index];
        if i64::from(product.quantity) < wanted {
            return Err(InventoryError::InsufficientInventory {
                product_id: product.id,
                requested: i32::try_from(wanted).unwrap_or(i32::MAX),
                available: product.quantity,
            });
        }

        remaining.push((index, line.quantity));
    }

    let now = chrono::Utc::now();
    for (index, quantity) in remaining {
        let product = &mut stock[index];
        product.quantity -= quantity;
        product.updated_at = now;
    }

    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("Inventory not found: {0}")]
    NotFound(Uuid),

    #[error("Insufficient inventory for {product_id}: requested {requested}, available {available}")]
    InsufficientInventory {
        product_id: Uuid,
        requested: i32,
        available: i32,
    },
}
