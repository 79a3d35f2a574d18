//! Line pricing. All amounts are integer cents; prices are taken from the
//! catalog at the moment an order line is built and never looked up again.

/// Extended price of a single line: unit price times quantity.
pub fn line_total(unit_price_cents: i64, quantity: i32) -> i64 {
    unit_price_cents.saturating_mul(i64::from(quantity))
}

/// Sum of the extended prices of `(unit_price_cents, quantity)` lines.
pub fn order_total<I>(lines: I) -> i64
where
    I: IntoIterator<Item = (i64, i32)>,
{
    lines
        .into_iter()
        .map(|(price, quantity)| line_total(price, quantity))
        .fold(0i64, i64::saturating_add)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        assert_eq!(line_total(1000, 3), 3000);
        assert_eq!(line_total(0, 7), 0);
    }

    #[test]
    fn test_order_total() {
        // $10.00 x 3 + $20.00 x 2
        assert_eq!(order_total(vec![(1000, 3), (2000, 2)]), 7000);
        assert_eq!(order_total(Vec::new()), 0);
    }

    #[test]
    fn test_totals_saturate_instead_of_overflowing() {
        assert_eq!(line_total(i64::MAX, 2), i64::MAX);
        assert_eq!(order_total(vec![(i64::MAX, 1), (1, 1)]), i64::MAX);
    }
}
