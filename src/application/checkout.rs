//! The checkout engine: turns a buyer's cart submission into a durable
//! order, reconciling stock along the way.
//!
//! Must run inside a single transaction (see
//! [`PgStore::transaction`](crate::infrastructure::store::PgStore)): the
//! stock decrements, the order insert and the cart clear either all commit
//! or none of them do.

use chrono::Utc;

use crate::domain::errors::DomainError;
use crate::domain::order::{CheckoutSubmission, NewOrder, Order};
use crate::domain::ports::{CartStore, CatalogStore, OrderStore};

/// Checks out `submission` for `buyer_id`.
///
/// Lines are processed strictly in submission order, so a product that
/// appears twice in one cart is decremented twice against the same row.
/// The order's total and quantity are the caller-supplied aggregates; line
/// prices and names are taken from the submitted snapshot, not from the
/// live catalog, preserving the price at cart time.
pub fn checkout_cart<S>(
    store: &mut S,
    buyer_id: i64,
    submission: CheckoutSubmission,
) -> Result<Order, DomainError>
where
    S: CatalogStore + OrderStore + CartStore,
{
    if submission.cart.is_empty() {
        return Err(DomainError::InvalidInput(
            "checkout cart must not be empty".to_string(),
        ));
    }

    for line in &submission.cart {
        if line.quantity <= 0 {
            return Err(DomainError::InvalidInput(format!(
                "invalid quantity {} for product {}",
                line.quantity, line.product_id
            )));
        }

        let mut product = store
            .product_by_id_for_update(line.product_id)?
            .ok_or(DomainError::ProductNotFound(line.product_id))?;

        let remaining = product.quantity - line.quantity;
        if remaining < 0 {
            return Err(DomainError::InsufficientStock(product.id));
        }

        // Write-through so a later line for the same product sees the
        // already-decremented stock.
        product.quantity = remaining;
        store.save_product(&product)?;
    }

    let order = store.insert_order(
        NewOrder {
            buyer_id,
            shipping: submission.shipping,
            total: submission.total,
            quantity: submission.quantity,
            payment_status: submission.payment_status,
            payment_reference: submission.payment_reference,
            purchased_at: Utc::now(),
        },
        &submission.cart,
    )?;

    // The buyer's whole cart is cleared, not just the submitted lines.
    store.clear_cart(buyer_id)?;

    log::info!(
        "checkout complete: order {} for buyer {} ({} lines)",
        order.id,
        buyer_id,
        order.lines.len()
    );

    Ok(order)
}

#[cfg(test)]
mod tests {
    use bigdecimal::BigDecimal;

    use super::*;
    use crate::application::testing::{in_transaction, MemStore};
    use crate::domain::order::{LineSnapshot, PaymentStatus};
    use crate::domain::ports::CartStore;

    fn dec(s: &str) -> BigDecimal {
        s.parse().expect("valid decimal")
    }

    fn snapshot(product_id: i64, quantity: i32, unit_price: &str) -> LineSnapshot {
        LineSnapshot {
            product_id,
            product_name: format!("product-{}", product_id),
            unit_price: dec(unit_price),
            quantity,
            image_url: "https://img.example/p.png".to_string(),
            subtotal: dec(unit_price) * BigDecimal::from(quantity),
        }
    }

    fn submission(cart: Vec<LineSnapshot>) -> CheckoutSubmission {
        CheckoutSubmission {
            shipping: MemStore::shipping(),
            total: dec("100.00"),
            quantity: cart.iter().map(|l| l.quantity).sum(),
            payment_status: PaymentStatus::from_gateway_flag("Approved"),
            payment_reference: "ref-001".to_string(),
            cart,
        }
    }

    #[test]
    fn same_product_twice_decrements_sequentially() {
        let mut store = MemStore::new();
        let p = store.seed_product(50, 7);

        let result = in_transaction(&mut store, |tx| {
            checkout_cart(tx, 1, submission(vec![snapshot(p, 20, "5.00"), snapshot(p, 20, "5.00")]))
        })
        .expect("checkout should succeed");

        assert_eq!(store.product_quantity(p), 10);
        assert_eq!(store.order_count(), 1);
        assert_eq!(result.lines.len(), 2);
        assert_eq!(result.lines[0].product_id, p);
        assert_eq!(result.lines[1].product_id, p);
    }

    #[test]
    fn insufficient_stock_leaves_everything_untouched() {
        let mut store = MemStore::new();
        let p = store.seed_product(30, 7);

        let err = in_transaction(&mut store, |tx| {
            checkout_cart(tx, 1, submission(vec![snapshot(p, 50, "5.00")]))
        })
        .expect_err("should fail");

        assert!(matches!(err, DomainError::InsufficientStock(id) if id == p));
        assert_eq!(store.product_quantity(p), 30);
        assert_eq!(store.order_count(), 0);
    }

    #[test]
    fn unknown_product_aborts_checkout() {
        let mut store = MemStore::new();

        let err = in_transaction(&mut store, |tx| {
            checkout_cart(tx, 1, submission(vec![snapshot(999, 1, "5.00")]))
        })
        .expect_err("should fail");

        assert!(matches!(err, DomainError::ProductNotFound(999)));
        assert_eq!(store.order_count(), 0);
    }

    #[test]
    fn failure_on_later_line_rolls_back_earlier_decrements() {
        let mut store = MemStore::new();
        let a = store.seed_product(10, 7);
        let b = store.seed_product(1, 7);

        let err = in_transaction(&mut store, |tx| {
            checkout_cart(tx, 1, submission(vec![snapshot(a, 5, "2.00"), snapshot(b, 2, "3.00")]))
        })
        .expect_err("should fail");

        assert!(matches!(err, DomainError::InsufficientStock(id) if id == b));
        // The decrement applied to `a` before `b` failed must be undone.
        assert_eq!(store.product_quantity(a), 10);
        assert_eq!(store.product_quantity(b), 1);
        assert_eq!(store.order_count(), 0);
    }

    #[test]
    fn whole_cart_is_cleared_even_for_subset_snapshot() {
        let mut store = MemStore::new();
        let a = store.seed_product(10, 7);
        let b = store.seed_product(10, 7);
        let buyer = 42;
        store.add_cart_entry(a, buyer).expect("add a");
        store.add_cart_entry(b, buyer).expect("add b");

        // Snapshot only covers product `a`; `b`'s row must go too.
        in_transaction(&mut store, |tx| {
            checkout_cart(tx, buyer, submission(vec![snapshot(a, 1, "2.00")]))
        })
        .expect("checkout should succeed");

        assert!(store.cart_for_buyer(buyer).expect("cart").is_empty());
        assert_eq!(store.product_quantity(b), 10, "un-submitted product keeps stock");
    }

    #[test]
    fn other_buyers_carts_survive_checkout() {
        let mut store = MemStore::new();
        let p = store.seed_product(10, 7);
        store.add_cart_entry(p, 1).expect("buyer 1");
        store.add_cart_entry(p, 2).expect("buyer 2");

        in_transaction(&mut store, |tx| {
            checkout_cart(tx, 1, submission(vec![snapshot(p, 1, "2.00")]))
        })
        .expect("checkout should succeed");

        assert!(store.cart_for_buyer(1).expect("cart").is_empty());
        assert_eq!(store.cart_for_buyer(2).expect("cart").len(), 1);
    }

    #[test]
    fn empty_cart_is_rejected() {
        let mut store = MemStore::new();

        let err = in_transaction(&mut store, |tx| checkout_cart(tx, 1, submission(vec![])))
            .expect_err("should fail");

        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn non_positive_line_quantity_is_rejected() {
        let mut store = MemStore::new();
        let p = store.seed_product(10, 7);

        let err = in_transaction(&mut store, |tx| {
            checkout_cart(tx, 1, submission(vec![snapshot(p, 0, "2.00")]))
        })
        .expect_err("should fail");

        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert_eq!(store.product_quantity(p), 10);
    }

    #[test]
    fn aggregates_and_payment_fields_are_stored_as_submitted() {
        let mut store = MemStore::new();
        let p = store.seed_product(10, 7);

        let mut sub = submission(vec![snapshot(p, 2, "4.00")]);
        sub.total = dec("999.99"); // deliberately unrelated to the lines
        sub.quantity = 77;
        sub.payment_status = PaymentStatus::from_gateway_flag("Declined");

        let order =
            in_transaction(&mut store, |tx| checkout_cart(tx, 5, sub)).expect("checkout");

        assert_eq!(order.total, dec("999.99"));
        assert_eq!(order.quantity, 77);
        assert_eq!(order.payment_status, PaymentStatus::Failed);
        assert_eq!(order.payment_reference, "ref-001");
        assert_eq!(order.buyer_id, 5);
    }
}
