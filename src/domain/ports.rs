//! Store contracts consumed by the application layer.
//!
//! Every method takes `&mut self` because implementations are
//! transaction-scoped: the Diesel backend implements these traits directly
//! on `PgConnection`, and callers obtain one through
//! [`PgStore::transaction`](crate::infrastructure::store::PgStore), which is
//! the single unit-of-work boundary. A failure anywhere inside the closure
//! rolls back everything the traits wrote.

use super::cart::CartEntry;
use super::catalog::{NewProduct, Product};
use super::errors::DomainError;
use super::order::{LineSnapshot, NewOrder, Order, OrderLine};

pub trait CatalogStore {
    fn product_by_id(&mut self, id: i64) -> Result<Option<Product>, DomainError>;

    /// Like [`product_by_id`](Self::product_by_id) but takes a row-level
    /// lock, serializing concurrent checkouts that race on the same
    /// product's stock.
    fn product_by_id_for_update(&mut self, id: i64) -> Result<Option<Product>, DomainError>;

    fn products_by_vendor(&mut self, vendor_id: i64) -> Result<Vec<Product>, DomainError>;

    fn insert_product(&mut self, product: NewProduct) -> Result<Product, DomainError>;

    /// Writes the product row back in full (idempotent upsert of an
    /// existing row). Used for the write-through stock decrement.
    fn save_product(&mut self, product: &Product) -> Result<(), DomainError>;
}

pub trait OrderStore {
    /// Persists the order and its lines as one cascading insert, returning
    /// the stored order. Lines keep their slice order.
    fn insert_order(
        &mut self,
        order: NewOrder,
        lines: &[LineSnapshot],
    ) -> Result<Order, DomainError>;

    fn order_by_id(&mut self, id: i64) -> Result<Option<Order>, DomainError>;

    fn orders_by_buyer(&mut self, buyer_id: i64) -> Result<Vec<Order>, DomainError>;

    /// Bulk lookup of lines across all orders whose `product_id` is in
    /// `product_ids`. One query, regardless of how many ids are passed.
    fn lines_by_product_ids(&mut self, product_ids: &[i64])
        -> Result<Vec<OrderLine>, DomainError>;
}

pub trait CartStore {
    fn cart_for_buyer(&mut self, buyer_id: i64) -> Result<Vec<CartEntry>, DomainError>;

    fn cart_entry(
        &mut self,
        product_id: i64,
        buyer_id: i64,
    ) -> Result<Option<CartEntry>, DomainError>;

    /// Fails with [`DomainError::DuplicateCartEntry`] if the (product, buyer)
    /// pair already has a live row.
    fn add_cart_entry(&mut self, product_id: i64, buyer_id: i64)
        -> Result<CartEntry, DomainError>;

    /// Removing an entry that no longer exists is not an error.
    fn remove_cart_entry(&mut self, entry_id: i64) -> Result<(), DomainError>;

    /// Deletes every live cart row the buyer holds.
    fn clear_cart(&mut self, buyer_id: i64) -> Result<(), DomainError>;
}
