//! In-memory store fake for application-layer tests. Implements the three
//! store ports over plain maps; [`in_transaction`] mimics the unit-of-work
//! rollback the Postgres backend gets from `PgStore::transaction`.

use std::collections::BTreeMap;

use bigdecimal::BigDecimal;

use crate::domain::cart::CartEntry;
use crate::domain::catalog::{Category, NewProduct, Product};
use crate::domain::errors::DomainError;
use crate::domain::order::{LineSnapshot, NewOrder, Order, OrderLine, ShippingDetails};
use crate::domain::ports::{CartStore, CatalogStore, OrderStore};

#[derive(Debug, Clone, Default)]
pub struct MemStore {
    products: BTreeMap<i64, Product>,
    orders: BTreeMap<i64, Order>,
    cart: Vec<CartEntry>,
    orphan_lines: Vec<OrderLine>,
    next_product_id: i64,
    next_order_id: i64,
    next_line_id: i64,
    next_entry_id: i64,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_product(&mut self, quantity: i32, vendor_id: i64) -> i64 {
        self.next_product_id += 1;
        let id = self.next_product_id;
        self.products.insert(
            id,
            Product {
                id,
                name: format!("product-{}", id),
                category: Category::Others,
                selling_price: BigDecimal::from(5),
                amount_discounted: BigDecimal::from(0),
                percentage_discount: 0,
                quantity,
                description: String::new(),
                image_url: String::new(),
                vendor_id,
            },
        );
        id
    }

    /// Plants a line whose parent order does not exist, to exercise the
    /// aggregator's tolerant-read path.
    pub fn seed_orphan_line(&mut self, order_id: i64, product_id: i64) {
        self.next_line_id += 1;
        self.orphan_lines.push(OrderLine {
            id: self.next_line_id,
            order_id,
            product_id,
            product_name: format!("product-{}", product_id),
            unit_price: BigDecimal::from(5),
            quantity: 1,
            image_url: String::new(),
            subtotal: BigDecimal::from(5),
        });
    }

    pub fn product_quantity(&self, id: i64) -> i32 {
        self.products.get(&id).expect("product seeded").quantity
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    pub fn shipping() -> ShippingDetails {
        ShippingDetails {
            first_name: "Rowland".to_string(),
            last_name: "Mba".to_string(),
            phone_number: "08010000000".to_string(),
            alternative_phone_number: None,
            delivery_address: "12 Marina Rd".to_string(),
            additional_information: None,
            region: "Lagos".to_string(),
            state: "LA".to_string(),
        }
    }
}

/// Runs `f` with transaction semantics: on error the store is restored to
/// its state from before the call.
pub fn in_transaction<T>(
    store: &mut MemStore,
    f: impl FnOnce(&mut MemStore) -> Result<T, DomainError>,
) -> Result<T, DomainError> {
    let snapshot = store.clone();
    match f(store) {
        Ok(value) => Ok(value),
        Err(e) => {
            *store = snapshot;
            Err(e)
        }
    }
}

impl CatalogStore for MemStore {
    fn product_by_id(&mut self, id: i64) -> Result<Option<Product>, DomainError> {
        Ok(self.products.get(&id).cloned())
    }

    fn product_by_id_for_update(&mut self, id: i64) -> Result<Option<Product>, DomainError> {
        self.product_by_id(id)
    }

    fn products_by_vendor(&mut self, vendor_id: i64) -> Result<Vec<Product>, DomainError> {
        Ok(self
            .products
            .values()
            .filter(|p| p.vendor_id == vendor_id)
            .cloned()
            .collect())
    }

    fn insert_product(&mut self, product: NewProduct) -> Result<Product, DomainError> {
        self.next_product_id += 1;
        let id = self.next_product_id;
        let product = Product {
            id,
            name: product.name,
            category: product.category,
            selling_price: product.selling_price,
            amount_discounted: product.amount_discounted,
            percentage_discount: product.percentage_discount,
            quantity: product.quantity,
            description: product.description,
            image_url: product.image_url,
            vendor_id: product.vendor_id,
        };
        self.products.insert(id, product.clone());
        Ok(product)
    }

    fn save_product(&mut self, product: &Product) -> Result<(), DomainError> {
        self.products.insert(product.id, product.clone());
        Ok(())
    }
}

impl OrderStore for MemStore {
    fn insert_order(
        &mut self,
        order: NewOrder,
        lines: &[LineSnapshot],
    ) -> Result<Order, DomainError> {
        self.next_order_id += 1;
        let order_id = self.next_order_id;

        let lines = lines
            .iter()
            .map(|l| {
                self.next_line_id += 1;
                OrderLine {
                    id: self.next_line_id,
                    order_id,
                    product_id: l.product_id,
                    product_name: l.product_name.clone(),
                    unit_price: l.unit_price.clone(),
                    quantity: l.quantity,
                    image_url: l.image_url.clone(),
                    subtotal: l.subtotal.clone(),
                }
            })
            .collect();

        let stored = Order {
            id: order_id,
            buyer_id: order.buyer_id,
            shipping: order.shipping,
            total: order.total,
            quantity: order.quantity,
            payment_status: order.payment_status,
            payment_reference: order.payment_reference,
            purchased_at: order.purchased_at,
            lines,
        };
        self.orders.insert(order_id, stored.clone());
        Ok(stored)
    }

    fn order_by_id(&mut self, id: i64) -> Result<Option<Order>, DomainError> {
        Ok(self.orders.get(&id).cloned())
    }

    fn orders_by_buyer(&mut self, buyer_id: i64) -> Result<Vec<Order>, DomainError> {
        Ok(self
            .orders
            .values()
            .filter(|o| o.buyer_id == buyer_id)
            .cloned()
            .collect())
    }

    fn lines_by_product_ids(
        &mut self,
        product_ids: &[i64],
    ) -> Result<Vec<OrderLine>, DomainError> {
        let mut matches: Vec<OrderLine> = self
            .orders
            .values()
            .flat_map(|o| o.lines.iter())
            .chain(self.orphan_lines.iter())
            .filter(|l| product_ids.contains(&l.product_id))
            .cloned()
            .collect();
        matches.sort_by_key(|l| (l.order_id, l.id));
        Ok(matches)
    }
}

impl CartStore for MemStore {
    fn cart_for_buyer(&mut self, buyer_id: i64) -> Result<Vec<CartEntry>, DomainError> {
        Ok(self
            .cart
            .iter()
            .filter(|e| e.buyer_id == buyer_id)
            .cloned()
            .collect())
    }

    fn cart_entry(
        &mut self,
        product_id: i64,
        buyer_id: i64,
    ) -> Result<Option<CartEntry>, DomainError> {
        Ok(self
            .cart
            .iter()
            .find(|e| e.product_id == product_id && e.buyer_id == buyer_id)
            .cloned())
    }

    fn add_cart_entry(
        &mut self,
        product_id: i64,
        buyer_id: i64,
    ) -> Result<CartEntry, DomainError> {
        if self.cart_entry(product_id, buyer_id)?.is_some() {
            return Err(DomainError::DuplicateCartEntry);
        }
        self.next_entry_id += 1;
        let entry = CartEntry {
            id: self.next_entry_id,
            product_id,
            buyer_id,
        };
        self.cart.push(entry.clone());
        Ok(entry)
    }

    fn remove_cart_entry(&mut self, entry_id: i64) -> Result<(), DomainError> {
        self.cart.retain(|e| e.id != entry_id);
        Ok(())
    }

    fn clear_cart(&mut self, buyer_id: i64) -> Result<(), DomainError> {
        self.cart.retain(|e| e.buyer_id != buyer_id);
        Ok(())
    }
}
