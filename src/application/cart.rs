//! Shopping-cart operations. Thin next to the checkout engine: the cart is
//! just the set of (product, buyer) pairs a buyer is currently holding.

use crate::domain::cart::CartEntry;
use crate::domain::catalog::Product;
use crate::domain::errors::DomainError;
use crate::domain::ports::{CartStore, CatalogStore};

/// A cart row joined with the live product it points at, for display.
#[derive(Debug, Clone)]
pub struct CartItemView {
    pub entry_id: i64,
    pub product: Product,
}

/// Adds a product to the buyer's cart. The product must exist, and a buyer
/// may hold at most one live row per product.
pub fn add_to_cart<S>(store: &mut S, product_id: i64, buyer_id: i64) -> Result<CartEntry, DomainError>
where
    S: CatalogStore + CartStore,
{
    store
        .product_by_id(product_id)?
        .ok_or(DomainError::ProductNotFound(product_id))?;

    if store.cart_entry(product_id, buyer_id)?.is_some() {
        return Err(DomainError::DuplicateCartEntry);
    }

    store.add_cart_entry(product_id, buyer_id)
}

/// The buyer's live cart, with each entry's product resolved. An entry whose
/// product has vanished from the catalog is dropped from the view.
pub fn cart_for_buyer<S>(store: &mut S, buyer_id: i64) -> Result<Vec<CartItemView>, DomainError>
where
    S: CatalogStore + CartStore,
{
    let entries = store.cart_for_buyer(buyer_id)?;
    let mut items = Vec::with_capacity(entries.len());
    for entry in entries {
        if let Some(product) = store.product_by_id(entry.product_id)? {
            items.push(CartItemView {
                entry_id: entry.id,
                product,
            });
        }
    }
    Ok(items)
}

pub fn remove_from_cart<S: CartStore>(store: &mut S, entry_id: i64) -> Result<(), DomainError> {
    store.remove_cart_entry(entry_id)
}
