//! Catalog write/read glue: admin product creation (with discount
//! resolution) and the lookups the controllers need.

use bigdecimal::BigDecimal;

use crate::domain::catalog::{Category, NewProduct, Product};
use crate::domain::errors::DomainError;
use crate::domain::ports::CatalogStore;

/// Raw creation input: `price` is the gross price before any discount; the
/// image has already been uploaded by the external media service and is
/// referenced by URL.
#[derive(Debug, Clone)]
pub struct CreateProduct {
    pub name: String,
    pub category: Category,
    pub price: BigDecimal,
    pub percentage_discount: i32,
    pub quantity: i32,
    pub description: String,
    pub image_url: String,
    pub vendor_id: i64,
}

pub fn create_product<S: CatalogStore>(
    store: &mut S,
    input: CreateProduct,
) -> Result<Product, DomainError> {
    if input.quantity < 0 {
        return Err(DomainError::InvalidInput(
            "product quantity must not be negative".to_string(),
        ));
    }
    if !(0..=100).contains(&input.percentage_discount) {
        return Err(DomainError::InvalidInput(format!(
            "percentage discount {} out of range",
            input.percentage_discount
        )));
    }

    let (selling_price, amount_discounted) = if input.percentage_discount > 0 {
        let amount =
            &input.price * BigDecimal::from(input.percentage_discount) / BigDecimal::from(100);
        (&input.price - &amount, amount)
    } else {
        (input.price.clone(), BigDecimal::from(0))
    };

    store.insert_product(NewProduct {
        name: input.name,
        category: input.category,
        selling_price,
        amount_discounted,
        percentage_discount: input.percentage_discount,
        quantity: input.quantity,
        description: input.description,
        image_url: input.image_url,
        vendor_id: input.vendor_id,
    })
}

pub fn get_product<S: CatalogStore>(store: &mut S, id: i64) -> Result<Product, DomainError> {
    store
        .product_by_id(id)?
        .ok_or(DomainError::ProductNotFound(id))
}

pub fn vendor_products<S: CatalogStore>(
    store: &mut S,
    vendor_id: i64,
) -> Result<Vec<Product>, DomainError> {
    store.products_by_vendor(vendor_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::MemStore;

    fn dec(s: &str) -> BigDecimal {
        s.parse().expect("valid decimal")
    }

    fn input(price: &str, pct: i32) -> CreateProduct {
        CreateProduct {
            name: "HP Laptop".to_string(),
            category: Category::Computing,
            price: dec(price),
            percentage_discount: pct,
            quantity: 12,
            description: "14-inch, 16GB".to_string(),
            image_url: "https://img.example/laptop.png".to_string(),
            vendor_id: 7,
        }
    }

    #[test]
    fn discount_splits_price() {
        let mut store = MemStore::new();
        let product = create_product(&mut store, input("200.00", 25)).expect("create");

        assert_eq!(product.amount_discounted, dec("50.00"));
        assert_eq!(product.selling_price, dec("150.00"));
        assert_eq!(product.percentage_discount, 25);
    }

    #[test]
    fn zero_discount_keeps_full_price() {
        let mut store = MemStore::new();
        let product = create_product(&mut store, input("99.90", 0)).expect("create");

        assert_eq!(product.selling_price, dec("99.90"));
        assert_eq!(product.amount_discounted, BigDecimal::from(0));
    }

    #[test]
    fn out_of_range_discount_is_rejected() {
        let mut store = MemStore::new();
        assert!(matches!(
            create_product(&mut store, input("10.00", 101)),
            Err(DomainError::InvalidInput(_))
        ));
        assert!(matches!(
            create_product(&mut store, input("10.00", -1)),
            Err(DomainError::InvalidInput(_))
        ));
    }

    #[test]
    fn get_product_maps_missing_to_not_found() {
        let mut store = MemStore::new();
        assert!(matches!(
            get_product(&mut store, 5),
            Err(DomainError::ProductNotFound(5))
        ));
    }
}
