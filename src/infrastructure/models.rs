use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::cart::CartEntry;
use crate::domain::catalog::{Category, NewProduct, Product};
use crate::domain::errors::DomainError;
use crate::domain::order::{NewOrder, OrderLine, PaymentStatus, ShippingDetails};
use crate::schema::{cart_entries, order_lines, orders, products};

#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProductRow {
    pub id: i64,
    pub product_name: String,
    pub category: String,
    pub selling_price: BigDecimal,
    pub amount_discounted: BigDecimal,
    pub percentage_discount: i32,
    pub quantity: i32,
    pub description: String,
    pub image_url: String,
    pub vendor_id: i64,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = DomainError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let category: Category = row
            .category
            .parse()
            .map_err(|e: String| DomainError::Internal(format!("corrupt product row: {}", e)))?;
        Ok(Product {
            id: row.id,
            name: row.product_name,
            category,
            selling_price: row.selling_price,
            amount_discounted: row.amount_discounted,
            percentage_discount: row.percentage_discount,
            quantity: row.quantity,
            description: row.description,
            image_url: row.image_url,
            vendor_id: row.vendor_id,
        })
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = products)]
pub struct NewProductRow {
    pub product_name: String,
    pub category: String,
    pub selling_price: BigDecimal,
    pub amount_discounted: BigDecimal,
    pub percentage_discount: i32,
    pub quantity: i32,
    pub description: String,
    pub image_url: String,
    pub vendor_id: i64,
}

impl From<NewProduct> for NewProductRow {
    fn from(p: NewProduct) -> Self {
        NewProductRow {
            product_name: p.name,
            category: p.category.as_str().to_string(),
            selling_price: p.selling_price,
            amount_discounted: p.amount_discounted,
            percentage_discount: p.percentage_discount,
            quantity: p.quantity,
            description: p.description,
            image_url: p.image_url,
            vendor_id: p.vendor_id,
        }
    }
}

/// Full-row write-back used by `save_product`.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = products)]
pub struct ProductChangeset {
    pub product_name: String,
    pub category: String,
    pub selling_price: BigDecimal,
    pub amount_discounted: BigDecimal,
    pub percentage_discount: i32,
    pub quantity: i32,
    pub description: String,
    pub image_url: String,
    pub vendor_id: i64,
}

impl From<&Product> for ProductChangeset {
    fn from(p: &Product) -> Self {
        ProductChangeset {
            product_name: p.name.clone(),
            category: p.category.as_str().to_string(),
            selling_price: p.selling_price.clone(),
            amount_discounted: p.amount_discounted.clone(),
            percentage_discount: p.percentage_discount,
            quantity: p.quantity,
            description: p.description.clone(),
            image_url: p.image_url.clone(),
            vendor_id: p.vendor_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = cart_entries)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CartEntryRow {
    pub id: i64,
    pub product_id: i64,
    pub buyer_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<CartEntryRow> for CartEntry {
    fn from(row: CartEntryRow) -> Self {
        CartEntry {
            id: row.id,
            product_id: row.product_id,
            buyer_id: row.buyer_id,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = cart_entries)]
pub struct NewCartEntryRow {
    pub product_id: i64,
    pub buyer_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderRow {
    pub id: i64,
    pub buyer_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub alternative_phone_number: Option<String>,
    pub delivery_address: String,
    pub additional_information: Option<String>,
    pub region: String,
    pub state: String,
    pub total: BigDecimal,
    pub quantity: i32,
    pub payment_status: String,
    pub payment_reference: String,
    pub purchased_at: DateTime<Utc>,
}

impl OrderRow {
    pub fn payment_status(&self) -> Result<PaymentStatus, DomainError> {
        self.payment_status
            .parse()
            .map_err(|e: String| DomainError::Internal(format!("corrupt order row: {}", e)))
    }

    pub fn shipping(&self) -> ShippingDetails {
        ShippingDetails {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            phone_number: self.phone_number.clone(),
            alternative_phone_number: self.alternative_phone_number.clone(),
            delivery_address: self.delivery_address.clone(),
            additional_information: self.additional_information.clone(),
            region: self.region.clone(),
            state: self.state.clone(),
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = orders)]
pub struct NewOrderRow {
    pub buyer_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub alternative_phone_number: Option<String>,
    pub delivery_address: String,
    pub additional_information: Option<String>,
    pub region: String,
    pub state: String,
    pub total: BigDecimal,
    pub quantity: i32,
    pub payment_status: String,
    pub payment_reference: String,
    pub purchased_at: DateTime<Utc>,
}

impl From<NewOrder> for NewOrderRow {
    fn from(o: NewOrder) -> Self {
        NewOrderRow {
            buyer_id: o.buyer_id,
            first_name: o.shipping.first_name,
            last_name: o.shipping.last_name,
            phone_number: o.shipping.phone_number,
            alternative_phone_number: o.shipping.alternative_phone_number,
            delivery_address: o.shipping.delivery_address,
            additional_information: o.shipping.additional_information,
            region: o.shipping.region,
            state: o.shipping.state,
            total: o.total,
            quantity: o.quantity,
            payment_status: o.payment_status.as_str().to_string(),
            payment_reference: o.payment_reference,
            purchased_at: o.purchased_at,
        }
    }
}

#[derive(
    Debug, Clone, Serialize, Deserialize, Queryable, Selectable, Identifiable, Associations,
)]
#[diesel(table_name = order_lines)]
#[diesel(belongs_to(OrderRow, foreign_key = order_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderLineRow {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub unit_price: BigDecimal,
    pub quantity: i32,
    pub image_url: String,
    pub subtotal: BigDecimal,
}

impl From<OrderLineRow> for OrderLine {
    fn from(row: OrderLineRow) -> Self {
        OrderLine {
            id: row.id,
            order_id: row.order_id,
            product_id: row.product_id,
            product_name: row.product_name,
            unit_price: row.unit_price,
            quantity: row.quantity,
            image_url: row.image_url,
            subtotal: row.subtotal,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = order_lines)]
pub struct NewOrderLineRow {
    pub order_id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub unit_price: BigDecimal,
    pub quantity: i32,
    pub image_url: String,
    pub subtotal: BigDecimal,
}
