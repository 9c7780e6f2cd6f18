use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payment gateways report approval as the literal string "Approved"; that
/// flag is mapped to this enum at the HTTP boundary and never travels as a
/// string inside the domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Approved,
    Failed,
}

impl PaymentStatus {
    /// Maps the gateway approval flag: exactly `"Approved"` means approved,
    /// anything else is a failed payment.
    pub fn from_gateway_flag(flag: &str) -> Self {
        if flag == "Approved" {
            PaymentStatus::Approved
        } else {
            PaymentStatus::Failed
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Approved => "APPROVED",
            PaymentStatus::Failed => "FAILED",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "APPROVED" => Ok(PaymentStatus::Approved),
            "FAILED" => Ok(PaymentStatus::Failed),
            other => Err(format!("unknown payment status '{}'", other)),
        }
    }
}

/// Contact and delivery details captured with a checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingDetails {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub alternative_phone_number: Option<String>,
    pub delivery_address: String,
    pub additional_information: Option<String>,
    pub region: String,
    pub state: String,
}

/// A durable checkout record. `total` and `quantity` are the aggregates the
/// buyer submitted; they are stored as-is, not recomputed from the lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i64,
    pub buyer_id: i64,
    pub shipping: ShippingDetails,
    pub total: BigDecimal,
    pub quantity: i32,
    pub payment_status: PaymentStatus,
    pub payment_reference: String,
    pub purchased_at: DateTime<Utc>,
    /// Lines in submission order. Owned by the order, immutable after
    /// creation, deleted with it.
    pub lines: Vec<OrderLine>,
}

/// One product entry within a finalized order. `product_id` is a snapshot
/// reference: the catalog row may change price or name afterwards without
/// affecting this line.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub unit_price: BigDecimal,
    pub quantity: i32,
    pub image_url: String,
    pub subtotal: BigDecimal,
}

/// Order shell ready for insertion (lines are supplied separately).
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub buyer_id: i64,
    pub shipping: ShippingDetails,
    pub total: BigDecimal,
    pub quantity: i32,
    pub payment_status: PaymentStatus,
    pub payment_reference: String,
    pub purchased_at: DateTime<Utc>,
}

/// One client-asserted cart line as submitted at checkout. Price, name and
/// image come from the buyer's snapshot, deliberately not from the live
/// catalog, so the price-at-cart-time is preserved.
#[derive(Debug, Clone)]
pub struct LineSnapshot {
    pub product_id: i64,
    pub product_name: String,
    pub unit_price: BigDecimal,
    pub quantity: i32,
    pub image_url: String,
    pub subtotal: BigDecimal,
}

/// A full checkout submission: delivery details, caller-supplied aggregates,
/// payment outcome and the cart snapshot.
#[derive(Debug, Clone)]
pub struct CheckoutSubmission {
    pub shipping: ShippingDetails,
    pub total: BigDecimal,
    pub quantity: i32,
    pub payment_status: PaymentStatus,
    pub payment_reference: String,
    pub cart: Vec<LineSnapshot>,
}

/// One order as seen by a vendor: the order's contact and payment fields
/// plus only the lines that reference that vendor's products.
#[derive(Debug, Clone, PartialEq)]
pub struct VendorOrderView {
    pub order_id: i64,
    pub buyer_id: i64,
    pub shipping: ShippingDetails,
    pub total: BigDecimal,
    pub quantity: i32,
    pub payment_status: PaymentStatus,
    pub payment_reference: String,
    pub purchased_at: DateTime<Utc>,
    pub lines: Vec<OrderLine>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gateway_flag_maps_exact_literal_only() {
        assert_eq!(
            PaymentStatus::from_gateway_flag("Approved"),
            PaymentStatus::Approved
        );
        assert_eq!(
            PaymentStatus::from_gateway_flag("approved"),
            PaymentStatus::Failed
        );
        assert_eq!(
            PaymentStatus::from_gateway_flag("Declined"),
            PaymentStatus::Failed
        );
        assert_eq!(PaymentStatus::from_gateway_flag(""), PaymentStatus::Failed);
    }

    #[test]
    fn payment_status_roundtrips_through_str() {
        assert_eq!("APPROVED".parse(), Ok(PaymentStatus::Approved));
        assert_eq!("FAILED".parse(), Ok(PaymentStatus::Failed));
        assert!("PENDING".parse::<PaymentStatus>().is_err());
    }
}
