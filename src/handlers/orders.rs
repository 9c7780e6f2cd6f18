use actix_web::{web, HttpResponse};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{checkout, vendor_orders};
use crate::domain::order::{
    CheckoutSubmission, LineSnapshot, Order, OrderLine, PaymentStatus, ShippingDetails,
    VendorOrderView,
};
use crate::domain::ports::OrderStore;
use crate::errors::AppError;
use crate::handlers::ApiResponse;
use crate::infrastructure::store::PgStore;

// ── Request DTOs ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartItemRequest {
    pub product_id: i64,
    pub product_name: String,
    /// Unit price at cart time. Accepts a JSON number or decimal string.
    #[schema(value_type = f64)]
    pub price: BigDecimal,
    pub image_url: String,
    pub quantity: i32,
    #[schema(value_type = f64)]
    pub subtotal: BigDecimal,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartCheckoutRequest {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    #[serde(default)]
    pub alternative_phone_number: Option<String>,
    pub delivery_address: String,
    #[serde(default)]
    pub additional_information: Option<String>,
    pub region: String,
    pub state: String,
    #[schema(value_type = f64)]
    pub total: BigDecimal,
    pub quantity: i32,
    /// Gateway approval flag; exactly "Approved" marks the payment approved.
    pub paystack_approved: String,
    pub paystack_reference: String,
    pub cart: Vec<CartItemRequest>,
}

impl CartCheckoutRequest {
    fn into_submission(self) -> CheckoutSubmission {
        CheckoutSubmission {
            shipping: ShippingDetails {
                first_name: self.first_name,
                last_name: self.last_name,
                phone_number: self.phone_number,
                alternative_phone_number: self.alternative_phone_number,
                delivery_address: self.delivery_address,
                additional_information: self.additional_information,
                region: self.region,
                state: self.state,
            },
            total: self.total,
            quantity: self.quantity,
            payment_status: PaymentStatus::from_gateway_flag(&self.paystack_approved),
            payment_reference: self.paystack_reference,
            cart: self
                .cart
                .into_iter()
                .map(|item| LineSnapshot {
                    product_id: item.product_id,
                    product_name: item.product_name,
                    unit_price: item.price,
                    quantity: item.quantity,
                    image_url: item.image_url,
                    subtotal: item.subtotal,
                })
                .collect(),
        }
    }
}

// ── Response DTOs ────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineResponse {
    pub product_id: i64,
    pub product_name: String,
    /// Decimal rendered as a string, e.g. "29.99".
    pub price: String,
    pub image_url: String,
    pub quantity: i32,
    pub subtotal: String,
}

impl From<OrderLine> for OrderLineResponse {
    fn from(l: OrderLine) -> Self {
        OrderLineResponse {
            product_id: l.product_id,
            product_name: l.product_name,
            price: l.unit_price.to_string(),
            image_url: l.image_url,
            quantity: l.quantity,
            subtotal: l.subtotal.to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub alternative_phone_number: Option<String>,
    pub delivery_address: String,
    pub additional_information: Option<String>,
    pub region: String,
    pub state: String,
    pub total: String,
    pub quantity: i32,
    pub payment_status: String,
    pub payment_reference: String,
    pub purchased_at: String,
    pub cart: Vec<OrderLineResponse>,
}

impl OrderResponse {
    fn build(
        id: i64,
        shipping: ShippingDetails,
        total: BigDecimal,
        quantity: i32,
        payment_status: PaymentStatus,
        payment_reference: String,
        purchased_at: chrono::DateTime<chrono::Utc>,
        lines: Vec<OrderLine>,
    ) -> Self {
        OrderResponse {
            id,
            first_name: shipping.first_name,
            last_name: shipping.last_name,
            phone_number: shipping.phone_number,
            alternative_phone_number: shipping.alternative_phone_number,
            delivery_address: shipping.delivery_address,
            additional_information: shipping.additional_information,
            region: shipping.region,
            state: shipping.state,
            total: total.to_string(),
            quantity,
            payment_status: payment_status.as_str().to_string(),
            payment_reference,
            purchased_at: purchased_at.to_rfc3339(),
            cart: lines.into_iter().map(OrderLineResponse::from).collect(),
        }
    }
}

impl From<Order> for OrderResponse {
    fn from(o: Order) -> Self {
        OrderResponse::build(
            o.id,
            o.shipping,
            o.total,
            o.quantity,
            o.payment_status,
            o.payment_reference,
            o.purchased_at,
            o.lines,
        )
    }
}

impl From<VendorOrderView> for OrderResponse {
    fn from(v: VendorOrderView) -> Self {
        OrderResponse::build(
            v.order_id,
            v.shipping,
            v.total,
            v.quantity,
            v.payment_status,
            v.payment_reference,
            v.purchased_at,
            v.lines,
        )
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /api/v1/orders/checkout/{userId}
///
/// Converts the buyer's cart snapshot into a durable order. Stock
/// decrements, the order insert and the whole-cart clear run in one
/// database transaction; any per-line failure rolls everything back.
#[utoipa::path(
    post,
    path = "/api/v1/orders/checkout/{userId}",
    params(("userId" = i64, Path, description = "Buyer id")),
    request_body = CartCheckoutRequest,
    responses(
        (status = 202, description = "Checked out", body = ApiResponse),
        (status = 400, description = "Empty cart or insufficient stock"),
        (status = 404, description = "A cart line references an unknown product"),
    ),
    tag = "orders"
)]
pub async fn checkout_cart(
    store: web::Data<PgStore>,
    path: web::Path<i64>,
    body: web::Json<CartCheckoutRequest>,
) -> Result<HttpResponse, AppError> {
    let buyer_id = path.into_inner();
    let submission = body.into_inner().into_submission();
    let store = store.into_inner();

    web::block(move || store.transaction(|tx| checkout::checkout_cart(tx, buyer_id, submission)))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Accepted().json(ApiResponse::ok("Checked Out")))
}

/// GET /api/v1/orders/history/{userId}
#[utoipa::path(
    get,
    path = "/api/v1/orders/history/{userId}",
    params(("userId" = i64, Path, description = "Buyer id")),
    responses(
        (status = 200, description = "Buyer's checkouts, newest first", body = [OrderResponse]),
    ),
    tag = "orders"
)]
pub async fn order_history(
    store: web::Data<PgStore>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let buyer_id = path.into_inner();
    let store = store.into_inner();

    let orders = web::block(move || store.transaction(|tx| tx.orders_by_buyer(buyer_id)))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let body: Vec<OrderResponse> = orders.into_iter().map(OrderResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/v1/orders/vendor/{vendorId}
///
/// Every order containing at least one of the vendor's products, carrying
/// only that vendor's lines.
#[utoipa::path(
    get,
    path = "/api/v1/orders/vendor/{vendorId}",
    params(("vendorId" = i64, Path, description = "Vendor id")),
    responses(
        (status = 200, description = "Orders placed against the vendor's catalog", body = [OrderResponse]),
    ),
    tag = "orders"
)]
pub async fn vendor_orders(
    store: web::Data<PgStore>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let vendor_id = path.into_inner();
    let store = store.into_inner();

    let views =
        web::block(move || store.transaction(|tx| vendor_orders::orders_for_vendor(tx, vendor_id)))
            .await
            .map_err(|e| AppError::Internal(e.to_string()))??;

    let body: Vec<OrderResponse> = views.into_iter().map(OrderResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}
