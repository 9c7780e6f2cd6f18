use actix_web::{web, HttpResponse};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::catalog::{self, CreateProduct};
use crate::domain::catalog::{Category, Product};
use crate::errors::AppError;
use crate::handlers::ApiResponse;
use crate::infrastructure::store::PgStore;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub product_name: String,
    /// One of the fixed category names, e.g. "COMPUTING".
    #[schema(value_type = String)]
    pub category: Category,
    /// Gross price before discount. Accepts a JSON number or decimal string.
    #[schema(value_type = f64)]
    pub price: BigDecimal,
    pub percentage_discount: i32,
    pub quantity: i32,
    pub description: String,
    /// Reference to an already-uploaded image (media storage is external).
    pub image_url: String,
    pub vendor_id: i64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i64,
    pub product_name: String,
    pub category: String,
    /// Decimal rendered as a string, e.g. "149.99".
    pub selling_price: String,
    pub amount_discounted: String,
    pub percentage_discount: i32,
    pub quantity: i32,
    pub description: String,
    pub image_url: String,
    pub vendor_id: i64,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        ProductResponse {
            id: p.id,
            product_name: p.name,
            category: p.category.as_str().to_string(),
            selling_price: p.selling_price.to_string(),
            amount_discounted: p.amount_discounted.to_string(),
            percentage_discount: p.percentage_discount,
            quantity: p.quantity,
            description: p.description,
            image_url: p.image_url,
            vendor_id: p.vendor_id,
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /api/v1/products
#[utoipa::path(
    post,
    path = "/api/v1/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ApiResponse),
        (status = 400, description = "Invalid discount or quantity"),
    ),
    tag = "products"
)]
pub async fn create_product(
    store: web::Data<PgStore>,
    body: web::Json<CreateProductRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let store = store.into_inner();

    let product = web::block(move || {
        store.transaction(|tx| {
            catalog::create_product(
                tx,
                CreateProduct {
                    name: body.product_name,
                    category: body.category,
                    price: body.price,
                    percentage_discount: body.percentage_discount,
                    quantity: body.quantity,
                    description: body.description,
                    image_url: body.image_url,
                    vendor_id: body.vendor_id,
                },
            )
        })
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Created().json(ApiResponse::ok(format!(
        "{} has been created successfully under {} category",
        product.name, product.category
    ))))
}

/// GET /api/v1/products/view/{productId}
#[utoipa::path(
    get,
    path = "/api/v1/products/view/{productId}",
    params(("productId" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 404, description = "Product not found"),
    ),
    tag = "products"
)]
pub async fn get_product(
    store: web::Data<PgStore>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let product_id = path.into_inner();
    let store = store.into_inner();

    let product = web::block(move || store.transaction(|tx| catalog::get_product(tx, product_id)))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(ProductResponse::from(product)))
}

/// GET /api/v1/products/vendor/{vendorId}
#[utoipa::path(
    get,
    path = "/api/v1/products/vendor/{vendorId}",
    params(("vendorId" = i64, Path, description = "Vendor id")),
    responses(
        (status = 200, description = "Vendor's catalog", body = [ProductResponse]),
    ),
    tag = "products"
)]
pub async fn vendor_products(
    store: web::Data<PgStore>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let vendor_id = path.into_inner();
    let store = store.into_inner();

    let products =
        web::block(move || store.transaction(|tx| catalog::vendor_products(tx, vendor_id)))
            .await
            .map_err(|e| AppError::Internal(e.to_string()))??;

    let body: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}
