use actix_web::{web, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::cart;
use crate::errors::AppError;
use crate::handlers::products::ProductResponse;
use crate::handlers::ApiResponse;
use crate::infrastructure::store::PgStore;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartItemResponse {
    pub entry_id: i64,
    pub product: ProductResponse,
}

/// POST /api/v1/cart/{productId}/{userId}
#[utoipa::path(
    post,
    path = "/api/v1/cart/{productId}/{userId}",
    params(
        ("productId" = i64, Path, description = "Product to add"),
        ("userId" = i64, Path, description = "Buyer id"),
    ),
    responses(
        (status = 201, description = "Added to cart", body = ApiResponse),
        (status = 400, description = "Product already in the cart"),
        (status = 404, description = "Product not found"),
    ),
    tag = "cart"
)]
pub async fn add_to_cart(
    store: web::Data<PgStore>,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse, AppError> {
    let (product_id, buyer_id) = path.into_inner();
    let store = store.into_inner();

    web::block(move || store.transaction(|tx| cart::add_to_cart(tx, product_id, buyer_id)))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Created().json(ApiResponse::ok("Product Added to cart")))
}

/// GET /api/v1/cart/{userId}
#[utoipa::path(
    get,
    path = "/api/v1/cart/{userId}",
    params(("userId" = i64, Path, description = "Buyer id")),
    responses(
        (status = 200, description = "Live cart with resolved products", body = [CartItemResponse]),
    ),
    tag = "cart"
)]
pub async fn get_cart(
    store: web::Data<PgStore>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let buyer_id = path.into_inner();
    let store = store.into_inner();

    let items = web::block(move || store.transaction(|tx| cart::cart_for_buyer(tx, buyer_id)))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let body: Vec<CartItemResponse> = items
        .into_iter()
        .map(|item| CartItemResponse {
            entry_id: item.entry_id,
            product: ProductResponse::from(item.product),
        })
        .collect();
    Ok(HttpResponse::Ok().json(body))
}

/// DELETE /api/v1/cart/{entryId}
#[utoipa::path(
    delete,
    path = "/api/v1/cart/{entryId}",
    params(("entryId" = i64, Path, description = "Cart entry id")),
    responses(
        (status = 200, description = "Entry removed (or was already gone)", body = ApiResponse),
    ),
    tag = "cart"
)]
pub async fn remove_from_cart(
    store: web::Data<PgStore>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let entry_id = path.into_inner();
    let store = store.into_inner();

    web::block(move || store.transaction(|tx| cart::remove_from_cart(tx, entry_id)))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Item removed from cart")))
}
