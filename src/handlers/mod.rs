pub mod cart;
pub mod orders;
pub mod products;

use serde::Serialize;
use utoipa::ToSchema;

/// Mutation envelope shared by every write endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}

impl ApiResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        ApiResponse {
            success: true,
            message: message.into(),
        }
    }
}
