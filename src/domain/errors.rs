use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Product not found with id : '{0}'")]
    ProductNotFound(i64),

    #[error("Insufficient stock for product with id : '{0}'")]
    InsufficientStock(i64),

    #[error("Sorry! You have already added this product to your shopping cart")]
    DuplicateCartEntry,

    #[error("{0} not found with id : '{1}'")]
    NotFound(&'static str, i64),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
