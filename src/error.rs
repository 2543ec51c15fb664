use thiserror::Error;

pub type Result<T> = std::result::Result<T, OrderError>;

/// Failures the order-creation workflow and its interfaces can surface.
///
/// The first four variants are user-input validation failures; their messages
/// are part of the public contract and are asserted by the integration tests.
#[derive(Error, Debug)]
pub enum OrderError {
    #[error("Could not find any customer with the given id")]
    CustomerNotFound,
    #[error("Could not find any products with the given ids")]
    NoProductsFound,
    /// Some requested products do not exist; carries the missing ids joined
    /// by ", " in request order.
    #[error("Could not find products by Ids {0}")]
    ProductsNotFound(String),
    /// One or more products cannot satisfy the requested quantity; carries
    /// "id (Quantity: n)" entries joined by ", " in request order.
    #[error("The quantity is not available to Ids {0}")]
    InsufficientStock(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workflow_error_messages() {
        assert_eq!(
            OrderError::CustomerNotFound.to_string(),
            "Could not find any customer with the given id"
        );
        assert_eq!(
            OrderError::NoProductsFound.to_string(),
            "Could not find any products with the given ids"
        );
        assert_eq!(
            OrderError::ProductsNotFound("a, b".to_string()).to_string(),
            "Could not find products by Ids a, b"
        );
        assert_eq!(
            OrderError::InsufficientStock("a (Quantity: 2)".to_string()).to_string(),
            "The quantity is not available to Ids a (Quantity: 2)"
        );
    }
}
