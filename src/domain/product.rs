use crate::error::OrderError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A positive unit price.
///
/// This is a wrapper around `rust_decimal::Decimal` to enforce domain-specific
/// rules and provide type safety for monetary values. Prices are copied into
/// order items at creation time, so later catalog changes do not affect past
/// orders.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Price(Decimal);

impl Price {
    pub fn new(value: Decimal) -> Result<Self, OrderError> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(OrderError::ValidationError(
                "Price must be positive".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Price {
    type Error = OrderError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

/// A catalog product with its currently available stock.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Product {
    /// The unique identifier for the product.
    pub id: String,
    pub name: String,
    /// Current unit price, read-only from the workflow's perspective.
    pub price: Price,
    /// Available stock, decremented by orders.
    pub quantity: u32,
}

/// One entry of a batch stock update: the product's *new* absolute quantity.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct StockUpdate {
    pub id: String,
    pub quantity: u32,
}
