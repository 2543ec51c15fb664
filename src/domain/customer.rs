use serde::{Deserialize, Serialize};

/// A customer able to place orders.
///
/// The order-creation workflow only checks that the customer exists; the
/// remaining fields ride along for catalog seeding and order output.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Customer {
    /// The unique identifier for the customer.
    pub id: String,
    pub name: String,
    pub email: String,
}

impl Customer {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}
