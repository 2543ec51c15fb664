use crate::domain::order::{Order, OrderItem};
use crate::domain::ports::{CustomerRepositoryBox, OrderRepositoryBox, ProductRepositoryBox};
use crate::domain::product::{Product, StockUpdate};
use crate::error::{OrderError, Result};
use serde::Deserialize;
use std::collections::HashMap;

/// One requested row of an order: a product reference and a quantity.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone)]
pub struct RequestedItem {
    pub id: String,
    pub quantity: u32,
}

/// The order-creation workflow.
///
/// `CreateOrder` owns the three collaborator repositories and runs a single
/// linear pass per invocation: resolve customer, resolve products, validate
/// existence and stock, price the items, persist the order, decrement stock.
/// It awaits each collaborator call in turn; there is no internal parallelism.
pub struct CreateOrder {
    customers: CustomerRepositoryBox,
    products: ProductRepositoryBox,
    orders: OrderRepositoryBox,
}

impl CreateOrder {
    /// Creates a new `CreateOrder` workflow instance.
    ///
    /// # Arguments
    ///
    /// * `customers` - Lookup for customers.
    /// * `products` - Lookup and batch quantity update for products.
    /// * `orders` - Store that persists orders and assigns their identity.
    pub fn new(
        customers: CustomerRepositoryBox,
        products: ProductRepositoryBox,
        orders: OrderRepositoryBox,
    ) -> Self {
        Self {
            customers,
            products,
            orders,
        }
    }

    /// Creates an order for `customer_id` from the requested items.
    ///
    /// Validation failures abort before anything is written. On success the
    /// order is persisted first and the stock decrement is submitted second;
    /// the two steps are not atomic, so a decrement failure leaves the order
    /// persisted. The availability check itself is not guarded against
    /// concurrent invocations either: two orders racing on the same product
    /// can both pass it against stale stock.
    pub async fn execute(
        &self,
        customer_id: &str,
        requested: Vec<RequestedItem>,
    ) -> Result<Order> {
        let customer = self
            .customers
            .find_by_id(customer_id)
            .await?
            .ok_or(OrderError::CustomerNotFound)?;

        let requested_ids: Vec<String> = requested.iter().map(|item| item.id.clone()).collect();
        let found = self.products.find_all_by_id(&requested_ids).await?;

        if found.is_empty() {
            return Err(OrderError::NoProductsFound);
        }

        let by_id: HashMap<&str, &Product> =
            found.iter().map(|product| (product.id.as_str(), product)).collect();

        let missing: Vec<&str> = requested
            .iter()
            .filter(|item| !by_id.contains_key(item.id.as_str()))
            .map(|item| item.id.as_str())
            .collect();
        if !missing.is_empty() {
            return Err(OrderError::ProductsNotFound(missing.join(", ")));
        }

        // All requested ids resolve past this point.
        let mut out_of_stock = Vec::new();
        let mut items = Vec::with_capacity(requested.len());
        let mut updates = Vec::with_capacity(requested.len());
        for item in &requested {
            if let Some(product) = by_id.get(item.id.as_str()) {
                if product.quantity < item.quantity {
                    out_of_stock.push(format!("{} (Quantity: {})", item.id, item.quantity));
                    continue;
                }
                items.push(OrderItem {
                    product_id: item.id.clone(),
                    quantity: item.quantity,
                    price: product.price,
                });
                updates.push(StockUpdate {
                    id: item.id.clone(),
                    quantity: product.quantity - item.quantity,
                });
            }
        }
        if !out_of_stock.is_empty() {
            return Err(OrderError::InsufficientStock(out_of_stock.join(", ")));
        }

        let order = self.orders.create(customer, items).await?;
        tracing::info!(
            order_id = %order.id,
            customer_id,
            items = order.items.len(),
            "order created"
        );

        tracing::debug!(products = updates.len(), "decrementing stock");
        self.products.update_quantities(updates).await?;

        Ok(order)
    }
}
