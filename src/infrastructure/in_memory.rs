use crate::domain::customer::Customer;
use crate::domain::order::{Order, OrderId, OrderItem};
use crate::domain::ports::{CustomerRepository, OrderRepository, ProductRepository};
use crate::domain::product::{Product, StockUpdate};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory customer repository.
///
/// Uses `Arc<RwLock<HashMap<String, Customer>>>` to allow shared concurrent
/// access. Ideal for testing or small datasets where persistence is not
/// required.
#[derive(Default, Clone)]
pub struct InMemoryCustomerRepository {
    customers: Arc<RwLock<HashMap<String, Customer>>>,
}

impl InMemoryCustomerRepository {
    /// Creates a new, empty in-memory customer repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds (or replaces) a customer.
    pub async fn insert(&self, customer: Customer) {
        let mut customers = self.customers.write().await;
        customers.insert(customer.id.clone(), customer);
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Customer>> {
        let customers = self.customers.read().await;
        Ok(customers.get(id).cloned())
    }
}

/// A thread-safe in-memory product repository.
///
/// Backs both the existence/stock lookups and the batch quantity update of the
/// order-creation workflow.
#[derive(Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<String, Product>>>,
}

impl InMemoryProductRepository {
    /// Creates a new, empty in-memory product repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds (or replaces) a product.
    pub async fn insert(&self, product: Product) {
        let mut products = self.products.write().await;
        products.insert(product.id.clone(), product);
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all_by_id(&self, ids: &[String]) -> Result<Vec<Product>> {
        let products = self.products.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| products.get(id).cloned())
            .collect())
    }

    async fn update_quantities(&self, updates: Vec<StockUpdate>) -> Result<()> {
        let mut products = self.products.write().await;
        for update in updates {
            if let Some(product) = products.get_mut(&update.id) {
                product.quantity = update.quantity;
            }
        }
        Ok(())
    }
}

/// A thread-safe in-memory order store.
///
/// Assigns order identity on `create` and retains created orders so tests can
/// inspect what was persisted.
#[derive(Default, Clone)]
pub struct InMemoryOrderRepository {
    orders: Arc<RwLock<HashMap<OrderId, Order>>>,
}

impl InMemoryOrderRepository {
    /// Creates a new, empty in-memory order store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all orders persisted so far.
    pub async fn all_orders(&self) -> Vec<Order> {
        let orders = self.orders.read().await;
        orders.values().cloned().collect()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn create(&self, customer: Customer, items: Vec<OrderItem>) -> Result<Order> {
        let order = Order {
            id: OrderId::new(),
            customer,
            items,
        };
        let mut orders = self.orders.write().await;
        orders.insert(order.id, order.clone());
        Ok(order)
    }
}
