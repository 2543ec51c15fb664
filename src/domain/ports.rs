use super::customer::Customer;
use super::order::{Order, OrderItem};
use super::product::{Product, StockUpdate};
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<Customer>>;
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Resolves the products that exist among `ids`, in request order.
    /// Unknown ids are simply absent from the result.
    async fn find_all_by_id(&self, ids: &[String]) -> Result<Vec<Product>>;

    /// Applies a batch of absolute quantity updates.
    async fn update_quantities(&self, updates: Vec<StockUpdate>) -> Result<()>;
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persists a new order for `customer` and assigns its identity.
    async fn create(&self, customer: Customer, items: Vec<OrderItem>) -> Result<Order>;
}

pub type CustomerRepositoryBox = Box<dyn CustomerRepository>;
pub type ProductRepositoryBox = Box<dyn ProductRepository>;
pub type OrderRepositoryBox = Box<dyn OrderRepository>;
