pub mod customer;
pub mod order;
pub mod ports;
pub mod product;
