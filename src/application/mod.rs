pub mod create_order;
