//! Application layer - commands and business logic

pub mod commands;
pub mod handler;

pub use commands::*;
pub use handler::{PRODUCT_CREATED_MESSAGE, ServiceHandler};
