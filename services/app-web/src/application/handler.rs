//! Business logic handler

use sample_bootstrap::record_rpc_request;
use sample_errors::AppResult;
use tracing::info;

use super::commands::{CreateProductCommand, SayHelloCommand};

/// Confirmation message returned for every created product.
/// The spelling is part of the contract; clients match the exact string.
pub const PRODUCT_CREATED_MESSAGE: &str = "Created successFully";

pub struct ServiceHandler;

impl ServiceHandler {
    pub fn new() -> Self {
        Self
    }

    /// Echo the caller's name back as the greeting message
    pub async fn say_hello(&self, cmd: SayHelloCommand) -> AppResult<String> {
        record_rpc_request("greeting", "say_hello");
        info!(name = %cmd.name, "Handling SayHello");

        Ok(cmd.name)
    }

    /// Acknowledge a product creation with the fixed confirmation
    pub async fn create_product(&self, cmd: CreateProductCommand) -> AppResult<String> {
        record_rpc_request("product", "create_product");
        info!(
            brand = %cmd.brand,
            name = %cmd.name,
            quantity = cmd.quantity,
            "Handling CreateProduct"
        );

        Ok(PRODUCT_CREATED_MESSAGE.to_string())
    }
}

impl Default for ServiceHandler {
    fn default() -> Self {
        Self::new()
    }
}
