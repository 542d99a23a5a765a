//! app-web service - greeting and product gRPC endpoints

use std::sync::Arc;

use app_web::api::{GreetingServiceImpl, ProductServiceImpl};
use app_web::application::ServiceHandler;
use app_web::greeting::v1::greeting_service_server::GreetingServiceServer;
use app_web::product::v1::product_service_server::ProductServiceServer;
use sample_bootstrap::{build_reflection, run_server};
use sample_config::AppConfig;
use sample_errors::AppError;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    run_server("config", |_config: AppConfig, mut server| async move {
        info!("Initializing app-web service...");

        let handler = Arc::new(ServiceHandler::new());
        let greeting = GreetingServiceImpl::new(handler.clone());
        let product = ProductServiceImpl::new(handler);

        let reflection = build_reflection(vec![app_web::FILE_DESCRIPTOR_SET])
            .map_err(|e| AppError::internal(e.to_string()))?;

        Ok(server
            .add_service(GreetingServiceServer::new(greeting))
            .add_service(ProductServiceServer::new(product))
            .add_service(reflection))
    })
    .await
}
