//! app-console - console client for the sample gRPC server

mod grpc;

use grpc::GrpcClients;
use grpc::greeting::v1::SayHelloRequest;
use grpc::product::v1::CreateProductRequest;
use sample_config::AppConfig;
use sample_telemetry::init_tracing;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load("config")?;
    init_tracing(&config.telemetry.log_level);

    info!("Connecting to server at {}", config.client.endpoint);
    let mut clients = GrpcClients::new(config.client.endpoint.clone()).await?;

    let response = clients
        .greeting
        .say_hello(SayHelloRequest {
            name: "Mojtaba".to_string(),
        })
        .await?
        .into_inner();
    println!("{}", response.message);

    println!("----------------------------------------");
    println!("-------------Product--------------------");
    println!("----------------------------------------");

    let response = clients
        .product
        .create_product(CreateProductRequest {
            brand: "signal".to_string(),
            name: "Car".to_string(),
            quantity: 1,
        })
        .await?
        .into_inner();
    println!("{}", response.message);

    Ok(())
}
