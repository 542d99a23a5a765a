//! End-to-end tests over a real tonic transport

use std::sync::Arc;

use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::{Channel, Server};

use app_web::api::{GreetingServiceImpl, ProductServiceImpl};
use app_web::application::{PRODUCT_CREATED_MESSAGE, ServiceHandler};
use app_web::greeting::v1::SayHelloRequest;
use app_web::greeting::v1::greeting_service_client::GreetingServiceClient;
use app_web::greeting::v1::greeting_service_server::GreetingServiceServer;
use app_web::product::v1::CreateProductRequest;
use app_web::product::v1::product_service_client::ProductServiceClient;
use app_web::product::v1::product_service_server::ProductServiceServer;

async fn spawn_server() -> Channel {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handler = Arc::new(ServiceHandler::new());
    let greeting = GreetingServiceImpl::new(handler.clone());
    let product = ProductServiceImpl::new(handler);

    tokio::spawn(async move {
        Server::builder()
            .add_service(GreetingServiceServer::new(greeting))
            .add_service(ProductServiceServer::new(product))
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
            .unwrap();
    });

    Channel::from_shared(format!("http://{}", addr))
        .unwrap()
        .connect()
        .await
        .unwrap()
}

#[tokio::test]
async fn say_hello_echoes_the_name_over_the_wire() {
    let channel = spawn_server().await;
    let mut client = GreetingServiceClient::new(channel);

    let response = client
        .say_hello(SayHelloRequest {
            name: "Mojtaba".to_string(),
        })
        .await
        .unwrap()
        .into_inner();

    assert_eq!(response.message, "Mojtaba");
}

#[tokio::test]
async fn create_product_returns_the_fixed_confirmation() {
    let channel = spawn_server().await;
    let mut client = ProductServiceClient::new(channel);

    let response = client
        .create_product(CreateProductRequest {
            brand: "signal".to_string(),
            name: "Car".to_string(),
            quantity: 1,
        })
        .await
        .unwrap()
        .into_inner();

    assert_eq!(response.message, PRODUCT_CREATED_MESSAGE);

    let response = client
        .create_product(CreateProductRequest::default())
        .await
        .unwrap()
        .into_inner();

    assert_eq!(response.message, PRODUCT_CREATED_MESSAGE);
}

#[tokio::test]
async fn both_services_share_one_channel() {
    let channel = spawn_server().await;
    let mut greeting = GreetingServiceClient::new(channel.clone());
    let mut product = ProductServiceClient::new(channel);

    let hello = greeting
        .say_hello(SayHelloRequest {
            name: "console".to_string(),
        })
        .await
        .unwrap()
        .into_inner();
    assert_eq!(hello.message, "console");

    let created = product
        .create_product(CreateProductRequest {
            brand: "acme".to_string(),
            name: "widget".to_string(),
            quantity: 3,
        })
        .await
        .unwrap()
        .into_inner();
    assert_eq!(created.message, PRODUCT_CREATED_MESSAGE);
}
