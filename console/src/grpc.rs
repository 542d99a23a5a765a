//! gRPC clients

pub mod greeting {
    pub mod v1 {
        tonic::include_proto!("greeting.v1");
    }
}

pub mod product {
    pub mod v1 {
        tonic::include_proto!("product.v1");
    }
}

use greeting::v1::greeting_service_client::GreetingServiceClient;
use product::v1::product_service_client::ProductServiceClient;
use tonic::transport::Channel;

/// gRPC client bundle, both clients share one channel
#[derive(Clone)]
pub struct GrpcClients {
    pub greeting: GreetingServiceClient<Channel>,
    pub product: ProductServiceClient<Channel>,
}

impl GrpcClients {
    /// Connect and create the client bundle
    pub async fn new(endpoint: String) -> Result<Self, Box<dyn std::error::Error>> {
        let channel = Channel::from_shared(endpoint)?.connect().await?;

        Ok(Self {
            greeting: GreetingServiceClient::new(channel.clone()),
            product: ProductServiceClient::new(channel),
        })
    }
}
