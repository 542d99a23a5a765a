//! Product gRPC service implementation

use std::sync::Arc;

use tonic::{Request, Response, Status};

use crate::application::{CreateProductCommand, ServiceHandler};
use crate::product::v1::product_service_server::ProductService;
use crate::product::v1::{CreateProductRequest, CreateProductResponse};

pub struct ProductServiceImpl {
    handler: Arc<ServiceHandler>,
}

impl ProductServiceImpl {
    pub fn new(handler: Arc<ServiceHandler>) -> Self {
        Self { handler }
    }
}

#[tonic::async_trait]
impl ProductService for ProductServiceImpl {
    async fn create_product(
        &self,
        request: Request<CreateProductRequest>,
    ) -> Result<Response<CreateProductResponse>, Status> {
        let req = request.into_inner();

        let cmd = CreateProductCommand {
            brand: req.brand,
            name: req.name,
            quantity: req.quantity,
        };

        let message = self.handler.create_product(cmd).await?;

        Ok(Response::new(CreateProductResponse { message }))
    }
}
