//! Greeting gRPC service implementation

use std::sync::Arc;

use tonic::{Request, Response, Status};

use crate::application::{SayHelloCommand, ServiceHandler};
use crate::greeting::v1::greeting_service_server::GreetingService;
use crate::greeting::v1::{SayHelloRequest, SayHelloResponse};

pub struct GreetingServiceImpl {
    handler: Arc<ServiceHandler>,
}

impl GreetingServiceImpl {
    pub fn new(handler: Arc<ServiceHandler>) -> Self {
        Self { handler }
    }
}

#[tonic::async_trait]
impl GreetingService for GreetingServiceImpl {
    async fn say_hello(
        &self,
        request: Request<SayHelloRequest>,
    ) -> Result<Response<SayHelloResponse>, Status> {
        let req = request.into_inner();

        let cmd = SayHelloCommand { name: req.name };

        let message = self.handler.say_hello(cmd).await?;

        Ok(Response::new(SayHelloResponse { message }))
    }
}
