//! API layer - gRPC service implementations

mod greeting;
mod product;

pub use greeting::GreetingServiceImpl;
pub use product::ProductServiceImpl;
