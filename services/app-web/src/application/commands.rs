//! Commands

/// Greet a caller by name
#[derive(Debug, Clone)]
pub struct SayHelloCommand {
    pub name: String,
}

/// Create a product
#[derive(Debug, Clone)]
pub struct CreateProductCommand {
    pub brand: String,
    pub name: String,
    pub quantity: i32,
}
