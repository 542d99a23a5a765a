//! sample-bootstrap - shared service startup skeleton
//!
//! Startup logic reused by every server binary.

mod health;
mod metrics;
mod reflection;
mod runtime;
mod starter;

pub use health::*;
pub use metrics::*;
pub use reflection::*;
pub use runtime::*;
pub use starter::*;
