//! Service starter
//!
//! Unified entry point for server binaries: load config, initialize the
//! runtime, start the health server, build the gRPC services via the
//! caller's closure, then serve with graceful shutdown.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use sample_config::AppConfig;
use sample_errors::AppResult;
use tonic::transport::Server;
use tonic::transport::server::Router;
use tracing::{error, info};

use crate::health::HealthServer;
use crate::metrics::MetricsRecorder;
use crate::runtime::{init_runtime, shutdown_signal};

/// Run a gRPC server.
///
/// The closure receives the loaded configuration and a fresh
/// `Server` builder and returns the router with all services
/// (including reflection) registered.
///
/// # Example
///
/// ```ignore
/// use sample_bootstrap::run_server;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     run_server("config", |_config, mut server| async move {
///         Ok(server.add_service(MyServiceServer::new(MyServiceImpl::new())))
///     })
///     .await
/// }
/// ```
pub async fn run_server<F, Fut>(
    config_dir: &str,
    server_builder: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(AppConfig, Server) -> Fut,
    Fut: Future<Output = AppResult<Router>>,
{
    // 1. Load configuration
    let config = AppConfig::load(config_dir)?;

    // 2. Initialize runtime (logging)
    init_runtime(&config);

    info!("Starting {} service", config.app_name);

    // 3. Install the metrics recorder
    let metrics = Arc::new(MetricsRecorder::new());

    // 4. Health/metrics HTTP server on gRPC port + 1000
    let health_port = config.server.port + 1000;
    let health_server = HealthServer::new(metrics.clone(), health_port);

    let health_handle = tokio::spawn(async move {
        if let Err(e) = health_server.serve().await {
            error!("Health server error: {}", e);
        }
    });

    // 5. Build the service address
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    // 6. Let the caller register services
    let router = server_builder(config.clone(), Server::builder()).await?;

    info!(%addr, "gRPC server starting");

    // 7. Serve until shutdown
    router.serve_with_shutdown(addr, shutdown_signal()).await?;

    health_handle.abort();

    info!("Service stopped");

    Ok(())
}
