//! Health endpoints
//!
//! Serves /health, /ready and /metrics next to the gRPC port.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use serde::Serialize;
use tracing::info;

use crate::metrics::MetricsRecorder;

/// Health check status
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub checks: Vec<ComponentHealth>,
}

/// Per-component health
#[derive(Debug, Clone, Serialize)]
pub struct ComponentHealth {
    pub name: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            checks: vec![],
        }
    }

    pub fn add_check(&mut self, check: ComponentHealth) {
        if check.status != "healthy" {
            self.status = "unhealthy".to_string();
        }
        self.checks.push(check);
    }

    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

impl ComponentHealth {
    pub fn healthy(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: "healthy".to_string(),
            message: None,
        }
    }

    pub fn unhealthy(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: "unhealthy".to_string(),
            message: Some(message.into()),
        }
    }
}

/// HTTP server for health checks and metrics
pub struct HealthServer {
    metrics: Arc<MetricsRecorder>,
    port: u16,
}

impl HealthServer {
    pub fn new(metrics: Arc<MetricsRecorder>, port: u16) -> Self {
        Self { metrics, port }
    }

    pub async fn serve(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let app = Router::new()
            .route("/health", get(health_handler))
            .route("/ready", get(ready_handler))
            .route("/metrics", get(metrics_handler))
            .with_state(self.metrics);

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!(%addr, "Health server listening");

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}

/// Liveness: the process is up
async fn health_handler() -> impl IntoResponse {
    Json(HealthStatus::healthy())
}

/// Readiness: the gRPC server has no backing stores, so readiness
/// reduces to the process serving at all
async fn ready_handler() -> impl IntoResponse {
    let mut status = HealthStatus::healthy();
    status.add_check(ComponentHealth::healthy("grpc"));
    Json(status)
}

async fn metrics_handler(State(metrics): State<Arc<MetricsRecorder>>) -> impl IntoResponse {
    metrics.render()
}
