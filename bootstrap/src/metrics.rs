//! Metrics recording

use metrics_exporter_prometheus::PrometheusHandle;

/// Holds the Prometheus recorder handle for the /metrics endpoint
pub struct MetricsRecorder {
    handle: PrometheusHandle,
}

impl MetricsRecorder {
    /// Install the global Prometheus recorder. Call once per process.
    pub fn new() -> Self {
        Self {
            handle: sample_telemetry::init_metrics(),
        }
    }

    /// Render the current metrics in Prometheus exposition format
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

/// Count one handled RPC
pub fn record_rpc_request(service: &'static str, method: &'static str) {
    metrics::counter!("grpc_requests_total", "service" => service, "method" => method)
        .increment(1);
}
