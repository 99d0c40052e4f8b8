//! Log and trace setup for applications embedding the client.
//!
//! The client itself only emits `tracing` events (retries, token refresh,
//! one `debug!` per CRM call). [`TracingConfig::init`] installs a global
//! subscriber for them: an `EnvFilter` (`RUST_LOG`, default `info`), an
//! optional fmt layer, and an OTLP span exporter when a collector endpoint
//! is configured through [`OTLP_ENDPOINT_ENV`] or
//! [`TracingConfig::with_otlp_endpoint`].
//!
//! Outgoing CRM requests carry the current span as a W3C `traceparent`
//! header via [`inject_trace_context`].
//!
//! ```rust,ignore
//! use hubspot_client::tracing::TracingConfig;
//!
//! let guard = TracingConfig::new().with_service_name("crm-sync").init()?;
//! // ... sync companies ...
//! guard.shutdown()?;
//! ```

use std::collections::HashMap;
use std::time::Duration;

use opentelemetry::KeyValue;
use opentelemetry::propagation::TextMapPropagator;
use opentelemetry::trace::TracerProvider;
use opentelemetry_sdk::Resource;
use opentelemetry_sdk::propagation::TraceContextPropagator;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the OTLP collector endpoint.
pub const OTLP_ENDPOINT_ENV: &str = "HUBSPOT_OTLP_ENDPOINT";

const DEFAULT_SERVICE_NAME: &str = "hubspot-client";

/// Instrumentation scope of the spans this crate exports.
const TRACER_NAME: &str = "hubspot-client";

#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// OTLP gRPC endpoint, e.g. `http://localhost:4317`. `None` disables export.
    pub otlp_endpoint: Option<String>,
    pub service_name: String,
    pub service_version: String,
    /// Print events to stdout alongside any export.
    pub enable_stdout: bool,
    /// Export timeout per batch.
    pub export_timeout: Duration,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            otlp_endpoint: std::env::var(OTLP_ENDPOINT_ENV)
                .ok()
                .filter(|endpoint| !endpoint.trim().is_empty()),
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            enable_stdout: true,
            export_timeout: Duration::from_secs(5),
        }
    }
}

impl TracingConfig {
    /// Defaults, with the endpoint taken from [`OTLP_ENDPOINT_ENV`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_otlp_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.otlp_endpoint = Some(endpoint.into());
        self
    }

    /// Disable span export even if [`OTLP_ENDPOINT_ENV`] is set.
    pub fn without_otlp(mut self) -> Self {
        self.otlp_endpoint = None;
        self
    }

    pub fn with_service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = name.into();
        self
    }

    pub fn with_service_version(mut self, version: impl Into<String>) -> Self {
        self.service_version = version.into();
        self
    }

    pub fn with_stdout(mut self, enable: bool) -> Self {
        self.enable_stdout = enable;
        self
    }

    /// Install the global subscriber.
    ///
    /// Hold the returned guard until exit and call [`TracingGuard::shutdown`]
    /// to flush pending spans.
    ///
    /// # Errors
    /// Returns [`TracingError::Exporter`] if the OTLP exporter cannot be
    /// built, and [`TracingError::AlreadyInitialized`] if a global subscriber
    /// is already installed.
    pub fn init(&self) -> Result<TracingGuard, TracingError> {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let provider = self
            .otlp_endpoint
            .as_deref()
            .map(|endpoint| self.build_provider(endpoint))
            .transpose()?;

        let otel_layer = provider
            .as_ref()
            .map(|p| tracing_opentelemetry::layer().with_tracer(p.tracer(TRACER_NAME)));
        let fmt_layer = self.enable_stdout.then(fmt::layer);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(otel_layer)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| TracingError::AlreadyInitialized(e.to_string()))?;

        tracing::debug!(
            service = %self.service_name,
            otlp = provider.is_some(),
            "Tracing initialized"
        );

        Ok(TracingGuard { provider })
    }

    fn build_provider(&self, endpoint: &str) -> Result<SdkTracerProvider, TracingError> {
        use opentelemetry_otlp::{Protocol, WithExportConfig};

        let exporter = opentelemetry_otlp::SpanExporter::builder()
            .with_tonic()
            .with_endpoint(endpoint)
            .with_timeout(self.export_timeout)
            .with_protocol(Protocol::Grpc)
            .build()
            .map_err(|e| TracingError::Exporter(e.to_string()))?;

        let resource = Resource::builder()
            .with_service_name(self.service_name.clone())
            .with_attribute(KeyValue::new("service.version", self.service_version.clone()))
            .build();

        Ok(SdkTracerProvider::builder()
            .with_batch_exporter(exporter)
            .with_resource(resource)
            .build())
    }
}

/// Keeps the span exporter alive until shutdown.
#[derive(Debug)]
pub struct TracingGuard {
    provider: Option<SdkTracerProvider>,
}

impl TracingGuard {
    /// True when spans are being exported.
    pub fn is_exporting(&self) -> bool {
        self.provider.is_some()
    }

    /// Flush pending spans and stop the exporter. A no-op without export.
    pub fn shutdown(&self) -> Result<(), TracingError> {
        match &self.provider {
            Some(provider) => provider
                .shutdown()
                .map_err(|e| TracingError::Exporter(e.to_string())),
            None => Ok(()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Failed to set up OTLP exporter: {0}")]
    Exporter(String),

    #[error("A global tracing subscriber is already installed: {0}")]
    AlreadyInitialized(String),
}

/// Add the current span's `traceparent` header to a request.
///
/// Without an active sampled span no header is added.
pub fn inject_trace_context(builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    let mut headers = HashMap::new();
    TraceContextPropagator::new().inject_context(&opentelemetry::Context::current(), &mut headers);

    headers
        .into_iter()
        .fold(builder, |builder, (key, value)| builder.header(key, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_methods() {
        let config = TracingConfig::new()
            .with_otlp_endpoint("http://localhost:4317")
            .with_service_name("crm-sync")
            .with_service_version("2.0.0")
            .with_stdout(false);
        assert_eq!(config.otlp_endpoint.as_deref(), Some("http://localhost:4317"));
        assert_eq!(config.service_name, "crm-sync");
        assert_eq!(config.service_version, "2.0.0");
        assert!(!config.enable_stdout);

        assert!(config.without_otlp().otlp_endpoint.is_none());
    }

    #[test]
    fn test_default_service_identity() {
        let config = TracingConfig::default();
        assert_eq!(config.service_name, "hubspot-client");
        assert_eq!(config.service_version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_guard_without_exporter_shuts_down() {
        let guard = TracingGuard { provider: None };
        assert!(!guard.is_exporting());
        assert!(guard.shutdown().is_ok());
    }

    #[test]
    fn test_inject_without_active_span_adds_no_traceparent() {
        let builder = reqwest::Client::new().get("http://localhost/crm/v3/objects/companies");
        let request = inject_trace_context(builder).build().unwrap();
        assert!(request.headers().get("traceparent").is_none());
    }
}
