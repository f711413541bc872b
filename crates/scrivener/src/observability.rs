//! Logging and optional OpenTelemetry export.
//!
//! Without the `otel` feature this installs a `tracing-subscriber` formatter
//! filtered by `RUST_LOG`. With it, spans are also bridged to OpenTelemetry
//! and, together with the LLM metrics, printed by the stdout exporters.

use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(feature = "otel")]
use opentelemetry::{KeyValue, global, trace::TracerProvider};
#[cfg(feature = "otel")]
use opentelemetry_sdk::{
    Resource,
    metrics::{PeriodicReader, SdkMeterProvider},
    trace::SdkTracerProvider,
};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Service name for telemetry attribution
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Filter used when `RUST_LOG` is unset (e.g. "info", "scrivener=debug")
    pub log_level: String,
    /// Emit JSON lines instead of human-readable text
    pub json_logs: bool,
}

impl ObservabilityConfig {
    /// Create a new configuration with the given service name.
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            log_level: "info".to_string(),
            json_logs: false,
        }
    }

    /// Set the fallback log level.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Enable JSON-formatted logs.
    pub fn with_json_logs(mut self, enabled: bool) -> Self {
        self.json_logs = enabled;
        self
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_NAME"))
    }
}

/// Flushes exporters when dropped.
///
/// Keep it alive in `main` for the life of the program.
#[derive(Debug, Default)]
pub struct ObservabilityGuard {
    #[cfg(feature = "otel")]
    tracer_provider: Option<SdkTracerProvider>,
    #[cfg(feature = "otel")]
    meter_provider: Option<SdkMeterProvider>,
}

impl Drop for ObservabilityGuard {
    fn drop(&mut self) {
        #[cfg(feature = "otel")]
        {
            if let Some(provider) = self.tracer_provider.take() {
                if let Err(e) = provider.shutdown() {
                    eprintln!("Failed to shut down tracer provider: {e}");
                }
            }
            if let Some(provider) = self.meter_provider.take() {
                if let Err(e) = provider.shutdown() {
                    eprintln!("Failed to shut down meter provider: {e}");
                }
            }
        }
    }
}

fn env_filter(config: &ObservabilityConfig) -> Result<EnvFilter, BoxError> {
    Ok(EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.log_level))?)
}

fn fmt_layer<S>(config: &ObservabilityConfig) -> Box<dyn Layer<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    if config.json_logs {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_level(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_level(true)
            .boxed()
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over `config.log_level`.
///
/// # Errors
///
/// Fails if the filter does not parse or a subscriber is already installed.
#[cfg(not(feature = "otel"))]
pub fn init_observability(config: &ObservabilityConfig) -> Result<ObservabilityGuard, BoxError> {
    tracing_subscriber::registry()
        .with(env_filter(config)?)
        .with(fmt_layer(config))
        .try_init()?;

    Ok(ObservabilityGuard::default())
}

/// Install the global subscriber, OpenTelemetry tracer and meter.
///
/// `RUST_LOG` takes precedence over `config.log_level`.
///
/// # Errors
///
/// Fails if the filter does not parse or a subscriber is already installed.
#[cfg(feature = "otel")]
pub fn init_observability(config: &ObservabilityConfig) -> Result<ObservabilityGuard, BoxError> {
    let resource = Resource::builder()
        .with_service_name(config.service_name.clone())
        .with_attributes(vec![KeyValue::new(
            "service.version",
            config.service_version.clone(),
        )])
        .build();

    let tracer_provider = SdkTracerProvider::builder()
        .with_simple_exporter(opentelemetry_stdout::SpanExporter::default())
        .with_resource(resource.clone())
        .build();
    global::set_tracer_provider(tracer_provider.clone());

    let reader = PeriodicReader::builder(opentelemetry_stdout::MetricExporter::default()).build();
    let meter_provider = SdkMeterProvider::builder()
        .with_reader(reader)
        .with_resource(resource)
        .build();
    global::set_meter_provider(meter_provider.clone());

    let tracer = tracer_provider.tracer(config.service_name.clone());
    let otel_layer = tracing_opentelemetry::layer().with_tracer(tracer);

    tracing_subscriber::registry()
        .with(env_filter(config)?)
        .with(fmt_layer(config))
        .with(otel_layer)
        .try_init()?;

    Ok(ObservabilityGuard {
        tracer_provider: Some(tracer_provider),
        meter_provider: Some(meter_provider),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builders() {
        let config = ObservabilityConfig::new("scrivener-test")
            .with_log_level("debug")
            .with_json_logs(true);

        assert_eq!(config.service_name, "scrivener-test");
        assert_eq!(config.log_level, "debug");
        assert!(config.json_logs);
        assert_eq!(config.service_version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn bad_filter_is_an_error() {
        let config = ObservabilityConfig::default().with_log_level("not a [valid filter");
        // RUST_LOG may be set in CI; only assert when it is not.
        if std::env::var("RUST_LOG").is_err() {
            assert!(env_filter(&config).is_err());
        }
    }
}
