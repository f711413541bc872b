//! Metrics for LLM API calls.
//!
//! OpenTelemetry instruments recorded by the chat client. Nothing is exported
//! unless the binary installs a meter provider.

use opentelemetry::{
    KeyValue, global,
    metrics::{Counter, Histogram},
};
use scrivener_error::OpenAICompatErrorKind;
use std::sync::OnceLock;

static METRICS: OnceLock<LlmMetrics> = OnceLock::new();

/// Counters and histograms for chat completion calls.
///
/// Labeled with provider and model.
#[derive(Clone)]
pub struct LlmMetrics {
    /// Total LLM API requests
    pub requests: Counter<u64>,
    /// Failed LLM API requests
    pub errors: Counter<u64>,
    /// LLM API call duration in seconds
    pub duration: Histogram<f64>,
    /// Prompt tokens used
    pub prompt_tokens: Counter<u64>,
    /// Completion tokens used
    pub completion_tokens: Counter<u64>,
}

impl LlmMetrics {
    fn init() -> Self {
        let meter = global::meter("scrivener_llm");

        Self {
            requests: meter
                .u64_counter("llm.requests")
                .with_description("Total LLM API requests")
                .build(),
            errors: meter
                .u64_counter("llm.errors")
                .with_description("Failed LLM API requests")
                .build(),
            duration: meter
                .f64_histogram("llm.duration")
                .with_unit("s")
                .with_description("LLM API call duration")
                .build(),
            prompt_tokens: meter
                .u64_counter("llm.tokens.prompt")
                .with_description("Prompt tokens used")
                .build(),
            completion_tokens: meter
                .u64_counter("llm.tokens.completion")
                .with_description("Completion tokens used")
                .build(),
        }
    }

    /// Get the global LLM metrics instance.
    pub fn get() -> &'static Self {
        METRICS.get_or_init(Self::init)
    }

    fn labels(provider: &str, model: &str) -> [KeyValue; 2] {
        [
            KeyValue::new("provider", provider.to_string()),
            KeyValue::new("model", model.to_string()),
        ]
    }

    /// Record a successful request and its latency.
    pub fn record_request(&self, provider: &str, model: &str, duration_secs: f64) {
        let labels = Self::labels(provider, model);
        self.requests.add(1, &labels);
        self.duration.record(duration_secs, &labels);
    }

    /// Record a failed request.
    pub fn record_error(&self, provider: &str, model: &str, kind: &OpenAICompatErrorKind) {
        let [provider, model] = Self::labels(provider, model);
        self.errors.add(
            1,
            &[provider, model, KeyValue::new("error_type", classify_error(kind))],
        );
    }

    /// Record token usage reported by the provider.
    pub fn record_tokens(&self, provider: &str, model: &str, prompt: u64, completion: u64) {
        let labels = Self::labels(provider, model);
        self.prompt_tokens.add(prompt, &labels);
        self.completion_tokens.add(completion, &labels);
    }
}

/// Label an error for the `error_type` metric attribute.
///
/// Returns one of: "rate_limit", "auth", "network", "not_found",
/// "invalid_request", "parse", "api".
pub fn classify_error(kind: &OpenAICompatErrorKind) -> &'static str {
    match kind {
        OpenAICompatErrorKind::RateLimit => "rate_limit",
        OpenAICompatErrorKind::Authentication(_) => "auth",
        OpenAICompatErrorKind::Http(_) => "network",
        OpenAICompatErrorKind::ModelNotFound(_) => "not_found",
        OpenAICompatErrorKind::InvalidRequest(_) => "invalid_request",
        OpenAICompatErrorKind::ResponseParsing(_) => "parse",
        OpenAICompatErrorKind::Api { .. } => "api",
    }
}
