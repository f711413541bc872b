//! Trait definitions for LLM backends.

use async_trait::async_trait;
use scrivener_core::{GenerateRequest, GenerateResponse};
use scrivener_error::ScrivenerResult;
use std::sync::Arc;

/// Core trait that all LLM backends must implement.
///
/// One request in, one response out. Drivers do not retry.
#[async_trait]
pub trait ScrivenerDriver: Send + Sync {
    /// Generate model output for a request.
    async fn generate(&self, req: &GenerateRequest) -> ScrivenerResult<GenerateResponse>;

    /// Provider name (e.g., "groq", "openai").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "openai/gpt-oss-120b").
    fn model_name(&self) -> &str;

    /// Whether the backend honours `ResponseFormat::JsonSchema`.
    ///
    /// Backends returning `false` are sent `ResponseFormat::JsonObject` instead.
    fn supports_json_schema(&self) -> bool {
        false
    }
}

#[async_trait]
impl<D: ScrivenerDriver + ?Sized> ScrivenerDriver for Arc<D> {
    async fn generate(&self, req: &GenerateRequest) -> ScrivenerResult<GenerateResponse> {
        (**self).generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }

    fn supports_json_schema(&self) -> bool {
        (**self).supports_json_schema()
    }
}

#[async_trait]
impl<D: ScrivenerDriver + ?Sized> ScrivenerDriver for Box<D> {
    async fn generate(&self, req: &GenerateRequest) -> ScrivenerResult<GenerateResponse> {
        (**self).generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }

    fn supports_json_schema(&self) -> bool {
        (**self).supports_json_schema()
    }
}
