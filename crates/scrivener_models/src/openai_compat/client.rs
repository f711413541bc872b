//! HTTP client for OpenAI-compatible chat completions endpoints.

use super::conversion::{classify_status, from_chat_response, to_chat_request};
use super::{ChatCompletionRequest, ChatCompletionResponse};
use crate::LlmMetrics;
use async_trait::async_trait;
use scrivener_core::{GenerateRequest, GenerateResponse};
use scrivener_error::{
    ModelsError, ModelsErrorKind, OpenAICompatErrorKind, ScrivenerResult,
};
use scrivener_interface::ScrivenerDriver;
use std::time::Instant;
use tracing::instrument;

/// Client for any endpoint speaking the chat completions protocol.
///
/// Sends exactly one HTTP request per call. Failures are classified by
/// status code and returned; nothing is retried.
#[derive(Debug, Clone)]
pub struct OpenAICompatibleClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    endpoint: String,
    provider: &'static str,
}

impl OpenAICompatibleClient {
    /// Create a client for `endpoint` (the full `/chat/completions` URL).
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        endpoint: impl Into<String>,
        provider: &'static str,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            endpoint: endpoint.into(),
            provider,
        }
    }

    /// Replace the endpoint, keeping key and model.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Default model used when a request names none.
    pub fn model_name(&self) -> &str {
        &self.model
    }

    /// Provider label used in logs and metrics.
    pub fn provider_name(&self) -> &'static str {
        self.provider
    }

    /// Full URL requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one chat completion and return the first choice's text.
    #[instrument(
        skip(self, req),
        fields(provider = self.provider, model = %self.model, messages = req.messages().len())
    )]
    pub async fn complete(
        &self,
        req: &GenerateRequest,
    ) -> Result<GenerateResponse, OpenAICompatErrorKind> {
        let chat_request = to_chat_request(req, &self.model)?;
        let model = chat_request.model().clone();
        let metrics = LlmMetrics::get();
        let start = Instant::now();

        let result = self.send(&chat_request, &model).await;
        match &result {
            Ok(response) => {
                metrics.record_request(self.provider, &model, start.elapsed().as_secs_f64());
                if let Some(usage) = response.usage() {
                    metrics.record_tokens(
                        self.provider,
                        &model,
                        *usage.prompt_tokens(),
                        *usage.completion_tokens(),
                    );
                }
            }
            Err(kind) => {
                tracing::error!(error = %kind, "Chat completion failed");
                metrics.record_error(self.provider, &model, kind);
            }
        }

        let response = from_chat_response(&result?)?;
        tracing::debug!(chars = response.text().len(), "Chat completion successful");
        Ok(response)
    }

    async fn send(
        &self,
        chat_request: &ChatCompletionRequest,
        model: &str,
    ) -> Result<ChatCompletionResponse, OpenAICompatErrorKind> {
        tracing::debug!(endpoint = %self.endpoint, "Sending chat completion request");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(chat_request)
            .send()
            .await
            .map_err(|e| OpenAICompatErrorKind::Http(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| status.canonical_reason().unwrap_or("").to_string());
            return Err(classify_status(status.as_u16(), body, model));
        }

        response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|e| OpenAICompatErrorKind::ResponseParsing(e.to_string()))
    }
}

#[async_trait]
impl ScrivenerDriver for OpenAICompatibleClient {
    async fn generate(&self, req: &GenerateRequest) -> ScrivenerResult<GenerateResponse> {
        self.complete(req)
            .await
            .map_err(|kind| ModelsError::new(ModelsErrorKind::OpenAiCompat(kind)).into())
    }

    fn provider_name(&self) -> &'static str {
        self.provider
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
