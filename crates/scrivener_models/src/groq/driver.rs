//! Groq chat completions driver.

use crate::OpenAICompatibleClient;
use async_trait::async_trait;
use scrivener_core::{GenerateRequest, GenerateResponse};
use scrivener_error::{GroqErrorKind, ModelsError, ModelsErrorKind, ModelsResult, ScrivenerResult};
use scrivener_interface::ScrivenerDriver;
use tracing::instrument;

/// Groq driver over the OpenAI-compatible protocol.
///
/// Groq supports both `json_object` and `json_schema` response formats.
#[derive(Debug, Clone)]
pub struct GroqDriver {
    inner: OpenAICompatibleClient,
}

impl GroqDriver {
    /// Chat completions endpoint.
    pub const ENDPOINT: &'static str = "https://api.groq.com/openai/v1/chat/completions";

    /// Model used when none is configured.
    pub const DEFAULT_MODEL: &'static str = "openai/gpt-oss-120b";

    /// Environment variable holding the credential.
    pub const API_KEY_VAR: &'static str = "GROQ_API_KEY";

    /// Creates a new Groq driver.
    ///
    /// Reads the key from `GROQ_API_KEY`, falling back to `groq_api_key`.
    ///
    /// # Errors
    ///
    /// Returns `GroqErrorKind::MissingApiKey` if neither variable is set.
    #[instrument(skip_all, fields(model = %model))]
    pub fn new(model: String) -> ModelsResult<Self> {
        let api_key = Self::api_key_from_env().ok_or_else(|| {
            ModelsError::new(ModelsErrorKind::Groq(GroqErrorKind::MissingApiKey(
                format!("{} not set", Self::API_KEY_VAR),
            )))
        })?;

        Ok(Self::with_api_key(api_key, model))
    }

    /// Creates a new Groq driver with an explicit API key.
    pub fn with_api_key(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            inner: OpenAICompatibleClient::new(api_key, model, Self::ENDPOINT, "groq"),
        }
    }

    /// Point the driver at another base URL, e.g. a local mock.
    ///
    /// `base_url` is the part before `/chat/completions`.
    pub fn with_base_url(self, base_url: impl AsRef<str>) -> Self {
        let endpoint = format!("{}/chat/completions", base_url.as_ref().trim_end_matches('/'));
        Self {
            inner: self.inner.with_endpoint(endpoint),
        }
    }

    /// Whether a non-empty key is present in the environment.
    pub fn api_key_configured() -> bool {
        Self::api_key_from_env().is_some()
    }

    fn api_key_from_env() -> Option<String> {
        [Self::API_KEY_VAR, "groq_api_key"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .map(|key| key.trim().to_string())
            .find(|key| !key.is_empty())
    }

    /// Endpoint requests are posted to.
    pub fn endpoint(&self) -> &str {
        self.inner.endpoint()
    }
}

#[async_trait]
impl ScrivenerDriver for GroqDriver {
    #[instrument(skip(self, req), fields(provider = "groq", model = %self.inner.model_name()))]
    async fn generate(&self, req: &GenerateRequest) -> ScrivenerResult<GenerateResponse> {
        self.inner
            .complete(req)
            .await
            .map_err(|kind| ModelsError::new(ModelsErrorKind::Groq(kind.into())).into())
    }

    fn provider_name(&self) -> &'static str {
        self.inner.provider_name()
    }

    fn model_name(&self) -> &str {
        self.inner.model_name()
    }

    fn supports_json_schema(&self) -> bool {
        true
    }
}
