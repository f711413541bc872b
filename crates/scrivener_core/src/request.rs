//! Request and response types for LLM generation.

use crate::{Message, Output};
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Shape the model is asked to answer in.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseFormat {
    /// Free text
    #[default]
    Text,
    /// Any syntactically valid JSON object
    JsonObject,
    /// JSON conforming to a schema
    JsonSchema {
        /// Schema name reported to the provider
        name: String,
        /// JSON Schema document
        schema: serde_json::Value,
    },
}

/// Generic generation request.
///
/// # Examples
///
/// ```
/// use scrivener_core::{GenerateRequest, Message};
///
/// let request = GenerateRequest::builder()
///     .messages(vec![Message::user("Hello!")])
///     .max_tokens(Some(100))
///     .temperature(Some(0.7))
///     .model(Some("openai/gpt-oss-120b".to_string()))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.messages().len(), 1);
/// assert_eq!(*request.max_tokens(), Some(100));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into), default)]
pub struct GenerateRequest {
    /// The conversation messages to send
    messages: Vec<Message>,
    /// Maximum number of tokens to generate
    max_tokens: Option<u32>,
    /// Sampling temperature
    temperature: Option<f32>,
    /// Model identifier override
    model: Option<String>,
    /// Requested answer shape
    response_format: ResponseFormat,
}

impl GenerateRequest {
    /// Create a new builder for `GenerateRequest`.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// The unified response object.
///
/// # Examples
///
/// ```
/// use scrivener_core::{GenerateResponse, Output};
///
/// let response = GenerateResponse::builder()
///     .outputs(vec![Output::Text("Hello! How can I help?".to_string())])
///     .build()
///     .unwrap();
///
/// assert_eq!(response.text(), "Hello! How can I help?");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct GenerateResponse {
    /// The generated outputs from the model
    outputs: Vec<Output>,
}

impl GenerateResponse {
    /// Create a new builder for `GenerateResponse`.
    pub fn builder() -> GenerateResponseBuilder {
        GenerateResponseBuilder::default()
    }

    /// Create a response holding a single text output.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            outputs: vec![Output::Text(text.into())],
        }
    }

    /// All outputs concatenated as text.
    pub fn text(&self) -> String {
        self.outputs
            .iter()
            .map(Output::as_text)
            .collect::<Vec<_>>()
            .join("")
    }
}
