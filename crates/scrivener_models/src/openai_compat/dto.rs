//! Wire types for the chat completions endpoint.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Chat completion request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ChatCompletionRequest {
    /// Model identifier
    model: String,
    /// Conversation messages
    messages: Vec<ChatMessage>,
    /// Maximum tokens to generate
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    /// Temperature for sampling
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    /// `{"type": "json_object"}` or `{"type": "json_schema", ...}`
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<serde_json::Value>,
}

impl ChatCompletionRequest {
    /// Creates a new builder for `ChatCompletionRequest`.
    pub fn builder() -> ChatCompletionRequestBuilder {
        ChatCompletionRequestBuilder::default()
    }
}

/// A message in the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct ChatMessage {
    /// "system", "user" or "assistant"
    role: String,
    /// Message content
    content: String,
}

impl ChatMessage {
    /// Create a new message.
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

/// Chat completion response body.
///
/// Only the fields Scrivener reads; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct ChatCompletionResponse {
    /// Model that served the request
    #[serde(default)]
    model: String,
    /// Generated completions
    choices: Vec<Choice>,
    /// Token usage statistics
    #[serde(default)]
    usage: Option<Usage>,
}

/// A completion choice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct Choice {
    /// Index of this choice
    #[serde(default)]
    index: u32,
    /// The generated message
    message: ChoiceMessage,
    /// Reason why generation finished
    #[serde(default)]
    finish_reason: Option<String>,
}

/// Message in a choice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct ChoiceMessage {
    /// Role of the message (typically "assistant")
    #[serde(default)]
    role: String,
    /// Generated content; null when the model produced none
    #[serde(default)]
    content: Option<String>,
}

/// Token usage statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct Usage {
    /// Tokens in the prompt
    #[serde(default)]
    prompt_tokens: u64,
    /// Tokens in the completion
    #[serde(default)]
    completion_tokens: u64,
    /// Total tokens used
    #[serde(default)]
    total_tokens: u64,
}
