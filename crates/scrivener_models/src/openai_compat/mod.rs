//! OpenAI-compatible chat completions protocol.

mod client;
mod conversion;
mod dto;

pub use client::OpenAICompatibleClient;
pub use dto::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice, ChoiceMessage, Usage,
};
