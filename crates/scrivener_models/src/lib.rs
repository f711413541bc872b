//! LLM provider integrations for Scrivener.
//!
//! Scrivener talks to chat models over the OpenAI-compatible chat completions
//! protocol. [`OpenAICompatibleClient`] speaks that protocol against any base
//! URL; [`GroqDriver`] points it at Groq and reads the credential from the
//! environment.
//!
//! # Example
//!
//! ```no_run
//! use scrivener_core::{GenerateRequest, Message};
//! use scrivener_interface::ScrivenerDriver;
//! use scrivener_models::GroqDriver;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let driver = GroqDriver::new(GroqDriver::DEFAULT_MODEL.to_string())?;
//! let request = GenerateRequest::builder()
//!     .messages(vec![Message::user("Hello")])
//!     .build()?;
//! let response = driver.generate(&request).await?;
//! println!("{}", response.text());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod groq;
mod metrics;
mod openai_compat;

pub use groq::GroqDriver;
pub use metrics::{LlmMetrics, classify_error};
pub use openai_compat::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice, ChoiceMessage,
    OpenAICompatibleClient, Usage,
};
