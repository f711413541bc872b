//! Output types from LLMs.

use serde::{Deserialize, Serialize};

/// Supported output types from LLMs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Output {
    /// Plain text output.
    Text(String),
}

impl Output {
    /// Text carried by the output.
    pub fn as_text(&self) -> &str {
        match self {
            Output::Text(text) => text,
        }
    }
}
