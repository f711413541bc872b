//! The user's topic.

use scrivener_error::{WorkflowError, WorkflowErrorKind};
use serde::{Deserialize, Serialize};

/// A validated, non-empty topic string.
///
/// # Examples
///
/// ```
/// use scrivener_core::Topic;
///
/// let topic = Topic::new("  Rust Async Tips ").unwrap();
/// assert_eq!(topic.as_str(), "Rust Async Tips");
///
/// assert!(Topic::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(try_from = "String", into = "String")]
pub struct Topic(String);

impl Topic {
    /// Trim and validate a topic.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowErrorKind::EmptyTopic` if nothing but whitespace remains.
    #[track_caller]
    pub fn new(raw: impl AsRef<str>) -> Result<Self, WorkflowError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(WorkflowError::new(WorkflowErrorKind::EmptyTopic));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Borrow the topic text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Topic {
    type Error = WorkflowError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Topic::new(value)
    }
}

impl From<Topic> for String {
    fn from(topic: Topic) -> Self {
        topic.0
    }
}

impl AsRef<str> for Topic {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
