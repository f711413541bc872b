//! Workflow error types.

/// Specific error conditions for the report workflow.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum WorkflowErrorKind {
    /// Topic is empty or whitespace only
    #[display("Topic cannot be empty")]
    EmptyTopic,
    /// Outline step returned something that is not the expected JSON
    #[display("Malformed outline: {}", _0)]
    MalformedOutline(String),
    /// Model returned no text for a step
    #[display("Model returned no text for the {} step", _0)]
    EmptyResponse(String),
    /// Prompt template could not be rendered
    #[display("Template error: {}", _0)]
    Template(String),
    /// Request or message construction failed
    #[display("Builder error: {}", _0)]
    Builder(String),
}

/// Error type for workflow operations.
///
/// # Examples
///
/// ```
/// use scrivener_error::{WorkflowError, WorkflowErrorKind};
///
/// let err = WorkflowError::new(WorkflowErrorKind::EmptyTopic);
/// assert!(format!("{}", err).contains("empty"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Workflow Error: {} at line {} in {}", kind, line, file)]
pub struct WorkflowError {
    /// The specific error condition
    pub kind: WorkflowErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl WorkflowError {
    /// Create a new WorkflowError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: WorkflowErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
