//! Top-level error wrapper types.

use crate::{ConfigError, ExportError, ModelsError, ServerError, WorkflowError};

/// Every error condition Scrivener can report.
///
/// # Examples
///
/// ```
/// use scrivener_error::{ScrivenerError, ConfigError};
///
/// let config_err = ConfigError::new("GROQ_API_KEY not set");
/// let err: ScrivenerError = config_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ScrivenerErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// LLM provider error
    #[from(ModelsError)]
    Models(ModelsError),
    /// Workflow error
    #[from(WorkflowError)]
    Workflow(WorkflowError),
    /// Markdown/PDF export error
    #[from(ExportError)]
    Export(ExportError),
    /// Web UI server error
    #[from(ServerError)]
    Server(ServerError),
}

/// Scrivener error with kind discrimination.
///
/// # Examples
///
/// ```
/// use scrivener_error::{ScrivenerResult, ConfigError};
///
/// fn might_fail() -> ScrivenerResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Scrivener Error: {}", _0)]
pub struct ScrivenerError(Box<ScrivenerErrorKind>);

impl ScrivenerError {
    /// Create a new error from a kind.
    pub fn new(kind: ScrivenerErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ScrivenerErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to ScrivenerErrorKind
impl<T> From<T> for ScrivenerError
where
    T: Into<ScrivenerErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Scrivener operations.
pub type ScrivenerResult<T> = std::result::Result<T, ScrivenerError>;
