//! Model provider errors.

/// Failure modes of an OpenAI-compatible chat completions endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum OpenAICompatErrorKind {
    /// Transport-level failure (DNS, connection, TLS)
    #[display("HTTP request failed: {}", _0)]
    Http(String),
    /// Non-success status without a more specific mapping
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or reason phrase
        message: String,
    },
    /// HTTP 429
    #[display("Rate limit exceeded")]
    RateLimit,
    /// HTTP 401 or 403
    #[display("Authentication failed: {}", _0)]
    Authentication(String),
    /// HTTP 404
    #[display("Model not found: {}", _0)]
    ModelNotFound(String),
    /// HTTP 400
    #[display("Invalid request: {}", _0)]
    InvalidRequest(String),
    /// Response body could not be decoded
    #[display("Failed to parse response: {}", _0)]
    ResponseParsing(String),
}

/// Groq-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GroqErrorKind {
    /// API credential missing from the environment
    #[display("Missing API key: {}", _0)]
    MissingApiKey(String),
    /// API returned an error
    #[display("API error: {}", _0)]
    Api(String),
    /// Rate limit exceeded
    #[display("Rate limit exceeded")]
    RateLimit,
    /// Credential rejected
    #[display("Authentication failed: {}", _0)]
    Authentication(String),
    /// Requested model does not exist
    #[display("Model not found: {}", _0)]
    ModelNotFound(String),
    /// Request rejected as malformed
    #[display("Invalid request: {}", _0)]
    InvalidRequest(String),
    /// Response could not be converted
    #[display("Response conversion failed: {}", _0)]
    ResponseConversion(String),
}

impl From<OpenAICompatErrorKind> for GroqErrorKind {
    fn from(kind: OpenAICompatErrorKind) -> Self {
        match kind {
            OpenAICompatErrorKind::Http(msg) => GroqErrorKind::Api(msg),
            OpenAICompatErrorKind::Api { status, message } => {
                GroqErrorKind::Api(format!("API error {}: {}", status, message))
            }
            OpenAICompatErrorKind::RateLimit => GroqErrorKind::RateLimit,
            OpenAICompatErrorKind::Authentication(msg) => GroqErrorKind::Authentication(msg),
            OpenAICompatErrorKind::ModelNotFound(model) => GroqErrorKind::ModelNotFound(model),
            OpenAICompatErrorKind::InvalidRequest(msg) => GroqErrorKind::InvalidRequest(msg),
            OpenAICompatErrorKind::ResponseParsing(msg) => GroqErrorKind::ResponseConversion(msg),
        }
    }
}

/// Model provider-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display, derive_more::From)]
pub enum ModelsErrorKind {
    /// Generic OpenAI-compatible endpoint error
    #[display("OpenAI-compatible: {}", _0)]
    OpenAiCompat(OpenAICompatErrorKind),

    /// Groq-specific error
    #[display("Groq: {}", _0)]
    Groq(GroqErrorKind),
}

/// Model provider error with location tracking.
///
/// # Examples
///
/// ```
/// use scrivener_error::{GroqErrorKind, ModelsError, ModelsErrorKind};
///
/// let err = ModelsError::new(ModelsErrorKind::Groq(GroqErrorKind::RateLimit));
/// assert!(format!("{}", err).contains("Rate limit"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Models Error: {} at {}:{}", kind, file, line)]
pub struct ModelsError {
    /// The specific error kind
    pub kind: ModelsErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ModelsError {
    /// Create a new models error.
    #[track_caller]
    pub fn new(kind: ModelsErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for model operations.
pub type ModelsResult<T> = Result<T, ModelsError>;
