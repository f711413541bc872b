//! Export error types.

/// Error kinds for Markdown/PDF export.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ExportErrorKind {
    /// PDF document could not be assembled or serialized
    #[display("PDF generation failed: {}", _0)]
    Pdf(String),
    /// Writing the artifact to disk failed
    #[display("I/O error: {}", _0)]
    Io(String),
}

/// Export error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Export Error: {} at line {} in {}", kind, line, file)]
pub struct ExportError {
    /// The error kind
    pub kind: ExportErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl ExportError {
    /// Create a new ExportError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ExportErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
