//! Scrivener turns a topic into a finished blog post.
//!
//! An LLM drafts an outline, writes every section concurrently, and gives the
//! joined draft a final editorial pass. Results are shown in a small web UI
//! and can be downloaded as Markdown or PDF.
//!
//! This crate re-exports the workspace crates and hosts the `scrivener`
//! binary.
//!
//! # Example
//!
//! ```no_run
//! use scrivener::{GroqDriver, ReportWriter, ScrivenerConfig, markdown_file_name, write_markdown};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ScrivenerConfig::load()?;
//! let driver = GroqDriver::new(config.workflow().model().clone())?;
//! let writer = ReportWriter::new(driver, config.workflow().clone());
//!
//! let report = writer.run("Rust Async Tips").await?;
//! let path = markdown_file_name(report.topic().as_str());
//! write_markdown(std::path::Path::new(&path), report.final_text())?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod observability;

pub use observability::{ObservabilityConfig, ObservabilityGuard, init_observability};

pub use scrivener_core::{
    GenerateRequest, GenerateRequestBuilder, GenerateResponse, GenerateResponseBuilder, Message,
    MessageBuilder, Outline, Output, Report, ReportStats, ResponseFormat, Role, Section, Topic,
};
pub use scrivener_error::{
    ConfigError, ExportError, ExportErrorKind, GroqErrorKind, ModelsError, ModelsErrorKind,
    ModelsResult, OpenAICompatErrorKind, ScrivenerError, ScrivenerErrorKind, ScrivenerResult,
    ServerError, ServerErrorKind, WorkflowError, WorkflowErrorKind,
};
pub use scrivener_export::{
    Font, PageLayout, PlacedLine, layout, markdown_file_name, paragraphs, pdf_file_name,
    render_pdf, write_markdown, write_pdf,
};
pub use scrivener_interface::ScrivenerDriver;
pub use scrivener_models::{GroqDriver, LlmMetrics, OpenAICompatibleClient, classify_error};
pub use scrivener_server::{AppState, DEFAULT_REPORT_CAPACITY, ReportStore, create_router, serve};
pub use scrivener_workflow::{
    NoopObserver, Prompts, ReportWriter, ScrivenerConfig, ServerSettings, Stage, WorkflowConfig,
    WorkflowConfigBuilder, WorkflowObserver, extract_json, join, parse_outline,
};
