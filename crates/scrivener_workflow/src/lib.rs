//! Report-writing workflow for Scrivener.
//!
//! A run makes four kinds of model call:
//!
//! 1. **Outline**: the topic becomes an ordered list of sections (structured
//!    JSON output).
//! 2. **Expand**: every section is written up, concurrently, bounded by
//!    `max_concurrency`.
//! 3. **Join**: the blocks are concatenated in outline order.
//! 4. **Polish**: the joined draft gets one editorial pass.
//!
//! Nothing is retried. If any call fails the run fails.
//!
//! # Example
//!
//! ```no_run
//! use scrivener_models::GroqDriver;
//! use scrivener_workflow::{ReportWriter, ScrivenerConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ScrivenerConfig::load()?;
//! let driver = GroqDriver::new(config.workflow().model().clone())?;
//! let writer = ReportWriter::new(driver, config.workflow().clone());
//!
//! let report = writer.run("Rust Async Tips").await?;
//! println!("{} sections, {} words", report.stats().sections(), report.stats().words());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod extraction;
mod observer;
mod prompts;
mod writer;

pub use config::{
    DEFAULT_MAX_CONCURRENCY, DEFAULT_MODEL, DEFAULT_SEPARATOR, ScrivenerConfig, ServerSettings,
    WorkflowConfig, WorkflowConfigBuilder,
};
pub use extraction::{extract_json, parse_outline};
pub use observer::{NoopObserver, Stage, WorkflowObserver};
pub use prompts::Prompts;
pub use writer::{ReportWriter, join};
