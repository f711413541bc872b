//! Error types for Scrivener.
//!
//! This crate provides the error types used throughout the Scrivener workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use scrivener_error::{ScrivenerResult, ConfigError};
//!
//! fn load_key() -> ScrivenerResult<String> {
//!     Err(ConfigError::new("GROQ_API_KEY not set"))?
//! }
//!
//! match load_key() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod export;
mod models;
mod server;
mod workflow;

pub use config::ConfigError;
pub use error::{ScrivenerError, ScrivenerErrorKind, ScrivenerResult};
pub use export::{ExportError, ExportErrorKind};
pub use models::{GroqErrorKind, ModelsError, ModelsErrorKind, ModelsResult, OpenAICompatErrorKind};
pub use server::{ServerError, ServerErrorKind};
pub use workflow::{WorkflowError, WorkflowErrorKind};
