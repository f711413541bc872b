//! Trait definitions for Scrivener.
//!
//! This crate defines the seam between the workflow and the LLM backends:
//! anything implementing [`ScrivenerDriver`] can write a report.

mod traits;

pub use traits::ScrivenerDriver;
