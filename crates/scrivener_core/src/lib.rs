//! Core data types for Scrivener.
//!
//! This crate provides the chat plumbing shared with every LLM driver
//! (roles, messages, requests and responses) and the report data model
//! produced by the workflow (topic, outline, report).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod message;
mod outline;
mod output;
mod report;
mod request;
mod role;
mod topic;

pub use message::{Message, MessageBuilder};
pub use outline::{Outline, Section};
pub use output::Output;
pub use report::{Report, ReportStats};
pub use request::{
    GenerateRequest, GenerateRequestBuilder, GenerateResponse, GenerateResponseBuilder,
    ResponseFormat,
};
pub use role::Role;
pub use topic::Topic;
