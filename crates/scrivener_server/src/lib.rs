//! Web UI for Scrivener.
//!
//! A single form takes a topic, runs the workflow while the request waits,
//! and renders the outline, draft and final text with Markdown and PDF
//! download links. Finished reports live in memory until the process exits.
//!
//! # Routes
//!
//! | Method | Path                      | Response                         |
//! |--------|---------------------------|----------------------------------|
//! | GET    | `/`                       | Topic form                       |
//! | POST   | `/generate`               | Report page (form field `topic`) |
//! | GET    | `/reports/:id`            | Report page                      |
//! | GET    | `/reports/:id/markdown`   | Final text as `text/markdown`    |
//! | GET    | `/reports/:id/pdf`        | Final text as `application/pdf`  |
//! | GET    | `/health`                 | `{"status":"ok"}`                |

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod pages;
mod state;

pub use api::{create_router, serve};
pub use pages::{escape_html, markdown_to_html};
pub use state::{AppState, DEFAULT_REPORT_CAPACITY, ReportStore};
