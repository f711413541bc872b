//! Markdown and PDF export for Scrivener reports.
//!
//! The final text is offered for download as Markdown, verbatim, or as a PDF
//! with one paragraph per blank-line-delimited block.
//!
//! # Example
//!
//! ```
//! use scrivener_export::{markdown_file_name, paragraphs, render_pdf};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let text = "# Intro\n\nFirst paragraph.\n\n\nSecond paragraph.";
//! assert_eq!(paragraphs(text).len(), 3);
//! assert_eq!(markdown_file_name("Rust Async Tips"), "rust_async_tips_blog.md");
//!
//! let pdf = render_pdf("Rust Async Tips", text)?;
//! assert!(pdf.starts_with(b"%PDF-"));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod layout;
mod markdown;
mod pdf;

pub use layout::{Font, PageLayout, PlacedLine, layout, paragraphs};
pub use markdown::{markdown_file_name, pdf_file_name, write_markdown};
pub use pdf::{render_pdf, write_pdf};
