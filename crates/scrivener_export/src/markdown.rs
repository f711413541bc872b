//! Download file names and Markdown output.

use scrivener_error::{ExportError, ExportErrorKind, ScrivenerResult};
use std::path::Path;

/// Lowercased topic safe to use as a single path component.
///
/// Anything other than alphanumerics, `-` and `_` becomes `_`.
fn stem(topic: &str) -> String {
    topic
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// File name offered for the Markdown download.
///
/// # Examples
///
/// ```
/// use scrivener_export::markdown_file_name;
///
/// assert_eq!(markdown_file_name("Rust Async Tips"), "rust_async_tips_blog.md");
/// ```
pub fn markdown_file_name(topic: &str) -> String {
    format!("{}_blog.md", stem(topic))
}

/// File name offered for the PDF download.
///
/// # Examples
///
/// ```
/// use scrivener_export::pdf_file_name;
///
/// assert_eq!(pdf_file_name("Rust Async Tips"), "rust_async_tips_blog.pdf");
/// ```
pub fn pdf_file_name(topic: &str) -> String {
    format!("{}_blog.pdf", stem(topic))
}

/// Write `text` to `path` unchanged.
///
/// # Errors
///
/// Returns `ExportErrorKind::Io` if the file cannot be written.
#[tracing::instrument(skip(text), fields(path = %path.display(), bytes = text.len()))]
pub fn write_markdown(path: &Path, text: &str) -> ScrivenerResult<()> {
    std::fs::write(path, text).map_err(|e| {
        ExportError::new(ExportErrorKind::Io(format!(
            "Failed to write {}: {}",
            path.display(),
            e
        )))
    })?;
    Ok(())
}
