//! PDF rendering with lopdf.

use crate::layout::{Font, PAGE_HEIGHT, PAGE_WIDTH, PageLayout, layout};
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use scrivener_error::{ExportError, ExportErrorKind, ScrivenerResult};
use std::path::Path;
use tracing::{debug, instrument};

/// Encode text for a WinAnsi Type1 font.
///
/// Typographic punctuation maps to its WinAnsi code point; anything outside
/// the encoding becomes `?`.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\t' => b' ',
            ' '..='~' => c as u8,
            '\u{2026}' => 0x85,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '\u{00A0}'..='\u{00FF}' => c as u32 as u8,
            _ => b'?',
        })
        .collect()
}

fn font_resource(font: Font) -> &'static str {
    match font {
        Font::Regular => "F1",
        Font::Bold => "F2",
    }
}

fn page_content(page: &PageLayout) -> Content {
    let mut operations = Vec::with_capacity(page.lines().len() * 5);
    for line in page.lines() {
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new(
            "Tf",
            vec![font_resource(*line.font()).into(), (*line.size()).into()],
        ));
        operations.push(Operation::new(
            "Td",
            vec![(*line.x()).into(), (*line.y()).into()],
        ));
        operations.push(Operation::new(
            "Tj",
            vec![Object::string_literal(win_ansi(line.text()))],
        ));
        operations.push(Operation::new("ET", vec![]));
    }
    Content { operations }
}

fn pdf_error(context: &str, e: impl std::fmt::Display) -> ExportError {
    ExportError::new(ExportErrorKind::Pdf(format!("{}: {}", context, e)))
}

/// Render a titled document to PDF bytes.
///
/// Layout follows [`layout`](crate::layout()): one paragraph per
/// blank-line-delimited block, in order.
///
/// # Errors
///
/// Returns `ExportErrorKind::Pdf` if a content stream cannot be encoded or
/// the document cannot be serialized.
#[instrument(skip(text), fields(title = %title, chars = text.len()))]
pub fn render_pdf(title: &str, text: &str) -> ScrivenerResult<Vec<u8>> {
    let pages = layout(title, text);
    debug!(pages = pages.len(), "Laid out document");

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => regular_id,
            "F2" => bold_id,
        },
    });

    let mut kids = Vec::with_capacity(pages.len());
    for page in &pages {
        let encoded = page_content(page)
            .encode()
            .map_err(|e| pdf_error("Failed to encode page content", e))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(Object::from(page_id));
    }

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                PAGE_WIDTH.into(),
                PAGE_HEIGHT.into(),
            ],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal(win_ansi(title)),
        "Producer" => Object::string_literal("Scrivener"),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);
    doc.compress();

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| pdf_error("Failed to serialize PDF", e))?;

    debug!(bytes = bytes.len(), "Rendered PDF");
    Ok(bytes)
}

/// Render and write a PDF to `path`.
///
/// # Errors
///
/// Returns `ExportErrorKind::Pdf` if rendering fails and
/// `ExportErrorKind::Io` if the file cannot be written.
#[instrument(skip(text), fields(path = %path.display(), title = %title))]
pub fn write_pdf(path: &Path, title: &str, text: &str) -> ScrivenerResult<()> {
    let bytes = render_pdf(title, text)?;
    std::fs::write(path, &bytes).map_err(|e| {
        ExportError::new(ExportErrorKind::Io(format!(
            "Failed to write {}: {}",
            path.display(),
            e
        )))
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_passes_through() {
        assert_eq!(win_ansi("fn main() {}"), b"fn main() {}".to_vec());
    }

    #[test]
    fn typographic_punctuation_is_mapped() {
        assert_eq!(
            win_ansi("\u{201C}a\u{201D}\u{2014}b\u{2026}"),
            vec![0x93, b'a', 0x94, 0x97, b'b', 0x85]
        );
        assert_eq!(win_ansi("caf\u{e9}"), vec![b'c', b'a', b'f', 0xE9]);
    }

    #[test]
    fn unencodable_characters_become_question_marks() {
        assert_eq!(win_ansi("\u{1F980} \u{4E2D}"), b"? ?".to_vec());
    }
}
