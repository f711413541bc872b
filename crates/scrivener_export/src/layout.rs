//! Page layout for PDF export.
//!
//! Text is split into paragraphs on blank lines, each source line is word
//! wrapped to a fixed character width, and lines are stacked top to bottom
//! on US Letter pages, starting a new page when the bottom margin is reached.

use derive_getters::Getters;

pub(crate) const PAGE_WIDTH: f32 = 612.0;
pub(crate) const PAGE_HEIGHT: f32 = 792.0;
const MARGIN: f32 = 72.0;

const TITLE_SIZE: f32 = 18.0;
const HEADING_SIZE: f32 = 13.0;
const BODY_SIZE: f32 = 11.0;
const LINE_SPACING: f32 = 1.35;
const PARAGRAPH_GAP: f32 = 8.0;

// Characters per line for Helvetica at each size across 468pt of text width.
const TITLE_WIDTH: usize = 48;
const HEADING_WIDTH: usize = 66;
const BODY_WIDTH: usize = 85;

/// Typeface of a placed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    /// Helvetica
    Regular,
    /// Helvetica-Bold, for the title and headings
    Bold,
}

/// One line of text at a fixed position.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct PlacedLine {
    /// Text, already wrapped
    text: String,
    /// Typeface
    font: Font,
    /// Point size
    size: f32,
    /// Left edge in points
    x: f32,
    /// Baseline in points from the bottom of the page
    y: f32,
    /// Index into [`paragraphs`]; `None` for the title
    paragraph: Option<usize>,
}

/// Lines placed on one page.
#[derive(Debug, Clone, PartialEq, Default, Getters)]
pub struct PageLayout {
    /// Lines in reading order
    lines: Vec<PlacedLine>,
}

/// Split text into paragraphs.
///
/// Blocks are separated by one or more lines containing only whitespace.
/// Each block is trimmed and empty blocks are dropped; order is kept.
///
/// # Examples
///
/// ```
/// use scrivener_export::paragraphs;
///
/// let text = "First line\nstill first\n\n  \n\nSecond\n\n";
/// assert_eq!(paragraphs(text), vec!["First line\nstill first", "Second"]);
/// assert!(paragraphs(" \n\n ").is_empty());
/// ```
pub fn paragraphs(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            push_block(&mut blocks, &mut current);
        } else {
            current.push(line);
        }
    }
    push_block(&mut blocks, &mut current);

    blocks
}

fn push_block(blocks: &mut Vec<String>, current: &mut Vec<&str>) {
    let block = current.join("\n");
    let block = block.trim();
    if !block.is_empty() {
        blocks.push(block.to_string());
    }
    current.clear();
}

/// Strip a Markdown ATX heading marker (`#` to `######` then a space).
fn heading_text(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    let hashes = trimmed.chars().take_while(|c| *c == '#').count();
    if !(1..=6).contains(&hashes) {
        return None;
    }
    let rest = &trimmed[hashes..];
    if rest.is_empty() {
        return Some("");
    }
    rest.strip_prefix(char::is_whitespace)
        .map(|text| text.trim().trim_end_matches('#').trim_end())
}

/// Greedy word wrap at `width` characters; overlong words are split.
pub(crate) fn wrap(line: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in line.split_whitespace() {
        let mut word = word;
        loop {
            let word_len = word.chars().count();
            let needed = if current_len == 0 { word_len } else { current_len + 1 + word_len };

            if needed <= width {
                if current_len > 0 {
                    current.push(' ');
                }
                current.push_str(word);
                current_len = needed;
                break;
            }

            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
                continue;
            }

            // Word alone is wider than a line.
            let split = word
                .char_indices()
                .nth(width)
                .map(|(i, _)| i)
                .unwrap_or(word.len());
            lines.push(word[..split].to_string());
            word = &word[split..];
            if word.is_empty() {
                break;
            }
        }
    }

    if current_len > 0 {
        lines.push(current);
    }
    lines
}

struct Cursor {
    pages: Vec<PageLayout>,
    y: f32,
}

impl Cursor {
    fn new() -> Self {
        Self {
            pages: vec![PageLayout::default()],
            y: PAGE_HEIGHT - MARGIN,
        }
    }

    fn at_page_top(&self) -> bool {
        self.y >= PAGE_HEIGHT - MARGIN
    }

    fn gap(&mut self, points: f32) {
        if !self.at_page_top() {
            self.y -= points;
        }
    }

    fn place(&mut self, text: String, font: Font, size: f32, paragraph: Option<usize>) {
        let leading = size * LINE_SPACING;
        if self.y - leading < MARGIN {
            self.pages.push(PageLayout::default());
            self.y = PAGE_HEIGHT - MARGIN;
        }
        self.y -= leading;

        if let Some(page) = self.pages.last_mut() {
            page.lines.push(PlacedLine {
                text,
                font,
                size,
                x: MARGIN,
                y: self.y,
                paragraph,
            });
        }
    }
}

/// Lay out a title and body text on pages.
///
/// Every paragraph from [`paragraphs`] yields at least one line, tagged with
/// its index. A leading heading line is stripped of its `#` markers and set
/// in bold; every other character of the text is kept.
///
/// # Examples
///
/// ```
/// use scrivener_export::{Font, layout};
///
/// let pages = layout("Title", "## Intro\nHello there.\n\nBye.");
/// let lines = pages[0].lines();
///
/// assert_eq!(lines[0].text(), "Title");
/// assert_eq!(lines[1].text(), "Intro");
/// assert_eq!(*lines[1].font(), Font::Bold);
/// assert_eq!(*lines[2].paragraph(), Some(0));
/// assert_eq!(*lines[3].paragraph(), Some(1));
/// ```
pub fn layout(title: &str, text: &str) -> Vec<PageLayout> {
    let mut cursor = Cursor::new();

    let title = title.trim();
    if !title.is_empty() {
        for line in wrap(title, TITLE_WIDTH) {
            cursor.place(line, Font::Bold, TITLE_SIZE, None);
        }
        cursor.gap(PARAGRAPH_GAP * 2.0);
    }

    for (index, block) in paragraphs(text).iter().enumerate() {
        cursor.gap(PARAGRAPH_GAP);
        let mut placed = false;

        for (n, source_line) in block.lines().enumerate() {
            let heading = if n == 0 { heading_text(source_line) } else { None };
            let (text, font, size, width) = match heading {
                Some(text) => (text, Font::Bold, HEADING_SIZE, HEADING_WIDTH),
                None => (source_line, Font::Regular, BODY_SIZE, BODY_WIDTH),
            };
            for line in wrap(text, width) {
                cursor.place(line, font, size, Some(index));
                placed = true;
            }
        }

        // A bare "#" still occupies a line so paragraph count is preserved.
        if !placed {
            cursor.place(String::new(), Font::Bold, HEADING_SIZE, Some(index));
        }
    }

    cursor.pages
}
