//! Artifacts of one workflow run.

use crate::{Outline, Topic};
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Headline numbers shown next to a finished report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct ReportStats {
    /// Sections in the outline
    sections: usize,
    /// Words in the final text
    words: usize,
}

/// Everything one run produced, from outline to final text.
///
/// Built once by the workflow and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct Report {
    /// What the report is about
    topic: Topic,
    /// Outline from the first step
    outline: Outline,
    /// One expanded block per section, in outline order
    blocks: Vec<String>,
    /// Blocks joined with the separator
    draft: String,
    /// Draft after the polish pass
    final_text: String,
    /// When the run finished
    created_at: DateTime<Utc>,
}

impl Report {
    /// Assemble a report, stamping it with the current time.
    pub fn new(
        topic: Topic,
        outline: Outline,
        blocks: Vec<String>,
        draft: String,
        final_text: String,
    ) -> Self {
        Self {
            topic,
            outline,
            blocks,
            draft,
            final_text,
            created_at: Utc::now(),
        }
    }

    /// Section count and final word count.
    pub fn stats(&self) -> ReportStats {
        ReportStats {
            sections: self.outline.len(),
            words: self.final_text.split_whitespace().count(),
        }
    }
}
