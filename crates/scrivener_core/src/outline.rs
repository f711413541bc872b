//! Outline produced by the first workflow step.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One titled unit of the outline.
///
/// # Examples
///
/// ```
/// use scrivener_core::Section;
///
/// let section = Section::new("Introduction", "Why async matters in Rust.");
/// assert_eq!(section.title(), "Introduction");
/// assert_eq!(section.planned_words(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct Section {
    /// Section heading
    title: String,
    /// What the section should cover
    description: String,
}

impl Section {
    /// Create a section.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Number of whitespace-separated words in the description.
    pub fn planned_words(&self) -> usize {
        self.description.split_whitespace().count()
    }
}

/// Ordered list of sections, introduction first.
///
/// Order comes from the model; nothing here enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
pub struct Outline {
    /// Sections in reading order
    #[serde(default)]
    sections: Vec<Section>,
}

impl Outline {
    /// Create an outline from sections.
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the outline has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// JSON Schema sent with the structured-output request.
    pub fn json_schema() -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "sections": {
                    "type": "array",
                    "description": "Every section of the blog, in reading order",
                    "items": {
                        "type": "object",
                        "properties": {
                            "title": {
                                "type": "string",
                                "description": "Section title"
                            },
                            "description": {
                                "type": "string",
                                "description": "What will be written in this section"
                            }
                        },
                        "required": ["title", "description"],
                        "additionalProperties": false
                    }
                }
            },
            "required": ["sections"],
            "additionalProperties": false
        })
    }
}

impl From<Vec<Section>> for Outline {
    fn from(sections: Vec<Section>) -> Self {
        Self::new(sections)
    }
}
