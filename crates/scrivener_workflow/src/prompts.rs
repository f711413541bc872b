//! Prompt templates for the four workflow steps.

use derive_getters::Getters;
use scrivener_error::{WorkflowError, WorkflowErrorKind};
use serde::{Deserialize, Serialize};

const OUTLINE_SYSTEM: &str = "You are an expert technical blog writer. \
Your task is to produce a clean, well-structured outline for a blog post on the topic the user gives you.\n\n\
Respond with a single JSON object of the form \
{\"sections\": [{\"title\": string, \"description\": string}]}. \
Each entry in \"sections\" is one section of the blog:\n\
1. \"title\" is the section heading.\n\
2. \"description\" explains what will be written in that section.\n\n\
Guidelines:\n\
- Begin with an introductory section.\n\
- Follow with 4 to 8 logical sections covering the full topic.\n\
- Keep descriptions short but meaningful (2 to 4 sentences).\n\
- Move from basic to advanced material.\n\
- Return only the JSON object. No prose, no Markdown.";

const OUTLINE_USER: &str = "Here is the topic name of my blog {topic}";

const EXPAND_SYSTEM: &str = "You are a professional technical writer. Write in Markdown. \
You will receive one section of a blog: its title and a description of what it should cover.\n\n\
- Use the title as the section heading.\n\
- Let the description guide the depth, theme and direction of the writing.\n\
- Write 150 to 300 words of clear, expert-level English.\n\
- Do NOT rewrite the outline.\n\
- Do NOT add new sections.\n\
- Do NOT return JSON.\n\
- Return only the written section, formatted with its heading.";

const EXPAND_USER: &str = "here is the name of the subtopic : {title} and description is {description}";

const POLISH_SYSTEM: &str = "You are an expert editor and technical content specialist. \
Refine the complete blog the user provides for final publication.\n\n\
- Improve clarity, flow and readability without changing the meaning.\n\
- Fix grammar, punctuation and sentence structure.\n\
- Smooth the transitions between ideas.\n\
- Keep the tone polished, professional and engaging.\n\
- Keep every technical detail, fact and heading exactly as provided.\n\
- Do NOT add new sections or new concepts.\n\
- Do NOT remove content unless it is repetitive or unclear.\n\
- Return ONLY the improved blog text. No explanations or commentary.";

const POLISH_USER: &str = "Here is the full blog {draft}";

/// System prompts and user templates for each model call.
///
/// User templates contain placeholders filled in one left-to-right pass:
/// `{topic}` for the outline, `{title}` and `{description}` for expansion,
/// `{draft}` for the polish pass.
///
/// # Examples
///
/// ```
/// use scrivener_workflow::Prompts;
///
/// let prompts = Prompts::default();
/// let user = prompts.outline_prompt("Rust Async Tips").unwrap();
/// assert_eq!(user, "Here is the topic name of my blog Rust Async Tips");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct Prompts {
    /// System prompt for the outline step
    outline_system: String,
    /// User template for the outline step
    outline_user: String,
    /// System prompt for each section expansion
    expand_system: String,
    /// User template for each section expansion
    expand_user: String,
    /// System prompt for the polish pass
    polish_system: String,
    /// User template for the polish pass
    polish_user: String,
}

impl Default for Prompts {
    fn default() -> Self {
        Self {
            outline_system: OUTLINE_SYSTEM.to_string(),
            outline_user: OUTLINE_USER.to_string(),
            expand_system: EXPAND_SYSTEM.to_string(),
            expand_user: EXPAND_USER.to_string(),
            polish_system: POLISH_SYSTEM.to_string(),
            polish_user: POLISH_USER.to_string(),
        }
    }
}

impl Prompts {
    /// Fill the outline template.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowErrorKind::Template` if the template lacks `{topic}`.
    #[track_caller]
    pub fn outline_prompt(&self, topic: &str) -> Result<String, WorkflowError> {
        fill("outline_user", &self.outline_user, &[("topic", topic)])
    }

    /// Fill the expansion template.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowErrorKind::Template` if `{title}` or `{description}`
    /// is missing.
    #[track_caller]
    pub fn expand_prompt(&self, title: &str, description: &str) -> Result<String, WorkflowError> {
        fill(
            "expand_user",
            &self.expand_user,
            &[("title", title), ("description", description)],
        )
    }

    /// Fill the polish template.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowErrorKind::Template` if the template lacks `{draft}`.
    #[track_caller]
    pub fn polish_prompt(&self, draft: &str) -> Result<String, WorkflowError> {
        fill("polish_user", &self.polish_user, &[("draft", draft)])
    }

    /// Check every template for its placeholders without filling them.
    ///
    /// # Errors
    ///
    /// Returns the first missing placeholder as `WorkflowErrorKind::Template`.
    #[track_caller]
    pub fn validate(&self) -> Result<(), WorkflowError> {
        self.outline_prompt("")?;
        self.expand_prompt("", "")?;
        self.polish_prompt("")?;
        Ok(())
    }
}

#[track_caller]
fn fill(name: &str, template: &str, values: &[(&str, &str)]) -> Result<String, WorkflowError> {
    let placeholders = values
        .iter()
        .map(|(key, value)| (format!("{{{}}}", key), *value))
        .collect::<Vec<_>>();

    if let Some((missing, _)) = placeholders.iter().find(|(p, _)| !template.contains(p)) {
        return Err(WorkflowError::new(WorkflowErrorKind::Template(format!(
            "{} is missing the {} placeholder",
            name, missing
        ))));
    }

    // Single pass so substituted values are never expanded again.
    let mut filled = String::with_capacity(template.len());
    let mut rest = template;
    while !rest.is_empty() {
        match placeholders.iter().find(|(p, _)| rest.starts_with(p.as_str())) {
            Some((placeholder, value)) => {
                filled.push_str(value);
                rest = &rest[placeholder.len()..];
            }
            None => {
                let mut chars = rest.chars();
                if let Some(c) = chars.next() {
                    filled.push(c);
                }
                rest = chars.as_str();
            }
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_prompts_are_valid() {
        Prompts::default().validate().unwrap();
    }

    #[test]
    fn outline_system_asks_for_json() {
        assert!(Prompts::default().outline_system().contains("JSON"));
    }

    #[test]
    fn expand_prompt_fills_both_placeholders() {
        let user = Prompts::default()
            .expand_prompt("Futures", "What a future is.")
            .unwrap();
        assert_eq!(
            user,
            "here is the name of the subtopic : Futures and description is What a future is."
        );
    }

    #[test]
    fn values_are_not_re_expanded() {
        let user = Prompts::default().polish_prompt("uses {topic} literally").unwrap();
        assert_eq!(user, "Here is the full blog uses {topic} literally");
    }

    #[test]
    fn title_containing_a_placeholder_is_kept_verbatim() {
        let user = Prompts::default()
            .expand_prompt("The {description} field", "Plain text.")
            .unwrap();
        assert!(user.contains("The {description} field"));
        assert!(user.ends_with("Plain text."));
    }

    #[test]
    fn missing_placeholder_is_a_template_error() {
        let prompts = Prompts {
            polish_user: "Polish this".to_string(),
            ..Prompts::default()
        };
        let err = prompts.validate().unwrap_err();
        assert!(matches!(err.kind, WorkflowErrorKind::Template(_)));
    }
}
