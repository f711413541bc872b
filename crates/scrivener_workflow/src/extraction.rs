//! Pull JSON out of model replies.
//!
//! Even in JSON mode, models sometimes wrap the payload in a Markdown fence or
//! add a sentence before it.

use scrivener_core::{Outline, Section};
use scrivener_error::{WorkflowError, WorkflowErrorKind};

/// Extract the JSON payload from a reply.
///
/// Tries, in order: a fenced code block (```` ```json ```` or bare
/// ```` ``` ````), then the first balanced `{...}` or `[...]` value.
///
/// # Errors
///
/// Returns `WorkflowErrorKind::MalformedOutline` when the reply contains
/// nothing that looks like JSON.
///
/// # Examples
///
/// ```
/// use scrivener_workflow::extract_json;
///
/// let reply = "Sure! Here it is:\n```json\n{\"sections\": []}\n```";
/// assert_eq!(extract_json(reply).unwrap(), "{\"sections\": []}");
///
/// let reply = "The outline is {\"sections\": []} as requested.";
/// assert_eq!(extract_json(reply).unwrap(), "{\"sections\": []}");
/// ```
#[track_caller]
pub fn extract_json(reply: &str) -> Result<&str, WorkflowError> {
    if let Some(fenced) = fenced_block(reply) {
        if let Some(value) = balanced_value(fenced) {
            return Ok(value);
        }
    }

    if let Some(value) = balanced_value(reply) {
        return Ok(value);
    }

    tracing::error!(reply_length = reply.len(), "No JSON found in model reply");
    Err(WorkflowError::new(WorkflowErrorKind::MalformedOutline(
        format!("no JSON found in reply ({} bytes)", reply.len()),
    )))
}

/// Parse an outline reply.
///
/// Accepts `{"sections": [...]}` or a bare array of sections. A missing
/// `sections` key yields an empty outline.
///
/// # Errors
///
/// Returns `WorkflowErrorKind::MalformedOutline` when no JSON is found or it
/// does not have the outline shape.
#[track_caller]
pub fn parse_outline(reply: &str) -> Result<Outline, WorkflowError> {
    let json = extract_json(reply)?;

    let parsed = if json.starts_with('[') {
        serde_json::from_str::<Vec<Section>>(json).map(Outline::from)
    } else {
        serde_json::from_str::<Outline>(json)
    };

    parsed.map_err(|e| {
        let preview = json.chars().take(100).collect::<String>();
        tracing::error!(error = %e, json_preview = %preview, "Outline JSON did not parse");
        WorkflowError::new(WorkflowErrorKind::MalformedOutline(e.to_string()))
    })
}

/// Body of the first fenced code block; an unclosed fence runs to the end.
fn fenced_block(reply: &str) -> Option<&str> {
    let start = reply.find("```")?;
    let after_fence = &reply[start + 3..];
    // Skip the info string ("json", "JSON", ...).
    let body_start = after_fence.find('\n').map(|n| n + 1).unwrap_or(0);
    let body = &after_fence[body_start..];
    let body = match body.find("```") {
        Some(end) => &body[..end],
        None => body,
    };
    Some(body.trim())
}

/// First balanced object or array, skipping brackets inside strings.
fn balanced_value(text: &str) -> Option<&str> {
    let start = text.find(['{', '['])?;
    let mut stack = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => stack.push('}'),
            '[' => stack.push(']'),
            '}' | ']' => {
                if stack.pop() != Some(ch) {
                    return None;
                }
                if stack.is_empty() {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn braces_inside_strings_are_ignored() {
        let reply = r#"{"title": "Using } and { in format!", "n": [1]}"#;
        assert_eq!(balanced_value(reply), Some(reply));
    }

    #[test]
    fn escaped_quotes_do_not_end_strings() {
        let reply = r#"{"title": "say \"}\" loudly"} trailing"#;
        assert_eq!(
            balanced_value(reply),
            Some(r#"{"title": "say \"}\" loudly"}"#)
        );
    }

    #[test]
    fn unbalanced_input_has_no_value() {
        assert_eq!(balanced_value("{\"sections\": ["), None);
        assert_eq!(balanced_value("{ ]"), None);
    }

    #[test]
    fn unclosed_fence_runs_to_end() {
        assert_eq!(fenced_block("```json\n{\"a\": 1}"), Some("{\"a\": 1}"));
    }
}
