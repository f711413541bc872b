//! Conversion between Scrivener and chat completions types.

use super::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use scrivener_core::{GenerateRequest, GenerateResponse, Output, ResponseFormat, Role};
use scrivener_error::OpenAICompatErrorKind;
use serde_json::json;

/// Build the wire request, falling back to `default_model` when the request
/// does not name one.
pub(crate) fn to_chat_request(
    req: &GenerateRequest,
    default_model: &str,
) -> Result<ChatCompletionRequest, OpenAICompatErrorKind> {
    let messages = req
        .messages()
        .iter()
        .map(|m| ChatMessage::new(role_name(*m.role()), m.content().clone()))
        .collect::<Vec<_>>();

    if messages.is_empty() {
        return Err(OpenAICompatErrorKind::InvalidRequest(
            "Request must contain at least one message".into(),
        ));
    }

    let model = req
        .model()
        .clone()
        .unwrap_or_else(|| default_model.to_string());

    ChatCompletionRequest::builder()
        .model(model)
        .messages(messages)
        .max_tokens(*req.max_tokens())
        .temperature(*req.temperature())
        .response_format(response_format(req.response_format()))
        .build()
        .map_err(|e| OpenAICompatErrorKind::InvalidRequest(format!("Builder error: {}", e)))
}

fn role_name(role: Role) -> &'static str {
    match role {
        Role::System => "system",
        Role::User => "user",
        Role::Assistant => "assistant",
    }
}

fn response_format(format: &ResponseFormat) -> Option<serde_json::Value> {
    match format {
        ResponseFormat::Text => None,
        ResponseFormat::JsonObject => Some(json!({ "type": "json_object" })),
        ResponseFormat::JsonSchema { name, schema } => Some(json!({
            "type": "json_schema",
            "json_schema": {
                "name": name,
                "schema": schema,
            }
        })),
    }
}

/// Take the first choice's text.
pub(crate) fn from_chat_response(
    response: &ChatCompletionResponse,
) -> Result<GenerateResponse, OpenAICompatErrorKind> {
    let choice = response.choices().first().ok_or_else(|| {
        OpenAICompatErrorKind::ResponseParsing("No choices in response".into())
    })?;

    let text = choice.message().content().clone().unwrap_or_default();
    Ok(GenerateResponse::from_text(text))
}

/// Map a non-success status to an error kind.
pub(crate) fn classify_status(status: u16, body: String, model: &str) -> OpenAICompatErrorKind {
    match status {
        400 => OpenAICompatErrorKind::InvalidRequest(body),
        401 | 403 => OpenAICompatErrorKind::Authentication(body),
        404 => OpenAICompatErrorKind::ModelNotFound(model.to_string()),
        429 => OpenAICompatErrorKind::RateLimit,
        _ => OpenAICompatErrorKind::Api {
            status,
            message: body,
        },
    }
}
