//! GroqDriver against a local chat completions server.

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use scrivener_core::{GenerateRequest, Message, ResponseFormat};
use scrivener_error::{GroqErrorKind, ModelsErrorKind, ScrivenerError, ScrivenerErrorKind};
use scrivener_interface::ScrivenerDriver;
use scrivener_models::GroqDriver;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: Value,
    received: Arc<Mutex<Vec<(Option<String>, Value)>>>,
}

async fn chat_completions(
    State(state): State<MockState>,
    headers: axum::http::HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.received.lock().unwrap().push((auth, body));
    (state.status, Json(state.body.clone()))
}

/// Spawn a mock server and return its base URL and the request log.
async fn spawn_mock(
    status: StatusCode,
    body: Value,
) -> (String, Arc<Mutex<Vec<(Option<String>, Value)>>>) {
    let received = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        status,
        body,
        received: received.clone(),
    };
    let app = Router::new()
        .route("/v1/chat/completions", post(chat_completions))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/v1", addr), received)
}

fn completion(text: &str) -> Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "model": "openai/gpt-oss-120b",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": text},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 12, "completion_tokens": 4, "total_tokens": 16}
    })
}

fn groq_kind(err: &ScrivenerError) -> GroqErrorKind {
    match err.kind() {
        ScrivenerErrorKind::Models(e) => match &e.kind {
            ModelsErrorKind::Groq(kind) => kind.clone(),
            other => panic!("unexpected models kind: {other}"),
        },
        other => panic!("unexpected error kind: {other}"),
    }
}

fn user_request(text: &str) -> GenerateRequest {
    GenerateRequest::builder()
        .messages(vec![Message::system("be brief"), Message::user(text)])
        .temperature(Some(0.7))
        .build()
        .unwrap()
}

#[tokio::test]
async fn returns_first_choice_text() {
    let (base, received) = spawn_mock(StatusCode::OK, completion("Hello from Groq")).await;
    let driver = GroqDriver::with_api_key("test-key", "openai/gpt-oss-120b").with_base_url(&base);

    let response = driver.generate(&user_request("Hi")).await.unwrap();
    assert_eq!(response.text(), "Hello from Groq");

    let log = received.lock().unwrap();
    assert_eq!(log.len(), 1);
    let (auth, body) = &log[0];
    assert_eq!(auth.as_deref(), Some("Bearer test-key"));
    assert_eq!(body["model"], "openai/gpt-oss-120b");
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][1]["content"], "Hi");
    assert!(body.get("response_format").is_none());
}

#[tokio::test]
async fn sends_json_object_format() {
    let (base, received) = spawn_mock(StatusCode::OK, completion("{\"sections\": []}")).await;
    let driver = GroqDriver::with_api_key("k", "m").with_base_url(&base);

    let request = GenerateRequest::builder()
        .messages(vec![Message::user("Return JSON")])
        .response_format(ResponseFormat::JsonObject)
        .build()
        .unwrap();
    driver.generate(&request).await.unwrap();

    let log = received.lock().unwrap();
    assert_eq!(log[0].1["response_format"]["type"], "json_object");
}

#[tokio::test]
async fn rate_limit_is_not_retried() {
    let (base, received) = spawn_mock(
        StatusCode::TOO_MANY_REQUESTS,
        json!({"error": {"message": "slow down"}}),
    )
    .await;
    let driver = GroqDriver::with_api_key("k", "m").with_base_url(&base);

    let err = driver.generate(&user_request("Hi")).await.unwrap_err();
    assert_eq!(groq_kind(&err), GroqErrorKind::RateLimit);
    assert_eq!(received.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn unauthorized_maps_to_authentication() {
    let (base, _) = spawn_mock(
        StatusCode::UNAUTHORIZED,
        json!({"error": {"message": "Invalid API Key"}}),
    )
    .await;
    let driver = GroqDriver::with_api_key("bad", "m").with_base_url(&base);

    let err = driver.generate(&user_request("Hi")).await.unwrap_err();
    assert!(matches!(groq_kind(&err), GroqErrorKind::Authentication(_)));
}

#[tokio::test]
async fn unknown_model_maps_to_model_not_found() {
    let (base, _) = spawn_mock(StatusCode::NOT_FOUND, json!({"error": "no such model"})).await;
    let driver = GroqDriver::with_api_key("k", "missing-model").with_base_url(&base);

    let err = driver.generate(&user_request("Hi")).await.unwrap_err();
    assert_eq!(
        groq_kind(&err),
        GroqErrorKind::ModelNotFound("missing-model".into())
    );
}

#[tokio::test]
async fn server_error_maps_to_api() {
    let (base, _) = spawn_mock(StatusCode::INTERNAL_SERVER_ERROR, json!({"error": "boom"})).await;
    let driver = GroqDriver::with_api_key("k", "m").with_base_url(&base);

    let err = driver.generate(&user_request("Hi")).await.unwrap_err();
    match groq_kind(&err) {
        GroqErrorKind::Api(msg) => assert!(msg.contains("500")),
        other => panic!("expected Api, got {other}"),
    }
}

#[tokio::test]
async fn garbage_body_is_a_conversion_error() {
    let (base, _) = spawn_mock(StatusCode::OK, json!({"unexpected": true})).await;
    let driver = GroqDriver::with_api_key("k", "m").with_base_url(&base);

    let err = driver.generate(&user_request("Hi")).await.unwrap_err();
    assert!(matches!(
        groq_kind(&err),
        GroqErrorKind::ResponseConversion(_)
    ));
}

#[tokio::test]
async fn unreachable_endpoint_is_reported() {
    let driver = GroqDriver::with_api_key("k", "m").with_base_url("http://127.0.0.1:9");

    let err = driver.generate(&user_request("Hi")).await.unwrap_err();
    assert!(matches!(groq_kind(&err), GroqErrorKind::Api(_)));
}

#[test]
fn driver_metadata() {
    let driver = GroqDriver::with_api_key("k", GroqDriver::DEFAULT_MODEL);
    assert_eq!(driver.provider_name(), "groq");
    assert_eq!(driver.model_name(), "openai/gpt-oss-120b");
    assert!(driver.supports_json_schema());
    assert_eq!(driver.endpoint(), GroqDriver::ENDPOINT);

    let local = driver.with_base_url("http://localhost:1234/v1/");
    assert_eq!(local.endpoint(), "http://localhost:1234/v1/chat/completions");
}
