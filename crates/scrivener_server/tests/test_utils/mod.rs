//! Test utilities for server tests.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use scrivener_core::{GenerateRequest, GenerateResponse, ResponseFormat};
use scrivener_error::{GroqErrorKind, ModelsError, ModelsErrorKind, ScrivenerResult};
use scrivener_interface::ScrivenerDriver;
use scrivener_server::{AppState, create_router};
use scrivener_workflow::WorkflowConfig;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tower::ServiceExt;

/// Driver that writes a two-section report, or fails every call.
pub struct ScriptedDriver {
    fail: bool,
    calls: AtomicUsize,
}

impl ScriptedDriver {
    pub fn working() -> Arc<Self> {
        Arc::new(Self {
            fail: false,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail: true,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ScrivenerDriver for ScriptedDriver {
    async fn generate(&self, req: &GenerateRequest) -> ScrivenerResult<GenerateResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ModelsError::new(ModelsErrorKind::Groq(GroqErrorKind::Authentication(
                "Invalid API Key".into(),
            )))
            .into());
        }

        let system = req.messages()[0].content();
        let user = req.messages()[1].content();
        let text = if *req.response_format() != ResponseFormat::Text {
            r#"{"sections": [
                {"title": "Introduction", "description": "Why async matters."},
                {"title": "Executors", "description": "How futures are polled to completion."}
            ]}"#
            .to_string()
        } else if system.contains("technical writer") {
            let title = user
                .split_once("subtopic : ")
                .and_then(|(_, rest)| rest.split_once(" and description"))
                .map(|(title, _)| title)
                .unwrap_or("Untitled");
            format!("## {}\n\nSome prose about {}.", title, title.to_lowercase())
        } else {
            format!("# Final\n\n{}", user.trim_start_matches("Here is the full blog "))
        };
        Ok(GenerateResponse::from_text(text))
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-model"
    }
}

pub fn app(driver: Arc<ScriptedDriver>) -> (Router, AppState) {
    let state = AppState::new(driver, WorkflowConfig::default(), true);
    (create_router(state.clone()), state)
}

pub async fn send(router: &Router, request: Request<Body>) -> Response<Body> {
    router.clone().oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Report id from the first download link in a report page.
pub fn report_id(page: &str) -> String {
    let start = page.find("/reports/").unwrap() + "/reports/".len();
    page[start..start + 36].to_string()
}
