//! Scripted driver standing in for the model.

use async_trait::async_trait;
use scrivener_core::{GenerateRequest, GenerateResponse};
use scrivener_error::{GroqErrorKind, ModelsError, ModelsErrorKind, ScrivenerResult};
use scrivener_interface::ScrivenerDriver;
use scrivener_workflow::{Prompts, Stage, WorkflowObserver};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Which workflow step a request belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Outline,
    Expand,
    Polish,
}

/// Driver that answers each step from a script.
///
/// Expansions reply `"## {title}\n\nProse about {title}."`; the polish pass
/// replies `"POLISHED\n\n{draft}"`.
pub struct MockDriver {
    outline_reply: String,
    delays: HashMap<String, Duration>,
    failing_section: Option<String>,
    empty_polish: bool,
    json_schema: bool,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    requests: Mutex<Vec<(Step, GenerateRequest)>>,
}

impl MockDriver {
    /// Driver whose outline step replies with `outline_reply` verbatim.
    pub fn with_outline(outline_reply: impl Into<String>) -> Self {
        Self {
            outline_reply: outline_reply.into(),
            delays: HashMap::new(),
            failing_section: None,
            empty_polish: false,
            json_schema: true,
            calls: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Driver whose outline lists `titles`, each with a short description.
    pub fn with_sections(titles: &[&str]) -> Self {
        let sections = titles
            .iter()
            .map(|t| serde_json::json!({"title": t, "description": format!("All about {}.", t)}))
            .collect::<Vec<_>>();
        Self::with_outline(serde_json::json!({ "sections": sections }).to_string())
    }

    /// Delay the expansion of `title`.
    pub fn delay(mut self, title: &str, millis: u64) -> Self {
        self.delays
            .insert(title.to_string(), Duration::from_millis(millis));
        self
    }

    /// Delay every expansion.
    pub fn delay_all(mut self, titles: &[&str], millis: u64) -> Self {
        for title in titles {
            self = self.delay(title, millis);
        }
        self
    }

    /// Fail the expansion of `title` with a rate limit error.
    pub fn fail_on(mut self, title: &str) -> Self {
        self.failing_section = Some(title.to_string());
        self
    }

    /// Reply with whitespace to the polish pass.
    pub fn empty_polish(mut self) -> Self {
        self.empty_polish = true;
        self
    }

    /// Report whether JSON schema output is supported.
    pub fn json_schema(mut self, supported: bool) -> Self {
        self.json_schema = supported;
        self
    }

    /// Total calls to `generate`.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Most expansions observed in flight at once.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    /// Requests received for `step`, in arrival order.
    pub fn requests_for(&self, step: Step) -> Vec<GenerateRequest> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(s, _)| *s == step)
            .map(|(_, r)| r.clone())
            .collect()
    }

    fn step_of(req: &GenerateRequest) -> Step {
        let prompts = Prompts::default();
        let system = req.messages()[0].content();
        if system == prompts.outline_system() {
            Step::Outline
        } else if system == prompts.expand_system() {
            Step::Expand
        } else {
            Step::Polish
        }
    }

    fn user_text(req: &GenerateRequest) -> &str {
        req.messages()[1].content()
    }

    fn title_of(req: &GenerateRequest) -> String {
        let user = Self::user_text(req);
        let after = user
            .split_once("subtopic : ")
            .map(|(_, rest)| rest)
            .unwrap_or(user);
        after
            .split_once(" and description is")
            .map(|(title, _)| title)
            .unwrap_or(after)
            .to_string()
    }

    async fn expand(&self, req: &GenerateRequest) -> ScrivenerResult<String> {
        let title = Self::title_of(req);

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if let Some(delay) = self.delays.get(&title) {
            tokio::time::sleep(*delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.failing_section.as_deref() == Some(title.as_str()) {
            return Err(ModelsError::new(ModelsErrorKind::Groq(GroqErrorKind::RateLimit)).into());
        }
        Ok(format!("## {}\n\nProse about {}.", title, title))
    }
}

#[async_trait]
impl ScrivenerDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> ScrivenerResult<GenerateResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let step = Self::step_of(req);
        self.requests.lock().unwrap().push((step, req.clone()));

        let text = match step {
            Step::Outline => self.outline_reply.clone(),
            Step::Expand => self.expand(req).await?,
            Step::Polish if self.empty_polish => "  \n".to_string(),
            Step::Polish => {
                let draft = Self::user_text(req).trim_start_matches("Here is the full blog ");
                format!("POLISHED\n\n{}", draft)
            }
        };
        Ok(GenerateResponse::from_text(text))
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }

    fn supports_json_schema(&self) -> bool {
        self.json_schema
    }
}

/// Observer that records every event.
#[derive(Default)]
pub struct RecordingObserver {
    pub stages: Mutex<Vec<Stage>>,
    pub expanded: Mutex<Vec<usize>>,
}

impl WorkflowObserver for RecordingObserver {
    fn on_stage(&self, stage: Stage) {
        self.stages.lock().unwrap().push(stage);
    }

    fn on_section_expanded(&self, index: usize, _title: &str) {
        self.expanded.lock().unwrap().push(index);
    }
}
