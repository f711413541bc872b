//! The outline, expand, join and polish pipeline.

use crate::{NoopObserver, Stage, WorkflowConfig, WorkflowObserver, parse_outline};
use futures::{StreamExt, TryStreamExt, stream};
use scrivener_core::{GenerateRequest, Message, Outline, Report, ResponseFormat, Section, Topic};
use scrivener_error::{ScrivenerError, ScrivenerResult, WorkflowError, WorkflowErrorKind};
use scrivener_interface::ScrivenerDriver;
use tracing::{debug, info, instrument};

/// Concatenate expanded blocks in order, `separator` between each pair.
///
/// # Examples
///
/// ```
/// use scrivener_workflow::join;
///
/// let blocks = vec!["# Intro".to_string(), "# Body".to_string()];
/// assert_eq!(join(&blocks, "\n\n----\n\n"), "# Intro\n\n----\n\n# Body");
/// assert_eq!(join(&[], "\n\n----\n\n"), "");
/// ```
pub fn join(blocks: &[String], separator: &str) -> String {
    blocks.join(separator)
}

/// Writes reports by driving a model through the four steps.
///
/// # Examples
///
/// ```no_run
/// use scrivener_models::GroqDriver;
/// use scrivener_workflow::{ReportWriter, WorkflowConfig};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = WorkflowConfig::default();
/// let driver = GroqDriver::new(config.model().clone())?;
/// let writer = ReportWriter::new(driver, config);
///
/// let report = writer.run("Rust Async Tips").await?;
/// println!("{}", report.final_text());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReportWriter<D> {
    driver: D,
    config: WorkflowConfig,
}

impl<D: ScrivenerDriver> ReportWriter<D> {
    /// Create a writer over `driver`.
    pub fn new(driver: D, config: WorkflowConfig) -> Self {
        Self { driver, config }
    }

    /// The underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Settings used for every run.
    pub fn config(&self) -> &WorkflowConfig {
        &self.config
    }

    /// Write a complete report for `topic`.
    ///
    /// # Errors
    ///
    /// Fails with `WorkflowErrorKind::EmptyTopic` before any model call if
    /// the topic is blank, and with the first error of any step otherwise.
    pub async fn run(&self, topic: &str) -> ScrivenerResult<Report> {
        self.run_observed(topic, &NoopObserver).await
    }

    /// Like [`run`](Self::run), reporting progress to `observer`.
    ///
    /// # Errors
    ///
    /// See [`run`](Self::run).
    #[instrument(
        skip(self, topic, observer),
        fields(provider = self.driver.provider_name(), model = %self.driver.model_name())
    )]
    pub async fn run_observed(
        &self,
        topic: &str,
        observer: &dyn WorkflowObserver,
    ) -> ScrivenerResult<Report> {
        let topic = Topic::new(topic)?;
        info!(topic = %topic, "Writing report");

        observer.on_stage(Stage::Outline);
        let outline = self.outline(&topic).await?;

        observer.on_stage(Stage::Expand {
            total: outline.len(),
        });
        let blocks = self.expand_all(&outline, observer).await?;

        observer.on_stage(Stage::Join);
        let draft = join(&blocks, self.config.separator());

        observer.on_stage(Stage::Polish);
        let final_text = self.polish(&draft).await?;

        let report = Report::new(topic, outline, blocks, draft, final_text);
        observer.on_stage(Stage::Done);
        let stats = report.stats();
        info!(
            sections = stats.sections(),
            words = stats.words(),
            "Report finished"
        );
        Ok(report)
    }

    /// Ask the model for an outline of `topic`.
    ///
    /// Requests a JSON schema when the driver supports it and plain JSON
    /// mode otherwise. Zero sections is not an error.
    ///
    /// # Errors
    ///
    /// Model failures propagate; an unparseable reply is
    /// `WorkflowErrorKind::MalformedOutline`.
    #[instrument(skip(self, topic), fields(topic = %topic, stage = "outline"))]
    pub async fn outline(&self, topic: &Topic) -> ScrivenerResult<Outline> {
        let prompts = self.config.prompts();
        let format = if self.driver.supports_json_schema() {
            ResponseFormat::JsonSchema {
                name: "outline".to_string(),
                schema: Outline::json_schema(),
            }
        } else {
            ResponseFormat::JsonObject
        };

        let request = self.request(
            prompts.outline_system(),
            prompts.outline_prompt(topic.as_str())?,
            format,
        )?;
        let reply = self.call(&request, "outline").await?;
        let outline = parse_outline(&reply)?;

        debug!(sections = outline.len(), "Outline parsed");
        Ok(outline)
    }

    /// Write the prose for one section.
    ///
    /// # Errors
    ///
    /// Model failures and empty replies propagate.
    #[instrument(skip(self, section), fields(section = %section.title(), stage = "expand"))]
    pub async fn expand(&self, section: &Section) -> ScrivenerResult<String> {
        let prompts = self.config.prompts();
        let request = self.request(
            prompts.expand_system(),
            prompts.expand_prompt(section.title(), section.description())?,
            ResponseFormat::Text,
        )?;
        self.call(&request, "expand").await
    }

    /// Run the editorial pass over the joined draft.
    ///
    /// # Errors
    ///
    /// Model failures and empty replies propagate.
    #[instrument(skip(self, draft), fields(draft_len = draft.len(), stage = "polish"))]
    pub async fn polish(&self, draft: &str) -> ScrivenerResult<String> {
        let prompts = self.config.prompts();
        let request = self.request(
            prompts.polish_system(),
            prompts.polish_prompt(draft)?,
            ResponseFormat::Text,
        )?;
        self.call(&request, "polish").await
    }

    /// Expand every section with at most `max_concurrency` calls in flight.
    ///
    /// Blocks come back in outline order whatever order the calls finish in.
    /// The first failure aborts the rest.
    async fn expand_all(
        &self,
        outline: &Outline,
        observer: &dyn WorkflowObserver,
    ) -> ScrivenerResult<Vec<String>> {
        let limit = (*self.config.max_concurrency()).max(1);
        debug!(sections = outline.len(), limit, "Expanding sections");

        stream::iter(outline.sections().iter().cloned().enumerate())
            .map(|(index, section)| async move {
                let block = self.expand(&section).await?;
                observer.on_section_expanded(index, section.title());
                Ok::<_, ScrivenerError>(block)
            })
            .buffered(limit)
            .try_collect()
            .await
    }

    fn request(
        &self,
        system: &str,
        user: String,
        format: ResponseFormat,
    ) -> Result<GenerateRequest, WorkflowError> {
        GenerateRequest::builder()
            .messages(vec![Message::system(system), Message::user(user)])
            .temperature(*self.config.temperature())
            .max_tokens(*self.config.max_tokens())
            .response_format(format)
            .build()
            .map_err(|e| WorkflowError::new(WorkflowErrorKind::Builder(e.to_string())))
    }

    async fn call(&self, request: &GenerateRequest, step: &str) -> ScrivenerResult<String> {
        let text = self.driver.generate(request).await?.text();
        if text.trim().is_empty() {
            tracing::error!(step, "Model returned an empty reply");
            return Err(
                WorkflowError::new(WorkflowErrorKind::EmptyResponse(step.to_string())).into(),
            );
        }
        Ok(text)
    }
}
