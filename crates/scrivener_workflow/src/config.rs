//! Layered configuration.
//!
//! Sources, lowest precedence first:
//! - bundled defaults (`scrivener.toml` compiled into the binary)
//! - `~/.config/scrivener/scrivener.toml`
//! - `./scrivener.toml`
//! - an explicit file passed to [`ScrivenerConfig::load_from`]
//! - `SCRIVENER_*` environment variables, `__` separating nested keys
//!   (`SCRIVENER_WORKFLOW__MAX_CONCURRENCY=4`)

use crate::Prompts;
use config::{Config, Environment, File, FileFormat};
use derive_builder::Builder;
use derive_getters::Getters;
use scrivener_error::{ConfigError, ScrivenerError, ScrivenerResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};

/// Separator placed between expanded sections in the draft.
pub const DEFAULT_SEPARATOR: &str = "\n\n----\n\n";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "openai/gpt-oss-120b";

/// Default bound on concurrent section expansions.
pub const DEFAULT_MAX_CONCURRENCY: usize = 8;

/// Settings for one workflow run.
///
/// # Examples
///
/// ```
/// use scrivener_workflow::WorkflowConfig;
///
/// let config = WorkflowConfig::builder()
///     .max_concurrency(2_usize)
///     .build()
///     .unwrap();
///
/// assert_eq!(*config.max_concurrency(), 2);
/// assert_eq!(config.separator(), "\n\n----\n\n");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into), default)]
#[serde(default)]
pub struct WorkflowConfig {
    /// Model used by the driver
    model: String,
    /// Sampling temperature sent with every call
    temperature: Option<f32>,
    /// Token cap sent with every call
    max_tokens: Option<u32>,
    /// Expansions allowed in flight at once
    max_concurrency: usize,
    /// Text placed between expanded sections
    separator: String,
    /// Prompt templates
    prompts: Prompts,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: None,
            max_tokens: None,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            separator: DEFAULT_SEPARATOR.to_string(),
            prompts: Prompts::default(),
        }
    }
}

impl WorkflowConfig {
    /// Create a new builder for `WorkflowConfig`.
    pub fn builder() -> WorkflowConfigBuilder {
        WorkflowConfigBuilder::default()
    }
}

/// Web UI settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct ServerSettings {
    /// Address the web UI listens on
    bind: String,
    /// Finished reports kept in memory before the oldest is dropped
    max_reports: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8501".to_string(),
            max_reports: 100,
        }
    }
}

impl ServerSettings {
    /// Settings listening on `bind`.
    pub fn new(bind: impl Into<String>) -> Self {
        Self {
            bind: bind.into(),
            ..Self::default()
        }
    }
}

/// Complete application configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct ScrivenerConfig {
    /// Workflow settings
    workflow: WorkflowConfig,
    /// Web UI settings
    server: ServerSettings,
}

impl ScrivenerConfig {
    /// Load configuration from the standard locations.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if a source cannot be read or the merged
    /// result does not deserialize.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use scrivener_workflow::ScrivenerConfig;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = ScrivenerConfig::load()?;
    /// println!("listening on {}", config.server().bind());
    /// # Ok(())
    /// # }
    /// ```
    pub fn load() -> ScrivenerResult<Self> {
        Self::load_from(None)
    }

    /// Load configuration, layering `path` above the standard files.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if `path` is missing, a source is malformed,
    /// or a prompt template lacks its placeholder.
    #[instrument]
    pub fn load_from(path: Option<&Path>) -> ScrivenerResult<Self> {
        debug!("Loading configuration");

        const DEFAULT_CONFIG: &str = include_str!("../../../scrivener.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/scrivener/scrivener.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("scrivener").required(false));

        if let Some(path) = path {
            debug!(path = %path.display(), "Adding explicit config file");
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("SCRIVENER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = builder
            .build()
            .map_err(|e| {
                ScrivenerError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ScrivenerError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config
            .workflow
            .prompts()
            .validate()
            .map_err(|e| ConfigError::new(format!("Invalid prompt template: {}", e.kind)))?;

        debug!(
            model = %config.workflow.model,
            max_concurrency = config.workflow.max_concurrency,
            bind = %config.server.bind,
            "Configuration loaded"
        );
        Ok(config)
    }
}
