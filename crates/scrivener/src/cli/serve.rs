//! `serve` command handler.

use scrivener::{
    AppState, GroqDriver, ReportStore, ScrivenerConfig, ScrivenerDriver, ScrivenerResult,
    ServerSettings, serve,
};
use std::sync::Arc;

/// Handle the `serve` command
pub async fn handle_serve_command(
    config: ScrivenerConfig,
    bind: Option<String>,
) -> ScrivenerResult<()> {
    let settings = bind
        .map(ServerSettings::new)
        .unwrap_or_else(|| config.server().clone());
    let model = config.workflow().model().clone();

    let api_key_configured = GroqDriver::api_key_configured();
    let driver = if api_key_configured {
        GroqDriver::new(model)?
    } else {
        tracing::warn!(
            var = GroqDriver::API_KEY_VAR,
            "No API key found; report generation will fail until one is set"
        );
        GroqDriver::with_api_key("", model)
    };
    let driver: Arc<dyn ScrivenerDriver> = Arc::new(driver);

    let state = AppState::new(driver, config.workflow().clone(), api_key_configured)
        .with_reports(ReportStore::with_capacity(*config.server().max_reports()));

    tracing::info!(bind = %settings.bind(), "Scrivener server starting. Press Ctrl+C to stop.");
    serve(&settings, state).await
}
