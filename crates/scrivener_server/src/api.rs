//! Routes and handlers.

use crate::AppState;
use crate::pages::{failure_page, index_page, not_found_page, report_page};
use axum::{
    Form, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
};
use scrivener_core::{Report, Topic};
use scrivener_error::{ScrivenerResult, ServerError, ServerErrorKind};
use scrivener_export::{markdown_file_name, pdf_file_name, write_pdf};
use scrivener_workflow::ServerSettings;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info, instrument, warn};

/// Form body of `POST /generate`.
#[derive(Debug, Deserialize)]
struct GenerateForm {
    #[serde(default)]
    topic: String,
}

/// Creates the web UI router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/generate", post(generate))
        .route("/reports/:id", get(show_report))
        .route("/reports/:id/markdown", get(download_markdown))
        .route("/reports/:id/pdf", get(download_pdf))
        .route("/health", get(health_check))
        .with_state(state)
}

/// Bind `settings.bind()` and serve until Ctrl-C.
///
/// # Errors
///
/// Returns `ServerErrorKind::Bind` if the address cannot be bound and
/// `ServerErrorKind::Serve` if the server loop fails.
#[instrument(skip(state), fields(bind = %settings.bind()))]
pub async fn serve(settings: &ServerSettings, state: AppState) -> ScrivenerResult<()> {
    let listener = tokio::net::TcpListener::bind(settings.bind())
        .await
        .map_err(|e| {
            ServerError::new(ServerErrorKind::Bind {
                addr: settings.bind().clone(),
                message: e.to_string(),
            })
        })?;

    let local = listener
        .local_addr()
        .map(|a| a.to_string())
        .unwrap_or_else(|_| settings.bind().clone());
    info!(address = %local, "Scrivener web UI listening");

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for Ctrl-C");
    }
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(index_page(state.api_key_configured(), "", None))
}

#[instrument(skip_all)]
async fn generate(State(state): State<AppState>, Form(form): Form<GenerateForm>) -> Response {
    let topic = match Topic::new(&form.topic) {
        Ok(topic) => topic,
        Err(e) => {
            warn!("Rejected blank topic");
            let message = e.kind.to_string();
            let page = index_page(state.api_key_configured(), &form.topic, Some(message.as_str()));
            return (StatusCode::BAD_REQUEST, Html(page)).into_response();
        }
    };

    info!(topic = %topic, "Generating report");
    match state.writer().run(topic.as_str()).await {
        Ok(report) => {
            let page = report_page_for(&state, report).await;
            (StatusCode::OK, Html(page)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Report generation failed");
            let page = failure_page(state.api_key_configured(), topic.as_str(), &e.to_string());
            (StatusCode::BAD_GATEWAY, Html(page)).into_response()
        }
    }
}

async fn report_page_for(state: &AppState, report: Report) -> String {
    let page_report = report.clone();
    let id = state.reports().insert(report).await;
    info!(report_id = %id, "Report stored");
    report_page(&id.to_string(), &page_report)
}

fn not_found(e: ServerError, id: &str) -> Response {
    warn!(error = %e, "Unknown report requested");
    (StatusCode::NOT_FOUND, Html(not_found_page(id))).into_response()
}

/// `Content-Disposition` value for a download.
///
/// `filename` carries an ASCII fallback. Names with non-ASCII characters
/// also get an RFC 6266 `filename*` parameter with the UTF-8 name.
fn attachment(file_name: &str) -> String {
    let fallback: String = file_name
        .chars()
        .filter(|c| *c != '"' && *c != '\\')
        .map(|c| {
            if c.is_ascii() && !c.is_ascii_control() {
                c
            } else {
                '_'
            }
        })
        .collect();

    if file_name.is_ascii() {
        format!("attachment; filename=\"{fallback}\"")
    } else {
        format!(
            "attachment; filename=\"{fallback}\"; filename*=UTF-8''{}",
            urlencoding::encode(file_name)
        )
    }
}

async fn show_report(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.reports().get(&id).await {
        Ok(report) => Html(report_page(&id, &report)).into_response(),
        Err(e) => not_found(e, &id),
    }
}

#[instrument(skip_all, fields(report_id = %id))]
async fn download_markdown(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let report = match state.reports().get(&id).await {
        Ok(report) => report,
        Err(e) => return not_found(e, &id),
    };

    (
        [
            (header::CONTENT_TYPE, "text/markdown; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                attachment(&markdown_file_name(report.topic().as_str())),
            ),
        ],
        report.final_text().clone(),
    )
        .into_response()
}

#[instrument(skip_all, fields(report_id = %id))]
async fn download_pdf(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let report = match state.reports().get(&id).await {
        Ok(report) => report,
        Err(e) => return not_found(e, &id),
    };

    let topic = report.topic().as_str().to_string();
    let text = report.final_text().clone();
    let rendered = tokio::task::spawn_blocking(move || render_to_temp_file(&topic, &text)).await;

    match rendered {
        Ok(Ok(bytes)) => (
            [
                (header::CONTENT_TYPE, "application/pdf".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    attachment(&pdf_file_name(report.topic().as_str())),
                ),
            ],
            bytes,
        )
            .into_response(),
        Ok(Err(e)) => {
            error!(error = %e, "PDF export failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
        Err(e) => {
            error!(error = %e, "PDF export task failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

/// Write the PDF to a temporary file, read it back, and remove the file.
fn render_to_temp_file(topic: &str, text: &str) -> Result<Vec<u8>, String> {
    let file = tempfile::Builder::new()
        .prefix("scrivener-")
        .suffix(".pdf")
        .tempfile()
        .map_err(|e| format!("Failed to create temporary file: {}", e))?;

    write_pdf(file.path(), topic, text).map_err(|e| e.to_string())?;
    let bytes =
        std::fs::read(file.path()).map_err(|e| format!("Failed to read temporary PDF: {}", e))?;
    file.close()
        .map_err(|e| format!("Failed to remove temporary PDF: {}", e))?;

    Ok(bytes)
}
