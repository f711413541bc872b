//! Shared server state.

use scrivener_core::Report;
use scrivener_error::{ServerError, ServerErrorKind};
use scrivener_interface::ScrivenerDriver;
use scrivener_workflow::{ReportWriter, WorkflowConfig};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// Reports kept when no capacity is given.
pub const DEFAULT_REPORT_CAPACITY: usize = 100;

#[derive(Debug, Default)]
struct Reports {
    by_id: HashMap<Uuid, Report>,
    order: VecDeque<Uuid>,
}

/// Finished reports keyed by id.
///
/// Holds at most `capacity` reports; inserting past that drops the oldest.
#[derive(Debug, Clone)]
pub struct ReportStore {
    reports: Arc<RwLock<Reports>>,
    capacity: usize,
}

impl Default for ReportStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_REPORT_CAPACITY)
    }
}

impl ReportStore {
    /// Create an empty store with the default capacity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store holding at most `capacity` reports (minimum one).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            reports: Arc::new(RwLock::new(Reports::default())),
            capacity: capacity.max(1),
        }
    }

    /// Maximum number of reports kept.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Store a report under a fresh id, evicting the oldest when full.
    pub async fn insert(&self, report: Report) -> Uuid {
        let id = Uuid::new_v4();
        let mut reports = self.reports.write().await;
        while reports.order.len() >= self.capacity {
            let Some(oldest) = reports.order.pop_front() else {
                break;
            };
            reports.by_id.remove(&oldest);
            debug!(report_id = %oldest, "Evicted oldest report");
        }
        reports.by_id.insert(id, report);
        reports.order.push_back(id);
        id
    }

    /// Look up a report by its id string.
    ///
    /// # Errors
    ///
    /// Returns `ServerErrorKind::ReportNotFound` for a malformed or unknown id.
    pub async fn get(&self, id: &str) -> Result<Report, ServerError> {
        let not_found = || ServerError::new(ServerErrorKind::ReportNotFound(id.to_string()));
        let uuid = Uuid::parse_str(id).map_err(|_| not_found())?;
        self.reports
            .read()
            .await
            .by_id
            .get(&uuid)
            .cloned()
            .ok_or_else(not_found)
    }

    /// Number of stored reports.
    pub async fn len(&self) -> usize {
        self.reports.read().await.by_id.len()
    }

    /// Whether no report has been stored.
    pub async fn is_empty(&self) -> bool {
        self.reports.read().await.by_id.is_empty()
    }
}

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    writer: Arc<ReportWriter<Arc<dyn ScrivenerDriver>>>,
    reports: ReportStore,
    api_key_configured: bool,
}

impl AppState {
    /// Create state around a driver.
    ///
    /// `api_key_configured` only drives the status badge on the form.
    pub fn new(
        driver: Arc<dyn ScrivenerDriver>,
        config: WorkflowConfig,
        api_key_configured: bool,
    ) -> Self {
        Self {
            writer: Arc::new(ReportWriter::new(driver, config)),
            reports: ReportStore::new(),
            api_key_configured,
        }
    }

    /// Replace the report store, e.g. to change its capacity.
    pub fn with_reports(mut self, reports: ReportStore) -> Self {
        self.reports = reports;
        self
    }

    /// Workflow runner.
    pub fn writer(&self) -> &ReportWriter<Arc<dyn ScrivenerDriver>> {
        &self.writer
    }

    /// Finished reports.
    pub fn reports(&self) -> &ReportStore {
        &self.reports
    }

    /// Whether a model credential was found at startup.
    pub fn api_key_configured(&self) -> bool {
        self.api_key_configured
    }
}
