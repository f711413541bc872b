//! Progress callbacks.

use serde::{Deserialize, Serialize};

/// Stage of a workflow run.
///
/// # Examples
///
/// ```
/// use scrivener_workflow::Stage;
///
/// assert_eq!(Stage::Outline.to_string(), "Step 1/4: Creating blog outline");
/// assert_eq!(
///     Stage::Expand { total: 5 }.to_string(),
///     "Step 2/4: Writing 5 sections"
/// );
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Stage {
    /// Asking the model for an outline
    #[display("Step 1/4: Creating blog outline")]
    Outline,
    /// Expanding every section
    #[display("Step 2/4: Writing {} sections", total)]
    Expand {
        /// Number of sections being expanded
        total: usize,
    },
    /// Joining the expanded sections
    #[display("Step 3/4: Combining sections")]
    Join,
    /// Final editorial pass
    #[display("Step 4/4: Polishing final draft")]
    Polish,
    /// Report is ready
    #[display("Done")]
    Done,
}

/// Receives progress while a report is written.
///
/// Callbacks run on the workflow's task and should return quickly.
pub trait WorkflowObserver: Send + Sync {
    /// A stage has started.
    fn on_stage(&self, stage: Stage);

    /// Section `index` (zero-based) finished expanding.
    ///
    /// Sections may finish in any order.
    fn on_section_expanded(&self, _index: usize, _title: &str) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl WorkflowObserver for NoopObserver {
    fn on_stage(&self, _stage: Stage) {}
}
