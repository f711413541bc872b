//! `write` command handler.

use scrivener::{
    GroqDriver, ReportWriter, ScrivenerConfig, ScrivenerResult, Stage, Topic, WorkflowObserver,
    markdown_file_name, write_markdown, write_pdf,
};
use std::path::PathBuf;

/// Prints workflow progress to stderr.
struct ProgressPrinter;

impl WorkflowObserver for ProgressPrinter {
    fn on_stage(&self, stage: Stage) {
        eprintln!("{stage}");
    }

    fn on_section_expanded(&self, index: usize, title: &str) {
        eprintln!("  wrote section {}: {title}", index + 1);
    }
}

/// Handle the `write` command
pub async fn handle_write_command(
    config: ScrivenerConfig,
    topic: &str,
    out: Option<PathBuf>,
    pdf: Option<PathBuf>,
) -> ScrivenerResult<()> {
    // Reject a blank topic before a credential is even looked up.
    let topic = Topic::new(topic)?;

    let driver = GroqDriver::new(config.workflow().model().clone())?;
    let writer = ReportWriter::new(driver, config.workflow().clone());

    let report = writer.run_observed(topic.as_str(), &ProgressPrinter).await?;

    let out = out.unwrap_or_else(|| PathBuf::from(markdown_file_name(topic.as_str())));
    write_markdown(&out, report.final_text())?;
    println!("Markdown written to {}", out.display());

    if let Some(pdf) = pdf {
        write_pdf(&pdf, topic.as_str(), report.final_text())?;
        println!("PDF written to {}", pdf.display());
    }

    let stats = report.stats();
    println!("{} sections, {} words", stats.sections(), stats.words());

    Ok(())
}
