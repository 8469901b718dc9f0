//! Markdown report generation.
//!
//! Two documents are written under the context directory:
//! - `project-overview.md`, fully re-rendered on every run
//! - `task-tracker.md`, created once and then only refreshed in place

pub mod markdown;
pub mod overview;
pub mod tasks;

use std::fs;

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::debug;

use crate::config::AnalyzerConfig;
use crate::context::ProjectAnalysis;
use crate::error::Result;

pub use overview::{merge_custom_notes, render_overview, CUSTOM_NOTES_HEADING};
pub use tasks::{render_task_tracker, update_task_tracker};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// How an existing overview is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportMode {
    /// Overwrite the overview unconditionally
    #[default]
    Create,
    /// Back up the overview and carry its custom notes over
    Update,
}

/// What happened to a document on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentAction {
    Created,
    Updated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportOutcome {
    pub overview: DocumentAction,
    pub task_tracker: DocumentAction,
}

/// Write both documents. The context directory must already exist.
///
/// An existing task tracker is always updated in place, never overwritten.
pub fn write_reports(
    config: &AnalyzerConfig,
    analysis: &ProjectAnalysis,
    mode: ReportMode,
    timestamp: NaiveDateTime,
) -> Result<ReportOutcome> {
    let overview = write_overview(config, analysis, mode, timestamp)?;
    let task_tracker = write_task_tracker(config, analysis, timestamp)?;

    Ok(ReportOutcome {
        overview,
        task_tracker,
    })
}

fn write_overview(
    config: &AnalyzerConfig,
    analysis: &ProjectAnalysis,
    mode: ReportMode,
    timestamp: NaiveDateTime,
) -> Result<DocumentAction> {
    let path = config.overview_path();
    let rendered = render_overview(config, analysis, timestamp);

    if mode == ReportMode::Update && path.exists() {
        let backup = config.overview_backup_path();
        fs::copy(&path, &backup)?;
        debug!(backup = %backup.display(), "Backed up project overview");

        let existing = fs::read_to_string(&path)?;
        fs::write(&path, merge_custom_notes(&existing, rendered))?;
        return Ok(DocumentAction::Updated);
    }

    fs::write(&path, rendered)?;
    Ok(DocumentAction::Created)
}

fn write_task_tracker(
    config: &AnalyzerConfig,
    analysis: &ProjectAnalysis,
    timestamp: NaiveDateTime,
) -> Result<DocumentAction> {
    let path = config.task_tracker_path();

    if path.exists() {
        let existing = fs::read_to_string(&path)?;
        fs::write(&path, update_task_tracker(&existing, &analysis.structure, timestamp))?;
        return Ok(DocumentAction::Updated);
    }

    fs::write(&path, render_task_tracker(config, &analysis.structure, timestamp))?;
    Ok(DocumentAction::Created)
}
