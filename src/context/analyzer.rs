//! Analysis pipeline: detect, inspect, scan, then write reports.

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::{debug, info};

use super::ProjectAnalysis;
use crate::config::AnalyzerConfig;
use crate::ecosystem::MarkerDetector;
use crate::error::Result;
use crate::git::{CommandRunner, GitCli, RepositoryInspector};
use crate::report::{self, ReportMode, ReportOutcome};
use crate::scanner::TreeScanner;
use crate::tooling::ToolingDetector;

/// Result of a full run, including what was written to disk
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRun {
    pub analysis: ProjectAnalysis,
    pub outcome: ReportOutcome,
    /// The metadata directory did not exist before this run
    pub created_metadata_dir: bool,
}

/// Runs every detector against one project root
pub struct ProjectAnalyzer<R = GitCli> {
    config: AnalyzerConfig,
    runner: R,
}

impl ProjectAnalyzer<GitCli> {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self::with_runner(config, GitCli)
    }
}

impl<R: CommandRunner> ProjectAnalyzer<R> {
    pub fn with_runner(config: AnalyzerConfig, runner: R) -> Self {
        Self { config, runner }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Collect tags, repository status, tool commands and tree structure.
    pub fn analyze(&self) -> Result<ProjectAnalysis> {
        let root = &self.config.project_root;

        let tags = MarkerDetector::detect(root);
        debug!(?tags, "Detected ecosystems");

        let repository = RepositoryInspector::with_runner(root, &self.runner).inspect();
        let tools = ToolingDetector::new(root).detect(&tags);
        let structure = TreeScanner::new(root).scan()?;

        Ok(ProjectAnalysis {
            tags,
            repository,
            tools,
            structure,
        })
    }

    /// Analyze the project and write both reports.
    pub fn run(&self, mode: ReportMode, timestamp: NaiveDateTime) -> Result<AnalysisRun> {
        let created_metadata_dir = self.config.ensure_dirs()?;

        info!(root = %self.config.project_root.display(), ?mode, "Analyzing project");
        let analysis = self.analyze()?;
        let outcome = report::write_reports(&self.config, &analysis, mode, timestamp)?;

        Ok(AnalysisRun {
            analysis,
            outcome,
            created_metadata_dir,
        })
    }
}
