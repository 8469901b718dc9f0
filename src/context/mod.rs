//! Project context extraction for AI coding assistants.
//!
//! This module ties the individual detectors together into one analysis run
//! and hands the result to the report writers.

pub mod analyzer;

use serde::{Deserialize, Serialize};

use crate::ecosystem::EcosystemTag;
use crate::git::RepositoryStatus;
use crate::scanner::ProjectStructure;
use crate::tooling::ToolCommands;

pub use analyzer::{AnalysisRun, ProjectAnalyzer};

/// Everything learned about a project in one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectAnalysis {
    /// Detected ecosystems, `[unknown]` when nothing matched
    pub tags: Vec<EcosystemTag>,
    pub repository: RepositoryStatus,
    pub tools: ToolCommands,
    pub structure: ProjectStructure,
}
