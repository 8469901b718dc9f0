pub mod config;
pub mod context;
pub mod ecosystem;
pub mod error;
pub mod git;
pub mod report;
pub mod scanner;
pub mod tooling;

pub use config::AnalyzerConfig;
pub use context::{AnalysisRun, ProjectAnalysis, ProjectAnalyzer};
pub use ecosystem::{EcosystemTag, MarkerDetector};
pub use error::{AnalyzerError, Result};
pub use git::{CommandOutput, CommandRunner, GitCli, RepositoryInspector, RepositoryStatus};
pub use report::{DocumentAction, ReportMode, ReportOutcome};
pub use scanner::{LanguageCounts, ProjectStructure, TreeScanner};
pub use tooling::{ToolCategory, ToolCommands, ToolingDetector};
