//! Run-scoped configuration: resolved project root and report locations.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{AnalyzerError, Result};

/// Name of the metadata directory created at the project root
pub const METADATA_DIR_NAME: &str = ".claude";
/// Subdirectory of the metadata directory holding the generated reports
pub const CONTEXT_DIR_NAME: &str = "context";
pub const OVERVIEW_FILE_NAME: &str = "project-overview.md";
pub const OVERVIEW_BACKUP_FILE_NAME: &str = "project-overview.md.bak";
pub const TASK_TRACKER_FILE_NAME: &str = "task-tracker.md";

/// Paths shared by every stage of a single analysis run
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzerConfig {
    /// Absolute, canonical project root
    pub project_root: PathBuf,
    /// `<root>/.claude`
    pub metadata_dir: PathBuf,
    /// `<root>/.claude/context`
    pub context_dir: PathBuf,
}

impl AnalyzerConfig {
    /// Resolve `path` and derive the metadata locations under it.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let project_root = path.canonicalize().map_err(|e| {
            AnalyzerError::InvalidRoot(format!("{}: {}", path.display(), e))
        })?;

        if !project_root.is_dir() {
            return Err(AnalyzerError::InvalidRoot(format!(
                "{} is not a directory",
                project_root.display()
            )));
        }

        let metadata_dir = project_root.join(METADATA_DIR_NAME);
        let context_dir = metadata_dir.join(CONTEXT_DIR_NAME);

        Ok(Self {
            project_root,
            metadata_dir,
            context_dir,
        })
    }

    pub fn overview_path(&self) -> PathBuf {
        self.context_dir.join(OVERVIEW_FILE_NAME)
    }

    pub fn overview_backup_path(&self) -> PathBuf {
        self.context_dir.join(OVERVIEW_BACKUP_FILE_NAME)
    }

    pub fn task_tracker_path(&self) -> PathBuf {
        self.context_dir.join(TASK_TRACKER_FILE_NAME)
    }

    /// Create the metadata and context directories if missing.
    ///
    /// Returns `true` when the metadata directory did not exist before.
    pub fn ensure_dirs(&self) -> Result<bool> {
        let created = !self.metadata_dir.exists();
        std::fs::create_dir_all(&self.context_dir)?;
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_are_derived_from_root() {
        let temp_dir = TempDir::new().unwrap();
        let config = AnalyzerConfig::new(temp_dir.path()).unwrap();
        let root = temp_dir.path().canonicalize().unwrap();

        assert_eq!(config.project_root, root);
        assert_eq!(config.metadata_dir, root.join(".claude"));
        assert_eq!(config.context_dir, root.join(".claude/context"));
        assert_eq!(
            config.overview_path(),
            root.join(".claude/context/project-overview.md")
        );
        assert_eq!(
            config.overview_backup_path(),
            root.join(".claude/context/project-overview.md.bak")
        );
        assert_eq!(
            config.task_tracker_path(),
            root.join(".claude/context/task-tracker.md")
        );
    }

    #[test]
    fn test_missing_root_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let result = AnalyzerConfig::new(temp_dir.path().join("does-not-exist"));
        assert!(matches!(result, Err(AnalyzerError::InvalidRoot(_))));
    }

    #[test]
    fn test_file_root_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("file.txt");
        std::fs::write(&file, "x").unwrap();
        let result = AnalyzerConfig::new(&file);
        assert!(matches!(result, Err(AnalyzerError::InvalidRoot(_))));
    }

    #[test]
    fn test_ensure_dirs_reports_creation_once() {
        let temp_dir = TempDir::new().unwrap();
        let config = AnalyzerConfig::new(temp_dir.path()).unwrap();

        assert!(config.ensure_dirs().unwrap());
        assert!(config.context_dir.is_dir());
        assert!(!config.ensure_dirs().unwrap());
    }
}
