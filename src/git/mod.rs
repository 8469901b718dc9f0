use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Captured result of one external command invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
}

/// Runs version-control commands on behalf of [`RepositoryInspector`]
pub trait CommandRunner {
    /// Run `git` with `args` inside `cwd`.
    fn run(&self, args: &[&str], cwd: &Path) -> io::Result<CommandOutput>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, args: &[&str], cwd: &Path) -> io::Result<CommandOutput> {
        (**self).run(args, cwd)
    }
}

/// Runs the real `git` binary from `PATH`
#[derive(Debug, Default, Clone, Copy)]
pub struct GitCli;

impl CommandRunner for GitCli {
    fn run(&self, args: &[&str], cwd: &Path) -> io::Result<CommandOutput> {
        let output = Command::new("git").args(args).current_dir(cwd).output()?;

        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }
}

/// Repository state of the project root
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryStatus {
    pub is_repo: bool,
    /// Current branch; empty when HEAD is detached
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dirty: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_count: Option<usize>,
    pub recent_commits: Vec<String>,
    /// Why inspection failed, if it did
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RepositoryStatus {
    pub fn not_a_repo() -> Self {
        Self::default()
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::default()
        }
    }
}

/// Inspects branch, working-tree and history state of a repository
pub struct RepositoryInspector<R = GitCli> {
    repo_path: PathBuf,
    runner: R,
}

impl RepositoryInspector<GitCli> {
    pub fn new(repo_path: impl AsRef<Path>) -> Self {
        Self::with_runner(repo_path, GitCli)
    }
}

impl<R: CommandRunner> RepositoryInspector<R> {
    pub fn with_runner(repo_path: impl AsRef<Path>, runner: R) -> Self {
        Self {
            repo_path: repo_path.as_ref().to_path_buf(),
            runner,
        }
    }

    /// Inspect the repository. Never fails: problems degrade to `is_repo = false`.
    pub fn inspect(&self) -> RepositoryStatus {
        match self.try_inspect() {
            Ok(status) => status,
            Err(e) => {
                debug!(error = %e, "Repository inspection failed");
                RepositoryStatus::failed(e.to_string())
            }
        }
    }

    fn try_inspect(&self) -> io::Result<RepositoryStatus> {
        let probe = self.run(&["rev-parse", "--git-dir"])?;
        if !probe.success {
            return Ok(RepositoryStatus::not_a_repo());
        }

        let branch = self.run(&["branch", "--show-current"])?.stdout.trim().to_string();
        let status = self.run(&["status", "--porcelain"])?;
        let change_count = Self::count_changes(&status.stdout);
        let log = self.run(&["log", "--oneline", "-5"])?;

        Ok(RepositoryStatus {
            is_repo: true,
            branch: Some(branch),
            dirty: Some(change_count > 0),
            change_count: Some(change_count),
            recent_commits: Self::split_lines(&log.stdout),
            error: None,
        })
    }

    fn run(&self, args: &[&str]) -> io::Result<CommandOutput> {
        self.runner.run(args, &self.repo_path)
    }

    fn count_changes(porcelain: &str) -> usize {
        porcelain.lines().filter(|line| !line.trim().is_empty()).count()
    }

    fn split_lines(output: &str) -> Vec<String> {
        output
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect()
    }
}
