//! Build, test, lint and format command inference.

pub mod detector;
pub mod npm;

use serde::{Deserialize, Serialize};

pub use detector::ToolingDetector;

/// Kind of development command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolCategory {
    Build,
    Test,
    Lint,
    Format,
}

impl ToolCategory {
    pub const ALL: [ToolCategory; 4] = [
        ToolCategory::Build,
        ToolCategory::Test,
        ToolCategory::Lint,
        ToolCategory::Format,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolCategory::Build => "build",
            ToolCategory::Test => "test",
            ToolCategory::Lint => "lint",
            ToolCategory::Format => "format",
        }
    }

    /// Script-name keywords that select this category (matched case-insensitively)
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            ToolCategory::Build => &["build", "compile"],
            ToolCategory::Test => &["test", "spec"],
            ToolCategory::Lint => &["lint", "check"],
            ToolCategory::Format => &["format", "prettier"],
        }
    }

    /// Classify a script name; the first category in [`ToolCategory::ALL`] order wins.
    pub fn classify(script_name: &str) -> Option<Self> {
        let lower = script_name.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.keywords().iter().any(|kw| lower.contains(kw)))
    }
}

/// Inferred commands, grouped by category in discovery order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCommands {
    pub build: Vec<String>,
    pub test: Vec<String>,
    pub lint: Vec<String>,
    pub format: Vec<String>,
}

impl ToolCommands {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, category: ToolCategory, command: impl Into<String>) {
        self.get_mut(category).push(command.into());
    }

    pub fn get(&self, category: ToolCategory) -> &[String] {
        match category {
            ToolCategory::Build => &self.build,
            ToolCategory::Test => &self.test,
            ToolCategory::Lint => &self.lint,
            ToolCategory::Format => &self.format,
        }
    }

    fn get_mut(&mut self, category: ToolCategory) -> &mut Vec<String> {
        match category {
            ToolCategory::Build => &mut self.build,
            ToolCategory::Test => &mut self.test,
            ToolCategory::Lint => &mut self.lint,
            ToolCategory::Format => &mut self.format,
        }
    }

    pub fn is_empty(&self) -> bool {
        ToolCategory::ALL.iter().all(|c| self.get(*c).is_empty())
    }
}
