//! Per-ecosystem command inference.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use super::{npm, ToolCategory, ToolCommands};
use crate::ecosystem::EcosystemTag;

/// Infers canonical development commands from ecosystem tags and companion files
pub struct ToolingDetector {
    root: PathBuf,
}

impl ToolingDetector {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Build the command table for the given tags. Rules are additive.
    pub fn detect(&self, tags: &[EcosystemTag]) -> ToolCommands {
        let mut commands = ToolCommands::new();

        if tags.contains(&EcosystemTag::JavaScript) || tags.contains(&EcosystemTag::TypeScript) {
            let scripts = npm::read_scripts(&self.root);
            debug!(count = scripts.len(), "package.json scripts found");
            npm::collect_script_commands(&scripts, &mut commands);
        }

        if tags.contains(&EcosystemTag::Python) {
            self.detect_python(&mut commands);
        }

        if tags.contains(&EcosystemTag::Rust) {
            commands.push(ToolCategory::Build, "cargo build");
            commands.push(ToolCategory::Test, "cargo test");
            commands.push(ToolCategory::Format, "cargo fmt");
            commands.push(ToolCategory::Lint, "cargo clippy");
        }

        if tags.contains(&EcosystemTag::Go) {
            commands.push(ToolCategory::Build, "go build");
            commands.push(ToolCategory::Test, "go test ./...");
            commands.push(ToolCategory::Format, "go fmt ./...");
            commands.push(ToolCategory::Lint, "golangci-lint run");
        }

        if tags.contains(&EcosystemTag::Java) {
            self.detect_java(&mut commands);
        }

        commands
    }

    fn detect_python(&self, commands: &mut ToolCommands) {
        if self.has_file("setup.py") {
            commands.push(ToolCategory::Build, "python setup.py build");
        }
        if self.has_file("pytest.ini") || self.has_pytest_files() {
            commands.push(ToolCategory::Test, "pytest");
        }
        if self.has_file(".flake8") {
            commands.push(ToolCategory::Lint, "flake8");
        }
        if self.has_file("pyproject.toml") {
            commands.push(ToolCategory::Format, "black .");
        }
    }

    fn detect_java(&self, commands: &mut ToolCommands) {
        if self.has_file("pom.xml") {
            commands.push(ToolCategory::Build, "mvn package");
            commands.push(ToolCategory::Test, "mvn test");
        }
        if self.has_file("build.gradle") || self.has_file("build.gradle.kts") {
            let gradle = if self.has_file("gradlew") {
                "./gradlew"
            } else {
                "gradle"
            };
            commands.push(ToolCategory::Build, format!("{} build", gradle));
            commands.push(ToolCategory::Test, format!("{} test", gradle));
        }
    }

    fn has_file(&self, name: &str) -> bool {
        self.root.join(name).exists()
    }

    /// Any `test_*.py` file anywhere below the root, hidden and vendor directories included
    fn has_pytest_files(&self) -> bool {
        WalkDir::new(&self.root)
            .into_iter()
            .flatten()
            .any(|e| {
                let name = e.file_name().to_string_lossy();
                e.file_type().is_file() && name.starts_with("test_") && name.ends_with(".py")
            })
    }
}
