//! Ecosystem detection from marker files at the project root.
//!
//! Recognized ecosystems:
//! - Python, JavaScript, TypeScript
//! - Rust, Go, Java
//! - Docker

pub mod detector;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use detector::MarkerDetector;

/// Language, platform or toolchain inferred from marker files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EcosystemTag {
    Python,
    JavaScript,
    TypeScript,
    Rust,
    Go,
    Java,
    Docker,
    /// Sentinel used when no marker file matched
    Unknown,
}

impl EcosystemTag {
    /// All detectable tags, in declaration order
    pub const DETECTABLE: [EcosystemTag; 7] = [
        EcosystemTag::Python,
        EcosystemTag::JavaScript,
        EcosystemTag::TypeScript,
        EcosystemTag::Rust,
        EcosystemTag::Go,
        EcosystemTag::Java,
        EcosystemTag::Docker,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EcosystemTag::Python => "python",
            EcosystemTag::JavaScript => "javascript",
            EcosystemTag::TypeScript => "typescript",
            EcosystemTag::Rust => "rust",
            EcosystemTag::Go => "go",
            EcosystemTag::Java => "java",
            EcosystemTag::Docker => "docker",
            EcosystemTag::Unknown => "unknown",
        }
    }

    /// Files whose presence at the project root implies this ecosystem
    pub fn marker_files(&self) -> &'static [&'static str] {
        match self {
            EcosystemTag::Python => &["requirements.txt", "setup.py", "pyproject.toml", "Pipfile"],
            EcosystemTag::JavaScript => &["package.json", "yarn.lock", "npm-shrinkwrap.json"],
            EcosystemTag::TypeScript => &["tsconfig.json", "package.json"],
            EcosystemTag::Rust => &["Cargo.toml"],
            EcosystemTag::Go => &["go.mod", "go.sum"],
            EcosystemTag::Java => &["pom.xml", "build.gradle", "build.gradle.kts"],
            EcosystemTag::Docker => &["Dockerfile", "docker-compose.yml", "docker-compose.yaml"],
            EcosystemTag::Unknown => &[],
        }
    }
}

impl fmt::Display for EcosystemTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Joins tags as `python, rust`
pub fn join_tags(tags: &[EcosystemTag]) -> String {
    tags.iter()
        .map(EcosystemTag::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ecosystem_tag_as_str() {
        assert_eq!(EcosystemTag::Python.as_str(), "python");
        assert_eq!(EcosystemTag::JavaScript.as_str(), "javascript");
        assert_eq!(EcosystemTag::Unknown.as_str(), "unknown");
    }

    #[test]
    fn test_package_json_marks_both_js_and_ts() {
        assert!(EcosystemTag::JavaScript.marker_files().contains(&"package.json"));
        assert!(EcosystemTag::TypeScript.marker_files().contains(&"package.json"));
    }

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_string(&EcosystemTag::TypeScript).unwrap();
        assert_eq!(json, "\"typescript\"");
    }

    #[test]
    fn test_join_tags() {
        assert_eq!(join_tags(&[EcosystemTag::Python, EcosystemTag::Docker]), "python, docker");
        assert_eq!(join_tags(&[]), "");
    }
}
