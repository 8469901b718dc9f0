//! Project tree scanning.
//!
//! A single walk from the project root that:
//! - records source and test directories by name,
//! - flags configuration and documentation files,
//! - counts files per language by extension.

pub mod rules;
pub mod walker;

use serde::{Deserialize, Serialize};

pub use walker::TreeScanner;

/// File counts per language, kept in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCounts(Vec<(String, usize)>);

impl LanguageCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, language: &str) {
        match self.0.iter_mut().find(|(lang, _)| lang == language) {
            Some((_, count)) => *count += 1,
            None => self.0.push((language.to_string(), 1)),
        }
    }

    pub fn get(&self, language: &str) -> Option<usize> {
        self.0.iter().find(|(lang, _)| lang == language).map(|(_, c)| *c)
    }

    /// Language with the highest count; the earliest seen wins ties.
    pub fn primary(&self) -> Option<&str> {
        let mut best: Option<&(String, usize)> = None;
        for entry in &self.0 {
            if best.map_or(true, |b| entry.1 > b.1) {
                best = Some(entry);
            }
        }
        best.map(|(lang, _)| lang.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(lang, count)| (lang.as_str(), *count))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Everything the scanner learned about the project tree.
///
/// Paths are relative to the project root and `/`-separated; the root is `.`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectStructure {
    pub config_files: Vec<String>,
    pub source_dirs: Vec<String>,
    pub test_dirs: Vec<String>,
    pub doc_files: Vec<String>,
    pub total_files: usize,
    pub languages: LanguageCounts,
    /// Entries the walk could not read
    pub skipped_entries: usize,
}
