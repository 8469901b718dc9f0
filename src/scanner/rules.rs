//! Name-based classification rules used by the tree scanner.

use once_cell::sync::Lazy;
use regex::RegexSet;

/// Directories never descended into, in addition to hidden ones
pub const EXCLUDED_DIRS: &[&str] = &["node_modules", "__pycache__", "target"];

const TEST_DIR_KEYWORDS: &[&str] = &["test", "tests", "spec"];
const SOURCE_DIR_KEYWORDS: &[&str] = &["src", "lib", "app"];
const DOC_KEYWORDS: &[&str] = &["readme", "doc", "changelog"];

/// Patterns are anchored at the start of the file name.
static CONFIG_PATTERNS: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([
        r"^.*\.json$",
        r"^.*\.yaml$",
        r"^.*\.yml$",
        r"^.*\.toml$",
        r"^.*\.ini$",
        r"^.*\.cfg$",
        r"^Dockerfile$",
        r"^Makefile$",
        r"^requirements.*\.txt$",
        r"^package\.json$",
        r"^go\.mod$",
    ])
    .expect("config patterns are valid")
});

/// Kind assigned to a visited directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirKind {
    Test,
    Source,
}

/// Whether a directory with this name is pruned from the walk
pub fn is_excluded_dir(name: &str) -> bool {
    name.starts_with('.') || EXCLUDED_DIRS.contains(&name)
}

/// Classify a directory by its bare name; test keywords are checked first.
pub fn classify_dir(name: &str) -> Option<DirKind> {
    let lower = name.to_lowercase();
    if TEST_DIR_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        Some(DirKind::Test)
    } else if SOURCE_DIR_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        Some(DirKind::Source)
    } else {
        None
    }
}

pub fn is_config_file(file_name: &str) -> bool {
    CONFIG_PATTERNS.is_match(file_name)
}

pub fn is_doc_file(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    DOC_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

/// Map a file extension (without the dot) to the language it is counted as
pub fn language_for_extension(ext: &str) -> Option<&'static str> {
    match ext.to_lowercase().as_str() {
        "py" => Some("python"),
        "js" => Some("javascript"),
        "ts" => Some("typescript"),
        "rs" => Some("rust"),
        "go" => Some("go"),
        "java" => Some("java"),
        "cpp" | "hpp" => Some("cpp"),
        "c" | "h" => Some("c"),
        _ => None,
    }
}
