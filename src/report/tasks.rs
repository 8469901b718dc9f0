//! `task-tracker.md` creation and in-place updates.

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

use super::markdown::insert_after_heading;
use super::{DATE_FORMAT, TIMESTAMP_FORMAT};
use crate::config::AnalyzerConfig;
use crate::scanner::ProjectStructure;

pub const PENDING_TASKS_HEADING: &str = "## Pending Tasks";
pub const DOC_SUGGESTION: &str = "Consider creating project documentation";
pub const TEST_SUGGESTION: &str = "Consider adding test coverage";

const BASELINE_TASKS: [&str; 3] = [
    "Complete project analysis and understand codebase",
    "Review existing documentation and README files",
    "Understand project goals and requirements",
];

static LAST_UPDATED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*Last Updated:\*\*.*").expect("last-updated pattern is valid"));

fn needs_docs(structure: &ProjectStructure) -> bool {
    structure.doc_files.is_empty()
}

fn needs_tests(structure: &ProjectStructure) -> bool {
    !structure.languages.is_empty() && structure.test_dirs.is_empty()
}

/// Render a fresh task tracker.
pub fn render_task_tracker(
    config: &AnalyzerConfig,
    structure: &ProjectStructure,
    timestamp: NaiveDateTime,
) -> String {
    let mut tasks: Vec<&str> = BASELINE_TASKS.to_vec();
    if needs_docs(structure) {
        tasks.push(DOC_SUGGESTION);
    }
    if needs_tests(structure) {
        tasks.push(TEST_SUGGESTION);
    }

    let pending = tasks
        .iter()
        .map(|task| format!("- [ ] {}", task))
        .collect::<Vec<_>>()
        .join("\n");
    let date = timestamp.format(DATE_FORMAT);

    format!(
        r#"# Task Tracker

**Last Updated:** {timestamp}

{heading}
{pending}

## Completed Tasks
- [x] Initialize Claude workflow automation
- [x] Complete automated project analysis

## Task History
| Date | Task | Status | Notes |
|------|------|--------|-------|
| {date} | Initialize workflow | Completed | Auto-setup complete |
| {date} | Project analysis | Completed | Automated analysis complete |

## Resources & Links
- Project Root: {root}
- Metadata Directory: {metadata}
- Context Directory: {context}
"#,
        timestamp = timestamp.format(TIMESTAMP_FORMAT),
        heading = PENDING_TASKS_HEADING,
        pending = pending,
        date = date,
        root = config.project_root.display(),
        metadata = config.metadata_dir.display(),
        context = config.context_dir.display(),
    )
}

/// Refresh an existing task tracker without touching user content.
///
/// Only the first `**Last Updated:**` line is rewritten; missing suggestions
/// are inserted below the pending-tasks heading, test coverage ending up above
/// documentation when both apply.
pub fn update_task_tracker(
    existing: &str,
    structure: &ProjectStructure,
    timestamp: NaiveDateTime,
) -> String {
    let stamp = format!("**Last Updated:** {}", timestamp.format(TIMESTAMP_FORMAT));
    let mut content = LAST_UPDATED.replace(existing, NoExpand(&stamp)).into_owned();

    if needs_docs(structure) && !content.contains(DOC_SUGGESTION) {
        content = insert_suggestion(&content, DOC_SUGGESTION);
    }

    if needs_tests(structure) && !content.contains(TEST_SUGGESTION) {
        content = insert_suggestion(&content, TEST_SUGGESTION);
    }

    content
}

fn insert_suggestion(content: &str, suggestion: &str) -> String {
    let line = format!("- [ ] {} (auto-suggested)", suggestion);
    insert_after_heading(content, PENDING_TASKS_HEADING, &line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    fn config() -> AnalyzerConfig {
        AnalyzerConfig {
            project_root: PathBuf::from("/work/demo"),
            metadata_dir: PathBuf::from("/work/demo/.claude"),
            context_dir: PathBuf::from("/work/demo/.claude/context"),
        }
    }

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 17)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    /// Sources counted, no docs, no test directories
    fn bare_structure() -> ProjectStructure {
        let mut structure = ProjectStructure::default();
        structure.languages.increment("python");
        structure
    }

    fn documented_and_tested() -> ProjectStructure {
        let mut structure = bare_structure();
        structure.doc_files.push("README.md".to_string());
        structure.test_dirs.push("tests".to_string());
        structure
    }

    #[test]
    fn test_render_includes_conditional_suggestions() {
        let content = render_task_tracker(&config(), &bare_structure(), at(8));

        assert!(content.contains("**Last Updated:** 2024-05-17 08:00:00\n"));
        assert!(content.contains(
            "## Pending Tasks\n\
             - [ ] Complete project analysis and understand codebase\n\
             - [ ] Review existing documentation and README files\n\
             - [ ] Understand project goals and requirements\n\
             - [ ] Consider creating project documentation\n\
             - [ ] Consider adding test coverage\n\n"
        ));
        assert!(content.contains("| 2024-05-17 | Initialize workflow | Completed | Auto-setup complete |"));
        assert!(content.contains("- Project Root: /work/demo\n"));
        assert!(content.contains("- Metadata Directory: /work/demo/.claude\n"));
        assert!(content.contains("- Context Directory: /work/demo/.claude/context\n"));
    }

    #[test]
    fn test_render_without_suggestions() {
        let content = render_task_tracker(&config(), &documented_and_tested(), at(8));

        assert!(!content.contains(DOC_SUGGESTION));
        assert!(!content.contains(TEST_SUGGESTION));
    }

    #[test]
    fn test_no_test_suggestion_without_languages() {
        let structure = ProjectStructure::default();
        let content = render_task_tracker(&config(), &structure, at(8));

        assert!(content.contains(DOC_SUGGESTION));
        assert!(!content.contains(TEST_SUGGESTION));
    }

    #[test]
    fn test_update_rewrites_only_first_timestamp() {
        let existing = "**Last Updated:** old\n## Pending Tasks\n- [ ] mine\n**Last Updated:** keep\n";
        let updated = update_task_tracker(existing, &documented_and_tested(), at(10));

        assert_eq!(
            updated,
            "**Last Updated:** 2024-05-17 10:00:00\n## Pending Tasks\n- [ ] mine\n**Last Updated:** keep\n"
        );
    }

    #[test]
    fn test_update_inserts_suggestions_below_heading() {
        let existing = "# Task Tracker\n\n**Last Updated:** old\n\n## Pending Tasks\n- [ ] Ship v2\n\n## Completed Tasks\n";
        let updated = update_task_tracker(existing, &bare_structure(), at(10));

        assert_eq!(
            updated,
            "# Task Tracker\n\n**Last Updated:** 2024-05-17 10:00:00\n\n## Pending Tasks\n\
             - [ ] Consider adding test coverage (auto-suggested)\n\
             - [ ] Consider creating project documentation (auto-suggested)\n\
             - [ ] Ship v2\n\n## Completed Tasks\n"
        );
    }

    #[test]
    fn test_update_does_not_duplicate_suggestions() {
        let existing = "**Last Updated:** old\n## Pending Tasks\n- [ ] Ship v2\n";
        let once = update_task_tracker(existing, &bare_structure(), at(10));
        let twice = update_task_tracker(&once, &bare_structure(), at(11));

        assert_eq!(twice.matches(DOC_SUGGESTION).count(), 1);
        assert_eq!(twice.matches(TEST_SUGGESTION).count(), 1);
        assert_eq!(twice.replace("11:00:00", "10:00:00"), once);
    }

    #[test]
    fn test_update_without_heading_only_touches_timestamp() {
        let existing = "**Last Updated:** old\n# My own format\n";
        let updated = update_task_tracker(existing, &bare_structure(), at(10));

        assert_eq!(updated, "**Last Updated:** 2024-05-17 10:00:00\n# My own format\n");
    }

    #[test]
    fn test_update_respects_existing_suggestion_text() {
        let existing = "## Pending Tasks\n- [ ] Consider creating project documentation\n";
        let updated = update_task_tracker(existing, &bare_structure(), at(10));

        assert_eq!(updated.matches(DOC_SUGGESTION).count(), 1);
        assert!(updated.starts_with("## Pending Tasks\n- [ ] Consider adding test coverage (auto-suggested)\n"));
    }
}
