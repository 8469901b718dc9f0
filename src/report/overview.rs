//! `project-overview.md` rendering and merging.

use chrono::NaiveDateTime;

use super::markdown::{format_list, section_body, yes_no};
use super::TIMESTAMP_FORMAT;
use crate::config::AnalyzerConfig;
use crate::context::ProjectAnalysis;
use crate::ecosystem::join_tags;
use crate::git::RepositoryStatus;

pub const ANALYSIS_VERSION: &str = "1.0";
/// Heading of the user-owned section carried across updates
pub const CUSTOM_NOTES_HEADING: &str = "## Custom Notes";
/// Only this many configuration files are listed
pub const MAX_LISTED_CONFIG_FILES: usize = 10;

/// Primary language: most counted language, then first tag, then `unknown`
pub fn primary_language(analysis: &ProjectAnalysis) -> &str {
    analysis
        .structure
        .languages
        .primary()
        .or_else(|| analysis.tags.first().map(|t| t.as_str()))
        .unwrap_or("unknown")
}

/// Render the full overview document.
pub fn render_overview(
    config: &AnalyzerConfig,
    analysis: &ProjectAnalysis,
    timestamp: NaiveDateTime,
) -> String {
    let timestamp = timestamp.format(TIMESTAMP_FORMAT).to_string();
    let structure = &analysis.structure;
    let tools = &analysis.tools;
    let tags = join_tags(&analysis.tags);

    let languages = structure
        .languages
        .iter()
        .map(|(lang, count)| format!("{} ({} files)", lang, count))
        .collect::<Vec<_>>()
        .join(", ");

    let config_files: Vec<&String> = structure
        .config_files
        .iter()
        .take(MAX_LISTED_CONFIG_FILES)
        .collect();

    // Trailing double spaces are Markdown line breaks
    let mut content = format!(
        "# Project Overview\n\n**Generated:** {}  \n**Project Path:** {}  \n**Analysis Version:** {}  \n\n",
        timestamp,
        config.project_root.display(),
        ANALYSIS_VERSION,
    );

    content.push_str(&format!(
        r#"## Project Summary
This appears to be a {tags} project with {total} files.

## Technology Stack
- **Primary Language:** {primary}
- **Project Types:** {tags}
- **Languages Detected:** {languages}

## Project Structure
```
Total Files: {total}
Source Directories: {source_count}
Test Directories: {test_count}
Config Files: {config_count}
Documentation Files: {doc_count}
```

### Key Directories
{source_dirs}

### Test Directories
{test_dirs}

### Configuration Files
{config_files}

### Documentation
{doc_files}

## Development Environment
### Build Commands
{build}

### Test Commands
{test}

### Linting Commands
{lint}

### Formatting Commands
{format}

"#,
        tags = tags,
        total = structure.total_files,
        primary = primary_language(analysis),
        languages = languages,
        source_count = structure.source_dirs.len(),
        test_count = structure.test_dirs.len(),
        config_count = structure.config_files.len(),
        doc_count = structure.doc_files.len(),
        source_dirs = format_list(&structure.source_dirs, "No source directories identified"),
        test_dirs = format_list(&structure.test_dirs, "No test directories identified"),
        config_files = format_list(&config_files, "No configuration files found"),
        doc_files = format_list(&structure.doc_files, "No documentation files found"),
        build = format_list(&tools.build, "No build commands detected"),
        test = format_list(&tools.test, "No test commands detected"),
        lint = format_list(&tools.lint, "No linting commands detected"),
        format = format_list(&tools.format, "No formatting commands detected"),
    ));

    content.push_str(&render_repository(&analysis.repository));

    content.push_str(&format!(
        r#"
## Next Steps
1. Review and understand the project's main purpose
2. Identify any immediate development tasks
3. Set up development environment if needed
4. Review existing documentation and code patterns

## Questions for User
1. What is the primary goal or purpose of this project?
2. Are there any specific tasks or features you'd like to work on?
3. Are there any particular coding standards or patterns to follow?
4. Do you need help setting up the development environment?

---
*This analysis was generated automatically on {}*
"#,
        timestamp
    ));

    content
}

fn render_repository(repository: &RepositoryStatus) -> String {
    let mut block = format!(
        "## Git Repository Status\n- **Is Git Repo:** {}\n",
        yes_no(repository.is_repo)
    );

    if repository.is_repo {
        block.push_str(&format!(
            "- **Current Branch:** {}\n- **Has Uncommitted Changes:** {}\n- **Change Count:** {}\n\n### Recent Commits\n{}\n",
            repository.branch.as_deref().unwrap_or("unknown"),
            yes_no(repository.dirty.unwrap_or(false)),
            repository.change_count.unwrap_or(0),
            format_list(&repository.recent_commits, "No recent commits"),
        ));
    }

    block
}

/// Carry the `## Custom Notes` section of `existing` over to `rendered`.
///
/// Without such a section the freshly rendered text is returned as is.
pub fn merge_custom_notes(existing: &str, rendered: String) -> String {
    match section_body(existing, CUSTOM_NOTES_HEADING) {
        Some(notes) => format!("{}\n{}{}", rendered, CUSTOM_NOTES_HEADING, notes),
        None => rendered,
    }
}
