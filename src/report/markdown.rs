//! Small Markdown helpers shared by the report templates.

/// Render items as "- `item`" bullets, or a single "- <empty message>" bullet.
pub fn format_list<S: AsRef<str>>(items: &[S], empty_message: &str) -> String {
    if items.is_empty() {
        return format!("- {}", empty_message);
    }

    items
        .iter()
        .map(|item| format!("- `{}`", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render `true` as `Yes` and `false` as `No`
pub fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Insert `line` directly below the first line containing `heading`.
///
/// Returns the content unchanged when the heading is absent.
pub fn insert_after_heading(content: &str, heading: &str, line: &str) -> String {
    let mut lines: Vec<&str> = content.split('\n').collect();

    match lines.iter().position(|l| l.contains(heading)) {
        Some(idx) => {
            lines.insert(idx + 1, line);
            lines.join("\n")
        }
        None => content.to_string(),
    }
}

/// Slice the body of the first `heading` section: everything after the heading
/// text up to (not including) the newline before the next level-2 heading.
pub fn section_body<'a>(content: &'a str, heading: &str) -> Option<&'a str> {
    let start = content.find(heading)? + heading.len();
    let rest = &content[start..];

    let end = rest
        .match_indices("\n##")
        .map(|(idx, _)| idx)
        .find(|&idx| !rest[idx + 3..].starts_with('#'))
        .unwrap_or(rest.len());

    Some(&rest[..end])
}
