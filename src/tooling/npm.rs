//! `package.json` script table parsing.

use std::path::Path;

use tracing::debug;

use super::{ToolCategory, ToolCommands};

/// Read the `scripts` table of `<root>/package.json` in file order.
///
/// A missing or malformed manifest yields an empty list.
pub fn read_scripts(root: &Path) -> Vec<(String, String)> {
    let package_json = root.join("package.json");

    let content = match std::fs::read_to_string(&package_json) {
        Ok(content) => content,
        Err(_) => return Vec::new(),
    };

    let json: serde_json::Value = match serde_json::from_str(&content) {
        Ok(json) => json,
        Err(e) => {
            debug!(error = %e, "Ignoring malformed package.json");
            return Vec::new();
        }
    };

    json.get("scripts")
        .and_then(|v| v.as_object())
        .map(|scripts| {
            scripts
                .iter()
                .map(|(name, cmd)| (name.clone(), cmd.as_str().unwrap_or_default().to_string()))
                .collect()
        })
        .unwrap_or_default()
}

/// Append an `npm run <name>` command for every script whose name matches a category.
pub fn collect_script_commands(scripts: &[(String, String)], commands: &mut ToolCommands) {
    for (name, _) in scripts {
        if let Some(category) = ToolCategory::classify(name) {
            commands.push(category, format!("npm run {}", name));
        }
    }
}
