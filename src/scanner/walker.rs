use std::path::{Path, PathBuf};

use ignore::{DirEntry, WalkBuilder};
use tracing::{debug, warn};

use super::rules::{self, DirKind};
use super::ProjectStructure;
use crate::error::Result;

pub struct TreeScanner {
    root: PathBuf,
}

impl TreeScanner {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Walk the tree once and classify every directory and file.
    ///
    /// Hidden and excluded directories are pruned. Entries that cannot be read
    /// are skipped with a warning and counted in `skipped_entries`.
    pub fn scan(&self) -> Result<ProjectStructure> {
        // An unreadable root is fatal; unreadable subtrees are not
        std::fs::read_dir(&self.root)?;

        let mut structure = ProjectStructure::default();

        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .parents(false)
            .ignore(false)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(|entry| entry.depth() == 0 || !Self::is_pruned(entry))
            .build();

        for result in walker {
            let entry = match result {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable entry");
                    structure.skipped_entries += 1;
                    continue;
                }
            };

            // Links to directories are neither followed nor counted as files
            if Self::is_dir_link(&entry) {
                debug!(path = %entry.path().display(), "Skipping directory symlink");
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            let rel_path = self.relative_path(entry.path());

            if Self::is_dir(&entry) {
                match rules::classify_dir(&name) {
                    Some(DirKind::Test) => structure.test_dirs.push(rel_path),
                    Some(DirKind::Source) => structure.source_dirs.push(rel_path),
                    None => {}
                }
                continue;
            }

            structure.total_files += 1;

            if rules::is_config_file(&name) {
                structure.config_files.push(rel_path.clone());
            }

            if rules::is_doc_file(&name) {
                structure.doc_files.push(rel_path);
            }

            if let Some(language) = entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .and_then(rules::language_for_extension)
            {
                structure.languages.increment(language);
            }
        }

        debug!(
            total_files = structure.total_files,
            source_dirs = structure.source_dirs.len(),
            test_dirs = structure.test_dirs.len(),
            skipped = structure.skipped_entries,
            "Project tree scanned"
        );

        Ok(structure)
    }

    fn is_dir(entry: &DirEntry) -> bool {
        entry.file_type().map_or(false, |ft| ft.is_dir())
    }

    fn is_dir_link(entry: &DirEntry) -> bool {
        entry.path_is_symlink() && entry.path().is_dir()
    }

    fn is_pruned(entry: &DirEntry) -> bool {
        Self::is_dir(entry) && rules::is_excluded_dir(&entry.file_name().to_string_lossy())
    }

    /// Root-relative, `/`-separated path; the root itself is `.`
    fn relative_path(&self, path: &Path) -> String {
        let rel = path.strip_prefix(&self.root).unwrap_or(path);
        let parts: Vec<_> = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect();

        if parts.is_empty() {
            ".".to_string()
        } else {
            parts.join("/")
        }
    }
}
