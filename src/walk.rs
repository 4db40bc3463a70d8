//! Internal directory listing shared by the tree renderer and the content
//! collector, so both traversals see the same children in the same order.

use crate::error::TreedocError;
use crate::options::TreedocOptions;
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::fs;
use std::path::{Path, PathBuf};

/// One visible child of a directory. Symlinks and special files (sockets,
/// FIFOs, devices) are filtered out before this is built.
pub(crate) struct DirectoryEntry {
    pub(crate) name: String,
    pub(crate) path: PathBuf,
    pub(crate) is_dir: bool,
}

/// Per-run entry filter, compiled once from the options.
pub(crate) struct EntryFilter {
    root: PathBuf,
    ignore_set: Option<globset::GlobSet>,
    gitignore: Option<Gitignore>,
    include_hidden: bool,
}
impl EntryFilter {
    pub(crate) fn new(root: &Path, options: &TreedocOptions) -> Result<Self, TreedocError> {
        let ignore_set = if !options.ignore_patterns.is_empty() {
            let mut builder = globset::GlobSetBuilder::new();
            for pattern in &options.ignore_patterns {
                let glob = globset::Glob::new(pattern).map_err(|e| {
                    TreedocError::Walk(format!("Invalid glob pattern '{}': {}", pattern, e))
                })?;
                builder.add(glob);
            }
            Some(
                builder
                    .build()
                    .map_err(|e| TreedocError::Walk(format!("Failed to build glob set: {}", e)))?,
            )
        } else {
            None
        };
        let gitignore = if options.respect_gitignore {
            build_gitignore(root)?
        } else {
            None
        };
        Ok(Self {
            root: root.to_path_buf(),
            ignore_set,
            gitignore,
            include_hidden: options.include_hidden,
        })
    }

    fn keep(&self, path: &Path, name: &str, is_dir: bool) -> bool {
        if !self.include_hidden && name.starts_with('.') {
            return false;
        }
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        if let Some(set) = &self.ignore_set {
            if set.is_match(relative) {
                return false;
            }
        }
        if let Some(gitignore) = &self.gitignore {
            if gitignore.matched(relative, is_dir).is_ignore() {
                return false;
            }
        }
        true
    }
}

fn build_gitignore(root: &Path) -> Result<Option<Gitignore>, TreedocError> {
    let path = root.join(".gitignore");
    if !path.is_file() {
        return Ok(None);
    }
    let mut builder = GitignoreBuilder::new(root);
    if let Some(e) = builder.add(&path) {
        return Err(TreedocError::Walk(format!(
            "Failed to read {}: {}",
            path.display(),
            e
        )));
    }
    let gitignore = builder
        .build()
        .map_err(|e| TreedocError::Walk(format!("Failed to build gitignore matcher: {}", e)))?;
    Ok(Some(gitignore))
}

/// Lists the immediate children of `dir`, sorted byte-wise by name.
///
/// Symlinks are invisible to every traversal; following them is the only way
/// a filesystem cycle could form. Returns `None` when the directory itself
/// cannot be read (permission denied); callers omit it and continue with its
/// siblings.
pub(crate) fn sorted_children(dir: &Path, filter: &EntryFilter) -> Option<Vec<DirectoryEntry>> {
    let read = fs::read_dir(dir).ok()?;
    let mut children = Vec::new();
    for entry in read.flatten() {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_symlink() {
            continue;
        }
        let is_dir = file_type.is_dir();
        if !is_dir && !file_type.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        let path = entry.path();
        if !filter.keep(&path, &name, is_dir) {
            continue;
        }
        children.push(DirectoryEntry { name, path, is_dir });
    }
    children.sort_by(|a, b| a.name.cmp(&b.name));
    Some(children)
}
