//! Internal module for collecting file contents under a root.

use crate::options::TreedocOptions;
use crate::types::{CollectedFile, FileStatus};
use crate::walk::{EntryFilter, sorted_children};
use std::fs;
use std::path::Path;
#[cfg(feature = "logging")]
use tracing;

/// Walks `root` depth-first and collects every file whose extension is on the
/// allow-list. Mirrors the tree renderer's traversal rules: byte-wise sorted
/// children, symlinks excluded, directories always descended.
pub(crate) fn collect_files(
    root: &Path,
    filter: &EntryFilter,
    options: &TreedocOptions,
) -> Vec<CollectedFile> {
    let mut files = Vec::new();
    collect_level(root, root, 0, filter, options, &mut files);
    files
}

fn collect_level(
    dir: &Path,
    root: &Path,
    depth: usize,
    filter: &EntryFilter,
    options: &TreedocOptions,
    out: &mut Vec<CollectedFile>,
) {
    if options.max_depth.is_some_and(|max| depth >= max) {
        return;
    }
    // An unreadable directory drops out along with its subtree.
    let Some(children) = sorted_children(dir, filter) else {
        return;
    };
    for child in children {
        if child.is_dir {
            collect_level(&child.path, root, depth + 1, filter, options, out);
        } else if options.extensions.matches(&child.path) {
            out.push(collect_one(&child.path, root, options));
        }
    }
}

fn collect_one(path: &Path, root: &Path, options: &TreedocOptions) -> CollectedFile {
    let relative = path.strip_prefix(root).unwrap_or(path).to_path_buf();
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) => {
            return CollectedFile {
                path: relative,
                content: None,
                status: FileStatus::Unreadable {
                    reason: e.to_string(),
                },
                size: None,
            };
        }
    };
    let size = metadata.len();
    let reported_size = options.include_file_size.then_some(size);
    // The size check precedes any read; an oversized file is never opened.
    if let Some(limit) = options.max_file_size {
        if size > limit {
            #[cfg(feature = "logging")]
            tracing::debug!(
                "File too large ({} > {}), skipping content: {}",
                size,
                limit,
                path.display()
            );
            return CollectedFile {
                path: relative,
                content: None,
                status: FileStatus::TooLarge { size },
                size: reported_size,
            };
        }
    }
    match fs::read(path) {
        // Invalid UTF-8 is replaced rather than treated as an error.
        Ok(bytes) => CollectedFile {
            path: relative,
            content: Some(String::from_utf8_lossy(&bytes).into_owned()),
            status: FileStatus::Included,
            size: reported_size,
        },
        Err(e) => CollectedFile {
            path: relative,
            content: None,
            status: FileStatus::Unreadable {
                reason: e.to_string(),
            },
            size: reported_size,
        },
    }
}
