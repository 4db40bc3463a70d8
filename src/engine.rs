use crate::collect::collect_files;
use crate::error::TreedocError;
use crate::options::TreedocOptions;
use crate::tree::{render_tree, root_name};
use crate::types::DocumentResult;
use crate::walk::EntryFilter;
use std::fs;
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;

/// Validates the root path and returns its canonicalized absolute form.
///
/// # Errors
///
/// Returns [`TreedocError::InvalidRoot`] if the path does not exist or is not
/// a directory.
pub fn validate_root(path: &Path) -> Result<PathBuf, TreedocError> {
    let metadata = fs::metadata(path).map_err(|_| {
        TreedocError::InvalidRoot(format!("path does not exist: {}", path.display()))
    })?;
    if !metadata.is_dir() {
        return Err(TreedocError::InvalidRoot(format!(
            "not a directory: {}",
            path.display()
        )));
    }
    fs::canonicalize(path).map_err(|e| TreedocError::io(path, e))
}

/// Runs the full pipeline: validate the root, render the directory tree, and
/// collect matching file contents.
///
/// The tree renderer and the content collector each perform their own
/// traversal of the same canonical root; their ordering rules match, so the
/// collected files appear in the same order as in the tree.
pub fn treedoc(options: TreedocOptions) -> Result<DocumentResult, TreedocError> {
    #[cfg(feature = "logging")]
    tracing::debug!("Starting treedoc with root: {}", options.root.display());
    let root = validate_root(&options.root)?;
    let filter = EntryFilter::new(&root, &options)?;
    let tree = render_tree(&root, &filter, options.max_depth);
    let files = collect_files(&root, &filter, &options);
    Ok(DocumentResult {
        root_name: root_name(&root),
        root,
        tree,
        files,
    })
}
