use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Why a file's content was or was not collected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FileStatus {
    /// Content was read and is present on the entry.
    Included,
    /// The file exceeded the configured size cap; it was never opened.
    TooLarge { size: u64 },
    /// The file passed the size check but could not be read.
    Unreadable { reason: String },
}

/// A single collected file with its root-relative path and content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectedFile {
    /// Path relative to the scanned root.
    pub path: PathBuf,
    /// The file's text content, decoded best-effort.
    ///
    /// `None` unless `status` is [`FileStatus::Included`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Outcome of collecting this file.
    pub status: FileStatus,
    /// The size of the file in bytes, if requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

/// The complete result of a treedoc run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentResult {
    /// Canonicalized root directory the run was performed against.
    pub root: PathBuf,
    /// File name of the root directory, used for document headings.
    pub root_name: String,
    /// A visual tree representation of the directory structure.
    pub tree: String,
    /// Files whose extension matched the allow-list, in traversal order.
    pub files: Vec<CollectedFile>,
}
