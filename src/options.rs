use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Default cap on collected file size: 1 MiB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024;

const DEFAULT_EXTENSIONS: &[&str] = &[
    ".c", ".cfg", ".cpp", ".css", ".go", ".h", ".html", ".ini", ".java", ".js", ".json", ".md",
    ".py", ".rb", ".rs", ".sh", ".sql", ".toml", ".ts", ".txt", ".xml", ".yaml", ".yml",
];

/// Allow-list of file suffixes controlling which files' content is collected.
///
/// Entries are normalized to carry a leading dot (`"md"` and `".md"` are
/// equivalent). Matching is byte-exact and case-sensitive unless the set was
/// built with `case_insensitive`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtensionSet {
    extensions: BTreeSet<String>,
    case_insensitive: bool,
}
impl ExtensionSet {
    pub fn new<I, S>(extensions: I, case_insensitive: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .filter_map(|ext| {
                let ext = ext.as_ref().trim();
                if ext.is_empty() {
                    return None;
                }
                let ext = if ext.starts_with('.') {
                    ext.to_string()
                } else {
                    format!(".{ext}")
                };
                Some(if case_insensitive {
                    ext.to_ascii_lowercase()
                } else {
                    ext
                })
            })
            .collect();
        Self {
            extensions,
            case_insensitive,
        }
    }
    /// Whether the path's suffix is a member of the set. Files without an
    /// extension never match.
    pub fn matches(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        let suffix = format!(".{ext}");
        if self.case_insensitive {
            self.extensions.contains(&suffix.to_ascii_lowercase())
        } else {
            self.extensions.contains(&suffix)
        }
    }
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}
impl Default for ExtensionSet {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSIONS.iter().copied(), false)
    }
}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreedocOptions {
    pub root: PathBuf,
    pub extensions: ExtensionSet,
    pub max_file_size: Option<u64>,
    pub respect_gitignore: bool,
    pub include_hidden: bool,
    pub max_depth: Option<usize>,
    pub ignore_patterns: Vec<String>,
    pub include_file_size: bool,
}
impl Default for TreedocOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extensions: ExtensionSet::default(),
            max_file_size: Some(DEFAULT_MAX_FILE_SIZE),
            respect_gitignore: false,
            include_hidden: true,
            max_depth: None,
            ignore_patterns: Vec::new(),
            include_file_size: false,
        }
    }
}
#[derive(Debug, Default)]
pub struct TreedocBuilder {
    options: TreedocOptions,
    extensions: Option<Vec<String>>,
    case_insensitive: bool,
}
impl TreedocBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: TreedocOptions {
                root: root.into(),
                ..Default::default()
            },
            extensions: None,
            case_insensitive: false,
        }
    }
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = Some(extensions.into_iter().map(Into::into).collect());
        self
    }
    pub fn case_insensitive(mut self, yes: bool) -> Self {
        self.case_insensitive = yes;
        self
    }
    pub fn max_file_size(mut self, limit: Option<u64>) -> Self {
        self.options.max_file_size = limit;
        self
    }
    pub fn respect_gitignore(mut self, yes: bool) -> Self {
        self.options.respect_gitignore = yes;
        self
    }
    pub fn include_hidden(mut self, yes: bool) -> Self {
        self.options.include_hidden = yes;
        self
    }
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = Some(depth);
        self
    }
    pub fn no_limit_depth(mut self) -> Self {
        self.options.max_depth = None;
        self
    }
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.ignore_patterns = patterns;
        self
    }
    pub fn include_file_size(mut self, yes: bool) -> Self {
        self.options.include_file_size = yes;
        self
    }
    pub fn build(mut self) -> TreedocOptions {
        self.options.extensions = match self.extensions {
            Some(list) => ExtensionSet::new(list, self.case_insensitive),
            None => ExtensionSet::new(DEFAULT_EXTENSIONS.iter().copied(), self.case_insensitive),
        };
        self.options
    }
}
