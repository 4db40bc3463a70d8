//! Internal module for rendering the visual directory tree.

use crate::walk::{EntryFilter, sorted_children};
use std::path::Path;

/// A directory child prepared for rendering. `children` is `None` for files.
struct TreeNode {
    name: String,
    children: Option<Vec<TreeNode>>,
}

/// Renders the directory structure under `root` as an indented tree.
///
/// The first line is the root's own name with a trailing slash; every
/// descendant line carries `├── `/`└── ` connectors and `│   `/`    `
/// continuation prefixes reflecting ancestor nesting. Directories and files
/// share one byte-wise sorted namespace at each level.
pub(crate) fn render_tree(root: &Path, filter: &EntryFilter, max_depth: Option<usize>) -> String {
    let mut out = format!("{}/\n", root_name(root));
    if let Some(nodes) = build_nodes(root, 0, max_depth, filter) {
        render_nodes(&nodes, "", &mut out);
    }
    out
}

pub(crate) fn root_name(root: &Path) -> String {
    root.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string())
}

fn build_nodes(
    dir: &Path,
    depth: usize,
    max_depth: Option<usize>,
    filter: &EntryFilter,
) -> Option<Vec<TreeNode>> {
    if max_depth.is_some_and(|max| depth >= max) {
        return Some(Vec::new());
    }
    let entries = sorted_children(dir, filter)?;
    let mut nodes = Vec::with_capacity(entries.len());
    for entry in entries {
        if entry.is_dir {
            // An unreadable subdirectory is omitted; its siblings still render.
            if let Some(children) = build_nodes(&entry.path, depth + 1, max_depth, filter) {
                nodes.push(TreeNode {
                    name: entry.name,
                    children: Some(children),
                });
            }
        } else {
            nodes.push(TreeNode {
                name: entry.name,
                children: None,
            });
        }
    }
    Some(nodes)
}

fn render_nodes(nodes: &[TreeNode], prefix: &str, out: &mut String) {
    let last = nodes.len().saturating_sub(1);
    for (i, node) in nodes.iter().enumerate() {
        let (connector, continuation) = if i == last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };
        out.push_str(prefix);
        out.push_str(connector);
        out.push_str(&node.name);
        out.push('\n');
        if let Some(children) = &node.children {
            render_nodes(children, &format!("{prefix}{continuation}"), out);
        }
    }
}
