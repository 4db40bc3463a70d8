use std::fs;
use tempfile::tempdir;
use treedoc::output::{self, OutputFormat};
use treedoc::{TreedocBuilder, treedoc};

#[test]
fn integration_full_flow() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("test_project");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("README.md"), "# Project").unwrap();
    fs::write(root.join("config.json"), r#"{"version": "1.0"}"#).unwrap();
    fs::create_dir(root.join("src")).unwrap();
    fs::write(root.join("src/main.py"), "print('Hello World')").unwrap();

    let result = treedoc(TreedocBuilder::new(&root).build()).unwrap();
    let markdown = output::format_result(&result, OutputFormat::Markdown, false);

    assert!(markdown.contains("# test_project - Project Documentation"));
    assert!(markdown.contains("## Folder Structure"));
    assert!(markdown.contains("## File Contents"));
    assert!(markdown.contains("README.md"));
    assert!(markdown.contains("config.json"));
    assert!(markdown.contains("# Project"));
    assert!(markdown.contains(r#"{"version": "1.0"}"#));
    assert!(markdown.contains("print('Hello World')"));

    // Sections appear in document order.
    let title = markdown.find("# test_project - Project Documentation").unwrap();
    let structure = markdown.find("## Folder Structure").unwrap();
    let contents = markdown.find("## File Contents").unwrap();
    assert!(title < structure && structure < contents);
}

#[test]
fn integration_write_to_file() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("proj");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("lib.rs"), "pub fn answer() -> u32 { 42 }").unwrap();

    let result = treedoc(TreedocBuilder::new(&root).build()).unwrap();
    let out_path = dir.path().join("proj.md");
    output::write_result_to_file(&result, OutputFormat::Markdown, &out_path, false).unwrap();

    let written = fs::read_to_string(&out_path).unwrap();
    assert_eq!(
        written,
        output::format_result(&result, OutputFormat::Markdown, false)
    );
    assert!(written.contains("```rust"));
}

#[test]
fn integration_json_format() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("jsonable");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("note.md"), "note").unwrap();

    let options = TreedocBuilder::new(&root).include_file_size(true).build();
    let result = treedoc(options).unwrap();
    let json = output::format_result(&result, OutputFormat::Json, true);

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["root_name"], "jsonable");
    assert_eq!(value["files"][0]["path"], "note.md");
    assert_eq!(value["files"][0]["status"]["kind"], "included");
    assert_eq!(value["files"][0]["size"], 4);
}

#[test]
fn integration_text_format() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("plain");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("a.txt"), "alpha").unwrap();

    let result = treedoc(TreedocBuilder::new(&root).build()).unwrap();
    let text = output::format_result(&result, OutputFormat::Text, false);
    assert!(text.contains("Folder Structure:"));
    assert!(text.contains("File Contents:"));
    assert!(text.contains("--- a.txt ---"));
    assert!(text.contains("alpha"));
}

#[test]
fn integration_gitignore_opt_in() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("repo");
    fs::create_dir(&root).unwrap();
    fs::write(root.join(".gitignore"), "*.log\n").unwrap();
    fs::write(root.join("main.rs"), "fn main() {}").unwrap();
    fs::write(root.join("debug.log"), "log content").unwrap();

    // Default: everything non-symlink is visible.
    let options = TreedocBuilder::new(&root).extensions([".rs", ".log"]).build();
    let result = treedoc(options).unwrap();
    assert!(result.tree.contains("debug.log"));
    assert_eq!(result.files.len(), 2);

    let options = TreedocBuilder::new(&root)
        .extensions([".rs", ".log"])
        .respect_gitignore(true)
        .build();
    let result = treedoc(options).unwrap();
    assert!(!result.tree.contains("debug.log"));
    assert_eq!(result.files.len(), 1);
    assert!(result.files[0].path.ends_with("main.rs"));
}

#[test]
fn integration_max_depth() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("deep");
    fs::create_dir_all(root.join("level1/level2")).unwrap();
    fs::write(root.join("top.txt"), "top").unwrap();
    fs::write(root.join("level1/mid.txt"), "mid").unwrap();
    fs::write(root.join("level1/level2/bottom.txt"), "bottom").unwrap();

    let options = TreedocBuilder::new(&root).max_depth(2).build();
    let result = treedoc(options).unwrap();
    assert!(result.tree.contains("top.txt"));
    assert!(result.tree.contains("mid.txt"));
    assert!(result.tree.contains("level2"));
    assert!(!result.tree.contains("bottom.txt"));
    assert_eq!(result.files.len(), 2);
}

#[test]
fn integration_unmatched_files_appear_in_tree_only() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("mixed");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("kept.md"), "kept").unwrap();
    fs::write(root.join("skipped.bin"), "skipped").unwrap();

    let options = TreedocBuilder::new(&root).extensions([".md"]).build();
    let result = treedoc(options).unwrap();
    // The tree is purely structural; extension filtering applies to content only.
    assert!(result.tree.contains("skipped.bin"));
    assert_eq!(result.files.len(), 1);

    let markdown = output::format_result(&result, OutputFormat::Markdown, false);
    let contents_section = &markdown[markdown.find("## File Contents").unwrap()..];
    assert!(!contents_section.contains("skipped.bin"));
}
