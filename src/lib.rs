//! # Treedoc
//!
//! `treedoc` walks a directory tree and emits a single Markdown document
//! combining a visual folder-structure tree with the textual contents of
//! files whose extension is on a configurable allow-list. The output is meant
//! for feeding codebases into documentation pipelines or LLM context windows.
//!
//! Both traversals are deterministic: children are sorted byte-wise by name
//! at every level, symbolic links are never followed or listed, and an
//! unchanged tree renders byte-identically across runs. Per-file problems
//! (too large, unreadable, undecodable) become inline placeholders instead of
//! aborting the run; only an invalid root is fatal.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use treedoc::{TreedocBuilder, treedoc};
//! use treedoc::output::{self, OutputFormat};
//!
//! let options = TreedocBuilder::new("./my-project")
//!     .extensions([".rs", ".md", ".toml"])
//!     .max_file_size(Some(1024 * 1024)) // 1 MiB
//!     .build();
//!
//! let result = treedoc(options).expect("Failed to scan directory");
//!
//! println!("{}", output::format_result(&result, OutputFormat::Markdown, false));
//! ```

mod collect;
mod engine;
mod error;
mod options;
pub mod output;
mod tree;
mod types;
mod walk;

pub use engine::{treedoc, validate_root};
pub use error::TreedocError;
pub use options::{DEFAULT_MAX_FILE_SIZE, ExtensionSet, TreedocBuilder, TreedocOptions};
pub use types::{CollectedFile, DocumentResult, FileStatus};
