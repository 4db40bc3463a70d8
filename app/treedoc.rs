//! Command-line interface for treedoc.
//!
//! This binary walks a directory tree and writes the combined
//! tree-plus-contents document to stdout or to a file.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::exit;
use treedoc::output::{self, OutputFormat};
use treedoc::{DEFAULT_MAX_FILE_SIZE, DocumentResult, TreedocBuilder, TreedocOptions, treedoc};

/// treedoc — directory tree to Markdown document
#[derive(Parser)]
#[command(name = "treedoc", version, about, long_about = None)]
struct Cli {
    /// Root directory (default current dir)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// File extension to collect content from (can be repeated; defaults to a
    /// built-in set of common text/code extensions)
    #[arg(short = 'e', long = "extension")]
    extensions: Vec<String>,

    /// Match extensions case-insensitively
    #[arg(long)]
    case_insensitive: bool,

    /// Maximum file size in bytes (larger files get a placeholder)
    #[arg(long, default_value_t = DEFAULT_MAX_FILE_SIZE)]
    max_file_size: u64,

    /// Remove the file size cap
    #[arg(long, conflicts_with = "max_file_size")]
    no_size_limit: bool,

    /// Write the document to a file instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = CliFormat::Markdown)]
    format: CliFormat,

    /// Pretty output (indented JSON)
    #[arg(short, long)]
    pretty: bool,

    /// Skip hidden files and directories
    #[arg(long)]
    skip_hidden: bool,

    /// Honor the root .gitignore
    #[arg(long)]
    gitignore: bool,

    /// Ignore patterns (can be repeated)
    #[arg(short = 'I', long = "ignore")]
    ignore_patterns: Vec<String>,

    /// Max depth (unlimited if not set)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Record per-file byte sizes in JSON output
    #[arg(long)]
    include_size: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum CliFormat {
    Markdown,
    Text,
    Json,
    Tree,
}

impl Cli {
    fn into_options(self) -> (TreedocOptions, CliFormat, Option<PathBuf>, bool) {
        let mut builder = TreedocBuilder::new(self.root)
            .case_insensitive(self.case_insensitive)
            .respect_gitignore(self.gitignore)
            .include_hidden(!self.skip_hidden)
            .ignore_patterns(self.ignore_patterns)
            .include_file_size(self.include_size);

        if !self.extensions.is_empty() {
            builder = builder.extensions(self.extensions);
        }

        builder = if self.no_size_limit {
            builder.max_file_size(None)
        } else {
            builder.max_file_size(Some(self.max_file_size))
        };

        builder = if let Some(depth) = self.max_depth {
            builder.max_depth(depth)
        } else {
            builder.no_limit_depth()
        };

        (builder.build(), self.format, self.output, self.pretty)
    }
}

fn main() {
    let cli = Cli::parse();
    let (options, format, output_path, pretty) = cli.into_options();

    let result = match treedoc(options) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    let rendered = render(&result, format, pretty);
    match output_path {
        Some(path) => {
            if let Err(e) = std::fs::write(&path, &rendered) {
                eprintln!("Error: failed to write {}: {}", path.display(), e);
                exit(1);
            }
        }
        None => {
            if rendered.ends_with('\n') {
                print!("{}", rendered);
            } else {
                println!("{}", rendered);
            }
        }
    }
}

fn render(result: &DocumentResult, format: CliFormat, pretty: bool) -> String {
    match format {
        CliFormat::Markdown => output::format_result(result, OutputFormat::Markdown, pretty),
        CliFormat::Text => output::format_result(result, OutputFormat::Text, pretty),
        CliFormat::Json => output::format_result(result, OutputFormat::Json, pretty),
        CliFormat::Tree => result.tree.clone(),
    }
}
