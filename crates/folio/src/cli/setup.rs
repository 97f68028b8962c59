use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Human-readable, colored when stdout is a terminal
    #[default]
    Text,
    /// The command result as pretty-printed JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "folio",
    bin_name = "folio",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Browse, search and edit a tree of folders and documents", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to $FOLIO_DATA_DIR, then the platform data dir)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputMode::Text, help_heading = "Options")]
    pub output: OutputMode,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Show the folder tree (default)
    #[command(alias = "ls", display_order = 1)]
    Tree,

    /// Find documents whose title contains a keyword
    #[command(alias = "s", display_order = 2)]
    Search {
        /// Keyword words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        keyword: Vec<String>,
    },

    /// Show folder and document totals
    #[command(display_order = 3)]
    Stats,

    /// Expand a collapsed folder or collapse an expanded one
    #[command(alias = "t", display_order = 10)]
    Toggle { folder_id: String },

    /// Expand a folder
    #[command(display_order = 11)]
    Expand { folder_id: String },

    /// Collapse a folder
    #[command(display_order = 12)]
    Collapse { folder_id: String },

    /// Collapse every folder
    #[command(display_order = 13)]
    CollapseAll,

    /// Select the document to work on
    #[command(display_order = 20)]
    Select { document_id: String },

    /// Print a document (the selected one by default)
    #[command(alias = "cat", display_order = 21)]
    Show { document_id: Option<String> },

    /// Create a folder
    #[command(display_order = 30)]
    Mkdir {
        /// Create inside this folder instead of at the root
        #[arg(long = "in", value_name = "FOLDER_ID")]
        parent: Option<String>,

        /// Folder name words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Create a document and select it
    #[command(alias = "n", display_order = 31)]
    New {
        /// Create inside this folder instead of at the root
        #[arg(long = "in", value_name = "FOLDER_ID")]
        folder: Option<String>,

        /// Initial content (defaults to the configured template)
        #[arg(long)]
        content: Option<String>,

        /// Title words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Rename a folder
    #[command(display_order = 32)]
    RenameFolder {
        folder_id: String,
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Rename a document
    #[command(alias = "mv", display_order = 33)]
    Rename {
        document_id: String,
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Replace a document's content (from --content or stdin)
    #[command(display_order = 34)]
    Write {
        document_id: String,
        #[arg(long)]
        content: Option<String>,
    },

    /// Delete an empty folder
    #[command(display_order = 35)]
    Rmdir { folder_id: String },

    /// Delete a document
    #[command(display_order = 36)]
    Rm { document_id: String },
}

/// Joins multi-word positional arguments.
pub fn words(parts: &[String]) -> String {
    parts.join(" ")
}
