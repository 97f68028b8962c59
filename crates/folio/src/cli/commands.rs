//! # CLI Layer
//!
//! This module is **one possible UI client** for folio.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Initializes logging output
//! - Handles argument parsing
//! - Formats output for human consumption
//! - Persists the session between invocations
//!
//! ## One Invocation
//!
//! 1. parse arguments, set up `tracing` on stderr
//! 2. resolve the data dir, load `folio.toml` and `session.json`
//! 3. refresh: load the tree, seed a welcome document, pick a selection
//! 4. dispatch the command through [`FolioApi`]
//! 5. save `session.json`, then print the result

use super::render::{self, Layout};
use super::setup::{words, Cli, Commands, OutputMode};
use anyhow::{Context, Result};
use clap::Parser;
use folioapp::api::FolioApi;
use folioapp::commands::CmdResult;
use folioapp::config::{resolve_data_dir, FolioConfig};
use folioapp::session::SessionState;
use folioapp::store::fs::FileStore;
use std::fs;
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const SESSION_FILE: &str = "session.json";

/// What a command's result should be printed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Listing,
    Stats,
    Document,
    Messages,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let data_dir = resolve_data_dir(cli.data_dir.clone())?;
    let config = FolioConfig::load(&data_dir)?;
    debug!(data_dir = %data_dir.display(), ?config, "configuration loaded");

    let layout = Layout {
        indent_width: config.indent_width,
        line_width: terminal_width(),
        show_stats: config.show_stats,
    };

    let state = load_session(&data_dir)?;
    let mut api = FolioApi::new(FileStore::new(&data_dir), state, config);
    let refreshed = api.refresh()?;

    let command = cli.command.unwrap_or(Commands::Tree);
    let (mut result, view) = dispatch(&mut api, command)?;
    let mut messages = refreshed.messages;
    messages.append(&mut result.messages);
    result.messages = messages;

    save_session(&data_dir, &api.session_state())?;

    match cli.output {
        OutputMode::Json => print!("{}", render::render_json(&result)),
        OutputMode::Text => print_text(&result, view, &layout),
    }
    Ok(())
}

fn dispatch(api: &mut FolioApi<FileStore>, command: Commands) -> Result<(CmdResult, View)> {
    let out = match command {
        Commands::Tree => (api.tree()?, View::Listing),
        Commands::Search { keyword } => (api.search(&words(&keyword))?, View::Listing),
        Commands::Stats => (api.stats()?, View::Stats),
        Commands::Toggle { folder_id } => (api.toggle_folder(&folder_id)?, View::Listing),
        Commands::Expand { folder_id } => (api.expand_folder(&folder_id)?, View::Listing),
        Commands::Collapse { folder_id } => (api.collapse_folder(&folder_id)?, View::Listing),
        Commands::CollapseAll => (api.collapse_all()?, View::Listing),
        Commands::Select { document_id } => (api.select_document(&document_id)?, View::Listing),
        Commands::Show { document_id } => {
            (api.show_document(document_id.as_deref())?, View::Document)
        }
        Commands::Mkdir { parent, name } => (
            api.create_folder(&words(&name), parent.as_deref())?,
            View::Listing,
        ),
        Commands::New {
            folder,
            content,
            title,
        } => (
            api.create_document(&words(&title), content.as_deref(), folder.as_deref())?,
            View::Messages,
        ),
        Commands::RenameFolder { folder_id, name } => (
            api.rename_folder(&folder_id, &words(&name))?,
            View::Messages,
        ),
        Commands::Rename { document_id, title } => (
            api.rename_document(&document_id, &words(&title))?,
            View::Messages,
        ),
        Commands::Write {
            document_id,
            content,
        } => {
            let content = match content {
                Some(content) => content,
                None => read_stdin()?,
            };
            (api.update_document(&document_id, &content)?, View::Messages)
        }
        Commands::Rmdir { folder_id } => (api.delete_folder(&folder_id)?, View::Messages),
        Commands::Rm { document_id } => (api.delete_document(&document_id)?, View::Messages),
    };
    Ok(out)
}

fn print_text(result: &CmdResult, view: View, layout: &Layout) {
    match view {
        View::Listing => print!("{}", render::render_listing(result, layout)),
        View::Stats => {
            if let Some(stats) = &result.stats {
                println!("{}", render::render_stats(stats));
            }
        }
        View::Document => {
            if let Some(document) = &result.document {
                print!("{}", render::render_document(document));
            }
        }
        View::Messages => {}
    }
    print!("{}", render::render_messages(&result.messages));
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // A second init (e.g. from tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn terminal_width() -> usize {
    console::Term::stdout()
        .size_checked()
        .map(|(_, cols)| cols as usize)
        .unwrap_or(render::LINE_WIDTH)
}

fn read_stdin() -> Result<String> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        anyhow::bail!("No content given: pass --content or pipe it on stdin");
    }
    let mut buf = String::new();
    stdin
        .read_to_string(&mut buf)
        .context("Failed to read content from stdin")?;
    Ok(buf)
}

fn session_path(dir: &Path) -> PathBuf {
    dir.join(SESSION_FILE)
}

fn load_session(dir: &Path) -> Result<SessionState> {
    let path = session_path(dir);
    if !path.exists() {
        return Ok(SessionState::default());
    }
    let content =
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;
    match serde_json::from_str(&content) {
        Ok(state) => Ok(state),
        Err(e) => {
            // Only UI state lives here; start over rather than refuse to run
            warn!(path = %path.display(), error = %e, "ignoring unreadable session file");
            Ok(SessionState::default())
        }
    }
}

fn save_session(dir: &Path, state: &SessionState) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    let content = serde_json::to_string_pretty(state)?;
    let tmp = dir.join(format!(".{}.tmp", SESSION_FILE));
    fs::write(&tmp, content)?;
    fs::rename(&tmp, session_path(dir))?;
    Ok(())
}
