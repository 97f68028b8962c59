//! # Configuration
//!
//! Folio configuration is loaded with [`confique`] from, in priority order:
//!
//! 1. **Environment variables**: `FOLIO_DATA_DIR`, `FOLIO_INDENT_WIDTH`, ...
//! 2. **Config file**: `folio.toml` inside the data directory.
//! 3. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! The data directory itself cannot come from `folio.toml`, since that file
//! lives inside it. Clients resolve it first with [`resolve_data_dir`].
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_dir` | platform data dir | Where `tree.json`, `session.json` and `folio.toml` live |
//! | `indent_width` | `2` | Spaces per depth level in the tree view |
//! | `show_stats` | `true` | Print the stats bar under the tree |
//! | `seed_welcome` | `true` | Create a welcome document when the tree is empty |
//! | `new_document_template` | `# {title}\n\n` | Initial content of new documents |

use crate::error::{FolioError, Result};
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "folio.toml";

/// Configuration for folio, stored in `folio.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FolioConfig {
    /// Data directory override. Only honored from the environment.
    #[config(env = "FOLIO_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Spaces per depth level when printing the tree.
    #[config(env = "FOLIO_INDENT_WIDTH", default = 2)]
    pub indent_width: usize,

    /// Print folder and document totals under the tree.
    #[config(env = "FOLIO_SHOW_STATS", default = true)]
    pub show_stats: bool,

    /// Create a welcome document when a refresh finds an empty tree.
    #[config(env = "FOLIO_SEED_WELCOME", default = true)]
    pub seed_welcome: bool,

    /// Initial content for new documents. `{title}` is replaced by the title.
    #[config(env = "FOLIO_NEW_DOCUMENT_TEMPLATE", default = "# {title}\n\n")]
    pub new_document_template: String,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            indent_width: 2,
            show_stats: true,
            seed_welcome: true,
            new_document_template: "# {title}\n\n".to_string(),
        }
    }
}

impl FolioConfig {
    /// Loads env vars and `<dir>/folio.toml` on top of the defaults.
    /// A missing file is fine.
    pub fn load(dir: &Path) -> Result<Self> {
        FolioConfig::builder()
            .env()
            .file(dir.join(CONFIG_FILE))
            .load()
            .map_err(|e| FolioError::Config(e.to_string()))
    }

    /// Initial content for a new document titled `title`.
    pub fn render_new_document(&self, title: &str) -> String {
        self.new_document_template.replace("{title}", title)
    }
}

/// The platform data directory, e.g. `~/.local/share/folio` on Linux.
pub fn default_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "folio", "folio")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| FolioError::Config("Could not determine a home directory".to_string()))
}

/// Picks the data directory: explicit override, then `FOLIO_DATA_DIR`, then
/// the platform default.
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    let from_env = FolioConfig::builder()
        .env()
        .load()
        .map_err(|e| FolioError::Config(e.to_string()))?
        .data_dir;
    match from_env {
        Some(dir) => Ok(dir),
        None => default_data_dir(),
    }
}
