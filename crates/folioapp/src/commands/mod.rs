//! # Command Layer
//!
//! Each user operation lives in its own submodule as a plain function over a
//! [`TreeSource`](crate::store::TreeSource) and a [`Session`](crate::session::Session).
//!
//! ## Mutation Protocol
//!
//! Every command that changes data follows the same three steps:
//!
//! 1. reject obviously bad input (blank names) before touching the store
//! 2. ask the store to apply the change
//! 3. fetch the whole tree again and hand it to the session
//!
//! If step 2 fails the session is left exactly as it was, so the user keeps
//! seeing the tree they acted on. There is no request sequencing; the last
//! reload wins.
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], never strings:
//!
//! - `nodes`: the projected tree (or search results) after the command
//! - `document`: the document a command is about (`show`, `new`)
//! - `folder`: the folder a command created
//! - `stats`: folder and document totals
//! - `messages`: leveled notifications for the user
//!
//! How any of this is printed is the client's business.
//!
//! ## Testing Strategy
//!
//! Command tests run against [`MemStore`](crate::store::memory::MemStore) and
//! cover the branches and error paths of each command. Most of the crate's
//! behavioral tests live here.
//!
//! ## Command Modules
//!
//! - [`refresh`]: initial load, welcome document, first selection
//! - [`create`]: new folders and documents
//! - [`rename`]: rename folders and documents
//! - [`update`]: replace document content
//! - [`delete`]: remove folders and documents
//! - [`select`]: pick the document being edited
//! - [`folding`]: expand, collapse and toggle folders
//! - [`listing`]: tree view, search and stats
//! - [`show`]: fetch a document with its content
//! - [`helpers`]: reload and input checks shared by the above

use crate::model::{Document, Folder};
use crate::session::Session;
use crate::stats::TreeStats;
use crate::view::DisplayNode;
use serde::Serialize;

pub mod create;
pub mod delete;
pub mod folding;
pub mod helpers;
pub mod listing;
pub mod refresh;
pub mod rename;
pub mod select;
pub mod show;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<DisplayNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<Document>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<Folder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<TreeStats>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_nodes(mut self, nodes: Vec<DisplayNode>) -> Self {
        self.nodes = nodes;
        self
    }

    pub fn with_document(mut self, document: Document) -> Self {
        self.document = Some(document);
        self
    }

    pub fn with_folder(mut self, folder: Folder) -> Self {
        self.folder = Some(folder);
        self
    }

    pub fn with_stats(mut self, stats: TreeStats) -> Self {
        self.stats = Some(stats);
        self
    }

    /// Attaches the current projection and stats of `session`.
    pub fn with_view(self, session: &Session) -> Self {
        self.with_nodes(session.view()).with_stats(session.stats())
    }
}
