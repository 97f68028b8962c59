//! # Persistence Collaborator
//!
//! The core never edits the tree it displays. Every change is sent to a
//! [`TreeSource`], and once the source confirms it, the caller fetches the
//! whole tree again and hands it to [`crate::session::Session::replace_tree`].
//!
//! ```text
//! command ──► TreeSource::rename_folder(..) ──ok──► TreeSource::fetch_tree()
//!                                                         │
//!                                                         ▼
//!                                          Session::replace_tree(tree)
//! ```
//!
//! ## Full Reloads
//!
//! Every mutation is followed by a full reload of the tree. Patching the
//! session's copy in place is the first optimization if trees grow large.
//!
//! ## Contract
//!
//! - New folders and documents are appended to the end of their container.
//! - Names and titles are trimmed; blank ones are rejected with
//!   [`FolioError::Validation`](crate::error::FolioError::Validation).
//! - Unknown ids fail with `FolderNotFound` / `DocumentNotFound`.
//! - Deleting a folder that still has children or documents fails with
//!   `FolderNotEmpty`.
//! - Renames and content updates bump `updated_at`.
//!
//! ## Implementations
//!
//! - [`memory::MemStore`]: in-memory tree, for tests and embedding.
//! - [`fs::FileStore`]: the tree as a JSON file, used by the CLI.
//!
//! Both share the tree-editing routines in [`edit`].

use crate::error::Result;
use crate::model::{Document, Folder, Tree};

pub mod edit;
pub mod fs;
pub mod memory;

/// Operations the persistence collaborator must support.
pub trait TreeSource {
    /// The full, current tree.
    fn fetch_tree(&self) -> Result<Tree>;

    /// Creates a folder at the root (`parent_id = None`) or inside a folder.
    fn create_folder(&mut self, name: &str, parent_id: Option<&str>) -> Result<Folder>;

    /// Creates a document at the root (`folder_id = None`) or inside a folder.
    fn create_document(
        &mut self,
        title: &str,
        content: &str,
        folder_id: Option<&str>,
    ) -> Result<Document>;

    fn rename_folder(&mut self, id: &str, name: &str) -> Result<()>;

    fn rename_document(&mut self, id: &str, title: &str) -> Result<()>;

    fn update_document_content(&mut self, id: &str, content: &str) -> Result<()>;

    /// Fails with `FolderNotEmpty` if the folder still holds anything.
    fn delete_folder(&mut self, id: &str) -> Result<()>;

    fn delete_document(&mut self, id: &str) -> Result<()>;
}
