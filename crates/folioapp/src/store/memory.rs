use super::{edit, TreeSource};
use crate::error::{FolioError, Result};
use crate::model::{Document, Folder, Tree};

/// In-memory persistence collaborator.
///
/// Holds its own tree, separate from whatever a session has loaded, so tests
/// can observe the "store confirmed, not yet reloaded" window.
#[derive(Debug, Default)]
pub struct MemStore {
    tree: Tree,
    simulate_write_error: bool,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing tree. The tree is not validated here; the
    /// session validates whatever it fetches.
    pub fn with_tree(tree: Tree) -> Self {
        Self {
            tree,
            simulate_write_error: false,
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    fn writable(&mut self) -> Result<&mut Tree> {
        if self.simulate_write_error {
            return Err(FolioError::Store("Simulated write error".to_string()));
        }
        Ok(&mut self.tree)
    }
}

impl TreeSource for MemStore {
    fn fetch_tree(&self) -> Result<Tree> {
        Ok(self.tree.clone())
    }

    fn create_folder(&mut self, name: &str, parent_id: Option<&str>) -> Result<Folder> {
        edit::create_folder(self.writable()?, name, parent_id)
    }

    fn create_document(
        &mut self,
        title: &str,
        content: &str,
        folder_id: Option<&str>,
    ) -> Result<Document> {
        edit::create_document(self.writable()?, title, content, folder_id)
    }

    fn rename_folder(&mut self, id: &str, name: &str) -> Result<()> {
        edit::rename_folder(self.writable()?, id, name)
    }

    fn rename_document(&mut self, id: &str, title: &str) -> Result<()> {
        edit::rename_document(self.writable()?, id, title)
    }

    fn update_document_content(&mut self, id: &str, content: &str) -> Result<()> {
        edit::update_document_content(self.writable()?, id, content)
    }

    fn delete_folder(&mut self, id: &str) -> Result<()> {
        edit::delete_folder(self.writable()?, id)
    }

    fn delete_document(&mut self, id: &str) -> Result<()> {
        edit::delete_document(self.writable()?, id)
    }
}
