use super::{edit, TreeSource};
use crate::error::{FolioError, Result};
use crate::model::{Document, Folder, Tree};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};
use uuid::Uuid;

const TREE_FILE: &str = "tree.json";

/// Stores the whole tree as a single JSON file under a data directory.
///
/// Every mutation reads the file, applies the edit and writes it back
/// atomically (temp file + rename). A missing file is an empty tree.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn tree_path(&self) -> PathBuf {
        self.root.join(TREE_FILE)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(FolioError::Io)?;
        }
        Ok(())
    }

    fn load(&self) -> Result<Tree> {
        let path = self.tree_path();
        if !path.exists() {
            debug!(path = %path.display(), "no tree file yet, starting empty");
            return Ok(Tree::new());
        }
        let content = fs::read_to_string(&path).map_err(FolioError::Io)?;
        let tree = serde_json::from_str(&content).map_err(FolioError::Serialization)?;
        Ok(tree)
    }

    fn save(&self, tree: &Tree) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(tree).map_err(FolioError::Serialization)?;

        let tmp_file = self.root.join(format!(".tree-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(FolioError::Io)?;
        fs::rename(&tmp_file, self.tree_path()).map_err(FolioError::Io)?;
        Ok(())
    }

    fn modify<T>(&mut self, op: &str, f: impl FnOnce(&mut Tree) -> Result<T>) -> Result<T> {
        let mut tree = self.load()?;
        let out = f(&mut tree)?;
        self.save(&tree)?;
        info!(op, path = %self.tree_path().display(), "tree saved");
        Ok(out)
    }
}

impl TreeSource for FileStore {
    fn fetch_tree(&self) -> Result<Tree> {
        self.load()
    }

    fn create_folder(&mut self, name: &str, parent_id: Option<&str>) -> Result<Folder> {
        self.modify("create_folder", |t| edit::create_folder(t, name, parent_id))
    }

    fn create_document(
        &mut self,
        title: &str,
        content: &str,
        folder_id: Option<&str>,
    ) -> Result<Document> {
        self.modify("create_document", |t| {
            edit::create_document(t, title, content, folder_id)
        })
    }

    fn rename_folder(&mut self, id: &str, name: &str) -> Result<()> {
        self.modify("rename_folder", |t| edit::rename_folder(t, id, name))
    }

    fn rename_document(&mut self, id: &str, title: &str) -> Result<()> {
        self.modify("rename_document", |t| edit::rename_document(t, id, title))
    }

    fn update_document_content(&mut self, id: &str, content: &str) -> Result<()> {
        self.modify("update_document_content", |t| {
            edit::update_document_content(t, id, content)
        })
    }

    fn delete_folder(&mut self, id: &str) -> Result<()> {
        self.modify("delete_folder", |t| edit::delete_folder(t, id))
    }

    fn delete_document(&mut self, id: &str) -> Result<()> {
        self.modify("delete_document", |t| edit::delete_document(t, id))
    }
}
