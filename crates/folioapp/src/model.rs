//! # Domain Model: Folders, Documents and the Tree
//!
//! Folio stores a strict tree. The root [`Tree`] and every [`Folder`] own their
//! contents through plain vectors:
//!
//! ```text
//! Tree
//! ├── documents: [Document, ...]     <-- root documents
//! └── folders:   [Folder, ...]
//!                 ├── documents: [Document, ...]
//!                 └── children:  [Folder, ...]   <-- recursive
//! ```
//!
//! There are no parent pointers. Anything that needs to know where a node
//! lives accumulates the path while walking down (see [`crate::tree`]).
//!
//! ## Ordering
//!
//! The order of `children` and `documents` is the display order. Nothing in
//! this crate sorts siblings; the persistence collaborator decides the order
//! and the core preserves it.
//!
//! ## Identifiers
//!
//! Ids are opaque strings. Stores mint UUID v4 strings via [`new_id`], but
//! trees coming from elsewhere may use any non-empty string. Folder ids and
//! document ids live in separate namespaces.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Mints a fresh identifier for a new folder or document.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn epoch() -> DateTime<Utc> {
    DateTime::UNIX_EPOCH
}

/// Anything that holds folders and documents: the root [`Tree`] or a [`Folder`].
pub trait Container {
    fn folders(&self) -> &[Folder];
    fn documents(&self) -> &[Document];

    /// True when the container holds neither folders nor documents.
    fn has_no_content(&self) -> bool {
        self.folders().is_empty() && self.documents().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default = "epoch")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "epoch")]
    pub updated_at: DateTime<Utc>,
}

impl Document {
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub children: Vec<Folder>,
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default = "epoch")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "epoch")]
    pub updated_at: DateTime<Utc>,
}

impl Folder {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            children: Vec::new(),
            documents: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_folder(mut self, folder: Folder) -> Self {
        self.children.push(folder);
        self
    }

    pub fn with_document(mut self, document: Document) -> Self {
        self.documents.push(document);
        self
    }
}

impl Container for Folder {
    fn folders(&self) -> &[Folder] {
        &self.children
    }

    fn documents(&self) -> &[Document] {
        &self.documents
    }
}

/// The unnamed root container. Always considered expanded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    #[serde(default)]
    pub folders: Vec<Folder>,
    #[serde(default)]
    pub documents: Vec<Document>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_folder(mut self, folder: Folder) -> Self {
        self.folders.push(folder);
        self
    }

    pub fn with_document(mut self, document: Document) -> Self {
        self.documents.push(document);
        self
    }
}

impl Container for Tree {
    fn folders(&self) -> &[Folder] {
        &self.folders
    }

    fn documents(&self) -> &[Document] {
        &self.documents
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_minimal_json() {
        let json = r#"{
            "folders": [
                { "id": "f1", "name": "Docs", "documents": [{ "id": "d1", "title": "Sketch" }] }
            ]
        }"#;
        let tree: Tree = serde_json::from_str(json).unwrap();

        assert_eq!(tree.folders.len(), 1);
        assert!(tree.documents.is_empty());
        let folder = &tree.folders[0];
        assert!(folder.children.is_empty());
        assert_eq!(folder.documents[0].title, "Sketch");
        assert_eq!(folder.documents[0].content, "");
        assert_eq!(folder.created_at, DateTime::<Utc>::UNIX_EPOCH);
    }

    #[test]
    fn builders_preserve_insertion_order() {
        let folder = Folder::new("f", "F")
            .with_document(Document::new("d1", "One", ""))
            .with_document(Document::new("d2", "Two", ""))
            .with_folder(Folder::new("c1", "Child 1"))
            .with_folder(Folder::new("c2", "Child 2"));

        let titles: Vec<_> = folder.documents.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, vec!["One", "Two"]);
        let names: Vec<_> = folder.children.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Child 1", "Child 2"]);
    }

    #[test]
    fn container_emptiness() {
        assert!(Tree::new().has_no_content());
        assert!(Folder::new("f", "F").has_no_content());
        assert!(!Tree::new().with_document(Document::new("d", "D", "")).has_no_content());
        assert!(!Folder::new("f", "F")
            .with_folder(Folder::new("c", "C"))
            .has_no_content());
    }

    #[test]
    fn new_ids_are_unique() {
        assert_ne!(new_id(), new_id());
    }
}
