//! # Tree Store: Canonical In-Memory Tree
//!
//! [`TreeStore`] owns the tree currently shown to the user. It is replaced
//! wholesale by [`TreeStore::load`]; there are no partial edits. Every
//! mutation goes through the persistence collaborator and is followed by a
//! fresh load (see [`crate::commands`]).
//!
//! ## Validation at the Boundary
//!
//! The collaborator is trusted, but a tree is still validated before it
//! replaces the current one:
//!
//! - ids are non-empty
//! - folder ids are unique tree-wide, document ids are unique tree-wide
//! - no folder id appears among its own ancestors
//!
//! A rejected tree leaves the previously loaded tree untouched.
//!
//! ## Traversal Order
//!
//! [`walk`] is the single depth-first pre-order traversal used for lookups,
//! search and stats:
//!
//! ```text
//! 1. root documents, in stored order
//! 2. for each root folder, in stored order:
//!      the folder itself
//!      its own documents, in stored order
//!      its child folders, recursively
//! ```
//!
//! The visitor receives the ancestor path accumulated during the walk, which
//! stands in for parent pointers.

use crate::error::InvalidTreeError;
use crate::model::{Document, Folder, Tree};
use std::collections::HashSet;
use std::ops::ControlFlow;
use tracing::{debug, warn};

/// A node reached during [`walk`], with the folders above it (outermost first).
#[derive(Debug, Clone, Copy)]
pub enum Visit<'t, 'p> {
    Folder {
        folder: &'t Folder,
        ancestors: &'p [&'t Folder],
    },
    Document {
        document: &'t Document,
        ancestors: &'p [&'t Folder],
    },
}

impl<'t, 'p> Visit<'t, 'p> {
    pub fn ancestors(&self) -> &'p [&'t Folder] {
        match self {
            Visit::Folder { ancestors, .. } | Visit::Document { ancestors, .. } => ancestors,
        }
    }
}

/// Depth-first pre-order traversal. Return `ControlFlow::Break` from the
/// visitor to stop early.
pub fn walk<'t, F>(tree: &'t Tree, mut visit: F) -> ControlFlow<()>
where
    F: for<'p> FnMut(Visit<'t, 'p>) -> ControlFlow<()>,
{
    let mut ancestors: Vec<&'t Folder> = Vec::new();
    for document in &tree.documents {
        visit(Visit::Document {
            document,
            ancestors: &ancestors,
        })?;
    }
    for folder in &tree.folders {
        walk_folder(folder, &mut ancestors, &mut visit)?;
    }
    ControlFlow::Continue(())
}

fn walk_folder<'t, F>(
    folder: &'t Folder,
    ancestors: &mut Vec<&'t Folder>,
    visit: &mut F,
) -> ControlFlow<()>
where
    F: for<'p> FnMut(Visit<'t, 'p>) -> ControlFlow<()>,
{
    visit(Visit::Folder {
        folder,
        ancestors: ancestors.as_slice(),
    })?;

    ancestors.push(folder);
    for document in &folder.documents {
        visit(Visit::Document {
            document,
            ancestors: ancestors.as_slice(),
        })?;
    }
    for child in &folder.children {
        walk_folder(child, ancestors, visit)?;
    }
    ancestors.pop();

    ControlFlow::Continue(())
}

/// Checks the structural invariants of a tree.
pub fn validate(tree: &Tree) -> Result<(), InvalidTreeError> {
    let mut folder_ids: HashSet<&str> = HashSet::new();
    let mut document_ids: HashSet<&str> = HashSet::new();
    let mut problem = None;

    let _ = walk(tree, |visit| {
        let outcome = match visit {
            Visit::Folder { folder, ancestors } => {
                if folder.id.is_empty() {
                    Err(InvalidTreeError::EmptyFolderId(folder.name.clone()))
                } else if ancestors.iter().any(|a| a.id == folder.id) {
                    Err(InvalidTreeError::FolderCycle(folder.id.clone()))
                } else if !folder_ids.insert(folder.id.as_str()) {
                    Err(InvalidTreeError::DuplicateFolderId(folder.id.clone()))
                } else {
                    Ok(())
                }
            }
            Visit::Document { document, .. } => {
                if document.id.is_empty() {
                    Err(InvalidTreeError::EmptyDocumentId(document.title.clone()))
                } else if !document_ids.insert(document.id.as_str()) {
                    Err(InvalidTreeError::DuplicateDocumentId(document.id.clone()))
                } else {
                    Ok(())
                }
            }
        };
        match outcome {
            Ok(()) => ControlFlow::Continue(()),
            Err(e) => {
                problem = Some(e);
                ControlFlow::Break(())
            }
        }
    });

    match problem {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

pub fn find_folder<'t>(tree: &'t Tree, id: &str) -> Option<&'t Folder> {
    let mut found = None;
    let _ = walk(tree, |visit| match visit {
        Visit::Folder { folder, .. } if folder.id == id => {
            found = Some(folder);
            ControlFlow::Break(())
        }
        _ => ControlFlow::Continue(()),
    });
    found
}

pub fn find_document<'t>(tree: &'t Tree, id: &str) -> Option<&'t Document> {
    locate_document(tree, id).map(|location| location.document)
}

/// A document together with the folders that contain it, outermost first.
#[derive(Debug, Clone)]
pub struct DocumentLocation<'t> {
    pub document: &'t Document,
    pub ancestors: Vec<&'t Folder>,
}

impl<'t> DocumentLocation<'t> {
    /// The immediate containing folder, `None` for root documents.
    pub fn parent(&self) -> Option<&'t Folder> {
        self.ancestors.last().copied()
    }

    /// Folder names from the root down to the immediate parent.
    pub fn folder_path(&self) -> Vec<&'t str> {
        self.ancestors.iter().map(|f| f.name.as_str()).collect()
    }
}

pub fn locate_document<'t>(tree: &'t Tree, id: &str) -> Option<DocumentLocation<'t>> {
    let mut found = None;
    let _ = walk(tree, |visit| match visit {
        Visit::Document {
            document,
            ancestors,
        } if document.id == id => {
            found = Some(DocumentLocation {
                document,
                ancestors: ancestors.to_vec(),
            });
            ControlFlow::Break(())
        }
        _ => ControlFlow::Continue(()),
    });
    found
}

/// The first document in traversal order: root documents win, then the
/// first folder (at any depth) that holds a document.
pub fn first_document(tree: &Tree) -> Option<&Document> {
    let mut found = None;
    let _ = walk(tree, |visit| match visit {
        Visit::Document { document, .. } => {
            found = Some(document);
            ControlFlow::Break(())
        }
        Visit::Folder { .. } => ControlFlow::Continue(()),
    });
    found
}

/// Holds the tree currently presented to the user.
#[derive(Debug, Clone, Default)]
pub struct TreeStore {
    tree: Tree,
}

impl TreeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `tree` and, if it holds, replaces the current tree with it.
    pub fn load(&mut self, tree: Tree) -> Result<(), InvalidTreeError> {
        if let Err(e) = validate(&tree) {
            warn!(error = %e, "rejected tree load, keeping previous tree");
            return Err(e);
        }
        debug!(
            root_folders = tree.folders.len(),
            root_documents = tree.documents.len(),
            "tree loaded"
        );
        self.tree = tree;
        Ok(())
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn find_folder(&self, id: &str) -> Option<&Folder> {
        find_folder(&self.tree, id)
    }

    pub fn find_document(&self, id: &str) -> Option<&Document> {
        find_document(&self.tree, id)
    }

    pub fn locate_document(&self, id: &str) -> Option<DocumentLocation<'_>> {
        locate_document(&self.tree, id)
    }

    pub fn first_document(&self) -> Option<&Document> {
        first_document(&self.tree)
    }

    /// True iff there are no folders and no documents anywhere.
    pub fn is_empty(&self) -> bool {
        // Root emptiness is enough: a non-empty subtree needs a root folder.
        self.tree.folders.is_empty() && self.tree.documents.is_empty()
    }
}
