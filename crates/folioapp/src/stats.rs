//! Aggregate counts over the whole tree.
//!
//! Always recomputed from the current tree; there are no running counters to
//! drift out of sync after a reload.

use crate::model::Tree;
use crate::tree::{walk, Visit};
use serde::Serialize;
use std::ops::ControlFlow;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    pub folders: usize,
    pub documents: usize,
}

impl TreeStats {
    pub fn of(tree: &Tree) -> Self {
        let mut stats = Self::default();
        let _ = walk(tree, |visit| {
            match visit {
                Visit::Folder { .. } => stats.folders += 1,
                Visit::Document { .. } => stats.documents += 1,
            }
            ControlFlow::Continue(())
        });
        stats
    }
}

/// Folders at every depth.
pub fn count_folders(tree: &Tree) -> usize {
    TreeStats::of(tree).folders
}

/// Root documents plus every nested document.
pub fn count_documents(tree: &Tree) -> usize {
    TreeStats::of(tree).documents
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Document, Folder, Tree};

    #[test]
    fn counts_nested_folders_and_documents() {
        let tree = Tree::new()
            .with_folder(
                Folder::new("a", "A")
                    .with_folder(Folder::new("a1", "A1"))
                    .with_document(Document::new("1", "One", ""))
                    .with_document(Document::new("2", "Two", ""))
                    .with_document(Document::new("3", "Three", "")),
            )
            .with_folder(Folder::new("b", "B"))
            .with_document(Document::new("r", "Root", ""));

        assert_eq!(count_folders(&tree), 3);
        assert_eq!(count_documents(&tree), 4);
    }

    #[test]
    fn counts_deeply_nested_documents() {
        let tree = Tree::new().with_folder(
            Folder::new("a", "A").with_folder(
                Folder::new("b", "B")
                    .with_folder(Folder::new("c", "C").with_document(Document::new("x", "X", ""))),
            ),
        );
        assert_eq!(
            TreeStats::of(&tree),
            TreeStats {
                folders: 3,
                documents: 1
            }
        );
    }

    #[test]
    fn empty_tree_has_zero_counts() {
        assert_eq!(TreeStats::of(&Tree::new()), TreeStats::default());
    }
}
