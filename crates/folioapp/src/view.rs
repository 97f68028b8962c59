//! # Tree View Projection
//!
//! [`project`] turns the tree, the expansion state, the active keyword and the
//! selected document into a flat list of [`DisplayNode`]s ready to render. It
//! owns no state and never mutates its inputs.
//!
//! ## Browsing (no keyword)
//!
//! ```text
//! root documents            depth 0
//! root folder A             depth 0
//!   A's documents           depth 1   (only if A is expanded)
//!   A's child folders       depth 1   (only if A is expanded, recursively)
//! root folder B             depth 0
//! ```
//!
//! Items directly in a container share that container's content depth, so a
//! folder's documents line up with its child folders.
//!
//! ## Searching (keyword present)
//!
//! Expansion is ignored. Every match becomes an unindented document node with
//! highlight segments and the containing folder's name as a secondary label.
//! When nothing matches, a single placeholder node is emitted so the caller
//! never renders a silently blank tree.

use crate::expansion::ExpansionState;
use crate::model::{Container, Document, Folder, Tree};
use crate::search::{highlight, search, Keyword, MatchSegment};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Folder,
    Document,
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayNode {
    pub kind: NodeKind,
    /// Folder or document id; empty for placeholders.
    pub id: String,
    pub label: String,
    /// Present only while searching.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<Vec<MatchSegment>>,
    /// Containing folder name for search results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_label: Option<String>,
    pub depth: usize,
    /// False for folders with no children and no documents (disabled toggle).
    pub expandable: bool,
    pub expanded: bool,
    pub active: bool,
}

impl DisplayNode {
    fn folder(folder: &Folder, depth: usize, expansion: &ExpansionState) -> Self {
        let expandable = !folder.has_no_content();
        Self {
            kind: NodeKind::Folder,
            id: folder.id.clone(),
            label: folder.name.clone(),
            highlight: None,
            secondary_label: None,
            depth,
            expandable,
            expanded: expandable && expansion.is_expanded(&folder.id),
            active: false,
        }
    }

    fn document(document: &Document, depth: usize, selected: Option<&str>) -> Self {
        Self {
            kind: NodeKind::Document,
            id: document.id.clone(),
            label: document.title.clone(),
            highlight: None,
            secondary_label: None,
            depth,
            expandable: false,
            expanded: false,
            active: selected == Some(document.id.as_str()),
        }
    }

    fn no_results(keyword: &Keyword) -> Self {
        Self {
            kind: NodeKind::Placeholder,
            id: String::new(),
            label: format!("No documents match \"{}\"", keyword),
            highlight: None,
            secondary_label: None,
            depth: 0,
            expandable: false,
            expanded: false,
            active: false,
        }
    }
}

/// Builds the render-ready node list.
pub fn project(
    tree: &Tree,
    expansion: &ExpansionState,
    keyword: Option<&Keyword>,
    selected: Option<&str>,
) -> Vec<DisplayNode> {
    match keyword {
        Some(keyword) => project_search(tree, keyword, selected),
        None => {
            let mut nodes = Vec::new();
            for document in &tree.documents {
                nodes.push(DisplayNode::document(document, 0, selected));
            }
            for folder in &tree.folders {
                project_folder(folder, 0, expansion, selected, &mut nodes);
            }
            nodes
        }
    }
}

fn project_folder(
    folder: &Folder,
    depth: usize,
    expansion: &ExpansionState,
    selected: Option<&str>,
    nodes: &mut Vec<DisplayNode>,
) {
    nodes.push(DisplayNode::folder(folder, depth, expansion));
    if !expansion.is_expanded(&folder.id) {
        return;
    }
    for document in &folder.documents {
        nodes.push(DisplayNode::document(document, depth + 1, selected));
    }
    for child in &folder.children {
        project_folder(child, depth + 1, expansion, selected, nodes);
    }
}

fn project_search(tree: &Tree, keyword: &Keyword, selected: Option<&str>) -> Vec<DisplayNode> {
    let matches = search(tree, keyword);
    if matches.is_empty() {
        return vec![DisplayNode::no_results(keyword)];
    }
    matches
        .into_iter()
        .map(|m| {
            let mut node = DisplayNode::document(&m.document, 0, selected);
            node.highlight = Some(highlight(&m.document.title, keyword));
            node.secondary_label = m.folder_name;
            node
        })
        .collect()
}
