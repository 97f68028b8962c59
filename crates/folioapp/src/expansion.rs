//! Expand/collapse state for folders.
//!
//! A plain set of folder ids, independent of tree content. Ids that no longer
//! name a folder are harmless; [`ExpansionState::retain_existing`] drops them
//! after a tree replacement.

use crate::model::Tree;
use crate::tree::{walk, Visit};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::ops::ControlFlow;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpansionState {
    expanded: BTreeSet<String>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership. Returns the new state of `id`.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.expanded.remove(id) {
            false
        } else {
            self.expanded.insert(id.to_string());
            true
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    pub fn expand(&mut self, id: &str) {
        self.expanded.insert(id.to_string());
    }

    pub fn collapse(&mut self, id: &str) {
        self.expanded.remove(id);
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    /// Drops ids that do not name a folder in `tree`.
    pub fn retain_existing(&mut self, tree: &Tree) {
        if self.expanded.is_empty() {
            return;
        }
        let mut live: HashSet<&str> = HashSet::new();
        let _ = walk(tree, |visit| {
            if let Visit::Folder { folder, .. } = visit {
                live.insert(folder.id.as_str());
            }
            ControlFlow::Continue(())
        });
        self.expanded.retain(|id| live.contains(id.as_str()));
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.expanded.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ExpansionState {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            expanded: iter.into_iter().map(Into::into).collect(),
        }
    }
}
