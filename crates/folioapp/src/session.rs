//! # Session: Explicit Application State
//!
//! Everything the UI needs to remember between events lives in [`Session`]:
//!
//! - the current [`TreeStore`]
//! - the [`ExpansionState`]
//! - the selected document id
//! - the active search keyword
//!
//! There are no globals. Commands take `&mut Session`, which keeps every
//! operation deterministic and testable without a terminal or timers.
//!
//! ## Reload Rules
//!
//! [`Session::replace_tree`] is the only way the tree changes. After a
//! successful load:
//!
//! - expansion ids of folders that vanished are dropped
//! - a selection pointing at a document that vanished is cleared
//!
//! A rejected tree changes nothing at all.
//!
//! ## Persisting Between Runs
//!
//! [`SessionState`] is the serializable part (expansion + selection) so a
//! short-lived client such as the CLI can carry it across invocations.

use crate::error::{FolioError, Result};
use crate::expansion::ExpansionState;
use crate::model::{Document, Tree};
use crate::search::Keyword;
use crate::stats::TreeStats;
use crate::tree::TreeStore;
use crate::view::{project, DisplayNode};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// What changed as a result of a successful reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReloadSummary {
    pub stats: TreeStats,
    pub selection_cleared: bool,
}

/// The persistable part of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(default)]
    pub expanded: ExpansionState,
    #[serde(default)]
    pub selected: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    store: TreeStore,
    expansion: ExpansionState,
    selected: Option<String>,
    keyword: String,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session from persisted state. The tree is empty until the
    /// first [`Session::replace_tree`], which also prunes stale ids.
    pub fn from_state(state: SessionState) -> Self {
        Self {
            expansion: state.expanded,
            selected: state.selected,
            ..Self::default()
        }
    }

    pub fn state(&self) -> SessionState {
        SessionState {
            expanded: self.expansion.clone(),
            selected: self.selected.clone(),
        }
    }

    /// Loads a freshly fetched tree. On error the session is unchanged.
    pub fn replace_tree(&mut self, tree: Tree) -> Result<ReloadSummary> {
        self.store.load(tree)?;
        self.expansion.retain_existing(self.store.tree());

        let selection_cleared = match &self.selected {
            Some(id) if self.store.find_document(id).is_none() => {
                debug!(id = %id, "selected document vanished, clearing selection");
                self.selected = None;
                true
            }
            _ => false,
        };

        Ok(ReloadSummary {
            stats: self.stats(),
            selection_cleared,
        })
    }

    pub fn tree(&self) -> &Tree {
        self.store.tree()
    }

    pub fn store(&self) -> &TreeStore {
        &self.store
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_document(&self) -> Option<&Document> {
        self.selected
            .as_deref()
            .and_then(|id| self.store.find_document(id))
    }

    /// Selects a document. Returns `true` if the selection changed.
    pub fn select(&mut self, id: &str) -> Result<bool> {
        if self.store.find_document(id).is_none() {
            return Err(FolioError::DocumentNotFound(id.to_string()));
        }
        if self.selected.as_deref() == Some(id) {
            return Ok(false);
        }
        self.selected = Some(id.to_string());
        Ok(true)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Selects the first document in traversal order if nothing is selected.
    /// Returns the newly selected id, if any.
    pub fn ensure_selection(&mut self) -> Option<&str> {
        if self.selected.is_some() {
            return None;
        }
        let first = self.store.first_document()?.id.clone();
        self.selected = Some(first);
        self.selected.as_deref()
    }

    pub fn toggle(&mut self, folder_id: &str) -> bool {
        self.expansion.toggle(folder_id)
    }

    pub fn expand(&mut self, folder_id: &str) {
        self.expansion.expand(folder_id);
    }

    pub fn collapse(&mut self, folder_id: &str) {
        self.expansion.collapse(folder_id);
    }

    pub fn collapse_all(&mut self) {
        self.expansion.collapse_all();
    }

    pub fn set_keyword(&mut self, raw: &str) {
        self.keyword = raw.to_string();
    }

    pub fn clear_keyword(&mut self) {
        self.keyword.clear();
    }

    /// The active keyword, if any (normalized).
    pub fn keyword(&self) -> Option<Keyword> {
        Keyword::parse(&self.keyword)
    }

    pub fn view(&self) -> Vec<DisplayNode> {
        let keyword = self.keyword();
        project(
            self.store.tree(),
            &self.expansion,
            keyword.as_ref(),
            self.selected.as_deref(),
        )
    }

    pub fn stats(&self) -> TreeStats {
        TreeStats::of(self.store.tree())
    }
}
