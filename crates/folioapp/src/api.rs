//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for UI clients.
//!
//! ## Role and Responsibilities
//!
//! [`FolioApi`] owns the three things every command needs:
//!
//! - the persistence collaborator (`S: TreeSource`)
//! - the [`Session`] holding tree, expansion, selection and keyword
//! - the [`FolioConfig`]
//!
//! and dispatches each call to the matching `commands::*` function.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **I/O**: no stdout, stderr or terminal handling
//! - **Persisting the session**: clients take [`FolioApi::session_state`]
//!   and store it however they like
//!
//! ## Generic Over TreeSource
//!
//! - Production: `FolioApi<FileStore>`
//! - Testing: `FolioApi<MemStore>`
//!
//! ## Testing Strategy
//!
//! API tests check dispatch and argument passing only. Command behavior is
//! tested in the command modules.

use crate::commands::{self, CmdResult};
use crate::config::FolioConfig;
use crate::error::Result;
use crate::session::{Session, SessionState};
use crate::store::TreeSource;

/// The main API facade for folio operations.
pub struct FolioApi<S: TreeSource> {
    store: S,
    session: Session,
    config: FolioConfig,
}

impl<S: TreeSource> FolioApi<S> {
    /// Builds the facade around a restored session. Call [`FolioApi::refresh`]
    /// before anything else so the session sees the current tree.
    pub fn new(store: S, state: SessionState, config: FolioConfig) -> Self {
        Self {
            store,
            session: Session::from_state(state),
            config,
        }
    }

    pub fn refresh(&mut self) -> Result<CmdResult> {
        commands::refresh::run(&mut self.store, &mut self.session, &self.config)
    }

    pub fn tree(&mut self) -> Result<CmdResult> {
        commands::listing::tree(&mut self.session)
    }

    pub fn search(&mut self, keyword: &str) -> Result<CmdResult> {
        commands::listing::search(&mut self.session, keyword)
    }

    pub fn stats(&self) -> Result<CmdResult> {
        commands::listing::stats(&self.session)
    }

    pub fn toggle_folder(&mut self, id: &str) -> Result<CmdResult> {
        commands::folding::toggle(&mut self.session, id)
    }

    pub fn expand_folder(&mut self, id: &str) -> Result<CmdResult> {
        commands::folding::expand(&mut self.session, id)
    }

    pub fn collapse_folder(&mut self, id: &str) -> Result<CmdResult> {
        commands::folding::collapse(&mut self.session, id)
    }

    pub fn collapse_all(&mut self) -> Result<CmdResult> {
        commands::folding::collapse_all(&mut self.session)
    }

    pub fn select_document(&mut self, id: &str) -> Result<CmdResult> {
        commands::select::run(&mut self.session, id)
    }

    pub fn show_document(&self, id: Option<&str>) -> Result<CmdResult> {
        commands::show::run(&self.session, id)
    }

    pub fn create_folder(&mut self, name: &str, parent_id: Option<&str>) -> Result<CmdResult> {
        commands::create::folder(&mut self.store, &mut self.session, name, parent_id)
    }

    pub fn create_document(
        &mut self,
        title: &str,
        content: Option<&str>,
        folder_id: Option<&str>,
    ) -> Result<CmdResult> {
        commands::create::document(
            &mut self.store,
            &mut self.session,
            &self.config,
            title,
            content,
            folder_id,
        )
    }

    pub fn rename_folder(&mut self, id: &str, name: &str) -> Result<CmdResult> {
        commands::rename::folder(&mut self.store, &mut self.session, id, name)
    }

    pub fn rename_document(&mut self, id: &str, title: &str) -> Result<CmdResult> {
        commands::rename::document(&mut self.store, &mut self.session, id, title)
    }

    pub fn update_document(&mut self, id: &str, content: &str) -> Result<CmdResult> {
        commands::update::run(&mut self.store, &mut self.session, id, content)
    }

    pub fn delete_folder(&mut self, id: &str) -> Result<CmdResult> {
        commands::delete::folder(&mut self.store, &mut self.session, id)
    }

    pub fn delete_document(&mut self, id: &str) -> Result<CmdResult> {
        commands::delete::document(&mut self.store, &mut self.session, id)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_state(&self) -> SessionState {
        self.session.state()
    }

    pub fn config(&self) -> &FolioConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemStore;
    use crate::test_utils::sample_tree;

    fn api() -> FolioApi<MemStore> {
        let config = FolioConfig {
            seed_welcome: false,
            ..FolioConfig::default()
        };
        let mut api = FolioApi::new(
            MemStore::with_tree(sample_tree()),
            SessionState::default(),
            config,
        );
        api.refresh().unwrap();
        api
    }

    #[test]
    fn restored_state_is_pruned_on_refresh() {
        let state = SessionState {
            expanded: ["work", "gone"].into_iter().collect(),
            selected: Some("deleted-doc".to_string()),
        };
        let mut api = FolioApi::new(
            MemStore::with_tree(sample_tree()),
            state,
            FolioConfig::default(),
        );
        let result = api.refresh().unwrap();

        let state = api.session_state();
        assert_eq!(state.expanded.iter().collect::<Vec<_>>(), vec!["work"]);
        // Stale selection is dropped, then the first document is picked
        assert_eq!(state.selected.as_deref(), Some("inbox"));
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn create_then_rename_then_delete_document() {
        let mut api = api();
        let created = api.create_document("Draft", None, Some("empty")).unwrap();
        let id = created.document.unwrap().id;
        assert_eq!(api.session().selected_id(), Some(id.as_str()));

        api.rename_document(&id, "Final").unwrap();
        api.update_document(&id, "body").unwrap();
        let shown = api.show_document(None).unwrap().document.unwrap();
        assert_eq!(shown.title, "Final");
        assert_eq!(shown.content, "body");

        api.delete_document(&id).unwrap();
        assert_eq!(api.session().selected_id(), None);
        api.delete_folder("empty").unwrap();
        assert_eq!(api.stats().unwrap().stats.unwrap().folders, 4);
    }

    #[test]
    fn folder_dispatch() {
        let mut api = api();
        let created = api.create_folder("Sub", Some("work")).unwrap().folder.unwrap();
        api.rename_folder(&created.id, "Renamed").unwrap();
        api.collapse_folder("work").unwrap();
        api.toggle_folder("work").unwrap();
        assert!(api.tree().unwrap().nodes.iter().any(|n| n.label == "Renamed"));

        api.expand_folder("docs").unwrap();
        api.collapse_all().unwrap();
        assert!(api.session().expansion().is_empty());
    }

    #[test]
    fn search_and_select_dispatch() {
        let mut api = api();
        let hits = api.search("draft").unwrap();
        assert_eq!(hits.nodes[0].id, "sketch");
        api.select_document("sketch").unwrap();
        assert_eq!(api.session_state().selected.as_deref(), Some("sketch"));
    }
}
