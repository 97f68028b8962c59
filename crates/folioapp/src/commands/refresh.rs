use crate::commands::helpers::reload_into;
use crate::commands::{CmdMessage, CmdResult};
use crate::config::FolioConfig;
use crate::error::Result;
use crate::session::Session;
use crate::store::TreeSource;
use tracing::{debug, info};

pub const WELCOME_TITLE: &str = "Welcome to Folio";

pub const WELCOME_CONTENT: &str = "# Welcome to Folio

Folio keeps your documents in folders, as deep as you like.

## Getting started

- `folio mkdir <name>` creates a folder
- `folio new <title> --in <folder-id>` creates a document inside it
- `folio toggle <folder-id>` expands or collapses a folder
- `folio search <keyword>` finds documents by title
- `folio rename`, `folio rmdir` and `folio rm` tidy things up

Folders must be empty before they can be removed.
";

/// Loads the current tree into the session.
///
/// When the tree is empty and `seed_welcome` is set, a welcome document is
/// created first. Otherwise, if nothing is selected, the first document in
/// traversal order is selected.
pub fn run<S: TreeSource>(
    store: &mut S,
    session: &mut Session,
    config: &FolioConfig,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    reload_into(store, session, &mut result)?;

    if session.store().is_empty() && config.seed_welcome {
        let welcome = store.create_document(WELCOME_TITLE, WELCOME_CONTENT, None)?;
        info!(id = %welcome.id, "seeded welcome document");
        reload_into(store, session, &mut result)?;
        session.select(&welcome.id)?;
        result.add_message(CmdMessage::success(format!(
            "Created document: {}",
            welcome.title
        )));
    } else if let Some(id) = session.ensure_selection() {
        debug!(id = %id, "selected first document");
    }

    Ok(result.with_view(session))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FolioError;
    use crate::store::memory::MemStore;
    use crate::test_utils::{sample_tree, TestEnv};

    #[test]
    fn selects_first_document_on_load() {
        let mut store = MemStore::with_tree(sample_tree());
        let mut session = Session::new();
        let result = run(&mut store, &mut session, &FolioConfig::default()).unwrap();

        assert_eq!(session.selected_id(), Some("inbox"));
        assert_eq!(result.stats.unwrap().documents, 5);
        assert!(result.nodes.iter().any(|n| n.active && n.id == "inbox"));
    }

    #[test]
    fn first_document_may_live_in_a_folder() {
        let mut env = TestEnv::sample();
        env.store.delete_document("inbox").unwrap();
        run(&mut env.store, &mut env.session, &env.config).unwrap();
        assert_eq!(env.session.selected_id(), Some("plan"));
    }

    #[test]
    fn keeps_existing_selection() {
        let mut env = TestEnv::sample();
        env.session.select("sketch").unwrap();
        run(&mut env.store, &mut env.session, &env.config).unwrap();
        assert_eq!(env.session.selected_id(), Some("sketch"));
    }

    #[test]
    fn seeds_welcome_document_into_empty_tree() {
        let mut store = MemStore::new();
        let mut session = Session::new();
        let result = run(&mut store, &mut session, &FolioConfig::default()).unwrap();

        let doc = session.selected_document().unwrap();
        assert_eq!(doc.title, WELCOME_TITLE);
        assert!(doc.content.starts_with("# Welcome"));
        assert_eq!(result.nodes.len(), 1);
        assert_eq!(result.messages.len(), 1);
        assert_eq!(store.fetch_tree().unwrap().documents.len(), 1);
    }

    #[test]
    fn empty_tree_stays_empty_without_seeding() {
        let mut env = TestEnv::new();
        let result = run(&mut env.store, &mut env.session, &env.config).unwrap();
        assert!(result.nodes.is_empty());
        assert!(result.messages.is_empty());
        assert_eq!(env.session.selected_id(), None);
    }

    #[test]
    fn failed_welcome_write_is_an_error() {
        let mut store = MemStore::new();
        store.set_simulate_write_error(true);
        let mut session = Session::new();
        assert!(matches!(
            run(&mut store, &mut session, &FolioConfig::default()),
            Err(FolioError::Store(_))
        ));
        assert!(session.store().is_empty());
        assert_eq!(session.selected_id(), None);
    }
}
