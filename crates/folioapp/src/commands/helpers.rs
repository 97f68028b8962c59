use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::{ReloadSummary, Session};
use crate::store::TreeSource;
use crate::tree::{walk, Visit};

pub use crate::store::edit::non_blank;
use std::iter;
use std::ops::ControlFlow;
use tracing::debug;

/// Fetches the whole tree from the store and loads it into the session.
pub fn reload<S: TreeSource>(store: &S, session: &mut Session) -> Result<ReloadSummary> {
    let tree = store.fetch_tree()?;
    let summary = session.replace_tree(tree)?;
    debug!(
        folders = summary.stats.folders,
        documents = summary.stats.documents,
        "tree reloaded"
    );
    Ok(summary)
}

/// [`reload`], reporting a dropped selection as a message on `result`.
pub fn reload_into<S: TreeSource>(
    store: &S,
    session: &mut Session,
    result: &mut CmdResult,
) -> Result<ReloadSummary> {
    let summary = reload(store, session)?;
    if summary.selection_cleared {
        result.add_message(CmdMessage::info(
            "The selected document no longer exists; selection cleared",
        ));
    }
    Ok(summary)
}

/// Expands `folder_id` and every folder above it so its contents show up in
/// the tree view. Unknown ids are ignored.
pub fn reveal(session: &mut Session, folder_id: &str) {
    let mut path: Option<Vec<String>> = None;
    let _ = walk(session.tree(), |visit| match visit {
        Visit::Folder { folder, ancestors } if folder.id == folder_id => {
            path = Some(
                ancestors
                    .iter()
                    .map(|f| f.id.clone())
                    .chain(iter::once(folder.id.clone()))
                    .collect(),
            );
            ControlFlow::Break(())
        }
        _ => ControlFlow::Continue(()),
    });
    for id in path.into_iter().flatten() {
        session.expand(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestEnv;

    #[test]
    fn reveal_expands_ancestors() {
        let mut env = TestEnv::sample();
        reveal(&mut env.session, "design");
        assert!(env.session.expansion().is_expanded("docs"));
        assert!(env.session.expansion().is_expanded("design"));
        assert!(!env.session.expansion().is_expanded("work"));
    }

    #[test]
    fn reveal_unknown_folder_is_noop() {
        let mut env = TestEnv::sample();
        reveal(&mut env.session, "nope");
        assert!(env.session.expansion().is_empty());
    }

    #[test]
    fn reload_picks_up_store_changes() {
        let mut env = TestEnv::sample();
        env.store.delete_document("inbox").unwrap();
        assert!(env.session.store().find_document("inbox").is_some());

        let summary = reload(&env.store, &mut env.session).unwrap();
        assert_eq!(summary.stats.documents, 4);
        assert!(env.session.store().find_document("inbox").is_none());
    }
}
