use crate::commands::helpers::{non_blank, reload_into};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::Session;
use crate::store::TreeSource;
use tracing::info;

pub fn folder<S: TreeSource>(
    store: &mut S,
    session: &mut Session,
    id: &str,
    name: &str,
) -> Result<CmdResult> {
    let name = non_blank(name, "Folder name")?;
    store.rename_folder(id, &name)?;
    info!(id, "folder renamed");

    let mut result = CmdResult::default();
    reload_into(store, session, &mut result)?;
    result.add_message(CmdMessage::success(format!("Folder renamed: {}", name)));
    Ok(result.with_view(session))
}

pub fn document<S: TreeSource>(
    store: &mut S,
    session: &mut Session,
    id: &str,
    title: &str,
) -> Result<CmdResult> {
    let title = non_blank(title, "Document title")?;
    store.rename_document(id, &title)?;
    info!(id, "document renamed");

    let mut result = CmdResult::default();
    reload_into(store, session, &mut result)?;
    result.add_message(CmdMessage::success(format!("Document renamed: {}", title)));
    Ok(result.with_view(session))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FolioError;
    use crate::test_utils::TestEnv;

    #[test]
    fn renamed_folder_shows_new_name() {
        let mut env = TestEnv::sample();
        let result = folder(&mut env.store, &mut env.session, "work", "  Job ").unwrap();
        assert!(result.nodes.iter().any(|n| n.id == "work" && n.label == "Job"));
        assert_eq!(result.messages[0].content, "Folder renamed: Job");
    }

    #[test]
    fn renamed_document_keeps_selection() {
        let mut env = TestEnv::sample();
        env.session.select("sketch").unwrap();
        document(&mut env.store, &mut env.session, "sketch", "Final sketch").unwrap();

        assert_eq!(env.session.selected_id(), Some("sketch"));
        assert_eq!(env.session.selected_document().unwrap().title, "Final sketch");
    }

    #[test]
    fn renamed_title_is_searchable() {
        let mut env = TestEnv::sample();
        document(&mut env.store, &mut env.session, "plan", "Roadmap").unwrap();
        env.session.set_keyword("road");
        let nodes = env.session.view();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].id, "plan");
        assert_eq!(nodes[0].secondary_label.as_deref(), Some("Work"));
    }

    #[test]
    fn blank_or_unknown_fails() {
        let mut env = TestEnv::sample();
        assert!(matches!(
            folder(&mut env.store, &mut env.session, "work", ""),
            Err(FolioError::Validation(_))
        ));
        assert!(matches!(
            document(&mut env.store, &mut env.session, "ghost", "Title"),
            Err(FolioError::DocumentNotFound(_))
        ));
        assert_eq!(env.session.tree(), &env.store.fetch_tree().unwrap());
    }
}
