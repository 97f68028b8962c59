use crate::commands::helpers::{non_blank, reload_into, reveal};
use crate::commands::{CmdMessage, CmdResult};
use crate::config::FolioConfig;
use crate::error::Result;
use crate::session::Session;
use crate::store::TreeSource;
use tracing::info;

/// Creates a folder at the root or inside `parent_id`, then reloads. The
/// parent is expanded so the new folder is visible.
pub fn folder<S: TreeSource>(
    store: &mut S,
    session: &mut Session,
    name: &str,
    parent_id: Option<&str>,
) -> Result<CmdResult> {
    let name = non_blank(name, "Folder name")?;
    let folder = store.create_folder(&name, parent_id)?;
    info!(id = %folder.id, parent = ?parent_id, "folder created");

    let mut result = CmdResult::default();
    reload_into(store, session, &mut result)?;
    if let Some(parent_id) = parent_id {
        reveal(session, parent_id);
    }

    result.add_message(CmdMessage::success(format!(
        "Folder created: {}",
        folder.name
    )));
    Ok(result.with_folder(folder).with_view(session))
}

/// Creates a document at the root or inside `folder_id`, then reloads and
/// selects it.
///
/// Without explicit `content` the document starts from the configured
/// template.
pub fn document<S: TreeSource>(
    store: &mut S,
    session: &mut Session,
    config: &FolioConfig,
    title: &str,
    content: Option<&str>,
    folder_id: Option<&str>,
) -> Result<CmdResult> {
    let title = non_blank(title, "Document title")?;
    let content = match content {
        Some(content) => content.to_string(),
        None => config.render_new_document(&title),
    };
    let document = store.create_document(&title, &content, folder_id)?;
    info!(id = %document.id, folder = ?folder_id, "document created");

    let mut result = CmdResult::default();
    reload_into(store, session, &mut result)?;
    if let Some(folder_id) = folder_id {
        reveal(session, folder_id);
    }
    session.select(&document.id)?;

    result.add_message(CmdMessage::success(format!(
        "Document created: {}",
        document.title
    )));
    Ok(result.with_document(document).with_view(session))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FolioError;
    use crate::test_utils::TestEnv;
    use crate::view::NodeKind;

    #[test]
    fn creates_root_folder_at_end() {
        let mut env = TestEnv::sample();
        let result = folder(&mut env.store, &mut env.session, "  Later  ", None).unwrap();

        let created = result.folder.unwrap();
        assert_eq!(created.name, "Later");
        let last = result.nodes.last().unwrap();
        assert_eq!(last.kind, NodeKind::Folder);
        assert_eq!(last.label, "Later");
        assert_eq!(result.stats.unwrap().folders, 6);
    }

    #[test]
    fn nested_folder_is_revealed() {
        let mut env = TestEnv::sample();
        let result = folder(&mut env.store, &mut env.session, "Sketches", Some("design")).unwrap();

        assert!(env.session.expansion().is_expanded("docs"));
        assert!(env.session.expansion().is_expanded("design"));
        let sketches = result.nodes.iter().find(|n| n.label == "Sketches").unwrap();
        assert_eq!(sketches.depth, 2);
    }

    #[test]
    fn blank_name_never_reaches_the_store() {
        let mut env = TestEnv::sample();
        env.store.set_simulate_write_error(true);
        assert!(matches!(
            folder(&mut env.store, &mut env.session, "   ", None),
            Err(FolioError::Validation(_))
        ));
    }

    #[test]
    fn unknown_parent_leaves_session_unchanged() {
        let mut env = TestEnv::sample();
        let before = env.session.view();
        assert!(matches!(
            folder(&mut env.store, &mut env.session, "X", Some("missing")),
            Err(FolioError::FolderNotFound(_))
        ));
        assert_eq!(env.session.view(), before);
    }

    #[test]
    fn new_document_uses_template_and_is_selected() {
        let mut env = TestEnv::sample();
        let result = document(
            &mut env.store,
            &mut env.session,
            &env.config,
            " Retro ",
            None,
            Some("archive"),
        )
        .unwrap();

        let doc = result.document.unwrap();
        assert_eq!(doc.title, "Retro");
        assert_eq!(doc.content, "# Retro\n\n");
        assert_eq!(env.session.selected_id(), Some(doc.id.as_str()));

        let node = result.nodes.iter().find(|n| n.id == doc.id).unwrap();
        assert!(node.active);
        assert_eq!(node.depth, 2);
    }

    #[test]
    fn explicit_content_overrides_template() {
        let mut env = TestEnv::new();
        let result = document(
            &mut env.store,
            &mut env.session,
            &env.config,
            "Scratch",
            Some("just text"),
            None,
        )
        .unwrap();
        assert_eq!(result.document.unwrap().content, "just text");
    }

    #[test]
    fn store_error_leaves_session_unchanged() {
        let mut env = TestEnv::sample();
        env.session.select("plan").unwrap();
        env.store.set_simulate_write_error(true);

        let err = document(&mut env.store, &mut env.session, &env.config, "Doc", None, None);
        assert!(matches!(err, Err(FolioError::Store(_))));
        assert_eq!(env.session.selected_id(), Some("plan"));
        assert_eq!(env.session.stats().documents, 5);
    }
}
