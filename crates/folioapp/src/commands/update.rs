use crate::commands::helpers::reload_into;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FolioError, Result};
use crate::session::Session;
use crate::store::TreeSource;
use tracing::info;

/// Replaces a document's content wholesale. Content is stored as given.
pub fn run<S: TreeSource>(
    store: &mut S,
    session: &mut Session,
    id: &str,
    content: &str,
) -> Result<CmdResult> {
    store.update_document_content(id, content)?;
    info!(id, bytes = content.len(), "document saved");

    let mut result = CmdResult::default();
    reload_into(store, session, &mut result)?;
    let document = session
        .store()
        .find_document(id)
        .cloned()
        .ok_or_else(|| FolioError::DocumentNotFound(id.to_string()))?;

    result.add_message(CmdMessage::success(format!(
        "Document saved: {}",
        document.title
    )));
    Ok(result.with_document(document))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestEnv;

    #[test]
    fn saves_content_and_bumps_timestamp() {
        let mut env = TestEnv::sample();
        let before = env.session.store().find_document("plan").unwrap().updated_at;

        let result = run(&mut env.store, &mut env.session, "plan", "# Plan\n\n- ship it").unwrap();
        let doc = result.document.unwrap();
        assert_eq!(doc.content, "# Plan\n\n- ship it");
        assert!(doc.updated_at >= before);
        assert_eq!(
            env.session.store().find_document("plan").unwrap().content,
            "# Plan\n\n- ship it"
        );
    }

    #[test]
    fn empty_content_is_allowed() {
        let mut env = TestEnv::sample();
        let result = run(&mut env.store, &mut env.session, "plan", "").unwrap();
        assert_eq!(result.document.unwrap().content, "");
    }

    #[test]
    fn unknown_document_fails() {
        let mut env = TestEnv::sample();
        assert!(matches!(
            run(&mut env.store, &mut env.session, "ghost", "x"),
            Err(FolioError::DocumentNotFound(_))
        ));
    }
}
