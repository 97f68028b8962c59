use crate::commands::helpers::reveal;
use crate::commands::CmdResult;
use crate::error::{FolioError, Result};
use crate::session::Session;
use tracing::debug;

/// Selects a document and expands the folders above it so it is visible.
pub fn run(session: &mut Session, id: &str) -> Result<CmdResult> {
    let location = session
        .store()
        .locate_document(id)
        .ok_or_else(|| FolioError::DocumentNotFound(id.to_string()))?;
    let parent_id = location.parent().map(|f| f.id.clone());
    let path = location.folder_path().join("/");

    let changed = session.select(id)?;
    debug!(id, path = %path, changed, "document selected");
    if let Some(parent_id) = parent_id {
        reveal(session, &parent_id);
    }

    let mut result = CmdResult::default().with_view(session);
    if let Some(document) = session.selected_document() {
        result = result.with_document(document.clone());
    }
    Ok(result)
}
