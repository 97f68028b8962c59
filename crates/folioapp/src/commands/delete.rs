use crate::commands::helpers::reload_into;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FolioError, Result};
use crate::session::Session;
use crate::store::TreeSource;
use tracing::{info, warn};

/// Deletes an empty folder. A folder that still holds anything is refused
/// by the store and the session keeps showing it.
pub fn folder<S: TreeSource>(store: &mut S, session: &mut Session, id: &str) -> Result<CmdResult> {
    if let Err(e) = store.delete_folder(id) {
        if let FolioError::FolderNotEmpty { name, .. } = &e {
            warn!(id, name = %name, "refused to delete non-empty folder");
        }
        return Err(e);
    }
    info!(id, "folder deleted");

    let mut result = CmdResult::default();
    reload_into(store, session, &mut result)?;
    result.add_message(CmdMessage::success("Folder deleted"));
    Ok(result.with_view(session))
}

/// Deletes a document. Deleting the selected document clears the selection.
pub fn document<S: TreeSource>(
    store: &mut S,
    session: &mut Session,
    id: &str,
) -> Result<CmdResult> {
    let title = session
        .store()
        .find_document(id)
        .map(|d| d.title.clone())
        .unwrap_or_else(|| id.to_string());

    store.delete_document(id)?;
    info!(id, "document deleted");
    if session.selected_id() == Some(id) {
        session.clear_selection();
    }

    let mut result = CmdResult::default();
    reload_into(store, session, &mut result)?;
    result.add_message(CmdMessage::success(format!("Document deleted: {}", title)));
    Ok(result.with_view(session))
}
