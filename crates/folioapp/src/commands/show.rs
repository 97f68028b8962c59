use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FolioError, Result};
use crate::session::Session;

/// Returns a document with its content: `id` if given, otherwise the
/// selected document. Showing a document does not select it.
pub fn run(session: &Session, id: Option<&str>) -> Result<CmdResult> {
    let document = match id {
        Some(id) => session
            .store()
            .find_document(id)
            .ok_or_else(|| FolioError::DocumentNotFound(id.to_string()))?,
        None => match session.selected_document() {
            Some(document) => document,
            None => {
                let mut result = CmdResult::default();
                result.add_message(CmdMessage::warning("No document selected"));
                return Ok(result);
            }
        },
    };
    Ok(CmdResult::default().with_document(document.clone()))
}
