use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::Session;
use crate::view::NodeKind;
use tracing::debug;

/// The browsing tree, ignoring any keyword left on the session.
pub fn tree(session: &mut Session) -> Result<CmdResult> {
    session.clear_keyword();
    let mut result = CmdResult::default().with_view(session);
    if result.nodes.is_empty() {
        result.add_message(CmdMessage::info("No folders or documents yet"));
    }
    Ok(result)
}

/// Flat, highlighted search results for `raw`. A blank keyword falls back
/// to the browsing tree.
pub fn search(session: &mut Session, raw: &str) -> Result<CmdResult> {
    session.set_keyword(raw);
    let result = CmdResult::default().with_view(session);
    session.clear_keyword();

    let hits = result
        .nodes
        .iter()
        .filter(|n| n.kind == NodeKind::Document)
        .count();
    debug!(keyword = raw, hits, "search");
    Ok(result)
}

pub fn stats(session: &Session) -> Result<CmdResult> {
    Ok(CmdResult::default().with_stats(session.stats()))
}
