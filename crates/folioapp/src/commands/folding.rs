//! Expand/collapse commands.
//!
//! These only touch the session's expansion state; the store is never
//! involved. Unknown folder ids are reported as errors here even though
//! [`ExpansionState`](crate::expansion::ExpansionState) itself accepts any id.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FolioError, Result};
use crate::session::Session;
use tracing::debug;

fn known_folder(session: &Session, id: &str) -> Result<()> {
    match session.store().find_folder(id) {
        Some(_) => Ok(()),
        None => Err(FolioError::FolderNotFound(id.to_string())),
    }
}

pub fn toggle(session: &mut Session, id: &str) -> Result<CmdResult> {
    known_folder(session, id)?;
    let expanded = session.toggle(id);
    debug!(id, expanded, "folder toggled");
    Ok(CmdResult::default().with_view(session))
}

pub fn expand(session: &mut Session, id: &str) -> Result<CmdResult> {
    known_folder(session, id)?;
    session.expand(id);
    Ok(CmdResult::default().with_view(session))
}

pub fn collapse(session: &mut Session, id: &str) -> Result<CmdResult> {
    known_folder(session, id)?;
    session.collapse(id);
    Ok(CmdResult::default().with_view(session))
}

pub fn collapse_all(session: &mut Session) -> Result<CmdResult> {
    let count = session.expansion().len();
    session.collapse_all();

    let mut result = CmdResult::default().with_view(session);
    if count > 0 {
        result.add_message(CmdMessage::info(format!("Collapsed {} folder(s)", count)));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestEnv;

    fn labels(result: &CmdResult) -> Vec<&str> {
        result.nodes.iter().map(|n| n.label.as_str()).collect()
    }

    #[test]
    fn toggle_twice_restores_view() {
        let mut env = TestEnv::sample();
        let initial = env.session.view();

        let opened = toggle(&mut env.session, "work").unwrap();
        assert_eq!(
            labels(&opened),
            vec!["Inbox", "Work", "Plan", "README intro", "Archive", "Docs", "Empty"]
        );

        let closed = toggle(&mut env.session, "work").unwrap();
        assert_eq!(closed.nodes, initial);
    }

    #[test]
    fn expand_is_idempotent() {
        let mut env = TestEnv::sample();
        expand(&mut env.session, "docs").unwrap();
        let again = expand(&mut env.session, "docs").unwrap();
        assert_eq!(labels(&again), vec!["Inbox", "Work", "Docs", "Design", "Empty"]);
    }

    #[test]
    fn collapse_hides_subtree_but_remembers_children() {
        let mut env = TestEnv::sample();
        expand(&mut env.session, "docs").unwrap();
        expand(&mut env.session, "design").unwrap();
        collapse(&mut env.session, "docs").unwrap();
        assert!(env.session.expansion().is_expanded("design"));

        let reopened = expand(&mut env.session, "docs").unwrap();
        assert!(labels(&reopened).contains(&"Sketch draft"));
    }

    #[test]
    fn collapse_all_reports_count() {
        let mut env = TestEnv::sample();
        expand(&mut env.session, "work").unwrap();
        expand(&mut env.session, "archive").unwrap();

        let result = collapse_all(&mut env.session).unwrap();
        assert_eq!(result.messages[0].content, "Collapsed 2 folder(s)");
        assert_eq!(labels(&result), vec!["Inbox", "Work", "Docs", "Empty"]);

        assert!(collapse_all(&mut env.session).unwrap().messages.is_empty());
    }

    #[test]
    fn unknown_folder_is_rejected() {
        let mut env = TestEnv::sample();
        assert!(matches!(
            toggle(&mut env.session, "ghost"),
            Err(FolioError::FolderNotFound(_))
        ));
        assert!(env.session.expansion().is_empty());
    }
}
