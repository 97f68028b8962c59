use crate::config::FolioConfig;
use crate::model::{Document, Folder, Tree};
use crate::session::Session;
use crate::store::memory::MemStore;

/// A small tree covering nesting, empty folders and root documents.
///
/// ```text
/// Inbox                    (doc: inbox)
/// Work                     (folder: work)
///   Plan                   (doc: plan)
///   README intro           (doc: readme)
///   Archive                (folder: archive)
///     Old notes            (doc: old-notes)
/// Docs                     (folder: docs)
///   Design                 (folder: design)
///     Sketch draft         (doc: sketch)
/// Empty                    (folder: empty)
/// ```
pub fn sample_tree() -> Tree {
    Tree::new()
        .with_document(Document::new("inbox", "Inbox", "# Inbox\n\n"))
        .with_folder(
            Folder::new("work", "Work")
                .with_document(Document::new("plan", "Plan", "# Plan\n\n"))
                .with_document(Document::new("readme", "README intro", ""))
                .with_folder(
                    Folder::new("archive", "Archive")
                        .with_document(Document::new("old-notes", "Old notes", "")),
                ),
        )
        .with_folder(
            Folder::new("docs", "Docs").with_folder(
                Folder::new("design", "Design")
                    .with_document(Document::new("sketch", "Sketch draft", "")),
            ),
        )
        .with_folder(Folder::new("empty", "Empty"))
}

/// Store, session and config wired together the way a client would hold them.
pub struct TestEnv {
    pub store: MemStore,
    pub session: Session,
    pub config: FolioConfig,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    /// An empty store with welcome seeding switched off.
    pub fn new() -> Self {
        Self::with_tree(Tree::new())
    }

    /// A store holding `tree`, with the session already loaded from it.
    pub fn with_tree(tree: Tree) -> Self {
        let mut session = Session::new();
        // Fixture trees are valid; a failure here is a broken fixture.
        session
            .replace_tree(tree.clone())
            .unwrap_or_else(|e| panic!("fixture tree rejected: {}", e));
        Self {
            store: MemStore::with_tree(tree),
            session,
            config: FolioConfig {
                seed_welcome: false,
                ..FolioConfig::default()
            },
        }
    }

    pub fn sample() -> Self {
        Self::with_tree(sample_tree())
    }
}
