//! # CLI Behavior
//!
//! This is **one possible UI client** for folio, not the application itself.
//! It is the only place that knows about terminal I/O, exit codes and output
//! formatting.
//!
//! ## Naked Execution (`folio`)
//!
//! Running `folio` with no arguments is `folio tree`. Browsing is most of
//! the usage and should be the path of least resistance.
//!
//! ## State Between Runs
//!
//! A terminal client lives for one command, but the tree view has state:
//! which folders are open and which document is selected. That state is
//! kept in `session.json` next to `tree.json` and restored on every run.
//! Ids that no longer exist are dropped when the tree is loaded.
//!
//! ## Writing Content
//!
//! `folio write <id>` replaces a document's content wholesale, taking it from
//! `--content` or, when piped, from stdin:
//!
//! ```text
//! $ cat notes.md | folio write 5f0c…
//! ```
//!
//! ## Module Structure
//!
//! - `commands`: context wiring, dispatch, session persistence
//! - `render`: output formatting (tree lines, highlights, messages)
//! - `setup`: argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
