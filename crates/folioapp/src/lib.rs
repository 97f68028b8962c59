//! # Folio Architecture
//!
//! Folio is a **UI-agnostic library for hierarchical documents**: folders
//! nest folders and documents, documents carry opaque (usually markdown)
//! content. The `folio` binary is one client of this library.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client (the `folio` CLI)                                   │
//! │  - Parses arguments, renders output, persists the session   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Store call, then full reload into the session            │
//! └─────────────────────────────────────────────────────────────┘
//!                  │                              │
//!                  ▼                              ▼
//! ┌───────────────────────────────┐ ┌───────────────────────────┐
//! │  Core (session, tree,         │ │  Storage (store/)         │
//! │  expansion, search, stats,    │ │  - TreeSource trait       │
//! │  view)                        │ │  - FileStore, MemStore    │
//! │  - Pure, in-memory            │ │                           │
//! └───────────────────────────────┘ └───────────────────────────┘
//! ```
//!
//! Data flows one way: store mutation, full tree reload, derived views.
//! The core never edits the tree it shows.
//!
//! ## No I/O in the Core
//!
//! From `api.rs` inward, code takes plain arguments and returns
//! `Result<CmdResult>`. It never writes to stdout/stderr, never exits the
//! process and never assumes a terminal. Logging goes through `tracing`;
//! the client decides where it ends up.
//!
//! ## Testing Strategy
//!
//! 1. **Core** (`tree`, `search`, `view`, ...): unit tests of the algorithms.
//! 2. **Commands**: most behavioral tests, against `MemStore`.
//! 3. **API**: dispatch only.
//! 4. **CLI**: end-to-end tests of the binary with a temp data dir.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade, entry point for clients
//! - [`commands`]: one module per user operation
//! - [`session`]: explicit application state
//! - [`tree`]: canonical tree, validation and traversal
//! - [`expansion`]: which folders are open
//! - [`search`]: keyword matching and highlight segments
//! - [`stats`]: folder and document totals
//! - [`view`]: projection into render-ready nodes
//! - [`store`]: persistence collaborator trait and implementations
//! - [`model`]: `Tree`, `Folder`, `Document`
//! - [`config`]: configuration
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod expansion;
pub mod model;
pub mod search;
pub mod session;
pub mod stats;
pub mod store;
pub mod tree;
pub mod view;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
