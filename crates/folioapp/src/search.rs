//! # Title Search and Highlighting
//!
//! Search matches **document titles only**. Folders are never results, but
//! the immediate containing folder's name is attached to each match so the
//! presentation layer can show where the document lives.
//!
//! ## Keyword Normalization
//!
//! The raw input is trimmed and case-folded by [`Keyword::parse`]. An empty
//! keyword means "no search": callers fall back to the regular tree view.
//!
//! Keyword and titles go through the same per-char fold ([`fold_char`]):
//! Unicode lower-casing, with the final sigma `ς` treated as `σ`. A title is
//! therefore always found by its own text, whatever its case.
//!
//! ## Result Order
//!
//! Results follow the tree traversal order (see [`crate::tree::walk`]):
//! root documents first, then each root folder's subtree in pre-order, with a
//! folder's own documents tested before its child folders. No ranking is
//! applied; the order is the tree's order.
//!
//! ## Highlighting
//!
//! [`highlight`] splits a title into [`MatchSegment`]s marking every
//! non-overlapping, case-insensitive occurrence of the keyword, scanning left
//! to right. The segments always concatenate back to the original title.
//! Matching is done char by char against the folded keyword, so titles
//! whose folded form has a different byte length never produce slices that
//! fall off a char boundary. A char whose fold expands (`İ` becomes `i̇`) is
//! highlighted whole when the keyword covers the start of its expansion.

use crate::model::{Document, Tree};
use crate::tree::{walk, Visit};
use serde::Serialize;
use std::ops::ControlFlow;
use tracing::debug;

/// A normalized (trimmed, case-folded), non-empty search keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword(String);

impl Keyword {
    /// Returns `None` for input that is empty after trimming.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.chars().flat_map(fold_char).collect()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A segment of text in a highlighted title, either plain text or a matched term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum MatchSegment {
    Plain(String),
    Match(String),
}

impl MatchSegment {
    pub fn text(&self) -> &str {
        match self {
            MatchSegment::Plain(s) | MatchSegment::Match(s) => s,
        }
    }
}

/// A document whose title contains the keyword.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub document: Document,
    /// Name of the immediate containing folder; `None` for root documents.
    pub folder_name: Option<String>,
}

/// Finds documents whose title contains `keyword`, in tree order.
pub fn search(tree: &Tree, keyword: &Keyword) -> Vec<Match> {
    let mut matches = Vec::new();
    let _ = walk(tree, |visit| {
        if let Visit::Document {
            document,
            ancestors,
        } = visit
        {
            if title_matches(&document.title, keyword) {
                matches.push(Match {
                    document: document.clone(),
                    folder_name: ancestors.last().map(|f| f.name.clone()),
                });
            }
        }
        ControlFlow::Continue(())
    });
    debug!(keyword = %keyword, hits = matches.len(), "title search");
    matches
}

/// Case-insensitive substring test, consistent with [`highlight`].
pub fn title_matches(title: &str, keyword: &Keyword) -> bool {
    title
        .char_indices()
        .any(|(start, _)| match_len_at(&title[start..], keyword.as_str()).is_some())
}

/// Splits `text` into plain and matched segments.
pub fn highlight(text: &str, keyword: &Keyword) -> Vec<MatchSegment> {
    let needle = keyword.as_str();
    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut idx = 0;

    while idx < text.len() {
        if let Some(len) = match_len_at(&text[idx..], needle) {
            if idx > plain_start {
                segments.push(MatchSegment::Plain(text[plain_start..idx].to_string()));
            }
            segments.push(MatchSegment::Match(text[idx..idx + len].to_string()));
            idx += len;
            plain_start = idx;
        } else {
            // Advance one char
            idx += text[idx..].chars().next().map_or(1, char::len_utf8);
        }
    }

    if plain_start < text.len() {
        segments.push(MatchSegment::Plain(text[plain_start..].to_string()));
    }

    segments
}

/// Case fold for a single char. Word-final sigma folds like any other sigma.
fn fold_char(c: char) -> impl Iterator<Item = char> {
    c.to_lowercase().map(|c| if c == 'ς' { 'σ' } else { c })
}

/// If `text` starts with `needle` (compared against the folded text),
/// returns the byte length of the matching prefix of `text`.
fn match_len_at(text: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    let mut folded = String::new();
    for (offset, c) in text.char_indices() {
        folded.extend(fold_char(c));
        if folded.len() >= needle.len() {
            return folded
                .starts_with(needle)
                .then_some(offset + c.len_utf8());
        }
        if !needle.starts_with(folded.as_str()) {
            return None;
        }
    }
    None
}
