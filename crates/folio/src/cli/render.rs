//! # Rendering
//!
//! Turns a [`CmdResult`] into terminal text. Every function here returns a
//! `String`; printing happens in `commands.rs`, which keeps rendering easy
//! to test.
//!
//! ## Tree Lines
//!
//! ```text
//! ▾ Work                                   [work]
//!     Plan                                 [plan]
//!   ➤ README intro                         [readme]
//!   ▸ Archive                              [archive]
//! · Empty                                  [empty]
//! ```
//!
//! - `▸` collapsed, `▾` expanded, `·` nothing to expand
//! - `➤` marks the selected document
//! - search hits show the containing folder after the title
//!
//! Labels are truncated to the terminal width (unicode-aware); the id
//! column is never cut, since commands need it.

use chrono::{DateTime, Utc};
use colored::Colorize;
use folioapp::commands::{CmdMessage, CmdResult, MessageLevel};
use folioapp::model::Document;
use folioapp::search::MatchSegment;
use folioapp::stats::TreeStats;
use folioapp::view::{DisplayNode, NodeKind};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Fallback when the terminal width is unknown (pipes, tests).
pub const LINE_WIDTH: usize = 100;

pub const EXPANDED_MARKER: &str = "▾";
pub const COLLAPSED_MARKER: &str = "▸";
pub const LEAF_MARKER: &str = "·";
pub const ACTIVE_MARKER: &str = "➤";

#[derive(Debug, Clone, Copy)]
pub struct Layout {
    pub indent_width: usize,
    pub line_width: usize,
    pub show_stats: bool,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            indent_width: 2,
            line_width: LINE_WIDTH,
            show_stats: true,
        }
    }
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

/// The tree (or search results) followed by the stats bar.
pub fn render_listing(result: &CmdResult, layout: &Layout) -> String {
    let mut out = String::new();
    for node in &result.nodes {
        out.push_str(&render_node(node, layout));
        out.push('\n');
    }
    if layout.show_stats {
        if let Some(stats) = result.stats {
            if !result.nodes.is_empty() {
                out.push('\n');
            }
            out.push_str(&render_stats(&stats));
            out.push('\n');
        }
    }
    out
}

pub fn render_stats(stats: &TreeStats) -> String {
    format!(
        "{} {} · {} {}",
        stats.folders,
        plural(stats.folders, "folder", "folders"),
        stats.documents,
        plural(stats.documents, "document", "documents")
    )
    .dimmed()
    .to_string()
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 {
        one
    } else {
        many
    }
}

fn render_node(node: &DisplayNode, layout: &Layout) -> String {
    let indent = " ".repeat(node.depth * layout.indent_width);

    if node.kind == NodeKind::Placeholder {
        return format!("{}{}", indent, node.label.dimmed().italic());
    }

    let marker = match node.kind {
        NodeKind::Folder if node.expanded => EXPANDED_MARKER,
        NodeKind::Folder if node.expandable => COLLAPSED_MARKER,
        NodeKind::Folder => LEAF_MARKER,
        _ if node.active => ACTIVE_MARKER,
        _ => " ",
    };
    let prefix = format!("{}{} ", indent, marker);

    let secondary = node
        .secondary_label
        .as_ref()
        .map(|name| format!("  in {}", name))
        .unwrap_or_default();
    let id_col = format!("  [{}]", node.id);

    let fixed = prefix.width() + secondary.width() + id_col.width();
    let available = layout.line_width.saturating_sub(fixed);
    let label = truncate_to_width(&node.label, available);
    let padding = " ".repeat(available.saturating_sub(label.width()));

    let label = match &node.highlight {
        // Highlights only survive when nothing was cut
        Some(segments) if label == node.label => render_segments(segments),
        _ => style_label(&label, node),
    };
    let marker = match node.kind {
        NodeKind::Document if node.active => prefix.green().bold().to_string(),
        NodeKind::Folder if !node.expandable => prefix.dimmed().to_string(),
        _ => prefix,
    };

    format!(
        "{}{}{}{}{}",
        marker,
        label,
        secondary.dimmed(),
        padding,
        id_col.dimmed()
    )
}

fn style_label(label: &str, node: &DisplayNode) -> String {
    match node.kind {
        NodeKind::Folder => label.blue().bold().to_string(),
        NodeKind::Document if node.active => label.green().bold().to_string(),
        _ => label.to_string(),
    }
}

fn render_segments(segments: &[MatchSegment]) -> String {
    segments
        .iter()
        .map(|segment| match segment {
            MatchSegment::Plain(text) => text.normal().to_string(),
            MatchSegment::Match(text) => text.black().on_yellow().to_string(),
        })
        .collect()
}

pub fn render_document(document: &Document) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", document.title.bold()));
    out.push_str(&format!(
        "{}\n",
        format!(
            "[{}] updated {}",
            document.id,
            format_time_ago(document.updated_at)
        )
        .dimmed()
    ));
    out.push_str("--------------------------------\n");
    out.push_str(&document.content);
    if !document.content.ends_with('\n') {
        out.push('\n');
    }
    out
}

pub fn render_json(result: &CmdResult) -> String {
    match serde_json::to_string_pretty(result) {
        Ok(json) => format!("{}\n", json),
        Err(e) => format!("{{\"error\": \"{}\"}}\n", e),
    }
}

pub(crate) fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    timeago::Formatter::new().convert(duration.to_std().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    fn node(kind: NodeKind, id: &str, label: &str, depth: usize) -> DisplayNode {
        DisplayNode {
            kind,
            id: id.to_string(),
            label: label.to_string(),
            highlight: None,
            secondary_label: None,
            depth,
            expandable: kind == NodeKind::Folder,
            expanded: false,
            active: false,
        }
    }

    #[test]
    fn truncates_wide_text() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello world", 6), "hello…");
        assert_eq!(truncate_to_width("日本語テキスト", 7), "日本語…");
    }

    #[test]
    fn renders_markers_and_indentation() {
        plain();
        let mut folder = node(NodeKind::Folder, "work", "Work", 0);
        folder.expanded = true;
        let mut doc = node(NodeKind::Document, "plan", "Plan", 1);
        doc.active = true;
        let mut empty = node(NodeKind::Folder, "empty", "Empty", 0);
        empty.expandable = false;

        let result = CmdResult::default().with_nodes(vec![folder, doc, empty]);
        let layout = Layout {
            line_width: 30,
            ..Layout::default()
        };
        let out = render_listing(&result, &layout);
        let lines: Vec<_> = out.lines().collect();

        assert!(lines[0].starts_with("▾ Work"));
        assert!(lines[0].ends_with("[work]"));
        assert!(lines[1].starts_with("  ➤ Plan"));
        assert!(lines[2].starts_with("· Empty"));
        assert_eq!(lines[0].width(), 30);
    }

    #[test]
    fn search_hits_show_folder_and_highlight() {
        plain();
        let mut hit = node(NodeKind::Document, "sketch", "Sketch draft", 0);
        hit.highlight = Some(vec![
            MatchSegment::Match("Sketch".into()),
            MatchSegment::Plain(" draft".into()),
        ]);
        hit.secondary_label = Some("Design".into());

        let out = render_node(&hit, &Layout::default());
        assert!(out.contains("Sketch draft  in Design"));
    }

    #[test]
    fn placeholder_is_just_the_label() {
        plain();
        let p = DisplayNode {
            kind: NodeKind::Placeholder,
            id: String::new(),
            label: "No documents match \"zzz\"".into(),
            highlight: None,
            secondary_label: None,
            depth: 0,
            expandable: false,
            expanded: false,
            active: false,
        };
        assert_eq!(render_node(&p, &Layout::default()), "No documents match \"zzz\"");
    }

    #[test]
    fn stats_bar_respects_layout() {
        plain();
        let result = CmdResult::default().with_stats(TreeStats {
            folders: 1,
            documents: 3,
        });
        assert_eq!(
            render_listing(&result, &Layout::default()),
            "1 folder · 3 documents\n"
        );
        let hidden = Layout {
            show_stats: false,
            ..Layout::default()
        };
        assert_eq!(render_listing(&result, &hidden), "");
    }

    #[test]
    fn document_shows_title_and_content() {
        plain();
        let doc = Document::new("d1", "Plan", "# Plan\n\nbody");
        let out = render_document(&doc);
        assert!(out.starts_with("Plan\n[d1] updated"));
        assert!(out.ends_with("# Plan\n\nbody\n"));
    }

    #[test]
    fn messages_one_per_line() {
        plain();
        let out = render_messages(&[CmdMessage::success("ok"), CmdMessage::warning("hmm")]);
        assert_eq!(out, "ok\nhmm\n");
    }
}
