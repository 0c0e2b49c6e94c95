// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the tagrank CLI.
//!
//! Colors only when stdout is a TTY and `NO_COLOR` is unset, so piped output
//! stays plain `title - score` lines.

use tagrank::{Attribute, Entity, Score, TokenSet, Weight};

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 64;

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

use colors::*;

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply styles if colors are enabled, otherwise return plain text
pub fn styled(enabled: bool, styles: &[&str], text: &str) -> String {
    if enabled {
        format!("{}{}{}", styles.join(""), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

// ═══════════════════════════════════════════════════════════════════════════
// SEARCH RESULTS
// ═══════════════════════════════════════════════════════════════════════════

/// One result line: `Mk1 Pod - 30`.
pub fn result_line(entity: &Entity, score: Score, color: bool) -> String {
    let title = if entity.title.is_empty() {
        &entity.id
    } else {
        &entity.title
    };
    let score = if score > 0 {
        styled(color, &[BOLD, GREEN], &score.to_string())
    } else {
        styled(color, &[DIM], &score.to_string())
    };
    format!("{} - {}", title, score)
}

// ═══════════════════════════════════════════════════════════════════════════
// INSPECT
// ═══════════════════════════════════════════════════════════════════════════

/// Label for the attribute that owns a weight.
fn weight_label(weight: Weight) -> &'static str {
    match Attribute::PRECEDENCE.iter().find(|a| a.weight() == weight) {
        Some(Attribute::Title) => "title",
        Some(Attribute::Name) => "name",
        Some(Attribute::Tags) => "tags",
        Some(Attribute::Description) => "description",
        None => "?",
    }
}

/// Token set rows, heaviest first, then alphabetical.
pub fn token_rows(tokens: &TokenSet, color: bool) -> Vec<String> {
    let mut entries: Vec<(&str, Weight)> = tokens.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries
        .into_iter()
        .map(|(token, weight)| {
            format!(
                "  {:<24} {:>3}  {}",
                token,
                styled(color, &[YELLOW], &weight.to_string()),
                styled(color, &[GRAY], weight_label(weight))
            )
        })
        .collect()
}

/// Section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str, color: bool) -> String {
    let label_part = format!("─ {} ", styled(color, &[BOLD, CYAN], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    format!("┌{}{}┐", label_part, "─".repeat(remaining))
}

/// Content line: │ content          │
pub fn row(content: &str) -> String {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    format!("│{}{}│", content, " ".repeat(pad))
}

/// Section footer: └──────────────────┘
pub fn section_bot() -> String {
    format!("└{}┘", "─".repeat(BOX_WIDTH))
}

/// Full inspect view of one entity and its tokens.
pub fn entity_panel(entity: &Entity, tokens: &TokenSet, color: bool) -> Vec<String> {
    let mut lines = vec![section_top("ENTITY", color)];
    for (label, value) in [
        ("id", entity.id.as_str()),
        ("title", entity.title.as_str()),
        ("name", entity.name.as_str()),
        ("tags", entity.tags.as_str()),
        ("description", entity.description.as_str()),
    ] {
        lines.push(row(&format!("  {:<12} {}", label, value)));
    }
    lines.push(section_bot());
    lines.push(section_top(&format!("TOKENS ({})", tokens.len()), color));
    lines.extend(token_rows(tokens, color).iter().map(|line| row(line)));
    lines.push(section_bot());
    lines
}
