// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the cinedex CLI.
//!
//! OneDark colors on dark terminals, One Light on light ones. Detection tries
//! `CINEDEX_THEME` first, then `COLORFGBG`, then falls back to dark. Respects
//! `NO_COLOR` and drops colors entirely when stdout isn't a TTY.

use cinedex::{Document, QueryMode, SearchHit, SnapshotInfo};
use std::sync::{Arc, OnceLock};

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("CINEDEX_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164); // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, ANSI escapes excluded
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

/// Cut to `width` characters, marking the cut with an ellipsis.
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn border(s: &str) -> String {
    themed(GRAY, &[], s)
}

/// │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content) + 1);
    println!("{} {}{}{}", border("│"), content, " ".repeat(pad), border("│"));
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        border("┌"),
        label_part,
        border(&format!("{}┐", "─".repeat(remaining)))
    );
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}", border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

fn mode_badge(mode: QueryMode) -> String {
    let label = format!("[{}]", mode.as_str().to_uppercase());
    match mode {
        QueryMode::Exact => themed(GREEN, &[BOLD], &label),
        QueryMode::Fuzzy | QueryMode::Advanced => themed(MAGENTA, &[BOLD], &label),
        QueryMode::Wildcard => themed(YELLOW, &[BOLD], &label),
        QueryMode::Suggest => themed(CYAN, &[BOLD], &label),
    }
}

fn score(value: f64) -> String {
    themed(YELLOW, &[], &format!("{:>7.3}", value))
}

fn count(value: usize) -> String {
    themed(YELLOW, &[], &format!("{:>6}", value))
}

// ═══════════════════════════════════════════════════════════════════════════
// COMMAND OUTPUT
// ═══════════════════════════════════════════════════════════════════════════

pub fn print_hits(query: &str, mode: QueryMode, hits: &[SearchHit]) {
    section_top(&format!("{} \"{}\"", mode.as_str().to_uppercase(), query));
    row(&format!("{} {} hit(s)", mode_badge(mode), hits.len()));
    for hit in hits {
        let terms: Vec<String> = hit
            .matched
            .iter()
            .map(|m| match m.distance {
                0 => format!("{}:{}", m.field, m.term),
                d => format!("{}:{}~{}", m.field, m.term, d),
            })
            .collect();
        row(&format!(
            "{} {:>5}  {}",
            score(hit.score),
            hit.id().get(),
            themed(CYAN, &[BOLD], &truncate(&hit.document.title(), 40))
        ));
        row(&themed(GRAY, &[DIM], &truncate(&format!("        {}", terms.join(" ")), BOX_WIDTH - 2)));
    }
    section_bot();
}

pub fn print_terms(prefix: &str, terms: &[String]) {
    section_top(&format!("SUGGEST \"{}\"", prefix));
    if terms.is_empty() {
        row(&themed(GRAY, &[DIM], "no suggestions"));
    }
    for term in terms {
        row(&themed(CYAN, &[], term));
    }
    section_bot();
}

pub fn print_stats(info: &SnapshotInfo) {
    section_top("INDEX");
    row(&format!("generation   {}", info.generation));
    row(&format!("fingerprint  {}", themed(MAGENTA, &[], &info.fingerprint)));
    row(&format!("documents    {}", info.stats.documents));
    row(&format!("terms        {}", info.stats.total_terms));
    row(&format!("postings     {}", info.stats.total_postings));
    section_bot();

    section_top("FIELDS");
    for field in &info.stats.fields {
        row(&format!(
            "{:<16} {} terms {} postings",
            field.name,
            count(field.terms),
            count(field.postings)
        ));
    }
    section_bot();
}

pub fn print_facets(field: &str, counts: &[(String, usize)]) {
    section_top(&format!("FACETS {}", field));
    for (value, n) in counts {
        row(&format!("{} {}", count(*n), truncate(value, BOX_WIDTH - 10)));
    }
    section_bot();
}

pub fn print_documents(docs: &[Arc<Document>]) {
    section_top("DOCUMENTS");
    for doc in docs {
        row(&format!(
            "{:>5}  {}",
            doc.id.get(),
            themed(CYAN, &[BOLD], &truncate(&doc.title(), BOX_WIDTH - 10))
        ));
    }
    section_bot();
}
