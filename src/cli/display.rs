// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the damerau CLI.
//!
//! Plain numbers for pipelines, JSON for scripts, and a box-drawn table for
//! humans. In the table the final cell is bold and cells won by a
//! transposition are highlighted, using OneDark on dark terminals and One
//! Light on light ones. Respects `NO_COLOR` and non-TTY detection.
//!
//! # Theme detection order
//!
//! 1. `DAMERAU_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::fmt::Write as _;
use std::sync::OnceLock;

use damerau::{DistanceTable, Variant};
use serde::Serialize;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn parse_theme(explicit: Option<&str>, colorfgbg: Option<&str>) -> Theme {
    if let Some(theme) = explicit {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Some(bg) = colorfgbg.and_then(|v| v.split(';').next_back()) {
        if let Ok(bg_num) = bg.parse::<u8>() {
            if bg_num >= 7 && bg_num != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

fn detect_theme() -> Theme {
    let explicit = std::env::var("DAMERAU_THEME").ok();
    let colorfgbg = std::env::var("COLORFGBG").ok();
    parse_theme(explicit.as_deref(), colorfgbg.as_deref())
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// COLORS
// ═══════════════════════════════════════════════════════════════════════════

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

/// Highlight for transposition cells.
fn magenta() -> String {
    rgb(match theme() {
        Theme::Dark => (198, 120, 221), // #c678dd
        Theme::Light => (166, 38, 164), // #a626a4
    })
}

/// Header color.
fn blue() -> String {
    rgb(match theme() {
        Theme::Dark => (97, 175, 239),  // #61afef
        Theme::Light => (64, 120, 242), // #4078f2
    })
}

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

fn paint(on: bool, style: &str, text: &str) -> String {
    if on {
        format!("{}{}{}", style, text, RESET)
    } else {
        text.to_string()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// DISTANCE OUTPUT
// ═══════════════════════════════════════════════════════════════════════════

/// JSON shape of `damerau distance --json`.
#[derive(Debug, Serialize)]
pub struct DistanceReport {
    pub a_len: usize,
    pub b_len: usize,
    pub variant: Variant,
    pub unit: &'static str,
    /// `None` when a `--max` budget was exceeded.
    pub distance: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<usize>,
}

impl DistanceReport {
    /// One-line JSON form; failures come back as a message for stderr.
    pub fn to_json_line(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| format!("failed to serialize report: {}", e))
    }
}

/// Bare-number form: the distance, or `>K` when over budget.
pub fn format_distance(distance: Option<usize>, max: Option<usize>) -> String {
    match (distance, max) {
        (Some(d), _) => d.to_string(),
        (None, Some(k)) => format!(">{}", k),
        (None, None) => String::new(),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TABLE OUTPUT
// ═══════════════════════════════════════════════════════════════════════════

/// Draw `table` with `rows` labelling `A` and `cols` labelling `B`.
pub fn render_table(table: &DistanceTable, rows: &[String], cols: &[String], colors: bool) -> String {
    let widest_cell = table.rows().max(table.cols()).to_string().len();
    let widest_label = rows
        .iter()
        .chain(cols.iter())
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(1);
    let w = widest_cell.max(widest_label).max(1);
    let n = table.cols();

    let rule = |left: &str, mid: &str, right: &str| {
        let seg = "─".repeat(w + 2);
        let mut line = String::from(left);
        for c in 0..=n {
            line.push_str(&seg);
            line.push_str(if c == n { right } else { mid });
        }
        line
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", rule("┌", "┬", "┐"));

    // Header: blank corner, ε for the empty prefix, then B's symbols
    let mut header = format!("│ {:>w$} │ {:>w$} │", "", "ε", w = w);
    for label in cols {
        let _ = write!(header, " {} │", paint(colors, &blue(), &format!("{:>w$}", label, w = w)));
    }
    let _ = writeln!(out, "{}", header);
    let _ = writeln!(out, "{}", rule("├", "┼", "┤"));

    for i in 0..table.rows() {
        let label = if i == 0 { "ε" } else { rows[i - 1].as_str() };
        let mut line = format!("│ {} │", paint(colors, &blue(), &format!("{:>w$}", label, w = w)));
        if let Some(row) = table.row(i) {
            for (j, d) in row.iter().enumerate() {
                let text = format!("{:>w$}", d, w = w);
                let cell = if i + 1 == table.rows() && j + 1 == n {
                    paint(colors, BOLD, &text)
                } else if table.transposed(i, j) {
                    paint(colors, &magenta(), &text)
                } else if i == 0 || j == 0 {
                    paint(colors, DIM, &text)
                } else {
                    text
                };
                let _ = write!(line, " {} │", cell);
            }
        }
        let _ = writeln!(out, "{}", line);
    }

    let _ = write!(out, "{}", rule("└", "┴", "┘"));
    out
}
