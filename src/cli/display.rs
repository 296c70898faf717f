// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display helpers for the lexis CLI.
//!
//! Colored output that follows the terminal's background: OneDark on dark
//! terminals, One Light on light ones. Colors switch off entirely for
//! `NO_COLOR` and when stdout is not a TTY, so piped output is plain text.
//!
//! # Theme detection order
//!
//! 1. `LEXIS_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::sync::OnceLock;

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("LEXIS_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg" where a background of 7 or above (except 8) is light
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

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

/// Semantic colors, resolved against the active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Good,
    Fair,
    Poor,
    Accent,
    Muted,
}

impl Tone {
    fn rgb(self) -> (u8, u8, u8) {
        match (theme(), self) {
            (Theme::Dark, Tone::Good) => (152, 195, 121),   // #98c379
            (Theme::Dark, Tone::Fair) => (229, 192, 123),   // #e5c07b
            (Theme::Dark, Tone::Poor) => (224, 108, 117),   // #e06c75
            (Theme::Dark, Tone::Accent) => (86, 182, 194),  // #56b6c2
            (Theme::Dark, Tone::Muted) => (92, 99, 112),    // #5c6370
            (Theme::Light, Tone::Good) => (80, 161, 79),    // #50a14f
            (Theme::Light, Tone::Fair) => (193, 132, 1),    // #c18401
            (Theme::Light, Tone::Poor) => (228, 86, 73),    // #e45649
            (Theme::Light, Tone::Accent) => (1, 132, 188),  // #0184bc
            (Theme::Light, Tone::Muted) => (160, 161, 167), // #a0a1a7
        }
    }

    fn escape(self) -> String {
        let (r, g, b) = self.rgb();
        format!("\x1b[38;2;{};{};{}m", r, g, b)
    }
}

/// Check if colors should be used
pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply a tone and optional modifiers when colors are on
pub fn paint(tone: Tone, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), tone.escape(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, ignoring ANSI escape sequences
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        match c {
            '\x1b' => in_escape = true,
            'm' if in_escape => in_escape = false,
            _ if !in_escape => len += 1,
            _ => {}
        }
    }
    len
}

/// Pad to `width` visible columns
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_len(s));
    format!("{}{}", s, " ".repeat(pad))
}

/// Similarity score, colored by how close it is to a perfect match
pub fn score_value(score: f64) -> String {
    let tone = if score >= 0.9 {
        Tone::Good
    } else if score >= 0.75 {
        Tone::Fair
    } else {
        Tone::Poor
    };
    paint(tone, &[], &format!("{:.3}", score))
}

/// Mark for a word in an annotated listing
pub fn flag(matches: bool) -> String {
    if matches {
        paint(Tone::Good, &[BOLD], "✓")
    } else {
        paint(Tone::Muted, &[DIM], "·")
    }
}

/// Placeholder shown where no reference entry matched
pub fn no_match() -> String {
    paint(Tone::Poor, &[DIM], "(no match)")
}

/// Bold accent heading line
pub fn heading(text: &str) -> String {
    paint(Tone::Accent, &[BOLD], text)
}
