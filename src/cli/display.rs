// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the flank CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `FLANK_THEME` first, then `COLORFGBG`, then defaults to dark. Colors are
//! dropped for `NO_COLOR` and when stdout is not a TTY.
//!
//! Two renderers live here: the probe trace for `flank search --trace` and
//! the per-scenario boxes for `flank compare`.

use std::fmt::Display;
use std::sync::OnceLock;

use flank::compare::{Report, ScenarioSummary};
use flank::{ProbeTrace, Step};

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

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

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("FLANK_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
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
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
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

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
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

fn border(text: &str) -> String {
    themed(GRAY, &[], text)
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

/// Nanoseconds with a unit that keeps three significant digits readable.
pub fn format_ns(ns: f64) -> String {
    if ns >= 1_000_000.0 {
        format!("{:.2}ms", ns / 1_000_000.0)
    } else if ns >= 1_000.0 {
        format!("{:.2}µs", ns / 1_000.0)
    } else {
        format!("{:.1}ns", ns)
    }
}

/// Signed percentage, green when the neighbor variant did better.
pub fn format_reduction(percent: f64) -> String {
    let text = format!("{:+.2}%", percent);
    if percent > 0.0 {
        themed(GREEN, &[BOLD], &text)
    } else if percent < 0.0 {
        themed(RED, &[], &text)
    } else {
        text
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content) + 1);
    println!("{} {}{}{}", border("│"), content, " ".repeat(pad), border("│"));
}

/// Print section header: ┌─ LABEL ──────────┐
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

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}", border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// RENDERERS
// ═══════════════════════════════════════════════════════════════════════════

/// One trace step as `[left..=right] mid=M (W wide)`.
pub fn format_step(step: &Step) -> String {
    format!(
        "[{}..={}] mid={} ({} wide)",
        step.left,
        step.right,
        step.mid,
        step.width()
    )
}

/// Widest content a `row` can hold without pushing the right border out.
const ROW_CONTENT_WIDTH: usize = BOX_WIDTH - 1;

/// Shorten `text` to at most `max` characters, ending in `...` when cut.
pub fn truncate_item(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Pack space-separated items into lines no wider than `width`.
///
/// Items keep their order; an item wider than `width` on its own is
/// truncated.
pub fn wrap_items(items: &[String], width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for item in items {
        let item = truncate_item(item, width);
        let item_len = item.chars().count();
        if current_len > 0 && current_len + 1 + item_len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(&item);
        current_len += item_len;
    }
    if current_len > 0 {
        lines.push(current);
    }
    lines
}

/// Row contents listing every probe as `index=value`, wrapped to the box.
pub fn probe_lines<T: Display>(values: &[T], trace: &ProbeTrace) -> Vec<String> {
    const LABEL: &str = "probes";
    let indent = LABEL.len() + 1;

    let probed: Vec<String> = trace
        .probes
        .iter()
        .map(|&i| format!("{}={}", i, values[i]))
        .collect();

    wrap_items(&probed, ROW_CONTENT_WIDTH - indent)
        .into_iter()
        .enumerate()
        .map(|(n, line)| {
            if n == 0 {
                format!("{} {}", themed(GRAY, &[], LABEL), line)
            } else {
                format!("{}{}", " ".repeat(indent), line)
            }
        })
        .collect()
}

/// Print the windows and probes a search went through.
pub fn print_trace<T: Display>(values: &[T], trace: &ProbeTrace, found: Option<usize>) {
    section_top("TRACE");
    row(&format!("{} elements, {} probes, {} iterations", values.len(), trace.probes.len(), trace.steps.len()));
    row("");

    for line in probe_lines(values, trace) {
        row(&line);
    }

    for (n, step) in trace.steps.iter().enumerate() {
        row(&format!("{} {}", themed(BLUE, &[], &format!("#{:<3}", n + 1)), format_step(step)));
    }

    row("");
    let outcome = match found {
        Some(i) => themed(GREEN, &[BOLD], &format!("found at {}", i)),
        None => themed(YELLOW, &[BOLD], "not found"),
    };
    row(&outcome);
    section_bot();
}

fn print_summary(summary: &ScenarioSummary) {
    section_top(summary.label);

    let validation = format!(
        "{}/{} passed ({:.2}%)",
        summary.passed, summary.cases, summary.pass_rate
    );
    let validation = if summary.passed == summary.cases {
        themed(GREEN, &[], &validation)
    } else {
        themed(RED, &[BOLD], &validation)
    };
    row(&format!("{:<12}{}", "validation", validation));

    row(&format!(
        "{:<12}classic {:>10}   neighbor {:>10}   {}",
        "time/call",
        format_ns(summary.mean_ns_classic),
        format_ns(summary.mean_ns_neighbor),
        format_reduction(summary.time_reduction_percent)
    ));
    row(&format!(
        "{:<12}classic {:>10.2}   neighbor {:>10.2}   {}",
        "probes",
        summary.mean_probes_classic,
        summary.mean_probes_neighbor,
        format_reduction(summary.probe_reduction_percent)
    ));
    row(&format!(
        "{:<12}classic {:>10.2}   neighbor {:>10.2}   {}",
        "iterations",
        summary.mean_iterations_classic,
        summary.mean_iterations_neighbor,
        format_reduction(summary.iteration_reduction_percent)
    ));

    section_bot();
}

/// Print one box per scenario, then the overall verdict.
pub fn print_report(report: &Report) {
    let sizes: Vec<String> = report
        .config
        .sizes()
        .iter()
        .map(|n| n.to_string())
        .collect();
    println!(
        "{} sizes [{}], {} samples x {} calls, seed {}",
        themed(CYAN, &[BOLD], "flank compare"),
        sizes.join(", "),
        report.config.samples,
        report.config.repetitions,
        report.config.seed
    );
    println!();

    for summary in &report.summaries {
        print_summary(summary);
    }

    println!();
    if report.all_passed() {
        println!("{}", themed(GREEN, &[BOLD], "✓ all cases agree"));
    } else {
        let failed = report.cases.iter().filter(|c| !c.validation.passed()).count();
        println!(
            "{}",
            themed(RED, &[BOLD], &format!("✗ {} cases failed validation", failed))
        );
    }
    println!("{}", themed(GRAY, &[DIM], "positive % = neighbor-probing did less work than classic"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_len_ignores_escapes() {
        assert_eq!(visible_len("plain"), 5);
        assert_eq!(visible_len("\x1b[1m\x1b[38;2;1;2;3mbold\x1b[0m"), 4);
        assert_eq!(visible_len("µs"), 2);
    }

    #[test]
    fn test_format_ns_units() {
        assert_eq!(format_ns(12.34), "12.3ns");
        assert_eq!(format_ns(1_500.0), "1.50µs");
        assert_eq!(format_ns(2_250_000.0), "2.25ms");
    }

    #[test]
    fn test_wrap_items_respects_width() {
        let items: Vec<String> = (0..40).map(|i| format!("{}={}", 999_000 + i, 999_000 + i)).collect();
        let lines = wrap_items(&items, 30);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.chars().count() <= 30), "{:?}", lines);
        let rejoined: Vec<String> = lines
            .iter()
            .flat_map(|l| l.split(' ').map(str::to_string))
            .collect();
        assert_eq!(rejoined, items);
    }

    #[test]
    fn test_wrap_items_truncates_oversized_item() {
        let items = vec!["a".repeat(50), "b".to_string()];
        let lines = wrap_items(&items, 10);
        assert_eq!(lines, vec!["aaaaaaa...".to_string(), "b".to_string()]);
        assert!(wrap_items(&[], 10).is_empty());
    }

    #[test]
    fn test_probe_lines_fit_the_box() {
        let values: Vec<u64> = (0..1_000_000).map(|i| i * 1_000).collect();
        let mut trace = ProbeTrace::new();
        flank::search_observed(&values, &(777_777 * 1_000), &mut trace);

        let lines = probe_lines(&values, &trace);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(visible_len(line) <= ROW_CONTENT_WIDTH, "{:?}", line);
        }
        let listed = lines.iter().map(|l| l.matches('=').count()).sum::<usize>();
        assert_eq!(listed, trace.probes.len());
    }

    #[test]
    fn test_format_step() {
        let step = Step { left: 1, right: 8, mid: 4 };
        assert_eq!(format_step(&step), "[1..=8] mid=4 (8 wide)");
    }
}
