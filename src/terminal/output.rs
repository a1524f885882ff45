//! Terminal output utilities.
//!
//! Box drawing, the strength meter and ANSI helpers.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

use crate::pass::{Assessment, Level};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[90m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;10m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

pub fn flush() {
    let _ = io::stdout().flush();
}

/// Leave raw mode and drop any active style.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}\x1b[?25h");
    flush();
}

pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

pub fn print_info(msg: &str) {
    println!("{GREEN}{msg}{RESET}");
}

/// Truecolor foreground for a strength level.
pub fn level_color(level: Level) -> String {
    let (r, g, b) = level.rgb();
    format!("\x1b[38;2;{r};{g};{b}m")
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;

/// ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = BOX_WIDTH - 2 - title_part.chars().count();
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// │ content                                        │
pub fn box_line(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let padding = inner_width - display_len;
        println!("│ {}{} │", content, " ".repeat(padding));
    } else {
        println!("│ {} │", content);
    }
}

/// │ left                                     right │
pub fn box_split(left: &str, right: &str) {
    for row in split_rows(left, right) {
        println!("│ {row} │");
    }
}

/// Padded rows for [`box_split`]. When `left` and `right` cannot share a
/// row with at least one space between them, `right` moves to its own row,
/// still flush with the right edge.
pub fn split_rows(left: &str, right: &str) -> Vec<String> {
    let inner_width = BOX_WIDTH - 4;
    let left_width = console_width(left);
    let right_width = console_width(right);

    if right.is_empty() || left_width + right_width < inner_width {
        let gap = inner_width.saturating_sub(left_width + right_width);
        return vec![format!("{left}{}{right}", " ".repeat(gap))];
    }
    vec![
        format!("{left}{}", " ".repeat(inner_width.saturating_sub(left_width))),
        format!("{}{right}", " ".repeat(inner_width.saturating_sub(right_width))),
    ]
}

pub fn box_rule() {
    println!("├{}┤", "─".repeat(BOX_WIDTH - 2));
}

pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Key and description in two columns, wrapping the description.
pub fn box_opt(key: &str, desc: &str) {
    let inner_width = BOX_WIDTH - 4;
    let key_col = 14;
    let desc_col = inner_width - key_col;

    let key_padded = format!("{:<width$}", key, width = key_col);

    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();
    for word in desc.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= desc_col {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current_line));
            current_line = word.to_string();
        }
    }
    if !current_line.is_empty() {
        lines.push(current_line);
    }

    let first = lines.first().map(String::as_str).unwrap_or("");
    println!(
        "│ {}{}{} │",
        key_padded,
        first,
        " ".repeat(desc_col.saturating_sub(first.len()))
    );

    let indent = " ".repeat(key_col);
    for line in lines.iter().skip(1) {
        let padding = desc_col.saturating_sub(line.len());
        println!("│ {}{}{} │", indent, line, " ".repeat(padding));
    }
}

/// Display width ignoring ANSI escape sequences.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Strength Meter
// ============================================================================

/// Filled cells of a meter `inner_width` wide at `percent`.
pub fn filled_cells(percent: u8, inner_width: usize) -> usize {
    if percent >= 100 {
        inner_width
    } else {
        inner_width * percent as usize / 100
    }
}

/// One-line meter: `Strength: Medium ████████░░░░`.
pub fn strength_bar(assessment: &Assessment) {
    let Some(level) = assessment.level else {
        box_line(&format!("{DIM}Strength: -{RESET}"));
        return;
    };

    let label = format!("Strength: {:<7}", level.label());
    let inner_width = BOX_WIDTH - 4 - label.len() - 1;
    let filled = filled_cells(assessment.width_percent, inner_width);
    let color = level_color(level);

    box_line(&format!(
        "{color}{label}{RESET} {color}{}{RESET}{DIM}{}{RESET}",
        "█".repeat(filled),
        "░".repeat(inner_width - filled)
    ));
}

/// `[x]` / `[ ]`.
pub fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_codes_have_no_width() {
        assert_eq!(console_width("plain"), 5);
        assert_eq!(console_width(&format!("{RED}red{RESET}")), 3);
        assert_eq!(console_width(&format!("{}x", level_color(Level::Strong))), 1);
    }

    #[test]
    fn split_rows_keep_the_border_aligned() {
        let inner_width = BOX_WIDTH - 4;
        let copied = format!("{GREEN}✓ copied{RESET}");

        let short = split_rows(&"a".repeat(16), &copied);
        assert_eq!(short.len(), 1);
        assert_eq!(console_width(&short[0]), inner_width);

        let long = format!("{BOLD}{}{RESET}", "a".repeat(64));
        let rows = split_rows(&long, &copied);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| console_width(row) == inner_width));
        assert!(rows[1].ends_with(&copied));

        let alone = split_rows(&"a".repeat(64), "");
        assert_eq!(alone.len(), 1);
        assert_eq!(console_width(&alone[0]), inner_width);
    }

    #[test]
    fn meter_fill_tracks_width_percent() {
        assert_eq!(filled_cells(0, 60), 0);
        assert_eq!(filled_cells(33, 60), 19);
        assert_eq!(filled_cells(66, 60), 39);
        assert_eq!(filled_cells(100, 60), 60);
    }
}
