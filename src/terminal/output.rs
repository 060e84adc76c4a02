//! Terminal output utilities.
//!
//! Box drawing, display width, number formatting, ANSI helpers.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const REVERSE: &str = "\x1b[7m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;10m";
pub const GREY: &str = "\x1b[90m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Leave raw mode and drop any active styling.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

/// Redraw the whole screen from prepared lines. Uses `\r\n` so output lines
/// up while raw mode is active.
pub fn draw(lines: &[String]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(b"\x1b[2J\x1b[H")?;
    for line in lines {
        out.write_all(line.as_bytes())?;
        out.write_all(b"\r\n")?;
    }
    out.flush()
}

// ============================================================================
// Number Formatting
// ============================================================================

pub fn format_number(num: usize) -> String {
    let s = num.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

// ============================================================================
// Display Width
// ============================================================================

/// Columns a character occupies. Pictographs render double-width.
pub fn char_width(c: char) -> usize {
    match c as u32 {
        0x231A..=0x23FF
        | 0x2600..=0x27BF
        | 0x2B00..=0x2BFF
        | 0x3000..=0x303F
        | 0x3200..=0x32FF
        | 0x1F000..=0x1FAFF => 2,
        _ => 1,
    }
}

/// Display width of `s`, skipping ANSI escape sequences.
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
            width += char_width(c);
        }
    }
    width
}

/// Break plain text into chunks no wider than `width` columns.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = char_width(c);
        if used + w > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            used = 0;
        }
        current.push(c);
        used += w;
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;
pub const BOX_INNER: usize = BOX_WIDTH - 4;

/// Box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) -> String {
    if title.is_empty() {
        format!("┌{}┐", "─".repeat(BOX_WIDTH - 2))
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(console_width(&title_part));
        format!("┌{}{}┐", title_part, "─".repeat(remaining))
    }
}

/// Box content line: │ content                                        │
pub fn box_line(content: &str) -> String {
    let padding = BOX_INNER.saturating_sub(console_width(content));
    format!("│ {}{} │", content, " ".repeat(padding))
}

/// Centered box content line: │          content          │
pub fn box_line_center(content: &str) -> String {
    let total_padding = BOX_INNER.saturating_sub(console_width(content));
    let left_pad = total_padding / 2;
    let right_pad = total_padding - left_pad;
    format!(
        "│ {}{}{} │",
        " ".repeat(left_pad),
        content,
        " ".repeat(right_pad)
    )
}

/// Horizontal rule inside a box.
pub fn box_rule() -> String {
    format!("├{}┤", "─".repeat(BOX_WIDTH - 2))
}

/// Box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() -> String {
    format!("└{}┘", "─".repeat(BOX_WIDTH - 2))
}
