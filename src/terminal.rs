//! Shared terminal utilities.
//!
//! ANSI helpers, box drawing, raw mode management, and the entropy
//! readout shown on the password card.

use std::io::{self, Write};

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const RED: &str = "\x1b[38;5;9m";

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

/// Reset terminal to sane state (fixes staggered text issues).
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("\x1b[0m");
    flush();
}

// ============================================================================
// Raw Mode Guard (RAII pattern)
// ============================================================================

/// Guard that ensures raw mode is disabled when dropped.
pub struct RawModeGuard {
    engaged: bool,
}

impl RawModeGuard {
    /// Enable raw mode, returning a guard that will disable it on drop.
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self { engaged: true })
    }

    /// Manually disable raw mode (also happens on drop).
    pub fn disable(&mut self) {
        if self.engaged {
            let _ = disable_raw_mode();
            self.engaged = false;
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.disable();
    }
}

// ============================================================================
// Styled Output Helpers
// ============================================================================

/// Print a horizontal rule (box style).
pub fn print_rule() {
    println!("├{}┤", "─".repeat(BOX_WIDTH - 2));
}

// ============================================================================
// Box Drawing (64 char width to match the form)
// ============================================================================

pub const BOX_WIDTH: usize = 64;

/// Print box top with optional title: ┌─ Title ───────────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = BOX_WIDTH - 2 - title_part.chars().count();
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// Print box content line: │ content                              │
pub fn box_line(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let padding = inner_width - display_len;
        println!("│ {}{} │", content, " ".repeat(padding));
    } else {
        // Content too long - just print it (will overflow)
        println!("│ {} │", content);
    }
}

/// Print centered box content line: │        content        │
pub fn box_line_center(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let total_padding = inner_width - display_len;
        let left_pad = total_padding / 2;
        let right_pad = total_padding - left_pad;
        println!(
            "│ {}{}{} │",
            " ".repeat(left_pad),
            content,
            " ".repeat(right_pad)
        );
    } else {
        println!("│ {} │", content);
    }
}

/// Print box bottom: └──────────────────────────────────────┘
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Print a help option with flag and description, word-wrapping the
/// description into the remaining column.
pub fn box_opt(flag: &str, desc: &str) {
    let inner_width = BOX_WIDTH - 4;
    let flag_col = 24;
    let desc_col = inner_width - flag_col;

    let flag_padded = if flag.len() < flag_col {
        format!("{}{}", flag, " ".repeat(flag_col - flag.len()))
    } else {
        flag[..flag_col].to_string()
    };

    let words: Vec<&str> = desc.split_whitespace().collect();
    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();

    for word in words {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= desc_col {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(current_line);
            current_line = word.to_string();
        }
    }
    if !current_line.is_empty() {
        lines.push(current_line);
    }

    if let Some(first) = lines.first() {
        let padding = desc_col.saturating_sub(first.len());
        println!("│ {}{}{} │", flag_padded, first, " ".repeat(padding));
    } else {
        println!("│ {}{} │", flag_padded, " ".repeat(desc_col));
    }

    let indent = " ".repeat(flag_col);
    for line in lines.iter().skip(1) {
        let padding = desc_col.saturating_sub(line.len());
        println!("│ {}{}{} │", indent, line, " ".repeat(padding));
    }
}

/// Calculate display width accounting for ANSI escape codes.
fn console_width(s: &str) -> usize {
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
// Entropy Readout
// ============================================================================

/// Password entropy in bits: length * log2(alphabet size).
pub fn calculate_entropy(password_length: usize, alphabet_size: usize) -> f64 {
    if alphabet_size == 0 {
        return 0.0;
    }
    password_length as f64 * (alphabet_size as f64).log2()
}

/// Get entropy strength description.
pub fn entropy_strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}
