use crossterm::event::{Event, KeyCode, KeyModifiers, read};

use crate::form::FormState;
use crate::terminal::{RED, RESET, RawModeGuard, flush, reset_terminal};

/// Line buffer for the raw-mode editors: chars plus a 1-based cursor
/// (1 = before the first char). Edits index by character, so a
/// multi-byte keystroke cannot land an insert or remove inside another
/// character's bytes.
struct EditBuffer {
    chars: Vec<char>,
    cursor: usize,
}

impl EditBuffer {
    fn new(initial: &str) -> Self {
        let chars: Vec<char> = initial.chars().collect();
        let cursor = chars.len() + 1;
        Self { chars, cursor }
    }

    fn text(&self) -> String {
        self.chars.iter().collect()
    }

    fn len(&self) -> usize {
        self.chars.len()
    }

    fn insert(&mut self, c: char) {
        self.chars.insert(self.cursor - 1, c);
        self.cursor += 1;
    }

    /// Remove the char left of the cursor. False at the left edge.
    fn backspace(&mut self) -> bool {
        if self.cursor > 1 {
            self.cursor -= 1;
            self.chars.remove(self.cursor - 1);
            true
        } else {
            false
        }
    }

    /// Remove the char under the cursor. False at the right edge.
    fn delete(&mut self) -> bool {
        if self.cursor <= self.chars.len() {
            self.chars.remove(self.cursor - 1);
            true
        } else {
            false
        }
    }

    fn clear(&mut self) {
        self.chars.clear();
        self.cursor = 1;
    }

    fn left(&mut self) {
        if self.cursor > 1 {
            self.cursor -= 1;
        }
    }

    fn right(&mut self) {
        if self.cursor < self.chars.len() + 1 {
            self.cursor += 1;
        }
    }

    fn home(&mut self) {
        self.cursor = 1;
    }

    fn end(&mut self) {
        self.cursor = self.chars.len() + 1;
    }
}

/// Read a line in raw mode with basic editing keys. Returns `None` when
/// the user cancels with Esc or Ctrl+Q. Ctrl+C exits the process.
pub fn get_editable_input(prompt: &str, initial_value: &str) -> Option<String> {
    let mut buf = EditBuffer::new(initial_value);
    let mut last_len = buf.len();
    let mut cancelled = false;

    // RawModeGuard ensures raw mode is disabled even if we panic or return early
    let _guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return Some(initial_value.to_string()), // Can't enable raw mode, return default
    };

    print!("{}: {}", prompt, buf.text());
    flush();

    loop {
        match read() {
            Ok(Event::Key(key_event)) => {
                match key_event.code {
                    KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                        // Reset terminal BEFORE exit since process::exit doesn't run destructors
                        reset_terminal();
                        println!();
                        std::process::exit(0);
                    }
                    KeyCode::Char('q') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                        cancelled = true;
                        break;
                    }
                    KeyCode::Esc => {
                        cancelled = true;
                        break;
                    }
                    KeyCode::Char('u') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                        buf.clear();
                    }
                    KeyCode::Enter => {
                        break;
                    }
                    KeyCode::Backspace => {
                        buf.backspace();
                    }
                    KeyCode::Delete => {
                        buf.delete();
                    }
                    KeyCode::Left => buf.left(),
                    KeyCode::Right => buf.right(),
                    KeyCode::Home => buf.home(),
                    KeyCode::End => buf.end(),
                    KeyCode::Char(c) => buf.insert(c),
                    _ => {}
                }

                // Redraw the input line and reposition the cursor
                print!("\r{}: {}", prompt, " ".repeat(last_len + 1));
                print!("\r{}: {}", prompt, buf.text());
                print!("\x1b[{}G", prompt.len() + 2 + buf.cursor);
                flush();
                last_len = buf.len();
            }
            Err(_) => {
                break;
            }
            _ => {}
        }
    }

    // Drop the guard to leave raw mode BEFORE the newline prints
    drop(_guard);
    println!();
    if cancelled { None } else { Some(buf.text()) }
}

/// Edit the length field with validation on every keystroke. The current
/// error shows inline to the right of the value while typing, the same
/// live feedback the redrawn form gives.
///
/// Enter keeps whatever is in the field, valid or not; the form shows
/// the error and blocks submission. Esc restores the previous value.
pub fn edit_length(state: &mut FormState) {
    let prompt = "Password length";
    let original = state.length_input.clone();
    let mut buf = EditBuffer::new(&state.length_input);
    let mut cancelled = false;

    let _guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return,
    };

    print!("{}: {}", prompt, buf.text());
    if let Some(err) = state.length_error {
        print!("  {RED}{err}{RESET}");
        print!("\x1b[{}G", prompt.len() + 2 + buf.cursor);
    }
    flush();

    loop {
        let mut edited = false;

        match read() {
            Ok(Event::Key(key_event)) => {
                match key_event.code {
                    KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                        reset_terminal();
                        println!();
                        std::process::exit(0);
                    }
                    KeyCode::Char('q') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                        cancelled = true;
                        break;
                    }
                    KeyCode::Esc => {
                        cancelled = true;
                        break;
                    }
                    KeyCode::Char('u') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                        buf.clear();
                        edited = true;
                    }
                    KeyCode::Enter => {
                        break;
                    }
                    KeyCode::Backspace => edited = buf.backspace(),
                    KeyCode::Delete => edited = buf.delete(),
                    KeyCode::Left => buf.left(),
                    KeyCode::Right => buf.right(),
                    KeyCode::Home => buf.home(),
                    KeyCode::End => buf.end(),
                    // Any printable char goes in, so non-numeric input is
                    // caught by the validator rather than silently dropped.
                    KeyCode::Char(c) => {
                        buf.insert(c);
                        edited = true;
                    }
                    _ => {}
                }

                if edited {
                    state.set_length_input(buf.text());
                }

                // Full-line erase: the inline error can shrink or vanish
                print!("\r\x1b[2K{}: {}", prompt, buf.text());
                if let Some(err) = state.length_error {
                    print!("  {RED}{err}{RESET}");
                }
                print!("\x1b[{}G", prompt.len() + 2 + buf.cursor);
                flush();
            }
            Err(_) => {
                break;
            }
            _ => {}
        }
    }

    drop(_guard);
    println!();
    if cancelled {
        state.set_length_input(original);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multibyte_input_keeps_editing_on_char_boundaries() {
        // 'é' is two bytes; the keystroke after it used to land inside them.
        let mut buf = EditBuffer::new("");
        buf.insert('é');
        buf.insert('5');
        assert_eq!(buf.text(), "é5");

        assert!(buf.backspace());
        assert_eq!(buf.text(), "é");
        assert!(buf.backspace());
        assert_eq!(buf.text(), "");
    }

    #[test]
    fn multibyte_removal_lands_on_the_full_character() {
        let mut buf = EditBuffer::new("1é2");
        buf.home();
        buf.right();
        assert!(buf.delete());
        assert_eq!(buf.text(), "12");
    }

    #[test]
    fn editing_respects_cursor_position() {
        let mut buf = EditBuffer::new("68");
        buf.left();
        buf.insert('7');
        assert_eq!(buf.text(), "678");

        buf.home();
        assert!(buf.delete());
        assert_eq!(buf.text(), "78");

        buf.end();
        buf.insert('9');
        assert_eq!(buf.text(), "789");
    }

    #[test]
    fn edits_at_the_boundaries_are_no_ops() {
        let mut buf = EditBuffer::new("");
        assert!(!buf.backspace());
        assert!(!buf.delete());
        buf.left();
        buf.right();
        buf.insert('6');
        assert_eq!(buf.text(), "6");
    }

    #[test]
    fn clear_resets_text_and_cursor() {
        let mut buf = EditBuffer::new("1234");
        buf.clear();
        assert_eq!(buf.text(), "");
        buf.insert('8');
        assert_eq!(buf.text(), "8");
    }
}
