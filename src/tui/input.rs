use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, read};

use crate::error::{Error, Result};
use crate::terminal::{RawModeGuard, flush};

/// Outcome of a line prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum Input<T> {
    Value(T),
    Cancelled,
    Interrupted,
}

/// Longest number the length prompt accepts.
const MAX_DIGITS: usize = 3;

pub fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Block for one key press.
pub fn read_key() -> Result<KeyEvent> {
    let _guard = RawModeGuard::hidden_cursor().map_err(|e| Error::Terminal(e.to_string()))?;
    loop {
        if let Event::Key(key) = read()?
            && key.kind == KeyEventKind::Press
        {
            return Ok(key);
        }
    }
}

/// Edit a small number in place. Esc cancels, Ctrl+C interrupts.
pub fn get_numeric_input(prompt: &str, initial_value: usize) -> Result<Input<usize>> {
    let mut digits = initial_value.to_string();
    let mut cursor_pos = digits.len() + 1; // 1-based: 1 = before first digit

    let guard = RawModeGuard::new().map_err(|e| Error::Terminal(e.to_string()))?;

    print!("{}: {}", prompt, digits);
    flush();

    let outcome = loop {
        let key = match read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            _ => continue,
        };

        if is_ctrl_c(&key) {
            break Input::Interrupted;
        }

        match key.code {
            KeyCode::Esc => break Input::Cancelled,
            KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                break Input::Cancelled;
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                digits.clear();
                cursor_pos = 1;
            }
            KeyCode::Enter => match digits.parse() {
                Ok(n) => break Input::Value(n),
                Err(_) => break Input::Cancelled,
            },
            KeyCode::Backspace if cursor_pos > 1 => {
                cursor_pos -= 1;
                digits.remove(cursor_pos - 1);
            }
            KeyCode::Delete if cursor_pos <= digits.len() => {
                digits.remove(cursor_pos - 1);
            }
            KeyCode::Left if cursor_pos > 1 => cursor_pos -= 1,
            KeyCode::Right if cursor_pos <= digits.len() => cursor_pos += 1,
            KeyCode::Home => cursor_pos = 1,
            KeyCode::End => cursor_pos = digits.len() + 1,
            KeyCode::Char(c) if c.is_ascii_digit() && digits.len() < MAX_DIGITS => {
                digits.insert(cursor_pos - 1, c);
                cursor_pos += 1;
            }
            _ => {}
        }

        print!("\r{}: {}", prompt, " ".repeat(MAX_DIGITS + 1));
        print!("\r{}: {}", prompt, digits);
        print!("\x1b[{}G", prompt.len() + 2 + cursor_pos);
        flush();
    };

    // Leave raw mode before the newline so it is not printed as a bare LF.
    drop(guard);
    println!();
    Ok(outcome)
}
