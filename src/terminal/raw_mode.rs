//! Raw mode RAII guard.

use std::io;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// Raw mode for the lifetime of the guard, optionally with the cursor
/// hidden. Both are restored on drop, including on early return.
pub struct RawModeGuard {
    active: bool,
    cursor_hidden: bool,
}

impl RawModeGuard {
    /// Raw mode with a visible cursor, for line editing.
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self {
            active: true,
            cursor_hidden: false,
        })
    }

    /// Raw mode with the cursor hidden, for single-key menus.
    pub fn hidden_cursor() -> io::Result<Self> {
        let mut guard = Self::new()?;
        execute!(io::stdout(), Hide)?;
        guard.cursor_hidden = true;
        Ok(guard)
    }

    pub fn disable(&mut self) {
        if self.cursor_hidden {
            let _ = execute!(io::stdout(), Show);
            self.cursor_hidden = false;
        }
        if self.active {
            let _ = disable_raw_mode();
            self.active = false;
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.disable();
    }
}
