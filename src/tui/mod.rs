//! Interactive generator screen.

mod input;
mod menu;
mod text;

use crate::error::Result;
use crate::settings::Settings;
use crate::terminal::reset_terminal;

/// Run TUI interactive mode, starting from `settings`.
pub fn run(settings: Settings) -> Result<()> {
    let result = menu::gen_main_menu(settings);
    if result.is_err() {
        reset_terminal();
    }
    result
}
