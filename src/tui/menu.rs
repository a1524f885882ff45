use crossterm::event::{KeyCode, KeyEvent};
use tracing::debug;

use super::input::{Input, get_numeric_input, is_ctrl_c, read_key};
use super::text::{Notice, print_help, print_screen};
use crate::clipboard::Clipboard;
use crate::error::Result;
use crate::pass::Category;
use crate::pass::options::{MAX_LENGTH, MIN_LENGTH};
use crate::session::Session;
use crate::settings::Settings;
use crate::terminal::clear;

use LoopAction::*;
pub enum LoopAction {
    Break,
    Continue,
}

/// Screen state kept across redraws.
pub struct Menu {
    pub session: Session,
    pub settings: Settings,
    pub clipboard: Clipboard,
    pub notice: Option<Notice>,
}

pub fn gen_main_menu(settings: Settings) -> Result<()> {
    let mut menu = Menu {
        session: Session::with_options(settings.options()),
        settings,
        clipboard: Clipboard::new(),
        notice: None,
    };

    loop {
        clear();
        print_screen(&menu.session, menu.notice.take().as_ref());

        let key = read_key()?;
        if let Break = menu_options(key, &mut menu)? {
            break;
        }
    }

    clear();
    Ok(())
}

fn menu_options(key: KeyEvent, menu: &mut Menu) -> Result<LoopAction> {
    if is_ctrl_c(&key) {
        return Ok(Break);
    }

    match key.code {
        KeyCode::Char('1') | KeyCode::Char('l') => {
            let current = menu.session.options().length();
            match get_numeric_input(
                &format!("Enter new password length ({MIN_LENGTH}-{MAX_LENGTH})"),
                current,
            )? {
                Input::Value(length) => set_length(menu, length),
                Input::Cancelled => {}
                Input::Interrupted => return Ok(Break),
            }
        }
        KeyCode::Char('h') | KeyCode::Char('?') => {
            clear();
            print_help();
            read_key()?;
        }
        _ => return Ok(apply_key(key.code, menu)),
    }
    Ok(Continue)
}

/// Keys that only touch the session, the clipboard or the settings file.
fn apply_key(code: KeyCode, menu: &mut Menu) -> LoopAction {
    match code {
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('g') => menu.session.regenerate(),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => {
            let length = menu.session.options().length() + 1;
            set_length(menu, length);
        }
        KeyCode::Char('-') | KeyCode::Left => {
            let length = menu.session.options().length().saturating_sub(1);
            set_length(menu, length);
        }
        KeyCode::Char(c @ '2'..='5') => {
            let category = Category::ALL[c as usize - '2' as usize];
            if !menu.session.toggle_category(category) {
                menu.notice = Some(Notice::Error(
                    "At least one character type must stay enabled".to_string(),
                ));
            }
        }
        KeyCode::Char('c') => copy(menu),
        KeyCode::Char('s') => save(menu),
        KeyCode::Char('r') => {
            menu.session.reset();
            menu.notice = Some(Notice::Info("Default options restored".to_string()));
        }
        KeyCode::Char('q') | KeyCode::Esc => return Break,
        _ => menu.notice = Some(Notice::Error("Invalid selection".to_string())),
    }
    Continue
}

fn set_length(menu: &mut Menu, length: usize) {
    if !menu.session.set_length(length) {
        menu.notice = Some(Notice::Error(format!(
            "Length must be between {MIN_LENGTH} and {MAX_LENGTH}"
        )));
    }
}

fn copy(menu: &mut Menu) {
    if menu.session.password().is_empty() {
        menu.notice = Some(Notice::Error("No password to copy".to_string()));
        return;
    }
    match menu.clipboard.copy(menu.session.password()) {
        Ok(()) => {
            menu.session.mark_copied();
            menu.notice = Some(Notice::Info("*** -COPIED TO CLIPBOARD- ***".to_string()));
        }
        Err(e) => {
            debug!(error = %e, "clipboard copy failed");
            menu.notice = Some(Notice::Error(e.to_string()));
        }
    }
}

fn save(menu: &mut Menu) {
    menu.settings = Settings::capture(menu.session.options(), menu.settings.clipboard);
    menu.notice = Some(match menu.settings.save_to_file() {
        Ok(path) => Notice::Info(format!("Preferences saved \u{2192} {}", path.display())),
        Err(e) => Notice::Error(format!("Error saving settings: {e}")),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> Menu {
        let settings = Settings::default();
        Menu {
            session: Session::with_options(settings.options()),
            settings,
            clipboard: Clipboard::new(),
            notice: None,
        }
    }

    #[test]
    fn enter_regenerates() {
        let mut menu = menu();
        let before = menu.session.password().to_string();
        assert!(matches!(apply_key(KeyCode::Enter, &mut menu), Continue));
        assert_ne!(menu.session.password(), before);
        assert!(menu.notice.is_none());
    }

    #[test]
    fn digits_toggle_categories_in_order() {
        let mut menu = menu();
        apply_key(KeyCode::Char('2'), &mut menu);
        apply_key(KeyCode::Char('5'), &mut menu);
        let options = menu.session.options();
        assert!(!options.is_enabled(Category::Uppercase));
        assert!(options.is_enabled(Category::Lowercase));
        assert!(options.is_enabled(Category::Digit));
        assert!(!options.is_enabled(Category::Symbol));
    }

    #[test]
    fn last_category_toggle_shows_error() {
        let mut menu = menu();
        for key in ['2', '3', '4'] {
            apply_key(KeyCode::Char(key), &mut menu);
            assert!(menu.notice.is_none());
        }
        apply_key(KeyCode::Char('5'), &mut menu);
        assert!(matches!(menu.notice, Some(Notice::Error(_))));
        assert!(menu.session.options().is_enabled(Category::Symbol));
    }

    #[test]
    fn stepping_stops_at_bounds() {
        let mut menu = menu();
        menu.session.set_length(MAX_LENGTH);
        apply_key(KeyCode::Char('+'), &mut menu);
        assert_eq!(menu.session.options().length(), MAX_LENGTH);
        assert!(matches!(menu.notice, Some(Notice::Error(_))));

        menu.notice = None;
        menu.session.set_length(MIN_LENGTH);
        apply_key(KeyCode::Left, &mut menu);
        assert_eq!(menu.session.options().length(), MIN_LENGTH);
        assert!(menu.notice.is_some());

        apply_key(KeyCode::Right, &mut menu);
        assert_eq!(menu.session.password().len(), MIN_LENGTH + 1);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut menu = menu();
        apply_key(KeyCode::Char('-'), &mut menu);
        apply_key(KeyCode::Char('4'), &mut menu);
        apply_key(KeyCode::Char('r'), &mut menu);
        assert_eq!(menu.session.options().length(), 16);
        assert_eq!(menu.session.options().categories().count(), 4);
    }

    #[test]
    fn quit_keys_break() {
        let mut menu = menu();
        assert!(matches!(apply_key(KeyCode::Char('q'), &mut menu), Break));
        assert!(matches!(apply_key(KeyCode::Esc, &mut menu), Break));
    }

    #[test]
    fn unknown_key_is_reported() {
        let mut menu = menu();
        assert!(matches!(apply_key(KeyCode::Char('z'), &mut menu), Continue));
        assert_eq!(
            menu.notice,
            Some(Notice::Error("Invalid selection".to_string()))
        );
    }

    #[test]
    fn clipboard_is_kept_across_copies() {
        let mut menu = menu();
        assert!(!menu.clipboard.is_open());
        apply_key(KeyCode::Char('c'), &mut menu);

        if menu.session.is_copied() {
            assert!(menu.clipboard.is_open());
            apply_key(KeyCode::Enter, &mut menu);
            assert!(!menu.session.is_copied());
            apply_key(KeyCode::Char('c'), &mut menu);
            assert!(menu.session.is_copied());
            assert!(menu.clipboard.is_open());
        } else {
            // no display server
            assert!(matches!(menu.notice, Some(Notice::Error(_))));
        }
    }
}
