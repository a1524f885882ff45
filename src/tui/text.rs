use crate::entropy;
use crate::pass::Category;
use crate::pass::charset;
use crate::pass::options::{MAX_LENGTH, MIN_LENGTH};
use crate::pass::strength::entropy_bits;
use crate::session::Session;
use crate::terminal::{
    BOLD, DIM, GREEN, RESET, box_bottom, box_line, box_opt, box_rule, box_split, box_top,
    checkbox, print_error, print_info, strength_bar,
};

/// Message shown under the screen after the last key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

pub fn enter_prompt() -> &'static str {
    "Enter regenerate • 1 length • 2-5 types • c copy • h help • q quit"
}

pub fn print_screen(session: &Session, notice: Option<&Notice>) {
    let options = session.options();

    box_top("Password Generator");
    box_line(&format!("{DIM}Create cryptographically secure passwords{RESET}"));
    box_rule();

    if session.password().is_empty() {
        box_line(&format!("{DIM}Select options to generate{RESET}"));
    } else {
        let copied = if session.is_copied() {
            format!("{GREEN}✓ copied{RESET}")
        } else {
            String::new()
        };
        box_split(&format!("{BOLD}{}{RESET}", session.password()), &copied);
    }
    strength_bar(&session.assessment());

    let bits = entropy_bits(options.length(), charset::size(options.categories()));
    box_line(&format!(
        "{DIM}Entropy: {bits:.1} bits • Source: {}{RESET}",
        entropy::source_name()
    ));
    box_rule();

    box_line(&format!(
        "  1) Length: {:<4}{DIM}({MIN_LENGTH}-{MAX_LENGTH}, +/- to step){RESET}",
        options.length()
    ));
    for (i, category) in Category::ALL.into_iter().enumerate() {
        box_line(&format!(
            "  {}) {} {}",
            i + 2,
            checkbox(options.is_enabled(category)),
            category.label()
        ));
    }
    box_rule();
    box_line(enter_prompt());
    box_bottom();

    match notice {
        Some(Notice::Info(msg)) => print_info(msg),
        Some(Notice::Error(msg)) => print_error(msg),
        None => println!(),
    }
}

pub fn print_help() {
    box_top("Help");
    box_line("Passwords always contain at least one character of every enabled");
    box_line("type, and are generated locally from OS entropy.");
    box_line("");
    box_line("KEYS:");
    box_opt("  Enter, g", "Generate a new password with the same options");
    box_opt("  1, l", "Type a new length");
    box_opt("  +, -", "Step the length up or down by one");
    box_opt("  2-5", "Toggle uppercase, lowercase, numbers, symbols. The last enabled type cannot be turned off.");
    box_opt("  c", "Copy the password to the clipboard");
    box_opt("  s", "Save length and types as preferences");
    box_opt("  r", "Restore default options");
    box_opt("  q, Esc", "Quit");
    box_line("");
    box_line(&format!("{DIM}Recommended: 16+ characters with all types enabled{RESET}"));
    box_bottom();
    println!();
    println!("Press any key to return");
}
