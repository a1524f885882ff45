//! Command-line front-end.

mod args;
mod context;
pub mod prompts;
pub mod quiet;
mod writer;

pub use args::Args;
pub use context::Context;

use crate::error::Result;
use crate::settings::Settings;
use crate::tui;

/// Dispatch to the TUI or a one-shot generation.
///
/// `bare` means no arguments were given at all; on a terminal that opens
/// the TUI, anywhere else it prints one password.
pub fn run(args: Args, bare: bool) -> Result<()> {
    quiet::set(args.quiet);

    if args.interactive || (bare && quiet::is_interactive()) {
        return tui::run(load_settings());
    }

    Context::new(args).run()
}

/// Saved settings, or defaults with a warning when they cannot be read.
pub fn load_settings() -> Settings {
    Settings::load_from_file().unwrap_or_else(|e| {
        prompts::warn(&format!("Failed to load settings: {e}"));
        Settings::default()
    })
}
