//! CLI context - bundles parsed flags with the settings they start from.

use std::io::{self, Write};

use zeroize::Zeroizing;

use super::writer::SecureBufWriter;
use super::{Args, load_settings, prompts};
use crate::clipboard::Clipboard;
use crate::error::{Error, Result};
use crate::pass::strength::{MAX_SCORE, entropy_bits};
use crate::pass::{GenerationOptions, charset};
use crate::session::Session;
use crate::settings::Settings;

/// Application context for CLI mode.
pub struct Context {
    args: Args,
    settings: Settings,
    clipboard: Clipboard,
}

impl Context {
    pub fn new(args: Args) -> Self {
        let settings = if args.saved {
            load_settings()
        } else {
            Settings::default()
        };
        Self {
            args,
            settings,
            clipboard: Clipboard::new(),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let options = self.resolve_options();

        if self.args.save {
            let path = Settings::capture(&options, self.wants_clipboard()).save_to_file()?;
            prompts::settings_saved(&path);
        }

        let mut session = Session::with_options(options);

        if self.wants_clipboard() {
            match self.copy_batch(&mut session) {
                Ok(()) => {
                    prompts::clipboard_copied(self.args.number);
                    return Ok(());
                }
                Err(e) => {
                    prompts::clipboard_error(&e.to_string());
                    if !prompts::clipboard_fallback_prompt() {
                        return Ok(());
                    }
                }
            }
        }

        match self.print_batch(&mut session, io::stdout().lock()) {
            Err(Error::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
            result => result,
        }
    }

    /// Saved or default options with the explicit flags applied on top.
    fn resolve_options(&self) -> GenerationOptions {
        let mut options = self.settings.options();

        if let Some(length) = self.args.length {
            // clap already limits the range
            options.set_length(usize::from(length));
        }

        for category in self.args.excluded() {
            if options.is_enabled(category) && !options.toggle(category) {
                prompts::category_kept(&category.to_string());
            }
        }
        options
    }

    fn wants_clipboard(&self) -> bool {
        self.args.clipboard || (self.args.saved && self.settings.clipboard)
    }

    /// The clipboard takes the whole batch at once, newline-joined.
    fn copy_batch(&mut self, session: &mut Session) -> Result<()> {
        let mut joined = Zeroizing::new(String::new());
        for n in 0..self.args.number {
            if n > 0 {
                session.regenerate();
                joined.push('\n');
            }
            joined.push_str(session.password());
        }
        self.clipboard.copy(&joined)?;
        session.mark_copied();
        Ok(())
    }

    /// Write one line per password as it is generated.
    fn print_batch(&self, session: &mut Session, out: impl Write) -> Result<()> {
        let bits = entropy_bits(
            session.options().length(),
            charset::size(session.options().categories()),
        );

        let mut out = SecureBufWriter::new(out);
        let mut line = Zeroizing::new(String::new());
        for n in 0..self.args.number {
            if n > 0 {
                session.regenerate();
            }
            line.clear();
            line.push_str(session.password());
            if self.args.strength {
                let assessment = session.assessment();
                line.push_str(&format!(
                    "\t{}\t{}/{MAX_SCORE}\t{bits:.1} bits",
                    assessment.label(),
                    assessment.score,
                ));
            }
            line.push('\n');
            out.write_all(line.as_bytes())?;
        }
        out.flush()?;
        Ok(())
    }
}
