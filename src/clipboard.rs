//! System clipboard access.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use crate::error::{Error, Result};

/// System clipboard, opened on first use.
///
/// The context lives as long as this value: some X11 providers stop
/// serving the selection once the owning context is dropped.
#[derive(Default)]
pub struct Clipboard {
    ctx: Option<ClipboardContext>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.ctx.is_some()
    }

    /// Put `text` on the system clipboard.
    pub fn copy(&mut self, text: &str) -> Result<()> {
        let ctx = match self.ctx.take() {
            Some(ctx) => ctx,
            None => ClipboardContext::new().map_err(|e| Error::Clipboard(e.to_string()))?,
        };
        let ctx = self.ctx.insert(ctx);

        ctx.set_contents(text.to_owned())
            .map_err(|e| Error::Clipboard(e.to_string()))?;

        // Reading back forces some X11 providers to take ownership before we exit.
        if let Ok(mut retrieved) = ctx.get_contents() {
            retrieved.zeroize();
        }
        Ok(())
    }
}
