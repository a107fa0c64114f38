//! System clipboard backed by `arboard`.

use anyhow::Context;

use snap_engine::Clipboard;

/// Opens the platform clipboard on each copy; headless sessions simply fail.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> anyhow::Result<()> {
        let mut clipboard = arboard::Clipboard::new().context("clipboard unavailable")?;
        clipboard
            .set_text(text.to_owned())
            .context("failed to write clipboard")?;
        Ok(())
    }
}
