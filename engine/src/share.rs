//! Share links and the clipboard seam.

use serde::Serialize;

/// Path of a result page under the share base URL.
#[must_use]
pub fn share_url(base_url: &str, code: &str) -> String {
    format!("{}/result/{code}", base_url.trim_end_matches('/'))
}

/// What a share action hands to the outside world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    /// Plain-text form placed on the clipboard.
    #[must_use]
    pub fn to_clipboard_text(&self) -> String {
        format!("{}\n{}\n{}", self.title, self.text, self.url)
    }
}

/// Destination for copied text. Implemented over the system clipboard by the TUI.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> anyhow::Result<()>;
}
