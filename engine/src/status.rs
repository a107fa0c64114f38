//! Transient status-bar messages.

use std::time::{Duration, Instant};

pub(crate) const STATUS_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    text: String,
    kind: StatusKind,
    expires_at: Instant,
}

impl StatusMessage {
    pub(crate) fn new(text: impl Into<String>, kind: StatusKind, now: Instant) -> Self {
        Self {
            text: text.into(),
            kind,
            expires_at: now + STATUS_TTL,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn kind(&self) -> StatusKind {
        self.kind
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}
