//! UI state types for the TUI layer.
//!
//! Pure data types with no IO, no async, no ratatui dependency.
//! Used by both the engine (state ownership) and tui (rendering/input).

mod animation;

pub use animation::ProgressEffect;

/// UI configuration options derived from config/environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    pub reduced_motion: bool,
}

/// Which page of the quiz flow is showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    /// Answering catalog question `step` (0-based); `selected` is the highlighted option.
    Question { step: usize, selected: usize },
    /// Result card for `code`, exactly as derived or as requested by a shared link.
    Result { code: String },
}
