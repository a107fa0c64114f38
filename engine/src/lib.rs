//! Core engine for MBTI Snap - quiz session state machine.
//!
//! This crate contains the App state machine without TUI dependencies. The
//! App owns the session's [`AnswerLedger`] exclusively; the TUI drives it
//! through the methods below and renders whatever [`App::screen`] reports.
//!
//! ```text
//! Home --start--> Question{0} --answer--> ... --answer--> Result{code}
//!   ^                                                         |
//!   +----------------------- retest (ledger reset) -----------+
//! ```

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use thiserror::Error;

pub use snap_config::SnapConfig;
pub use snap_core::{
    AnswerLedger, CatalogError, QuestionCatalog, ResultCatalog, ScoreTally, derive,
};
pub use snap_types::ui::{ProgressEffect, Screen, UiOptions};
pub use snap_types::{Axis, Letter, Question, ResultProfile, TypeCode};

mod card;
mod share;
mod status;

pub use card::{card_file_name, render_card};
pub use share::{Clipboard, SharePayload, share_url};
pub use status::{StatusKind, StatusMessage};

const PROGRESS_ANIMATION: Duration = Duration::from_millis(500);

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no result to export")]
    NoResult,
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Settings resolved from config before the session starts.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub ui_options: UiOptions,
    pub share_base_url: String,
    pub export_dir: PathBuf,
}

impl AppSettings {
    #[must_use]
    pub fn from_config(config: Option<&SnapConfig>) -> Self {
        let fallback = SnapConfig::default();
        let config = config.unwrap_or(&fallback);
        Self {
            ui_options: config.ui_options(),
            share_base_url: config.share_base_url(),
            export_dir: config.export_dir(),
        }
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self::from_config(None)
    }
}

pub struct App {
    questions: QuestionCatalog,
    results: ResultCatalog,
    ledger: AnswerLedger,
    screen: Screen,
    /// Tally behind the current result, when it was derived in this session.
    tally: Option<ScoreTally>,
    settings: AppSettings,
    progress: ProgressEffect,
    status: Option<StatusMessage>,
    should_quit: bool,
    last_frame: Instant,
}

impl App {
    /// Build a session over the builtin catalogs.
    pub fn new(config: Option<&SnapConfig>) -> Result<Self, CatalogError> {
        Self::with_settings(AppSettings::from_config(config))
    }

    pub fn with_settings(settings: AppSettings) -> Result<Self, CatalogError> {
        let questions = QuestionCatalog::builtin()?;
        let results = ResultCatalog::builtin()?;
        Ok(Self::with_catalogs(questions, results, settings))
    }

    #[must_use]
    pub fn with_catalogs(
        questions: QuestionCatalog,
        results: ResultCatalog,
        settings: AppSettings,
    ) -> Self {
        tracing::info!(
            questions = questions.len(),
            results = results.len(),
            "Quiz session created"
        );
        Self {
            questions,
            results,
            ledger: AnswerLedger::new(),
            screen: Screen::Home,
            tally: None,
            settings,
            progress: ProgressEffect::settled(0.0),
            status: None,
            should_quit: false,
            last_frame: Instant::now(),
        }
    }

    // ------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------

    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    #[must_use]
    pub fn ledger(&self) -> &AnswerLedger {
        &self.ledger
    }

    #[must_use]
    pub fn questions(&self) -> &QuestionCatalog {
        &self.questions
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.settings.ui_options
    }

    #[must_use]
    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        match self.screen {
            Screen::Question { step, .. } => self.questions.get(step),
            _ => None,
        }
    }

    /// Highlighted option on the question screen.
    #[must_use]
    pub fn selected_option(&self) -> Option<usize> {
        match self.screen {
            Screen::Question { selected, .. } => Some(selected),
            _ => None,
        }
    }

    /// `(current, total)` with `current` 1-based, while answering.
    #[must_use]
    pub fn progress(&self) -> Option<(usize, usize)> {
        match self.screen {
            Screen::Question { step, .. } => Some((step + 1, self.questions.len())),
            _ => None,
        }
    }

    /// Animated progress-bar fill in `0.0..=1.0`.
    #[must_use]
    pub fn progress_ratio(&self) -> f32 {
        self.progress.ratio()
    }

    #[must_use]
    pub fn result_code(&self) -> Option<&str> {
        match &self.screen {
            Screen::Result { code } => Some(code),
            _ => None,
        }
    }

    #[must_use]
    pub fn result_profile(&self) -> Option<ResultProfile> {
        self.result_code().map(|code| self.results.lookup(code))
    }

    #[must_use]
    pub fn result_tally(&self) -> Option<&ScoreTally> {
        self.tally.as_ref()
    }

    #[must_use]
    pub fn share_url(&self) -> Option<String> {
        self.result_code()
            .map(|code| share_url(&self.settings.share_base_url, code))
    }

    #[must_use]
    pub fn share_payload(&self) -> Option<SharePayload> {
        let code = self.result_code()?;
        let profile = self.results.lookup(code);
        Some(SharePayload {
            title: format!("{code} - {}", profile.title),
            text: profile.description,
            url: share_url(&self.settings.share_base_url, code),
        })
    }

    #[must_use]
    pub fn result_card(&self) -> Option<String> {
        let code = self.result_code()?;
        let profile = self.results.lookup(code);
        let url = share_url(&self.settings.share_base_url, code);
        Some(render_card(code, &profile, self.tally.as_ref(), &url))
    }

    #[must_use]
    pub fn status_message(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    // ------------------------------------------------------------------
    // Flow
    // ------------------------------------------------------------------

    /// Home -> first question.
    pub fn start(&mut self) {
        if self.screen != Screen::Home {
            return;
        }
        self.go_to_step(0);
    }

    pub fn select_next(&mut self) {
        self.move_selection(1);
    }

    pub fn select_prev(&mut self) {
        self.move_selection(-1);
    }

    fn move_selection(&mut self, delta: isize) {
        let option_count = match self.current_question() {
            Some(question) => question.options.len(),
            None => return,
        };
        if let Screen::Question { selected, .. } = &mut self.screen {
            *selected = selected
                .saturating_add_signed(delta)
                .min(option_count.saturating_sub(1));
        }
    }

    /// Answer with the highlighted option.
    pub fn confirm_selection(&mut self) -> Option<TypeCode> {
        let selected = self.selected_option()?;
        self.answer(selected)
    }

    /// Record option `choice` for the current question and advance.
    ///
    /// Returns the derived code when this was the last question.
    pub fn answer(&mut self, choice: usize) -> Option<TypeCode> {
        let Screen::Question { step, .. } = self.screen else {
            return None;
        };
        let question = self.questions.get(step)?;
        let Some(letter) = question.letter_for(choice) else {
            tracing::debug!(step, choice, "Ignoring out-of-range choice");
            return None;
        };

        self.ledger.upsert(question.id, letter);

        if step + 1 < self.questions.len() {
            self.go_to_step(step + 1);
            return None;
        }

        let tally = ScoreTally::from_answers(self.ledger.snapshot(), self.questions.questions());
        let code = tally.code();
        tracing::info!(%code, answered = self.ledger.len(), "Quiz completed");
        self.tally = Some(tally);
        self.screen = Screen::Result {
            code: code.to_string(),
        };
        self.progress = ProgressEffect::settled(1.0);
        Some(code)
    }

    /// Previous question, or Home from the first. Answers are kept.
    pub fn back(&mut self) {
        match self.screen {
            Screen::Question { step: 0, .. } => {
                self.screen = Screen::Home;
                self.animate_progress_to(0.0);
            }
            Screen::Question { step, .. } => self.go_to_step(step - 1),
            _ => {}
        }
    }

    /// Clear every answer and return Home.
    pub fn retest(&mut self) {
        tracing::info!(answered = self.ledger.len(), "Restarting quiz");
        self.ledger.reset();
        self.tally = None;
        self.screen = Screen::Home;
        self.progress = ProgressEffect::settled(0.0);
        self.status = None;
    }

    /// Show the result page for a code from a shared link.
    ///
    /// The code is used verbatim; unknown or malformed codes show the
    /// placeholder profile.
    pub fn open_result(&mut self, raw: &str) {
        let code = raw.trim().to_string();
        if self.results.lookup(&code).is_unknown() {
            tracing::warn!(code = %code, "Opened result for unknown code");
        }
        self.tally = None;
        self.screen = Screen::Result { code };
        self.progress = ProgressEffect::settled(1.0);
    }

    fn go_to_step(&mut self, step: usize) {
        // Revisited questions start on the previously chosen option.
        let selected = self
            .questions
            .get(step)
            .and_then(|question| {
                let letter = self.ledger.get(question.id)?;
                question
                    .options
                    .iter()
                    .position(|option| option.value == letter)
            })
            .unwrap_or(0);
        self.screen = Screen::Question { step, selected };
        let total = self.questions.len().max(1) as f32;
        self.animate_progress_to((step + 1) as f32 / total);
    }

    fn animate_progress_to(&mut self, target: f32) {
        self.progress = if self.settings.ui_options.reduced_motion {
            ProgressEffect::settled(target)
        } else {
            ProgressEffect::new(self.progress.ratio(), target, PROGRESS_ANIMATION)
        };
    }

    // ------------------------------------------------------------------
    // Result actions
    // ------------------------------------------------------------------

    /// Write the result card into the configured export directory.
    pub fn export_card(&mut self) -> Result<PathBuf, ExportError> {
        let dir = self.settings.export_dir.clone();
        self.export_card_to(&dir)
    }

    pub fn export_card_to(&mut self, dir: &Path) -> Result<PathBuf, ExportError> {
        let (Some(code), Some(card)) = (self.result_code(), self.result_card()) else {
            return Err(ExportError::NoResult);
        };
        let path = dir.join(card_file_name(code));

        match snap_utils::atomic_write(&path, card.as_bytes()) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "Exported result card");
                self.push_status(format!("Saved to {}", path.display()), StatusKind::Info);
                Ok(path)
            }
            Err(source) => {
                tracing::warn!(path = %path.display(), "Failed to export result card: {source}");
                self.push_status("Failed to save the result card.", StatusKind::Error);
                Err(ExportError::Write { path, source })
            }
        }
    }

    /// Copy the share link.
    pub fn copy_link(&mut self, clipboard: &mut dyn Clipboard) {
        let Some(url) = self.share_url() else {
            return;
        };
        match clipboard.set_text(&url) {
            Ok(()) => self.push_status("Link copied!", StatusKind::Info),
            Err(err) => {
                tracing::error!("Failed to copy link: {err:#}");
                self.push_status("Could not copy the link.", StatusKind::Error);
            }
        }
    }

    /// Copy the share text; when the clipboard is unavailable, save the card instead.
    pub fn share(&mut self, clipboard: &mut dyn Clipboard) {
        let Some(payload) = self.share_payload() else {
            return;
        };
        if let Ok(json) = serde_json::to_string(&payload) {
            tracing::debug!(payload = %json, "Sharing result");
        }

        match clipboard.set_text(&payload.to_clipboard_text()) {
            Ok(()) => self.push_status("Share text copied!", StatusKind::Info),
            Err(err) => {
                tracing::warn!("Share failed, falling back to export: {err:#}");
                if let Ok(path) = self.export_card() {
                    self.push_status(
                        format!("Saved to {}. Upload it to share.", path.display()),
                        StatusKind::Info,
                    );
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Frame timing
    // ------------------------------------------------------------------

    pub fn tick(&mut self) {
        let elapsed = self.frame_elapsed();
        self.advance(elapsed, Instant::now());
    }

    /// Get elapsed time since last frame and update timing.
    pub fn frame_elapsed(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        elapsed
    }

    /// Advance animations by `delta` and drop status messages expired at `now`.
    pub fn advance(&mut self, delta: Duration, now: Instant) {
        self.progress.advance(delta);
        if self.status.as_ref().is_some_and(|status| status.is_expired(now)) {
            self.status = None;
        }
    }

    fn push_status(&mut self, text: impl Into<String>, kind: StatusKind) {
        self.status = Some(StatusMessage::new(text, kind, Instant::now()));
    }
}

#[cfg(test)]
mod tests;
