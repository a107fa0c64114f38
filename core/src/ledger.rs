//! Per-session record of which letter was chosen for each question.

use snap_types::{Letter, QuestionId, TypeCode};

use crate::catalog::QuestionCatalog;
use crate::scoring::ScoreTally;

/// Insertion-ordered mapping from question id to the chosen letter.
///
/// At most one entry exists per id. Re-answering a question replaces its
/// letter in place, so the entry keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerLedger {
    entries: Vec<(QuestionId, Letter)>,
}

impl AnswerLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `letter` for `id`, discarding any previous answer for that id.
    pub fn upsert(&mut self, id: QuestionId, letter: Letter) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == id) {
            Some(entry) => {
                tracing::debug!(question = %id, from = %entry.1, to = %letter, "Answer replaced");
                entry.1 = letter;
            }
            None => self.entries.push((id, letter)),
        }
    }

    /// Drop every answer. The ledger compares equal to [`AnswerLedger::new`] afterwards.
    pub fn reset(&mut self) {
        self.entries = Vec::new();
    }

    #[must_use]
    pub fn snapshot(&self) -> LedgerSnapshot<'_> {
        LedgerSnapshot {
            entries: &self.entries,
        }
    }

    #[must_use]
    pub fn get(&self, id: QuestionId) -> Option<Letter> {
        self.snapshot().get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Derive the type code for the current answers against `catalog`.
    #[must_use]
    pub fn derive(&self, catalog: &QuestionCatalog) -> TypeCode {
        ScoreTally::from_answers(self.snapshot(), catalog.questions()).code()
    }
}

/// Read-only view of an [`AnswerLedger`].
#[derive(Debug, Clone, Copy)]
pub struct LedgerSnapshot<'a> {
    entries: &'a [(QuestionId, Letter)],
}

impl<'a> LedgerSnapshot<'a> {
    #[must_use]
    pub fn get(self, id: QuestionId) -> Option<Letter> {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == id)
            .map(|(_, letter)| *letter)
    }

    /// Entries in insertion order.
    pub fn iter(self) -> impl Iterator<Item = (QuestionId, Letter)> + 'a {
        self.entries.iter().copied()
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.entries.is_empty()
    }
}
