//! Score tallying and type-code derivation.
//!
//! Both are pure: a tally is rebuilt from the ledger snapshot on every call
//! and never cached.

use snap_types::{Axis, Letter, Question, TypeCode};

use crate::ledger::LedgerSnapshot;

/// Per-letter answer counts for one derivation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreTally {
    counts: [u32; 8],
}

impl ScoreTally {
    /// Count the recorded letter of every catalog question that has an answer.
    ///
    /// Unanswered questions contribute nothing. Ledger entries whose id is not
    /// in `questions` are ignored.
    #[must_use]
    pub fn from_answers(answers: LedgerSnapshot<'_>, questions: &[Question]) -> Self {
        let mut tally = Self::default();
        for question in questions {
            if let Some(letter) = answers.get(question.id) {
                tally.counts[letter.index()] += 1;
            }
        }
        tally
    }

    #[must_use]
    pub fn count(&self, letter: Letter) -> u32 {
        self.counts[letter.index()]
    }

    /// Total answers counted on `axis`.
    #[must_use]
    pub fn axis_total(&self, axis: Axis) -> u32 {
        self.count(axis.primary()) + self.count(axis.secondary())
    }

    /// The winning letter on `axis`. Ties go to the primary letter.
    #[must_use]
    pub fn winner(&self, axis: Axis) -> Letter {
        if self.count(axis.primary()) >= self.count(axis.secondary()) {
            axis.primary()
        } else {
            axis.secondary()
        }
    }

    #[must_use]
    pub fn code(&self) -> TypeCode {
        TypeCode::from_primary_wins(|axis| self.winner(axis) == axis.primary())
    }
}

/// Derive the type code for `answers` over `questions`.
///
/// Total over any input: an empty ledger yields the all-primary code `ESTJ`.
#[must_use]
pub fn derive(answers: LedgerSnapshot<'_>, questions: &[Question]) -> TypeCode {
    let tally = ScoreTally::from_answers(answers, questions);
    let code = tally.code();
    tracing::debug!(
        answered = answers.len(),
        questions = questions.len(),
        %code,
        "Derived type code"
    );
    code
}
