//! Catalog question types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Axis, Letter, QuestionId};

/// One selectable answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub text: String,
    pub value: Letter,
}

/// A two-choice question scoring a single axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuestionRecord")]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub axis: Axis,
    pub options: [QuestionOption; 2],
}

/// A question as written in a catalog file, before its option count is checked.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestionRecord {
    pub id: QuestionId,
    pub text: String,
    pub axis: Axis,
    pub options: Vec<QuestionOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("question {id} has {count} options, expected 2")]
pub struct OptionCountError {
    pub id: QuestionId,
    pub count: usize,
}

impl TryFrom<QuestionRecord> for Question {
    type Error = OptionCountError;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        let count = record.options.len();
        let options: [QuestionOption; 2] =
            record.options.try_into().map_err(|_| OptionCountError {
                id: record.id,
                count,
            })?;
        Ok(Self {
            id: record.id,
            text: record.text,
            axis: record.axis,
            options,
        })
    }
}

impl Question {
    /// Letter recorded when option `index` is chosen.
    #[must_use]
    pub fn letter_for(&self, index: usize) -> Option<Letter> {
        self.options.get(index).map(|option| option.value)
    }

    /// Both option values sit on this question's axis and differ.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        let [a, b] = &self.options;
        self.axis.contains(a.value) && self.axis.contains(b.value) && a.value != b.value
    }
}
