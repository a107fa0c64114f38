//! Embedded question and result catalogs.
//!
//! Both catalogs are compile-time assets. They are parsed from TOML and
//! validated when loaded, so the rest of the app can treat them as trusted.

use std::collections::{BTreeMap, HashSet};

use serde::Deserialize;
use thiserror::Error;

use snap_types::{
    Axis, Question, QuestionId, QuestionRecord, ResultProfile, TypeCode, TypeCodeParseError,
};

const QUESTIONS_TOML: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/questions.toml"));
const RESULTS_TOML: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/results.toml"));

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse {name} catalog: {source}")]
    Parse {
        name: &'static str,
        #[source]
        source: toml::de::Error,
    },
    #[error("question catalog is empty")]
    Empty,
    #[error("question {id} has {count} options, expected 2")]
    OptionCount { id: QuestionId, count: usize },
    #[error("duplicate question id {0}")]
    DuplicateId(QuestionId),
    #[error("question {id} has options outside axis {axis}")]
    OffAxisOption { id: QuestionId, axis: Axis },
    #[error("result key '{key}' is not a type code: {source}")]
    InvalidCode {
        key: String,
        #[source]
        source: TypeCodeParseError,
    },
}

#[derive(Deserialize)]
struct QuestionFile {
    questions: Vec<QuestionRecord>,
}

/// Ordered list of quiz questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    /// The catalog shipped with the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml(QUESTIONS_TOML)
    }

    pub fn from_toml(raw: &str) -> Result<Self, CatalogError> {
        let file: QuestionFile = toml::from_str(raw).map_err(|source| CatalogError::Parse {
            name: "question",
            source,
        })?;
        let questions = file
            .questions
            .into_iter()
            .map(|record| {
                Question::try_from(record).map_err(|err| CatalogError::OptionCount {
                    id: err.id,
                    count: err.count,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(questions)
    }

    /// Validate ids and option letters.
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        if questions.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !seen.insert(question.id) {
                return Err(CatalogError::DuplicateId(question.id));
            }
            if !question.is_well_formed() {
                return Err(CatalogError::OffAxisOption {
                    id: question.id,
                    axis: question.axis,
                });
            }
        }

        tracing::debug!(count = questions.len(), "Loaded question catalog");
        Ok(Self { questions })
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn get(&self, step: usize) -> Option<&Question> {
        self.questions.get(step)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a validated catalog; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Number of questions scoring `axis`.
    #[must_use]
    pub fn axis_count(&self, axis: Axis) -> usize {
        self.questions.iter().filter(|q| q.axis == axis).count()
    }
}

/// Result card content keyed by type code.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultCatalog {
    profiles: BTreeMap<TypeCode, ResultProfile>,
}

impl ResultCatalog {
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml(RESULTS_TOML)
    }

    pub fn from_toml(raw: &str) -> Result<Self, CatalogError> {
        let entries: BTreeMap<String, ResultProfile> =
            toml::from_str(raw).map_err(|source| CatalogError::Parse {
                name: "result",
                source,
            })?;

        let mut profiles = BTreeMap::new();
        for (key, profile) in entries {
            let code = key
                .parse::<TypeCode>()
                .map_err(|source| CatalogError::InvalidCode { key, source })?;
            profiles.insert(code, profile);
        }

        tracing::debug!(count = profiles.len(), "Loaded result catalog");
        Ok(Self { profiles })
    }

    /// Profile for the exact code string, or the unknown placeholder.
    ///
    /// Accepts anything a shared link might carry: lowercase, wrong length,
    /// or otherwise malformed keys all fall back.
    #[must_use]
    pub fn lookup(&self, raw: &str) -> ResultProfile {
        match raw.parse::<TypeCode>() {
            Ok(code) => self.lookup_code(code),
            Err(err) => {
                tracing::debug!(code = raw, "Unrecognized result code: {err}");
                ResultProfile::unknown()
            }
        }
    }

    #[must_use]
    pub fn lookup_code(&self, code: TypeCode) -> ResultProfile {
        self.profiles
            .get(&code)
            .cloned()
            .unwrap_or_else(ResultProfile::unknown)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
